//! Reusable UI components

pub mod button;
mod dialog;

pub use button::{render_button, BUTTON_HEIGHT};
pub use dialog::{render_contact_dialog, render_success_dialog};
