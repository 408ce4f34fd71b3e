//! Dialog components for TUI

pub mod base;
mod contact_dialog;
mod success_dialog;

pub use contact_dialog::render_contact_dialog;
pub use success_dialog::render_success_dialog;
