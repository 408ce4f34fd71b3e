//! Form domain layer
//!
//! Everything here is plain data and method calls; no terminal or event
//! loop is needed to drive a form through its whole lifecycle.

#![allow(dead_code)]

pub mod field;
mod contact_form;
mod controller;
mod phone_mask;
mod validate;

pub use contact_form::{ContactForm, BUTTON_CANCEL, BUTTON_SEND};
pub use controller::{CloseReason, ContactDialog, FormSnapshot};
pub use field::{FieldKind, FormField, Validity};
pub use phone_mask::{mask_phone_input, PHONE_EXAMPLE};
pub use validate::{check_field, FieldResult, ValidationResult};
