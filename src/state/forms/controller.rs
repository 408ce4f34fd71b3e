//! Contact dialog lifecycle: open, edit, validate, submit, close
//!
//! The dialog owns its form and runs the whole cycle as plain method
//! calls returning typed results, so none of it needs a terminal to be
//! exercised. Rendering and key wiring live in `ui` and `app`.

use chrono::{DateTime, Utc};
use serde::Serialize;

use super::contact_form::ContactForm;
use super::validate::ValidationResult;
use crate::state::PageFocus;

/// Why the dialog was dismissed. Recorded for caller inspection only;
/// the close path itself does not branch on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CloseReason {
    Cancel,
    Success,
}

/// Field values captured at the moment of a successful submit, in field
/// declaration order. Handed to the caller and never retained here.
#[derive(Debug, Clone, Serialize)]
pub struct FormSnapshot {
    pub captured_at: DateTime<Utc>,
    pub values: Vec<(String, String)>,
}

impl FormSnapshot {
    pub fn get(&self, name: &str) -> Option<&str> {
        self.values
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    pub fn field_names(&self) -> Vec<&str> {
        self.values.iter().map(|(n, _)| n.as_str()).collect()
    }
}

/// The modal contact dialog and its state machine:
/// `Closed → Open → {Open-with-errors → Open} → Closed(Success|Cancel)`.
#[derive(Debug, Clone)]
pub struct ContactDialog {
    pub form: ContactForm,
    open: bool,
    /// Page element that had focus when the dialog was opened
    last_focused: Option<PageFocus>,
    last_close_reason: Option<CloseReason>,
}

impl ContactDialog {
    pub fn new() -> Self {
        Self::with_form(ContactForm::new())
    }

    /// Build a dialog around a custom field set.
    pub fn with_form(form: ContactForm) -> Self {
        Self {
            form,
            open: false,
            last_focused: None,
            last_close_reason: None,
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn close_reason(&self) -> Option<CloseReason> {
        self.last_close_reason
    }

    /// Focus captured at the most recent `open`, for restoration after
    /// any close. Kept until the next `open` so the caller can read it
    /// whenever the transition is observed.
    pub fn restored_focus(&self) -> Option<PageFocus> {
        self.last_focused
    }

    /// Present the dialog: capture the page focus and move input focus
    /// to the first field.
    pub fn open(&mut self, focused: PageFocus) {
        tracing::debug!(?focused, "opening contact dialog");
        self.last_focused = Some(focused);
        self.last_close_reason = None;
        self.form.set_active_field(0);
        self.open = true;
    }

    /// Dismiss the dialog, clearing all values and annotations. No data
    /// survives a terminal transition.
    pub fn close(&mut self, reason: CloseReason) {
        tracing::debug!(?reason, "closing contact dialog");
        self.form.clear_all();
        self.last_close_reason = Some(reason);
        self.open = false;
    }

    /// Validate and either surface field errors (dialog stays open, focus
    /// jumps to the first offender) or capture a snapshot and close with
    /// reason `Success`.
    pub fn submit(&mut self) -> Result<FormSnapshot, ValidationResult> {
        let result = self.form.validate();
        if !result.all_valid {
            if let Some(name) = result.first_invalid() {
                if let Some(index) = self.form.fields().iter().position(|f| f.name == name) {
                    self.form.set_active_field(index);
                }
            }
            tracing::debug!(
                invalid = result.field_results.iter().filter(|(_, r)| !r.is_valid).count(),
                "contact form failed validation"
            );
            return Err(result);
        }

        let snapshot = FormSnapshot {
            captured_at: Utc::now(),
            values: self
                .form
                .fields()
                .iter()
                .map(|f| (f.name.clone(), f.value().to_string()))
                .collect(),
        };
        tracing::info!(fields = snapshot.values.len(), "contact form submitted");
        self.close(CloseReason::Success);
        Ok(snapshot)
    }
}

impl Default for ContactDialog {
    fn default() -> Self {
        Self::new()
    }
}
