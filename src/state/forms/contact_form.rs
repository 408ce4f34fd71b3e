//! Contact form: field set, focus traversal, validation pass

use super::field::FormField;
use super::validate::{check_field, ValidationResult};

/// Buttons on the dialog's action row.
pub const BUTTON_CANCEL: usize = 0;
pub const BUTTON_SEND: usize = 1;
const BUTTON_COUNT: usize = 2;

/// One contact form. The field set is constructor data so page variants
/// with different fields share this single implementation.
#[derive(Debug, Clone)]
pub struct ContactForm {
    fields: Vec<FormField>,
    active_field_index: usize,
    /// Selected button when the action row is active (0=Cancel, 1=Send)
    pub selected_button: usize,
}

impl ContactForm {
    /// The default field set of the contact dialog.
    pub fn new() -> Self {
        Self::with_fields(vec![
            FormField::text("name", "Name", true),
            FormField::email("email", "E-mail", true),
            FormField::phone("phone", "Phone", true),
            FormField::free_text("message", "Message", false),
        ])
    }

    pub fn with_fields(fields: Vec<FormField>) -> Self {
        Self {
            fields,
            active_field_index: 0,
            selected_button: BUTTON_SEND,
        }
    }

    pub fn field_count(&self) -> usize {
        self.fields.len()
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn active_field(&self) -> usize {
        self.active_field_index
    }

    /// Traversal positions: every field plus the trailing buttons row.
    fn position_count(&self) -> usize {
        self.fields.len() + 1
    }

    pub fn is_buttons_row_active(&self) -> bool {
        self.active_field_index == self.fields.len()
    }

    pub fn set_active_field(&mut self, index: usize) {
        self.active_field_index = index.min(self.fields.len());
    }

    pub fn next_field(&mut self) {
        self.active_field_index = (self.active_field_index + 1) % self.position_count();
    }

    pub fn prev_field(&mut self) {
        if self.active_field_index == 0 {
            self.active_field_index = self.position_count() - 1;
        } else {
            self.active_field_index -= 1;
        }
    }

    pub fn next_button(&mut self) {
        self.selected_button = (self.selected_button + 1) % BUTTON_COUNT;
    }

    pub fn prev_button(&mut self) {
        if self.selected_button == 0 {
            self.selected_button = BUTTON_COUNT - 1;
        } else {
            self.selected_button -= 1;
        }
    }

    pub fn get_field(&self, index: usize) -> Option<&FormField> {
        self.fields.get(index)
    }

    pub fn active_field_mut(&mut self) -> Option<&mut FormField> {
        self.fields.get_mut(self.active_field_index)
    }

    pub fn is_active_field_multiline(&self) -> bool {
        self.get_field(self.active_field_index)
            .is_some_and(FormField::is_multiline)
    }

    /// Run the constraint pass over every field, annotating each one and
    /// aggregating the outcome. Valid fields get their annotations
    /// cleared, so the result always reflects the current values.
    pub fn validate(&mut self) -> ValidationResult {
        let mut field_results = Vec::with_capacity(self.fields.len());
        let mut all_valid = true;
        for field in &mut self.fields {
            let result = check_field(field);
            field.annotate(result.reason, result.message.clone());
            all_valid &= result.is_valid;
            field_results.push((field.name.clone(), result));
        }
        ValidationResult {
            all_valid,
            field_results,
        }
    }

    /// Recompute the active field's annotation after an edit. Only fields
    /// already carrying an annotation are refreshed, so errors clear as
    /// the user corrects them without flagging untouched fields early.
    pub fn refresh_active_annotation(&mut self) {
        if let Some(field) = self.fields.get_mut(self.active_field_index) {
            if field.invalid {
                let result = check_field(field);
                field.annotate(result.reason, result.message);
            }
        }
    }

    /// Clear every value and every annotation.
    pub fn clear_all(&mut self) {
        for field in &mut self.fields {
            field.clear();
        }
        self.active_field_index = 0;
        self.selected_button = BUTTON_SEND;
    }

    /// True if any field currently carries an error annotation.
    pub fn has_errors(&self) -> bool {
        self.fields.iter().any(|f| f.invalid)
    }
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}
