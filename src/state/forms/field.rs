//! Form field value objects and declarative constraints

use super::phone_mask::mask_phone_input;

/// Declared kind of a field, mirroring the constraint set the form
/// validates against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Plain single-line text
    Text,
    /// E-mail address (shape-checked)
    Email,
    /// Phone number (masked while typing, completeness-checked)
    Phone,
    /// Multi-line free text
    FreeText,
}

/// Validity of a field, recomputed from the current value on every
/// input and submit. Never cached across edits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Validity {
    #[default]
    Valid,
    /// Required field left empty
    ValueMissing,
    /// Value does not have the shape its kind demands (e-mail)
    TypeMismatch,
    /// Value does not satisfy the declared pattern (phone completeness)
    PatternMismatch,
}

impl Validity {
    pub fn is_valid(&self) -> bool {
        matches!(self, Validity::Valid)
    }
}

/// A single form field with its configuration, current value, and the
/// error annotation attached by the last validation pass.
#[derive(Debug, Clone)]
pub struct FormField {
    pub name: String,
    pub label: String,
    pub kind: FieldKind,
    pub required: bool,
    value: String,
    /// Inspectable invalid flag, set by validation and cleared on reset
    pub invalid: bool,
    /// Human-readable message attached by validation (at most one)
    pub message: Option<String>,
}

impl FormField {
    pub fn new(name: &str, label: &str, kind: FieldKind, required: bool) -> Self {
        Self {
            name: name.to_string(),
            label: label.to_string(),
            kind,
            required,
            value: String::new(),
            invalid: false,
            message: None,
        }
    }

    pub fn text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Text, required)
    }

    pub fn email(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Email, required)
    }

    pub fn phone(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::Phone, required)
    }

    pub fn free_text(name: &str, label: &str, required: bool) -> Self {
        Self::new(name, label, FieldKind::FreeText, required)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn set_value(&mut self, value: String) {
        self.value = value;
        if self.kind == FieldKind::Phone {
            self.value = mask_phone_input(&self.value);
        }
    }

    pub fn is_multiline(&self) -> bool {
        self.kind == FieldKind::FreeText
    }

    /// Append a typed character. Phone fields are re-masked after every
    /// keystroke so the stored value is always a canonical prefix.
    pub fn push_char(&mut self, c: char) {
        self.value.push(c);
        if self.kind == FieldKind::Phone {
            self.value = mask_phone_input(&self.value);
        }
    }

    /// Remove the last character. For phone fields this drops the last
    /// digit and re-masks, so backspace never strands punctuation.
    pub fn pop_char(&mut self) {
        if self.kind == FieldKind::Phone {
            let mut digits: String = self.value.chars().filter(char::is_ascii_digit).collect();
            digits.pop();
            self.value = mask_phone_input(&digits);
        } else {
            self.value.pop();
        }
    }

    /// Insert a newline (free-text fields only; no-op elsewhere).
    pub fn push_newline(&mut self) {
        if self.kind == FieldKind::FreeText {
            self.value.push('\n');
        }
    }

    /// Clear the value and any error annotation.
    pub fn clear(&mut self) {
        self.value.clear();
        self.clear_annotation();
    }

    /// Drop the error annotation without touching the value.
    pub fn clear_annotation(&mut self) {
        self.invalid = false;
        self.message = None;
    }

    /// Attach a validation outcome to the field.
    pub fn annotate(&mut self, validity: Validity, message: Option<String>) {
        self.invalid = !validity.is_valid();
        self.message = message;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_field_is_clean() {
        let field = FormField::text("name", "Name", true);
        assert_eq!(field.value(), "");
        assert!(!field.invalid);
        assert!(field.message.is_none());
    }

    #[test]
    fn test_push_and_pop_text() {
        let mut field = FormField::text("name", "Name", true);
        field.push_char('A');
        field.push_char('n');
        assert_eq!(field.value(), "An");
        field.pop_char();
        assert_eq!(field.value(), "A");
    }

    #[test]
    fn test_phone_field_masks_on_input() {
        let mut field = FormField::phone("phone", "Phone", true);
        for c in "8900".chars() {
            field.push_char(c);
        }
        assert_eq!(field.value(), "+7 (900");
        field.push_char('1');
        assert_eq!(field.value(), "+7 (900) 1");
    }

    #[test]
    fn test_phone_backspace_drops_one_digit() {
        let mut field = FormField::phone("phone", "Phone", true);
        field.set_value("89001234567".to_string());
        assert_eq!(field.value(), "+7 (900) 123-45-67");
        field.pop_char();
        assert_eq!(field.value(), "+7 (900) 123-45-6");
        field.pop_char();
        assert_eq!(field.value(), "+7 (900) 123-45");
    }

    #[test]
    fn test_phone_non_digit_input_ignored_by_mask() {
        let mut field = FormField::phone("phone", "Phone", true);
        field.push_char('7');
        field.push_char('x');
        field.push_char('9');
        assert_eq!(field.value(), "+7 (9");
    }

    #[test]
    fn test_newline_only_in_free_text() {
        let mut message = FormField::free_text("message", "Message", false);
        message.push_newline();
        assert_eq!(message.value(), "\n");

        let mut name = FormField::text("name", "Name", true);
        name.push_newline();
        assert_eq!(name.value(), "");
    }

    #[test]
    fn test_clear_resets_value_and_annotation() {
        let mut field = FormField::email("email", "E-mail", true);
        field.set_value("broken".to_string());
        field.annotate(Validity::TypeMismatch, Some("bad".to_string()));
        assert!(field.invalid);
        field.clear();
        assert_eq!(field.value(), "");
        assert!(!field.invalid);
        assert!(field.message.is_none());
    }

    #[test]
    fn test_annotate_valid_clears_flag() {
        let mut field = FormField::text("name", "Name", true);
        field.annotate(Validity::ValueMissing, Some("required".to_string()));
        assert!(field.invalid);
        field.annotate(Validity::Valid, None);
        assert!(!field.invalid);
    }
}
