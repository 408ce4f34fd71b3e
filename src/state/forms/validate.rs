//! Constraint evaluation and validation results
//!
//! Failures are data, not errors: nothing here returns `Err`. Each field
//! gets at most one reason and one message, chosen by fixed precedence:
//! type mismatch (e-mail) > pattern mismatch (phone) > value missing.

use super::field::{FieldKind, FormField, Validity};
use super::phone_mask::{is_complete_phone, PHONE_EXAMPLE};

pub const MSG_VALUE_MISSING: &str = "This field is required";
pub const MSG_EMAIL_MISMATCH: &str = "Enter a valid e-mail address, e.g. name@example.com";

/// Outcome for a single field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub is_valid: bool,
    pub reason: Validity,
    pub message: Option<String>,
}

impl FieldResult {
    fn valid() -> Self {
        Self {
            is_valid: true,
            reason: Validity::Valid,
            message: None,
        }
    }

    fn invalid(reason: Validity, message: String) -> Self {
        Self {
            is_valid: false,
            reason,
            message: Some(message),
        }
    }
}

/// Aggregated outcome for a whole form, in field declaration order.
#[derive(Debug, Clone, Default)]
pub struct ValidationResult {
    pub all_valid: bool,
    pub field_results: Vec<(String, FieldResult)>,
}

impl ValidationResult {
    pub fn get(&self, name: &str) -> Option<&FieldResult> {
        self.field_results
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, r)| r)
    }

    /// First invalid field, for focus placement on a failed submit.
    pub fn first_invalid(&self) -> Option<&str> {
        self.field_results
            .iter()
            .find(|(_, r)| !r.is_valid)
            .map(|(n, _)| n.as_str())
    }
}

/// Evaluate one field's declarative constraints against its current value.
///
/// Pattern constraints never fire on an empty value; emptiness is the
/// business of `required` alone. This matches the browser constraint
/// model the messages were written for.
pub fn check_field(field: &FormField) -> FieldResult {
    let value = field.value();

    if !value.is_empty() {
        match field.kind {
            FieldKind::Email if !is_valid_email(value) => {
                return FieldResult::invalid(Validity::TypeMismatch, MSG_EMAIL_MISMATCH.to_string());
            }
            FieldKind::Phone if !is_complete_phone(value) => {
                return FieldResult::invalid(
                    Validity::PatternMismatch,
                    format!("Enter a complete phone number, e.g. {PHONE_EXAMPLE}"),
                );
            }
            _ => {}
        }
    }

    if field.required && value.trim().is_empty() {
        return FieldResult::invalid(Validity::ValueMissing, MSG_VALUE_MISSING.to_string());
    }

    FieldResult::valid()
}

/// Shape check for e-mail addresses: one `@`, non-empty local part,
/// non-empty domain with a dot, no whitespace anywhere.
fn is_valid_email(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }
    let mut parts = value.splitn(2, '@');
    let local = parts.next().unwrap_or_default();
    let Some(domain) = parts.next() else {
        return false;
    };
    !local.is_empty()
        && !domain.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
