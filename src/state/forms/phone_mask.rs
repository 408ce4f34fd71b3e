//! Live phone-number masking for Russian-style numbers

/// Canonical display format produced once all 11 digits are present.
pub const PHONE_EXAMPLE: &str = "+7 (900) 123-45-67";

/// Number of digits in a complete number, country code included.
pub const PHONE_DIGITS: usize = 11;

/// Reformat raw keyboard input into a `+7 (XXX) XXX-XX-XX` prefix.
///
/// The transform is stateless: it re-extracts digits from whatever is
/// currently in the field, so it can be re-applied after every keystroke,
/// including backspace over formatted punctuation. A leading `8` is folded
/// into `7` (local dialing convention). Input that does not look like a
/// Russian number (no leading 7 after folding) is passed through as bare
/// digits so the user is never fighting the mask.
pub fn mask_phone_input(raw: &str) -> String {
    let mut digits: Vec<u8> = raw
        .chars()
        .filter(char::is_ascii_digit)
        .map(|c| c as u8)
        .collect();

    if digits.first() == Some(&b'8') {
        digits[0] = b'7';
    }

    // Masking only engages for 7-prefixed numbers with at least one more digit.
    if digits.first() != Some(&b'7') || digits.len() <= 1 {
        return String::from_utf8(digits).unwrap_or_default();
    }

    digits.truncate(PHONE_DIGITS);

    // Digits are ASCII, so byte slicing is safe.
    fn seg(digits: &[u8], from: usize, to: usize) -> &str {
        let end = to.min(digits.len());
        std::str::from_utf8(&digits[from..end]).unwrap_or_default()
    }

    let mut out = String::with_capacity(PHONE_EXAMPLE.len());
    out.push_str("+7 (");
    out.push_str(seg(&digits, 1, 4));
    if digits.len() >= 5 {
        out.push_str(") ");
        out.push_str(seg(&digits, 4, 7));
    }
    if digits.len() >= 8 {
        out.push('-');
        out.push_str(seg(&digits, 7, 9));
    }
    if digits.len() >= 10 {
        out.push('-');
        out.push_str(seg(&digits, 9, 11));
    }
    out
}

/// Count the digits currently present in a (possibly formatted) value.
pub fn digit_count(value: &str) -> usize {
    value.chars().filter(char::is_ascii_digit).count()
}

/// A phone value is complete when it carries all 11 digits and is already
/// in canonical form (re-masking it is a no-op).
pub fn is_complete_phone(value: &str) -> bool {
    digit_count(value) == PHONE_DIGITS && mask_phone_input(value) == value
}
