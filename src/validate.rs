/// Input validation for the create-user form
///
/// Pure checks over field values. Each check returns the new
/// annotation state for the field; the form state stores it and the
/// view renders the border color and error text from it.

/// Validation state of a single input
#[derive(Debug, Clone, PartialEq)]
pub enum FieldStatus {
    /// Not validated yet (no border tint, no message)
    Pristine,
    /// Last check passed (green border)
    Valid,
    /// Last check failed (red border plus the message below the input)
    Invalid(String),
}

impl Default for FieldStatus {
    fn default() -> Self {
        FieldStatus::Pristine
    }
}

impl FieldStatus {
    /// True when the field failed its last check
    pub fn is_invalid(&self) -> bool {
        matches!(self, FieldStatus::Invalid(_))
    }

    /// The error message, if any
    pub fn error(&self) -> Option<&str> {
        match self {
            FieldStatus::Invalid(msg) => Some(msg),
            _ => None,
        }
    }
}

// ========== Pure Predicates ==========

/// Whether a required value is actually filled in (whitespace doesn't count)
pub fn is_filled(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Permissive email shape check: something@something.something
///
/// Deliberately not RFC 5322. One '@', a non-empty local part, and a
/// domain with at least one dot that has characters on both sides.
/// Whitespace anywhere disqualifies.
pub fn is_valid_email(value: &str) -> bool {
    let mut parts = value.splitn(2, '@');
    let (local, domain) = match (parts.next(), parts.next()) {
        (Some(local), Some(domain)) => (local, domain),
        _ => return false,
    };
    if local.is_empty() || local.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    if domain.is_empty() || domain.contains('@') || domain.chars().any(|c| c.is_whitespace()) {
        return false;
    }
    // A dot with at least one character before and after it
    domain
        .match_indices('.')
        .any(|(i, _)| i > 0 && i + 1 < domain.len())
}

/// Password strength check: minimum length, at least one letter and
/// one digit
pub fn is_valid_password(value: &str, min_length: usize) -> bool {
    value.chars().count() >= min_length
        && value.chars().any(|c| c.is_ascii_alphabetic())
        && value.chars().any(|c| c.is_ascii_digit())
}

/// Strips everything a phone number can't contain, keeping digits,
/// '+', '(', ')', '-' and spaces. Formatting only: phone fields are
/// never validated and never block submission.
pub fn sanitize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || c.is_whitespace() || matches!(c, '+' | '(' | ')' | '-'))
        .collect()
}

// ========== Field Checks ==========

/// Check chain for a plain required input
pub fn check_required(value: &str) -> FieldStatus {
    if is_filled(value) {
        FieldStatus::Valid
    } else {
        FieldStatus::Invalid("This field is required".to_string())
    }
}

/// Check chain for the email input: required first, then shape.
/// The shape check takes the value as typed; padding around an
/// otherwise fine address fails it, since the raw value is what gets
/// posted to the server.
pub fn check_email(value: &str) -> FieldStatus {
    if !is_filled(value) {
        return FieldStatus::Invalid("This field is required".to_string());
    }
    if !is_valid_email(value) {
        return FieldStatus::Invalid("Please enter a valid email address".to_string());
    }
    FieldStatus::Valid
}

/// Check chain for the password input: required first, then strength
pub fn check_password(value: &str, min_length: usize) -> FieldStatus {
    if !is_filled(value) {
        return FieldStatus::Invalid("This field is required".to_string());
    }
    if !is_valid_password(value, min_length) {
        return FieldStatus::Invalid(format!(
            "Password must be at least {} characters, including letters and numbers",
            min_length
        ));
    }
    FieldStatus::Valid
}

/// Check chain for the confirmation input: must match the password
/// field's current value exactly
pub fn check_confirmation(value: &str, password: &str) -> FieldStatus {
    if value.is_empty() {
        return FieldStatus::Invalid("This field is required".to_string());
    }
    if value != password {
        return FieldStatus::Invalid("Passwords do not match".to_string());
    }
    FieldStatus::Valid
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_required_rejects_whitespace() {
        assert!(is_filled("alice"));
        assert!(is_filled("  a  "));
        assert!(!is_filled(""));
        assert!(!is_filled("   "));
        assert!(!is_filled("\t\n"));
    }

    #[test]
    fn test_email_shapes() {
        assert!(is_valid_email("a@b.c"));
        assert!(is_valid_email("maria.garcia@example.co.uk"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("a b@c.d"));
        assert!(!is_valid_email("@b.c"));
        assert!(!is_valid_email("a@.c"));
        assert!(!is_valid_email("a@b.c@d.e"));
        assert!(!is_valid_email("plainaddress"));
        assert!(!is_valid_email(" a@b.c "));
    }

    #[test]
    fn test_email_check_takes_the_value_as_typed() {
        // Padding fails the shape check, not the required check: the
        // raw value is what would be posted.
        assert_eq!(
            check_email(" admin@example.com "),
            FieldStatus::Invalid("Please enter a valid email address".to_string())
        );
        assert_eq!(check_email("admin@example.com"), FieldStatus::Valid);
    }

    #[test]
    fn test_password_strength() {
        assert!(is_valid_password("abc12345", 8));
        assert!(!is_valid_password("abcdefgh", 8)); // no digit
        assert!(!is_valid_password("1234567", 8)); // short and no letter
        assert!(!is_valid_password("12345678", 8)); // no letter
        assert!(is_valid_password("x1x1x1x1", 8));
    }

    #[test]
    fn test_password_message_names_minimum() {
        let status = check_password("short", 8);
        let msg = status.error().unwrap();
        assert!(msg.contains('8'), "message should carry the minimum: {msg}");
    }

    #[test]
    fn test_confirmation_matches_exactly() {
        assert_eq!(check_confirmation("abc12345", "abc12345"), FieldStatus::Valid);
        assert!(check_confirmation("abc12345", "abc12346").is_invalid());
        assert!(check_confirmation("", "abc12345").is_invalid());
    }

    #[test]
    fn test_phone_sanitization() {
        assert_eq!(sanitize_phone("+34 600-123-456"), "+34 600-123-456");
        assert_eq!(sanitize_phone("(555) 123x4567"), "(555) 1234567");
        assert_eq!(sanitize_phone("call me!"), " ");
        assert_eq!(sanitize_phone("abc"), "");
    }

    #[test]
    fn test_required_chain_runs_before_shape() {
        assert_eq!(
            check_email("   "),
            FieldStatus::Invalid("This field is required".to_string())
        );
        assert!(check_email("not-an-email").is_invalid());
        assert_eq!(check_email("admin@example.com"), FieldStatus::Valid);
    }
}
