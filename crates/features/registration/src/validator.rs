//! Local form rules.
//!
//! Rules run in a fixed order and the first failure wins, since the page only
//! shows one message at a time.

use p2h_domain::form::RegistrationForm;
use regex::Regex;
use std::sync::LazyLock;

const MIN_NAME_LEN: usize = 2;

// `\s` here is Unicode `White_Space`; web patterns also count U+FEFF but not U+0085.
static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[^\s\x{FEFF}@--\x{85}]+@[^\s\x{FEFF}@--\x{85}]+\.[^\s\x{FEFF}@--\x{85}]+$")
        .expect("email pattern should compile")
});

static PHONE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[0-9+\-()\s\x{FEFF}--\x{85}]{8,15}$").expect("phone pattern should compile")
});

/// The first rule a form breaks. `Display` is the message shown to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, thiserror::Error)]
pub enum ValidationError {
    #[error("Please enter your full name.")]
    FullName,
    #[error("Please enter a valid email.")]
    Email,
    #[error("Please enter a valid phone number.")]
    Phone,
    #[error("Please accept the terms to continue.")]
    Consent,
}

/// Checks name, email, phone and consent, in that order.
///
/// # Errors
/// Returns the [`ValidationError`] of the first rule the form breaks.
pub fn validate(form: &RegistrationForm) -> Result<(), ValidationError> {
    if !is_valid_name(&form.full_name) {
        return Err(ValidationError::FullName);
    }
    if !is_valid_email(&form.email) {
        return Err(ValidationError::Email);
    }
    if !is_valid_phone(&form.phone) {
        return Err(ValidationError::Phone);
    }
    if !form.consent {
        return Err(ValidationError::Consent);
    }
    Ok(())
}

/// At least two UTF-16 code units once surrounding whitespace is removed.
#[must_use]
pub fn is_valid_name(name: &str) -> bool {
    name.trim_matches(is_web_whitespace).encode_utf16().count() >= MIN_NAME_LEN
}

/// `local@domain.tld` shape: exactly one `@`, no whitespace, and a `.` with at
/// least one character on each side somewhere in the domain.
#[must_use]
pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

/// 8 to 15 characters, each a digit, `+`, `-`, `(`, `)` or whitespace.
#[must_use]
pub fn is_valid_phone(phone: &str) -> bool {
    PHONE_PATTERN.is_match(phone)
}

/// The whitespace set of web regular expressions and `String.prototype.trim`.
///
/// Unicode `White_Space` minus U+0085, plus the byte order mark.
fn is_web_whitespace(c: char) -> bool {
    (c.is_whitespace() && c != '\u{85}') || c == '\u{feff}'
}

#[cfg(test)]
mod tests {
    use super::*;
    use p2h_domain::form::FieldUpdate;

    fn valid_form() -> RegistrationForm {
        RegistrationForm::default()
            .with(FieldUpdate::FullName("Jane Doe".to_owned()))
            .with(FieldUpdate::Email("jane@x.com".to_owned()))
            .with(FieldUpdate::Phone("+1-555-0100".to_owned()))
            .with(FieldUpdate::Consent(true))
    }

    #[test]
    fn reference_form_passes() {
        assert_eq!(validate(&valid_form()), Ok(()));
    }

    #[test]
    fn messages_match_the_page() {
        assert_eq!(ValidationError::FullName.to_string(), "Please enter your full name.");
        assert_eq!(ValidationError::Email.to_string(), "Please enter a valid email.");
        assert_eq!(ValidationError::Phone.to_string(), "Please enter a valid phone number.");
        assert_eq!(ValidationError::Consent.to_string(), "Please accept the terms to continue.");
    }

    #[test]
    fn first_failing_rule_wins() {
        let form = RegistrationForm::default().with(FieldUpdate::Consent(false));
        assert_eq!(validate(&form), Err(ValidationError::FullName));

        let form = valid_form().with(FieldUpdate::Email("nope".to_owned())).with(FieldUpdate::Phone("x".to_owned()));
        assert_eq!(validate(&form), Err(ValidationError::Email));

        let form = valid_form().with(FieldUpdate::Phone("12".to_owned())).with(FieldUpdate::Consent(false));
        assert_eq!(validate(&form), Err(ValidationError::Phone));

        let form = valid_form().with(FieldUpdate::Consent(false));
        assert_eq!(validate(&form), Err(ValidationError::Consent));
    }

    #[test]
    fn names() {
        assert!(is_valid_name("Al"));
        assert!(is_valid_name("  Jo  "));
        assert!(!is_valid_name(" J "));
        assert!(!is_valid_name("\u{a0}J\u{feff}"));
        assert!(!is_valid_name(""));
    }

    #[test]
    fn emails() {
        assert!(is_valid_email("jane@x.com"));
        assert!(is_valid_email("a.b@c.d.e"));
        assert!(is_valid_email("a@b..c"));
        assert!(!is_valid_email("jane.x.com"));
        assert!(!is_valid_email("jane@xcom"));
        assert!(!is_valid_email("jane@.com"));
        assert!(!is_valid_email("jane@x."));
        assert!(!is_valid_email("@x.com"));
        assert!(!is_valid_email("ja ne@x.com"));
        assert!(!is_valid_email("jane@x@y.com"));
        assert!(!is_valid_email("jane@x.com\u{feff}"));
        assert!(!is_valid_email("jane@x.com\n"));
        assert!(is_valid_email("jane\u{85}@x.com"));
    }

    #[test]
    fn phones() {
        assert!(is_valid_phone("+1-555-0100"));
        assert!(is_valid_phone("(022) 5550 100"));
        assert!(is_valid_phone("12345678"));
        assert!(is_valid_phone("123456789012345"));
        assert!(!is_valid_phone("1234567"));
        assert!(!is_valid_phone("1234567890123456"));
        assert!(!is_valid_phone("555-0100 ext 1"));
        assert!(!is_valid_phone("１２３４５６７８"));
        assert!(is_valid_phone("555\u{a0}0100\u{feff}"));
        assert!(!is_valid_phone("555\u{85}01000"));
    }
}
