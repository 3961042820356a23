use std::collections::BTreeMap;
use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use thiserror::Error;

static EMAIL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern is valid")
});

static PHONE_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?[1-9][0-9]{0,15}$").expect("phone pattern is valid")
});

/// A named text input tracked by a lead form.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Name,
    Email,
    Phone,
    Practice,
    Message,
}

impl Field {
    pub fn as_str(&self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Email => "email",
            Field::Phone => "phone",
            Field::Practice => "practice",
            Field::Message => "message",
        }
    }

    fn label(&self) -> &'static str {
        match self {
            Field::Name => "Name",
            Field::Email => "Email",
            Field::Phone => "Phone",
            Field::Practice => "Practice name",
            Field::Message => "Message",
        }
    }

    fn format_noun(&self) -> &'static str {
        match self {
            Field::Email => "email address",
            Field::Phone => "phone number",
            Field::Name => "name",
            Field::Practice => "practice name",
            Field::Message => "message",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Per-field validation failure. The `Display` output is the message shown
/// next to the input.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("{} is required", .0.label())]
    MissingField(Field),
    #[error("Please enter a valid {}", .0.format_noun())]
    InvalidFormat(Field),
}

pub type FormValues = BTreeMap<Field, String>;
pub type FormErrors = BTreeMap<Field, FieldError>;

/// Runs every rule that applies to the fields present in `values`.
///
/// Only failing fields appear in the result. Fields without a rule
/// (practice, message) never fail.
pub fn validate(values: &FormValues) -> FormErrors {
    let mut errors = FormErrors::new();

    for (field, value) in values {
        let result = match field {
            Field::Name => check_name(value),
            Field::Email => check_email(value),
            Field::Phone => check_phone(value),
            Field::Practice | Field::Message => Ok(()),
        };
        if let Err(error) = result {
            errors.insert(*field, error);
        }
    }

    errors
}

fn check_name(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MissingField(Field::Name));
    }
    Ok(())
}

fn check_email(value: &str) -> Result<(), FieldError> {
    if value.trim().is_empty() {
        return Err(FieldError::MissingField(Field::Email));
    }
    if !EMAIL_PATTERN.is_match(value) {
        return Err(FieldError::InvalidFormat(Field::Email));
    }
    Ok(())
}

fn check_phone(value: &str) -> Result<(), FieldError> {
    let digits = strip_phone_punctuation(value);
    if digits.is_empty() {
        return Ok(());
    }
    if !PHONE_PATTERN.is_match(&digits) {
        return Err(FieldError::InvalidFormat(Field::Phone));
    }
    Ok(())
}

fn strip_phone_punctuation(value: &str) -> String {
    value
        .chars()
        .filter(|c| !c.is_whitespace() && !matches!(c, '-' | '(' | ')'))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn values(pairs: &[(Field, &str)]) -> FormValues {
        pairs.iter().map(|(f, v)| (*f, v.to_string())).collect()
    }

    fn messages(errors: &FormErrors) -> BTreeMap<Field, String> {
        errors.iter().map(|(f, e)| (*f, e.to_string())).collect()
    }

    #[test]
    fn empty_required_fields_are_reported() {
        let errors = validate(&values(&[
            (Field::Name, ""),
            (Field::Email, ""),
            (Field::Phone, ""),
        ]));

        assert_eq!(
            messages(&errors),
            BTreeMap::from([
                (Field::Name, "Name is required".to_string()),
                (Field::Email, "Email is required".to_string()),
            ])
        );
        assert_eq!(errors[&Field::Name], FieldError::MissingField(Field::Name));
    }

    #[test]
    fn whitespace_only_counts_as_missing() {
        let errors = validate(&values(&[(Field::Name, "   "), (Field::Email, "\t ")]));
        assert_eq!(errors[&Field::Name], FieldError::MissingField(Field::Name));
        assert_eq!(errors[&Field::Email], FieldError::MissingField(Field::Email));
    }

    #[test]
    fn malformed_email() {
        let errors = validate(&values(&[
            (Field::Name, "Jane"),
            (Field::Email, "not-an-email"),
            (Field::Phone, ""),
        ]));

        assert_eq!(
            messages(&errors),
            BTreeMap::from([(Field::Email, "Please enter a valid email address".to_string())])
        );
    }

    #[test]
    fn email_shapes() {
        for ok in ["jane@example.com", "a@b.c", "dr.smith@clinic.vet.co"] {
            assert!(check_email(ok).is_ok(), "{ok} should pass");
        }
        for bad in ["jane@example", "@example.com", "jane@.com.", "jane doe@example.com", "jane@@example.com", " jane@example.com"] {
            assert_eq!(
                check_email(bad),
                Err(FieldError::InvalidFormat(Field::Email)),
                "{bad} should fail"
            );
        }
    }

    #[test]
    fn malformed_phone() {
        let errors = validate(&values(&[
            (Field::Name, "Jane"),
            (Field::Email, "jane@example.com"),
            (Field::Phone, "abc"),
        ]));

        assert_eq!(
            messages(&errors),
            BTreeMap::from([(Field::Phone, "Please enter a valid phone number".to_string())])
        );
    }

    #[test]
    fn fully_valid_form_has_no_errors() {
        let errors = validate(&values(&[
            (Field::Name, "Jane"),
            (Field::Email, "jane@example.com"),
            (Field::Phone, "+15551234567"),
        ]));
        assert!(errors.is_empty());
    }

    #[test]
    fn phone_punctuation_is_ignored() {
        assert!(check_phone("(555) 123-4567").is_ok());
        assert!(check_phone("+1 555 123 4567").is_ok());
        assert!(check_phone(" ( ) - ").is_ok());
        assert_eq!(check_phone("0555123456"), Err(FieldError::InvalidFormat(Field::Phone)));
        assert_eq!(
            check_phone("+12345678901234567"),
            Err(FieldError::InvalidFormat(Field::Phone))
        );
        assert_eq!(check_phone("555.123.4567"), Err(FieldError::InvalidFormat(Field::Phone)));
    }

    #[test]
    fn unvalidated_fields_never_fail_and_absent_fields_are_skipped() {
        let errors = validate(&values(&[(Field::Practice, ""), (Field::Message, "")]));
        assert!(errors.is_empty());
    }
}
