//! Field validators
//!
//! Every validator receives the raw field text, trims it and answers with a
//! plain `bool`. `check_field` layers the required/format distinction on top
//! and picks the message shown under the field.

use super::error::FieldError;
use super::phone::COUNTRY_CODE;
use crate::state::FieldId;
use lazy_static::lazy_static;
use regex::Regex;
use serde::{Deserialize, Serialize};

lazy_static! {
    /// Plain ASCII letters and whitespace
    static ref ASCII_NAME_REGEX: Regex = Regex::new(r"^[A-Za-z\s]+$").unwrap();

    /// Latin-script letters (accented included) and whitespace
    static ref LATIN_NAME_REGEX: Regex = Regex::new(r"^[\p{Latin}\s]+$").unwrap();

    /// local@domain.tld shape only, not a full address grammar
    static ref EMAIL_REGEX: Regex = Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap();

    /// Canonical display shape produced by the phone formatter: +370 6 DD DDD DD
    static ref STRICT_PHONE_REGEX: Regex =
        Regex::new(r"^\+370 6 [0-9]{2} [0-9]{3} [0-9]{2}$").unwrap();
}

/// Minimum trimmed length of an address
pub const MIN_ADDRESS_LEN: usize = 5;

/// Which characters a name or surname may contain
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NamePolicy {
    /// ASCII letters and spaces, at least one character
    StrictAscii,
    /// Latin letters including accents and spaces, at least two characters
    #[default]
    ExtendedLetters,
}

/// How phone numbers are accepted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PhonePolicy {
    /// Any punctuation; 8 or 9 digits once the country code is removed
    Lenient,
    /// Live-masked input that must match `+370 6 DD DDD DD` exactly
    #[default]
    Strict,
}

impl PhonePolicy {
    /// Whether keystrokes are routed through the phone formatter
    pub fn masks_input(&self) -> bool {
        matches!(self, PhonePolicy::Strict)
    }
}

/// The active validation policies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ValidationRules {
    pub name: NamePolicy,
    pub phone: PhonePolicy,
}

pub fn validate_name(value: &str, policy: NamePolicy) -> bool {
    let value = value.trim();
    match policy {
        NamePolicy::StrictAscii => !value.is_empty() && ASCII_NAME_REGEX.is_match(value),
        NamePolicy::ExtendedLetters => {
            value.chars().count() > 1 && LATIN_NAME_REGEX.is_match(value)
        }
    }
}

pub fn validate_email(value: &str) -> bool {
    EMAIL_REGEX.is_match(value.trim())
}

pub fn validate_address(value: &str) -> bool {
    value.trim().chars().count() >= MIN_ADDRESS_LEN
}

pub fn validate_phone(value: &str, policy: PhonePolicy) -> bool {
    let value = value.trim();
    match policy {
        PhonePolicy::Strict => STRICT_PHONE_REGEX.is_match(value),
        PhonePolicy::Lenient => {
            let digits: String = value.chars().filter(char::is_ascii_digit).collect();
            let national = digits.strip_prefix(COUNTRY_CODE).unwrap_or(&digits);
            matches!(national.len(), 8 | 9)
        }
    }
}

/// Validate one field's raw text.
///
/// Rating fields always pass: a slider cannot hold an empty or
/// out-of-range value.
pub fn check_field(field: FieldId, raw: &str, rules: &ValidationRules) -> Result<(), FieldError> {
    if field.is_rating() {
        return Ok(());
    }

    if raw.trim().is_empty() {
        return Err(FieldError::Required(field.label()));
    }

    let (valid, message) = match field {
        FieldId::Name => (
            validate_name(raw, rules.name),
            "Name must contain only letters.",
        ),
        FieldId::Surname => (
            validate_name(raw, rules.name),
            "Surname must contain only letters.",
        ),
        FieldId::Email => (validate_email(raw), "Please enter a valid email."),
        FieldId::Phone => (
            validate_phone(raw, rules.phone),
            match rules.phone {
                PhonePolicy::Strict => "Enter a phone number as +370 6 XX XXX XX.",
                PhonePolicy::Lenient => {
                    "Enter a valid Lithuanian phone number (8 or 9 digits after +370)."
                }
            },
        ),
        FieldId::Address => (
            validate_address(raw),
            "Address must be at least 5 characters.",
        ),
        FieldId::Rating1 | FieldId::Rating2 | FieldId::Rating3 => (true, ""),
    };

    if valid {
        Ok(())
    } else {
        Err(FieldError::FormatInvalid(message))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    mod names {
        use super::*;

        #[test]
        fn test_extended_accepts_letters_and_spaces() {
            for name in ["Jonas", "Anna Marija", "Žemaitė", "Łukasz", "José", "Ål"] {
                assert!(
                    validate_name(name, NamePolicy::ExtendedLetters),
                    "expected {name:?} to pass"
                );
            }
        }

        #[test]
        fn test_extended_rejects_single_letter() {
            assert!(!validate_name("J", NamePolicy::ExtendedLetters));
            assert!(!validate_name("  J  ", NamePolicy::ExtendedLetters));
        }

        #[test]
        fn test_digits_and_symbols_rejected_by_both_policies() {
            for policy in [NamePolicy::StrictAscii, NamePolicy::ExtendedLetters] {
                for name in ["Jonas1", "Jo-nas", "Jonas!", "R2D2", "a@b"] {
                    assert!(!validate_name(name, policy), "{name:?} under {policy:?}");
                }
            }
        }

        #[test]
        fn test_strict_ascii_accepts_single_letter() {
            assert!(validate_name("J", NamePolicy::StrictAscii));
        }

        #[test]
        fn test_strict_ascii_rejects_accents() {
            assert!(!validate_name("Žemaitė", NamePolicy::StrictAscii));
        }

        #[test]
        fn test_empty_rejected() {
            assert!(!validate_name("", NamePolicy::StrictAscii));
            assert!(!validate_name("   ", NamePolicy::ExtendedLetters));
        }
    }

    mod emails {
        use super::*;

        #[test]
        fn test_shape() {
            assert!(validate_email("a@b.com"));
            assert!(validate_email("  first.last@mail.example.lt "));
            assert!(!validate_email("a@b"));
            assert!(!validate_email(""));
            assert!(!validate_email("a b@c.com"));
            assert!(!validate_email("a@@b.com"));
            assert!(!validate_email("@b.com"));
        }
    }

    mod addresses {
        use super::*;

        #[test]
        fn test_minimum_length() {
            assert!(!validate_address("abcd"));
            assert!(validate_address("abcde"));
            assert!(!validate_address("  abcd  "));
        }
    }

    mod phones {
        use super::*;

        #[test]
        fn test_strict_accepts_canonical_shape_only() {
            assert!(validate_phone("+370 6 12 345 67", PhonePolicy::Strict));
            assert!(!validate_phone("+370 612 345 67", PhonePolicy::Strict));
            assert!(!validate_phone("+370 6 12 34567", PhonePolicy::Strict));
            assert!(!validate_phone("+370 6 12 345 6", PhonePolicy::Strict));
            assert!(!validate_phone("+370 5 12 345 67", PhonePolicy::Strict));
            assert!(!validate_phone("370 6 12 345 67", PhonePolicy::Strict));
            assert!(!validate_phone("+370 6 12 345 678", PhonePolicy::Strict));
        }

        #[test]
        fn test_lenient_counts_national_digits() {
            assert!(validate_phone("+370 612 34567", PhonePolicy::Lenient));
            assert!(validate_phone("61234567", PhonePolicy::Lenient));
            assert!(validate_phone("861234567", PhonePolicy::Lenient));
            assert!(!validate_phone("6123456", PhonePolicy::Lenient));
            assert!(!validate_phone("+370 6123 456789", PhonePolicy::Lenient));
        }

        #[test]
        fn test_only_strict_masks_input() {
            assert!(PhonePolicy::Strict.masks_input());
            assert!(!PhonePolicy::Lenient.masks_input());
        }
    }

    mod check {
        use super::*;
        use pretty_assertions::assert_eq;

        #[test]
        fn test_empty_is_required_not_format() {
            let rules = ValidationRules::default();
            assert_eq!(
                check_field(FieldId::Email, "   ", &rules),
                Err(FieldError::Required("Email"))
            );
        }

        #[test]
        fn test_mismatch_is_format_invalid() {
            let rules = ValidationRules::default();
            assert_eq!(
                check_field(FieldId::Address, "abc", &rules),
                Err(FieldError::FormatInvalid(
                    "Address must be at least 5 characters."
                ))
            );
        }

        #[test]
        fn test_phone_message_follows_policy() {
            let lenient = ValidationRules {
                phone: PhonePolicy::Lenient,
                ..Default::default()
            };
            let err = check_field(FieldId::Phone, "12", &lenient).unwrap_err();
            assert!(err.to_string().contains("8 or 9 digits"));
        }

        #[test]
        fn test_ratings_always_pass() {
            let rules = ValidationRules::default();
            assert!(check_field(FieldId::Rating1, "", &rules).is_ok());
        }

        #[test]
        fn test_valid_values_pass() {
            let rules = ValidationRules::default();
            assert!(check_field(FieldId::Name, "Jonas", &rules).is_ok());
            assert!(check_field(FieldId::Phone, "+370 6 12 345 67", &rules).is_ok());
        }
    }
}
