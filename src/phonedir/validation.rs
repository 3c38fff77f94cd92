//! Field syntax rules.
//!
//! Two roles exist:
//!
//! - **Name-like** (`last_name`, `first_name`, `middle_name`, `organization`):
//!   Latin or Cyrillic letters and whitespace, optionally followed by a single
//!   hyphen and a second such run. The whole value must match.
//! - **Phone-like** (`work_phone`, `personal_phone`): optional `+` and country
//!   code, optional parenthesized 3-digit area code, a 3-digit exchange and a
//!   4 to 6 digit subscriber number, separated by nothing, `-`, whitespace or
//!   `.`. Only the start of the value is anchored, so `495-555-6666 ext` is
//!   accepted while names must match in full.
//!
//! Values are never trimmed or case-folded.

use crate::error::FieldError;
use crate::model::Field;
use once_cell::sync::Lazy;
use regex::Regex;

pub const NAME_REASON: &str = "Invalid data. Please enter a valid data";
pub const PHONE_REASON: &str = "Invalid phone number";

static NAME_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[a-zA-Zа-яА-Я\s]+(?:-[a-zA-Zа-яА-Я\s]+)?$").expect("valid name regex")
});

static PHONE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^\+?(?:[0-9]{1,3}[-\s.]?)?\(?[0-9]{3}\)?[-\s.]?[0-9]{3}[-\s.]?[0-9]{4,6}")
        .expect("valid phone regex")
});

/// Which pattern a field is checked against.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRole {
    Name,
    Phone,
}

impl FieldRole {
    pub fn is_valid(self, value: &str) -> bool {
        match self {
            FieldRole::Name => NAME_RE.is_match(value),
            FieldRole::Phone => PHONE_RE.is_match(value),
        }
    }

    pub fn reason(self) -> &'static str {
        match self {
            FieldRole::Name => NAME_REASON,
            FieldRole::Phone => PHONE_REASON,
        }
    }
}

/// Checks `value` against the pattern of `field`'s role.
///
/// Returns the value untouched on success.
pub fn validate(field: Field, value: &str) -> Result<&str, FieldError> {
    let role = field.role();
    if role.is_valid(value) {
        Ok(value)
    } else {
        Err(FieldError {
            field,
            value: value.to_string(),
            reason: role.reason(),
        })
    }
}
