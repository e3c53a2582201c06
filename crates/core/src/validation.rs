//! Input validation for the lookup and personal-info forms.
//!
//! Rules are applied in precedence order and the first failing rule wins:
//! 1. empty or absent values fail with [`ValidationError::MissingField`];
//! 2. numeric fields must consist only of ASCII digits ([`ValidationError::NotNumeric`]);
//! 3. postcodes must have at least [`MIN_POSTCODE_LEN`] digits ([`ValidationError::TooShort`]).

use crate::constants::MIN_POSTCODE_LEN;
use crate::ValidationError;
use std::fmt;

/// The role a raw string plays in a form, which decides the rules applied to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldRole {
    Postcode,
    StreetNumber,
    FirstName,
    LastName,
}

impl FieldRole {
    /// Human-readable field name used in error messages.
    pub fn display_name(self) -> &'static str {
        match self {
            FieldRole::Postcode => "Postcode",
            FieldRole::StreetNumber => "Street Number",
            FieldRole::FirstName => "First name",
            FieldRole::LastName => "Last name",
        }
    }

    fn is_numeric(self) -> bool {
        matches!(self, FieldRole::Postcode | FieldRole::StreetNumber)
    }
}

impl fmt::Display for FieldRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Returns true when `value` is non-empty and every character is an ASCII digit.
pub fn is_strictly_numeric(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Validates a single raw form value for the given role.
///
/// `None` is treated the same as an empty string.
///
/// # Errors
///
/// Returns the first failing rule as a [`ValidationError`].
pub fn validate_field(role: FieldRole, value: Option<&str>) -> Result<(), ValidationError> {
    let value = value.unwrap_or_default();

    if value.is_empty() {
        return Err(ValidationError::MissingField(role));
    }

    if role.is_numeric() && !is_strictly_numeric(value) {
        return Err(ValidationError::NotNumeric(role));
    }

    if role == FieldRole::Postcode && value.len() < MIN_POSTCODE_LEN {
        return Err(ValidationError::TooShort);
    }

    Ok(())
}

/// Validates a lookup request: the postcode first, then the street number.
pub fn validate_lookup(
    postcode: Option<&str>,
    street_number: Option<&str>,
) -> Result<(), ValidationError> {
    validate_field(FieldRole::Postcode, postcode)?;
    validate_field(FieldRole::StreetNumber, street_number)
}

/// Personal details merged into a candidate when it is committed to the book.
///
/// Both names are trimmed and guaranteed non-empty once constructed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PersonalInfo {
    first_name: String,
    last_name: String,
}

impl PersonalInfo {
    /// Builds `PersonalInfo`, rejecting blank names.
    pub fn new(first_name: &str, last_name: &str) -> Result<Self, ValidationError> {
        let first_name = first_name.trim();
        let last_name = last_name.trim();
        validate_field(FieldRole::FirstName, Some(first_name))?;
        validate_field(FieldRole::LastName, Some(last_name))?;
        Ok(Self {
            first_name: first_name.to_owned(),
            last_name: last_name.to_owned(),
        })
    }

    pub fn first_name(&self) -> &str {
        &self.first_name
    }

    pub fn last_name(&self) -> &str {
        &self.last_name
    }
}
