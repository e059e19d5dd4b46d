//! Field rules and the shape checks behind them.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use email_address::EmailAddress;

use crate::domain::foundation::ValidationError;

/// A single check applied to one text field.
///
/// Every rule except `Required` passes on blank input, so optional fields
/// are only checked when the user filled them in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    Required(&'static str),
    MinChars(usize, &'static str),
    MaxChars(usize, &'static str),
    Email(&'static str),
    Digits(usize, &'static str),
    MonthYear(&'static str),
    MonthYearOrPresent(&'static str),
}

impl FieldRule {
    /// Checks `value` of `field` against this rule.
    pub fn check(&self, field: &str, value: &str) -> Result<(), ValidationError> {
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return match self {
                FieldRule::Required(message) => Err(ValidationError::empty_field(field, *message)),
                _ => Ok(()),
            };
        }

        let chars = trimmed.chars().count();
        match *self {
            FieldRule::Required(_) => Ok(()),
            FieldRule::MinChars(min, message) if chars < min => {
                Err(ValidationError::too_short(field, min, chars, message))
            }
            FieldRule::MaxChars(max, message) if chars > max => {
                Err(ValidationError::too_long(field, max, chars, message))
            }
            FieldRule::MinChars(..) | FieldRule::MaxChars(..) => Ok(()),
            FieldRule::Email(message) => check_shape(field, is_email_shaped(trimmed), message),
            FieldRule::Digits(count, message) => check_shape(
                field,
                chars == count && trimmed.chars().all(|c| c.is_ascii_digit()),
                message,
            ),
            FieldRule::MonthYear(message) => {
                check_shape(field, trimmed.parse::<MonthYear>().is_ok(), message)
            }
            FieldRule::MonthYearOrPresent(message) => check_shape(
                field,
                is_present(trimmed) || trimmed.parse::<MonthYear>().is_ok(),
                message,
            ),
        }
    }
}

/// One row of a schema table: a field and the rules applied in order.
#[derive(Debug, Clone, Copy)]
pub struct FieldSpec {
    pub field: &'static str,
    pub rules: &'static [FieldRule],
}

fn check_shape(field: &str, ok: bool, message: &str) -> Result<(), ValidationError> {
    if ok {
        Ok(())
    } else {
        Err(ValidationError::invalid_format(field, message))
    }
}

/// True for the open-ended end date marker.
pub fn is_present(value: &str) -> bool {
    value.trim().eq_ignore_ascii_case("present")
}

/// Checks `local@domain.tld` shape.
///
/// The address must parse as an email address, contain no whitespace and
/// carry a dotted domain whose last label is at least two letters. Dotless
/// hosts and IP literals are rejected even though the address grammar
/// allows them.
pub fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) || !EmailAddress::is_valid(value) {
        return false;
    }
    let Some((_, domain)) = value.rsplit_once('@') else {
        return false;
    };
    let labels: Vec<&str> = domain.split('.').collect();
    if labels.len() < 2 || labels.iter().any(|l| l.is_empty()) {
        return false;
    }
    labels
        .last()
        .map(|tld| tld.len() >= 2 && tld.chars().all(|c| c.is_ascii_alphabetic()))
        .unwrap_or(false)
}

/// A calendar month written as `MM/YYYY`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthYear {
    pub month: u8,
    pub year: u16,
}

impl FromStr for MonthYear {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ValidationError::invalid_format("date", format!("'{}' is not MM/YYYY", s));
        let (mm, yyyy) = s.trim().split_once('/').ok_or_else(invalid)?;
        if mm.len() != 2 || yyyy.len() != 4 {
            return Err(invalid());
        }
        if !mm.chars().chain(yyyy.chars()).all(|c| c.is_ascii_digit()) {
            return Err(invalid());
        }
        let month: u8 = mm.parse().map_err(|_| invalid())?;
        let year: u16 = yyyy.parse().map_err(|_| invalid())?;
        if !(1..=12).contains(&month) {
            return Err(invalid());
        }
        Ok(Self { month, year })
    }
}

impl Ord for MonthYear {
    fn cmp(&self, other: &Self) -> Ordering {
        (self.year, self.month).cmp(&(other.year, other.month))
    }
}

impl PartialOrd for MonthYear {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for MonthYear {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:02}/{:04}", self.month, self.year)
    }
}
