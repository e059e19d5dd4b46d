//! Validation module - field rules and per-record schemas.
//!
//! The document store trusts its inputs; these predicates are what the
//! wizard runs before a submission is allowed to reach it.

mod field_errors;
mod rules;
mod schema;

pub use field_errors::FieldErrors;
pub use rules::{is_email_shaped, is_present, FieldRule, FieldSpec, MonthYear};
pub use schema::{
    check_fields, Validate, CERTIFICATION_SCHEMA, EDUCATION_SCHEMA, EXPERIENCE_SCHEMA,
    LANGUAGE_SCHEMA, PERSONAL_INFO_SCHEMA, PROJECT_SCHEMA,
};
