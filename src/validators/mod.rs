/// Input validation utilities shared by the resource handlers
use chrono::NaiveDate;

use crate::error::{AppError, Result};

/// Date format accepted for all date-valued fields
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Validates username length (minimum 3 characters)
pub fn validate_username(username: &str) -> bool {
    username.len() >= 3
}

/// Validates password length (minimum 8 characters)
pub fn validate_password(password: &str) -> bool {
    password.len() >= 8
}

/// Rejects missing or empty required string fields with a validation error.
pub fn require_non_empty(field: &str, value: Option<&str>) -> Result<String> {
    match value {
        Some(v) if !v.is_empty() => Ok(v.to_string()),
        Some(_) => Err(AppError::Validation(format!("{} cannot be empty", field))),
        None => Err(AppError::Validation(format!("{} is required", field))),
    }
}

/// Parses a required `YYYY-MM-DD` date field.
pub fn parse_date(field: &str, value: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_FORMAT)
        .map_err(|_| AppError::Validation(format!("{} must be in YYYY-MM-DD format", field)))
}

/// Parses an optional date field; empty string clears the value.
pub fn parse_optional_date(field: &str, value: Option<&str>) -> Result<Option<NaiveDate>> {
    match value {
        Some(v) if !v.is_empty() => parse_date(field, v).map(Some),
        _ => Ok(None),
    }
}
