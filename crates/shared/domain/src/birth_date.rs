//! Birth date parsing at the data-entry boundary.
//!
//! Raw text becomes a `NaiveDate` here or is rejected with a validation error,
//! so nothing downstream has to inspect untyped values.

use chrono::{DateTime, NaiveDate, NaiveDateTime};

use crate::constants::{BIRTH_DATE_FORMAT, NAIVE_TIMESTAMP_FORMAT, US_BIRTH_DATE_FORMATS};
use crate::error::{DomainError, DomainResult};

/// Parse a birth date from user or wire input.
///
/// Accepts `YYYY-MM-DD`, RFC 3339 timestamps (the date is read in the
/// timestamp's own offset), timestamps without an offset, `MM/DD/YYYY` and
/// `MM-DD-YYYY`.
pub fn parse_birth_date(input: &str) -> DomainResult<NaiveDate> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        return Err(DomainError::validation("birth date is required"));
    }

    if let Ok(date) = NaiveDate::parse_from_str(trimmed, BIRTH_DATE_FORMAT) {
        return Ok(date);
    }

    if let Ok(timestamp) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(timestamp.date_naive());
    }

    if let Ok(timestamp) = NaiveDateTime::parse_from_str(trimmed, NAIVE_TIMESTAMP_FORMAT) {
        return Ok(timestamp.date());
    }

    US_BIRTH_DATE_FORMATS
        .iter()
        .find_map(|format| NaiveDate::parse_from_str(trimmed, format).ok())
        .ok_or_else(|| DomainError::validation(format!("invalid birth date: {}", trimmed)))
}

/// Format a birth date in the canonical wire format.
pub fn format_birth_date(date: NaiveDate) -> String {
    date.format(BIRTH_DATE_FORMAT).to_string()
}
