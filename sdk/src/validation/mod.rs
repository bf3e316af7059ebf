// Copyright 2018-2021 Cargill Incorporated
//
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Field coercers: pure functions that turn operator text into typed values.
//!
//! Every coercer takes the label of the field being coerced so that a failure can say which
//! input was wrong. None of them panic on bad input.

mod error;

use chrono::{NaiveDate, NaiveDateTime};

pub use error::ValidationError;

/// Display format of a calendar date column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";
/// Display format of a date and time column.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

const DATE_SHAPE: &str = "dddd-dd-dd";
const TIMESTAMP_SHAPE: &str = "dddd-dd-dd dd:dd:dd";

/// Parses a non-negative whole number.
///
/// Succeeds iff the trimmed text is non-empty and made only of ASCII decimal digits, so signs,
/// decimal points and interior whitespace are all rejected.
pub fn parse_integer(field: &str, text: &str) -> Result<i64, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
        return Err(invalid(field, "must be a whole number"));
    }

    // only overflow can fail here
    trimmed
        .parse::<i64>()
        .map_err(|_| invalid(field, "is too large"))
}

/// Parses a calendar date written exactly as `YYYY-MM-DD`.
pub fn parse_date(field: &str, text: &str) -> Result<NaiveDate, ValidationError> {
    let trimmed = text.trim();
    if !has_shape(trimmed, DATE_SHAPE) {
        return Err(invalid(field, "must be in YYYY-MM-DD format"));
    }

    NaiveDate::parse_from_str(trimmed, DATE_FORMAT)
        .map_err(|_| invalid(field, "must be a valid calendar date in YYYY-MM-DD format"))
}

/// Parses a date and time written exactly as `YYYY-MM-DD HH:MM:SS`.
pub fn parse_timestamp(field: &str, text: &str) -> Result<NaiveDateTime, ValidationError> {
    let trimmed = text.trim();
    if !has_shape(trimmed, TIMESTAMP_SHAPE) {
        return Err(invalid(field, "must be in format YYYY-MM-DD HH:MM:SS"));
    }

    NaiveDateTime::parse_from_str(trimmed, TIMESTAMP_FORMAT).map_err(|_| {
        invalid(
            field,
            "must be a valid date and time in format YYYY-MM-DD HH:MM:SS",
        )
    })
}

/// Requires some non-whitespace text, returning it trimmed.
pub fn non_empty(field: &str, text: &str) -> Result<String, ValidationError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(invalid(field, "cannot be empty"));
    }
    Ok(trimmed.to_string())
}

/// Returns a validator accepting exactly one of `values`.
///
/// # Examples
///
/// ```
/// use food_rescue_sdk::validation::enum_of;
///
/// let status = enum_of(&["Pending", "Completed", "Cancelled"]);
/// assert_eq!(status.validate("Status", "Completed"), Ok("Completed"));
/// assert!(status.validate("Status", "completed").is_err());
/// ```
pub fn enum_of<'a>(values: &'a [&'a str]) -> EnumOf<'a> {
    EnumOf { values }
}

/// Validator for a closed set of literal values. Matching is exact: case-sensitive and without
/// trimming.
#[derive(Debug, Clone, Copy)]
pub struct EnumOf<'a> {
    values: &'a [&'a str],
}

impl<'a> EnumOf<'a> {
    pub fn values(&self) -> &'a [&'a str] {
        self.values
    }

    /// Returns the matching literal from the allowed set.
    pub fn validate(&self, field: &str, text: &str) -> Result<&'a str, ValidationError> {
        self.values
            .iter()
            .find(|value| **value == text)
            .copied()
            .ok_or_else(|| {
                ValidationError::new(
                    field.to_string(),
                    format!("must be one of: {}", self.values.join(", ")),
                )
            })
    }
}

fn invalid(field: &str, reason: &str) -> ValidationError {
    ValidationError::new(field.to_string(), reason.to_string())
}

/// Checks `text` against a shape where `d` stands for one ASCII digit and any other character
/// must appear literally.
fn has_shape(text: &str, shape: &str) -> bool {
    text.len() == shape.len()
        && text.bytes().zip(shape.bytes()).all(|(t, s)| match s {
            b'd' => t.is_ascii_digit(),
            _ => t == s,
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_integer_accepts_digits_only() {
        assert_eq!(parse_integer("Provider ID", "101"), Ok(101));
        assert_eq!(parse_integer("Provider ID", "  007 "), Ok(7));
        assert_eq!(parse_integer("Provider ID", "0"), Ok(0));

        for bad in &["-5", "3.0", "", " ", "+4", "1 2", "12a", "٣"] {
            let err = parse_integer("Provider ID", bad).unwrap_err();
            assert_eq!(err.to_string(), "Provider ID must be a whole number", "{:?}", bad);
        }
    }

    #[test]
    fn test_parse_integer_reports_overflow() {
        let err = parse_integer("Quantity", "99999999999999999999").unwrap_err();
        assert_eq!(err.field(), "Quantity");
        assert_eq!(err.reason(), "is too large");
    }

    #[test]
    fn test_parse_date_round_trips() {
        for text in &["2024-03-15", " 2025-12-31 ", "2024-02-29"] {
            let date = parse_date("Expiry Date", text).expect("date should parse");
            assert_eq!(date.format(DATE_FORMAT).to_string(), text.trim());
        }
    }

    #[test]
    fn test_parse_date_rejects_loose_or_impossible_dates() {
        for bad in &["2024-3-15", "15-03-2024", "2024/03/15", "2023-02-29", "2024-13-01", ""] {
            assert!(parse_date("Expiry Date", bad).is_err(), "{:?}", bad);
        }
    }

    #[test]
    fn test_parse_timestamp() {
        let ts = parse_timestamp("Timestamp", "2024-02-28 10:00:00").expect("should parse");
        assert_eq!(ts.format(TIMESTAMP_FORMAT).to_string(), "2024-02-28 10:00:00");

        // lexically fine, but February 30th does not exist
        assert!(parse_timestamp("Timestamp", "2024-02-30 10:00:00").is_err());
        assert!(parse_timestamp("Timestamp", "2024-02-28 25:00:00").is_err());
        assert!(parse_timestamp("Timestamp", "2024-02-28T10:00:00").is_err());
        assert!(parse_timestamp("Timestamp", "2024-02-28").is_err());
    }

    #[test]
    fn test_non_empty() {
        assert_eq!(non_empty("City", "  Springfield "), Ok("Springfield".to_string()));
        let err = non_empty("City", " \t ").unwrap_err();
        assert_eq!(err.to_string(), "City cannot be empty");
    }

    #[test]
    fn test_enum_of_is_case_sensitive_and_exact() {
        let status = enum_of(&["Pending", "Completed", "Cancelled"]);
        for value in status.values() {
            assert_eq!(status.validate("Status", value), Ok(*value));
        }
        assert!(status.validate("Status", "pending").is_err());
        assert!(status.validate("Status", " Pending").is_err());

        let err = status.validate("Status", "Done").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Status must be one of: Pending, Completed, Cancelled"
        );
    }
}
