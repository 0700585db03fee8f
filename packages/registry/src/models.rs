//! # Domain models for registered people
//!
//! Defines the data structures produced by [`crate::Draft::submit`] and held
//! by [`crate::Roster`]. These types are `Serialize + Deserialize` so they can
//! cross component and platform boundaries as plain data.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`Person`] | A finalized registration record. Carries the five submitted fields plus the age captured at submission time. Immutable once appended to a roster. |
//!
//! ## Helper functions
//!
//! - [`parse_input_date`] — parses the value of an HTML date input
//!   (`%Y-%m-%d`, or the empty string when cleared) into a `NaiveDate`.
//! - [`format_short_date`] — renders a date with a configured chrono format
//!   string for table display.
//!
//! These are used by [`crate::Draft`] when deriving the display age and when
//! finalizing a record, and by the records table when rendering birth dates.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// The value format produced by HTML `<input type="date">`.
const DATE_INPUT_FORMAT: &str = "%Y-%m-%d";

/// A finalized registration record.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Person {
    /// First name as typed, no trimming or validation.
    pub given_name: String,
    /// Last name as typed.
    pub family_name: String,
    /// Phone number as typed; any string is accepted.
    pub phone: String,
    /// Email as typed; any string is accepted.
    pub email: String,
    /// Birth date, or None when the date input was empty at submission.
    pub birth_date: Option<NaiveDate>,
    /// Whole years at the time of the last birth-date edit, captured at
    /// submission. 0 when no birth date was set; negative for future dates.
    pub age: i32,
}

/// Parse an HTML date-input value. Empty or unparseable input yields None.
pub fn parse_input_date(value: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(value, DATE_INPUT_FORMAT).ok()
}

/// Render a date for table display using the configured format string.
pub fn format_short_date(date: NaiveDate, format: &str) -> String {
    date.format(format).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_input_date() {
        assert_eq!(
            parse_input_date("2000-06-15"),
            NaiveDate::from_ymd_opt(2000, 6, 15)
        );
        assert_eq!(parse_input_date(""), None);
        assert_eq!(parse_input_date("15/06/2000"), None);
        assert_eq!(parse_input_date("not-a-date"), None);
    }

    #[test]
    fn test_format_short_date() {
        let date = NaiveDate::from_ymd_opt(2000, 6, 15).unwrap();
        assert_eq!(format_short_date(date, "%-m/%-d/%Y"), "6/15/2000");
        assert_eq!(format_short_date(date, "%Y-%m-%d"), "2000-06-15");
    }
}
