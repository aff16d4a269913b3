//! Shared utility functions for RSV coverage crates.

/// Date utility functions
pub mod dates {
    use chrono::{NaiveDate, NaiveDateTime};

    /// Date-only layouts seen in published coverage extracts.
    const DATE_FORMATS: [&str; 3] = ["%Y-%m-%d", "%m/%d/%Y", "%Y/%m/%d"];

    /// Timestamp layouts; only the calendar date is kept.
    const DATETIME_FORMATS: [&str; 4] = [
        "%Y-%m-%dT%H:%M:%S%.f",
        "%Y-%m-%d %H:%M:%S%.f",
        "%m/%d/%Y %I:%M:%S %p",
        "%m/%d/%Y %H:%M",
    ];

    /// Format a NaiveDate as "YYYY-MM-DD"
    pub fn format_date(date: &NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }

    /// Parse a date string in "YYYY-MM-DD" format
    pub fn parse_date(s: &str) -> anyhow::Result<NaiveDate> {
        Ok(NaiveDate::parse_from_str(s, "%Y-%m-%d")?)
    }

    /// Parse a "Week Ending" cell.
    ///
    /// Accepts ISO dates, US `MM/DD/YYYY` dates and full timestamps (the
    /// time of day is dropped). Surrounding whitespace is ignored.
    pub fn parse_week_ending(s: &str) -> anyhow::Result<NaiveDate> {
        let s = s.trim();
        for format in DATE_FORMATS {
            if let Ok(date) = NaiveDate::parse_from_str(s, format) {
                return Ok(date);
            }
        }
        for format in DATETIME_FORMATS {
            if let Ok(timestamp) = NaiveDateTime::parse_from_str(s, format) {
                return Ok(timestamp.date());
            }
        }
        anyhow::bail!("unrecognized date format: {:?}", s)
    }

    #[cfg(test)]
    mod tests {
        use super::*;
        use chrono::NaiveDate;

        #[test]
        fn test_format_and_parse() {
            let date = NaiveDate::from_ymd_opt(2023, 6, 15).unwrap();
            let formatted = format_date(&date);
            assert_eq!(formatted, "2023-06-15");
            let parsed = parse_date(&formatted).unwrap();
            assert_eq!(parsed, date);
        }

        #[test]
        fn test_parse_week_ending_formats() {
            let expected = NaiveDate::from_ymd_opt(2023, 1, 7).unwrap();
            for raw in [
                "2023-01-07",
                " 2023-01-07 ",
                "01/07/2023",
                "2023/01/07",
                "2023-01-07T00:00:00",
                "2023-01-07T00:00:00.000",
                "2023-01-07 00:00:00",
                "01/07/2023 12:00:00 AM",
            ] {
                assert_eq!(parse_week_ending(raw).unwrap(), expected, "input {:?}", raw);
            }
        }

        #[test]
        fn test_parse_week_ending_rejects_garbage() {
            assert!(parse_week_ending("week 1").is_err());
            assert!(parse_week_ending("2023-13-40").is_err());
            assert!(parse_week_ending("").is_err());
        }
    }
}

/// Cell value helpers shared by the loaders.
pub mod values {
    /// Tokens that read as a missing value, in addition to the empty string.
    pub const MISSING_TOKENS: [&str; 10] = [
        "NA", "N/A", "n/a", "NaN", "nan", "-NaN", "null", "NULL", "None", "#N/A",
    ];

    /// Returns the trimmed cell, or `None` if it is blank or a missing-value token.
    pub fn non_missing(cell: &str) -> Option<&str> {
        let cell = cell.trim();
        if cell.is_empty() || MISSING_TOKENS.contains(&cell) {
            None
        } else {
            Some(cell)
        }
    }

    #[cfg(test)]
    mod tests {
        use super::non_missing;

        #[test]
        fn test_non_missing() {
            assert_eq!(non_missing("  White "), Some("White"));
            assert_eq!(non_missing("45.2"), Some("45.2"));
            assert_eq!(non_missing(""), None);
            assert_eq!(non_missing("   "), None);
            assert_eq!(non_missing("NaN"), None);
            assert_eq!(non_missing(" NA "), None);
            assert_eq!(non_missing("#N/A"), None);
        }
    }
}
