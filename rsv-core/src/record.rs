use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Column headers of the source file, after whitespace trimming.
pub const COL_WEEK_ENDING: &str = "Week Ending";
pub const COL_AGE_GROUP: &str = "age_group";
pub const COL_DEMOGRAPHIC_LEVEL: &str = "Demographic Level";
pub const COL_GROUP_1: &str = "Comparison Group 1";
pub const COL_GROUP_1_ESTIMATE: &str = "Comparison Group 1 Estimate";
pub const COL_GROUP_2: &str = "Comparison Group 2";
pub const COL_GROUP_2_ESTIMATE: &str = "Comparison Group 2 Estimate";

/// Every column the loader requires, in source order.
pub const REQUIRED_COLUMNS: [&str; 7] = [
    COL_WEEK_ENDING,
    COL_AGE_GROUP,
    COL_DEMOGRAPHIC_LEVEL,
    COL_GROUP_1,
    COL_GROUP_1_ESTIMATE,
    COL_GROUP_2,
    COL_GROUP_2_ESTIMATE,
];

/// Which of the two comparison columns a value came from.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum ComparisonSlot {
    First,
    Second,
}

/// One weekly comparison-difference observation from the source file.
///
/// An estimate is only meaningful alongside its group label, so a row
/// carries zero, one or two usable (group, estimate) pairs.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct SourceRecord {
    pub week_ending: NaiveDate,
    pub age_group: Option<String>,
    pub demographic_level: Option<String>,
    pub comparison_group_1: Option<String>,
    /// Coverage percentage (0-100) for `comparison_group_1`
    pub comparison_group_1_estimate: Option<f64>,
    pub comparison_group_2: Option<String>,
    /// Coverage percentage (0-100) for `comparison_group_2`
    pub comparison_group_2_estimate: Option<f64>,
}

impl SourceRecord {
    /// True if this row belongs to the given age group and demographic dimension.
    pub fn matches(&self, age_group: &str, demographic_level: &str) -> bool {
        self.age_group.as_deref() == Some(age_group)
            && self.demographic_level.as_deref() == Some(demographic_level)
    }

    /// The group label in a comparison slot, if present.
    pub fn group(&self, slot: ComparisonSlot) -> Option<&str> {
        match slot {
            ComparisonSlot::First => self.comparison_group_1.as_deref(),
            ComparisonSlot::Second => self.comparison_group_2.as_deref(),
        }
    }

    /// The (group, estimate) pair in a comparison slot, only when both are present.
    pub fn pair(&self, slot: ComparisonSlot) -> Option<(&str, f64)> {
        let estimate = match slot {
            ComparisonSlot::First => self.comparison_group_1_estimate,
            ComparisonSlot::Second => self.comparison_group_2_estimate,
        };
        Some((self.group(slot)?, estimate?))
    }
}

/// A long-format (date, group, coverage) observation, ready for charting.
///
/// Serialized with the date as `YYYY-MM-DD` so it can be handed to D3.js
/// or written straight to an export file.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct PlotRecord {
    #[serde(rename = "Week Ending")]
    pub week_ending: NaiveDate,
    #[serde(rename = "Group")]
    pub group: String,
    /// Coverage percentage, copied unchanged from the source estimate
    #[serde(rename = "Coverage")]
    pub coverage: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record() -> SourceRecord {
        SourceRecord {
            week_ending: NaiveDate::from_ymd_opt(2023, 1, 7).unwrap(),
            age_group: Some("60+".to_string()),
            demographic_level: Some("Race".to_string()),
            comparison_group_1: Some("White".to_string()),
            comparison_group_1_estimate: Some(45.2),
            comparison_group_2: None,
            comparison_group_2_estimate: Some(38.1),
        }
    }

    #[test]
    fn test_matches_requires_both_labels() {
        let r = record();
        assert!(r.matches("60+", "Race"));
        assert!(!r.matches("60+", "Sex"));
        assert!(!r.matches("75+", "Race"));

        let mut missing_age = record();
        missing_age.age_group = None;
        assert!(!missing_age.matches("60+", "Race"));
    }

    #[test]
    fn test_pair_needs_group_and_estimate() {
        let r = record();
        assert_eq!(r.pair(ComparisonSlot::First), Some(("White", 45.2)));
        // Estimate without a group label is not a usable pair
        assert_eq!(r.pair(ComparisonSlot::Second), None);

        let mut no_estimate = record();
        no_estimate.comparison_group_1_estimate = None;
        assert_eq!(no_estimate.pair(ComparisonSlot::First), None);
        assert_eq!(no_estimate.group(ComparisonSlot::First), Some("White"));
    }

    #[test]
    fn test_plot_record_serializes_with_column_names() {
        let point = PlotRecord {
            week_ending: NaiveDate::from_ymd_opt(2023, 1, 7).unwrap(),
            group: "White".to_string(),
            coverage: 45.2,
        };
        let json = serde_json::to_string(&point).unwrap();
        assert_eq!(
            json,
            r#"{"Week Ending":"2023-01-07","Group":"White","Coverage":45.2}"#
        );
    }
}
