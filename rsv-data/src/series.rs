//! Splitting the long table into one line per group.

use chrono::NaiveDate;
use rsv_core::record::PlotRecord;
use serde::Serialize;

/// One chart line: every (week, coverage) point for a single group.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GroupSeries {
    pub group: String,
    pub points: Vec<(NaiveDate, f64)>,
}

/// Group records into series.
///
/// Series appear in the order their group first occurs; points keep record
/// order, so a line drawn from them follows the long table exactly.
pub fn group_series(records: &[PlotRecord]) -> Vec<GroupSeries> {
    let mut series: Vec<GroupSeries> = Vec::new();
    for record in records {
        let point = (record.week_ending, record.coverage);
        match series.iter_mut().find(|s| s.group == record.group) {
            Some(existing) => existing.points.push(point),
            None => series.push(GroupSeries {
                group: record.group.clone(),
                points: vec![point],
            }),
        }
    }
    series
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(day: u32, group: &str, coverage: f64) -> PlotRecord {
        PlotRecord {
            week_ending: NaiveDate::from_ymd_opt(2023, 1, day).unwrap(),
            group: group.to_string(),
            coverage,
        }
    }

    #[test]
    fn test_group_series_first_appearance_order() {
        let records = vec![
            record(7, "White", 45.2),
            record(14, "White", 46.0),
            record(7, "Black", 38.1),
            record(14, "Black", 39.0),
        ];
        let series = group_series(&records);
        assert_eq!(series.len(), 2);
        assert_eq!(series[0].group, "White");
        assert_eq!(series[1].group, "Black");
        assert_eq!(
            series[1].points,
            vec![
                (NaiveDate::from_ymd_opt(2023, 1, 7).unwrap(), 38.1),
                (NaiveDate::from_ymd_opt(2023, 1, 14).unwrap(), 39.0),
            ]
        );
    }

    #[test]
    fn test_group_series_empty() {
        assert!(group_series(&[]).is_empty());
    }
}
