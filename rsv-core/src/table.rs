//! Loading the coverage source file into an immutable in-memory table.
//!
//! # CSV Format
//!
//! Headers are required and may carry stray whitespace (`" Week Ending "`),
//! which is trimmed before lookup. Columns may appear in any order and extra
//! columns are ignored:
//!
//! ```text
//! Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2,Comparison Group 2 Estimate
//! 2023-01-07,60+,Race,White,45.2,Black,38.1
//! ```

use crate::error::{LoadError, Result};
use crate::record::{
    SourceRecord, COL_AGE_GROUP, COL_DEMOGRAPHIC_LEVEL, COL_GROUP_1, COL_GROUP_1_ESTIMATE,
    COL_GROUP_2, COL_GROUP_2_ESTIMATE, COL_WEEK_ENDING, REQUIRED_COLUMNS,
};
use csv::StringRecord;
use flate2::read::GzDecoder;
use rsv_utils::dates::parse_week_ending;
use rsv_utils::values::non_missing;
use std::collections::BTreeSet;
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// The parsed source table. Read-only once built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CoverageTable {
    records: Vec<SourceRecord>,
}

/// Positions of the required columns within a header row.
struct ColumnIndex {
    week_ending: usize,
    age_group: usize,
    demographic_level: usize,
    group_1: usize,
    group_1_estimate: usize,
    group_2: usize,
    group_2_estimate: usize,
}

impl ColumnIndex {
    fn from_headers(headers: &StringRecord) -> Result<Self> {
        if headers.iter().all(|h| h.trim().is_empty()) {
            return Err(LoadError::EmptySource);
        }
        let find = |name: &'static str| {
            headers
                .iter()
                .position(|h| h.trim() == name)
                .ok_or(LoadError::MissingColumn(name))
        };
        // Report the first missing column in source order
        for name in REQUIRED_COLUMNS {
            find(name)?;
        }
        Ok(Self {
            week_ending: find(COL_WEEK_ENDING)?,
            age_group: find(COL_AGE_GROUP)?,
            demographic_level: find(COL_DEMOGRAPHIC_LEVEL)?,
            group_1: find(COL_GROUP_1)?,
            group_1_estimate: find(COL_GROUP_1_ESTIMATE)?,
            group_2: find(COL_GROUP_2)?,
            group_2_estimate: find(COL_GROUP_2_ESTIMATE)?,
        })
    }
}

fn label(record: &StringRecord, idx: usize) -> Option<String> {
    record.get(idx).and_then(non_missing).map(str::to_string)
}

impl CoverageTable {
    /// Build a table from already-parsed records.
    pub fn from_records(records: Vec<SourceRecord>) -> Self {
        Self { records }
    }

    /// Parse a table from CSV text (typically embedded via `include_str!`).
    pub fn from_csv_str(csv_data: &str) -> Result<Self> {
        Self::from_reader(csv_data.as_bytes())
    }

    /// Parse a gzip-compressed CSV stream.
    pub fn from_gz_reader<R: Read>(reader: R) -> Result<Self> {
        Self::from_reader(GzDecoder::new(reader))
    }

    /// Open and parse a source file. Paths ending in `.gz` are decompressed first.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        log::info!("Loading coverage table from {}", path.display());
        let file = File::open(path)?;
        let is_gzip = path
            .extension()
            .is_some_and(|ext| ext.eq_ignore_ascii_case("gz"));
        if is_gzip {
            Self::from_gz_reader(file)
        } else {
            Self::from_reader(file)
        }
    }

    /// Parse CSV from any reader.
    ///
    /// Fails if a required column is missing or a non-empty `Week Ending`
    /// cannot be read as a date. Rows with a blank date are skipped, and
    /// estimates that are not numbers are read as missing.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let mut rdr = csv::ReaderBuilder::new()
            .has_headers(true)
            .flexible(true)
            .trim(csv::Trim::Headers)
            .from_reader(reader);

        let columns = ColumnIndex::from_headers(rdr.headers()?)?;

        let mut records = Vec::new();
        let mut skipped_rows = 0u32;
        let mut non_numeric = 0u32;
        for result in rdr.records() {
            let r = result?;
            let line = r.position().map(|p| p.line()).unwrap_or(0);

            let week_ending = match r.get(columns.week_ending).and_then(non_missing) {
                Some(raw) => parse_week_ending(raw).map_err(|_| LoadError::InvalidDate {
                    row: line,
                    value: raw.to_string(),
                })?,
                None => {
                    log::warn!("Skipping row {} with no Week Ending", line);
                    skipped_rows += 1;
                    continue;
                }
            };

            let mut estimate = |idx: usize| -> Option<f64> {
                let raw = r.get(idx).and_then(non_missing)?;
                match raw.parse::<f64>() {
                    Ok(v) if v.is_finite() => Some(v),
                    _ => {
                        log::debug!("Row {}: non-numeric estimate {:?} read as missing", line, raw);
                        non_numeric += 1;
                        None
                    }
                }
            };
            let comparison_group_1_estimate = estimate(columns.group_1_estimate);
            let comparison_group_2_estimate = estimate(columns.group_2_estimate);

            records.push(SourceRecord {
                week_ending,
                age_group: label(&r, columns.age_group),
                demographic_level: label(&r, columns.demographic_level),
                comparison_group_1: label(&r, columns.group_1),
                comparison_group_1_estimate,
                comparison_group_2: label(&r, columns.group_2),
                comparison_group_2_estimate,
            });
        }

        log::info!(
            "Loaded {} coverage rows, skipped {} undated, {} non-numeric estimates",
            records.len(),
            skipped_rows,
            non_numeric
        );
        Ok(Self { records })
    }

    /// All rows, in source order.
    pub fn records(&self) -> &[SourceRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Sorted distinct non-null age groups (options for the age single-select).
    pub fn age_groups(&self) -> Vec<&str> {
        self.distinct(|r| r.age_group.as_deref())
    }

    /// Sorted distinct non-null demographic levels (options for the dimension single-select).
    pub fn demographic_levels(&self) -> Vec<&str> {
        self.distinct(|r| r.demographic_level.as_deref())
    }

    fn distinct<'a, F>(&'a self, field: F) -> Vec<&'a str>
    where
        F: Fn(&'a SourceRecord) -> Option<&'a str>,
    {
        self.records
            .iter()
            .filter_map(field)
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const HEADER: &str = "Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2,Comparison Group 2 Estimate";

    fn csv_with(rows: &str) -> String {
        format!("{}\n{}", HEADER, rows)
    }

    #[test]
    fn load_single_row() {
        let table =
            CoverageTable::from_csv_str(&csv_with("2023-01-07,60+,Race,White,45.2,Black,38.1\n"))
                .unwrap();
        assert_eq!(table.len(), 1);
        let r = &table.records()[0];
        assert_eq!(r.week_ending, NaiveDate::from_ymd_opt(2023, 1, 7).unwrap());
        assert_eq!(r.age_group.as_deref(), Some("60+"));
        assert_eq!(r.demographic_level.as_deref(), Some("Race"));
        assert_eq!(r.comparison_group_1.as_deref(), Some("White"));
        assert_eq!(r.comparison_group_1_estimate, Some(45.2));
        assert_eq!(r.comparison_group_2.as_deref(), Some("Black"));
        assert_eq!(r.comparison_group_2_estimate, Some(38.1));
    }

    #[test]
    fn headers_are_trimmed_and_reordered_columns_work() {
        let csv = "\
 Demographic Level , Week Ending ,age_group,Extra,Comparison Group 2 Estimate,Comparison Group 2,Comparison Group 1 ,Comparison Group 1 Estimate
Sex,01/14/2023,75+,ignored,40.5,Female,Male,39.0
";
        let table = CoverageTable::from_csv_str(csv).unwrap();
        let r = &table.records()[0];
        assert_eq!(r.week_ending, NaiveDate::from_ymd_opt(2023, 1, 14).unwrap());
        assert_eq!(r.demographic_level.as_deref(), Some("Sex"));
        assert_eq!(r.comparison_group_1.as_deref(), Some("Male"));
        assert_eq!(r.comparison_group_1_estimate, Some(39.0));
        assert_eq!(r.comparison_group_2.as_deref(), Some("Female"));
        assert_eq!(r.comparison_group_2_estimate, Some(40.5));
    }

    #[test]
    fn missing_column_is_fatal() {
        let csv = "Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2\n";
        match CoverageTable::from_csv_str(csv) {
            Err(LoadError::MissingColumn(name)) => {
                assert_eq!(name, "Comparison Group 2 Estimate")
            }
            other => panic!("expected MissingColumn, got {:?}", other),
        }
    }

    #[test]
    fn empty_source_is_fatal() {
        assert!(matches!(
            CoverageTable::from_csv_str(""),
            Err(LoadError::EmptySource)
        ));
    }

    #[test]
    fn header_only_is_an_empty_table() {
        let table = CoverageTable::from_csv_str(&csv_with("")).unwrap();
        assert!(table.is_empty());
        assert!(table.age_groups().is_empty());
    }

    #[test]
    fn null_tokens_become_none() {
        let table = CoverageTable::from_csv_str(&csv_with(
            "2023-01-07,60+,Race,White,NaN,,38.1\n2023-01-14,NA,Race,White,44.0,Black,N/A\n",
        ))
        .unwrap();
        let first = &table.records()[0];
        assert_eq!(first.comparison_group_1_estimate, None);
        assert_eq!(first.comparison_group_2, None);
        assert_eq!(first.comparison_group_2_estimate, Some(38.1));
        let second = &table.records()[1];
        assert_eq!(second.age_group, None);
        assert_eq!(second.comparison_group_2_estimate, None);
    }

    #[test]
    fn non_numeric_estimates_are_missing() {
        let table =
            CoverageTable::from_csv_str(&csv_with("2023-01-07,60+,Race,White,suppressed,Black,38.1\n"))
                .unwrap();
        assert_eq!(table.records()[0].comparison_group_1_estimate, None);
        assert_eq!(table.records()[0].comparison_group_2_estimate, Some(38.1));
    }

    #[test]
    fn invalid_date_is_fatal() {
        let err = CoverageTable::from_csv_str(&csv_with(
            "2023-01-07,60+,Race,White,45.2,Black,38.1\nnot a date,60+,Race,White,45.2,Black,38.1\n",
        ))
        .unwrap_err();
        match err {
            LoadError::InvalidDate { row, value } => {
                assert_eq!(row, 3);
                assert_eq!(value, "not a date");
            }
            other => panic!("expected InvalidDate, got {:?}", other),
        }
    }

    #[test]
    fn blank_date_rows_are_skipped() {
        let table = CoverageTable::from_csv_str(&csv_with(
            ",60+,Race,White,45.2,Black,38.1\n2023-01-07,60+,Race,White,45.2,Black,38.1\n",
        ))
        .unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn short_rows_read_missing_cells_as_null() {
        let table = CoverageTable::from_csv_str(&csv_with("2023-01-07,60+,Race,White,45.2\n")).unwrap();
        let r = &table.records()[0];
        assert_eq!(r.comparison_group_1_estimate, Some(45.2));
        assert_eq!(r.comparison_group_2, None);
        assert_eq!(r.comparison_group_2_estimate, None);
    }

    #[test]
    fn option_lists_are_sorted_distinct_and_skip_nulls() {
        let table = CoverageTable::from_csv_str(&csv_with(
            "\
2023-01-07,75+,Sex,Male,40.0,Female,41.0
2023-01-07,60+,Race,White,45.2,Black,38.1
2023-01-14,60+,Race,White,46.0,Black,39.0
2023-01-14,,Urbanicity,Urban,46.0,Rural,39.0
2023-01-14,60-74,,Urban,46.0,Rural,39.0
",
        ))
        .unwrap();
        assert_eq!(table.age_groups(), vec!["60+", "60-74", "75+"]);
        assert_eq!(table.demographic_levels(), vec!["Race", "Sex", "Urbanicity"]);
    }

    #[test]
    fn gzip_source_loads() {
        let mut encoder = GzEncoder::new(Vec::new(), Compression::default());
        encoder
            .write_all(csv_with("2023-01-07,60+,Race,White,45.2,Black,38.1\n").as_bytes())
            .unwrap();
        let compressed = encoder.finish().unwrap();
        let table = CoverageTable::from_gz_reader(compressed.as_slice()).unwrap();
        assert_eq!(table.len(), 1);
    }

    #[test]
    fn missing_file_is_io_error() {
        assert!(matches!(
            CoverageTable::from_path("does/not/exist.csv"),
            Err(LoadError::Io(_))
        ));
    }
}
