//! Writing the long-format coverage table.

use clap::ValueEnum;
use rsv_core::record::PlotRecord;
use rsv_core::table::CoverageTable;
use rsv_data::chart::EMPTY_MESSAGE;
use rsv_data::FilterState;
use std::io::Write;

/// Header of the exported table.
pub const EXPORT_HEADER: [&str; 3] = ["Week Ending", "Group", "Coverage"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ExportFormat {
    Csv,
    Json,
}

/// Write records as CSV with a `Week Ending,Group,Coverage` header.
///
/// The header is written even when there are no records.
pub fn write_csv<W: Write>(records: &[PlotRecord], out: W) -> anyhow::Result<()> {
    let mut wtr = csv::WriterBuilder::new()
        .has_headers(false)
        .from_writer(out);
    wtr.write_record(EXPORT_HEADER)?;
    for record in records {
        wtr.serialize(record)?;
    }
    wtr.flush()?;
    Ok(())
}

/// Write records as a pretty-printed JSON array.
pub fn write_json<W: Write>(records: &[PlotRecord], mut out: W) -> anyhow::Result<()> {
    serde_json::to_writer_pretty(&mut out, records)?;
    writeln!(out)?;
    Ok(())
}

/// Reshape the table for `filter` and write the result.
///
/// An empty result is not an error: the empty-state notice goes to the log
/// and an empty table is written.
pub fn run_export<W: Write>(
    table: &CoverageTable,
    filter: &FilterState,
    format: ExportFormat,
    out: W,
) -> anyhow::Result<()> {
    let records = filter.reshape(table);
    if records.is_empty() {
        log::warn!("{}", EMPTY_MESSAGE);
    } else {
        log::info!(
            "Exporting {} records for {} / {}",
            records.len(),
            filter.age_group,
            filter.demographic_level
        );
    }
    match format {
        ExportFormat::Csv => write_csv(&records, out),
        ExportFormat::Json => write_json(&records, out),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn table() -> CoverageTable {
        CoverageTable::from_csv_str(
            "\
Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2,Comparison Group 2 Estimate
2023-01-07,60+,Race,\"White, Non-Hispanic\",45.2,Black,38.1
2023-01-14,60+,Race,\"White, Non-Hispanic\",46,Black,
",
        )
        .unwrap()
    }

    fn filter(groups: &[&str]) -> FilterState {
        FilterState::new(
            "60+",
            "Race",
            groups.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>(),
        )
    }

    #[test]
    fn test_export_csv() {
        let mut out = Vec::new();
        run_export(&table(), &filter(&["White, Non-Hispanic", "Black"]), ExportFormat::Csv, &mut out)
            .unwrap();
        assert_eq!(
            String::from_utf8(out).unwrap(),
            "\
Week Ending,Group,Coverage
2023-01-07,\"White, Non-Hispanic\",45.2
2023-01-14,\"White, Non-Hispanic\",46.0
2023-01-07,Black,38.1
"
        );
    }

    #[test]
    fn test_export_csv_empty_writes_header_only() {
        let mut out = Vec::new();
        run_export(&table(), &filter(&["Hispanic"]), ExportFormat::Csv, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Week Ending,Group,Coverage\n");
    }

    #[test]
    fn test_export_json() {
        let mut out = Vec::new();
        run_export(&table(), &filter(&["Black"]), ExportFormat::Json, &mut out).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
        assert_eq!(
            value,
            serde_json::json!([
                {"Week Ending": "2023-01-07", "Group": "Black", "Coverage": 38.1}
            ])
        );
    }

    #[test]
    fn test_export_json_empty() {
        let mut out = Vec::new();
        run_export(&table(), &filter(&[]), ExportFormat::Json, &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap().trim(), "[]");
    }
}
