//! Wide-to-long reshaping of comparison rows.
//!
//! Both operations start from the same base set: the rows matching the
//! selected age group and demographic dimension. Reshaping then runs two
//! independent projections over that base, one per comparison slot, and
//! appends the second to the first.

use rsv_core::record::{ComparisonSlot, PlotRecord, SourceRecord};
use std::collections::BTreeSet;

/// Rows for one (age group, demographic dimension) pair, in source order.
fn filtered<'a>(
    source: &'a [SourceRecord],
    age_group: &'a str,
    demographic_level: &'a str,
) -> impl Iterator<Item = &'a SourceRecord> + Clone + 'a {
    source
        .iter()
        .filter(move |r| r.matches(age_group, demographic_level))
}

/// Project one comparison slot of the base rows into plot records.
///
/// A row contributes only when its group is selected and its estimate is present.
fn project<'a>(
    base: impl Iterator<Item = &'a SourceRecord> + 'a,
    slot: ComparisonSlot,
    selected_groups: &'a BTreeSet<String>,
) -> impl Iterator<Item = PlotRecord> + 'a {
    base.filter_map(move |r| {
        let (group, coverage) = r.pair(slot)?;
        selected_groups.contains(group).then(|| PlotRecord {
            week_ending: r.week_ending,
            group: group.to_string(),
            coverage,
        })
    })
}

/// Group labels selectable under an (age group, demographic dimension) pair.
///
/// The union of all non-null `Comparison Group 1` and `Comparison Group 2`
/// labels among matching rows. An empty set is a valid answer.
pub fn available_groups(
    source: &[SourceRecord],
    age_group: &str,
    demographic_level: &str,
) -> BTreeSet<String> {
    filtered(source, age_group, demographic_level)
        .flat_map(|r| {
            [ComparisonSlot::First, ComparisonSlot::Second]
                .into_iter()
                .filter_map(move |slot| r.group(slot))
        })
        .map(str::to_string)
        .collect()
}

/// Reshape matching rows into long-format plot records.
///
/// Records from the first comparison slot come first, followed by those from
/// the second, each in source row order. Labels absent from the data simply
/// contribute nothing; an empty result means "no data for this filter".
///
/// ```rust
/// use rsv_core::table::CoverageTable;
/// use rsv_data::reshape;
/// use std::collections::BTreeSet;
///
/// let table = CoverageTable::from_csv_str("\
/// Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2,Comparison Group 2 Estimate
/// 2023-01-07,60+,Race,White,45.2,Black,38.1
/// ").unwrap();
/// let selected: BTreeSet<String> = ["White".to_string()].into();
/// let records = reshape(table.records(), "60+", "Race", &selected);
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].group, "White");
/// ```
pub fn reshape(
    source: &[SourceRecord],
    age_group: &str,
    demographic_level: &str,
    selected_groups: &BTreeSet<String>,
) -> Vec<PlotRecord> {
    let base = filtered(source, age_group, demographic_level);
    let records: Vec<PlotRecord> = project(base.clone(), ComparisonSlot::First, selected_groups)
        .chain(project(base, ComparisonSlot::Second, selected_groups))
        .collect();
    log::debug!(
        "reshape: {} / {} with {} groups selected -> {} records",
        age_group,
        demographic_level,
        selected_groups.len(),
        records.len()
    );
    records
}
