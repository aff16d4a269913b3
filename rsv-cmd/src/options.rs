//! Listing filter options.

use rsv_core::table::CoverageTable;
use rsv_data::available_groups;
use std::io::Write;

/// Print the sorted age groups and demographic dimensions.
pub fn write_options(table: &CoverageTable, out: &mut impl Write) -> anyhow::Result<()> {
    writeln!(out, "Age groups:")?;
    for age_group in table.age_groups() {
        writeln!(out, "  {}", age_group)?;
    }
    writeln!(out, "Demographic dimensions:")?;
    for level in table.demographic_levels() {
        writeln!(out, "  {}", level)?;
    }
    Ok(())
}

/// Print the sorted population groups for an age group and dimension, one per line.
pub fn write_groups(
    table: &CoverageTable,
    age_group: &str,
    demographic_level: &str,
    out: &mut impl Write,
) -> anyhow::Result<()> {
    let groups = available_groups(table.records(), age_group, demographic_level);
    if groups.is_empty() {
        log::warn!("No groups for {} / {}", age_group, demographic_level);
    }
    for group in groups {
        writeln!(out, "{}", group)?;
    }
    Ok(())
}
