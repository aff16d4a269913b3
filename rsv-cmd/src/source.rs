//! Loading the source file and turning CLI selections into filter state.

use crate::Selection;
use anyhow::Context;
use rsv_core::cache::TableCache;
use rsv_core::table::CoverageTable;
use rsv_data::FilterState;
use std::path::Path;

static SOURCE: TableCache = TableCache::new();

/// Load the source table once for the life of the process.
pub fn load(path: &Path) -> anyhow::Result<&'static CoverageTable> {
    SOURCE
        .get_or_load(|| CoverageTable::from_path(path))
        .with_context(|| format!("Failed to load coverage data from {}", path.display()))
}

/// Build filter state from a selection. No groups means every available group.
pub fn resolve(table: &CoverageTable, selection: Selection) -> FilterState {
    let Selection {
        age_group,
        demographic_level,
        groups,
    } = selection;
    let mut filter = FilterState::new(age_group, demographic_level, Default::default());
    if groups.is_empty() {
        filter.select_all_groups(table);
    } else {
        filter.set_selected_groups(groups);
    }
    filter
}
