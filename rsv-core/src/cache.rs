//! Process-lifetime cache for the source table.
//!
//! The table is loaded at most once and never invalidated; afterwards every
//! caller receives a shared `&CoverageTable`. Nothing is mutated after the
//! load, so the cache can live in a `static` and be read from anywhere.
//!
//! ```rust
//! use rsv_core::cache::TableCache;
//! use rsv_core::table::CoverageTable;
//!
//! static SOURCE: TableCache = TableCache::new();
//!
//! let table = SOURCE
//!     .get_or_load(|| CoverageTable::from_csv_str("Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2,Comparison Group 2 Estimate\n"))
//!     .unwrap();
//! assert!(table.is_empty());
//! assert!(SOURCE.get().is_some());
//! ```

use crate::error::Result;
use crate::table::CoverageTable;
use std::sync::OnceLock;

/// Lazily-initialized, immutable holder for the loaded [`CoverageTable`].
#[derive(Debug, Default)]
pub struct TableCache {
    cell: OnceLock<CoverageTable>,
}

impl TableCache {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the cached table, running `load` only if nothing is cached yet.
    ///
    /// A failed load is handed back to the caller and leaves the cache empty.
    pub fn get_or_load<F>(&self, load: F) -> Result<&CoverageTable>
    where
        F: FnOnce() -> Result<CoverageTable>,
    {
        if let Some(table) = self.cell.get() {
            return Ok(table);
        }
        let table = load()?;
        Ok(self.cell.get_or_init(|| table))
    }

    /// The cached table, if it has been loaded.
    pub fn get(&self) -> Option<&CoverageTable> {
        self.cell.get()
    }
}
