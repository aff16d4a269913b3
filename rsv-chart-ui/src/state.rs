//! Application state managed via Dioxus context.
//!
//! `AppState` bundles all reactive signals into a single struct provided via
//! `use_context_provider`. Child components retrieve it with `use_context::<AppState>()`.

use dioxus::prelude::*;
use rsv_core::table::CoverageTable;
use rsv_data::FilterState;

/// Shared state for the coverage dashboard.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Source table (None until loaded). Borrowed from the process-wide cache.
    pub table: Signal<Option<&'static CoverageTable>>,
    /// Whether the app is still loading
    pub loading: Signal<bool>,
    /// Error message if the source table could not be loaded
    pub error_msg: Signal<Option<String>>,
    /// Options for the age group select
    pub age_groups: Signal<Vec<String>>,
    /// Options for the demographic dimension select
    pub demographic_levels: Signal<Vec<String>>,
    /// Current selection
    pub filter: Signal<FilterState>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            table: Signal::new(None),
            loading: Signal::new(true),
            error_msg: Signal::new(None),
            age_groups: Signal::new(Vec::new()),
            demographic_levels: Signal::new(Vec::new()),
            filter: Signal::new(FilterState::default()),
        }
    }

    /// Install a loaded table: fill the option lists and pick the opening selection.
    pub fn load(&mut self, table: &'static CoverageTable) {
        let to_owned =
            |values: Vec<&str>| -> Vec<String> { values.into_iter().map(str::to_string).collect() };
        self.age_groups.set(to_owned(table.age_groups()));
        self.demographic_levels.set(to_owned(table.demographic_levels()));
        if let Some(filter) = FilterState::initial(table) {
            self.filter.set(filter);
        }
        log::info!(
            "Loaded {} rows: {} age groups, {} demographic dimensions",
            table.len(),
            self.age_groups.read().len(),
            self.demographic_levels.read().len()
        );
        self.table.set(Some(table));
        self.loading.set(false);
    }

    /// Record a fatal load error; the dashboard shows only the error box afterwards.
    pub fn fail(&mut self, message: String) {
        log::error!("{}", message);
        self.error_msg.set(Some(message));
        self.loading.set(false);
    }

    pub fn select_age_group(&mut self, age_group: String) {
        if let Some(table) = (self.table)() {
            log::debug!("Age group -> {}", age_group);
            self.filter.write().select_age_group(table, age_group);
        }
    }

    pub fn select_demographic_level(&mut self, demographic_level: String) {
        if let Some(table) = (self.table)() {
            log::debug!("Demographic dimension -> {}", demographic_level);
            self.filter
                .write()
                .select_demographic_level(table, demographic_level);
        }
    }

    pub fn toggle_group(&mut self, group: &str) {
        self.filter.write().toggle_group(group);
        log::debug!(
            "Toggled {}: {} groups selected",
            group,
            self.filter.read().selected_groups.len()
        );
    }

    /// Sorted options for the population group multi-select.
    pub fn available_groups(&self) -> Vec<String> {
        match (self.table)() {
            Some(table) => self.filter.read().available_groups(table).into_iter().collect(),
            None => Vec::new(),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
