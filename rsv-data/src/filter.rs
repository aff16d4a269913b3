//! The user's current filter selection.

use crate::reshape::{available_groups, reshape};
use rsv_core::record::PlotRecord;
use rsv_core::table::CoverageTable;
use serde::Serialize;
use std::collections::BTreeSet;

/// Session-scoped filter choices: one age group, one demographic dimension,
/// and a subset of the groups available under that pair.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct FilterState {
    pub age_group: String,
    pub demographic_level: String,
    pub selected_groups: BTreeSet<String>,
}

impl FilterState {
    pub fn new(
        age_group: impl Into<String>,
        demographic_level: impl Into<String>,
        selected_groups: BTreeSet<String>,
    ) -> Self {
        Self {
            age_group: age_group.into(),
            demographic_level: demographic_level.into(),
            selected_groups,
        }
    }

    /// The dashboard's opening selection: first age group, first dimension,
    /// and every group available under them.
    ///
    /// Returns `None` when the table offers no age group or no dimension.
    pub fn initial(table: &CoverageTable) -> Option<Self> {
        let age_group = table.age_groups().first()?.to_string();
        let demographic_level = table.demographic_levels().first()?.to_string();
        let selected_groups = available_groups(table.records(), &age_group, &demographic_level);
        Some(Self {
            age_group,
            demographic_level,
            selected_groups,
        })
    }

    /// Groups selectable under the current age group and dimension.
    pub fn available_groups(&self, table: &CoverageTable) -> BTreeSet<String> {
        available_groups(table.records(), &self.age_group, &self.demographic_level)
    }

    /// Change the age group. The group selection resets to everything available.
    pub fn select_age_group(&mut self, table: &CoverageTable, age_group: impl Into<String>) {
        self.age_group = age_group.into();
        self.select_all_groups(table);
    }

    /// Change the demographic dimension. The group selection resets to everything available.
    pub fn select_demographic_level(
        &mut self,
        table: &CoverageTable,
        demographic_level: impl Into<String>,
    ) {
        self.demographic_level = demographic_level.into();
        self.select_all_groups(table);
    }

    pub fn select_all_groups(&mut self, table: &CoverageTable) {
        self.selected_groups = self.available_groups(table);
    }

    /// Add the group if unselected, remove it if selected.
    pub fn toggle_group(&mut self, group: &str) {
        if !self.selected_groups.remove(group) {
            self.selected_groups.insert(group.to_string());
        }
    }

    pub fn set_selected_groups<I, S>(&mut self, groups: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.selected_groups = groups.into_iter().map(Into::into).collect();
    }

    pub fn is_selected(&self, group: &str) -> bool {
        self.selected_groups.contains(group)
    }

    /// Long-format records for the current selection.
    pub fn reshape(&self, table: &CoverageTable) -> Vec<PlotRecord> {
        reshape(
            table.records(),
            &self.age_group,
            &self.demographic_level,
            &self.selected_groups,
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table() -> CoverageTable {
        CoverageTable::from_csv_str(
            "\
Week Ending,age_group,Demographic Level,Comparison Group 1,Comparison Group 1 Estimate,Comparison Group 2,Comparison Group 2 Estimate
2023-01-07,75+,Race,White,55.0,Asian,50.0
2023-01-07,60+,Sex,Male,41.0,Female,43.5
2023-01-07,60+,Race,White,45.2,Black,38.1
2023-01-14,60+,Race,White,46.0,Hispanic,30.2
",
        )
        .unwrap()
    }

    fn set(labels: &[&str]) -> BTreeSet<String> {
        labels.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn initial_selects_first_options_and_all_groups() {
        let state = FilterState::initial(&table()).unwrap();
        assert_eq!(state.age_group, "60+");
        assert_eq!(state.demographic_level, "Race");
        assert_eq!(state.selected_groups, set(&["Black", "Hispanic", "White"]));
    }

    #[test]
    fn initial_is_none_for_empty_table() {
        assert!(FilterState::initial(&CoverageTable::default()).is_none());
    }

    #[test]
    fn changing_dimension_resets_groups() {
        let table = table();
        let mut state = FilterState::initial(&table).unwrap();
        state.toggle_group("White");
        state.select_demographic_level(&table, "Sex");
        assert_eq!(state.selected_groups, set(&["Female", "Male"]));

        state.select_age_group(&table, "75+");
        // 75+ has no Sex rows
        assert!(state.selected_groups.is_empty());
        assert!(state.reshape(&table).is_empty());
    }

    #[test]
    fn toggle_group_round_trips() {
        let table = table();
        let mut state = FilterState::initial(&table).unwrap();
        state.toggle_group("Black");
        assert!(!state.is_selected("Black"));
        state.toggle_group("Black");
        assert!(state.is_selected("Black"));
    }

    #[test]
    fn reshape_follows_selection() {
        let table = table();
        let mut state = FilterState::initial(&table).unwrap();
        assert_eq!(state.reshape(&table).len(), 4);

        state.set_selected_groups(["Hispanic"]);
        let records = state.reshape(&table);
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].coverage, 30.2);
    }
}
