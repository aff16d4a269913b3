//! Presentation of the coverage chart, shared by the D3.js dashboard and the
//! SVG renderer.

use crate::filter::FilterState;
use crate::series::{group_series, GroupSeries};
use rsv_core::record::PlotRecord;
use rsv_core::table::CoverageTable;
use serde::Serialize;

pub const PAGE_TITLE: &str = "RSV Vaccine Coverage Dashboard";
pub const HEADING: &str = "📊 RSV Vaccination Coverage Among Adults Aged 60+";
pub const SIDEBAR_HEADER: &str = "🧭 Filters";
pub const AGE_GROUP_LABEL: &str = "Select Age Group";
pub const DEMOGRAPHIC_LEVEL_LABEL: &str = "Select Demographic Dimension";
pub const GROUPS_LABEL: &str = "Select Population Groups";
pub const LOADING_MESSAGE: &str = "Loading coverage data...";
/// Shown instead of a chart when the filters match no records.
pub const EMPTY_MESSAGE: &str = "⚠ No data available for the selected filters.";

pub const X_LABEL: &str = "Week Ending";
pub const Y_LABEL: &str = "% Vaccinated";
pub const LEGEND_TITLE: &str = "Group";
/// The y axis always spans 0-100 %, whatever the data.
pub const Y_RANGE: (f64, f64) = (0.0, 100.0);
/// Horizontal title anchor as a fraction of the chart width.
pub const TITLE_X: f64 = 0.05;
/// Dashboard chart height in pixels.
pub const CHART_HEIGHT: u32 = 450;

/// Chart configuration. Serialized as the config object for the D3 renderer.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverageChart {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
    pub legend_title: String,
    pub y_min: f64,
    pub y_max: f64,
    pub markers: bool,
    pub title_x: f64,
    pub height: u32,
}

impl CoverageChart {
    pub fn new(age_group: &str, demographic_level: &str) -> Self {
        Self {
            title: Self::title_for(age_group, demographic_level),
            x_label: X_LABEL.to_string(),
            y_label: Y_LABEL.to_string(),
            legend_title: LEGEND_TITLE.to_string(),
            y_min: Y_RANGE.0,
            y_max: Y_RANGE.1,
            markers: true,
            title_x: TITLE_X,
            height: CHART_HEIGHT,
        }
    }

    pub fn title_for(age_group: &str, demographic_level: &str) -> String {
        format!("RSV Vaccine Coverage – {} – {}", age_group, demographic_level)
    }
}

/// What the main pane shows for a selection: a chart, or the empty-state notice.
#[derive(Debug, Clone, PartialEq)]
pub enum CoverageView {
    Chart {
        chart: CoverageChart,
        records: Vec<PlotRecord>,
    },
    Empty {
        message: &'static str,
    },
}

impl CoverageView {
    /// Decide the view for already-reshaped records.
    pub fn from_records(filter: &FilterState, records: Vec<PlotRecord>) -> Self {
        if records.is_empty() {
            log::info!(
                "No coverage records for {} / {}",
                filter.age_group,
                filter.demographic_level
            );
            return CoverageView::Empty {
                message: EMPTY_MESSAGE,
            };
        }
        CoverageView::Chart {
            chart: CoverageChart::new(&filter.age_group, &filter.demographic_level),
            records,
        }
    }

    /// Reshape the table for `filter` and decide the view.
    pub fn build(table: &CoverageTable, filter: &FilterState) -> Self {
        Self::from_records(filter, filter.reshape(table))
    }

    /// One line per group, or nothing for the empty state.
    pub fn series(&self) -> Vec<GroupSeries> {
        match self {
            CoverageView::Chart { records, .. } => group_series(records),
            CoverageView::Empty { .. } => Vec::new(),
        }
    }
}
