//! RSV Vaccine Coverage Dashboard
//!
//! Displays weekly RSV vaccination coverage as a multi-line chart, one line
//! per population group. The sidebar picks an age group, a demographic
//! dimension and the groups to compare; the chart is recomputed on every
//! change.
//!
//! Data flow:
//! 1. `build.rs` stages `rsv_coverage.csv` in `OUT_DIR` and counts its lines.
//! 2. `include_str!` embeds the CSV into the WASM binary.
//! 3. On mount, the CSV is parsed once into a process-wide `TableCache`.
//! 4. Each filter change reshapes the cached table into long format and
//!    either renders the D3 chart or shows the empty-state warning.

use dioxus::prelude::*;
use rsv_chart_ui::components::{ChartContainer, FilterSidebar, Notice, NoticeKind, PageHeader};
use rsv_chart_ui::js_bridge;
use rsv_chart_ui::state::AppState;
use rsv_core::cache::TableCache;
use rsv_core::table::CoverageTable;
use rsv_data::chart::{CoverageView, HEADING, LOADING_MESSAGE};

/// Weekly comparison-difference coverage data.
const COVERAGE_CSV: &str = include_str!(concat!(env!("OUT_DIR"), "/rsv_coverage.csv"));

/// Data lines in the embedded CSV, counted by `build.rs`.
const FIXTURE_LINES: &str = env!("RSV_FIXTURE_LINES");

/// Chart container DOM element ID used by D3.js to render into.
const CHART_ID: &str = "rsv-coverage-chart";

/// Loaded once, read-only for the rest of the page's life.
static SOURCE: TableCache = TableCache::new();

fn main() {
    dioxus_logger::init(dioxus_logger::tracing::Level::INFO).expect("failed to init logger");
    dioxus::LaunchBuilder::new()
        .with_cfg(dioxus::web::Config::new().rootname("rsv-coverage-root"))
        .launch(App);
}

#[component]
fn App() -> Element {
    let mut state = use_context_provider(AppState::new);

    // Load the source table on mount
    use_effect(move || match SOURCE.get_or_load(|| CoverageTable::from_csv_str(COVERAGE_CSV)) {
        Ok(table) => {
            log::info!(
                "Coverage table ready: {} rows ({} data lines embedded)",
                table.len(),
                FIXTURE_LINES
            );
            state.load(table);
        }
        Err(e) => state.fail(format!("Failed to load coverage data: {}", e)),
    });

    // Recomputed whenever the table or the filter changes
    let view = use_memo(move || {
        let table = (state.table)()?;
        Some(CoverageView::build(table, &state.filter.read()))
    });

    use_effect(move || {
        let view = view();
        match view {
            Some(CoverageView::Chart { chart, records }) => {
                js_bridge::init_charts();
                let data_json = match serde_json::to_string(&records) {
                    Ok(json) => json,
                    Err(e) => {
                        log::error!("Failed to serialize coverage records: {}", e);
                        return;
                    }
                };
                let config_json = match serde_json::to_string(&chart) {
                    Ok(json) => json,
                    Err(e) => {
                        log::error!("Failed to serialize chart config: {}", e);
                        return;
                    }
                };
                log::info!("Rendering {} coverage records: {}", records.len(), chart.title);
                js_bridge::render_coverage_chart(CHART_ID, &data_json, &config_json);
            }
            Some(CoverageView::Empty { .. }) => js_bridge::destroy_chart(CHART_ID),
            None => {}
        }
    });

    rsx! {
        div {
            style: "display: flex; min-height: 100vh; font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif;",

            if let Some(err) = (state.error_msg)() {
                div {
                    style: "flex: 1; padding: 16px;",
                    Notice { kind: NoticeKind::Failure, message: err }
                }
            } else if (state.loading)() {
                div {
                    style: "flex: 1;",
                    Notice { kind: NoticeKind::Loading, message: LOADING_MESSAGE.to_string() }
                }
            } else {
                FilterSidebar {}
                main {
                    style: "flex: 1; padding: 16px; min-width: 0;",
                    PageHeader {
                        title: HEADING.to_string(),
                        subtitle: "Weekly differences in cumulative RSV vaccination coverage".to_string(),
                    }
                    {match view() {
                        Some(CoverageView::Chart { chart, .. }) => rsx! {
                            ChartContainer { id: CHART_ID.to_string(), title: chart.title, height: chart.height }
                        },
                        Some(CoverageView::Empty { message }) => rsx! {
                            Notice { kind: NoticeKind::Empty, message: message.to_string() }
                        },
                        None => rsx! {},
                    }}
                }
            }
        }
    }
}
