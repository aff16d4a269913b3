//! SVG rendering of the coverage chart with plotters.
//!
//! Mirrors the dashboard chart: title anchored near the left edge, one line
//! with point markers per group, y axis fixed to 0-100 %, and a legend titled
//! "Group" to the right of the plot.

use chrono::{Duration, NaiveDate};
use plotters::prelude::*;
use rsv_core::table::CoverageTable;
use rsv_data::chart::{CoverageChart, CoverageView};
use rsv_data::series::GroupSeries;
use rsv_data::FilterState;
use rsv_utils::dates::format_date;
use std::fmt::Display;
use std::ops::Range;
use std::path::Path;

const LEGEND_WIDTH: u32 = 200;
const TITLE_HEIGHT: u32 = 48;

fn draw_err<E: Display>(e: E) -> anyhow::Error {
    anyhow::anyhow!("Failed to draw chart: {}", e)
}

/// X range covering every point. A single week is widened so the axis has extent.
fn date_range(series: &[GroupSeries]) -> Option<Range<NaiveDate>> {
    let mut dates = series.iter().flat_map(|s| s.points.iter().map(|p| p.0));
    let first = dates.next()?;
    let (start, end) = dates.fold((first, first), |(lo, hi), d| (lo.min(d), hi.max(d)));
    if start == end {
        Some(start - Duration::days(7)..end + Duration::days(7))
    } else {
        Some(start..end)
    }
}

/// Render the chart to an SVG string.
pub fn render_svg(
    chart: &CoverageChart,
    series: &[GroupSeries],
    size: (u32, u32),
) -> anyhow::Result<String> {
    let x_range = date_range(series).ok_or_else(|| anyhow::anyhow!("No points to plot"))?;
    let width = size.0;
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, size).into_drawing_area();
        root.fill(&WHITE).map_err(draw_err)?;

        let title_x = (width as f64 * chart.title_x) as i32;
        root.draw(&Text::new(
            chart.title.clone(),
            (title_x, 14),
            ("sans-serif", 22).into_font(),
        ))
        .map_err(draw_err)?;

        let body = root.margin(TITLE_HEIGHT, 0, 0, 0);
        let plot_width = width.saturating_sub(LEGEND_WIDTH).max(1);
        let (plot_area, legend_area) = body.split_horizontally(plot_width);

        let x_ranged: RangedDate<NaiveDate> = x_range.into();
        let mut cartesian = ChartBuilder::on(&plot_area)
            .margin(16)
            .x_label_area_size(40)
            .y_label_area_size(56)
            .build_cartesian_2d(x_ranged, chart.y_min..chart.y_max)
            .map_err(draw_err)?;

        cartesian
            .configure_mesh()
            .x_labels(8)
            .y_labels(11)
            .x_label_formatter(&|d: &NaiveDate| format_date(d))
            .x_desc(chart.x_label.as_str())
            .y_desc(chart.y_label.as_str())
            .draw()
            .map_err(draw_err)?;

        legend_area
            .draw(&Text::new(
                chart.legend_title.clone(),
                (12, 16),
                ("sans-serif", 16).into_font(),
            ))
            .map_err(draw_err)?;

        for (idx, group) in series.iter().enumerate() {
            let color = Palette99::pick(idx).to_rgba();
            cartesian
                .draw_series(LineSeries::new(
                    group.points.iter().copied(),
                    color.stroke_width(2),
                ))
                .map_err(draw_err)?;
            if chart.markers {
                cartesian
                    .draw_series(
                        group
                            .points
                            .iter()
                            .map(|&point| Circle::new(point, 3, color.filled())),
                    )
                    .map_err(draw_err)?;
            }

            let y = 44 + idx as i32 * 20;
            legend_area
                .draw(&PathElement::new(
                    vec![(12, y), (36, y)],
                    color.stroke_width(2),
                ))
                .map_err(draw_err)?;
            legend_area
                .draw(&Text::new(
                    group.group.clone(),
                    (42, y - 7),
                    ("sans-serif", 14).into_font(),
                ))
                .map_err(draw_err)?;
        }

        root.present().map_err(draw_err)?;
    }
    Ok(svg)
}

/// Reshape, then write the chart to `output`.
///
/// Returns `false` (and writes nothing) when the selection has no data.
pub fn run_plot(
    table: &CoverageTable,
    filter: &FilterState,
    output: &Path,
    size: (u32, u32),
) -> anyhow::Result<bool> {
    let view = CoverageView::build(table, filter);
    let series = view.series();
    match view {
        CoverageView::Empty { message } => {
            eprintln!("{}", message);
            Ok(false)
        }
        CoverageView::Chart { chart, .. } => {
            let svg = render_svg(&chart, &series, size)?;
            std::fs::write(output, svg)?;
            log::info!("Rendered {} lines to {}", series.len(), output.display());
            Ok(true)
        }
    }
}
