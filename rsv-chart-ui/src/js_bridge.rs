//! Typed wrappers around JS interop via `js_sys::eval()`.
//!
//! The D3.js coverage chart lives in `assets/js/*.js`. The scripts are
//! embedded at compile time, evaluated as globals once D3 is available, and
//! exposed via `window.*`. This module serializes data and calls those globals.

static TOOLTIP_JS: &str = include_str!("../assets/js/tooltip.js");
static COVERAGE_CHART_JS: &str = include_str!("../assets/js/coverage-chart.js");

/// Execute arbitrary JS, wrapping in try/catch to avoid panics.
pub fn call_js(code: &str) {
    let wrapped = format!(
        "try {{ {} }} catch(e) {{ console.warn('RSV JS call failed:', e); }}",
        code
    );
    if let Err(e) = js_sys::eval(&wrapped) {
        log::warn!("JS eval rejected: {:?}", e);
    }
}

/// Quote a string as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "''".to_string())
}

/// Initialize chart scripts with a wait-for-D3 polling loop.
///
/// Safe to call on every render: the scripts are evaluated only once per page.
/// They are evaluated at global scope via indirect `eval` and each function
/// is promoted to `window.*` explicitly.
pub fn init_charts() {
    let all_js = [TOOLTIP_JS, COVERAGE_CHART_JS].join("\n");

    let store_js = format!(
        "if (!window.__rsvChartsInit) {{ window.__rsvChartsInit = true; window.__rsvChartScripts = {}; }}",
        js_string(&all_js)
    );
    call_js(&store_js);

    let init_js = r#"
        (function() {
            if (!window.__rsvChartScripts) { return; }
            var waitForD3 = setInterval(function() {
                if (typeof d3 !== 'undefined' && window.__rsvChartScripts) {
                    clearInterval(waitForD3);
                    (0, eval)(window.__rsvChartScripts);
                    delete window.__rsvChartScripts;
                    if (typeof renderCoverageChart !== 'undefined') window.renderCoverageChart = renderCoverageChart;
                    if (typeof initTooltip !== 'undefined') window.initTooltip = initTooltip;
                    if (typeof showTooltip !== 'undefined') window.showTooltip = showTooltip;
                    if (typeof hideTooltip !== 'undefined') window.hideTooltip = hideTooltip;
                    if (typeof escapeHtml !== 'undefined') window.escapeHtml = escapeHtml;
                    window.__rsvChartsReady = true;
                    console.log('RSV coverage chart initialized');
                }
            }, 100);
        })();
    "#;
    call_js(init_js);
}

/// Render the coverage line chart: one line per group, fixed 0-100 % y axis.
///
/// `data_json` is the serialized long-format records and `config_json` the
/// serialized chart configuration. Polls until D3, the chart script and the
/// container element are all available.
pub fn render_coverage_chart(container_id: &str, data_json: &str, config_json: &str) {
    let id = js_string(container_id);
    let data = js_string(data_json);
    let config = js_string(config_json);
    log::debug!("Queueing coverage chart render into #{}", container_id);
    call_js(&format!(
        r#"
        (function() {{
            var poll = setInterval(function() {{
                if (window.__rsvChartsReady &&
                    typeof window.renderCoverageChart !== 'undefined' &&
                    document.getElementById({id})) {{
                    clearInterval(poll);
                    try {{
                        window.renderCoverageChart({id}, {data}, {config});
                    }} catch(e) {{ console.error('[RSV] renderCoverageChart error:', e); }}
                }}
            }}, 100);
        }})();
        "#,
    ));
}

/// Clear any chart drawn in the given container.
pub fn destroy_chart(container_id: &str) {
    log::debug!("Clearing chart #{}", container_id);
    call_js(&format!(
        "var el = document.getElementById({}); if (el) el.innerHTML = '';",
        js_string(container_id)
    ));
}
