//! Figure element the D3 coverage chart draws into.

use dioxus::prelude::*;

#[derive(Props, Clone, PartialEq)]
pub struct ChartContainerProps {
    /// DOM id handed to `js_bridge::render_coverage_chart`
    pub id: String,
    /// Chart title, used as the figure's accessible name
    pub title: String,
    /// Reserved height so the pane doesn't jump while D3 draws
    pub height: u32,
}

#[component]
pub fn ChartContainer(props: ChartContainerProps) -> Element {
    let style = format!(
        "margin: 0; min-height: {}px; width: 100%; position: relative;",
        props.height
    );
    rsx! {
        figure {
            aria_label: "{props.title}",
            style: "{style}",
            div { id: "{props.id}", style: "width: 100%;" }
        }
    }
}
