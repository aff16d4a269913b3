//! Single-select for the demographic dimension.

use crate::state::AppState;
use dioxus::prelude::*;
use rsv_data::chart::DEMOGRAPHIC_LEVEL_LABEL;

/// Demographic dimension dropdown (e.g. Race, Sex, Urbanicity).
#[component]
pub fn DemographicLevelSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.demographic_levels.read().clone();
    let selected = state.filter.read().demographic_level.clone();

    let on_change = move |evt: Event<FormData>| {
        state.select_demographic_level(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "demographic-level-select",
                style: "font-weight: bold;",
                "{DEMOGRAPHIC_LEVEL_LABEL}"
            }
            select {
                id: "demographic-level-select",
                onchange: on_change,
                for level in options.iter() {
                    option {
                        value: "{level}",
                        selected: *level == selected,
                        "{level}"
                    }
                }
            }
        }
    }
}
