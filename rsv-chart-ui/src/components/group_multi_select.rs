//! Multi-select for population groups, drawn as a checkbox list.

use crate::state::AppState;
use dioxus::prelude::*;
use rsv_data::chart::GROUPS_LABEL;

#[derive(Props, Clone, PartialEq)]
struct GroupCheckboxProps {
    group: String,
    checked: bool,
}

#[component]
fn GroupCheckbox(props: GroupCheckboxProps) -> Element {
    let mut state = use_context::<AppState>();
    let group = props.group.clone();

    rsx! {
        label {
            style: "display: flex; gap: 6px; align-items: center;",
            input {
                r#type: "checkbox",
                checked: props.checked,
                onchange: move |_| state.toggle_group(&group),
            }
            "{props.group}"
        }
    }
}

/// Checkbox list of the groups available under the current age group and
/// dimension. Every group starts checked.
#[component]
pub fn GroupMultiSelect() -> Element {
    let state = use_context::<AppState>();
    let groups = state.available_groups();
    let filter = state.filter.read().clone();

    rsx! {
        fieldset {
            style: "margin: 8px 0; border: 1px solid #ddd; border-radius: 4px; padding: 8px;",
            legend {
                style: "font-weight: bold;",
                "{GROUPS_LABEL}"
            }
            if groups.is_empty() {
                span { style: "color: #666;", "No groups for this selection" }
            }
            for group in groups.into_iter() {
                GroupCheckbox {
                    key: "{group}",
                    checked: filter.is_selected(&group),
                    group: group.clone(),
                }
            }
        }
    }
}
