//! Single-select for the age group.

use crate::state::AppState;
use dioxus::prelude::*;
use rsv_data::chart::AGE_GROUP_LABEL;

/// Age group dropdown.
/// Options are the distinct age groups in the data; changing the value
/// resets the population group selection.
#[component]
pub fn AgeGroupSelector() -> Element {
    let mut state = use_context::<AppState>();
    let options = state.age_groups.read().clone();
    let selected = state.filter.read().age_group.clone();

    let on_change = move |evt: Event<FormData>| {
        state.select_age_group(evt.value());
    };

    rsx! {
        div {
            style: "margin: 8px 0; display: flex; flex-direction: column; gap: 4px;",
            label {
                r#for: "age-group-select",
                style: "font-weight: bold;",
                "{AGE_GROUP_LABEL}"
            }
            select {
                id: "age-group-select",
                onchange: on_change,
                for age_group in options.iter() {
                    option {
                        value: "{age_group}",
                        selected: *age_group == selected,
                        "{age_group}"
                    }
                }
            }
        }
    }
}
