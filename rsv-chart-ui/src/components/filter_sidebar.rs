//! Sidebar holding all filter widgets.

use super::{AgeGroupSelector, DemographicLevelSelector, GroupMultiSelect};
use dioxus::prelude::*;
use rsv_data::chart::SIDEBAR_HEADER;

#[component]
pub fn FilterSidebar() -> Element {
    rsx! {
        aside {
            style: "flex: 0 0 260px; padding: 12px; background: #F5F7FA; border-right: 1px solid #E0E0E0;",
            h2 {
                style: "margin: 0 0 8px 0; font-size: 18px;",
                "{SIDEBAR_HEADER}"
            }
            AgeGroupSelector {}
            DemographicLevelSelector {}
            GroupMultiSelect {}
        }
    }
}
