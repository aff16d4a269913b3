//! Dioxus RSX components for the coverage dashboard.

mod age_group_selector;
mod chart_container;
mod demographic_level_selector;
mod filter_sidebar;
mod group_multi_select;
mod notice;
mod page_header;

pub use age_group_selector::AgeGroupSelector;
pub use chart_container::ChartContainer;
pub use demographic_level_selector::DemographicLevelSelector;
pub use filter_sidebar::FilterSidebar;
pub use group_multi_select::GroupMultiSelect;
pub use notice::{Notice, NoticeKind};
pub use page_header::PageHeader;
