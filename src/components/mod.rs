//! The components module contains all shared components for our app. Components are the building blocks of dioxus apps.
//! They can be used to defined common UI elements like inputs, badges, and tooltips.

mod search_box;
pub use search_box::{SearchBox, SearchEffect, SearchEvent, SearchState, TrailingControl};

mod tooltip;
pub use tooltip::Tooltip;

mod status_badge;
pub use status_badge::{LocalityBadge, StatusBadge};

mod metric_select;
pub use metric_select::MetricSelect;

mod database_cells;
pub use database_cells::{DatabaseNameCell, DiskSizeCell, IndexRecCell};
