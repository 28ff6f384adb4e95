use dioxus::prelude::*;

use crate::cluster::databases::{disk_size_text, index_rec_text, DatabaseRow};
use crate::components::Tooltip;

#[derive(Props, PartialEq, Clone)]
pub struct CellProps {
    pub database: DatabaseRow,
}

/// Name cell: stack glyph plus the database name, swapped for a caution
/// glyph with the fetch error as tooltip when the row failed to load.
#[component]
pub fn DatabaseNameCell(props: CellProps) -> Element {
    let icon = match props.database.error.as_ref() {
        Some(error) => rsx! {
            Tooltip { text: error.clone(),
                span { class: "cell-icon icon-warning", "⚠" }
            }
        },
        None => rsx! {
            span { class: "cell-icon icon-primary", "▤" }
        },
    };

    rsx! {
        span { class: "database-name-cell",
            {icon}
            span { class: "database-name", "{props.database.name}" }
        }
    }
}

#[component]
pub fn DiskSizeCell(props: CellProps) -> Element {
    let text = disk_size_text(&props.database);
    rsx! {
        span { class: "disk-size-cell", "{text}" }
    }
}

/// Index recommendations cell: filled dot whose color tracks whether any
/// recommendations exist.
#[component]
pub fn IndexRecCell(props: CellProps) -> Element {
    let count = props
        .database
        .stats
        .as_ref()
        .map(|s| s.num_index_recommendations)
        .unwrap_or(0);
    let dot_class = if count > 0 {
        "rec-dot rec-dot-exist"
    } else {
        "rec-dot rec-dot-none"
    };
    let text = index_rec_text(count);
    rsx! {
        span { class: "index-rec-cell",
            span { class: "{dot_class}", "●" }
            span { "{text}" }
        }
    }
}
