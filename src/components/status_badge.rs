use dioxus::prelude::*;

use crate::cluster::{AggregatedStatus, LivenessStatus};
use crate::components::Tooltip;
use crate::utils::docs;

#[derive(Props, PartialEq, Clone)]
pub struct StatusBadgeProps {
    pub status: LivenessStatus,
}

/// Liveness badge for a single node. The tooltip carries the status
/// explanation plus the docs anchor for states that have one.
#[component]
pub fn StatusBadge(props: StatusBadgeProps) -> Element {
    let badge_class = props.status.badge_class();
    let label = props.status.label();
    let badge = rsx! {
        span { class: "status-badge {badge_class}", "{label}" }
    };

    match props.status.doc_page() {
        Some(page) => rsx! {
            Tooltip {
                text: props.status.description().to_string(),
                link: docs::url(page),
                {badge}
            }
        },
        None => rsx! {
            Tooltip { text: props.status.description().to_string(), {badge} }
        },
    }
}

#[derive(Props, PartialEq, Clone)]
pub struct LocalityBadgeProps {
    pub status: AggregatedStatus,
}

/// Rolled-up badge for a locality row of the nodes table.
#[component]
pub fn LocalityBadge(props: LocalityBadgeProps) -> Element {
    let badge_class = props.status.badge_class();
    let label = props.status.label();
    rsx! {
        Tooltip { text: props.status.description().to_string(),
            span { class: "status-badge {badge_class}", "{label}" }
        }
    }
}
