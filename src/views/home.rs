use dioxus::prelude::*;

use crate::cluster::databases::sample_databases;
use crate::cluster::liveness::LivenessStatus;
use crate::cluster::nodes::sample_nodes;

const OVERVIEW_CSS: Asset = asset!("/assets/styling/overview.css");

/// The Home page component that renders the cluster dashboard overview
#[component]
pub fn Home() -> Element {
    let nodes = sample_nodes();
    let databases = sample_databases();

    let live = nodes
        .iter()
        .filter(|n| n.liveness == LivenessStatus::Live)
        .count();
    let dead = nodes
        .iter()
        .filter(|n| n.liveness == LivenessStatus::Dead)
        .count();
    let health = if dead > 0 { "Degraded" } else { "Healthy" };
    let health_class = if dead > 0 {
        "status-value status-warning"
    } else {
        "status-value status-healthy"
    };

    rsx! {
        document::Link { rel: "stylesheet", href: OVERVIEW_CSS }

        div { class: "overview-container",
            div { class: "overview-header",
                h1 { "Cluster Overview" }
            }

            div { class: "cluster-status",
                div { class: "status-card",
                    h3 { "Cluster Status" }
                    p { class: "{health_class}", "{health}" }
                    p { class: "status-subtext", "{dead} dead nodes" }
                }
                div { class: "status-card",
                    h3 { "Node Count" }
                    p { class: "status-value", "{live}/{nodes.len()}" }
                    p { class: "status-subtext", "Live/Total" }
                }
                div { class: "status-card",
                    h3 { "Databases" }
                    p { class: "status-value", "{databases.len()}" }
                    p { class: "status-subtext", "User and system databases" }
                }
            }
        }
    }
}
