use dioxus::prelude::*;

use crate::cluster::nodes::{group_by_locality, sample_nodes};
use crate::components::{LocalityBadge, StatusBadge, Tooltip};
use crate::utils::{docs, format_duration};

const NODES_CSS: Asset = asset!("/assets/styling/nodes.css");

// Column headers with the tooltip copy shown on hover. Version stays last
// so the header order matches the cell order of the node rows.
const COLUMNS: [(&str, &str); 8] = [
    ("Nodes", "Number of nodes in the locality."),
    ("Uptime", "Amount of time the node has been running."),
    ("Replicas", "Number of replicas on the node or in the locality."),
    (
        "Capacity Use",
        "Percentage of usable disk space occupied by cluster data at the locality or node.",
    ),
    (
        "Memory Use",
        "Percentage of total memory at the locality or node in use by the database.",
    ),
    ("vCPUs", "Number of vCPUs on the machine."),
    (
        "Status",
        "Node status can be live, suspect, dead, decommissioning, or decommissioned. \
         Hover over the status for each node to learn more.",
    ),
    (
        "Version",
        "Build tag of the database version installed on the node.",
    ),
];

#[component]
pub fn Nodes() -> Element {
    let nodes = use_signal(sample_nodes);
    let groups = group_by_locality(&nodes());

    rsx! {
        document::Link { rel: "stylesheet", href: NODES_CSS }
        div { class: "nodes-container",
            div { class: "nodes-header",
                h1 { "Nodes Overview" }
            }

            table { class: "nodes-table",
                thead {
                    tr {
                        {COLUMNS.iter().map(|(header, tip)| {
                            rsx! {
                                th { key: "{header}",
                                    Tooltip { text: tip.to_string(), "{header}" }
                                }
                            }
                        })}
                    }
                }
                tbody {
                    {groups.iter().map(|group| {
                        rsx! {
                            tr { key: "{group.locality}", class: "locality-row",
                                td { class: "locality-name",
                                    "{group.locality} ({group.nodes.len()} nodes)"
                                }
                                td {}
                                td {}
                                td {}
                                td {}
                                td {}
                                td { LocalityBadge { status: group.status } }
                                td {}
                            }
                            {group.nodes.iter().map(|node| {
                                rsx! {
                                    tr { key: "n{node.id}", class: "node-row",
                                        td { class: "node-address", "n{node.id} · {node.address}" }
                                        td { "{format_duration(node.uptime_secs)}" }
                                        td { "{node.replicas}" }
                                        td { "{node.capacity_used_percent}%" }
                                        td { "{node.memory_used_percent}%" }
                                        td { "{node.cpus}" }
                                        td { StatusBadge { status: node.liveness } }
                                        td { "{node.version}" }
                                    }
                                }
                            })}
                        }
                    })}
                }
            }

            p { class: "nodes-footnote",
                a {
                    href: "{docs::url(docs::NODE_LIVENESS_ISSUES)}",
                    target: "_blank",
                    "Learn more about node liveness"
                }
                " · "
                a {
                    href: "{docs::url(docs::CAPACITY_METRICS)}",
                    target: "_blank",
                    "How is capacity use calculated?"
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_column_header_carries_tooltip_copy() {
        for (header, tip) in COLUMNS {
            assert!(!header.is_empty());
            assert!(!tip.is_empty(), "column {} has no tooltip copy", header);
        }
        // Version is a tooltip'd column like the rest, and stays last so
        // the header order matches the node-row cell order.
        let (last_header, last_tip) = COLUMNS[COLUMNS.len() - 1];
        assert_eq!(last_header, "Version");
        assert!(last_tip.contains("Build tag"));
    }
}
