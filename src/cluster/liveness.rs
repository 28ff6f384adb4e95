use serde::{Deserialize, Serialize};

use crate::utils::docs;

/// Liveness of a single node, as reported by the (out of scope) status
/// endpoint. Mirrors the cluster's liveness record states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum LivenessStatus {
    Live,
    Unknown,
    Unavailable,
    Dead,
    Decommissioning,
    Decommissioned,
}

impl LivenessStatus {
    pub fn label(&self) -> &'static str {
        match self {
            LivenessStatus::Live => "Live",
            LivenessStatus::Unknown => "Unknown",
            LivenessStatus::Unavailable => "Unavailable",
            LivenessStatus::Dead => "Dead",
            LivenessStatus::Decommissioning => "Decommissioning",
            LivenessStatus::Decommissioned => "Decommissioned",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            LivenessStatus::Live => "status-healthy",
            LivenessStatus::Unknown | LivenessStatus::Unavailable => "status-warning",
            LivenessStatus::Dead => "status-critical",
            LivenessStatus::Decommissioning => "status-warning",
            LivenessStatus::Decommissioned => "status-neutral",
        }
    }

    /// Tooltip copy shown when hovering a node's status badge.
    pub fn description(&self) -> &'static str {
        match self {
            LivenessStatus::Live => "This node is online and updating its liveness record.",
            LivenessStatus::Unknown | LivenessStatus::Unavailable => {
                "This node has an unavailable liveness status."
            }
            LivenessStatus::Dead => {
                "This node has not updated its liveness record for 5 minutes. \
                 Replicas are automatically rebalanced from dead nodes to live nodes."
            }
            LivenessStatus::Decommissioning => {
                "This node is in the process of decommissioning, and may need time \
                 to transfer its data to other nodes. When finished, the node will \
                 appear in the list of decommissioned nodes."
            }
            LivenessStatus::Decommissioned => {
                "This node is decommissioned and has been permanently removed from \
                 this cluster."
            }
        }
    }

    /// Docs page elaborating on the state, where one exists.
    pub fn doc_page(&self) -> Option<&'static str> {
        match self {
            LivenessStatus::Live | LivenessStatus::Unknown | LivenessStatus::Unavailable => {
                Some(docs::NODE_LIVENESS_ISSUES)
            }
            LivenessStatus::Dead | LivenessStatus::Decommissioning => Some(docs::HOW_IT_WORKS),
            LivenessStatus::Decommissioned => None,
        }
    }
}

/// Rolled-up status of all nodes sharing a locality.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum AggregatedStatus {
    Live,
    Warning,
    Dead,
}

impl AggregatedStatus {
    /// Worst-case rollup: a single dead node marks the locality dead, any
    /// other non-live node marks it warning.
    pub fn of(statuses: &[LivenessStatus]) -> Self {
        if statuses.contains(&LivenessStatus::Dead) {
            AggregatedStatus::Dead
        } else if statuses.iter().any(|s| *s != LivenessStatus::Live) {
            AggregatedStatus::Warning
        } else {
            AggregatedStatus::Live
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            AggregatedStatus::Live => "Live",
            AggregatedStatus::Warning => "Warning",
            AggregatedStatus::Dead => "Dead",
        }
    }

    pub fn badge_class(&self) -> &'static str {
        match self {
            AggregatedStatus::Live => "status-healthy",
            AggregatedStatus::Warning => "status-warning",
            AggregatedStatus::Dead => "status-critical",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            AggregatedStatus::Live => "All nodes in this locality are live.",
            AggregatedStatus::Warning => {
                "This locality has 1 or more SUSPECT or DECOMMISSIONING nodes."
            }
            AggregatedStatus::Dead => "This locality has 1 or more DEAD nodes.",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_aggregated_status_rollup() {
        assert_eq!(
            AggregatedStatus::of(&[LivenessStatus::Live, LivenessStatus::Live]),
            AggregatedStatus::Live
        );
        assert_eq!(
            AggregatedStatus::of(&[LivenessStatus::Live, LivenessStatus::Decommissioning]),
            AggregatedStatus::Warning
        );
        assert_eq!(
            AggregatedStatus::of(&[LivenessStatus::Unavailable]),
            AggregatedStatus::Warning
        );
        // A dead node dominates any other state in the locality.
        assert_eq!(
            AggregatedStatus::of(&[LivenessStatus::Decommissioning, LivenessStatus::Dead]),
            AggregatedStatus::Dead
        );
        assert_eq!(AggregatedStatus::of(&[]), AggregatedStatus::Live);
    }

    #[test]
    fn test_liveness_descriptions() {
        assert!(LivenessStatus::Live.description().contains("liveness record"));
        assert_eq!(
            LivenessStatus::Unknown.description(),
            LivenessStatus::Unavailable.description()
        );
        assert!(LivenessStatus::Dead.description().contains("5 minutes"));
        assert!(LivenessStatus::Decommissioned.doc_page().is_none());
        assert_eq!(
            LivenessStatus::Live.doc_page(),
            Some(docs::NODE_LIVENESS_ISSUES)
        );
    }

    #[test]
    fn test_doc_pages_resolve_to_urls() {
        // Every state except decommissioned links its tooltip to the docs.
        let statuses = [
            LivenessStatus::Live,
            LivenessStatus::Unknown,
            LivenessStatus::Unavailable,
            LivenessStatus::Dead,
            LivenessStatus::Decommissioning,
        ];
        for status in statuses {
            let page = status.doc_page().expect("status should link to the docs");
            assert!(docs::url(page).starts_with("https://"));
        }
    }
}
