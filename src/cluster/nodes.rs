use serde::{Deserialize, Serialize};

use super::liveness::{AggregatedStatus, LivenessStatus};

/// Already-computed status of one node, as the backend layer reports it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeStatus {
    pub id: u32,
    pub address: String,
    pub locality: String,
    pub liveness: LivenessStatus,
    pub uptime_secs: i64,
    pub replicas: u32,
    pub cpus: u32,
    pub version: String,
    pub capacity_used_percent: f32,
    pub memory_used_percent: f32,
}

/// Nodes of one locality plus their rolled-up status, in the order the
/// overview table renders them.
#[derive(Debug, Clone, PartialEq)]
pub struct LocalityGroup {
    pub locality: String,
    pub status: AggregatedStatus,
    pub nodes: Vec<NodeStatus>,
}

/// Groups nodes by locality, preserving first-seen locality order.
pub fn group_by_locality(nodes: &[NodeStatus]) -> Vec<LocalityGroup> {
    let mut groups: Vec<LocalityGroup> = Vec::new();
    for node in nodes {
        match groups.iter_mut().find(|g| g.locality == node.locality) {
            Some(group) => group.nodes.push(node.clone()),
            None => groups.push(LocalityGroup {
                locality: node.locality.clone(),
                status: AggregatedStatus::Live,
                nodes: vec![node.clone()],
            }),
        }
    }
    for group in &mut groups {
        let statuses: Vec<LivenessStatus> = group.nodes.iter().map(|n| n.liveness).collect();
        group.status = AggregatedStatus::of(&statuses);
    }
    groups
}

/// Snapshot rendered by the nodes view. Stands in for the out-of-scope
/// status endpoint.
pub fn sample_nodes() -> Vec<NodeStatus> {
    vec![
        NodeStatus {
            id: 1,
            address: "10.0.1.11:26257".to_string(),
            locality: "region=us-east1".to_string(),
            liveness: LivenessStatus::Live,
            uptime_secs: 1_209_600,
            replicas: 112,
            cpus: 8,
            version: "v24.1.3".to_string(),
            capacity_used_percent: 41.0,
            memory_used_percent: 58.0,
        },
        NodeStatus {
            id: 2,
            address: "10.0.1.12:26257".to_string(),
            locality: "region=us-east1".to_string(),
            liveness: LivenessStatus::Live,
            uptime_secs: 1_209_300,
            replicas: 108,
            cpus: 8,
            version: "v24.1.3".to_string(),
            capacity_used_percent: 39.0,
            memory_used_percent: 55.0,
        },
        NodeStatus {
            id: 3,
            address: "10.0.2.21:26257".to_string(),
            locality: "region=us-west1".to_string(),
            liveness: LivenessStatus::Decommissioning,
            uptime_secs: 432_000,
            replicas: 64,
            cpus: 4,
            version: "v24.1.3".to_string(),
            capacity_used_percent: 71.0,
            memory_used_percent: 62.0,
        },
        NodeStatus {
            id: 4,
            address: "10.0.2.22:26257".to_string(),
            locality: "region=us-west1".to_string(),
            liveness: LivenessStatus::Dead,
            uptime_secs: 0,
            replicas: 0,
            cpus: 4,
            version: "v24.1.2".to_string(),
            capacity_used_percent: 0.0,
            memory_used_percent: 0.0,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_by_locality() {
        let groups = group_by_locality(&sample_nodes());

        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].locality, "region=us-east1");
        assert_eq!(groups[0].nodes.len(), 2);
        assert_eq!(groups[0].status, AggregatedStatus::Live);

        // us-west1 has a dead node, so the rollup is dead, not warning.
        assert_eq!(groups[1].locality, "region=us-west1");
        assert_eq!(groups[1].status, AggregatedStatus::Dead);
    }

    #[test]
    fn test_group_by_locality_empty() {
        assert!(group_by_locality(&[]).is_empty());
    }
}
