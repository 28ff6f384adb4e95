use serde::{Deserialize, Serialize};

/// One entry of the metrics catalog fed to the custom-chart picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MetricOption {
    pub label: String,
    pub value: String,
    pub description: String,
}

/// Case-insensitive substring match on the label; an empty query matches
/// everything.
pub fn filter_options<'a>(options: &'a [MetricOption], query: &str) -> Vec<&'a MetricOption> {
    let needle = query.to_lowercase();
    options
        .iter()
        .filter(|option| option.label.to_lowercase().contains(&needle))
        .collect()
}

/// Catalog rendered by the metrics view. Stands in for the out-of-scope
/// metrics metadata endpoint.
pub fn sample_catalog() -> Vec<MetricOption> {
    vec![
        MetricOption {
            label: "SQL Queries".to_string(),
            value: "sql.query.count".to_string(),
            description: "Number of SQL queries executed per second.".to_string(),
        },
        MetricOption {
            label: "SQL Latency (p99)".to_string(),
            value: "sql.service.latency-p99".to_string(),
            description: "99th percentile of SQL service latency.".to_string(),
        },
        MetricOption {
            label: "Replicas".to_string(),
            value: "replicas".to_string(),
            description: "Total range replicas held by the node.".to_string(),
        },
        MetricOption {
            label: "Capacity Used".to_string(),
            value: "capacity.used".to_string(),
            description: "Disk space in use by cluster data on the node.".to_string(),
        },
        MetricOption {
            label: "Live Node Count".to_string(),
            value: "liveness.livenodes".to_string(),
            description: "Number of live nodes in the cluster.".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<MetricOption> {
        sample_catalog()
    }

    #[test]
    fn test_empty_query_matches_all() {
        let options = catalog();
        assert_eq!(filter_options(&options, "").len(), options.len());
    }

    #[test]
    fn test_filter_is_case_insensitive() {
        let options = catalog();
        let hits = filter_options(&options, "sql");
        assert_eq!(hits.len(), 2);
        assert!(hits.iter().all(|o| o.label.starts_with("SQL")));
        assert_eq!(filter_options(&options, "LATENCY").len(), 1);
    }

    #[test]
    fn test_no_match_returns_empty() {
        let options = catalog();
        assert!(filter_options(&options, "zzz").is_empty());
    }
}
