use serde::{Deserialize, Serialize};

use crate::utils::format;

/// Per-database statistics, already computed by the backend layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseStats {
    pub approximate_disk_bytes: Option<u64>,
    pub num_index_recommendations: u32,
}

/// One row of the databases listing page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DatabaseRow {
    pub name: String,
    pub table_count: u32,
    pub stats: Option<DatabaseStats>,
    /// Set when the backend failed to load details for this database.
    pub error: Option<String>,
}

/// Disk-size cell text: stats may be missing entirely, or present without a
/// size estimate, and a row-level fetch error trumps both.
pub fn disk_size_text(row: &DatabaseRow) -> String {
    if row.error.is_some() {
        return "(unavailable)".to_string();
    }
    match row.stats.as_ref().and_then(|s| s.approximate_disk_bytes) {
        Some(bytes) => format::bytes(bytes),
        None => "No data".to_string(),
    }
}

pub fn index_rec_text(count: u32) -> String {
    if count > 0 {
        format!("{} index recommendation(s)", count)
    } else {
        "None".to_string()
    }
}

/// Snapshot rendered by the databases view. Stands in for the out-of-scope
/// fetch layer.
pub fn sample_databases() -> Vec<DatabaseRow> {
    vec![
        DatabaseRow {
            name: "movr".to_string(),
            table_count: 6,
            stats: Some(DatabaseStats {
                approximate_disk_bytes: Some(41_943_040),
                num_index_recommendations: 2,
            }),
            error: None,
        },
        DatabaseRow {
            name: "orders".to_string(),
            table_count: 14,
            stats: Some(DatabaseStats {
                approximate_disk_bytes: Some(3_221_225_472),
                num_index_recommendations: 0,
            }),
            error: None,
        },
        DatabaseRow {
            name: "telemetry".to_string(),
            table_count: 3,
            stats: Some(DatabaseStats {
                approximate_disk_bytes: None,
                num_index_recommendations: 0,
            }),
            error: None,
        },
        DatabaseRow {
            name: "staging".to_string(),
            table_count: 0,
            stats: None,
            error: Some("unable to reach node n4: connection refused".to_string()),
        },
        DatabaseRow {
            name: "defaultdb".to_string(),
            table_count: 0,
            stats: Some(DatabaseStats {
                approximate_disk_bytes: Some(0),
                num_index_recommendations: 0,
            }),
            error: None,
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row(stats: Option<DatabaseStats>, error: Option<&str>) -> DatabaseRow {
        DatabaseRow {
            name: "db".to_string(),
            table_count: 1,
            stats,
            error: error.map(str::to_string),
        }
    }

    #[test]
    fn test_disk_size_text() {
        let sized = row(
            Some(DatabaseStats {
                approximate_disk_bytes: Some(10_240),
                num_index_recommendations: 0,
            }),
            None,
        );
        assert_eq!(disk_size_text(&sized), "10.0 KiB");

        let unsized_stats = row(
            Some(DatabaseStats {
                approximate_disk_bytes: None,
                num_index_recommendations: 0,
            }),
            None,
        );
        assert_eq!(disk_size_text(&unsized_stats), "No data");

        assert_eq!(disk_size_text(&row(None, None)), "No data");

        // An error makes the cell unavailable even if stats were cached.
        let errored = row(
            Some(DatabaseStats {
                approximate_disk_bytes: Some(10_240),
                num_index_recommendations: 0,
            }),
            Some("connection refused"),
        );
        assert_eq!(disk_size_text(&errored), "(unavailable)");
    }

    #[test]
    fn test_index_rec_text() {
        assert_eq!(index_rec_text(0), "None");
        assert_eq!(index_rec_text(1), "1 index recommendation(s)");
        assert_eq!(index_rec_text(3), "3 index recommendation(s)");
    }
}
