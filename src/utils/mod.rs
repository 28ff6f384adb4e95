/// Configuration constants for the application
pub mod config {
    /// Window title
    pub const APP_TITLE: &str = "Quorum Console";

    /// Base URL for the hosted documentation
    pub const DOCS_BASE_URL: &str = "https://docs.quorumdb.dev/stable";
}

/// Documentation pages linked from tooltips and footnotes
pub mod docs {
    use super::config::DOCS_BASE_URL;

    pub const NODE_LIVENESS_ISSUES: &str = "cluster-setup-troubleshooting#node-liveness-issues";
    pub const HOW_IT_WORKS: &str = "architecture/replication-layer";
    pub const CAPACITY_METRICS: &str = "ui-storage-dashboard#capacity-metrics";

    /// Full URL for a docs page constant.
    pub fn url(page: &str) -> String {
        format!("{}/{}", DOCS_BASE_URL, page)
    }
}

/// Human-readable value formatting for table cells and badges
pub mod format {
    const UNITS: [&str; 6] = ["B", "KiB", "MiB", "GiB", "TiB", "PiB"];

    /// Formats a byte count with IEC units and one decimal, e.g. "10.0 KiB"
    pub fn bytes(n: u64) -> String {
        if n < 1024 {
            return format!("{} B", n);
        }
        let mut value = n as f64;
        let mut unit = 0;
        while value >= 1024.0 && unit < UNITS.len() - 1 {
            value /= 1024.0;
            unit += 1;
        }
        format!("{:.1} {}", value, UNITS[unit])
    }
}

/// Formats a duration in seconds into a human-readable string (e.g., "2d", "5h", "30m")
pub fn format_duration(seconds: i64) -> String {
    if seconds < 60 {
        format!("{}s", seconds.max(0))
    } else if seconds < 3600 {
        format!("{}m", seconds / 60)
    } else if seconds < 86400 {
        format!("{}h", seconds / 3600)
    } else {
        format!("{}d", seconds / 86400)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_bytes() {
        assert_eq!(format::bytes(0), "0 B");
        assert_eq!(format::bytes(1023), "1023 B");
        assert_eq!(format::bytes(1024), "1.0 KiB");
        assert_eq!(format::bytes(10_240), "10.0 KiB");
        assert_eq!(format::bytes(1_536 * 1024), "1.5 MiB");
        assert_eq!(format::bytes(3_221_225_472), "3.0 GiB");
    }

    #[test]
    fn test_format_duration() {
        assert_eq!(format_duration(-5), "0s");
        assert_eq!(format_duration(45), "45s");
        assert_eq!(format_duration(90), "1m");
        assert_eq!(format_duration(7200), "2h");
        assert_eq!(format_duration(1_209_600), "14d");
    }

    #[test]
    fn test_docs_url() {
        let url = docs::url(docs::NODE_LIVENESS_ISSUES);
        assert!(url.starts_with(config::DOCS_BASE_URL));
        assert!(url.ends_with("node-liveness-issues"));
    }
}
