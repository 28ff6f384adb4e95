//! Data types the console renders: node liveness, per-database statistics
//! and the metrics catalog. Everything here arrives already computed from
//! backend layers; the `sample_*` constructors stand in for those layers.

pub mod databases;
pub mod liveness;
pub mod metrics;
pub mod nodes;

pub use databases::{DatabaseRow, DatabaseStats};
pub use liveness::{AggregatedStatus, LivenessStatus};
pub use metrics::MetricOption;
pub use nodes::{LocalityGroup, NodeStatus};
