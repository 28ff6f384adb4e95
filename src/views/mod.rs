//! The views module contains the page-level components of the console.
//! Each submodule composes the shared components over the cluster snapshot.

mod navbar;
pub use navbar::{Navbar, Section};

mod home;
pub use home::Home;

mod nodes;
pub use nodes::Nodes;

mod databases;
pub use databases::Databases;

mod metrics;
pub use metrics::Metrics;
