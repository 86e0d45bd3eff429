pub mod diagnostics;
pub mod health;
pub mod hotspots;
pub mod welcome;

pub use diagnostics::test_database;
pub use health::{health_check, metrics_endpoint, readiness_check};
pub use hotspots::{create_hotspot, list_hotspots, seed_hotspots};
pub use welcome::{hello, read_root};
