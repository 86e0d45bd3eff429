pub mod hotspot;
pub mod seed;

pub use hotspot::Hotspot;
pub use seed::seed_hotspots;
