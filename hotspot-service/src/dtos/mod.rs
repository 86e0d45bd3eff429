pub mod hotspots;

pub use hotspots::{CreateHotspotResponse, HotspotListParams, MessageResponse, SeedResponse};
