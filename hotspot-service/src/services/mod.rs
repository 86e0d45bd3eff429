pub mod diagnostics;
pub mod memory;
pub mod mongo;
pub mod store;

pub use diagnostics::{probe, StatusReport};
pub use memory::MemoryStore;
pub use mongo::MongoStore;
pub use store::{DocumentStore, StoreHandle, HOTSPOT_COLLECTION};
