//! Ocean trash hotspot API: create and list hotspot records held in a
//! document store, plus diagnostics and demonstration seeding.
pub mod config;
pub mod dtos;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;

pub use startup::{build_router, AppState, Application};
