//! HTTP handlers, one module per collection.
//!
//! Handlers only translate between HTTP and the services; every rule about
//! filtering, classification and aggregation lives in `crate::services`.

pub mod clients;
pub mod dashboard;
pub mod health;
pub mod inventory;
pub mod materials;

pub use crate::AppState;
