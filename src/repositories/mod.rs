//! In-memory record collections owned by each dashboard view.

pub mod record_store;

pub use record_store::{Record, RecordStore};
