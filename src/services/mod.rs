//! One service per dashboard collection, plus the reductions and the
//! overview that read across them.

pub mod analytics;
pub mod clients;
pub mod dashboard;
pub mod inventory;
pub mod materials;

pub use clients::ClientDirectoryService;
pub use dashboard::DashboardOverview;
pub use inventory::InventoryService;
pub use materials::{MaterialCatalogService, MutationOutcome};
