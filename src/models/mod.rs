//! Record shapes held by the dashboard collections and the closed
//! enumerations used to classify and filter them.

pub mod category;
pub mod client;
pub mod currency;
pub mod inventory_item;
pub mod material;
pub mod status;

pub use category::MaterialCategory;
pub use client::{ClientRecord, MaterialPreview, CARD_MATERIAL_PREVIEW};
pub use currency::Currency;
pub use inventory_item::{InventoryItem, StockFillBand};
pub use material::MaterialRecord;
pub use status::{ClientStatus, StockStatus, Trend, MATERIAL_LOW_STOCK_THRESHOLD};
