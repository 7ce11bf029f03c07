use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use utoipa::ToSchema;

/// Quantity below which a catalog material counts as low stock.
pub const MATERIAL_LOW_STOCK_THRESHOLD: u32 = 50;

/// Stock classification derived from numeric stock levels.
///
/// Never stored alongside a record; always recomputed from the current
/// quantity so it cannot drift after an edit.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum StockStatus {
    #[serde(rename = "In Stock")]
    #[strum(serialize = "In Stock")]
    InStock,
    #[serde(rename = "Low Stock")]
    #[strum(serialize = "Low Stock")]
    LowStock,
    #[serde(rename = "Out of Stock")]
    #[strum(serialize = "Out of Stock")]
    OutOfStock,
    #[serde(rename = "Overstocked")]
    #[strum(serialize = "Overstocked")]
    Overstocked,
}

impl StockStatus {
    /// Classifies a catalog quantity against a single low-stock threshold.
    ///
    /// Zero wins over the threshold check.
    pub fn for_quantity(quantity: u32, low_stock_threshold: u32) -> Self {
        if quantity == 0 {
            StockStatus::OutOfStock
        } else if quantity < low_stock_threshold {
            StockStatus::LowStock
        } else {
            StockStatus::InStock
        }
    }

    /// Classifies a stock level against explicit min/max bounds.
    ///
    /// Checks run in a fixed order: zero, then `min_stock` (inclusive),
    /// then `max_stock` (inclusive). Inverted bounds are not rejected.
    pub fn for_levels(current_stock: u32, min_stock: u32, max_stock: u32) -> Self {
        if current_stock == 0 {
            StockStatus::OutOfStock
        } else if current_stock <= min_stock {
            StockStatus::LowStock
        } else if current_stock >= max_stock {
            StockStatus::Overstocked
        } else {
            StockStatus::InStock
        }
    }

    /// Low and out-of-stock records are the ones surfaced in alerts.
    pub fn needs_attention(&self) -> bool {
        matches!(self, StockStatus::LowStock | StockStatus::OutOfStock)
    }
}

/// Account status of a client. Supplied with the record, not derived.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[strum(ascii_case_insensitive)]
pub enum ClientStatus {
    Active,
    Inactive,
}

/// Movement direction reported for an inventory item.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    ToSchema,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum Trend {
    Up,
    Down,
    Stable,
}
