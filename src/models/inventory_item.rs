use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::Display;
use utoipa::ToSchema;

use super::{MaterialCategory, StockStatus, Trend};

/// Fill percentage below which a stock bar is critical.
const CRITICAL_FILL_PERCENT: u32 = 20;
/// Fill percentage below which a stock bar is a warning.
const WARNING_FILL_PERCENT: u32 = 50;

/// A tracked stock position with explicit replenishment bounds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryItem {
    pub id: String,
    pub name: String,
    pub category: MaterialCategory,
    pub current_stock: u32,
    /// Expected to be <= `max_stock`; not enforced.
    pub min_stock: u32,
    pub max_stock: u32,
    pub unit: String,
    pub location: String,
    pub last_updated: DateTime<Utc>,
    pub trend: Trend,
    /// Percentage, 0-100 expected.
    pub turnover_rate: u8,
    #[schema(value_type = String, example = "125.50")]
    pub cost: Decimal,
}

/// Coarse bucket for the stock-level bar.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum StockFillBand {
    Critical,
    Warning,
    Healthy,
}

impl InventoryItem {
    pub fn status(&self) -> StockStatus {
        StockStatus::for_levels(self.current_stock, self.min_stock, self.max_stock)
    }

    /// `current_stock × cost`, saturating at `Decimal::MAX`.
    pub fn stock_value(&self) -> Decimal {
        Decimal::from(self.current_stock).saturating_mul(self.cost)
    }

    /// Current stock as a percentage of `max_stock`, uncapped.
    ///
    /// `None` when `max_stock` is zero.
    pub fn stock_percentage(&self) -> Option<Decimal> {
        if self.max_stock == 0 {
            return None;
        }
        Some(Decimal::from(self.current_stock) * Decimal::ONE_HUNDRED / Decimal::from(self.max_stock))
    }

    /// Percentage clamped to 100 for rendering a fill bar.
    pub fn fill_percentage(&self) -> Option<Decimal> {
        self.stock_percentage()
            .map(|pct| pct.min(Decimal::ONE_HUNDRED))
    }

    pub fn fill_band(&self) -> Option<StockFillBand> {
        self.stock_percentage().map(|pct| {
            if pct < Decimal::from(CRITICAL_FILL_PERCENT) {
                StockFillBand::Critical
            } else if pct < Decimal::from(WARNING_FILL_PERCENT) {
                StockFillBand::Warning
            } else {
                StockFillBand::Healthy
            }
        })
    }
}
