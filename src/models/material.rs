use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::{MaterialCategory, StockStatus, MATERIAL_LOW_STOCK_THRESHOLD};

/// A catalog entry. Status is derived from `quantity`, never stored.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaterialRecord {
    pub id: String,
    pub name: String,
    pub category: MaterialCategory,
    /// Unit price, never negative.
    #[schema(value_type = String, example = "125.50")]
    pub price: Decimal,
    pub quantity: u32,
    /// Unit label such as `pcs` or `sq ft`.
    pub unit: String,
    pub supplier: String,
}

impl MaterialRecord {
    /// Status using the default catalog threshold.
    pub fn status(&self) -> StockStatus {
        self.status_with_threshold(MATERIAL_LOW_STOCK_THRESHOLD)
    }

    pub fn status_with_threshold(&self, low_stock_threshold: u32) -> StockStatus {
        StockStatus::for_quantity(self.quantity, low_stock_threshold)
    }

    /// `price × quantity`, saturating at `Decimal::MAX`.
    pub fn stock_value(&self) -> Decimal {
        self.checked_stock_value().unwrap_or(Decimal::MAX)
    }

    /// `price × quantity`, or `None` when the product does not fit a `Decimal`.
    pub fn checked_stock_value(&self) -> Option<Decimal> {
        self.price.checked_mul(Decimal::from(self.quantity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn blocks(quantity: u32) -> MaterialRecord {
        MaterialRecord {
            id: "2".into(),
            name: "Concrete Blocks".into(),
            category: MaterialCategory::Masonry,
            price: dec!(8.75),
            quantity,
            unit: "pcs".into(),
            supplier: "BuildMat Supply".into(),
        }
    }

    #[test]
    fn oversized_value_saturates_instead_of_panicking() {
        let mut huge = blocks(245);
        huge.price = dec!(1000000000000000000000000000);
        assert_eq!(huge.checked_stock_value(), None);
        assert_eq!(huge.stock_value(), Decimal::MAX);
        assert_eq!(blocks(15).checked_stock_value(), Some(dec!(131.25)));
    }

    #[test]
    fn status_tracks_quantity() {
        assert_eq!(blocks(15).status(), StockStatus::LowStock);
        assert_eq!(blocks(0).status(), StockStatus::OutOfStock);
        assert_eq!(blocks(50).status(), StockStatus::InStock);
    }

    #[test]
    fn custom_threshold_moves_the_low_stock_line() {
        assert_eq!(blocks(15).status_with_threshold(10), StockStatus::InStock);
    }

    #[test]
    fn stock_value_multiplies_price_by_quantity() {
        assert_eq!(blocks(15).stock_value(), dec!(131.25));
    }
}
