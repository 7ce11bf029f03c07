use rust_decimal::prelude::ToPrimitive;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use tracing::{info, instrument, warn};
use utoipa::ToSchema;

use crate::{
    errors::ServiceError,
    events::Event,
    filters::MaterialFilter,
    models::{MaterialCategory, MaterialRecord, StockStatus},
    repositories::RecordStore,
    services::analytics::InventoryMetrics,
};

/// A catalog row with its status resolved against the catalog threshold.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct MaterialView {
    #[serde(flatten)]
    pub material: MaterialRecord,
    pub status: StockStatus,
    #[schema(value_type = String)]
    pub stock_value: Decimal,
}

/// Result of an edit addressed by identifier.
#[derive(Debug, Clone, PartialEq)]
pub enum MutationOutcome {
    Updated { view: MaterialView, event: Event },
    /// No record had that identifier; nothing changed.
    Unmatched,
}

/// Owns the materials catalog and the only edits the dashboard allows.
#[derive(Debug, Clone)]
pub struct MaterialCatalogService {
    store: RecordStore<MaterialRecord>,
    low_stock_threshold: u32,
}

impl MaterialCatalogService {
    pub fn new(store: RecordStore<MaterialRecord>, low_stock_threshold: u32) -> Self {
        Self {
            store,
            low_stock_threshold,
        }
    }

    pub fn low_stock_threshold(&self) -> u32 {
        self.low_stock_threshold
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    pub fn status_of(&self, material: &MaterialRecord) -> StockStatus {
        material.status_with_threshold(self.low_stock_threshold)
    }

    fn view(&self, material: &MaterialRecord) -> MaterialView {
        MaterialView {
            status: self.status_of(material),
            stock_value: material.stock_value(),
            material: material.clone(),
        }
    }

    /// Selector values for the category dropdown, in catalog order.
    pub fn categories(&self) -> Vec<MaterialCategory> {
        MaterialCategory::iter().collect()
    }

    #[instrument(skip(self))]
    pub fn list(&self, filter: &MaterialFilter) -> Vec<MaterialView> {
        self.store
            .filtered(filter)
            .into_iter()
            .map(|material| self.view(material))
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<MaterialView> {
        self.store.get(id).map(|material| self.view(material))
    }

    /// Catalog-wide counts and value, independent of any filter.
    pub fn summary(&self) -> InventoryMetrics {
        InventoryMetrics::from_entries(
            self.store
                .iter()
                .map(|material| (self.status_of(material), material.stock_value())),
        )
    }

    /// Replaces the unit price. Status is unaffected.
    #[instrument(skip(self))]
    pub fn update_price(&mut self, id: &str, price: Decimal) -> Result<MutationOutcome, ServiceError> {
        if price < Decimal::ZERO {
            warn!(id, %price, "rejected negative price");
            return Err(ServiceError::ValidationError(format!(
                "price must not be negative (got {})",
                price
            )));
        }

        let Some(quantity) = self.store.get(id).map(|material| material.quantity) else {
            return Ok(MutationOutcome::Unmatched);
        };
        self.ensure_value_fits(id, price, quantity)?;

        let mut old_price = Decimal::ZERO;
        let Some(updated) = self
            .store
            .update(id, |material| {
                old_price = material.price;
                material.price = price;
            })
            .cloned()
        else {
            return Ok(MutationOutcome::Unmatched);
        };

        info!(id, %old_price, new_price = %price, "material price updated");
        let event = Event::MaterialPriceUpdated {
            material_id: updated.id.clone(),
            name: updated.name.clone(),
            old_price,
            new_price: price,
        };
        Ok(MutationOutcome::Updated {
            view: self.view(&updated),
            event,
        })
    }

    /// Replaces the on-hand quantity; the status follows from the new value.
    #[instrument(skip(self))]
    pub fn update_quantity(&mut self, id: &str, quantity: i64) -> Result<MutationOutcome, ServiceError> {
        let quantity = validate_quantity(quantity)?;
        let Some(price) = self.store.get(id).map(|material| material.price) else {
            return Ok(MutationOutcome::Unmatched);
        };
        self.ensure_value_fits(id, price, quantity)?;

        let mut old_quantity = 0;
        let Some(updated) = self
            .store
            .update(id, |material| {
                old_quantity = material.quantity;
                material.quantity = quantity;
            })
            .cloned()
        else {
            return Ok(MutationOutcome::Unmatched);
        };

        let view = self.view(&updated);
        info!(
            id,
            old_quantity,
            new_quantity = quantity,
            status = %view.status,
            "material quantity updated"
        );
        let event = Event::MaterialQuantityUpdated {
            material_id: updated.id.clone(),
            name: updated.name.clone(),
            old_quantity,
            new_quantity: quantity,
        };
        Ok(MutationOutcome::Updated { view, event })
    }

    /// Rejects an edit whose row value or catalog total would not fit a `Decimal`.
    fn ensure_value_fits(&self, id: &str, price: Decimal, quantity: u32) -> Result<(), ServiceError> {
        let total = price
            .checked_mul(Decimal::from(quantity))
            .and_then(|value| {
                self.store
                    .iter()
                    .filter(|material| material.id != id)
                    .try_fold(value, |total, material| {
                        material
                            .checked_stock_value()
                            .and_then(|other| total.checked_add(other))
                    })
            });
        if total.is_none() {
            warn!(id, %price, quantity, "rejected edit overflowing stock value");
            return Err(ServiceError::ValidationError(format!(
                "stock value of {} x {} is too large",
                price, quantity
            )));
        }
        Ok(())
    }
}

fn validate_quantity(quantity: i64) -> Result<u32, ServiceError> {
    if quantity < 0 {
        warn!(quantity, "rejected negative quantity");
        return Err(ServiceError::ValidationError(format!(
            "quantity must not be negative (got {})",
            quantity
        )));
    }
    u32::try_from(quantity).map_err(|_| {
        ServiceError::ValidationError(format!("quantity {} exceeds {}", quantity, u32::MAX))
    })
}

/// Plain or exponent notation (`1e-6`, `2.5E3`).
fn parse_decimal(raw: &str) -> Option<Decimal> {
    raw.parse::<Decimal>()
        .or_else(|_| Decimal::from_scientific(raw))
        .ok()
}

/// Parses a price typed into the catalog grid.
pub fn parse_price(raw: &str) -> Result<Decimal, ServiceError> {
    let trimmed = raw.trim();
    parse_decimal(trimmed)
        .ok_or_else(|| ServiceError::InvalidInput(format!("'{}' is not a valid price", trimmed)))
}

/// Parses a whole-number quantity typed into the catalog grid.
///
/// Integral values written as decimals (`40.0`, `4e1`) are accepted.
pub fn parse_quantity(raw: &str) -> Result<i64, ServiceError> {
    let trimmed = raw.trim();
    if let Ok(quantity) = trimmed.parse::<i64>() {
        return Ok(quantity);
    }
    let invalid = || ServiceError::InvalidInput(format!("'{}' is not a valid quantity", trimmed));
    let value = parse_decimal(trimmed).ok_or_else(invalid)?;
    if !value.fract().is_zero() {
        return Err(invalid());
    }
    value.to_i64().ok_or_else(|| {
        ServiceError::ValidationError(format!("quantity {} exceeds {}", trimmed, u32::MAX))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MATERIAL_LOW_STOCK_THRESHOLD;
    use crate::seed;
    use assert_matches::assert_matches;
    use rust_decimal_macros::dec;

    fn catalog() -> MaterialCatalogService {
        MaterialCatalogService::new(
            RecordStore::new(seed::sample_materials()).unwrap(),
            MATERIAL_LOW_STOCK_THRESHOLD,
        )
    }

    #[test]
    fn list_attaches_derived_status() {
        let statuses: Vec<StockStatus> = catalog()
            .list(&MaterialFilter::new())
            .into_iter()
            .map(|v| v.status)
            .collect();
        assert_eq!(
            statuses,
            vec![
                StockStatus::InStock,
                StockStatus::LowStock,
                StockStatus::OutOfStock,
                StockStatus::InStock
            ]
        );
    }

    #[test]
    fn quantity_update_recomputes_status() {
        let mut catalog = catalog();
        let outcome = catalog.update_quantity("2", 0).unwrap();
        assert_matches!(outcome, MutationOutcome::Updated { ref view, .. } if view.status == StockStatus::OutOfStock);
        assert_eq!(catalog.get("2").unwrap().status, StockStatus::OutOfStock);

        catalog.update_quantity("2", 75).unwrap();
        assert_eq!(catalog.get("2").unwrap().status, StockStatus::InStock);
    }

    #[test]
    fn price_update_leaves_status_alone() {
        let mut catalog = catalog();
        let outcome = catalog.update_price("2", dec!(9.25)).unwrap();
        match outcome {
            MutationOutcome::Updated { view, event } => {
                assert_eq!(view.material.price, dec!(9.25));
                assert_eq!(view.status, StockStatus::LowStock);
                assert_eq!(
                    event,
                    Event::MaterialPriceUpdated {
                        material_id: "2".into(),
                        name: "Concrete Blocks".into(),
                        old_price: dec!(8.75),
                        new_price: dec!(9.25),
                    }
                );
            }
            MutationOutcome::Unmatched => panic!("expected update"),
        }
    }

    #[test]
    fn zero_price_is_allowed() {
        let mut catalog = catalog();
        assert!(catalog.update_price("1", Decimal::ZERO).is_ok());
    }

    #[test]
    fn negative_input_is_rejected_without_change() {
        let mut catalog = catalog();
        assert_matches!(
            catalog.update_price("1", dec!(-1.00)),
            Err(ServiceError::ValidationError(_))
        );
        assert_matches!(
            catalog.update_quantity("1", -5),
            Err(ServiceError::ValidationError(_))
        );
        assert_matches!(
            catalog.update_quantity("1", i64::from(u32::MAX) + 1),
            Err(ServiceError::ValidationError(_))
        );
        let untouched = catalog.get("1").unwrap();
        assert_eq!(untouched.material.price, dec!(125.50));
        assert_eq!(untouched.material.quantity, 245);
    }

    #[test]
    fn overflowing_price_is_rejected_before_storing() {
        let mut catalog = catalog();
        let huge = parse_price("1000000000000000000000000000").unwrap();
        assert_matches!(
            catalog.update_price("1", huge),
            Err(ServiceError::ValidationError(_))
        );

        assert_eq!(catalog.get("1").unwrap().material.price, dec!(125.50));
        assert_eq!(catalog.summary().total_value, dec!(36683.75));
        assert_eq!(catalog.list(&MaterialFilter::new()).len(), 4);
    }

    #[test]
    fn overflowing_quantity_is_rejected_before_storing() {
        let mut catalog = catalog();
        catalog
            .update_price("1", dec!(10000000000000000000000))
            .unwrap();
        assert_matches!(
            catalog.update_quantity("1", i64::from(u32::MAX)),
            Err(ServiceError::ValidationError(_))
        );

        let view = catalog.get("1").unwrap();
        assert_eq!(view.material.quantity, 245);
        assert_eq!(view.stock_value, dec!(2450000000000000000000000));
        assert!(catalog.summary().total_value > dec!(2450000000000000000000000));
    }

    #[test]
    fn exponent_notation_is_accepted() {
        assert_eq!(parse_price("1e-6").unwrap(), dec!(0.000001));
        assert_eq!(parse_price("2.5E3").unwrap(), dec!(2500));
        assert_eq!(parse_quantity("40.0").unwrap(), 40);
        assert_eq!(parse_quantity("4e1").unwrap(), 40);
        assert_matches!(parse_quantity("1e-1"), Err(ServiceError::InvalidInput(_)));
    }

    #[test]
    fn unknown_id_is_unmatched_not_an_error() {
        let mut catalog = catalog();
        assert_eq!(catalog.update_price("99", dec!(1)).unwrap(), MutationOutcome::Unmatched);
        assert_eq!(catalog.update_quantity("99", 1).unwrap(), MutationOutcome::Unmatched);
    }

    #[test]
    fn configured_threshold_drives_status() {
        let catalog = MaterialCatalogService::new(
            RecordStore::new(seed::sample_materials()).unwrap(),
            200,
        );
        // 180 pcs of PVC pipe is now below the line.
        assert_eq!(catalog.get("4").unwrap().status, StockStatus::LowStock);
        assert_eq!(catalog.summary().low_stock_items, 2);
    }

    #[test]
    fn summary_covers_whole_catalog() {
        let summary = catalog().summary();
        assert_eq!(summary.total_items, 4);
        assert_eq!(summary.low_stock_items, 1);
        assert_eq!(summary.out_of_stock_items, 1);
        assert_eq!(summary.total_value, dec!(36683.75));
    }

    #[test]
    fn parsing_rejects_non_numeric_text() {
        assert_eq!(parse_price(" 12.40 ").unwrap(), dec!(12.40));
        assert_matches!(parse_price("NaN"), Err(ServiceError::InvalidInput(_)));
        assert_matches!(parse_price(""), Err(ServiceError::InvalidInput(_)));
        assert_eq!(parse_quantity("42").unwrap(), 42);
        assert_eq!(parse_quantity("-3").unwrap(), -3);
        assert_matches!(parse_quantity("4.5"), Err(ServiceError::InvalidInput(_)));
    }
}
