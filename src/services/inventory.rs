use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::instrument;
use utoipa::ToSchema;

use crate::{
    filters::InventoryFilter,
    models::{InventoryItem, StockFillBand, StockStatus},
    repositories::RecordStore,
    services::analytics::{InventoryAlert, InventoryMetrics},
};

/// An inventory row with every derived figure the table shows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryView {
    #[serde(flatten)]
    pub item: InventoryItem,
    pub status: StockStatus,
    #[schema(value_type = String)]
    pub stock_value: Decimal,
    /// Fill level for the stock bar, capped at 100.
    #[schema(value_type = Option<String>)]
    pub fill_percentage: Option<Decimal>,
    pub fill_band: Option<StockFillBand>,
}

impl From<&InventoryItem> for InventoryView {
    fn from(item: &InventoryItem) -> Self {
        Self {
            status: item.status(),
            stock_value: item.stock_value(),
            fill_percentage: item.fill_percentage().map(|pct| pct.round_dp(1)),
            fill_band: item.fill_band(),
            item: item.clone(),
        }
    }
}

/// Read-only view over the tracked stock positions.
#[derive(Debug, Clone)]
pub struct InventoryService {
    store: RecordStore<InventoryItem>,
    alerts_enabled: bool,
}

impl InventoryService {
    pub fn new(store: RecordStore<InventoryItem>, alerts_enabled: bool) -> Self {
        Self {
            store,
            alerts_enabled,
        }
    }

    pub fn len(&self) -> usize {
        self.store.len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.is_empty()
    }

    #[instrument(skip(self))]
    pub fn list(&self, filter: &InventoryFilter) -> Vec<InventoryView> {
        self.store
            .filtered(filter)
            .into_iter()
            .map(InventoryView::from)
            .collect()
    }

    pub fn get(&self, id: &str) -> Option<InventoryView> {
        self.store.get(id).map(InventoryView::from)
    }

    /// Low/out-of-stock counts and total value over every item.
    pub fn summary(&self) -> InventoryMetrics {
        InventoryMetrics::from_entries(
            self.store
                .iter()
                .map(|item| (item.status(), item.stock_value())),
        )
    }

    /// Alert banner, unless alerts are switched off in settings.
    pub fn alert(&self) -> Option<InventoryAlert> {
        if !self.alerts_enabled {
            return None;
        }
        self.summary().alert()
    }
}
