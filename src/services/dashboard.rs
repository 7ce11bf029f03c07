use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::{
    events::{ActivityEntry, ActivityLog},
    services::{
        analytics::InventoryAlert, clients::ClientDirectoryService,
        inventory::InventoryService, materials::MaterialCatalogService,
    },
};

/// Headline numbers for the overview cards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct OverviewStats {
    pub total_materials: usize,
    pub active_clients: usize,
    #[schema(value_type = String)]
    pub client_value: Decimal,
    /// Inventory items that are low or out of stock.
    pub low_stock_items: usize,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct DashboardOverview {
    pub stats: OverviewStats,
    pub alert: Option<InventoryAlert>,
    pub recent_activity: Vec<ActivityEntry>,
    pub generated_at: DateTime<Utc>,
}

impl DashboardOverview {
    /// Builds the overview from the live collections.
    pub fn compute(
        materials: &MaterialCatalogService,
        inventory: &InventoryService,
        clients: &ClientDirectoryService,
        activity: &ActivityLog,
        activity_limit: usize,
    ) -> Self {
        let stock = inventory.summary();
        let directory = clients.summary();

        Self {
            stats: OverviewStats {
                total_materials: materials.len(),
                active_clients: directory.active_clients,
                client_value: directory.total_value,
                low_stock_items: stock.low_stock_items + stock.out_of_stock_items,
            },
            alert: inventory.alert(),
            recent_activity: activity.recent(activity_limit),
            generated_at: Utc::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::MATERIAL_LOW_STOCK_THRESHOLD;
    use crate::repositories::RecordStore;
    use crate::seed;
    use rust_decimal_macros::dec;

    #[test]
    fn overview_reflects_collections_and_activity() {
        let mut materials = MaterialCatalogService::new(
            RecordStore::new(seed::sample_materials()).unwrap(),
            MATERIAL_LOW_STOCK_THRESHOLD,
        );
        let inventory =
            InventoryService::new(RecordStore::new(seed::sample_inventory()).unwrap(), true);
        let clients =
            ClientDirectoryService::new(RecordStore::new(seed::sample_clients()).unwrap());
        let mut log = ActivityLog::new(10);

        for (id, qty) in [("2", 40), ("3", 10), ("1", 200)] {
            if let crate::services::materials::MutationOutcome::Updated { event, .. } =
                materials.update_quantity(id, qty).unwrap()
            {
                log.record(&event);
            }
        }

        let overview = DashboardOverview::compute(&materials, &inventory, &clients, &log, 2);
        assert_eq!(overview.stats.total_materials, 4);
        assert_eq!(overview.stats.active_clients, 3);
        assert_eq!(overview.stats.client_value, dec!(112100));
        assert_eq!(overview.stats.low_stock_items, 2);
        assert!(overview.alert.is_some());

        let items: Vec<&str> = overview
            .recent_activity
            .iter()
            .map(|e| e.item.as_str())
            .collect();
        assert_eq!(items, vec!["Steel Pipes - 6 inch", "Ceramic Tiles - White"]);
    }
}
