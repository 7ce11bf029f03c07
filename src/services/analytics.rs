//! Collection-wide reductions behind the summary cards.
//!
//! Every function here takes the full collection. Callers must not pass a
//! filtered view; the cards describe the whole stock regardless of what the
//! list currently shows.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{ClientRecord, ClientStatus, StockStatus};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct InventoryMetrics {
    pub total_items: usize,
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    #[schema(value_type = String, example = "36683.75")]
    pub total_value: Decimal,
}

impl InventoryMetrics {
    /// Reduces `(status, stock value)` pairs, one per record.
    pub fn from_entries<I>(entries: I) -> Self
    where
        I: IntoIterator<Item = (StockStatus, Decimal)>,
    {
        entries.into_iter().fold(
            InventoryMetrics {
                total_items: 0,
                low_stock_items: 0,
                out_of_stock_items: 0,
                total_value: Decimal::ZERO,
            },
            |mut acc, (status, value)| {
                acc.total_items += 1;
                match status {
                    StockStatus::LowStock => acc.low_stock_items += 1,
                    StockStatus::OutOfStock => acc.out_of_stock_items += 1,
                    StockStatus::InStock | StockStatus::Overstocked => {}
                }
                acc.total_value = acc.total_value.saturating_add(value);
                acc
            },
        )
    }

    pub fn needs_attention(&self) -> bool {
        self.low_stock_items > 0 || self.out_of_stock_items > 0
    }

    /// Banner shown when anything is low or out of stock.
    pub fn alert(&self) -> Option<InventoryAlert> {
        if !self.needs_attention() {
            return None;
        }
        Some(InventoryAlert {
            low_stock_items: self.low_stock_items,
            out_of_stock_items: self.out_of_stock_items,
            message: format!(
                "You have {} low stock items and {} out of stock items that need attention.",
                self.low_stock_items, self.out_of_stock_items
            ),
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct InventoryAlert {
    pub low_stock_items: usize,
    pub out_of_stock_items: usize,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientMetrics {
    pub total_clients: usize,
    pub active_clients: usize,
    pub inactive_clients: usize,
    pub total_orders: u64,
    #[schema(value_type = String, example = "112100")]
    pub total_value: Decimal,
    /// `None` when no client has placed an order.
    #[schema(value_type = Option<String>)]
    pub average_order_value: Option<Decimal>,
}

pub fn client_metrics<'a, I>(clients: I) -> ClientMetrics
where
    I: IntoIterator<Item = &'a ClientRecord>,
{
    let mut metrics = ClientMetrics {
        total_clients: 0,
        active_clients: 0,
        inactive_clients: 0,
        total_orders: 0,
        total_value: Decimal::ZERO,
        average_order_value: None,
    };
    for client in clients {
        metrics.total_clients += 1;
        match client.status {
            ClientStatus::Active => metrics.active_clients += 1,
            ClientStatus::Inactive => metrics.inactive_clients += 1,
        }
        metrics.total_orders += u64::from(client.total_orders);
        metrics.total_value = metrics.total_value.saturating_add(client.total_value);
    }
    if metrics.total_orders > 0 {
        metrics.average_order_value =
            Some(metrics.total_value / Decimal::from(metrics.total_orders));
    }
    metrics
}

/// How many distinct clients list a material name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct MaterialDemand {
    pub material: String,
    pub clients: usize,
}

/// Demand per material name, most requested first.
///
/// Names repeated within one client count once. Ties keep the order in
/// which names first appear.
pub fn material_demand<'a, I>(clients: I) -> Vec<MaterialDemand>
where
    I: IntoIterator<Item = &'a ClientRecord>,
{
    let mut demand: Vec<MaterialDemand> = Vec::new();
    for client in clients {
        let mut counted: Vec<&str> = Vec::with_capacity(client.materials.len());
        for name in &client.materials {
            if counted.contains(&name.as_str()) {
                continue;
            }
            counted.push(name);
            match demand.iter_mut().find(|d| d.material == *name) {
                Some(entry) => entry.clients += 1,
                None => demand.push(MaterialDemand {
                    material: name.clone(),
                    clients: 1,
                }),
            }
        }
    }
    // stable sort keeps first-appearance order among ties
    demand.sort_by(|a, b| b.clients.cmp(&a.clients));
    demand
}
