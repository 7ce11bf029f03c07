use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use super::ClientStatus;

/// A customer account. `materials` are free-form names with no link to
/// the catalog and may repeat.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ClientRecord {
    pub id: String,
    pub name: String,
    pub company: String,
    pub email: String,
    pub phone: String,
    pub address: String,
    pub total_orders: u32,
    #[schema(value_type = String, example = "45600")]
    pub total_value: Decimal,
    pub status: ClientStatus,
    pub materials: Vec<String>,
}

/// Material names shown on a client card before collapsing into "+N more".
pub const CARD_MATERIAL_PREVIEW: usize = 2;

/// Leading material names plus how many were left out.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, ToSchema)]
pub struct MaterialPreview {
    pub shown: Vec<String>,
    pub remaining: usize,
}

impl ClientRecord {
    /// `None` for clients without orders.
    pub fn average_order_value(&self) -> Option<Decimal> {
        if self.total_orders == 0 {
            None
        } else {
            Some(self.total_value / Decimal::from(self.total_orders))
        }
    }

    pub fn material_preview(&self, limit: usize) -> MaterialPreview {
        let shown: Vec<String> = self.materials.iter().take(limit).cloned().collect();
        MaterialPreview {
            remaining: self.materials.len() - shown.len(),
            shown,
        }
    }
}
