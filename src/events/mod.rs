use std::collections::VecDeque;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::info;
use utoipa::ToSchema;

/// Things that happened to a collection, surfaced on the overview feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    MaterialPriceUpdated {
        material_id: String,
        name: String,
        old_price: Decimal,
        new_price: Decimal,
    },
    MaterialQuantityUpdated {
        material_id: String,
        name: String,
        old_quantity: u32,
        new_quantity: u32,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, ToSchema)]
pub enum ActivityKind {
    #[serde(rename = "Price updated")]
    #[strum(serialize = "Price updated")]
    PriceUpdated,
    #[serde(rename = "Inventory updated")]
    #[strum(serialize = "Inventory updated")]
    InventoryUpdated,
}

impl Event {
    pub fn kind(&self) -> ActivityKind {
        match self {
            Event::MaterialPriceUpdated { .. } => ActivityKind::PriceUpdated,
            Event::MaterialQuantityUpdated { .. } => ActivityKind::InventoryUpdated,
        }
    }

    pub fn item(&self) -> &str {
        match self {
            Event::MaterialPriceUpdated { name, .. }
            | Event::MaterialQuantityUpdated { name, .. } => name,
        }
    }

    pub fn detail(&self) -> String {
        match self {
            Event::MaterialPriceUpdated {
                old_price,
                new_price,
                ..
            } => format!("price {} -> {}", old_price, new_price),
            Event::MaterialQuantityUpdated {
                old_quantity,
                new_quantity,
                ..
            } => format!("quantity {} -> {}", old_quantity, new_quantity),
        }
    }
}

/// One line of the recent activity feed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct ActivityEntry {
    pub id: u64,
    pub action: ActivityKind,
    pub item: String,
    pub detail: String,
    pub occurred_at: DateTime<Utc>,
}

/// Bounded feed of recent activity; the oldest entry is dropped once full.
#[derive(Debug, Clone)]
pub struct ActivityLog {
    capacity: usize,
    next_id: u64,
    entries: VecDeque<ActivityEntry>,
}

impl ActivityLog {
    pub fn new(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            next_id: 1,
            entries: VecDeque::with_capacity(capacity),
        }
    }

    pub fn record(&mut self, event: &Event) -> &ActivityEntry {
        self.record_at(event, Utc::now())
    }

    pub fn record_at(&mut self, event: &Event, occurred_at: DateTime<Utc>) -> &ActivityEntry {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        let entry = ActivityEntry {
            id: self.next_id,
            action: event.kind(),
            item: event.item().to_string(),
            detail: event.detail(),
            occurred_at,
        };
        self.next_id += 1;
        info!(
            activity_id = entry.id,
            action = %entry.action,
            item = %entry.item,
            detail = %entry.detail,
            "activity recorded"
        );
        self.entries.push_back(entry);
        &self.entries[self.entries.len() - 1]
    }

    /// Newest first, at most `limit` entries.
    pub fn recent(&self, limit: usize) -> Vec<ActivityEntry> {
        self.entries.iter().rev().take(limit).cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn price_event(name: &str) -> Event {
        Event::MaterialPriceUpdated {
            material_id: "2".into(),
            name: name.into(),
            old_price: dec!(8.75),
            new_price: dec!(9.25),
        }
    }

    #[test]
    fn entries_describe_the_event() {
        let mut log = ActivityLog::new(10);
        let entry = log.record(&price_event("Concrete Blocks")).clone();
        assert_eq!(entry.id, 1);
        assert_eq!(entry.action, ActivityKind::PriceUpdated);
        assert_eq!(entry.action.to_string(), "Price updated");
        assert_eq!(entry.item, "Concrete Blocks");
        assert_eq!(entry.detail, "price 8.75 -> 9.25");

        let qty = Event::MaterialQuantityUpdated {
            material_id: "2".into(),
            name: "Concrete Blocks".into(),
            old_quantity: 15,
            new_quantity: 0,
        };
        let entry = log.record(&qty).clone();
        assert_eq!(entry.id, 2);
        assert_eq!(entry.action.to_string(), "Inventory updated");
        assert_eq!(entry.detail, "quantity 15 -> 0");
    }

    #[test]
    fn recent_is_newest_first_and_bounded() {
        let mut log = ActivityLog::new(3);
        for name in ["a", "b", "c", "d"] {
            log.record(&price_event(name));
        }
        assert_eq!(log.len(), 3);

        let items: Vec<String> = log.recent(10).into_iter().map(|e| e.item).collect();
        assert_eq!(items, vec!["d", "c", "b"]);
        assert_eq!(log.recent(1)[0].id, 4);
    }

    #[test]
    fn zero_capacity_is_clamped() {
        let mut log = ActivityLog::new(0);
        log.record(&price_event("a"));
        log.record(&price_event("b"));
        assert_eq!(log.len(), 1);
    }
}
