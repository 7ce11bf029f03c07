//! Fixed demo data each view starts from.
//!
//! - 4 catalog materials (one low, one out of stock)
//! - 4 inventory positions mirroring the catalog
//! - 4 clients (3 active, 1 inactive)

use chrono::{DateTime, TimeZone, Utc};
use rust_decimal_macros::dec;

use crate::models::{
    ClientRecord, ClientStatus, InventoryItem, MaterialCategory, MaterialRecord, Trend,
};

fn at(year: i32, month: u32, day: u32, hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(year, month, day, hour, minute, 0)
        .single()
        .unwrap_or_default()
}

fn material(
    id: &str,
    name: &str,
    category: MaterialCategory,
    price: rust_decimal::Decimal,
    quantity: u32,
    unit: &str,
    supplier: &str,
) -> MaterialRecord {
    MaterialRecord {
        id: id.to_string(),
        name: name.to_string(),
        category,
        price,
        quantity,
        unit: unit.to_string(),
        supplier: supplier.to_string(),
    }
}

pub fn sample_materials() -> Vec<MaterialRecord> {
    vec![
        material(
            "1",
            "Steel Pipes - 6 inch",
            MaterialCategory::PipesAndFittings,
            dec!(125.50),
            245,
            "pcs",
            "Steel Corp Ltd",
        ),
        material(
            "2",
            "Concrete Blocks",
            MaterialCategory::Masonry,
            dec!(8.75),
            15,
            "pcs",
            "BuildMat Supply",
        ),
        material(
            "3",
            "Ceramic Tiles - White",
            MaterialCategory::TilesAndFlooring,
            dec!(45.00),
            0,
            "sq ft",
            "Tile Masters",
        ),
        material(
            "4",
            "PVC Pipes - 4 inch",
            MaterialCategory::PipesAndFittings,
            dec!(32.25),
            180,
            "pcs",
            "Plastic Works",
        ),
    ]
}

pub fn sample_inventory() -> Vec<InventoryItem> {
    vec![
        InventoryItem {
            id: "1".into(),
            name: "Steel Pipes - 6 inch".into(),
            category: MaterialCategory::PipesAndFittings,
            current_stock: 245,
            min_stock: 50,
            max_stock: 500,
            unit: "pcs".into(),
            location: "Warehouse A - Section 1".into(),
            last_updated: at(2024, 1, 15, 10, 30),
            trend: Trend::Down,
            turnover_rate: 85,
            cost: dec!(125.50),
        },
        InventoryItem {
            id: "2".into(),
            name: "Concrete Blocks".into(),
            category: MaterialCategory::Masonry,
            current_stock: 15,
            min_stock: 30,
            max_stock: 200,
            unit: "pcs".into(),
            location: "Warehouse B - Section 2".into(),
            last_updated: at(2024, 1, 15, 9, 15),
            trend: Trend::Down,
            turnover_rate: 92,
            cost: dec!(8.75),
        },
        InventoryItem {
            id: "3".into(),
            name: "Ceramic Tiles - White".into(),
            category: MaterialCategory::TilesAndFlooring,
            current_stock: 0,
            min_stock: 25,
            max_stock: 150,
            unit: "sq ft".into(),
            location: "Warehouse A - Section 3".into(),
            last_updated: at(2024, 1, 14, 16, 45),
            trend: Trend::Down,
            turnover_rate: 78,
            cost: dec!(45.00),
        },
        InventoryItem {
            id: "4".into(),
            name: "PVC Pipes - 4 inch".into(),
            category: MaterialCategory::PipesAndFittings,
            current_stock: 180,
            min_stock: 40,
            max_stock: 300,
            unit: "pcs".into(),
            location: "Warehouse A - Section 1".into(),
            last_updated: at(2024, 1, 15, 11, 20),
            trend: Trend::Up,
            turnover_rate: 67,
            cost: dec!(32.25),
        },
    ]
}

fn names(materials: &[&str]) -> Vec<String> {
    materials.iter().map(|m| m.to_string()).collect()
}

pub fn sample_clients() -> Vec<ClientRecord> {
    vec![
        ClientRecord {
            id: "1".into(),
            name: "John Smith".into(),
            company: "ABC Construction".into(),
            email: "john@abcconstruction.com".into(),
            phone: "+1 (555) 123-4567".into(),
            address: "123 Main St, City, State 12345".into(),
            total_orders: 15,
            total_value: dec!(45600),
            status: ClientStatus::Active,
            materials: names(&[
                "Steel Pipes - 6 inch",
                "Concrete Blocks",
                "PVC Pipes - 4 inch",
            ]),
        },
        ClientRecord {
            id: "2".into(),
            name: "Sarah Johnson".into(),
            company: "BuildRight LLC".into(),
            email: "sarah@buildright.com".into(),
            phone: "+1 (555) 987-6543".into(),
            address: "456 Oak Ave, City, State 67890".into(),
            total_orders: 8,
            total_value: dec!(23400),
            status: ClientStatus::Active,
            materials: names(&["Ceramic Tiles - White", "Steel Pipes - 6 inch"]),
        },
        ClientRecord {
            id: "3".into(),
            name: "Mike Davis".into(),
            company: "Davis Renovations".into(),
            email: "mike@davisreno.com".into(),
            phone: "+1 (555) 456-7890".into(),
            address: "789 Pine St, City, State 54321".into(),
            total_orders: 12,
            total_value: dec!(34200),
            status: ClientStatus::Active,
            materials: names(&[
                "Concrete Blocks",
                "Ceramic Tiles - White",
                "PVC Pipes - 4 inch",
            ]),
        },
        ClientRecord {
            id: "4".into(),
            name: "Lisa Chen".into(),
            company: "Metro Builders".into(),
            email: "lisa@metrobuilders.com".into(),
            phone: "+1 (555) 321-0987".into(),
            address: "321 Elm St, City, State 98765".into(),
            total_orders: 3,
            total_value: dec!(8900),
            status: ClientStatus::Inactive,
            materials: names(&["Steel Pipes - 6 inch"]),
        },
    ]
}
