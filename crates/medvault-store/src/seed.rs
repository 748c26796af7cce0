//! # Seed Catalog
//!
//! The small built-in catalog a fresh session starts from when the durable
//! slot has never been written - or could not be read back. Gives the UI
//! something to render on first launch instead of an empty table.

use chrono::{TimeZone, Utc};

use medvault_core::{Medicine, Money};

/// The three demo medicines.
///
/// Ids are fixed (not UUIDs) so a fresh install is reproducible; every
/// medicine created through the store afterwards gets a generated UUID.
pub fn seed_catalog() -> Vec<Medicine> {
    vec![
        Medicine {
            id: "med1".to_string(),
            name: "Paracetamol 500mg".to_string(),
            manufacturer: Some("GSK".to_string()),
            category: Some("Pain Relief".to_string()),
            description: Some("For fever and mild pain".to_string()),
            shelf_number: None,
            price: Money::from_cents(599),
            stock: 100,
            expiry_date: Utc.with_ymd_and_hms(2024, 12, 31, 0, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 2, 15, 0, 0, 0).unwrap(),
        },
        Medicine {
            id: "med2".to_string(),
            name: "Amoxicillin 250mg".to_string(),
            manufacturer: Some("Pfizer".to_string()),
            category: Some("Antibiotics".to_string()),
            description: Some("For bacterial infections".to_string()),
            shelf_number: None,
            price: Money::from_cents(1250),
            stock: 50,
            expiry_date: Utc.with_ymd_and_hms(2024, 11, 15, 0, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2023, 3, 10, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 3, 10, 0, 0, 0).unwrap(),
        },
        Medicine {
            id: "med3".to_string(),
            name: "Loratadine 10mg".to_string(),
            manufacturer: Some("Bayer".to_string()),
            category: Some("Allergy".to_string()),
            description: Some("For allergy symptoms".to_string()),
            shelf_number: None,
            price: Money::from_cents(875),
            stock: 75,
            expiry_date: Utc.with_ymd_and_hms(2025, 4, 20, 0, 0, 0).unwrap(),
            created_at: Utc.with_ymd_and_hms(2023, 4, 5, 0, 0, 0).unwrap(),
            updated_at: Utc.with_ymd_and_hms(2023, 4, 5, 0, 0, 0).unwrap(),
        },
    ]
}
