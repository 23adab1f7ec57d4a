//! Shared test utilities for `PantryBuddy`.
//!
//! This module provides fixed reference dates and helpers for building foods with
//! sensible defaults, so tests never depend on the real clock.

#![allow(clippy::unwrap_used)]

use chrono::{DateTime, NaiveDate, TimeZone, Utc};
use tracing_subscriber::EnvFilter;

use crate::entities::{Food, FoodCategory};

/// Builds a calendar date, panicking on an invalid one.
pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

/// The fixed "now" used across tests: 2024-01-10 12:00 UTC.
pub fn test_now() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2024, 1, 10, 12, 0, 0).unwrap()
}

/// Creates an active test food with sensible defaults.
///
/// # Defaults
/// * `quantity`: "1 pcs"
/// * `created_at`: [`test_now`]
/// * `donation_date`: None
pub fn create_test_food(
    id: &str,
    name: &str,
    category: FoodCategory,
    expiry_date: NaiveDate,
) -> Food {
    Food {
        id: id.to_string(),
        name: name.to_string(),
        quantity: "1 pcs".to_string(),
        category,
        expiry_date,
        donation_date: None,
        created_at: test_now(),
    }
}

/// Three active foods relative to 2024-01-10:
/// `a` (Dairy, 5 days), `b` (Meat, 1 day), `c` (Dairy, 3 days).
pub fn sample_collection() -> Vec<Food> {
    vec![
        create_test_food("a", "Cream Cheese", FoodCategory::Dairy, date(2024, 1, 15)),
        create_test_food("b", "Steak", FoodCategory::Meat, date(2024, 1, 11)),
        create_test_food("c", "Milk", FoodCategory::Dairy, date(2024, 1, 13)),
    ]
}

/// Routes `tracing` output to the test harness; safe to call from every test.
pub fn init_test_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("trace")),
        )
        .with_test_writer()
        .try_init();
}
