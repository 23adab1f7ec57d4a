//! Report formatting.
//!
//! Plain-text renderings of foods and statistics. All functions are framework-agnostic
//! and return strings that a front end can print as-is.

use chrono::{DateTime, Utc};

use crate::{
    core::{
        expiry::{CalendarDay, expiry_status, expiry_text},
        stats::FoodStats,
    },
    entities::Food,
};

/// One-line summary of an active food.
///
/// Produces lines like `Milk (1 carton) | Dairy | EXPIRING_SOON | 3 days left`.
#[must_use]
pub fn format_food_line(food: &Food, today: &impl CalendarDay) -> String {
    let status = expiry_status(&food.expiry_date, today);
    let text = expiry_text(food, today);
    format!(
        "{} ({}) | {} | {status} | {text}",
        food.name, food.quantity, food.category
    )
}

/// One-line summary of a donated food, e.g. `Bread (1 loaf) | donated on 2024-01-10`.
#[must_use]
pub fn format_donated_line(food: &Food) -> String {
    let donated_on = food
        .donation_date
        .as_ref()
        .map_or_else(|| "not donated".to_string(), format_donation_date);
    format!("{} ({}) | {donated_on}", food.name, food.quantity)
}

fn format_donation_date(date: &DateTime<Utc>) -> String {
    format!("donated on {}", date.format("%Y-%m-%d"))
}

/// Multi-line overview of the statistics.
#[must_use]
pub fn format_stats_summary(stats: &FoodStats) -> String {
    format!(
        "Total foods: {}\nExpiring soon: {}\nGood condition: {}\nExpired: {}\nExpiring this week: {}",
        stats.total, stats.expiring_soon, stats.good, stats.expired, stats.expiring_this_week
    )
}
