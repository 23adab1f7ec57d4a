/// Expiry day arithmetic and status classification
pub mod expiry;
/// Collection operations: add, update, delete, consume, donate, filter and sort
pub mod food;
/// Amount and unit parsing for the quantity string
pub mod quantity;
/// Recipe suggestions for foods that need using up
pub mod recipe;
/// Plain-text formatting of foods and statistics
pub mod report;
/// Deterministic sample data
pub mod sample;
/// Aggregate statistics over the active pantry
pub mod stats;

pub use expiry::{CalendarDay, ExpiryStatus, days_until_expiry, expiry_status, expiry_text};
pub use food::{CategoryFilter, FoodFilter, StatusFilter};
pub use stats::{FoodStats, compute_stats};
