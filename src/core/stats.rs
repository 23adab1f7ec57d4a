//! Statistics aggregation over the active pantry.
//!
//! Stats are a projection of the collection at a given day and are recomputed on every
//! request; nothing here is cached.

use serde::{Deserialize, Serialize};

use crate::{
    core::expiry::{
        CalendarDay, EXPIRING_THIS_WEEK_DAYS, ExpiryStatus, days_until_expiry, status_for_days,
    },
    entities::Food,
};

/// Aggregate counts for the overview screen.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodStats {
    /// Number of active (non-donated) foods
    pub total: usize,
    /// Active foods past their expiry day
    pub expired: usize,
    /// Active foods with zero to three days left
    pub expiring_soon: usize,
    /// Active foods with four or more days left
    pub good: usize,
    /// Active foods with zero to seven days left
    pub expiring_this_week: usize,
}

/// Computes [`FoodStats`] over the non-donated foods, relative to `today`.
#[must_use]
pub fn compute_stats(foods: &[Food], today: &impl CalendarDay) -> FoodStats {
    let today = today.calendar_day();

    foods
        .iter()
        .filter(|food| food.is_active())
        .map(|food| days_until_expiry(&food.expiry_date, &today))
        .fold(FoodStats::default(), |mut stats, days_left| {
            stats.total += 1;
            match status_for_days(days_left) {
                ExpiryStatus::Expired => stats.expired += 1,
                ExpiryStatus::ExpiringSoon => stats.expiring_soon += 1,
                ExpiryStatus::Good => stats.good += 1,
            }
            if (0..=EXPIRING_THIS_WEEK_DAYS).contains(&days_left) {
                stats.expiring_this_week += 1;
            }
            stats
        })
}
