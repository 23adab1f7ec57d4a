//! Sample pantry used to seed or reset demonstration state.

use chrono::{DateTime, Duration, NaiveDate, Utc};

use crate::entities::{Food, FoodCategory};

/// (id, name, quantity, category, days from today until expiry)
const SAMPLE_FOODS: [(&str, &str, &str, FoodCategory, i64); 5] = [
    ("1", "Yogurt", "4 cups", FoodCategory::Dairy, -2),
    ("2", "Chicken", "500 g", FoodCategory::Meat, 2),
    ("3", "Milk", "1 carton", FoodCategory::Dairy, 3),
    ("4", "Tomatoes", "6 pieces", FoodCategory::Vegetables, 4),
    ("5", "Bread", "1 loaf", FoodCategory::Bakery, 5),
];

/// Builds the fixed sample set relative to the caller's `today`.
///
/// Ids are stable ("1" through "5") and expiry dates are offsets from `today`, so the
/// set covers expired, expiring-soon and good foods whenever it is generated. `now` only
/// stamps `created_at`; `today` must be the same local day the views are computed for.
#[must_use]
pub fn sample_foods(today: NaiveDate, now: DateTime<Utc>) -> Vec<Food> {
    SAMPLE_FOODS
        .iter()
        .map(|&(id, name, quantity, category, offset)| Food {
            id: id.to_string(),
            name: name.to_string(),
            quantity: quantity.to_string(),
            category,
            expiry_date: today + Duration::days(offset),
            donation_date: None,
            created_at: now,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::{
        expiry::{CalendarDay, ExpiryStatus, days_until_expiry, expiry_status},
        stats::compute_stats,
    };
    use crate::test_utils::*;
    use chrono::{FixedOffset, TimeZone};

    #[test]
    fn test_sample_foods_are_deterministic() {
        let today = date(2024, 1, 10);
        assert_eq!(
            sample_foods(today, test_now()),
            sample_foods(today, test_now())
        );
    }

    #[test]
    fn test_sample_foods_cover_every_status() {
        let today = date(2024, 1, 10);
        let foods = sample_foods(today, test_now());

        let statuses: Vec<ExpiryStatus> = foods
            .iter()
            .map(|food| expiry_status(&food.expiry_date, &today))
            .collect();
        assert!(statuses.contains(&ExpiryStatus::Expired));
        assert!(statuses.contains(&ExpiryStatus::ExpiringSoon));
        assert!(statuses.contains(&ExpiryStatus::Good));

        let stats = compute_stats(&foods, &today);
        assert_eq!(stats.total, 5);
        assert_eq!(stats.expired, 1);
        assert_eq!(stats.expiring_soon, 2);
        assert_eq!(stats.good, 2);
        assert_eq!(stats.expiring_this_week, 4);
    }

    #[test]
    fn test_sample_foods_have_unique_ids_and_active_state() {
        let foods = sample_foods(date(2024, 1, 10), test_now());
        let mut ids: Vec<&str> = foods.iter().map(|food| food.id.as_str()).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), foods.len());
        assert!(foods.iter().all(Food::is_active));
        assert!(foods.iter().all(|food| food.created_at == test_now()));
    }

    #[test]
    fn test_sample_offsets_follow_local_day_not_utc_day() {
        // 23:30 UTC is already the next morning in UTC+9
        let now = Utc.with_ymd_and_hms(2024, 1, 10, 23, 30, 0).unwrap();
        let tokyo = FixedOffset::east_opt(9 * 3600).unwrap();
        let today = now.with_timezone(&tokyo).calendar_day();
        assert_eq!(today, date(2024, 1, 11));

        let offsets: Vec<i64> = sample_foods(today, now)
            .iter()
            .map(|food| days_until_expiry(&food.expiry_date, &today))
            .collect();
        assert_eq!(offsets, vec![-2, 2, 3, 4, 5]);
    }
}
