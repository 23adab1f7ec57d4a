//! Expiry classification - Day arithmetic and status rules shared by every view.
//!
//! All functions take the reference day explicitly and never read a clock, so callers
//! sample "today" once per computation and pass it down.

use chrono::{DateTime, NaiveDate, NaiveDateTime, TimeZone};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::{
    entities::Food,
    errors::{Error, Result},
};

/// Foods with at most this many days left are expiring soon.
pub const EXPIRING_SOON_DAYS: i64 = 3;

/// Upper bound (inclusive) of the "expiring this week" window used by the statistics.
pub const EXPIRING_THIS_WEEK_DAYS: i64 = 7;

/// Anything that can be reduced to a calendar day.
///
/// Implemented for plain dates, naive timestamps, and zoned timestamps (which resolve
/// to the calendar day in their own time zone). Time-of-day is discarded.
pub trait CalendarDay {
    /// The calendar day this value falls on.
    fn calendar_day(&self) -> NaiveDate;
}

impl CalendarDay for NaiveDate {
    fn calendar_day(&self) -> NaiveDate {
        *self
    }
}

impl CalendarDay for NaiveDateTime {
    fn calendar_day(&self) -> NaiveDate {
        self.date()
    }
}

impl<Tz: TimeZone> CalendarDay for DateTime<Tz> {
    fn calendar_day(&self) -> NaiveDate {
        self.date_naive()
    }
}

/// Three-way classification of a food's remaining shelf life.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ExpiryStatus {
    /// Four or more days left
    Good,
    /// Between zero and three days left
    ExpiringSoon,
    /// Past its expiry day
    Expired,
}

impl ExpiryStatus {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Good => "GOOD",
            Self::ExpiringSoon => "EXPIRING_SOON",
            Self::Expired => "EXPIRED",
        }
    }
}

impl fmt::Display for ExpiryStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExpiryStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let normalized = s.trim().replace([' ', '-'], "_").to_ascii_uppercase();
        match normalized.as_str() {
            "GOOD" => Ok(Self::Good),
            "EXPIRING_SOON" => Ok(Self::ExpiringSoon),
            "EXPIRED" => Ok(Self::Expired),
            _ => Err(Error::validation(
                "status",
                format!("unknown expiry status '{}'", s.trim()),
            )),
        }
    }
}

/// Whole days from `today` until `expiry`, both truncated to their calendar day.
///
/// Negative once the expiry day has passed, zero on the expiry day itself. Because both
/// sides are normalized before subtracting, a food expiring later today still counts as
/// zero days left and one expiring tomorrow counts as one, whatever the wall-clock time.
#[must_use]
pub fn days_until_expiry(expiry: &impl CalendarDay, today: &impl CalendarDay) -> i64 {
    expiry
        .calendar_day()
        .signed_duration_since(today.calendar_day())
        .num_days()
}

/// Classifies an expiry date relative to `today`.
#[must_use]
pub fn expiry_status(expiry: &impl CalendarDay, today: &impl CalendarDay) -> ExpiryStatus {
    status_for_days(days_until_expiry(expiry, today))
}

/// Maps a days-until-expiry count onto its status.
#[must_use]
pub const fn status_for_days(days_left: i64) -> ExpiryStatus {
    if days_left < 0 {
        ExpiryStatus::Expired
    } else if days_left <= EXPIRING_SOON_DAYS {
        ExpiryStatus::ExpiringSoon
    } else {
        ExpiryStatus::Good
    }
}

/// Human-readable remaining shelf life, e.g. "Expires today!" or "3 days left".
#[must_use]
pub fn expiry_text(food: &Food, today: &impl CalendarDay) -> String {
    match days_until_expiry(&food.expiry_date, today) {
        days if days < 0 => "Expired!".to_string(),
        0 => "Expires today!".to_string(),
        1 => "1 day left".to_string(),
        days => format!("{days} days left"),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::entities::FoodCategory;
    use crate::test_utils::*;
    use chrono::{Duration, FixedOffset, NaiveTime};

    #[test]
    fn test_days_until_expiry_basic() {
        let today = date(2024, 1, 10);
        assert_eq!(days_until_expiry(&date(2024, 1, 8), &today), -2);
        assert_eq!(days_until_expiry(&date(2024, 1, 10), &today), 0);
        assert_eq!(days_until_expiry(&date(2024, 1, 11), &today), 1);
        assert_eq!(days_until_expiry(&date(2024, 2, 9), &today), 30);
    }

    #[test]
    fn test_days_until_expiry_crosses_month_and_year() {
        assert_eq!(days_until_expiry(&date(2024, 3, 1), &date(2024, 2, 28)), 2); // leap year
        assert_eq!(days_until_expiry(&date(2025, 1, 1), &date(2024, 12, 31)), 1);
    }

    #[test]
    fn test_days_until_expiry_ignores_time_of_day() {
        let today = date(2024, 1, 10);
        let late_evening = today.and_time(NaiveTime::from_hms_opt(23, 30, 0).unwrap());
        let tomorrow_early = date(2024, 1, 11).and_time(NaiveTime::from_hms_opt(0, 5, 0).unwrap());
        let tomorrow_late = date(2024, 1, 11).and_time(NaiveTime::from_hms_opt(22, 0, 0).unwrap());

        // Less than an hour away but on the next calendar day: still one day left
        assert_eq!(days_until_expiry(&tomorrow_early, &late_evening), 1);
        // 23 hours in the future from midnight still counts as tomorrow
        assert_eq!(
            days_until_expiry(&tomorrow_late, &today.and_hms_opt(0, 0, 0).unwrap()),
            1
        );
        // Expiring later the same day is zero days, never negative
        assert_eq!(days_until_expiry(&late_evening, &today.and_hms_opt(8, 0, 0).unwrap()), 0);
    }

    #[test]
    fn test_days_until_expiry_matches_midnight_normalized() {
        let today = date(2024, 1, 10);
        for offset in -10..=10 {
            let expiry_day = today + Duration::days(offset);
            let with_time = expiry_day.and_hms_opt(17, 45, 12).unwrap();
            let first = days_until_expiry(&with_time, &today);
            let second = days_until_expiry(&with_time, &today);
            assert_eq!(first, second);
            assert_eq!(first, days_until_expiry(&expiry_day, &today));
            assert_eq!(first, offset);
        }
    }

    #[test]
    fn test_days_until_expiry_uses_zoned_calendar_day() {
        let offset = FixedOffset::east_opt(9 * 3600).unwrap();
        // 23:00 local on Jan 10 is 14:00 UTC; the local calendar day is what counts
        let now = offset.with_ymd_and_hms(2024, 1, 10, 23, 0, 0).unwrap();
        assert_eq!(days_until_expiry(&date(2024, 1, 11), &now), 1);
    }

    #[test]
    fn test_status_partition_has_no_gaps() {
        for days in -30..=30 {
            let expected = if days < 0 {
                ExpiryStatus::Expired
            } else if days <= 3 {
                ExpiryStatus::ExpiringSoon
            } else {
                ExpiryStatus::Good
            };
            assert_eq!(status_for_days(days), expected, "days = {days}");
        }
    }

    #[test]
    fn test_status_boundaries() {
        let today = date(2024, 1, 10);
        assert_eq!(expiry_status(&date(2024, 1, 9), &today), ExpiryStatus::Expired);
        assert_eq!(expiry_status(&date(2024, 1, 10), &today), ExpiryStatus::ExpiringSoon);
        assert_eq!(expiry_status(&date(2024, 1, 13), &today), ExpiryStatus::ExpiringSoon);
        assert_eq!(expiry_status(&date(2024, 1, 14), &today), ExpiryStatus::Good);
    }

    #[test]
    fn test_reference_day_scenario() {
        let today = date(2024, 1, 10);
        let a = create_test_food("a", "A", FoodCategory::Dairy, date(2024, 1, 8));
        let b = create_test_food("b", "B", FoodCategory::Dairy, date(2024, 1, 10));
        let c = create_test_food("c", "C", FoodCategory::Dairy, date(2024, 1, 13));
        let d = create_test_food("d", "D", FoodCategory::Dairy, date(2024, 1, 14));

        assert_eq!(expiry_status(&a.expiry_date, &today), ExpiryStatus::Expired);
        assert_eq!(expiry_text(&a, &today), "Expired!");
        assert_eq!(expiry_status(&b.expiry_date, &today), ExpiryStatus::ExpiringSoon);
        assert_eq!(expiry_text(&b, &today), "Expires today!");
        assert_eq!(expiry_status(&c.expiry_date, &today), ExpiryStatus::ExpiringSoon);
        assert_eq!(expiry_text(&c, &today), "3 days left");
        assert_eq!(expiry_status(&d.expiry_date, &today), ExpiryStatus::Good);
        assert_eq!(expiry_text(&d, &today), "4 days left");
    }

    #[test]
    fn test_expiry_text_singular_day() {
        let today = date(2024, 1, 10);
        let food = create_test_food("1", "Milk", FoodCategory::Dairy, date(2024, 1, 11));
        assert_eq!(expiry_text(&food, &today), "1 day left");
        let food = create_test_food("2", "Milk", FoodCategory::Dairy, date(2024, 1, 12));
        assert_eq!(expiry_text(&food, &today), "2 days left");
    }

    #[test]
    fn test_status_parse_and_display() {
        assert_eq!("GOOD".parse::<ExpiryStatus>().unwrap(), ExpiryStatus::Good);
        assert_eq!(
            "expiring soon".parse::<ExpiryStatus>().unwrap(),
            ExpiryStatus::ExpiringSoon
        );
        assert_eq!("Expired".parse::<ExpiryStatus>().unwrap(), ExpiryStatus::Expired);
        assert!("stale".parse::<ExpiryStatus>().is_err());
        assert_eq!(ExpiryStatus::ExpiringSoon.to_string(), "EXPIRING_SOON");
    }
}
