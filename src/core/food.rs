//! Food business logic - Handles all collection operations on the pantry.
//!
//! Every operation is a pure transformation: it borrows the current collection, returns
//! the next one, and leaves the input untouched. On error nothing is produced, so the
//! caller's collection is never partially modified. Ownership of the authoritative list
//! lives in [`crate::pantry::Pantry`].

use chrono::{DateTime, NaiveDate, Utc};
use std::{fmt, str::FromStr};
use uuid::Uuid;

use crate::{
    core::expiry::{CalendarDay, ExpiryStatus, expiry_status},
    entities::{Food, FoodCategory, FoodDraft},
    errors::{Error, Result},
};

/// Category selector for the main list; `All` disables category filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    /// Match every category
    #[default]
    All,
    /// Match a single category
    Only(FoodCategory),
}

/// Expiry-status selector for the main list; `All` disables status filtering.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum StatusFilter {
    /// Match every status
    #[default]
    All,
    /// Match a single status
    Only(ExpiryStatus),
}

impl FromStr for CategoryFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl FromStr for StatusFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            Ok(Self::All)
        } else {
            s.parse().map(Self::Only)
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(category) => fmt::Display::fmt(category, f),
        }
    }
}

impl fmt::Display for StatusFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::All => f.write_str("All"),
            Self::Only(status) => fmt::Display::fmt(status, f),
        }
    }
}

/// The selectors of the main list view.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FoodFilter {
    /// Category selector
    pub category: CategoryFilter,
    /// Expiry status selector
    pub status: StatusFilter,
    /// Case-insensitive name fragment; empty matches everything
    pub search: String,
}

impl FoodFilter {
    #[must_use]
    pub fn with_category(mut self, category: FoodCategory) -> Self {
        self.category = CategoryFilter::Only(category);
        self
    }

    #[must_use]
    pub fn with_status(mut self, status: ExpiryStatus) -> Self {
        self.status = StatusFilter::Only(status);
        self
    }

    #[must_use]
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    /// Whether any selector narrows the list.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.category != CategoryFilter::All
            || self.status != StatusFilter::All
            || !self.search.is_empty()
    }
}

/// A draft that passed validation.
struct ValidDraft {
    name: String,
    quantity: String,
    category: FoodCategory,
    expiry_date: NaiveDate,
}

fn validate_draft(draft: &FoodDraft) -> Result<ValidDraft> {
    let name = draft.name.trim();
    if name.is_empty() {
        return Err(Error::validation("name", "Food name cannot be empty"));
    }

    let quantity = draft.quantity.trim();
    if quantity.is_empty() {
        return Err(Error::validation("quantity", "Quantity cannot be empty"));
    }

    let category = draft
        .category
        .ok_or_else(|| Error::validation("category", "Category is required"))?;
    let expiry_date = draft
        .expiry_date
        .ok_or_else(|| Error::validation("expiry_date", "Expiry date is required"))?;

    Ok(ValidDraft {
        name: name.to_string(),
        quantity: quantity.to_string(),
        category,
        expiry_date,
    })
}

fn position_of(foods: &[Food], id: &str) -> Result<usize> {
    foods
        .iter()
        .position(|food| food.id == id)
        .ok_or_else(|| Error::FoodNotFound { id: id.to_string() })
}

/// Appends a new food built from `draft`, assigning a fresh id and `created_at = now`.
///
/// Returns the next collection together with the created record.
///
/// # Errors
/// Returns `Error::Validation` if the name or quantity is blank, or the category or
/// expiry date is missing.
pub fn add_food(
    foods: &[Food],
    draft: &FoodDraft,
    now: DateTime<Utc>,
) -> Result<(Vec<Food>, Food)> {
    let valid = validate_draft(draft)?;

    let food = Food {
        id: Uuid::new_v4().to_string(),
        name: valid.name,
        quantity: valid.quantity,
        category: valid.category,
        expiry_date: valid.expiry_date,
        donation_date: None,
        created_at: now,
    };

    let mut next = Vec::with_capacity(foods.len() + 1);
    next.extend_from_slice(foods);
    next.push(food.clone());
    Ok((next, food))
}

/// Replaces every editable field of the food with `id`, keeping its id, creation time,
/// and donation state.
///
/// # Errors
/// Returns `Error::FoodNotFound` if no food has this id, or `Error::Validation` if the
/// replacement payload is incomplete.
pub fn update_food(foods: &[Food], id: &str, draft: &FoodDraft) -> Result<(Vec<Food>, Food)> {
    let index = position_of(foods, id)?;
    let valid = validate_draft(draft)?;

    let mut next = foods.to_vec();
    let food = &mut next[index];
    food.name = valid.name;
    food.quantity = valid.quantity;
    food.category = valid.category;
    food.expiry_date = valid.expiry_date;

    let updated = food.clone();
    Ok((next, updated))
}

/// Removes the food with `id`. Removing an unknown id returns the collection unchanged.
#[must_use]
pub fn delete_food(foods: &[Food], id: &str) -> Vec<Food> {
    foods.iter().filter(|food| food.id != id).cloned().collect()
}

/// Removes a food that was eaten or used up.
///
/// Same mechanics as [`delete_food`]; kept separate so callers state their intent.
#[must_use]
pub fn consume_food(foods: &[Food], id: &str) -> Vec<Food> {
    delete_food(foods, id)
}

/// Marks the food with `id` as donated at `now`. The record stays in the collection and
/// moves from the active view to the donated view.
///
/// A food that was already donated keeps its original donation date.
///
/// # Errors
/// Returns `Error::FoodNotFound` if no food has this id.
pub fn donate_food(foods: &[Food], id: &str, now: DateTime<Utc>) -> Result<(Vec<Food>, Food)> {
    let index = position_of(foods, id)?;

    let mut next = foods.to_vec();
    let food = &mut next[index];
    if food.donation_date.is_none() {
        food.donation_date = Some(now);
    }

    let donated = food.clone();
    Ok((next, donated))
}

/// Foods still in the pantry, in collection order.
#[must_use]
pub fn active_foods(foods: &[Food]) -> Vec<Food> {
    foods.iter().filter(|food| food.is_active()).cloned().collect()
}

/// Foods that have been donated, in collection order.
#[must_use]
pub fn donated_foods(foods: &[Food]) -> Vec<Food> {
    foods.iter().filter(|food| food.is_donated()).cloned().collect()
}

/// The main list view: active foods narrowed by `filter`, earliest expiry first.
///
/// Filters apply in order (category, status, name search). The sort is stable, so foods
/// expiring on the same day keep their collection order.
#[must_use]
pub fn filter_and_sort(foods: &[Food], filter: &FoodFilter, today: &impl CalendarDay) -> Vec<Food> {
    let today = today.calendar_day();
    let needle = filter.search.to_lowercase();

    let mut matching: Vec<Food> = foods
        .iter()
        .filter(|food| food.is_active())
        .filter(|food| match filter.category {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => food.category == category,
        })
        .filter(|food| match filter.status {
            StatusFilter::All => true,
            StatusFilter::Only(status) => expiry_status(&food.expiry_date, &today) == status,
        })
        .filter(|food| needle.is_empty() || food.name.to_lowercase().contains(&needle))
        .cloned()
        .collect();

    matching.sort_by_key(|food| food.expiry_date);
    matching
}
