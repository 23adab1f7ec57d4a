//! Food entity - Represents one tracked pantry item.
//!
//! A food is created through `core::food::add_food`, may be edited or donated, and leaves
//! the collection when it is deleted or consumed. Donation state is carried by the
//! optional donation timestamp, so a record can never claim to be donated without one.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

use crate::errors::{Error, Result};

/// The closed set of categories a stored food can belong to.
///
/// "All" is only meaningful as a filter selector and lives in
/// [`crate::core::food::CategoryFilter`], never here.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum FoodCategory {
    /// Milk, yogurt, cheese
    Dairy,
    /// Bread and baked goods
    Bakery,
    /// Meat and poultry
    Meat,
    /// Fresh produce
    Vegetables,
    /// Anything else
    Other,
}

impl FoodCategory {
    /// Every storable category, in display order.
    pub const ALL: [Self; 5] = [
        Self::Dairy,
        Self::Bakery,
        Self::Meat,
        Self::Vegetables,
        Self::Other,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Dairy => "Dairy",
            Self::Bakery => "Bakery",
            Self::Meat => "Meat",
            Self::Vegetables => "Vegetables",
            Self::Other => "Other",
        }
    }
}

impl fmt::Display for FoodCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for FoodCategory {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        Self::ALL
            .into_iter()
            .find(|category| category.as_str().eq_ignore_ascii_case(trimmed))
            .ok_or_else(|| Error::validation("category", format!("unknown category '{trimmed}'")))
    }
}

/// Food model
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Food {
    /// Unique identifier, assigned at creation
    pub id: String,
    /// Display name (e.g., "Yogurt")
    pub name: String,
    /// Amount and unit in one string (e.g., "4 cups")
    pub quantity: String,
    /// Storage category
    pub category: FoodCategory,
    /// Calendar day the food expires
    pub expiry_date: NaiveDate,
    /// When the food was donated; `None` while it is still in the pantry
    pub donation_date: Option<DateTime<Utc>>,
    /// When the food was added
    pub created_at: DateTime<Utc>,
}

impl Food {
    /// Whether this food has been donated and left the active pantry view.
    #[must_use]
    pub const fn is_donated(&self) -> bool {
        self.donation_date.is_some()
    }

    /// Whether this food still belongs to the active pantry view.
    #[must_use]
    pub const fn is_active(&self) -> bool {
        !self.is_donated()
    }
}

/// The editable part of a food: the payload for adding a new record or replacing an
/// existing one.
///
/// `category` and `expiry_date` are optional so an incomplete form can be represented;
/// validation rejects them when missing.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FoodDraft {
    /// Name as typed; trimmed on save
    pub name: String,
    /// Amount and unit as typed, e.g. "2 L"
    pub quantity: String,
    /// Storage category, if one was picked
    pub category: Option<FoodCategory>,
    /// Expiry day, if one was picked
    pub expiry_date: Option<NaiveDate>,
}

impl FoodDraft {
    /// Builds a complete draft.
    pub fn new(
        name: impl Into<String>,
        quantity: impl Into<String>,
        category: FoodCategory,
        expiry_date: NaiveDate,
    ) -> Self {
        Self {
            name: name.into(),
            quantity: quantity.into(),
            category: Some(category),
            expiry_date: Some(expiry_date),
        }
    }
}

impl From<&Food> for FoodDraft {
    fn from(food: &Food) -> Self {
        Self::new(
            food.name.clone(),
            food.quantity.clone(),
            food.category,
            food.expiry_date,
        )
    }
}
