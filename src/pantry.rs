//! The in-memory pantry - sole owner of the authoritative food list.
//!
//! Each mutation runs the matching pure operation from `core::food` and swaps the list
//! only when it succeeds. Reads hand out the current list or a derived view computed for
//! the `today` the caller supplies.

use chrono::{DateTime, NaiveDate, Utc};
use tracing::{debug, info, trace, warn};

use crate::{
    core::{
        expiry::CalendarDay,
        food::{self, FoodFilter},
        recipe::{self, Recipe},
        sample,
        stats::{self, FoodStats},
    },
    entities::{Food, FoodDraft},
    errors::Result,
};

/// Session-only food collection.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Pantry {
    foods: Vec<Food>,
}

impl Pantry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts from an existing collection.
    #[must_use]
    pub const fn with_foods(foods: Vec<Food>) -> Self {
        Self { foods }
    }

    /// The current list, in insertion order, donated foods included.
    #[must_use]
    pub fn foods(&self) -> &[Food] {
        &self.foods
    }

    /// Looks up a food by id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&Food> {
        self.foods.iter().find(|food| food.id == id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.foods.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.foods.is_empty()
    }

    /// Adds a food and returns the stored record.
    ///
    /// # Errors
    /// Returns `Error::Validation` if the draft is incomplete.
    pub fn add(&mut self, draft: &FoodDraft, now: DateTime<Utc>) -> Result<Food> {
        let (next, created) = food::add_food(&self.foods, draft, now)
            .inspect_err(|e| warn!("Rejected new food '{}': {}", draft.name, e))?;
        self.foods = next;
        info!("Added food '{}' ({})", created.name, created.id);
        Ok(created)
    }

    /// Replaces the editable fields of a food and returns the stored record.
    ///
    /// # Errors
    /// Returns `Error::FoodNotFound` for an unknown id or `Error::Validation` for an
    /// incomplete draft.
    pub fn update(&mut self, id: &str, draft: &FoodDraft) -> Result<Food> {
        let (next, updated) = food::update_food(&self.foods, id, draft)
            .inspect_err(|e| warn!("Failed to update food {}: {}", id, e))?;
        self.foods = next;
        info!("Updated food '{}' ({})", updated.name, updated.id);
        Ok(updated)
    }

    /// Removes a food that was thrown away. Unknown ids are ignored.
    pub fn delete(&mut self, id: &str) {
        let before = self.foods.len();
        self.foods = food::delete_food(&self.foods, id);
        if self.foods.len() == before {
            debug!("Delete ignored, no food with id {}", id);
        } else {
            info!("Deleted food {}", id);
        }
    }

    /// Removes a food that was eaten or used up. Unknown ids are ignored.
    pub fn consume(&mut self, id: &str) {
        let before = self.foods.len();
        self.foods = food::consume_food(&self.foods, id);
        if self.foods.len() == before {
            debug!("Consume ignored, no food with id {}", id);
        } else {
            info!("Consumed food {}", id);
        }
    }

    /// Marks a food as donated and returns the stored record.
    ///
    /// # Errors
    /// Returns `Error::FoodNotFound` for an unknown id.
    pub fn donate(&mut self, id: &str, now: DateTime<Utc>) -> Result<Food> {
        let (next, donated) = food::donate_food(&self.foods, id, now)
            .inspect_err(|e| warn!("Failed to donate food {}: {}", id, e))?;
        self.foods = next;
        info!("Donated food '{}' ({})", donated.name, donated.id);
        Ok(donated)
    }

    /// Replaces the whole list with the sample set, dated relative to `today`.
    pub fn load_sample_data(&mut self, today: NaiveDate, now: DateTime<Utc>) {
        self.foods = sample::sample_foods(today, now);
        info!("Loaded {} sample foods", self.foods.len());
    }

    /// Empties the pantry.
    pub fn clear_all(&mut self) {
        let removed = self.foods.len();
        self.foods.clear();
        info!("Cleared pantry, {} foods removed", removed);
    }

    /// The main list view for `filter` at `today`.
    #[must_use]
    pub fn filtered(&self, filter: &FoodFilter, today: &impl CalendarDay) -> Vec<Food> {
        let foods = food::filter_and_sort(&self.foods, filter, today);
        trace!("Filter {:?} matched {} foods", filter, foods.len());
        foods
    }

    /// Foods still in the pantry, in insertion order.
    #[must_use]
    pub fn active(&self) -> Vec<Food> {
        food::active_foods(&self.foods)
    }

    /// Foods that have been donated, in insertion order.
    #[must_use]
    pub fn donated(&self) -> Vec<Food> {
        food::donated_foods(&self.foods)
    }

    /// Statistics over the active foods at `today`.
    #[must_use]
    pub fn stats(&self, today: &impl CalendarDay) -> FoodStats {
        stats::compute_stats(&self.foods, today)
    }

    /// Recipes that would use up foods expiring soon.
    #[must_use]
    pub fn recipe_suggestions(&self, today: &impl CalendarDay) -> Vec<Recipe> {
        recipe::suggest_for_expiring(&self.foods, today)
    }
}
