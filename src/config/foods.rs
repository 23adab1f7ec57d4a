//! Seed food configuration loading from config.toml
//!
//! The TOML file decides how a fresh pantry starts: optionally with the built-in sample
//! set, plus any foods listed under `[[foods]]`. Expiry dates are given relative to the
//! day the pantry is seeded, so a config file stays useful from one day to the next.

use chrono::{DateTime, Duration, NaiveDate, Utc};
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, info};

use crate::{
    core::{food, sample},
    entities::{FoodCategory, FoodDraft},
    errors::{Error, Result},
    pantry::Pantry,
};

const fn default_load_sample_data() -> bool {
    true
}

/// Configuration structure representing the entire config.toml file
#[derive(Debug, Deserialize, PartialEq, Eq)]
pub struct Config {
    /// Whether to start from the built-in sample foods
    #[serde(default = "default_load_sample_data")]
    pub load_sample_data: bool,
    /// Extra foods to add on start-up
    #[serde(default)]
    pub foods: Vec<FoodConfig>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            load_sample_data: default_load_sample_data(),
            foods: Vec::new(),
        }
    }
}

/// Configuration for a single seed food
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct FoodConfig {
    /// Name of the food
    pub name: String,
    /// Amount and unit, e.g. "200 g"
    pub quantity: String,
    /// Storage category ("Dairy", "Bakery", "Meat", "Vegetables" or "Other")
    pub category: FoodCategory,
    /// Days from the seeding day until the food expires; negative for already expired
    pub expires_in_days: i64,
}

impl FoodConfig {
    /// Turns this entry into a draft expiring `expires_in_days` after `today`.
    ///
    /// # Errors
    /// Returns `Error::Config` if the offset leaves the supported date range.
    pub fn to_draft(&self, today: NaiveDate) -> Result<FoodDraft> {
        let expiry_date = Duration::try_days(self.expires_in_days)
            .and_then(|offset| today.checked_add_signed(offset))
            .ok_or_else(|| Error::Config {
                message: format!(
                    "expires_in_days = {} for '{}' is out of range",
                    self.expires_in_days, self.name
                ),
            })?;

        Ok(FoodDraft::new(
            self.name.clone(),
            self.quantity.clone(),
            self.category,
            expiry_date,
        ))
    }
}

/// Parses configuration from TOML text.
///
/// # Errors
/// Returns `Error::Config` if the TOML syntax is invalid or a field has the wrong type.
pub fn parse_config(contents: &str) -> Result<Config> {
    toml::from_str(contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })
}

/// Loads seed configuration from a TOML file
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - A seed food has an unknown category
pub fn load_config<P: AsRef<Path>>(path: P) -> Result<Config> {
    let path_ref = path.as_ref();
    debug!("Attempting to load configuration from: {:?}", path_ref);
    let contents = std::fs::read_to_string(path_ref).map_err(|e| Error::Config {
        message: format!("Failed to read config file {}: {e}", path_ref.display()),
    })?;

    parse_config(&contents)
}

/// Fills `pantry` according to `config`, returning the pantry size afterwards.
///
/// Sample data replaces the current contents; configured foods are then appended through
/// the normal add operation, so they are validated like user input. Expiry offsets count
/// from `today`, the caller's local day. The pantry is only replaced once every entry has
/// been accepted, so a bad entry leaves it untouched.
///
/// # Errors
/// Returns `Error::Config` for an out-of-range expiry offset or `Error::Validation` for
/// an entry with a blank name or quantity.
pub fn seed_pantry(
    pantry: &mut Pantry,
    config: &Config,
    today: NaiveDate,
    now: DateTime<Utc>,
) -> Result<usize> {
    let mut foods = if config.load_sample_data {
        sample::sample_foods(today, now)
    } else {
        pantry.foods().to_vec()
    };

    for entry in &config.foods {
        let draft = entry.to_draft(today)?;
        let (next, created) = food::add_food(&foods, &draft, now)?;
        debug!("Seeded food '{}' ({})", created.name, created.id);
        foods = next;
    }

    *pantry = Pantry::with_foods(foods);
    info!("Seeded pantry with {} foods", pantry.len());
    Ok(pantry.len())
}
