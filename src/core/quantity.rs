//! Structured view of the free-form quantity string.
//!
//! Foods store their quantity as one string ("500 g", "2 large jars"). Editing forms need
//! the amount and unit back as separate fields, so this module splits and rebuilds that
//! string. The split happens at the first whitespace only, which keeps multi-word units
//! intact.

use std::{fmt, str::FromStr};

use crate::errors::{Error, Result};

/// Units offered by the add/edit form, plus any custom text.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum Unit {
    /// Pieces
    #[default]
    Pcs,
    /// Kilograms
    Kg,
    /// Litres
    L,
    /// Grams
    G,
    /// Milligrams
    Mg,
    /// Free text, e.g. "cups" or "large jars"
    Custom(String),
}

impl Unit {
    /// The standard units in form order.
    pub const STANDARD: [Self; 5] = [Self::Pcs, Self::Kg, Self::L, Self::G, Self::Mg];

    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Pcs => "pcs",
            Self::Kg => "kg",
            Self::L => "L",
            Self::G => "g",
            Self::Mg => "mg",
            Self::Custom(label) => label,
        }
    }
}

impl fmt::Display for Unit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<&str> for Unit {
    fn from(label: &str) -> Self {
        let label = label.trim();
        Self::STANDARD
            .into_iter()
            .find(|unit| unit.as_str() == label)
            .unwrap_or_else(|| Self::Custom(label.to_string()))
    }
}

/// An amount paired with its unit.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Quantity {
    /// Amount as entered, e.g. "4" or "1.5"
    pub amount: String,
    pub unit: Unit,
}

impl Quantity {
    pub fn new(amount: impl Into<String>, unit: Unit) -> Self {
        Self {
            amount: amount.into(),
            unit,
        }
    }
}

impl fmt::Display for Quantity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.unit.as_str().is_empty() {
            f.write_str(&self.amount)
        } else {
            write!(f, "{} {}", self.amount, self.unit)
        }
    }
}

impl FromStr for Quantity {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        parse_quantity(s)
    }
}

/// Splits a stored quantity string into amount and unit.
///
/// A string without whitespace is treated as a bare amount counted in pieces.
///
/// # Errors
/// Returns `Error::Validation` for a blank string.
pub fn parse_quantity(s: &str) -> Result<Quantity> {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return Err(Error::validation("quantity", "Quantity cannot be empty"));
    }

    match trimmed.split_once(char::is_whitespace) {
        Some((amount, unit)) => Ok(Quantity::new(amount, Unit::from(unit))),
        None => Ok(Quantity::new(trimmed, Unit::Pcs)),
    }
}
