//! Entity module - Contains the pantry's data model.
//! Foods are plain values; all mutation goes through `core::food`.

pub mod food;

pub use food::{Food, FoodCategory, FoodDraft};
