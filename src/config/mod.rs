/// Seed food configuration loading from config.toml
pub mod foods;

/// Settings resolved from environment variables
pub mod settings;

pub use foods::{Config, FoodConfig, load_config, seed_pantry};
pub use settings::load_app_configuration;
