use chrono::{Local, Utc};
use dotenvy::dotenv;
use pantry_buddy::{
    Pantry, Result, config,
    core::{FoodFilter, report},
};
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // 1. Initialize tracing (as early as possible)
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    // 2. Load .env file; env vars can also be set externally
    dotenv().ok();
    info!("Attempted to load .env file.");

    // 3. Load the seed configuration
    let app_config = config::load_app_configuration()
        .inspect_err(|e| error!("Failed to load configuration: {}", e))?;

    // 4. Read the clock once; every view below uses the same day
    let now = Utc::now();
    let today = now.with_timezone(&Local).date_naive();

    let mut pantry = Pantry::new();
    config::seed_pantry(&mut pantry, &app_config, today, now)
        .inspect_err(|e| error!("Failed to seed pantry: {}", e))?;

    // 5. Render the overview
    println!("My Pantry ({today})");
    let foods = pantry.filtered(&FoodFilter::default(), &today);
    if foods.is_empty() {
        println!("  No foods in your pantry yet");
    }
    for food in &foods {
        println!("  {}", report::format_food_line(food, &today));
    }

    println!();
    println!("{}", report::format_stats_summary(&pantry.stats(&today)));

    let donated = pantry.donated();
    if !donated.is_empty() {
        println!();
        println!("Donated");
        for food in &donated {
            println!("  {}", report::format_donated_line(food));
        }
    }

    let recipes = pantry.recipe_suggestions(&today);
    if !recipes.is_empty() {
        println!();
        println!("Use them up");
        for recipe in &recipes {
            println!("  {} ({}, {})", recipe.name, recipe.prep_time, recipe.difficulty);
        }
    }

    Ok(())
}
