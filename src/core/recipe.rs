//! Recipe suggestions - Helps use up foods before they spoil.
//!
//! Recipes come from a small built-in catalog. A recipe matches a food when one of its
//! ingredients contains the food's name or is contained in it, ignoring case, so "Milk"
//! matches "Oat Milk" and "Cherry Tomatoes" matches "Tomato".

use serde::Serialize;

use crate::{
    core::expiry::{CalendarDay, ExpiryStatus, expiry_status},
    entities::{Food, FoodCategory},
};

/// A catalog recipe.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct Recipe {
    /// Display name
    pub name: &'static str,
    /// One-line summary
    pub description: &'static str,
    /// Ingredient names matched against food names
    pub ingredients: &'static [&'static str],
    /// Rough preparation time, e.g. "10 mins"
    pub prep_time: &'static str,
    /// "Very Easy", "Easy" or "Medium"
    pub difficulty: &'static str,
    /// Short method
    pub instructions: &'static str,
}

const fn recipe(
    name: &'static str,
    description: &'static str,
    ingredients: &'static [&'static str],
    prep_time: &'static str,
    difficulty: &'static str,
    instructions: &'static str,
) -> Recipe {
    Recipe {
        name,
        description,
        ingredients,
        prep_time,
        difficulty,
        instructions,
    }
}

/// The built-in recipe catalog.
pub const RECIPES: &[Recipe] = &[
    // Dairy
    recipe(
        "Cheese Omelette",
        "A fluffy omelette with melted cheese",
        &["Milk", "Eggs", "Cheese"],
        "10 mins",
        "Easy",
        "Beat eggs with milk, pour into a buttered pan, add cheese, fold and serve.",
    ),
    recipe(
        "Creamy Pasta",
        "Pasta with a creamy milk sauce",
        &["Milk", "Pasta", "Butter"],
        "20 mins",
        "Easy",
        "Cook pasta, make a bechamel with milk and butter, mix with the pasta.",
    ),
    recipe(
        "Yogurt Parfait",
        "Layered yogurt with granola",
        &["Yogurt", "Granola", "Berries"],
        "5 mins",
        "Very Easy",
        "Layer yogurt, granola and berries in a glass. Serve immediately.",
    ),
    // Vegetables
    recipe(
        "Fresh Salad",
        "Crisp vegetable salad",
        &["Lettuce", "Tomato", "Cucumber"],
        "10 mins",
        "Very Easy",
        "Chop vegetables, toss with olive oil and vinegar, season to taste.",
    ),
    recipe(
        "Tomato Sauce",
        "Classic pasta sauce",
        &["Tomato", "Garlic", "Olive Oil"],
        "30 mins",
        "Easy",
        "Saute garlic, add chopped tomatoes, simmer 20 mins, season with salt and pepper.",
    ),
    recipe(
        "Vegetable Stir Fry",
        "Quick and colorful stir fry",
        &["Lettuce", "Tomato", "Garlic"],
        "15 mins",
        "Easy",
        "Heat oil, stir fry vegetables, add soy sauce and serve over rice.",
    ),
    // Meat
    recipe(
        "Grilled Chicken",
        "Juicy grilled chicken breast",
        &["Chicken", "Olive Oil", "Lemon"],
        "25 mins",
        "Easy",
        "Season chicken, grill 12-15 mins per side, rest 5 mins before serving.",
    ),
    recipe(
        "Chicken Soup",
        "Warm and comforting chicken soup",
        &["Chicken", "Carrots", "Celery"],
        "45 mins",
        "Easy",
        "Boil chicken with vegetables, season, simmer until cooked through.",
    ),
    // Bakery
    recipe(
        "Classic Sandwich",
        "Simple bread sandwich",
        &["Bread", "Butter", "Cheese"],
        "5 mins",
        "Very Easy",
        "Butter bread slices, add cheese, cut diagonally and serve.",
    ),
    recipe(
        "Bread Pudding",
        "Sweet dessert using stale bread",
        &["Bread", "Milk", "Eggs"],
        "50 mins",
        "Medium",
        "Cube bread, soak in milk and egg mixture, bake at 350F for 40 mins.",
    ),
    // Other
    recipe(
        "Ice Cream Sundae",
        "Classic ice cream dessert",
        &["Ice Cream", "Chocolate Sauce", "Nuts"],
        "5 mins",
        "Very Easy",
        "Scoop ice cream into a bowl, drizzle with sauce, top with nuts.",
    ),
    recipe(
        "Smoothie Bowl",
        "Frozen fruit smoothie bowl",
        &["Ice Cream", "Berries", "Granola"],
        "10 mins",
        "Easy",
        "Blend ice cream with berries, pour into a bowl, top with granola.",
    ),
];

/// Foods typically stored under each category, used for category-wide suggestions.
#[must_use]
pub const fn typical_foods(category: FoodCategory) -> &'static [&'static str] {
    match category {
        FoodCategory::Dairy => &["Milk", "Yogurt", "Cheese"],
        FoodCategory::Vegetables => &["Tomato", "Lettuce", "Cucumber"],
        FoodCategory::Meat => &["Chicken", "Beef", "Fish"],
        FoodCategory::Bakery => &["Bread", "Rice", "Pasta"],
        FoodCategory::Other => &[],
    }
}

fn ingredient_matches(ingredient: &str, food_lower: &str) -> bool {
    let ingredient = ingredient.to_lowercase();
    ingredient.contains(food_lower) || food_lower.contains(&ingredient)
}

impl Recipe {
    /// Whether any ingredient matches the food name.
    #[must_use]
    pub fn uses(&self, food_name: &str) -> bool {
        let food_lower = food_name.trim().to_lowercase();
        if food_lower.is_empty() {
            return false;
        }
        self.ingredients
            .iter()
            .any(|ingredient| ingredient_matches(ingredient, &food_lower))
    }
}

/// Recipes that use the named food.
#[must_use]
pub fn suggest_for_food(food_name: &str) -> Vec<Recipe> {
    RECIPES
        .iter()
        .filter(|recipe| recipe.uses(food_name))
        .copied()
        .collect()
}

/// Recipes that use at least one of the named foods, in catalog order.
#[must_use]
pub fn suggest_for_foods<S: AsRef<str>>(food_names: &[S]) -> Vec<Recipe> {
    RECIPES
        .iter()
        .filter(|recipe| food_names.iter().any(|name| recipe.uses(name.as_ref())))
        .copied()
        .collect()
}

/// Recipes for the foods typically found in `category`.
#[must_use]
pub fn suggest_for_category(category: FoodCategory) -> Vec<Recipe> {
    suggest_for_foods(typical_foods(category))
}

/// Recipes that use up active foods which are expiring soon.
#[must_use]
pub fn suggest_for_expiring(foods: &[Food], today: &impl CalendarDay) -> Vec<Recipe> {
    let today = today.calendar_day();
    let expiring: Vec<&str> = foods
        .iter()
        .filter(|food| food.is_active())
        .filter(|food| expiry_status(&food.expiry_date, &today) == ExpiryStatus::ExpiringSoon)
        .map(|food| food.name.as_str())
        .collect();

    suggest_for_foods(expiring.as_slice())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::*;

    fn names(recipes: &[Recipe]) -> Vec<&'static str> {
        recipes.iter().map(|recipe| recipe.name).collect()
    }

    #[test]
    fn test_suggest_for_food_matches_both_directions() {
        // Ingredient contained in the food name
        assert_eq!(
            names(&suggest_for_food("Cherry Tomato")),
            vec!["Fresh Salad", "Tomato Sauce", "Vegetable Stir Fry"]
        );
        // Food name contained in an ingredient, ignoring case
        assert_eq!(
            names(&suggest_for_food("cream")),
            vec!["Ice Cream Sundae", "Smoothie Bowl"]
        );
    }

    #[test]
    fn test_suggest_for_food_no_match() {
        assert!(suggest_for_food("Kimchi").is_empty());
        assert!(suggest_for_food("  ").is_empty());
    }

    #[test]
    fn test_suggest_for_foods_deduplicates() {
        let recipes = suggest_for_foods(&["Bread", "Butter"]);
        assert_eq!(
            names(&recipes),
            vec!["Creamy Pasta", "Classic Sandwich", "Bread Pudding"]
        );
    }

    #[test]
    fn test_suggest_for_category() {
        let dairy = names(&suggest_for_category(FoodCategory::Dairy));
        assert!(dairy.contains(&"Cheese Omelette"));
        assert!(dairy.contains(&"Yogurt Parfait"));
        assert!(dairy.contains(&"Classic Sandwich")); // uses cheese
        assert_eq!(
            names(&suggest_for_category(FoodCategory::Bakery)),
            vec!["Creamy Pasta", "Classic Sandwich", "Bread Pudding"]
        );
        assert!(suggest_for_category(FoodCategory::Other).is_empty());
    }

    #[test]
    fn test_suggest_for_expiring_uses_only_active_expiring_foods() {
        let today = date(2024, 1, 10);
        let mut donated = create_test_food("1", "Chicken", FoodCategory::Meat, date(2024, 1, 11));
        donated.donation_date = Some(test_now());
        let foods = vec![
            donated,
            create_test_food("2", "Yogurt", FoodCategory::Dairy, date(2024, 1, 12)),
            create_test_food("3", "Bread", FoodCategory::Bakery, date(2024, 2, 1)),
            create_test_food("4", "Lettuce", FoodCategory::Vegetables, date(2024, 1, 5)),
        ];

        assert_eq!(
            names(&suggest_for_expiring(&foods, &today)),
            vec!["Yogurt Parfait"]
        );
    }
}
