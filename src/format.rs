//! Pure derivation of display strings from a recipe record.

use crate::model::Recipe;

/// Sentinel returned when a recipe has no steps yet.
pub const NO_STEPS: &str = "No steps added yet";

/// Sentinel returned when a recipe has no ingredients yet.
pub const NO_INGREDIENTS: &str = "No ingredients added yet";

/// Cooking minutes per person served.
///
/// Plain IEEE division: a zero serving count yields an infinite (or NaN)
/// result rather than an error.
pub fn time_per_serving(recipe: &Recipe) -> f64 {
    recipe.cooking_time() / recipe.servings()
}

/// Numbered list of steps, 1-indexed, one per line with a trailing
/// newline. Empty recipes get the [`NO_STEPS`] sentinel instead.
pub fn steps_list(recipe: &Recipe) -> String {
    if recipe.steps().is_empty() {
        return NO_STEPS.to_string();
    }

    let mut list = String::new();
    for (index, step) in recipe.steps().iter().enumerate() {
        list.push_str(&format!("{}. {}\n", index + 1, step));
    }
    list
}

/// Bulleted list of ingredients in insertion order, one per line with a
/// trailing newline. Empty recipes get the [`NO_INGREDIENTS`] sentinel.
pub fn ingredients_list(recipe: &Recipe) -> String {
    if recipe.ingredients().is_empty() {
        return NO_INGREDIENTS.to_string();
    }

    let mut list = String::new();
    for ingredient in recipe.ingredients() {
        list.push_str(&format!(
            "- {} {} of {}\n",
            ingredient.amount, ingredient.unit, ingredient.name
        ));
    }
    list
}

/// The full recipe as a fixed multi-line template: header, then
/// servings / cooking time / time per serving, then the ingredients
/// block, then the steps block. Time per serving is rounded to one
/// decimal place.
pub fn format_recipe(recipe: &Recipe) -> String {
    format!(
        "\nRecipe: {}\nServings: {} for {} people\nCooking time: {} minutes\n\
         Time per serving: {:.1} minutes\n\nIngredients:\n{}\n\nSteps:\n{}\n",
        recipe.name(),
        recipe.servings(),
        recipe.servings(),
        recipe.cooking_time(),
        time_per_serving(recipe),
        ingredients_list(recipe),
        steps_list(recipe),
    )
}
