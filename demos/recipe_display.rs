//! Deriving display strings from a recipe record.
//!
//! Run with: cargo run --example recipe_display

use recipe_manager::format::{format_recipe, steps_list, time_per_serving};
use recipe_manager::Recipe;

fn main() {
    println!("=== Recipe Display Examples ===");

    // Create a recipe with ingredients and steps
    let mut omelet = Recipe::with_servings("Simple Omelet", 10.0, 1.0);
    omelet.add_ingredient("Eggs", 2.0, "large");
    omelet.add_ingredient("Milk", 2.0, "tbsp");
    omelet.add_ingredient("Salt", 1.0, "pinch");
    omelet.add_ingredient("Butter", 1.0, "tbsp");

    omelet.add_step("Beat eggs, milk, and salt together");
    omelet.add_step("Melt butter in pan over medium heat");
    omelet.add_step("Pour egg mixture into pan");
    omelet.add_step("Cook until bottom is set, then fold in half");
    omelet.add_step("Slide onto plate and serve");

    // Calculate time per serving
    println!("Time per serving: {} minutes", time_per_serving(&omelet));

    // Get formatted steps list
    println!("Steps list:");
    println!("{}", steps_list(&omelet));

    // Get complete formatted recipe
    println!("\nFormatted recipe:");
    println!("{}", format_recipe(&omelet));
}
