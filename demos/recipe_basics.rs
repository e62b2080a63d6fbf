//! Creating and editing a recipe record.
//!
//! Run with: cargo run --example recipe_basics

use recipe_manager::Recipe;

fn main() {
    println!("=== Recipe Basics Examples ===");

    // Create a recipe
    let mut pancakes = Recipe::with_servings("Pancakes", 20.0, 6.0);
    println!("Created recipe: {pancakes:?}");

    // Add ingredients
    pancakes.add_ingredient("Flour", 2.0, "cups");
    pancakes.add_ingredient("Milk", 1.5, "cups");
    pancakes.add_ingredient("Eggs", 2.0, "large");
    println!("Recipe with ingredients: {:?}", pancakes.ingredients());

    // Add steps
    pancakes.add_step("Mix dry ingredients in a bowl");
    pancakes.add_step("Add wet ingredients and stir until smooth");
    pancakes.add_step("Heat griddle and pour batter to form pancakes");
    pancakes.add_step("Flip when bubbles form on surface");
    pancakes.add_step("Cook until golden brown");
    println!("Recipe with steps: {:?}", pancakes.steps());

    // Remove a step
    pancakes.remove_step(2);
    println!("Recipe after removing step 3: {:?}", pancakes.steps());
}
