use chrono::NaiveDate;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};

/// Number of people a recipe serves when the caller does not say.
pub const DEFAULT_SERVINGS: f64 = 4.0;

static NEXT_ID: AtomicU64 = AtomicU64::new(1);

fn next_id() -> u64 {
    NEXT_ID.fetch_add(1, Ordering::Relaxed)
}

/// A single ingredient line: how much of what, in which unit.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Ingredient {
    pub name: String,
    pub amount: f64,
    pub unit: String,
}

/// An in-memory recipe record.
///
/// Records live for a single process run. Ids come from a process-wide
/// monotonic counter and are unique within that run; a record's id never
/// changes after creation. Ingredient and step lists keep insertion
/// order, which is also display order.
#[derive(Debug, Clone, Serialize)]
pub struct Recipe {
    id: u64,
    name: String,
    /// Cooking time in minutes
    cooking_time: f64,
    /// Number of people served
    servings: f64,
    ingredients: Vec<Ingredient>,
    steps: Vec<String>,
    /// Informational only, never used in any computation
    date_created: NaiveDate,
}

impl Recipe {
    /// Create a recipe serving the default four people.
    pub fn new(name: impl Into<String>, cooking_time: f64) -> Self {
        Self::with_servings(name, cooking_time, DEFAULT_SERVINGS)
    }

    /// Create a recipe with an explicit serving count.
    ///
    /// Inputs are taken as-is. Zero or negative times and servings are
    /// accepted and flow through to the formatter unchanged.
    pub fn with_servings(name: impl Into<String>, cooking_time: f64, servings: f64) -> Self {
        Recipe {
            id: next_id(),
            name: name.into(),
            cooking_time,
            servings,
            ingredients: Vec::new(),
            steps: Vec::new(),
            date_created: chrono::Local::now().date_naive(),
        }
    }

    pub fn id(&self) -> u64 {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn cooking_time(&self) -> f64 {
        self.cooking_time
    }

    pub fn servings(&self) -> f64 {
        self.servings
    }

    pub fn ingredients(&self) -> &[Ingredient] {
        &self.ingredients
    }

    pub fn steps(&self) -> &[String] {
        &self.steps
    }

    pub fn date_created(&self) -> NaiveDate {
        self.date_created
    }

    /// Append an ingredient. Duplicates are not detected.
    pub fn add_ingredient(
        &mut self,
        name: impl Into<String>,
        amount: f64,
        unit: impl Into<String>,
    ) {
        self.ingredients.push(Ingredient {
            name: name.into(),
            amount,
            unit: unit.into(),
        });
    }

    /// Append a cooking step after the existing ones.
    pub fn add_step(&mut self, instruction: impl Into<String>) {
        self.steps.push(instruction.into());
    }

    /// Remove the step at `step_index`, shifting later steps left.
    ///
    /// An out-of-range index is ignored and the record is left untouched;
    /// the caller cannot tell the two outcomes apart.
    pub fn remove_step(&mut self, step_index: usize) {
        if step_index < self.steps.len() {
            self.steps.remove(step_index);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_recipe_is_empty() {
        let recipe = Recipe::new("Pancakes", 20.0);
        assert_eq!(recipe.name(), "Pancakes");
        assert_eq!(recipe.cooking_time(), 20.0);
        assert_eq!(recipe.servings(), DEFAULT_SERVINGS);
        assert!(recipe.ingredients().is_empty());
        assert!(recipe.steps().is_empty());
    }

    #[test]
    fn test_explicit_servings() {
        let recipe = Recipe::with_servings("Pancakes", 20.0, 6.0);
        assert_eq!(recipe.servings(), 6.0);
    }

    #[test]
    fn test_degenerate_values_accepted() {
        let recipe = Recipe::with_servings("Mystery", -5.0, 0.0);
        assert_eq!(recipe.cooking_time(), -5.0);
        assert_eq!(recipe.servings(), 0.0);
    }

    #[test]
    fn test_ids_are_unique_and_increasing() {
        let first = Recipe::new("First", 10.0);
        let second = Recipe::new("Second", 10.0);
        assert!(second.id() > first.id());
    }

    #[test]
    fn test_add_ingredient_appends() {
        let mut recipe = Recipe::new("Pancakes", 20.0);
        recipe.add_ingredient("Flour", 2.0, "cups");
        recipe.add_ingredient("Milk", 1.5, "cups");

        assert_eq!(recipe.ingredients().len(), 2);
        assert_eq!(recipe.ingredients()[0].name, "Flour");
        assert_eq!(recipe.ingredients()[1].name, "Milk");
        assert_eq!(recipe.ingredients()[1].amount, 1.5);
    }

    #[test]
    fn test_add_step_appends() {
        let mut recipe = Recipe::new("Pancakes", 20.0);
        recipe.add_step("Mix");
        recipe.add_step("Bake");
        assert_eq!(recipe.steps(), ["Mix", "Bake"]);
    }

    #[test]
    fn test_remove_step_in_range() {
        let mut recipe = Recipe::new("Pancakes", 20.0);
        recipe.add_step("Mix");
        recipe.add_step("Cook");
        recipe.add_step("Flip");

        recipe.remove_step(1);
        assert_eq!(recipe.steps(), ["Mix", "Flip"]);
    }

    #[test]
    fn test_remove_step_out_of_range_is_a_no_op() {
        let mut recipe = Recipe::new("Pancakes", 20.0);
        recipe.add_step("Mix");
        recipe.add_step("Cook");

        recipe.remove_step(2);
        recipe.remove_step(usize::MAX);
        assert_eq!(recipe.steps(), ["Mix", "Cook"]);
    }

    #[test]
    fn test_remove_step_on_empty_recipe() {
        let mut recipe = Recipe::new("Pancakes", 20.0);
        recipe.remove_step(0);
        assert!(recipe.steps().is_empty());
    }
}
