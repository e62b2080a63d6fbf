use crate::model::Recipe;

/// The recipes of one interactive session, in creation order.
///
/// Nothing is persisted; the store and everything in it go away when the
/// process exits.
#[derive(Debug, Default)]
pub struct RecipeStore {
    recipes: Vec<Recipe>,
}

impl RecipeStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Take ownership of a recipe and return its id.
    pub fn add(&mut self, recipe: Recipe) -> u64 {
        let id = recipe.id();
        self.recipes.push(recipe);
        id
    }

    pub fn get(&self, id: u64) -> Option<&Recipe> {
        self.recipes.iter().find(|recipe| recipe.id() == id)
    }

    pub fn get_mut(&mut self, id: u64) -> Option<&mut Recipe> {
        self.recipes.iter_mut().find(|recipe| recipe.id() == id)
    }

    /// All recipes in creation order, for the list view.
    pub fn all(&self) -> &[Recipe] {
        &self.recipes
    }

    pub fn len(&self) -> usize {
        self.recipes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.recipes.is_empty()
    }
}
