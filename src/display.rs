//! Terminal presentation: list and detail views plus status notices.
//!
//! String assembly is kept separate from printing so the rendered text
//! can be asserted on directly.

use crate::config::DisplayConfig;
use crate::format;
use crate::model::Recipe;
use log::debug;

const ID_WIDTH: usize = 5;
const TIME_WIDTH: usize = 20;

/// Status notice categories, each with its own marker glyph.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Notice {
    Success,
    Error,
    Warning,
    Info,
}

impl Notice {
    fn glyph(self, ascii: bool) -> &'static str {
        match (self, ascii) {
            (Notice::Success, false) => "\u{2713}",
            (Notice::Error, false) => "\u{2717}",
            (Notice::Warning, false) => "\u{26a0}",
            (Notice::Info, false) => "\u{2139}",
            (Notice::Success, true) => "+",
            (Notice::Error, true) => "x",
            (Notice::Warning, true) => "!",
            (Notice::Info, true) => "i",
        }
    }
}

/// A marker-prefixed one-line notice.
pub fn notice(kind: Notice, message: &str, config: &DisplayConfig) -> String {
    format!("{} {}", kind.glyph(config.ascii_glyphs), message)
}

pub fn success(message: &str, config: &DisplayConfig) {
    println!("{}", notice(Notice::Success, message, config));
}

pub fn error(message: &str, config: &DisplayConfig) {
    println!("{}", notice(Notice::Error, message, config));
}

pub fn warning(message: &str, config: &DisplayConfig) {
    println!("{}", notice(Notice::Warning, message, config));
}

pub fn info(message: &str, config: &DisplayConfig) {
    println!("{}", notice(Notice::Info, message, config));
}

/// Column-aligned listing of recipes, one row per record in insertion
/// order, with a heading and separator row.
pub fn recipe_list_table(recipes: &[Recipe], config: &DisplayConfig) -> String {
    let name_width = config.name_width;

    let mut table = format!(
        "{:<id$} {:<name$} {:<time$} {}\n",
        "ID",
        "Name",
        "Cooking Time (min)",
        "Servings",
        id = ID_WIDTH,
        name = name_width,
        time = TIME_WIDTH,
    );
    table.push_str(&format!(
        "{} {} {} {}\n",
        "-".repeat(ID_WIDTH),
        "-".repeat(name_width),
        "-".repeat(TIME_WIDTH),
        "-".repeat("Servings".len()),
    ));

    for recipe in recipes {
        table.push_str(&format!(
            "{:<id$} {:<name$} {:<time$} {}\n",
            recipe.id(),
            recipe.name(),
            recipe.cooking_time(),
            recipe.servings(),
            id = ID_WIDTH,
            name = name_width,
            time = TIME_WIDTH,
        ));
    }
    table
}

/// Detail view of one recipe: identity lines, then 1-indexed ingredient
/// and step enumerations with the usual empty-collection sentinels.
pub fn recipe_details(recipe: &Recipe) -> String {
    let mut out = format!("\nRecipe: {}\n", recipe.name());
    out.push_str(&format!("ID: {}\n", recipe.id()));
    out.push_str(&format!("Cooking Time: {} minutes\n", recipe.cooking_time()));
    out.push_str(&format!("Servings: {}\n", recipe.servings()));

    out.push_str("\nIngredients:\n");
    if recipe.ingredients().is_empty() {
        out.push_str(format::NO_INGREDIENTS);
        out.push('\n');
    } else {
        for (index, ingredient) in recipe.ingredients().iter().enumerate() {
            out.push_str(&format!(
                "{}. {} {} of {}\n",
                index + 1,
                ingredient.amount,
                ingredient.unit,
                ingredient.name
            ));
        }
    }

    out.push_str("\nSteps:\n");
    if recipe.steps().is_empty() {
        out.push_str(format::NO_STEPS);
        out.push('\n');
    } else {
        for (index, step) in recipe.steps().iter().enumerate() {
            out.push_str(&format!("{}. {}\n", index + 1, step));
        }
    }

    out.push('\n');
    out
}

/// Print the list view, or a warning notice when there is nothing to
/// list.
pub fn print_recipe_list(recipes: &[Recipe], config: &DisplayConfig) {
    if recipes.is_empty() {
        warning("No recipes found", config);
        return;
    }
    debug!("rendering list of {} recipes", recipes.len());
    print!("{}", recipe_list_table(recipes, config));
}

/// Print the detail view, or an error notice when the recipe is absent.
pub fn print_recipe_details(recipe: Option<&Recipe>, config: &DisplayConfig) {
    match recipe {
        Some(recipe) => print!("{}", recipe_details(recipe)),
        None => error("Recipe not found", config),
    }
}

/// Print the fixed-template formatted recipe, framed by blank lines, or
/// an error notice when the recipe is absent.
pub fn print_formatted_recipe(recipe: Option<&Recipe>, config: &DisplayConfig) {
    match recipe {
        Some(recipe) => println!("\n{}\n", format::format_recipe(recipe)),
        None => error("Recipe not found", config),
    }
}
