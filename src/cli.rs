//! Command parsing and dispatch for the interactive session.

use crate::config::DisplayConfig;
use crate::display;
use crate::error::RecipeManagerError;
use crate::model::Recipe;
use crate::store::RecipeStore;
use log::debug;

pub const HELP: &str = "Commands:\n\
    \x20 create <name> <cooking-time> [servings]   add a recipe (quote names with spaces)\n\
    \x20 ingredient <id> <name> <amount> <unit>    add an ingredient to a recipe\n\
    \x20 step <id> <instruction...>                add a cooking step to a recipe\n\
    \x20 remove-step <id> <step-number>            remove a step (1-indexed)\n\
    \x20 list                                      list all recipes\n\
    \x20 show <id>                                 show one recipe in detail\n\
    \x20 format <id>                               print the formatted recipe\n\
    \x20 help                                      show this text\n\
    \x20 quit                                      end the session";

/// One parsed line of user input.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Create {
        name: String,
        cooking_time: f64,
        servings: Option<f64>,
    },
    AddIngredient {
        recipe_id: u64,
        name: String,
        amount: f64,
        unit: String,
    },
    AddStep {
        recipe_id: u64,
        instruction: String,
    },
    RemoveStep {
        recipe_id: u64,
        step_number: u64,
    },
    List,
    Show { recipe_id: u64 },
    Format { recipe_id: u64 },
    Help,
    Quit,
}

/// Split a line into tokens, honoring double quotes so recipe names and
/// ingredient names may contain spaces.
fn split_args(line: &str) -> Vec<String> {
    let mut tokens = Vec::new();
    let mut current = String::new();
    let mut in_quotes = false;

    for ch in line.chars() {
        match ch {
            '"' => in_quotes = !in_quotes,
            c if c.is_whitespace() && !in_quotes => {
                if !current.is_empty() {
                    tokens.push(std::mem::take(&mut current));
                }
            }
            c => current.push(c),
        }
    }
    if !current.is_empty() {
        tokens.push(current);
    }
    tokens
}

impl Command {
    /// Parse one input line. Numbers and ids that fail to parse, missing
    /// arguments, and unknown command words all come back as errors; the
    /// caller reports them and keeps the session alive.
    pub fn parse(line: &str) -> Result<Self, RecipeManagerError> {
        let tokens = split_args(line);
        let (head, rest) = tokens
            .split_first()
            .ok_or(RecipeManagerError::MissingArgument("command"))?;

        match head.as_str() {
            "create" => {
                let name = rest
                    .first()
                    .ok_or(RecipeManagerError::MissingArgument("name"))?
                    .clone();
                let cooking_time = rest
                    .get(1)
                    .ok_or(RecipeManagerError::MissingArgument("cooking-time"))?
                    .parse()?;
                let servings = match rest.get(2) {
                    Some(raw) => Some(raw.parse()?),
                    None => None,
                };
                Ok(Command::Create {
                    name,
                    cooking_time,
                    servings,
                })
            }
            "ingredient" => {
                let recipe_id = parse_id(rest.first())?;
                let name = rest
                    .get(1)
                    .ok_or(RecipeManagerError::MissingArgument("ingredient name"))?
                    .clone();
                let amount = rest
                    .get(2)
                    .ok_or(RecipeManagerError::MissingArgument("amount"))?
                    .parse()?;
                let unit = rest
                    .get(3)
                    .ok_or(RecipeManagerError::MissingArgument("unit"))?
                    .clone();
                Ok(Command::AddIngredient {
                    recipe_id,
                    name,
                    amount,
                    unit,
                })
            }
            "step" => {
                let recipe_id = parse_id(rest.first())?;
                if rest.len() < 2 {
                    return Err(RecipeManagerError::MissingArgument("instruction"));
                }
                Ok(Command::AddStep {
                    recipe_id,
                    instruction: rest[1..].join(" "),
                })
            }
            "remove-step" => {
                let recipe_id = parse_id(rest.first())?;
                let step_number = rest
                    .get(1)
                    .ok_or(RecipeManagerError::MissingArgument("step-number"))?
                    .parse()?;
                Ok(Command::RemoveStep {
                    recipe_id,
                    step_number,
                })
            }
            "list" => Ok(Command::List),
            "show" => Ok(Command::Show {
                recipe_id: parse_id(rest.first())?,
            }),
            "format" => Ok(Command::Format {
                recipe_id: parse_id(rest.first())?,
            }),
            "help" => Ok(Command::Help),
            "quit" | "exit" => Ok(Command::Quit),
            other => Err(RecipeManagerError::UnknownCommand(other.to_string())),
        }
    }
}

fn parse_id(token: Option<&String>) -> Result<u64, RecipeManagerError> {
    Ok(token
        .ok_or(RecipeManagerError::MissingArgument("recipe id"))?
        .parse()?)
}

/// Apply a command against the session store, printing whatever the
/// command shows. Returns `false` when the session should end.
pub fn execute(command: Command, store: &mut RecipeStore, config: &DisplayConfig) -> bool {
    match command {
        Command::Create {
            name,
            cooking_time,
            servings,
        } => {
            let recipe = match servings {
                Some(count) => Recipe::with_servings(&name, cooking_time, count),
                None => Recipe::new(&name, cooking_time),
            };
            let id = store.add(recipe);
            debug!("created recipe {id}");
            display::success(&format!("Added recipe '{name}' with id {id}"), config);
        }
        Command::AddIngredient {
            recipe_id,
            name,
            amount,
            unit,
        } => match store.get_mut(recipe_id) {
            Some(recipe) => {
                recipe.add_ingredient(&name, amount, &unit);
                display::success(&format!("Added {name} to recipe {recipe_id}"), config);
            }
            None => display::error("Recipe not found", config),
        },
        Command::AddStep {
            recipe_id,
            instruction,
        } => match store.get_mut(recipe_id) {
            Some(recipe) => {
                recipe.add_step(&instruction);
                display::success(&format!("Added step to recipe {recipe_id}"), config);
            }
            None => display::error("Recipe not found", config),
        },
        Command::RemoveStep {
            recipe_id,
            step_number,
        } => match store.get_mut(recipe_id) {
            Some(recipe) => {
                // 1-indexed at the prompt; out-of-range numbers fall
                // through to the record's silent no-op.
                if step_number >= 1 {
                    recipe.remove_step((step_number - 1) as usize);
                }
                display::success(
                    &format!("Removed step {step_number} from recipe {recipe_id}"),
                    config,
                );
            }
            None => display::error("Recipe not found", config),
        },
        Command::List => display::print_recipe_list(store.all(), config),
        Command::Show { recipe_id } => display::print_recipe_details(store.get(recipe_id), config),
        Command::Format { recipe_id } => {
            display::print_formatted_recipe(store.get(recipe_id), config)
        }
        Command::Help => println!("{HELP}"),
        Command::Quit => return false,
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn populated_store() -> (RecipeStore, u64) {
        let mut store = RecipeStore::new();
        let id = store.add(Recipe::with_servings("Pancakes", 20.0, 6.0));
        (store, id)
    }

    #[test]
    fn test_split_args_plain() {
        assert_eq!(split_args("create Pancakes 20"), ["create", "Pancakes", "20"]);
    }

    #[test]
    fn test_split_args_quoted() {
        assert_eq!(
            split_args(r#"create "Chicken Soup" 45 4"#),
            ["create", "Chicken Soup", "45", "4"]
        );
    }

    #[test]
    fn test_split_args_collapses_whitespace() {
        assert_eq!(split_args("  list   "), ["list"]);
        assert!(split_args("   ").is_empty());
    }

    #[test]
    fn test_parse_create_with_default_servings() {
        let command = Command::parse("create Pancakes 20").unwrap();
        assert_eq!(
            command,
            Command::Create {
                name: "Pancakes".to_string(),
                cooking_time: 20.0,
                servings: None,
            }
        );
    }

    #[test]
    fn test_parse_create_with_servings() {
        let command = Command::parse("create Pancakes 20 6").unwrap();
        assert_eq!(
            command,
            Command::Create {
                name: "Pancakes".to_string(),
                cooking_time: 20.0,
                servings: Some(6.0),
            }
        );
    }

    #[test]
    fn test_parse_step_joins_instruction_words() {
        let command = Command::parse("step 1 Mix dry ingredients in a bowl").unwrap();
        assert_eq!(
            command,
            Command::AddStep {
                recipe_id: 1,
                instruction: "Mix dry ingredients in a bowl".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_errors() {
        assert!(matches!(
            Command::parse("grill"),
            Err(RecipeManagerError::UnknownCommand(_))
        ));
        assert!(matches!(
            Command::parse("create"),
            Err(RecipeManagerError::MissingArgument("name"))
        ));
        assert!(matches!(
            Command::parse("create Pancakes soon"),
            Err(RecipeManagerError::InvalidNumber(_))
        ));
        assert!(matches!(
            Command::parse("show one"),
            Err(RecipeManagerError::InvalidInteger(_))
        ));
    }

    #[test]
    fn test_execute_create_adds_to_store() {
        let mut store = RecipeStore::new();
        let config = DisplayConfig::default();

        let keep_going = execute(
            Command::parse("create Pancakes 20").unwrap(),
            &mut store,
            &config,
        );

        assert!(keep_going);
        assert_eq!(store.len(), 1);
        assert_eq!(store.all()[0].servings(), 4.0);
    }

    #[test]
    fn test_execute_ingredient_and_step() {
        let (mut store, id) = populated_store();
        let config = DisplayConfig::default();

        execute(
            Command::parse(&format!("ingredient {id} Flour 2 cups")).unwrap(),
            &mut store,
            &config,
        );
        execute(
            Command::parse(&format!("step {id} Mix everything")).unwrap(),
            &mut store,
            &config,
        );

        let recipe = store.get(id).unwrap();
        assert_eq!(recipe.ingredients().len(), 1);
        assert_eq!(recipe.steps(), ["Mix everything"]);
    }

    #[test]
    fn test_execute_remove_step_is_one_indexed() {
        let (mut store, id) = populated_store();
        let config = DisplayConfig::default();
        {
            let recipe = store.get_mut(id).unwrap();
            recipe.add_step("Mix");
            recipe.add_step("Cook");
            recipe.add_step("Flip");
        }

        execute(
            Command::parse(&format!("remove-step {id} 3")).unwrap(),
            &mut store,
            &config,
        );
        assert_eq!(store.get(id).unwrap().steps(), ["Mix", "Cook"]);
    }

    #[test]
    fn test_execute_remove_step_out_of_range_keeps_steps() {
        let (mut store, id) = populated_store();
        let config = DisplayConfig::default();
        store.get_mut(id).unwrap().add_step("Mix");

        execute(
            Command::parse(&format!("remove-step {id} 0")).unwrap(),
            &mut store,
            &config,
        );
        execute(
            Command::parse(&format!("remove-step {id} 9")).unwrap(),
            &mut store,
            &config,
        );
        assert_eq!(store.get(id).unwrap().steps(), ["Mix"]);
    }

    #[test]
    fn test_execute_quit_ends_session() {
        let mut store = RecipeStore::new();
        let config = DisplayConfig::default();
        assert!(!execute(Command::Quit, &mut store, &config));
    }
}
