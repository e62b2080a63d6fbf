use log::{debug, warn};
use std::io::{self, BufRead, Write};

use recipe_manager::{cli, display, Command, DisplayConfig, RecipeManagerError, RecipeStore};

fn main() -> Result<(), RecipeManagerError> {
    env_logger::init();

    let config = match DisplayConfig::load() {
        Ok(config) => config,
        Err(err) => {
            warn!("using default display settings: {err}");
            DisplayConfig::default()
        }
    };

    println!("Recipe manager. Type 'help' to list commands, 'quit' to leave.");

    let mut store = RecipeStore::new();
    let stdin = io::stdin();

    loop {
        print!("> ");
        io::stdout().flush()?;

        let mut line = String::new();
        if stdin.lock().read_line(&mut line)? == 0 {
            // End of input counts as quitting
            break;
        }
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        match Command::parse(line) {
            Ok(command) => {
                debug!("dispatching {command:?}");
                if !cli::execute(command, &mut store, &config) {
                    break;
                }
            }
            Err(err) => display::error(&err.to_string(), &config),
        }
    }

    Ok(())
}
