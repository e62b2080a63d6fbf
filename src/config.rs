use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;

/// Presentation settings for the terminal output.
///
/// Only how things look is configurable. Core behavior (the default
/// serving count, the sentinel strings, the recipe template) is fixed.
#[derive(Debug, Deserialize, Clone)]
pub struct DisplayConfig {
    /// Use plain ASCII notice markers instead of Unicode glyphs
    #[serde(default)]
    pub ascii_glyphs: bool,
    /// Width of the name column in the recipe list table
    #[serde(default = "default_name_width")]
    pub name_width: usize,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            ascii_glyphs: false,
            name_width: default_name_width(),
        }
    }
}

fn default_name_width() -> usize {
    30
}

impl DisplayConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_MANAGER__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_MANAGER__ASCII_GLYPHS
    pub fn load() -> Result<Self, ConfigError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_MANAGER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        settings.try_deserialize()
    }
}
