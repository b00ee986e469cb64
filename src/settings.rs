use config::{Config, ConfigError, Environment, File};
use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Application settings
#[derive(Debug, Deserialize, Clone, PartialEq, Eq)]
pub struct Settings {
    /// Directory holding one `<site_key>.toml` per supported site
    #[serde(default = "default_config_dir")]
    pub config_dir: PathBuf,
    /// Directory saved recipes are written to
    #[serde(default = "default_output_dir")]
    pub output_dir: PathBuf,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            config_dir: default_config_dir(),
            output_dir: default_output_dir(),
        }
    }
}

fn default_config_dir() -> PathBuf {
    PathBuf::from("site_configs")
}

fn default_output_dir() -> PathBuf {
    PathBuf::from("recipes")
}

impl Settings {
    /// Load settings from `scraper.toml` and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables with RECIPE_SCRAPER__ prefix
    /// 2. scraper.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_SCRAPER__OUTPUT_DIR
    pub fn load() -> Result<Self, ConfigError> {
        load_settings_from(Path::new("scraper.toml"))
    }
}

/// Load settings from `path` (optional) with environment overrides on top
pub fn load_settings_from(path: &Path) -> Result<Settings, ConfigError> {
    Config::builder()
        .add_source(File::from(path).required(false))
        .add_source(Environment::with_prefix("RECIPE_SCRAPER").separator("__"))
        .build()?
        .try_deserialize()
}
