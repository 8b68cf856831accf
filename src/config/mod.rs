mod schema;

pub use schema::Config;

use anyhow::{Context, Result};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

use crate::store::get_default_data_path;

/// Get the config directory path (~/.config/festival-tally/)
pub fn get_config_dir() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(".config").join("festival-tally"))
}

/// Get the default config file path (~/.config/festival-tally/config.yaml)
pub fn get_config_path() -> Option<PathBuf> {
    get_config_dir().map(|dir| dir.join("config.yaml"))
}

/// Load configuration from a YAML file
///
/// # Arguments
///
/// * `path` - Optional path to config file. If None, uses the default path
///   and falls back to defaults when that file is absent.
///
/// # Errors
///
/// Returns an error if:
/// - An explicitly given config file does not exist
/// - The config file cannot be read
/// - The YAML cannot be parsed
pub fn load_config(path: Option<PathBuf>) -> Result<Config> {
    match path {
        Some(config_path) => load_config_file(&config_path, true),
        None => match get_config_path() {
            Some(config_path) => load_config_file(&config_path, false),
            None => {
                debug!("No home directory, using default config");
                Ok(Config::default())
            }
        },
    }
}

/// Read one config file. A missing file is an error only when `required`.
fn load_config_file(config_path: &Path, required: bool) -> Result<Config> {
    if !config_path.exists() {
        if required {
            anyhow::bail!("Config file not found at {}", config_path.display());
        }
        debug!("No config at {}, using defaults", config_path.display());
        return Ok(Config::default());
    }

    let config_content = fs::read_to_string(config_path)
        .with_context(|| format!("Failed to read config file at {}", config_path.display()))?;

    if config_content.trim().is_empty() {
        return Ok(Config::default());
    }

    let config: Config = serde_saphyr::from_str(&config_content).with_context(|| {
        format!(
            "Failed to parse config: invalid YAML in {}",
            config_path.display()
        )
    })?;

    debug!("Loaded config from {}", config_path.display());
    Ok(config)
}

/// Validate configuration at startup.
/// Returns all validation errors at once (not just the first).
pub fn validate_config(config: &Config) -> Result<(), Vec<String>> {
    let mut errors = Vec::new();

    if config.top_count == Some(0) {
        errors.push("top_count: must be at least 1".to_string());
    }

    if let Some(ref data_file) = config.data_file {
        if data_file.trim().is_empty() {
            errors.push("data_file: must not be empty".to_string());
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

/// Pick the data file: command line first, then config, then ./festival_data.json
pub fn resolve_data_path(cli_path: Option<PathBuf>, config: &Config) -> PathBuf {
    cli_path
        .or_else(|| config.data_file.as_ref().map(PathBuf::from))
        .unwrap_or_else(get_default_data_path)
}
