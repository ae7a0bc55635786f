//! App-level config for smsthreads (default data directory).
//!
//! Reads/writes {user_config_dir}/smsthreads/config.toml.

use anyhow::Result;
use std::path::{Path, PathBuf};

use crate::resolve;

/// Return the OS-native smsthreads config directory.
pub fn app_config_dir() -> PathBuf {
    if let Some(proj_dirs) = directories::ProjectDirs::from("", "", "smsthreads") {
        proj_dirs.config_dir().to_path_buf()
    } else {
        resolve::home_dir().join(".config").join("smsthreads")
    }
}

/// Return the path to config.toml.
pub fn app_config_path() -> PathBuf {
    app_config_dir().join("config.toml")
}

/// Read config.toml, returning empty table if missing.
pub fn load() -> Result<toml::Value> {
    load_from(&app_config_path())
}

pub fn load_from(path: &Path) -> Result<toml::Value> {
    if !path.exists() {
        return Ok(toml::Value::Table(toml::map::Map::new()));
    }
    let content = std::fs::read_to_string(path)?;
    let val: toml::Value = toml::from_str(&content)?;
    Ok(val)
}

/// Write config.toml, creating parent dir if needed.
pub fn save_to(path: &Path, config: &toml::Value) -> Result<()> {
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    std::fs::write(path, content)?;
    Ok(())
}

/// Registered default data directory, if any.
pub fn default_data_dir() -> Result<Option<PathBuf>> {
    Ok(data_dir_from(&load()?))
}

fn data_dir_from(config: &toml::Value) -> Option<PathBuf> {
    config
        .get("default_data_dir")
        .and_then(|v| v.as_str())
        .filter(|s| !s.is_empty())
        .map(resolve::expand_tilde)
}

/// Record `data_dir` as the default in the config file at `path`.
pub fn set_default_data_dir_in(path: &Path, data_dir: &str) -> Result<()> {
    let mut config = load_from(path)?;
    if let toml::Value::Table(table) = &mut config {
        table.insert(
            "default_data_dir".to_string(),
            toml::Value::String(data_dir.to_string()),
        );
    }
    save_to(path, &config)
}

pub fn set_default_data_dir(data_dir: &str) -> Result<()> {
    set_default_data_dir_in(&app_config_path(), data_dir)
}
