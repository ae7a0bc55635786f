//! Path resolution for the smsthreads data directory.
//!
//! Resolution order for data directory:
//!   1. SMSTHREADS_DATA environment variable (set by --data)
//!   2. sms/ in cwd
//!   3. App config default_data_dir (via app_config::default_data_dir)
//!   4. ~/Documents/sms

use std::path::PathBuf;

pub const DATA_ENV: &str = "SMSTHREADS_DATA";

/// Return the data directory path.
pub fn data_dir() -> PathBuf {
    if let Ok(env) = std::env::var(DATA_ENV) {
        if !env.is_empty() {
            return PathBuf::from(env);
        }
    }
    let local = PathBuf::from("sms");
    if local.is_dir() {
        return local;
    }
    if let Ok(Some(path)) = crate::app_config::default_data_dir() {
        return path;
    }
    home_dir().join("Documents").join("sms")
}

/// Resolve the settings file: .smsthreads.toml, then smsthreads.toml.
pub fn settings_toml() -> PathBuf {
    let dir = data_dir();
    let dotfile = dir.join(".smsthreads.toml");
    if dotfile.exists() {
        return dotfile;
    }
    let plain = dir.join("smsthreads.toml");
    if plain.exists() {
        return plain;
    }
    dotfile
}

/// Get the user's home directory.
pub fn home_dir() -> PathBuf {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Expand ~ to home directory.
pub fn expand_tilde(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        home_dir().join(rest)
    } else if path == "~" {
        home_dir()
    } else {
        PathBuf::from(path)
    }
}
