//! Per-data-directory settings: parse .smsthreads.toml.

use anyhow::{bail, Context, Result};
use chrono::FixedOffset;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::model::ThreadOrder;
use crate::phone::NumberingPlan;
use crate::resolve;
use crate::source::{SmsBox, SmsFilter};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub numbering: NumberingPlan,
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SourceConfig {
    #[serde(rename = "box")]
    pub sms_box: SmsBox,
    pub max_count: usize,
    pub messages_file: String,
    pub contacts_file: String,
}

impl Default for SourceConfig {
    fn default() -> Self {
        Self {
            sms_box: SmsBox::All,
            max_count: 100,
            messages_file: "messages.json".to_string(),
            contacts_file: "contacts.json".to_string(),
        }
    }
}

impl SourceConfig {
    pub fn filter(&self) -> SmsFilter {
        SmsFilter {
            sms_box: self.sms_box,
            max_count: self.max_count,
        }
    }

    /// Relative file names resolve against the data directory.
    pub fn messages_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(resolve::expand_tilde(&self.messages_file))
    }

    pub fn contacts_path(&self, data_dir: &Path) -> PathBuf {
        data_dir.join(resolve::expand_tilde(&self.contacts_file))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    /// Locale for rendered dates, e.g. "fr_FR" or "en_US".
    pub locale: String,
    pub thread_order: ThreadOrder,
    /// Fixed UTC offset such as "+01:00"; local time when unset.
    pub utc_offset: Option<String>,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            locale: "fr_FR".to_string(),
            thread_order: ThreadOrder::Ascending,
            utc_offset: None,
        }
    }
}

impl DisplayConfig {
    pub fn fixed_offset(&self) -> Result<Option<FixedOffset>> {
        match self.utc_offset.as_deref() {
            None => Ok(None),
            Some(s) => {
                let offset: FixedOffset = s
                    .trim()
                    .parse()
                    .with_context(|| format!("invalid display.utc_offset {:?}", s))?;
                Ok(Some(offset))
            }
        }
    }
}

impl Settings {
    fn validate(&self) -> Result<()> {
        let plan = &self.numbering;
        for (field, value) in [
            ("country_code", &plan.country_code),
            ("international_prefix", &plan.international_prefix),
            ("trunk_prefix", &plan.trunk_prefix),
        ] {
            if !value.chars().all(|c| c.is_ascii_digit()) {
                bail!("numbering.{} must contain only digits, got {:?}", field, value);
            }
        }
        if plan.match_digits == 0 {
            bail!("numbering.match_digits must be at least 1");
        }
        self.display.fixed_offset()?;
        Ok(())
    }
}

/// Parse settings from TOML text.
pub fn parse_settings(content: &str) -> Result<Settings> {
    if content.trim().is_empty() {
        return Ok(Settings::default());
    }
    let settings: Settings = toml::from_str(content)?;
    settings.validate()?;
    Ok(settings)
}

/// Load .smsthreads.toml from a given path or the data directory.
/// A missing file yields defaults.
pub fn load_settings(path: Option<&Path>) -> Result<Settings> {
    let path = path
        .map(PathBuf::from)
        .unwrap_or_else(resolve::settings_toml);
    if !path.exists() {
        return Ok(Settings::default());
    }
    let content = std::fs::read_to_string(&path)?;
    parse_settings(&content).with_context(|| format!("failed to load {}", path.display()))
}
