//! Contact export: a JSON array of address-book entries.

use serde::Deserialize;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{ContactSource, SourceError};
use crate::model::RawContact;

#[derive(Debug, Clone, Deserialize)]
pub struct PhoneNumberRecord {
    #[serde(default)]
    pub number: String,
    /// Platform-normalized form, when the address book provides one.
    #[serde(default)]
    pub digits: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactRecord {
    #[serde(default)]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub phone_numbers: Vec<PhoneNumberRecord>,
}

impl ContactRecord {
    /// Convert to a RawContact; `None` when the entry has no usable number.
    pub fn into_contact(self) -> Option<RawContact> {
        let mut raw_phone_numbers = Vec::new();
        let mut normalized_phone_numbers = Vec::new();
        for p in self.phone_numbers {
            let raw = p.number.trim().to_string();
            let normalized = p
                .digits
                .map(|d| d.trim().to_string())
                .filter(|d| !d.is_empty())
                .unwrap_or_else(|| raw.clone());
            if raw.is_empty() && normalized.is_empty() {
                continue;
            }
            raw_phone_numbers.push(raw);
            normalized_phone_numbers.push(normalized);
        }
        if normalized_phone_numbers.is_empty() {
            return None;
        }
        Some(RawContact {
            id: self.id,
            name: self.name,
            raw_phone_numbers,
            normalized_phone_numbers,
        })
    }
}

/// Parse a contact export. File order is preserved; it decides which contact
/// wins when two share a number.
pub fn parse_contact_export(data: &[u8], path: &Path) -> Result<Vec<RawContact>, SourceError> {
    let records: Vec<ContactRecord> =
        serde_json::from_slice(data).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let total = records.len();
    let contacts: Vec<RawContact> = records
        .into_iter()
        .filter_map(ContactRecord::into_contact)
        .collect();
    debug!(total, kept = contacts.len(), "parsed contact export");
    Ok(contacts)
}

#[derive(Debug, Clone)]
pub struct ContactExportFile {
    pub path: PathBuf,
}

impl ContactExportFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }
}

impl ContactSource for ContactExportFile {
    fn fetch(&self) -> Result<Vec<RawContact>, SourceError> {
        if !self.path.exists() {
            warn!(
                path = %self.path.display(),
                "no contact export found; numbers will be shown without names"
            );
            return Ok(Vec::new());
        }
        let data = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_contact_export(&data, &self.path)
    }
}
