//! SMS provider export: the JSON list returned by Android's SMS content
//! provider, with every field encoded as a string.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::{debug, warn};

use super::{MessageSource, SourceError};
use crate::model::{Direction, RawMessage};

/// Android `type` column value for received messages.
const TYPE_INBOX: &str = "1";

#[derive(Debug, Clone, Deserialize)]
pub struct SmsRecord {
    #[serde(rename = "_id")]
    pub id: String,
    #[serde(default)]
    pub address: String,
    #[serde(default)]
    pub body: String,
    pub date: String,
    #[serde(rename = "type", default)]
    pub kind: String,
}

impl SmsRecord {
    pub fn direction(&self) -> Direction {
        if self.kind == TYPE_INBOX {
            Direction::Inbound
        } else {
            Direction::Outbound
        }
    }

    pub fn into_message(self) -> Result<RawMessage, SourceError> {
        let timestamp_millis =
            self.date
                .trim()
                .parse::<i64>()
                .map_err(|_| SourceError::InvalidTimestamp {
                    id: self.id.clone(),
                    value: self.date.clone(),
                })?;
        let direction = self.direction();
        Ok(RawMessage {
            id: self.id,
            address: self.address,
            body: self.body,
            timestamp_millis,
            direction,
        })
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SmsBox {
    #[default]
    All,
    Inbox,
    Sent,
}

impl SmsBox {
    fn accepts(self, direction: Direction) -> bool {
        match self {
            SmsBox::All => true,
            SmsBox::Inbox => direction == Direction::Inbound,
            SmsBox::Sent => direction == Direction::Outbound,
        }
    }
}

/// Which messages to take from the export, mirroring the provider query.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SmsFilter {
    #[serde(rename = "box")]
    pub sms_box: SmsBox,
    /// Stop after this many matching records. 0 means no limit.
    pub max_count: usize,
}

impl Default for SmsFilter {
    fn default() -> Self {
        Self {
            sms_box: SmsBox::All,
            max_count: 100,
        }
    }
}

/// Parse an export and apply `filter`, keeping file order.
pub fn parse_sms_export(
    data: &[u8],
    path: &Path,
    filter: &SmsFilter,
) -> Result<Vec<RawMessage>, SourceError> {
    let records: Vec<SmsRecord> =
        serde_json::from_slice(data).map_err(|source| SourceError::Json {
            path: path.to_path_buf(),
            source,
        })?;
    let total = records.len();

    let mut out = Vec::new();
    for record in records {
        if filter.max_count != 0 && out.len() >= filter.max_count {
            break;
        }
        if !filter.sms_box.accepts(record.direction()) {
            continue;
        }
        out.push(record.into_message()?);
    }

    debug!(total, kept = out.len(), "parsed SMS export");
    Ok(out)
}

#[derive(Debug, Clone)]
pub struct SmsExportFile {
    pub path: PathBuf,
    pub filter: SmsFilter,
}

impl SmsExportFile {
    pub fn new(path: impl Into<PathBuf>, filter: SmsFilter) -> Self {
        Self {
            path: path.into(),
            filter,
        }
    }
}

impl MessageSource for SmsExportFile {
    fn fetch(&self) -> Result<Vec<RawMessage>, SourceError> {
        if !self.path.exists() {
            warn!(path = %self.path.display(), "no SMS export found");
            return Ok(Vec::new());
        }
        let data = std::fs::read(&self.path).map_err(|source| SourceError::Io {
            path: self.path.clone(),
            source,
        })?;
        parse_sms_export(&data, &self.path, &self.filter)
    }
}
