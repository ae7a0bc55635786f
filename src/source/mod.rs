//! Message and contact sources.
//!
//! The organizer never fetches anything itself: a source hands it a fully
//! materialized list. Both sources are independent and are read
//! concurrently by [`load_all`].

pub mod contacts;
pub mod sms;

use std::path::PathBuf;
use thiserror::Error;
use tracing::info;

use crate::model::{RawContact, RawMessage};

pub use self::contacts::ContactExportFile;
pub use self::sms::{SmsBox, SmsExportFile, SmsFilter};

#[derive(Debug, Error)]
pub enum SourceError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid JSON in {path}: {source}")]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("message {id} has an invalid date: {value:?}")]
    InvalidTimestamp { id: String, value: String },

    #[error("source task failed: {0}")]
    Task(String),
}

pub trait MessageSource {
    fn fetch(&self) -> Result<Vec<RawMessage>, SourceError>;
}

pub trait ContactSource {
    fn fetch(&self) -> Result<Vec<RawContact>, SourceError>;
}

fn joined<T>(
    res: Result<Result<T, SourceError>, tokio::task::JoinError>,
) -> Result<T, SourceError> {
    res.map_err(|e| SourceError::Task(e.to_string()))?
}

/// Fetch messages and contacts concurrently; both must succeed.
pub async fn load_all<M, C>(
    messages: M,
    contacts: C,
) -> Result<(Vec<RawMessage>, Vec<RawContact>), SourceError>
where
    M: MessageSource + Send + 'static,
    C: ContactSource + Send + 'static,
{
    let msg_task = tokio::task::spawn_blocking(move || messages.fetch());
    let contact_task = tokio::task::spawn_blocking(move || contacts.fetch());

    let (msgs, contacts) = tokio::try_join!(
        async { joined(msg_task.await) },
        async { joined(contact_task.await) },
    )?;

    info!(
        messages = msgs.len(),
        contacts = contacts.len(),
        "loaded sources"
    );
    Ok((msgs, contacts))
}
