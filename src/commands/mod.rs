//! CLI command implementations.

pub mod contacts;
pub mod conversations;
pub mod init;
pub mod normalize;
pub mod thread;

use anyhow::{Context, Result};
use chrono::Locale;
use tracing::debug;

use crate::config::settings::{load_settings, Settings};
use crate::model::{RawContact, RawMessage};
use crate::render;
use crate::resolve;
use crate::source::{load_all, ContactExportFile, SmsExportFile};

/// Everything a command needs after one load.
pub struct Session {
    pub settings: Settings,
    pub messages: Vec<RawMessage>,
    pub contacts: Vec<RawContact>,
}

impl Session {
    pub fn locale(&self) -> Result<Locale> {
        render::parse_locale(&self.settings.display.locale)
    }
}

/// Resolve the data directory, read settings, then fetch both exports
/// concurrently.
#[tokio::main]
pub async fn load_session() -> Result<Session> {
    let data_dir = resolve::data_dir();
    let settings = load_settings(None)?;
    debug!(data_dir = %data_dir.display(), "loading session");

    let sms = SmsExportFile::new(
        settings.source.messages_path(&data_dir),
        settings.source.filter(),
    );
    let contacts = ContactExportFile::new(settings.source.contacts_path(&data_dir));
    let (messages, contacts) = load_all(sms, contacts)
        .await
        .context("failed to load messages and contacts")?;

    Ok(Session {
        settings,
        messages,
        contacts,
    })
}
