//! smsthreads conversations [--json]

use anyhow::Result;
use chrono::Local;
use tracing::info;

use super::load_session;
use crate::organize::organize_with;
use crate::render;

pub fn run(json: bool) -> Result<()> {
    let session = load_session()?;
    let conversations = organize_with(
        &session.settings.numbering,
        &session.messages,
        &session.contacts,
    );
    info!(count = conversations.len(), "conversations loaded");

    if json {
        println!("{}", serde_json::to_string_pretty(&conversations)?);
        return Ok(());
    }

    let locale = session.locale()?;
    let text = match session.settings.display.fixed_offset()? {
        Some(offset) => render::conversation_list(&conversations, &offset, locale),
        None => render::conversation_list(&conversations, &Local, locale),
    };
    println!("{}", text);
    Ok(())
}
