//! smsthreads thread NUMBER [--order asc|desc] [--json]

use anyhow::Result;
use chrono::Local;

use super::load_session;
use crate::model::ThreadOrder;
use crate::organize::thread_for;
use crate::render;

pub fn run(number: &str, order: Option<ThreadOrder>, json: bool) -> Result<()> {
    let session = load_session()?;
    let order = order.unwrap_or(session.settings.display.thread_order);
    let plan = &session.settings.numbering;

    let offset = session.settings.display.fixed_offset()?;
    let thread = match offset {
        Some(offset) => thread_for(
            plan,
            &session.messages,
            &session.contacts,
            number,
            order,
            &offset,
        ),
        None => thread_for(
            plan,
            &session.messages,
            &session.contacts,
            number,
            order,
            &Local,
        ),
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&thread)?);
        return Ok(());
    }

    let locale = session.locale()?;
    let text = match offset {
        Some(offset) => render::thread_to_text(&thread, &offset, locale),
        None => render::thread_to_text(&thread, &Local, locale),
    };
    println!("{}", text);
    Ok(())
}
