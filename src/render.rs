//! Text rendering for conversation lists, thread views and the contact
//! directory. Localization happens here only; the organizer hands over
//! plain dates and timestamps.

use anyhow::{anyhow, Result};
use chrono::{DateTime, Locale, NaiveDate, TimeZone, Utc};

use crate::directory::DirectoryEntry;
use crate::model::{Conversation, RawMessage, Thread, ThreadItem};

const MAX_PREVIEW_CHARS: usize = 72;
const SENT_MARK: &str = "\u{2713} ";

/// Parse a locale name such as "fr_FR".
pub fn parse_locale(name: &str) -> Result<Locale> {
    Locale::try_from(name.trim()).map_err(|_| anyhow!("unknown locale {:?}", name))
}

fn to_local<Tz: TimeZone>(timestamp_millis: i64, tz: &Tz) -> DateTime<Tz> {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .with_timezone(tz)
}

/// "14 nov." style date for conversation rows.
pub fn short_date<Tz: TimeZone>(timestamp_millis: i64, tz: &Tz, locale: Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    to_local(timestamp_millis, tz)
        .format_localized("%-d %b", locale)
        .to_string()
}

/// "14 novembre 2023" style label for separators.
pub fn long_date(date: NaiveDate, locale: Locale) -> String {
    date.and_hms_opt(12, 0, 0)
        .map(|dt| dt.and_utc().format_localized("%-d %B %Y", locale).to_string())
        .unwrap_or_else(|| date.to_string())
}

pub fn message_time<Tz: TimeZone>(timestamp_millis: i64, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    to_local(timestamp_millis, tz).format("%H:%M").to_string()
}

/// Collapse whitespace and truncate long bodies with "...".
pub fn preview(body: &str) -> String {
    let collapsed = body.split_whitespace().collect::<Vec<_>>().join(" ");
    let mut chars = collapsed.chars();
    let head: String = chars.by_ref().take(MAX_PREVIEW_CHARS).collect();
    if chars.next().is_some() {
        format!("{head}...")
    } else {
        head
    }
}

fn plural(n: usize, word: &str) -> String {
    if n > 1 {
        format!("{} {}s", n, word)
    } else {
        format!("{} {}", n, word)
    }
}

pub fn conversation_row<Tz: TimeZone>(conv: &Conversation, tz: &Tz, locale: Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let last = &conv.last_message;
    let mark = if last.is_outbound() { SENT_MARK } else { "" };
    format!(
        "{}  [{}]\n    {}{}  ({})",
        conv.title(),
        short_date(last.timestamp_millis, tz, locale),
        mark,
        preview(&last.body),
        conv.messages.len()
    )
}

/// Render the conversation list screen.
pub fn conversation_list<Tz: TimeZone>(
    conversations: &[Conversation],
    tz: &Tz,
    locale: Locale,
) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut lines = vec![
        "Conversations".to_string(),
        plural(conversations.len(), "conversation"),
        String::new(),
    ];
    for conv in conversations {
        lines.push(conversation_row(conv, tz, locale));
        lines.push(String::new());
    }
    lines.join("\n")
}

fn message_line<Tz: TimeZone>(msg: &RawMessage, tz: &Tz) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let arrow = if msg.is_outbound() { ">>" } else { "<<" };
    format!(
        "  {} {}  {}",
        arrow,
        message_time(msg.timestamp_millis, tz),
        msg.body.trim()
    )
}

/// Render a single thread with its header and date separators.
pub fn thread_to_text<Tz: TimeZone>(thread: &Thread, tz: &Tz, locale: Locale) -> String
where
    Tz::Offset: std::fmt::Display,
{
    let mut lines = Vec::new();
    match &thread.contact_name {
        Some(name) => {
            lines.push(name.clone());
            lines.push(thread.address.clone());
        }
        None => lines.push(thread.address.clone()),
    }
    lines.push(String::new());

    if thread.items.is_empty() {
        lines.push("No messages.".to_string());
    }
    for item in &thread.items {
        match item {
            ThreadItem::Separator { date } => {
                lines.push(format!("---- {} ----", long_date(*date, locale)));
            }
            ThreadItem::Message { message } => lines.push(message_line(message, tz)),
        }
    }
    lines.join("\n")
}

/// Render the contact picker.
pub fn directory_listing(entries: &[&DirectoryEntry]) -> String {
    let mut lines: Vec<String> = entries
        .iter()
        .map(|e| {
            format!(
                "{}  {}",
                e.name,
                e.display_number.as_deref().unwrap_or("(no number)")
            )
        })
        .collect();
    lines.push(String::new());
    lines.push(plural(entries.len(), "contact"));
    lines.join("\n")
}
