//! Conversation organization: group raw messages by partner, attach contact
//! names, and build single-thread views.

pub mod matcher;
pub mod thread_view;

use chrono::TimeZone;
use std::collections::HashMap;
use tracing::debug;

use crate::model::{Conversation, RawContact, RawMessage, Thread, ThreadOrder};
use crate::phone::NumberingPlan;

use self::matcher::find_contact_name_with;
use self::thread_view::{build_thread_view, messages_for_partner};

/// Group messages into conversations using the default numbering plan.
pub fn organize(messages: &[RawMessage], contacts: &[RawContact]) -> Vec<Conversation> {
    organize_with(&NumberingPlan::default(), messages, contacts)
}

/// Group messages into conversations, most recent conversation first.
///
/// Messages whose canonical numbers share the same trailing digits land in
/// one conversation. Within a conversation messages are newest first; equal
/// timestamps keep their input order, as do conversations whose last
/// messages tie.
pub fn organize_with(
    plan: &NumberingPlan,
    messages: &[RawMessage],
    contacts: &[RawContact],
) -> Vec<Conversation> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<(String, Vec<RawMessage>)> = Vec::new();

    for msg in messages {
        let key = plan.match_key(&msg.address);
        match index.get(&key) {
            Some(&i) => groups[i].1.push(msg.clone()),
            None => {
                index.insert(key.clone(), groups.len());
                groups.push((key, vec![msg.clone()]));
            }
        }
    }

    let mut conversations: Vec<Conversation> = groups
        .into_iter()
        .filter_map(|(key, mut group)| {
            group.sort_by(|a, b| b.timestamp_millis.cmp(&a.timestamp_millis));
            let last = group.first()?.clone();
            let contact_name = find_contact_name_with(plan, &last.address, contacts);
            Some(Conversation {
                key,
                display_number: last.address.clone(),
                contact_name,
                messages: group,
                last_message: last,
                unread_count: 0,
            })
        })
        .collect();

    conversations.sort_by(|a, b| {
        b.last_message
            .timestamp_millis
            .cmp(&a.last_message.timestamp_millis)
    });

    debug!(
        messages = messages.len(),
        contacts = contacts.len(),
        conversations = conversations.len(),
        "organized conversations"
    );
    conversations
}

/// Build the display-ready thread for one partner.
pub fn thread_for<Tz: TimeZone>(
    plan: &NumberingPlan,
    messages: &[RawMessage],
    contacts: &[RawContact],
    address: &str,
    order: ThreadOrder,
    tz: &Tz,
) -> Thread {
    let selected = messages_for_partner(messages, address, plan);
    Thread {
        address: address.to_string(),
        contact_name: find_contact_name_with(plan, address, contacts),
        items: build_thread_view(&selected, order, tz),
    }
}
