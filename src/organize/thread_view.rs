//! Single-thread timeline with date separators.

use chrono::{DateTime, NaiveDate, TimeZone, Utc};

use crate::model::{RawMessage, ThreadItem, ThreadOrder};
use crate::phone::NumberingPlan;

/// Calendar date of a millisecond timestamp in `tz`.
///
/// Timestamps outside chrono's range fall back to the epoch.
pub fn local_date<Tz: TimeZone>(timestamp_millis: i64, tz: &Tz) -> NaiveDate {
    DateTime::<Utc>::from_timestamp_millis(timestamp_millis)
        .unwrap_or_default()
        .with_timezone(tz)
        .date_naive()
}

/// Messages belonging to the same partner as `address`.
///
/// Uses the same trailing-digit rule as conversation grouping.
pub fn messages_for_partner(
    messages: &[RawMessage],
    address: &str,
    plan: &NumberingPlan,
) -> Vec<RawMessage> {
    let key = plan.match_key(address);
    messages
        .iter()
        .filter(|m| plan.match_key(&m.address) == key)
        .cloned()
        .collect()
}

/// Sort one partner's messages and interleave date separators.
///
/// Ascending output reads top-down, so each separator comes before the
/// first message of its day. Descending output is meant for bottom-anchored
/// lists, so each separator comes after the oldest message of its day.
/// Either way every date present gets exactly one separator.
pub fn build_thread_view<Tz: TimeZone>(
    messages: &[RawMessage],
    order: ThreadOrder,
    tz: &Tz,
) -> Vec<ThreadItem> {
    let mut sorted: Vec<&RawMessage> = messages.iter().collect();
    match order {
        ThreadOrder::Ascending => sorted.sort_by_key(|m| m.timestamp_millis),
        ThreadOrder::Descending => {
            sorted.sort_by(|a, b| b.timestamp_millis.cmp(&a.timestamp_millis))
        }
    }

    let mut items = Vec::with_capacity(sorted.len() + 4);
    let mut last_date: Option<NaiveDate> = None;

    for msg in sorted {
        let date = local_date(msg.timestamp_millis, tz);
        let day_changed = last_date != Some(date);
        match order {
            ThreadOrder::Ascending => {
                if day_changed {
                    items.push(ThreadItem::Separator { date });
                }
            }
            ThreadOrder::Descending => {
                if day_changed {
                    if let Some(prev) = last_date {
                        items.push(ThreadItem::Separator { date: prev });
                    }
                }
            }
        }
        items.push(ThreadItem::Message {
            message: msg.clone(),
        });
        last_date = Some(date);
    }

    if order == ThreadOrder::Descending {
        if let Some(prev) = last_date {
            items.push(ThreadItem::Separator { date: prev });
        }
    }

    items
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::Direction;
    use chrono::FixedOffset;

    const DAY: i64 = 86_400_000;

    fn msg(id: &str, ts: i64) -> RawMessage {
        RawMessage {
            id: id.to_string(),
            address: "0612345678".to_string(),
            body: format!("body {}", id),
            timestamp_millis: ts,
            direction: Direction::Inbound,
        }
    }

    fn ids(items: &[ThreadItem]) -> Vec<String> {
        items
            .iter()
            .map(|i| match i {
                ThreadItem::Message { message } => message.id.clone(),
                ThreadItem::Separator { date } => format!("sep:{}", date),
            })
            .collect()
    }

    #[test]
    fn test_empty() {
        assert!(build_thread_view(&[], ThreadOrder::Ascending, &Utc).is_empty());
        assert!(build_thread_view(&[], ThreadOrder::Descending, &Utc).is_empty());
    }

    #[test]
    fn test_descending_separator_follows_oldest_of_day() {
        let msgs = vec![msg("a", 1_000), msg("b", 2_000), msg("c", DAY + 1_000)];
        let items = build_thread_view(&msgs, ThreadOrder::Descending, &Utc);
        assert_eq!(
            ids(&items),
            vec!["c", "sep:1970-01-02", "b", "a", "sep:1970-01-01"]
        );
    }

    #[test]
    fn test_timezone_shifts_day_boundary() {
        // 23:30 UTC on Jan 1 is Jan 2 in UTC+1.
        let ts = DAY - 30 * 60 * 1000;
        let paris = FixedOffset::east_opt(3600).unwrap();
        assert_eq!(local_date(ts, &Utc).to_string(), "1970-01-01");
        assert_eq!(local_date(ts, &paris).to_string(), "1970-01-02");
    }

    #[test]
    fn test_out_of_range_timestamp_falls_back_to_epoch() {
        assert_eq!(local_date(i64::MAX, &Utc).to_string(), "1970-01-01");
    }

    #[test]
    fn test_messages_for_partner_uses_trailing_digits() {
        let mut other = msg("x", 5);
        other.address = "0698765432".to_string();
        let mut intl = msg("y", 6);
        intl.address = "+33 6 12 34 56 78".to_string();
        let msgs = vec![msg("a", 1), other, intl];
        let picked = messages_for_partner(&msgs, "0612345678", &NumberingPlan::france());
        let picked_ids: Vec<&str> = picked.iter().map(|m| m.id.as_str()).collect();
        assert_eq!(picked_ids, vec!["a", "y"]);
    }
}
