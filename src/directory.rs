//! Contact directory: the alphabetical contact picker.

use serde::Serialize;
use std::cmp::Ordering;

use crate::model::RawContact;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectoryEntry {
    pub name: String,
    /// Number shown next to the name and used to open the thread.
    pub display_number: Option<String>,
    pub contact: RawContact,
}

/// First raw number, then first normalized number.
pub fn display_number(contact: &RawContact) -> Option<String> {
    contact
        .raw_phone_numbers
        .iter()
        .chain(contact.normalized_phone_numbers.iter())
        .find(|n| !n.is_empty())
        .cloned()
}

/// Names starting with `.`, `*` or `#` are sorted after everything else.
fn is_special_name(name: &str) -> bool {
    matches!(name.trim().chars().next(), Some('.' | '*' | '#'))
}

fn compare_names(a: &str, b: &str) -> Ordering {
    match (is_special_name(a), is_special_name(b)) {
        (true, false) => Ordering::Greater,
        (false, true) => Ordering::Less,
        _ => a.to_lowercase().cmp(&b.to_lowercase()),
    }
}

/// Build directory entries sorted for display.
pub fn build_directory(contacts: &[RawContact]) -> Vec<DirectoryEntry> {
    let mut entries: Vec<DirectoryEntry> = contacts
        .iter()
        .map(|c| DirectoryEntry {
            name: c.name.clone(),
            display_number: display_number(c),
            contact: c.clone(),
        })
        .collect();
    entries.sort_by(|a, b| compare_names(&a.name, &b.name));
    entries
}

/// Case-insensitive name match, or substring of the display number.
pub fn search<'a>(entries: &'a [DirectoryEntry], query: &str) -> Vec<&'a DirectoryEntry> {
    if query.trim().is_empty() {
        return entries.iter().collect();
    }
    let lower = query.to_lowercase();
    entries
        .iter()
        .filter(|e| {
            e.name.to_lowercase().contains(&lower)
                || e
                    .display_number
                    .as_deref()
                    .is_some_and(|n| n.contains(query))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn contact(name: &str, number: &str) -> RawContact {
        RawContact {
            id: name.to_string(),
            name: name.to_string(),
            raw_phone_numbers: vec![number.to_string()],
            normalized_phone_numbers: vec![number.to_string()],
        }
    }

    #[test]
    fn test_special_names_sort_last() {
        let contacts = vec![
            contact("#Voicemail", "888"),
            contact("bob", "0600000002"),
            contact(".Hidden", "0600000003"),
            contact("Alice", "0600000001"),
        ];
        let names: Vec<String> = build_directory(&contacts)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["Alice", "bob", "#Voicemail", ".Hidden"]);
    }

    #[test]
    fn test_special_names_ignore_case() {
        let contacts = vec![contact("#bob", "1"), contact("#Alice", "2"), contact("zed", "3")];
        let names: Vec<String> = build_directory(&contacts)
            .into_iter()
            .map(|e| e.name)
            .collect();
        assert_eq!(names, vec!["zed", "#Alice", "#bob"]);
    }

    #[test]
    fn test_display_number_prefers_raw() {
        let mut c = contact("Alice", "06 12 34 56 78");
        c.normalized_phone_numbers = vec!["+33612345678".to_string()];
        assert_eq!(display_number(&c).as_deref(), Some("06 12 34 56 78"));
        c.raw_phone_numbers.clear();
        assert_eq!(display_number(&c).as_deref(), Some("+33612345678"));
    }

    #[test]
    fn test_search_by_name_or_number() {
        let entries = build_directory(&[contact("Alice", "0612345678"), contact("Bob", "0698765432")]);
        assert_eq!(search(&entries, "ALI").len(), 1);
        assert_eq!(search(&entries, "98765")[0].name, "Bob");
        assert_eq!(search(&entries, "  ").len(), 2);
        assert!(search(&entries, "zoe").is_empty());
    }
}
