//! Shared test fixtures and helpers.

#![allow(dead_code)]

use std::path::{Path, PathBuf};
use tempfile::TempDir;

use smsthreads::model::{Direction, RawContact, RawMessage};

pub const DAY_MS: i64 = 86_400_000;

/// Create a temporary data directory.
pub fn temp_data_dir() -> (TempDir, PathBuf) {
    let tmp = TempDir::new().expect("failed to create temp dir");
    let data_dir = tmp.path().to_path_buf();
    (tmp, data_dir)
}

pub fn msg(id: &str, address: &str, ts: i64) -> RawMessage {
    RawMessage {
        id: id.to_string(),
        address: address.to_string(),
        body: format!("message {}", id),
        timestamp_millis: ts,
        direction: Direction::Inbound,
    }
}

pub fn sent(id: &str, address: &str, ts: i64) -> RawMessage {
    RawMessage {
        direction: Direction::Outbound,
        ..msg(id, address, ts)
    }
}

pub fn contact(name: &str, numbers: &[&str]) -> RawContact {
    RawContact {
        id: name.to_lowercase(),
        name: name.to_string(),
        raw_phone_numbers: numbers.iter().map(|s| s.to_string()).collect(),
        normalized_phone_numbers: numbers.iter().map(|s| s.to_string()).collect(),
    }
}

/// Write an Android SMS provider export: (id, address, body, date millis, type).
pub fn write_sms_export(dir: &Path, rows: &[(&str, &str, &str, i64, &str)]) {
    let records: Vec<serde_json::Value> = rows
        .iter()
        .map(|(id, address, body, date, kind)| {
            serde_json::json!({
                "_id": id,
                "address": address,
                "body": body,
                "date": date.to_string(),
                "type": kind,
                "read": "1",
            })
        })
        .collect();
    std::fs::write(
        dir.join("messages.json"),
        serde_json::to_string_pretty(&records).unwrap(),
    )
    .unwrap();
}

/// Write a contact export: (name, numbers).
pub fn write_contact_export(dir: &Path, rows: &[(&str, &[&str])]) {
    let records: Vec<serde_json::Value> = rows
        .iter()
        .enumerate()
        .map(|(i, (name, numbers))| {
            let phones: Vec<serde_json::Value> = numbers
                .iter()
                .map(|n| serde_json::json!({ "number": n }))
                .collect();
            serde_json::json!({
                "id": i.to_string(),
                "name": name,
                "phoneNumbers": phones,
            })
        })
        .collect();
    std::fs::write(
        dir.join("contacts.json"),
        serde_json::to_string_pretty(&records).unwrap(),
    )
    .unwrap();
}

/// Settings pinned to UTC so date labels are deterministic.
pub fn write_utc_settings(dir: &Path) {
    std::fs::write(
        dir.join(".smsthreads.toml"),
        "[display]\nutc_offset = \"+00:00\"\nlocale = \"en_US\"\n",
    )
    .unwrap();
}
