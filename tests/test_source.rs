//! Integration tests for the export sources (src/source/).

mod common;

use common::{temp_data_dir, write_contact_export, write_sms_export};
use pretty_assertions::assert_eq;

use smsthreads::model::{Direction, RawContact, RawMessage};
use smsthreads::source::{
    load_all, ContactExportFile, ContactSource, MessageSource, SmsBox, SmsExportFile, SmsFilter,
    SourceError,
};

#[test]
fn test_sms_export_file_reads_records() {
    let (_tmp, dir) = temp_data_dir();
    write_sms_export(
        &dir,
        &[
            ("2", "+33612345678", "Bien reçu", 1_700_000_200_000, "2"),
            ("1", "0612345678", "Tu es où ?", 1_700_000_100_000, "1"),
        ],
    );
    let source = SmsExportFile::new(dir.join("messages.json"), SmsFilter::default());
    let msgs = source.fetch().unwrap();
    assert_eq!(msgs.len(), 2);
    assert_eq!(msgs[0].direction, Direction::Outbound);
    assert_eq!(msgs[1].direction, Direction::Inbound);
    assert_eq!(msgs[1].body, "Tu es où ?");
}

#[test]
fn test_sms_default_limit_is_one_hundred() {
    let (_tmp, dir) = temp_data_dir();
    let ids: Vec<String> = (0..150).map(|i| i.to_string()).collect();
    let rows: Vec<(&str, &str, &str, i64, &str)> = ids
        .iter()
        .map(|id| (id.as_str(), "0612345678", "x", 1_000, "1"))
        .collect();
    write_sms_export(&dir, &rows);
    let source = SmsExportFile::new(dir.join("messages.json"), SmsFilter::default());
    assert_eq!(source.fetch().unwrap().len(), 100);
}

#[test]
fn test_sms_inbox_filter() {
    let (_tmp, dir) = temp_data_dir();
    write_sms_export(
        &dir,
        &[
            ("1", "0612345678", "a", 1, "1"),
            ("2", "0612345678", "b", 2, "2"),
            ("3", "0612345678", "c", 3, "1"),
        ],
    );
    let filter = SmsFilter {
        sms_box: SmsBox::Inbox,
        max_count: 100,
    };
    let msgs = SmsExportFile::new(dir.join("messages.json"), filter)
        .fetch()
        .unwrap();
    let ids: Vec<&str> = msgs.iter().map(|m| m.id.as_str()).collect();
    assert_eq!(ids, vec!["1", "3"]);
}

#[test]
fn test_missing_exports_are_empty() {
    let (_tmp, dir) = temp_data_dir();
    let msgs = SmsExportFile::new(dir.join("nope.json"), SmsFilter::default())
        .fetch()
        .unwrap();
    let contacts = ContactExportFile::new(dir.join("nope.json")).fetch().unwrap();
    assert!(msgs.is_empty());
    assert!(contacts.is_empty());
}

#[test]
fn test_malformed_json_is_error() {
    let (_tmp, dir) = temp_data_dir();
    std::fs::write(dir.join("messages.json"), "{not json").unwrap();
    let err = SmsExportFile::new(dir.join("messages.json"), SmsFilter::default())
        .fetch()
        .unwrap_err();
    assert!(matches!(err, SourceError::Json { .. }));
    assert!(err.to_string().contains("messages.json"));
}

#[test]
fn test_contact_export_keeps_file_order() {
    let (_tmp, dir) = temp_data_dir();
    write_contact_export(
        &dir,
        &[
            ("Zoé", &["0611111111"]),
            ("Nobody", &[]),
            ("Alice", &["0612345678", "+33 1 40 00 00 00"]),
        ],
    );
    let contacts = ContactExportFile::new(dir.join("contacts.json"))
        .fetch()
        .unwrap();
    let names: Vec<&str> = contacts.iter().map(|c| c.name.as_str()).collect();
    assert_eq!(names, vec!["Zoé", "Alice"]);
    assert_eq!(contacts[1].raw_phone_numbers.len(), 2);
}

struct FailingContacts;

impl ContactSource for FailingContacts {
    fn fetch(&self) -> Result<Vec<RawContact>, SourceError> {
        Err(SourceError::Task("permission denied".to_string()))
    }
}

struct FixedMessages(Vec<RawMessage>);

impl MessageSource for FixedMessages {
    fn fetch(&self) -> Result<Vec<RawMessage>, SourceError> {
        Ok(self.0.clone())
    }
}

#[tokio::test]
async fn test_load_all_reads_both() {
    let (_tmp, dir) = temp_data_dir();
    write_sms_export(&dir, &[("1", "0612345678", "a", 1, "1")]);
    write_contact_export(&dir, &[("Alice", &["0612345678"])]);

    let (msgs, contacts) = load_all(
        SmsExportFile::new(dir.join("messages.json"), SmsFilter::default()),
        ContactExportFile::new(dir.join("contacts.json")),
    )
    .await
    .unwrap();
    assert_eq!(msgs.len(), 1);
    assert_eq!(contacts.len(), 1);
}

#[tokio::test]
async fn test_load_all_fails_when_either_fails() {
    let msgs = vec![common::msg("1", "0612345678", 1)];
    let result = load_all(FixedMessages(msgs), FailingContacts).await;
    assert!(result.is_err());
}
