//! Session file tests.

use chrono::{TimeZone, Utc};
use orion_session::{
    Error, Message, RESUME_PREAMBLE, Role, SessionFile, SessionState, SessionStore,
};
use std::fs;

fn store(dir: &tempfile::TempDir) -> SessionStore {
    SessionStore::new(dir.path().join("orion_session.json"))
}

#[test]
fn load_missing_file_is_none() {
    let dir = tempfile::tempdir().unwrap();
    assert!(store(&dir).load().unwrap().is_none());
}

#[test]
fn save_then_load_preserves_order_and_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let file = SessionFile {
        start_time: Some(start),
        session_started: true,
        history: vec![
            Message::new(Role::Assistant, "Ready.", start),
            Message::new(Role::User, "vending machine with odd drinks", start),
            Message::new(Role::Assistant, "Buy the strangest one.", start),
        ],
        mission: None,
    };

    store.save(&file).unwrap();
    assert_eq!(store.load().unwrap(), Some(file));
    assert!(!dir.path().join("orion_session.json.tmp").exists());
}

#[test]
fn file_uses_documented_field_names() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    let start = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    store
        .save(&SessionFile {
            start_time: Some(start),
            session_started: true,
            history: vec![Message::new(Role::User, "hi", start)],
            mission: None,
        })
        .unwrap();

    let json: serde_json::Value =
        serde_json::from_slice(&fs::read(store.path()).unwrap()).unwrap();
    assert_eq!(json["start_time"], "2026-10-19T09:00:00Z");
    assert_eq!(json["session_started"], true);
    assert_eq!(json["history"][0]["role"], "user");
    assert_eq!(json["history"][0]["content"], "hi");
    assert_eq!(json["history"][0]["timestamp"], "2026-10-19T09:00:00Z");
    assert!(json.get("mission").is_none());
}

#[test]
fn load_accepts_messages_without_timestamps() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    let data = r#"{
  "start_time": "2026-10-19T09:00:00+09:00",
  "session_started": true,
  "history": [
    {"role": "user", "content": "A"},
    {"role": "model", "content": "x"},
    {"role": "assistant", "content": "y"}
  ]
}"#;
    fs::write(store.path(), data).unwrap();

    let file = store.load().unwrap().unwrap();
    assert_eq!(file.history.len(), 3);
    assert!(file.history[0].timestamp.is_none());
    assert_eq!(file.history[1].role, Role::User);
    assert_eq!(file.history[2].role, Role::Assistant);
    assert_eq!(
        file.start_time,
        Some(Utc.with_ymd_and_hms(2026, 10, 19, 0, 0, 0).unwrap())
    );
}

#[test]
fn context_without_briefing_opens_with_user_turn() {
    let at = Utc.with_ymd_and_hms(2026, 10, 19, 9, 0, 0).unwrap();
    let file = SessionFile {
        start_time: Some(at),
        session_started: true,
        history: vec![
            Message::new(Role::Assistant, "Ready.", at),
            Message::new(Role::User, "a red door", at),
        ],
        mission: None,
    };

    let state = SessionState::from_file(file);
    let context: Vec<_> = state
        .conversation
        .iter()
        .map(|m| (m.role, m.content.as_str()))
        .collect();
    assert_eq!(
        context,
        [
            (llm::Role::User, RESUME_PREAMBLE),
            (llm::Role::Model, "Ready."),
            (llm::Role::User, "a red door"),
        ]
    );
    assert_eq!(state.history.len(), 2);
}

#[test]
fn load_malformed_file_is_corrupt() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    fs::write(store.path(), "{ not json").unwrap();

    let err = store.load().unwrap_err();
    assert!(matches!(err, Error::Corrupt { .. }));
    assert!(err.to_string().contains("is corrupt"));
}

#[test]
fn save_creates_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = SessionStore::new(dir.path().join("nested/deeper/session.json"));
    store.save(&SessionFile::default()).unwrap();
    assert!(store.exists());
}

#[test]
fn remove_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let store = store(&dir);
    store.save(&SessionFile::default()).unwrap();
    store.remove().unwrap();
    assert!(!store.exists());
    store.remove().unwrap();
}
