//! Tests for session identity: persistence across opens, first-run minting,
//! and the ephemeral fallback when the blob store is unavailable.

mod common;

use vetrina::error::{Result, VetrinaError};
use vetrina::{FileSessionStore, Session, SessionStore};

struct FailingStore;

impl SessionStore for FailingStore {
    fn load(&self) -> Result<Option<String>> {
        Err(VetrinaError::SessionStore("store unavailable".to_string()))
    }

    fn save(&self, _token: &str) -> Result<()> {
        Err(VetrinaError::SessionStore("store unavailable".to_string()))
    }
}

struct ReadOnlyStore;

impl SessionStore for ReadOnlyStore {
    fn load(&self) -> Result<Option<String>> {
        Ok(None)
    }

    fn save(&self, _token: &str) -> Result<()> {
        Err(VetrinaError::SessionStore("read-only".to_string()))
    }
}

#[test]
fn file_store_persists_token_across_opens() {
    common::init_tracing();
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("session"));

    let first = Session::open(&store);
    uuid::Uuid::parse_str(first.id()).expect("token should be a uuid");

    let second = Session::open(&store);
    assert_eq!(first.id(), second.id());

    let on_disk = std::fs::read_to_string(dir.path().join("session")).unwrap();
    assert_eq!(on_disk.trim(), first.id());
}

#[test]
fn file_store_creates_missing_parent_directories() {
    let dir = tempfile::tempdir().unwrap();
    let store = FileSessionStore::new(dir.path().join("state").join("vetrina").join("session"));

    let session = Session::open(&store);
    assert_eq!(store.load().unwrap().as_deref(), Some(session.id()));
}

#[test]
fn failing_store_falls_back_to_ephemeral_tokens() {
    let first = Session::open(&FailingStore);
    let second = Session::open(&FailingStore);

    // Never fails the caller; each process-lifetime fallback is fresh.
    uuid::Uuid::parse_str(first.id()).unwrap();
    uuid::Uuid::parse_str(second.id()).unwrap();
    assert_ne!(first.id(), second.id());
}

#[test]
fn save_failure_still_yields_a_usable_token() {
    let session = Session::open(&ReadOnlyStore);
    uuid::Uuid::parse_str(session.id()).unwrap();
}
