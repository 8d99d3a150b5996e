//! Integration tests for the link lifecycle against the file-backed store:
//! batch creation, deletion, and durability of every write.

use std::sync::Arc;

use linklet::journal::{Journal, JsonFileJournal, MemoryJournal};
use linklet::links::{CreateError, LinkService};
use linklet::models::{Clock, CreateLinkRequest, EventKind};
use linklet::storage::{JsonFileStore, LinkStore};
use tempfile::TempDir;

struct FixedClock(i64);

impl Clock for FixedClock {
    fn now_millis(&self) -> i64 {
        self.0
    }
}

struct Env {
    dir: TempDir,
    service: LinkService,
}

impl Env {
    fn store_path(&self) -> std::path::PathBuf {
        self.dir.path().join("links.json")
    }

    /// Reload the store through a fresh handle, as a new process would.
    fn reload(&self) -> linklet::storage::LinkMap {
        JsonFileStore::new(self.store_path()).load()
    }
}

fn env_at(now: i64) -> Env {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn LinkStore> = Arc::new(JsonFileStore::new(dir.path().join("links.json")));
    let journal: Arc<dyn Journal> =
        Arc::new(JsonFileJournal::new(dir.path().join("journal.json")));
    let service = LinkService::new(store, journal, Arc::new(FixedClock(now)));
    Env { dir, service }
}

fn row(url: &str, code: &str, minutes: &str) -> CreateLinkRequest {
    CreateLinkRequest {
        url: url.to_string(),
        custom_code: (!code.is_empty()).then(|| code.to_string()),
        validity_minutes: (!minutes.is_empty()).then(|| minutes.to_string()),
    }
}

#[test]
fn created_batch_is_durable() {
    let env = env_at(50_000);
    let created = env
        .service
        .create(&[
            row("https://one.example", "", ""),
            row("https://two.example", "two", "60"),
            row("https://three.example", "", "5"),
        ])
        .unwrap();
    assert_eq!(created, 3);

    let links = env.reload();
    assert_eq!(links.len(), 3);
    assert_eq!(links["two"].url, "https://two.example");
    assert_eq!(links["two"].expires_at, 50_000 + 60 * 60_000);

    let journal = JsonFileJournal::new(env.dir.path().join("journal.json"));
    let kinds: Vec<EventKind> = journal.all().iter().map(|e| e.kind).collect();
    assert_eq!(kinds, vec![EventKind::LinkCreated; 3]);
}

#[test]
fn duplicate_custom_code_across_invocations_leaves_first_record() {
    let env = env_at(0);
    env.service
        .create(&[row("https://first.example", "promo", "")])
        .unwrap();

    let err = env
        .service
        .create(&[row("https://second.example", "promo", "")])
        .unwrap_err();
    assert!(matches!(err, CreateError::DuplicateCode { .. }));

    let links = env.reload();
    assert_eq!(links.len(), 1);
    assert_eq!(links["promo"].url, "https://first.example");
}

#[test]
fn failed_validation_writes_nothing_to_disk() {
    let env = env_at(0);
    let err = env
        .service
        .create(&[
            row("https://fine.example", "", ""),
            row("https://also-fine.example", "", "0"),
        ])
        .unwrap_err();
    assert!(matches!(err, CreateError::InvalidValidity { row: 1 }));

    // Neither blob exists; the batch aborted before any mutation.
    assert!(!env.store_path().exists());
    assert!(!env.dir.path().join("journal.json").exists());
}

#[test]
fn delete_persists_and_journals_even_for_missing_codes() {
    let env = env_at(0);
    env.service
        .create(&[row("https://example.com", "keep", "")])
        .unwrap();

    env.service.delete("ghost").unwrap();

    let links = env.reload();
    assert_eq!(links.len(), 1);
    assert!(links.contains_key("keep"));

    let journal = JsonFileJournal::new(env.dir.path().join("journal.json"));
    let deleted: Vec<_> = journal
        .all()
        .into_iter()
        .filter(|e| e.kind == EventKind::LinkDeleted)
        .collect();
    assert_eq!(deleted.len(), 1);
    assert_eq!(deleted[0].payload["code"], "ghost");
}

#[test]
fn generated_codes_are_unique_within_a_batch() {
    let dir = tempfile::tempdir().unwrap();
    let store: Arc<dyn LinkStore> = Arc::new(JsonFileStore::new(dir.path().join("links.json")));
    let journal: Arc<dyn Journal> = Arc::new(MemoryJournal::new());
    let service = LinkService::new(Arc::clone(&store), journal, Arc::new(FixedClock(0)));

    service
        .create(&[
            row("https://example.com/a", "", ""),
            row("https://example.com/b", "", ""),
            row("https://example.com/c", "", ""),
            row("https://example.com/d", "", ""),
            row("https://example.com/e", "", ""),
        ])
        .unwrap();

    let links = store.load();
    assert_eq!(links.len(), 5);
    for code in links.keys() {
        assert_eq!(code.len(), 6);
        assert!(code.chars().all(|c| c.is_ascii_alphanumeric()));
    }
}
