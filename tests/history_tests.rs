//! History persistence integration tests

use open_transcribe::application::ports::HistoryStore;
use open_transcribe::application::HistoryService;
use open_transcribe::domain::history::{HistoryEntry, HISTORY_LIMIT};
use open_transcribe::infrastructure::JsonHistoryStore;

fn store_in(dir: &tempfile::TempDir) -> JsonHistoryStore {
    JsonHistoryStore::with_path(dir.path().join("history.json"))
}

#[tokio::test]
async fn entries_survive_a_restart() {
    let dir = tempfile::tempdir().unwrap();

    {
        let service = HistoryService::new(store_in(&dir));
        service
            .record(HistoryEntry::new("speech.mp3", "hello world"))
            .await
            .unwrap();
    }

    // A fresh store over the same file sees the entry
    let service = HistoryService::new(store_in(&dir));
    let cache = service.load().await.unwrap();
    assert_eq!(cache.len(), 1);
    assert_eq!(cache.entries()[0].source_file_name, "speech.mp3");
    assert_eq!(cache.entries()[0].text, "hello world");
}

#[tokio::test]
async fn order_is_preserved_across_save_and_load() {
    let dir = tempfile::tempdir().unwrap();
    let service = HistoryService::new(store_in(&dir));

    for i in 0..5 {
        service
            .record(HistoryEntry::new(format!("{}.mp3", i), "text"))
            .await
            .unwrap();
    }

    let cache = service.load().await.unwrap();
    let names: Vec<_> = cache
        .entries()
        .iter()
        .map(|e| e.source_file_name.as_str())
        .collect();
    assert_eq!(names, ["4.mp3", "3.mp3", "2.mp3", "1.mp3", "0.mp3"]);
}

#[tokio::test]
async fn bound_is_enforced_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let service = HistoryService::new(store_in(&dir));

    for i in 0..(HISTORY_LIMIT + 5) {
        service
            .record(HistoryEntry::new(format!("{}.mp3", i), "text"))
            .await
            .unwrap();
    }

    let stored = store_in(&dir).load().await.unwrap();
    assert_eq!(stored.len(), HISTORY_LIMIT);
    assert_eq!(stored[0].source_file_name, "54.mp3");
    assert_eq!(stored[HISTORY_LIMIT - 1].source_file_name, "5.mp3");
}

#[tokio::test]
async fn corrupt_store_rehydrates_empty_without_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("history.json");
    tokio::fs::write(&path, "definitely not json").await.unwrap();

    let service = HistoryService::new(JsonHistoryStore::with_path(&path));
    let cache = service.load().await.unwrap();
    assert!(cache.is_empty());

    // And the store is usable again afterwards
    service
        .record(HistoryEntry::new("a.mp3", "text"))
        .await
        .unwrap();
    assert_eq!(service.load().await.unwrap().len(), 1);
}

#[tokio::test]
async fn clear_empties_the_stored_document() {
    let dir = tempfile::tempdir().unwrap();
    let service = HistoryService::new(store_in(&dir));

    let entry = HistoryEntry::new("a.mp3", "text");
    let id = entry.id.clone();
    service.record(entry).await.unwrap();

    service.clear().await.unwrap();

    assert!(service.get(&id).await.unwrap().is_none());
    assert!(store_in(&dir).load().await.unwrap().is_empty());
}

#[tokio::test]
async fn delete_is_idempotent() {
    let dir = tempfile::tempdir().unwrap();
    let service = HistoryService::new(store_in(&dir));

    let entry = HistoryEntry::new("a.mp3", "text");
    let id = entry.id.clone();
    service.record(entry).await.unwrap();

    assert!(service.delete(&id).await.unwrap());
    assert!(!service.delete(&id).await.unwrap());
    assert!(service.load().await.unwrap().is_empty());
}
