use super::*;
use crate::storage::{FileKeyValueStore, MemoryKeyValueStore};
use tempfile::TempDir;

fn stored_quotes(storage: &impl KeyValueStore) -> Vec<Quote> {
    serde_json::from_str(&storage.get(QUOTES_KEY).unwrap()).unwrap()
}

#[test]
fn load_without_saved_quotes_returns_seed() {
    let store = QuoteStore::load(MemoryKeyValueStore::new());
    assert_eq!(store.quotes(), Quote::seed().as_slice());
}

#[test]
fn load_does_not_write_seed() {
    let store = QuoteStore::load(MemoryKeyValueStore::new());
    assert_eq!(store.storage().get(QUOTES_KEY), None);
}

#[test]
fn load_reads_saved_quotes() {
    let mut storage = MemoryKeyValueStore::new();
    storage
        .set(QUOTES_KEY, r#"[{"text":"Hello","category":"Greeting"}]"#.to_string())
        .unwrap();

    let store = QuoteStore::load(storage);

    assert_eq!(store.len(), 1);
    assert_eq!(store.get(0), Some(&Quote::new("Hello", "Greeting")));
}

#[test]
fn load_saved_empty_list_stays_empty() {
    let mut storage = MemoryKeyValueStore::new();
    storage.set(QUOTES_KEY, "[]".to_string()).unwrap();

    let store = QuoteStore::load(storage);
    assert!(store.is_empty());
}

#[test]
fn load_corrupted_quotes_falls_back_to_seed() {
    let mut storage = MemoryKeyValueStore::new();
    storage.set(QUOTES_KEY, "[{\"text\": ".to_string()).unwrap();

    let store = QuoteStore::load(storage);
    assert_eq!(store.quotes(), Quote::seed().as_slice());
}

#[test]
fn append_adds_last_and_persists() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let quote = Quote::new("Do or do not.", "Motivation");

    store.append(quote.clone()).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.quotes().last(), Some(&quote));
    assert_eq!(stored_quotes(store.storage()), store.quotes());
}

#[test]
fn append_allows_duplicates() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let first = store.get(0).unwrap().clone();

    store.append(first.clone()).unwrap();

    assert_eq!(store.len(), 4);
    assert_eq!(store.quotes().iter().filter(|q| **q == first).count(), 2);
}

#[test]
fn append_all_keeps_order_and_persists_once() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let added = store
        .append_all(vec![Quote::new("a", "X"), Quote::new("b", "Y")])
        .unwrap();

    assert_eq!(added, 2);
    assert_eq!(store.get(3), Some(&Quote::new("a", "X")));
    assert_eq!(store.get(4), Some(&Quote::new("b", "Y")));
    assert_eq!(stored_quotes(store.storage()), store.quotes());
}

#[test]
fn append_all_empty_does_not_write() {
    let mut store = QuoteStore::load(MemoryKeyValueStore::new());
    let added = store.append_all(Vec::new()).unwrap();

    assert_eq!(added, 0);
    assert_eq!(store.storage().get(QUOTES_KEY), None);
}

#[test]
fn contains_uses_structural_equality() {
    let store = QuoteStore::load(MemoryKeyValueStore::new());
    let seed = Quote::seed();

    assert!(store.quotes().contains(&seed[1]));
    assert!(!store.quotes().contains(&Quote::new(seed[1].text.clone(), "Life")));
}

#[test]
fn file_backed_store_survives_reload() {
    let temp_dir = TempDir::new().unwrap();
    let path = temp_dir.path().join("storage.json");

    let mut store = QuoteStore::load(FileKeyValueStore::open(&path).unwrap());
    store.append(Quote::new("Persist me", "Test")).unwrap();

    let reloaded = QuoteStore::load(FileKeyValueStore::open(&path).unwrap());
    assert_eq!(reloaded.quotes(), store.quotes());
}
