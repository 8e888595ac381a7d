use navtree::{
    Navigation,
    constants::PUBLIC_NAVIGATION_MAIN,
    store::{InMemoryStore, JsonFileStore, OptionStore},
};
use tempfile::TempDir;

use crate::helpers::*;

#[test]
fn test_in_memory_save_and_load() {
    let mut store = InMemoryStore::new();
    let mut nav = curated_navigation();
    reconcile_main(&mut nav, plugin_entries());

    nav.save(&mut store, PUBLIC_NAVIGATION_MAIN).unwrap();
    assert_eq!(store.len(), 1);

    let mut loaded = Navigation::new();
    loaded.load(&store, PUBLIC_NAVIGATION_MAIN).unwrap();
    assert_eq!(loaded, nav);
}

#[test]
fn test_load_missing_key_is_empty() {
    let store = InMemoryStore::new();
    let mut nav = curated_navigation();

    nav.load(&store, PUBLIC_NAVIGATION_MAIN).unwrap();
    assert!(nav.is_empty());
    assert_eq!(nav.total_pages(), 0);
}

#[test]
fn test_load_corrupt_value_is_empty() {
    let mut store = InMemoryStore::new();
    store
        .write(PUBLIC_NAVIGATION_MAIN, "{\"truncated\": ")
        .unwrap();

    let mut nav = Navigation::new();
    nav.load(&store, PUBLIC_NAVIGATION_MAIN).unwrap();
    assert!(nav.is_empty());
}

#[test]
fn test_file_store_persists_across_reopen() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    let nav = curated_navigation();

    {
        let mut store = JsonFileStore::open(&path).unwrap();
        nav.save(&mut store, PUBLIC_NAVIGATION_MAIN).unwrap();
        store.write("site_title", "Museum").unwrap();
    }
    assert!(path.exists());

    let store = JsonFileStore::open(&path).unwrap();
    let mut loaded = Navigation::new();
    loaded.load(&store, PUBLIC_NAVIGATION_MAIN).unwrap();
    assert_eq!(loaded, nav);
    assert_eq!(store.read("site_title").unwrap().as_deref(), Some("Museum"));
}

#[test]
fn test_file_store_corrupt_file_is_store_error() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("options.json");
    std::fs::write(&path, "{ this is not json").unwrap();

    let err = JsonFileStore::open(&path).unwrap_err();
    assert!(err.is_store_error());
    assert_eq!(err.module(), "store");
}

#[test]
fn test_boxed_store() {
    let mut store: Box<dyn OptionStore> = Box::new(InMemoryStore::new());
    let nav = curated_navigation();

    nav.save(&mut store, "nav").unwrap();
    let mut loaded = Navigation::new();
    loaded.load(&store, "nav").unwrap();
    assert_eq!(loaded, nav);
}
