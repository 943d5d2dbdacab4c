//! Browser tests for the local-storage backed favorites.
//! Run with `wasm-pack test --headless --firefox frontend`.

#![cfg(target_arch = "wasm32")]

use frontend::storage::LocalStorageBackend;
use gloo_storage::{LocalStorage, Storage};
use shared::{FavoritesStore, KeyValueStore};
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!(run_in_browser);

fn fresh_key(name: &str) -> String {
    let key = format!("contest_dashboard.test.{}", name);
    LocalStorage::delete(&key);
    key
}

#[wasm_bindgen_test]
fn backend_round_trips_raw_strings() {
    let key = fresh_key("raw");
    let backend = LocalStorageBackend;

    assert_eq!(backend.get_item(&key).unwrap(), None);
    backend.set_item(&key, r#"["1"]"#).unwrap();
    assert_eq!(backend.get_item(&key).unwrap().as_deref(), Some(r#"["1"]"#));
}

#[wasm_bindgen_test]
fn favorites_survive_a_reload() {
    let key = fresh_key("reload");

    let mut store = FavoritesStore::load(LocalStorageBackend, key.clone());
    store.toggle("1890");

    let reloaded = FavoritesStore::load(LocalStorageBackend, key.clone());
    assert!(reloaded.is_favorite("1890"));
    assert_eq!(
        LocalStorageBackend.get_item(&key).unwrap().as_deref(),
        Some(r#"["1890"]"#)
    );
}

#[wasm_bindgen_test]
fn corrupt_record_starts_empty() {
    let key = fresh_key("corrupt");
    LocalStorageBackend.set_item(&key, "not json").unwrap();

    let store = FavoritesStore::load(LocalStorageBackend, key);
    assert!(store.is_empty());
}
