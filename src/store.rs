//! Menu Editor Store
//!
//! Uses Leptos reactive_stores for fine-grained reactivity.

use std::collections::HashMap;

use leptos::prelude::*;
use reactive_stores::Store;

use crate::models::MenuRow;

/// Editor state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct MenuEditorState {
    /// Flat rows as shown in the table, staged edits included
    pub rows: Vec<MenuRow>,
    /// Rows differ from the last fetched tree
    pub staged: bool,
    pub loading: bool,
    /// Titles of linked posts, for the Post column
    pub post_titles: HashMap<u64, String>,
}

pub type MenuEditorStore = Store<MenuEditorState>;

/// Get the menu editor store from context
pub fn use_menu_store() -> MenuEditorStore {
    expect_context::<MenuEditorStore>()
}

// ========================
// Store Helper Functions
// ========================

/// Replace rows with a fresh server tree, dropping staged edits
pub fn store_load_rows(store: &MenuEditorStore, rows: Vec<MenuRow>) {
    store.rows().set(rows);
    store.staged().set(false);
    store.loading().set(false);
}

/// Apply a local drag-and-drop edit
pub fn store_stage_rows(store: &MenuEditorStore, rows: Vec<MenuRow>) {
    store.rows().set(rows);
    store.staged().set(true);
}

pub fn store_set_loading(store: &MenuEditorStore, loading: bool) {
    store.loading().set(loading);
}

pub fn store_remember_post(store: &MenuEditorStore, post_id: u64, title: &str) {
    store.post_titles().write().insert(post_id, title.to_string());
}

pub fn store_post_title(store: &MenuEditorStore, post_id: u64) -> Option<String> {
    store.post_titles().read().get(&post_id).cloned()
}

/// Snapshot of the current rows without subscribing
pub fn store_rows_untracked(store: &MenuEditorStore) -> Vec<MenuRow> {
    store.rows().get_untracked()
}
