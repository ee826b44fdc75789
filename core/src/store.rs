//! In-memory, insertion-ordered todo collection shared across request tasks.
//!
//! # Design
//! `TodoStore` is a cheap `Clone` handle around `Arc<RwLock<Vec<TodoRecord>>>`.
//! Every operation takes the lock once for its whole duration: reads share it,
//! `append` and `toggle_completed` hold it exclusively, so a toggle can never
//! observe a half-grown vector and no append is lost.
//!
//! The lock is a `std::sync::RwLock` because nothing here awaits. A poisoned
//! lock is recovered rather than propagated; the vector has no invariant that
//! a panicking writer could leave half-applied.
//!
//! Ids are not checked for uniqueness on `append`. Lookups scan from the
//! front, so the first record with a given id wins.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use tracing::debug;

use crate::error::StoreError;
use crate::types::TodoRecord;

#[derive(Debug, Clone, Default)]
pub struct TodoStore {
    todos: Arc<RwLock<Vec<TodoRecord>>>,
}

impl TodoStore {
    /// An empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding `records` in the given order.
    pub fn from_records(records: impl IntoIterator<Item = TodoRecord>) -> Self {
        Self {
            todos: Arc::new(RwLock::new(records.into_iter().collect())),
        }
    }

    /// A store pre-populated with the demonstration records.
    pub fn seeded() -> Self {
        Self::from_records([
            TodoRecord::new("1", "2022-01-01", "Clean Room", false),
            TodoRecord::new("2", "2022-03-01", "Vaccuum", true),
            TodoRecord::new("3", "2022-01-01", "Clean Room", false),
        ])
    }

    /// Snapshot of every record in insertion order.
    pub fn list_all(&self) -> Vec<TodoRecord> {
        let todos = self.read();
        debug!(count = todos.len(), "listing todos");
        todos.clone()
    }

    pub fn find_by_id(&self, id: &str) -> Result<TodoRecord, StoreError> {
        let todos = self.read();
        let found = todos.iter().find(|todo| todo.id == id).cloned();
        debug!(id, found = found.is_some(), "looked up todo");
        found.ok_or_else(|| not_found(id))
    }

    pub fn append(&self, record: TodoRecord) {
        let mut todos = self.write();
        debug!(id = %record.id, position = todos.len(), "appending todo");
        todos.push(record);
    }

    /// Flip `completed` on the first record with `id` and return the result.
    pub fn toggle_completed(&self, id: &str) -> Result<TodoRecord, StoreError> {
        let mut todos = self.write();
        let todo = todos
            .iter_mut()
            .find(|todo| todo.id == id)
            .ok_or_else(|| not_found(id))?;
        todo.completed = !todo.completed;
        debug!(id, completed = todo.completed, "toggled todo");
        Ok(todo.clone())
    }

    pub fn len(&self) -> usize {
        self.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().is_empty()
    }

    fn read(&self) -> RwLockReadGuard<'_, Vec<TodoRecord>> {
        self.todos.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Vec<TodoRecord>> {
        self.todos.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn not_found(id: &str) -> StoreError {
    StoreError::NotFound { id: id.to_string() }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn clean_room() -> TodoRecord {
        TodoRecord::new("1", "2022-01-01", "Clean Room", false)
    }

    #[test]
    fn new_store_is_empty() {
        let store = TodoStore::new();
        assert!(store.is_empty());
        assert!(store.list_all().is_empty());
    }

    #[test]
    fn seeded_store_keeps_insertion_order() {
        let ids: Vec<String> = TodoStore::seeded()
            .list_all()
            .into_iter()
            .map(|todo| todo.id)
            .collect();
        assert_eq!(ids, ["1", "2", "3"]);
    }

    #[test]
    fn append_then_find_returns_equal_record() {
        let store = TodoStore::seeded();
        let before = store.len();
        let record = TodoRecord::new("42", "2024-05-01", "Water plants", false);

        store.append(record.clone());

        assert_eq!(store.len(), before + 1);
        assert_eq!(store.find_by_id("42").unwrap(), record);
        assert_eq!(store.list_all().last(), Some(&record));
    }

    #[test]
    fn unknown_id_is_not_found() {
        let store = TodoStore::seeded();
        let expected = StoreError::NotFound {
            id: "missing".to_string(),
        };
        assert_eq!(store.find_by_id("missing").unwrap_err(), expected);
        assert_eq!(store.toggle_completed("missing").unwrap_err(), expected);
    }

    #[test]
    fn toggle_is_visible_to_later_reads() {
        let store = TodoStore::from_records([clean_room()]);

        let toggled = store.toggle_completed("1").unwrap();

        assert!(toggled.completed);
        assert!(store.find_by_id("1").unwrap().completed);
        assert!(store.list_all()[0].completed);
    }

    #[test]
    fn toggling_twice_restores_original_flag() {
        let store = TodoStore::from_records([clean_room()]);
        store.toggle_completed("1").unwrap();
        let back = store.toggle_completed("1").unwrap();
        assert_eq!(back, clean_room());
    }

    #[test]
    fn duplicate_ids_are_accepted_and_first_match_wins() {
        let store = TodoStore::from_records([clean_room()]);
        store.append(TodoRecord::new("1", "2023-07-07", "Duplicate", true));

        assert_eq!(store.len(), 2);
        assert_eq!(store.find_by_id("1").unwrap().item, "Clean Room");

        let toggled = store.toggle_completed("1").unwrap();
        assert_eq!(toggled.item, "Clean Room");
        let all = store.list_all();
        assert!(all[0].completed);
        assert!(all[1].completed, "second record must be left untouched");
    }

    #[test]
    fn clones_share_the_same_collection() {
        let store = TodoStore::new();
        let handle = store.clone();
        handle.append(clean_room());
        assert_eq!(store.len(), 1);
    }
}
