//! In-memory user store
//!
//! Owns the user collection and the next-id counter behind a single
//! exclusive lock. All operations are short read/modify/write sequences with
//! no awaits, so a `std::sync::Mutex` serializes concurrent requests without
//! blocking the runtime.

use std::sync::Mutex;

use chrono::{SecondsFormat, Utc};

use crate::models::{User, UserDraft};

struct StoreInner {
    users: Vec<User>,
    next_id: u64,
}

/// Shared in-memory collection of user records
pub struct UserStore {
    inner: Mutex<StoreInner>,
}

impl UserStore {
    /// Create an empty store; ids start at 1
    pub fn new() -> Self {
        Self {
            inner: Mutex::new(StoreInner {
                users: Vec::new(),
                next_id: 1,
            }),
        }
    }

    /// Create a store pre-populated with the reference dataset
    pub fn seeded() -> Self {
        let users = vec![
            User {
                id: 1,
                name: "Иван Иванов".to_string(),
                email: "ivan@example.com".to_string(),
                age: 25,
                created_at: "2024-01-01T10:00:00Z".to_string(),
            },
            User {
                id: 2,
                name: "Мария Петрова".to_string(),
                email: "maria@example.com".to_string(),
                age: 30,
                created_at: "2024-01-02T11:00:00Z".to_string(),
            },
            User {
                id: 3,
                name: "Алексей Сидоров".to_string(),
                email: "alex@example.com".to_string(),
                age: 28,
                created_at: "2024-01-03T12:00:00Z".to_string(),
            },
        ];

        Self {
            inner: Mutex::new(StoreInner { users, next_id: 4 }),
        }
    }

    fn locked(&self) -> std::sync::MutexGuard<'_, StoreInner> {
        // The guarded data is plain values, so a poisoned lock is still usable
        self.inner
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    /// All records in insertion order
    pub fn list(&self) -> Vec<User> {
        self.locked().users.clone()
    }

    /// Look up a record by id
    pub fn get(&self, id: u64) -> Option<User> {
        self.locked().users.iter().find(|u| u.id == id).cloned()
    }

    /// Insert a new record, assigning the next id and the creation timestamp
    ///
    /// The counter is monotonically increasing and never reused, even after
    /// deletion.
    pub fn insert(&self, draft: UserDraft) -> User {
        let mut inner = self.locked();
        let user = User {
            id: inner.next_id,
            name: draft.name,
            email: draft.email,
            age: draft.age,
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
        };
        inner.next_id += 1;
        inner.users.push(user.clone());
        user
    }

    /// Replace every field of the record except `id` and `created_at`
    ///
    /// Fields are replaced wholesale, not merged. Returns `None` when no
    /// record matches.
    pub fn replace(&self, id: u64, draft: UserDraft) -> Option<User> {
        let mut inner = self.locked();
        let user = inner.users.iter_mut().find(|u| u.id == id)?;
        user.name = draft.name;
        user.email = draft.email;
        user.age = draft.age;
        Some(user.clone())
    }

    /// Remove the record with the given id, preserving the relative order of
    /// the remaining records
    ///
    /// Returns `false` when no record matches; the id counter is unaffected
    /// either way.
    pub fn delete(&self, id: u64) -> bool {
        let mut inner = self.locked();
        let position = inner.users.iter().position(|u| u.id == id);
        match position {
            Some(index) => {
                inner.users.remove(index);
                true
            }
            None => false,
        }
    }
}

impl Default for UserStore {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft(name: &str, email: &str, age: u32) -> UserDraft {
        UserDraft {
            name: name.to_string(),
            email: email.to_string(),
            age,
        }
    }

    #[test]
    fn test_seeded_store_contents() {
        let store = UserStore::seeded();
        let users = store.list();
        assert_eq!(users.len(), 3);
        assert_eq!(users[1].name, "Мария Петрова");
        assert_eq!(users[2].created_at, "2024-01-03T12:00:00Z");
    }

    #[test]
    fn test_insert_assigns_monotonic_ids() {
        let store = UserStore::seeded();
        let first = store.insert(draft("A", "a@x.com", 20));
        let second = store.insert(draft("B", "b@x.com", 21));
        assert_eq!(first.id, 4);
        assert_eq!(second.id, 5);
        assert!(second.id > first.id);
    }

    #[test]
    fn test_insert_sets_creation_timestamp() {
        let store = UserStore::new();
        let user = store.insert(draft("A", "a@x.com", 20));
        assert!(!user.created_at.is_empty());
        assert!(chrono::DateTime::parse_from_rfc3339(&user.created_at).is_ok());
    }

    #[test]
    fn test_get_round_trips_insert() {
        let store = UserStore::new();
        let created = store.insert(draft("A", "a@x.com", 20));
        let fetched = store.get(created.id).unwrap();
        assert_eq!(fetched, created);
    }

    #[test]
    fn test_get_unknown_id_is_none() {
        let store = UserStore::seeded();
        assert!(store.get(99).is_none());
    }

    #[test]
    fn test_replace_preserves_id_and_created_at() {
        let store = UserStore::seeded();
        let before = store.get(1).unwrap();
        let updated = store.replace(1, draft("B", "b@x.com", 40)).unwrap();
        assert_eq!(updated.id, 1);
        assert_eq!(updated.created_at, before.created_at);
        assert_eq!(updated.name, "B");
        assert_eq!(updated.email, "b@x.com");
        assert_eq!(updated.age, 40);
    }

    #[test]
    fn test_replace_is_wholesale_not_merge() {
        let store = UserStore::seeded();
        // An empty draft wipes name, email, and age
        let updated = store.replace(2, UserDraft::default()).unwrap();
        assert!(updated.name.is_empty());
        assert!(updated.email.is_empty());
        assert_eq!(updated.age, 0);
    }

    #[test]
    fn test_replace_unknown_id_is_none() {
        let store = UserStore::seeded();
        assert!(store.replace(99, draft("B", "b@x.com", 40)).is_none());
    }

    #[test]
    fn test_delete_then_get_is_none() {
        let store = UserStore::seeded();
        assert!(store.delete(3));
        assert!(store.get(3).is_none());
    }

    #[test]
    fn test_delete_is_idempotent_not_found() {
        let store = UserStore::seeded();
        assert!(store.delete(3));
        assert!(!store.delete(3));
        assert!(!store.delete(3));
    }

    #[test]
    fn test_delete_preserves_remaining_order() {
        let store = UserStore::seeded();
        store.delete(2);
        let ids: Vec<u64> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 3]);
    }

    #[test]
    fn test_ids_never_reused_after_delete() {
        let store = UserStore::seeded();
        store.delete(3);
        let user = store.insert(draft("A", "a@x.com", 20));
        assert_eq!(user.id, 4);
    }

    #[test]
    fn test_list_preserves_insertion_order_across_updates() {
        let store = UserStore::seeded();
        store.replace(1, draft("Z", "z@x.com", 99)).unwrap();
        let ids: Vec<u64> = store.list().iter().map(|u| u.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }
}
