//! # PersistentStore — typed collections over a key-value backend
//!
//! [`PersistentStore`] owns the only durable state of the client: three
//! JSON-encoded collections of locally created records, each under its own key
//! in a [`KeyValueStore`].
//!
//! | Key | Collection |
//! |-----|-----------|
//! | [`USERS_KEY`] (`customUsers`) | Local [`User`]s |
//! | [`TASKS_KEY`] (`customTodos`) | Local [`Task`]s |
//! | [`COMMENTS_KEY`] (`customComments`) | Local [`Comment`]s |
//!
//! A collection exists lazily: a missing key reads as an empty list.
//!
//! ## Read path
//!
//! Each collection has a strict `load_*` method returning
//! `Result<Vec<_>, StorageError>` and a lenient accessor (`users`, `tasks`,
//! `comments`) that logs and degrades to an empty list. The data merger uses
//! the strict form so it can surface a notification.
//!
//! ## Write path
//!
//! `add_*` appends and rewrites the whole collection; `delete_*` filters and
//! rewrites it. [`delete_user`](PersistentStore::delete_user) cascades to the
//! user's tasks. Writes go through synchronously, so a read right after a
//! write sees the new value.

use serde::de::DeserializeOwned;
use serde::Serialize;

use crate::error::StorageError;
use crate::ids::IdAllocator;
use crate::kv::KeyValueStore;
use crate::models::{Comment, Record, Task, User};
use crate::sample;

pub const USERS_KEY: &str = "customUsers";
pub const TASKS_KEY: &str = "customTodos";
pub const COMMENTS_KEY: &str = "customComments";

/// Typed accessor over the local collections.
pub struct PersistentStore<K: KeyValueStore> {
    backend: K,
    prefix: String,
    ids: IdAllocator,
}

impl<K: KeyValueStore> PersistentStore<K> {
    pub fn new(backend: K) -> Self {
        Self::with_prefix(backend, "")
    }

    /// Store whose keys are prefixed, e.g. `"demo."` → `"demo.customUsers"`.
    pub fn with_prefix(backend: K, prefix: &str) -> Self {
        Self {
            backend,
            prefix: prefix.to_string(),
            ids: IdAllocator::new(),
        }
    }

    /// Replace the ID allocator (tests freeze the clock).
    pub fn with_ids(mut self, ids: IdAllocator) -> Self {
        self.ids = ids;
        self
    }

    pub fn backend(&self) -> &K {
        &self.backend
    }

    fn key(&self, base: &str) -> String {
        format!("{}{base}", self.prefix)
    }

    fn load<T: DeserializeOwned>(&self, base: &str) -> Result<Vec<T>, StorageError> {
        let key = self.key(base);
        match self.backend.get_item(&key)? {
            None => Ok(Vec::new()),
            Some(raw) if raw.trim().is_empty() => Ok(Vec::new()),
            Some(raw) => {
                serde_json::from_str(&raw).map_err(|source| StorageError::Corrupt { key, source })
            }
        }
    }

    fn load_or_empty<T: DeserializeOwned>(&self, base: &str) -> Vec<T> {
        self.load(base).unwrap_or_else(|e| {
            tracing::warn!("Reading {base}: {e}; treating as empty");
            Vec::new()
        })
    }

    fn save<T: Serialize>(&self, base: &str, items: &[T]) -> Result<(), StorageError> {
        let key = self.key(base);
        let json = serde_json::to_string(items).map_err(|source| StorageError::Encode {
            key: key.clone(),
            source,
        })?;
        self.backend.set_item(&key, &json)
    }

    // ---- users ----

    pub fn load_users(&self) -> Result<Vec<User>, StorageError> {
        self.load(USERS_KEY)
    }

    pub fn users(&self) -> Vec<User> {
        self.load_or_empty(USERS_KEY)
    }

    pub fn save_users(&self, users: &[User]) -> Result<(), StorageError> {
        self.save(USERS_KEY, users)
    }

    pub fn add_user(&self, user: User) -> Result<User, StorageError> {
        let mut users = self.users();
        users.push(user.clone());
        self.save_users(&users)?;
        tracing::debug!("Stored local user {}", user.id);
        Ok(user)
    }

    pub fn find_user(&self, id: u64) -> Option<User> {
        self.users().into_iter().find(|u| u.id == id)
    }

    /// Remove a local user and every local task they own.
    pub fn delete_user(&self, id: u64) -> Result<(), StorageError> {
        let users: Vec<User> = self.users().into_iter().filter(|u| u.id != id).collect();
        self.save_users(&users)?;
        self.delete_user_tasks(id)
    }

    pub fn next_user_id(&self) -> u64 {
        self.ids.next::<User>(self.users().iter().map(Record::id))
    }

    // ---- tasks ----

    pub fn load_tasks(&self) -> Result<Vec<Task>, StorageError> {
        self.load(TASKS_KEY)
    }

    pub fn tasks(&self) -> Vec<Task> {
        self.load_or_empty(TASKS_KEY)
    }

    pub fn tasks_for_user(&self, user_id: u64) -> Vec<Task> {
        self.tasks()
            .into_iter()
            .filter(|t| t.user_id == user_id)
            .collect()
    }

    pub fn save_tasks(&self, tasks: &[Task]) -> Result<(), StorageError> {
        self.save(TASKS_KEY, tasks)
    }

    pub fn add_task(&self, task: Task) -> Result<Task, StorageError> {
        let mut tasks = self.tasks();
        tasks.push(task.clone());
        self.save_tasks(&tasks)?;
        tracing::debug!("Stored local task {} for user {}", task.id, task.user_id);
        Ok(task)
    }

    pub fn delete_task(&self, id: u64) -> Result<(), StorageError> {
        let tasks: Vec<Task> = self.tasks().into_iter().filter(|t| t.id != id).collect();
        self.save_tasks(&tasks)
    }

    pub fn delete_user_tasks(&self, user_id: u64) -> Result<(), StorageError> {
        let tasks: Vec<Task> = self
            .tasks()
            .into_iter()
            .filter(|t| t.user_id != user_id)
            .collect();
        self.save_tasks(&tasks)
    }

    pub fn next_task_id(&self) -> u64 {
        self.ids.next::<Task>(self.tasks().iter().map(Record::id))
    }

    // ---- comments ----

    pub fn load_comments(&self) -> Result<Vec<Comment>, StorageError> {
        self.load(COMMENTS_KEY)
    }

    pub fn comments(&self) -> Vec<Comment> {
        self.load_or_empty(COMMENTS_KEY)
    }

    pub fn comments_for_post(&self, post_id: u64) -> Vec<Comment> {
        self.comments()
            .into_iter()
            .filter(|c| c.post_id == post_id)
            .collect()
    }

    pub fn save_comments(&self, comments: &[Comment]) -> Result<(), StorageError> {
        self.save(COMMENTS_KEY, comments)
    }

    pub fn add_comment(&self, comment: Comment) -> Result<Comment, StorageError> {
        let mut comments = self.comments();
        comments.push(comment.clone());
        self.save_comments(&comments)?;
        tracing::debug!("Stored local comment {} on post {}", comment.id, comment.post_id);
        Ok(comment)
    }

    pub fn delete_comment(&self, id: u64) -> Result<(), StorageError> {
        let comments: Vec<Comment> = self
            .comments()
            .into_iter()
            .filter(|c| c.id != id)
            .collect();
        self.save_comments(&comments)
    }

    pub fn next_comment_id(&self) -> u64 {
        self.ids.next::<Comment>(self.comments().iter().map(Record::id))
    }

    // ---- lifecycle ----

    /// Drop all three collections.
    pub fn clear(&self) -> Result<(), StorageError> {
        for base in [USERS_KEY, TASKS_KEY, COMMENTS_KEY] {
            self.backend.remove_item(&self.key(base))?;
        }
        Ok(())
    }

    /// Write the sample users, tasks and comment if no local user exists yet.
    ///
    /// Returns whether anything was written.
    pub fn seed_sample_data(&self) -> Result<bool, StorageError> {
        if !self.users().is_empty() {
            return Ok(false);
        }
        self.save_users(&sample::sample_users())?;
        self.save_tasks(&sample::sample_tasks())?;
        self.save_comments(&sample::sample_comments())?;
        tracing::info!("Seeded sample data");
        Ok(true)
    }
}
