//! # Key-value backend trait
//!
//! [`KeyValueStore`] is the storage technology underneath
//! [`PersistentStore`](crate::PersistentStore): a synchronous, string-keyed map
//! of string values, modelled on the browser's `localStorage`. Reads after a
//! write within the same operation observe the written value.
//!
//! Implementations live in sibling modules ([`crate::memory`], and
//! `crate::local` on wasm32 with the `web` feature).

use crate::error::StorageError;

/// Synchronous string-keyed store.
pub trait KeyValueStore {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove_item(&self, key: &str) -> Result<(), StorageError>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for &T {
    fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
        (**self).get_item(key)
    }

    fn set_item(&self, key: &str, value: &str) -> Result<(), StorageError> {
        (**self).set_item(key, value)
    }

    fn remove_item(&self, key: &str) -> Result<(), StorageError> {
        (**self).remove_item(key)
    }
}
