pub mod config;
pub mod error;
pub mod ids;
pub mod kv;
pub mod models;
pub mod persistent;
pub mod sample;

mod memory;
pub use memory::MemoryStore;

#[cfg(all(target_arch = "wasm32", feature = "web"))]
mod local;
#[cfg(all(target_arch = "wasm32", feature = "web"))]
pub use local::LocalStorageStore;

pub use config::ClientConfig;
pub use error::StorageError;
pub use ids::IdAllocator;
pub use kv::KeyValueStore;
pub use models::{Address, Comment, Company, Post, Record, Task, User};
pub use persistent::PersistentStore;
