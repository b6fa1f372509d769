#![forbid(unsafe_code)]

pub mod repository;

pub use repository::{InMemoryStore, KeyValueStore, SessionStore, StorageError};
