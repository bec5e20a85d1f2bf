//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `scheduleflow_core::storage`. The backend is picked at startup from
//! [`crate::config::StorageBackend`].
//!
//! # Feature Flags
//!
//! - `sqlite` (default): SQLite storage backend using `rusqlite` and `tokio-rusqlite`
//!
//! The in-memory backend is always compiled.
//!
//! Build without SQLite:
//! ```bash
//! cargo build -p scheduleflow --no-default-features
//! ```

pub mod inmemory;

#[cfg(feature = "sqlite")]
pub mod sqlite;

pub use inmemory::InMemoryRepository;

#[cfg(feature = "sqlite")]
pub use sqlite::SqliteRepository;
