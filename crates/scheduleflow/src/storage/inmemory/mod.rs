//! In-memory storage backend.
//!
//! Stores partners and contacts in maps wrapped in `Arc<RwLock<_>>`. Used by
//! the test suites and selectable at runtime with `STORAGE_BACKEND=memory`.
//!
//! # Example
//!
//! ```rust,ignore
//! use scheduleflow::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! ```

mod repository;

pub use repository::InMemoryRepository;
