//! In-memory storage backend.
//!
//! Stores recipes in a `BTreeMap` wrapped in `Arc<RwLock<_>>`, so listings come
//! back ordered by id. Data is not persisted between runs.
//!
//! # Example
//!
//! ```rust,ignore
//! use food_recipes::storage::inmemory::InMemoryRepository;
//!
//! let repo = InMemoryRepository::new();
//! // Use repo for testing...
//! ```

mod repository;

pub use repository::InMemoryRepository;
