//! Storage backend implementations.
//!
//! Concrete implementations of the repository traits defined in
//! `food_recipes_core::storage`.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
