//! Entity storage for Stockroom.
//!
//! This crate defines the storage interface for the two inventory
//! collections — categories and parts — plus an in-memory backend. The
//! store is a plain document store with two native guarantees and nothing
//! more:
//!
//! 1. **Uniqueness indexes**: `Category.name` and `Part.serial_number` are
//!    unique per collection; violating writes fail with
//!    [`StoreError::DuplicateKey`].
//! 2. **Optimistic revisions**: every record carries a revision the store
//!    bumps on update; an update carrying a stale expected revision fails
//!    with [`StoreError::RevisionConflict`].
//!
//! Cross-entity references (`parent_name`, `Part.category`) are **not**
//! enforced here — the store never interprets them. All referential and
//! hierarchy integrity lives in `stockroom-engine`.
//!
//! # Storage Backends
//!
//! All backends implement [`CategoryStore`] and/or [`PartStore`]:
//!
//! - [`InMemoryCategoryStore`] / [`InMemoryPartStore`] — `HashMap`-based
//!   stores for tests, development, and embedding.

pub mod error;
pub mod memory;
pub mod traits;

// Re-export primary types at crate root for ergonomic imports.
pub use error::{StoreError, StoreResult};
pub use memory::{InMemoryCategoryStore, InMemoryPartStore};
pub use traits::{CategoryStore, PartStore, PartUpdate};
