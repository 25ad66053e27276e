//! Foundation types for Stockroom.
//!
//! This crate provides the entity and payload types used throughout the
//! Stockroom system. Every other Stockroom crate depends on
//! `stockroom-types`.
//!
//! # Key Types
//!
//! - [`EntityId`] — Store-assigned record identifier (UUID v7)
//! - [`Category`] — A node in the two-level category hierarchy
//! - [`Part`] — An inventoried part, bound to a child category
//! - [`Location`] — A free-form structured storage address
//! - [`LocationPatch`] — Partial location update with merge semantics
//!
//! Categories form a strict two-level hierarchy: a **base** category has no
//! parent, a **child** category names a base category as its parent. Parts
//! reference categories by name, never by id — referential integrity over
//! those soft links is enforced by `stockroom-engine`, not here.

pub mod category;
pub mod error;
pub mod id;
pub mod location;
pub mod part;

pub use category::{Category, CategoryChanges, NewCategory};
pub use error::TypeError;
pub use id::EntityId;
pub use location::{Location, LocationPatch, LocationSlot};
pub use part::{NewPart, Part, PartChanges};
