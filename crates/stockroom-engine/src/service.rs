//! The inventory service: full write paths over the two collections.
//!
//! Composes the stores and validators into create/get/update/delete/list
//! operations. Every mutation follows the same shape: load, reject empty
//! change-sets, run the guards, then hand the write to the store with the
//! loaded revision as an optimistic-concurrency check. Guards run strictly
//! **before** the write, so an invalid record is never persisted, even
//! transiently.
//!
//! The service owns store-error translation (duplicate key and revision
//! conflicts surface as [`ConflictError`]s) and never talks to the network
//! layer; HTTP mapping is `stockroom-server`'s concern.

use std::sync::Arc;

use stockroom_store::{
    CategoryStore, InMemoryCategoryStore, InMemoryPartStore, PartStore, PartUpdate,
};
use stockroom_types::{
    Category, CategoryChanges, EntityId, NewCategory, NewPart, Part, PartChanges,
};

use crate::category::CategoryValidator;
use crate::error::{EngineError, EngineResult, Entity};
use crate::part::PartValidator;

/// Shared, thread-safe handle to the inventory collections.
///
/// Stores are injected; there is no module-level state. Clone freely — the
/// clones share the underlying stores.
#[derive(Clone)]
pub struct InventoryService {
    categories: Arc<dyn CategoryStore>,
    parts: Arc<dyn PartStore>,
}

impl InventoryService {
    pub fn new(categories: Arc<dyn CategoryStore>, parts: Arc<dyn PartStore>) -> Self {
        Self { categories, parts }
    }

    /// A service over fresh in-memory stores, for tests and development.
    pub fn in_memory() -> Self {
        Self::new(
            Arc::new(InMemoryCategoryStore::new()),
            Arc::new(InMemoryPartStore::new()),
        )
    }

    fn category_validator(&self) -> CategoryValidator<'_> {
        CategoryValidator::new(&*self.categories, &*self.parts)
    }

    fn part_validator(&self) -> PartValidator<'_> {
        PartValidator::new(&*self.categories)
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    pub fn create_category(&self, new: NewCategory) -> EngineResult<Category> {
        self.category_validator().validate_create(&new)?;
        let created = self.categories.insert(new)?;
        tracing::debug!(id = %created.id, name = %created.name, "category created");
        Ok(created)
    }

    pub fn get_category(&self, id: &EntityId) -> EngineResult<Category> {
        self.categories
            .find(id)?
            .ok_or_else(|| EngineError::not_found(Entity::Category, *id))
    }

    pub fn list_categories(&self) -> EngineResult<Vec<Category>> {
        Ok(self.categories.list()?)
    }

    pub fn update_category(
        &self,
        id: &EntityId,
        changes: CategoryChanges,
    ) -> EngineResult<Category> {
        if changes.is_empty() {
            return Err(EngineError::EmptyUpdate);
        }
        let existing = self.get_category(id)?;
        self.category_validator()
            .validate_update(&existing, &changes)?;
        self.categories
            .update(id, &changes, Some(existing.revision))?
            .ok_or_else(|| EngineError::not_found(Entity::Category, *id))
    }

    pub fn delete_category(&self, id: &EntityId) -> EngineResult<()> {
        let existing = self.get_category(id)?;
        self.category_validator().validate_delete(&existing)?;
        if self.categories.delete(id)? {
            tracing::debug!(id = %id, name = %existing.name, "category deleted");
            Ok(())
        } else {
            Err(EngineError::not_found(Entity::Category, *id))
        }
    }

    // -----------------------------------------------------------------------
    // Parts
    // -----------------------------------------------------------------------

    pub fn create_part(&self, new: NewPart) -> EngineResult<Part> {
        check_price(new.price)?;
        self.part_validator().validate_create(&new)?;
        let created = self.parts.insert(new)?;
        tracing::debug!(id = %created.id, serial = %created.serial_number, "part created");
        Ok(created)
    }

    pub fn get_part(&self, id: &EntityId) -> EngineResult<Part> {
        self.parts
            .find(id)?
            .ok_or_else(|| EngineError::not_found(Entity::Part, *id))
    }

    pub fn list_parts(&self) -> EngineResult<Vec<Part>> {
        Ok(self.parts.list()?)
    }

    pub fn update_part(&self, id: &EntityId, changes: PartChanges) -> EngineResult<Part> {
        if changes.is_empty() {
            return Err(EngineError::EmptyUpdate);
        }
        if let Some(price) = changes.price {
            check_price(price)?;
        }
        let existing = self.get_part(id)?;
        self.part_validator().validate_update(&existing, &changes)?;

        // Merge the location patch over the pre-update snapshot; the store
        // receives the full resolved address.
        let location = changes
            .location
            .as_ref()
            .map(|patch| patch.apply(&existing.location));
        let update = PartUpdate {
            serial_number: changes.serial_number,
            name: changes.name,
            description: changes.description,
            category: changes.category,
            quantity: changes.quantity,
            price: changes.price,
            location,
        };
        self.parts
            .update(id, &update, Some(existing.revision))?
            .ok_or_else(|| EngineError::not_found(Entity::Part, *id))
    }

    /// Parts have no downstream dependents; deletion is unguarded.
    pub fn delete_part(&self, id: &EntityId) -> EngineResult<()> {
        if self.parts.delete(id)? {
            tracing::debug!(id = %id, "part deleted");
            Ok(())
        } else {
            Err(EngineError::not_found(Entity::Part, *id))
        }
    }
}

fn check_price(price: f64) -> EngineResult<()> {
    if price < 0.0 || !price.is_finite() {
        return Err(EngineError::Validation(format!(
            "price must be a non-negative number, got {price}"
        )));
    }
    Ok(())
}

impl std::fmt::Debug for InventoryService {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryService").finish_non_exhaustive()
    }
}
