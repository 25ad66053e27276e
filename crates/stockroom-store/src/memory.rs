//! In-memory entity stores for testing, development, and embedding.
//!
//! Records live in a `HashMap` behind a `RwLock`; data is lost when the
//! store is dropped. Uniqueness indexes are enforced by linear scan, which
//! is fine at in-memory scale. Each write takes the lock once, so the
//! check-and-write inside a single store call is atomic with respect to
//! other callers.

use std::collections::HashMap;
use std::sync::RwLock;

use stockroom_types::{
    Category, CategoryChanges, EntityId, NewCategory, NewPart, Part,
};

use crate::error::{StoreError, StoreResult};
use crate::traits::{CategoryStore, PartStore, PartUpdate};

/// In-memory, HashMap-based category store.
pub struct InMemoryCategoryStore {
    records: RwLock<HashMap<EntityId, Category>>,
}

impl InMemoryCategoryStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of categories currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryCategoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl CategoryStore for InMemoryCategoryStore {
    fn find(&self, id: &EntityId) -> StoreResult<Option<Category>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.values().find(|c| c.name == name).cloned())
    }

    fn find_child_of(&self, parent_name: &str) -> StoreResult<Option<Category>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map
            .values()
            .find(|c| c.parent_name.as_deref() == Some(parent_name))
            .cloned())
    }

    fn insert(&self, new: NewCategory) -> StoreResult<Category> {
        let mut map = self.records.write().expect("lock poisoned");
        if map.values().any(|c| c.name == new.name) {
            tracing::debug!(name = %new.name, "category insert rejected by name index");
            return Err(StoreError::DuplicateKey {
                collection: "categories",
                field: "name",
                value: new.name,
            });
        }
        let record = Category {
            id: EntityId::new(),
            revision: 1,
            name: new.name,
            parent_name: new.parent_name,
        };
        map.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(
        &self,
        id: &EntityId,
        changes: &CategoryChanges,
        expected_revision: Option<u64>,
    ) -> StoreResult<Option<Category>> {
        let mut map = self.records.write().expect("lock poisoned");
        let Some(existing) = map.get(id) else {
            return Ok(None);
        };
        if let Some(expected) = expected_revision {
            if existing.revision != expected {
                return Err(StoreError::RevisionConflict {
                    id: *id,
                    expected,
                    actual: existing.revision,
                });
            }
        }
        if let Some(name) = &changes.name {
            if map.values().any(|c| c.id != *id && c.name == *name) {
                tracing::debug!(name = %name, "category update rejected by name index");
                return Err(StoreError::DuplicateKey {
                    collection: "categories",
                    field: "name",
                    value: name.clone(),
                });
            }
        }
        let record = map.get_mut(id).expect("checked above");
        if let Some(name) = &changes.name {
            record.name = name.clone();
        }
        if let Some(parent_name) = &changes.parent_name {
            record.parent_name = Some(parent_name.clone());
        }
        record.revision += 1;
        Ok(Some(record.clone()))
    }

    fn delete(&self, id: &EntityId) -> StoreResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        Ok(map.remove(id).is_some())
    }

    fn list(&self) -> StoreResult<Vec<Category>> {
        let map = self.records.read().expect("lock poisoned");
        let mut all: Vec<Category> = map.values().cloned().collect();
        all.sort_by_key(|c| c.id);
        Ok(all)
    }
}

impl std::fmt::Debug for InMemoryCategoryStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryCategoryStore")
            .field("record_count", &self.len())
            .finish()
    }
}

/// In-memory, HashMap-based part store.
pub struct InMemoryPartStore {
    records: RwLock<HashMap<EntityId, Part>>,
}

impl InMemoryPartStore {
    /// Create a new empty store.
    pub fn new() -> Self {
        Self {
            records: RwLock::new(HashMap::new()),
        }
    }

    /// Number of parts currently stored.
    pub fn len(&self) -> usize {
        self.records.read().expect("lock poisoned").len()
    }

    /// Returns `true` if the store is empty.
    pub fn is_empty(&self) -> bool {
        self.records.read().expect("lock poisoned").is_empty()
    }
}

impl Default for InMemoryPartStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PartStore for InMemoryPartStore {
    fn find(&self, id: &EntityId) -> StoreResult<Option<Part>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.get(id).cloned())
    }

    fn find_by_serial(&self, serial_number: &str) -> StoreResult<Option<Part>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map
            .values()
            .find(|p| p.serial_number == serial_number)
            .cloned())
    }

    fn find_by_category(&self, category: &str) -> StoreResult<Option<Part>> {
        let map = self.records.read().expect("lock poisoned");
        Ok(map.values().find(|p| p.category == category).cloned())
    }

    fn insert(&self, new: NewPart) -> StoreResult<Part> {
        let mut map = self.records.write().expect("lock poisoned");
        if map.values().any(|p| p.serial_number == new.serial_number) {
            tracing::debug!(
                serial_number = %new.serial_number,
                "part insert rejected by serial index"
            );
            return Err(StoreError::DuplicateKey {
                collection: "parts",
                field: "serial_number",
                value: new.serial_number,
            });
        }
        let record = Part {
            id: EntityId::new(),
            revision: 1,
            serial_number: new.serial_number,
            name: new.name,
            description: new.description,
            category: new.category,
            quantity: new.quantity,
            price: new.price,
            location: new.location,
        };
        map.insert(record.id, record.clone());
        Ok(record)
    }

    fn update(
        &self,
        id: &EntityId,
        update: &PartUpdate,
        expected_revision: Option<u64>,
    ) -> StoreResult<Option<Part>> {
        let mut map = self.records.write().expect("lock poisoned");
        let Some(existing) = map.get(id) else {
            return Ok(None);
        };
        if let Some(expected) = expected_revision {
            if existing.revision != expected {
                return Err(StoreError::RevisionConflict {
                    id: *id,
                    expected,
                    actual: existing.revision,
                });
            }
        }
        if let Some(serial) = &update.serial_number {
            if map.values().any(|p| p.id != *id && p.serial_number == *serial) {
                tracing::debug!(
                    serial_number = %serial,
                    "part update rejected by serial index"
                );
                return Err(StoreError::DuplicateKey {
                    collection: "parts",
                    field: "serial_number",
                    value: serial.clone(),
                });
            }
        }
        let record = map.get_mut(id).expect("checked above");
        if let Some(serial) = &update.serial_number {
            record.serial_number = serial.clone();
        }
        if let Some(name) = &update.name {
            record.name = name.clone();
        }
        if let Some(description) = &update.description {
            record.description = description.clone();
        }
        if let Some(category) = &update.category {
            record.category = category.clone();
        }
        if let Some(quantity) = update.quantity {
            record.quantity = quantity;
        }
        if let Some(price) = update.price {
            record.price = price;
        }
        if let Some(location) = &update.location {
            record.location = location.clone();
        }
        record.revision += 1;
        Ok(Some(record.clone()))
    }

    fn delete(&self, id: &EntityId) -> StoreResult<bool> {
        let mut map = self.records.write().expect("lock poisoned");
        Ok(map.remove(id).is_some())
    }

    fn list(&self) -> StoreResult<Vec<Part>> {
        let map = self.records.read().expect("lock poisoned");
        let mut all: Vec<Part> = map.values().cloned().collect();
        all.sort_by_key(|p| p.id);
        Ok(all)
    }
}

impl std::fmt::Debug for InMemoryPartStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InMemoryPartStore")
            .field("record_count", &self.len())
            .finish()
    }
}
