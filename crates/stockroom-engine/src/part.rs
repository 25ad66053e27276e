//! Write-time guards for part-category bindings.

use stockroom_store::CategoryStore;
use stockroom_types::{NewPart, Part, PartChanges};

use crate::error::ConflictError;

/// Pre-write guards for part create and update.
///
/// Every part must reference an existing **child** category. Both checks
/// run before anything is persisted, so an invalid binding is never stored
/// even transiently.
pub struct PartValidator<'a> {
    categories: &'a dyn CategoryStore,
}

impl<'a> PartValidator<'a> {
    pub fn new(categories: &'a dyn CategoryStore) -> Self {
        Self { categories }
    }

    /// Guard a create: the named category must exist and be a child.
    pub fn validate_create(&self, new: &NewPart) -> Result<(), ConflictError> {
        self.check_category(&new.category)
    }

    /// Guard an update: the same two checks, against the effective category
    /// — the changed value if the update touches `category`, the stored one
    /// otherwise.
    pub fn validate_update(
        &self,
        existing: &Part,
        changes: &PartChanges,
    ) -> Result<(), ConflictError> {
        let effective = changes.category.as_deref().unwrap_or(&existing.category);
        self.check_category(effective)
    }

    /// Existence before property: confirm the category exists, then ask
    /// whether it is a base category, so the specific error is produced.
    fn check_category(&self, name: &str) -> Result<(), ConflictError> {
        match self.categories.find_by_name(name)? {
            None => Err(ConflictError::UnknownPartCategory {
                category: name.to_string(),
            }),
            Some(category) if category.is_base() => Err(ConflictError::BaseCategory {
                category: name.to_string(),
            }),
            Some(_) => Ok(()),
        }
    }
}
