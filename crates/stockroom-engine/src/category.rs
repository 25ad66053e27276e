//! Write-time guards for the category hierarchy.
//!
//! The store only knows about the `name` uniqueness index; everything that
//! makes categories a *hierarchy* — parents must exist, a category cannot
//! parent itself, a category in use is immutable — is enforced here, as
//! pure read-only guards run before the write is handed to the store.

use stockroom_store::{CategoryStore, PartStore};
use stockroom_types::{Category, CategoryChanges, EntityId, NewCategory};

use crate::error::ConflictError;

/// Pre-write guards for category create, update, and delete.
///
/// Guards never mutate: they either allow the write to proceed or abort it
/// before persistence. The children-check and parts-check are independent;
/// both must pass.
pub struct CategoryValidator<'a> {
    categories: &'a dyn CategoryStore,
    parts: &'a dyn PartStore,
}

impl<'a> CategoryValidator<'a> {
    pub fn new(categories: &'a dyn CategoryStore, parts: &'a dyn PartStore) -> Self {
        Self { categories, parts }
    }

    /// Guard a create: the parent link, if any, must resolve.
    pub fn validate_create(&self, new: &NewCategory) -> Result<(), ConflictError> {
        if let Some(parent) = &new.parent_name {
            self.check_parent(parent, None)?;
        }
        Ok(())
    }

    /// Guard an update: the effective parent link must still resolve, and
    /// the category must not be in use by children or parts.
    ///
    /// The parent check runs against the value the update would leave in
    /// place — the changed value if the update touches `parent_name`, the
    /// stored one otherwise — and is skipped entirely when that value is
    /// null.
    pub fn validate_update(
        &self,
        existing: &Category,
        changes: &CategoryChanges,
    ) -> Result<(), ConflictError> {
        let effective_parent = changes
            .parent_name
            .as_deref()
            .or(existing.parent_name.as_deref());
        if let Some(parent) = effective_parent {
            self.check_parent(parent, Some(existing.id))?;
        }
        self.check_no_children(&existing.name)?;
        self.check_no_parts(&existing.name)?;
        Ok(())
    }

    /// Guard a delete: the category must not be in use by children or
    /// parts.
    pub fn validate_delete(&self, existing: &Category) -> Result<(), ConflictError> {
        self.check_no_children(&existing.name)?;
        self.check_no_parts(&existing.name)?;
        Ok(())
    }

    /// Existence before property: the parent must exist before we ask
    /// whether it is the record being written.
    fn check_parent(
        &self,
        parent: &str,
        writing: Option<EntityId>,
    ) -> Result<(), ConflictError> {
        match self.categories.find_by_name(parent)? {
            None => Err(ConflictError::ParentNotAssignable {
                parent: parent.to_string(),
            }),
            Some(candidate) if Some(candidate.id) == writing => {
                Err(ConflictError::ParentNotAssignable {
                    parent: parent.to_string(),
                })
            }
            Some(_) => Ok(()),
        }
    }

    fn check_no_children(&self, name: &str) -> Result<(), ConflictError> {
        if self.categories.find_child_of(name)?.is_some() {
            return Err(ConflictError::HasChildren {
                name: name.to_string(),
            });
        }
        Ok(())
    }

    fn check_no_parts(&self, name: &str) -> Result<(), ConflictError> {
        if self.parts.find_by_category(name)?.is_some() {
            return Err(ConflictError::AssignedToParts {
                name: name.to_string(),
            });
        }
        Ok(())
    }
}
