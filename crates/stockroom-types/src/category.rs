//! Category records and their write payloads.
//!
//! Categories form a strict two-level hierarchy keyed by name: a **base**
//! category (`parent_name == None`) groups a family of **child** categories
//! (`parent_name == Some(base.name)`). Parts may only be assigned to child
//! categories. The hierarchy invariants are enforced by `stockroom-engine`.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;

/// A persisted category record.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Store-assigned identifier.
    pub id: EntityId,
    /// Store-maintained revision, bumped on every update.
    pub revision: u64,
    /// Globally unique natural key. Parts and child categories reference
    /// categories by this name, never by id.
    pub name: String,
    /// Name of the parent category, if any.
    pub parent_name: Option<String>,
}

impl Category {
    /// A base category has no parent and may not be assigned to parts.
    pub fn is_base(&self) -> bool {
        self.parent_name.is_none()
    }

    /// A child category is the only valid category assignment for a part.
    pub fn is_child(&self) -> bool {
        self.parent_name.is_some()
    }
}

/// Payload for creating a category. The store assigns id and revision.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewCategory {
    pub name: String,
    #[serde(default)]
    pub parent_name: Option<String>,
}

impl NewCategory {
    /// A base category, no parent.
    pub fn base(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_name: None,
        }
    }

    /// A child of `parent`.
    pub fn child_of(name: impl Into<String>, parent: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            parent_name: Some(parent.into()),
        }
    }
}

/// Partial update for a category. `None` fields are left unchanged.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct CategoryChanges {
    pub name: Option<String>,
    pub parent_name: Option<String>,
}

impl CategoryChanges {
    /// Returns `true` if no field would change. Empty change-sets are
    /// rejected before they reach the store.
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.parent_name.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_and_child_helpers() {
        let base = Category {
            id: EntityId::new(),
            revision: 1,
            name: "Electronics".into(),
            parent_name: None,
        };
        assert!(base.is_base());
        assert!(!base.is_child());

        let child = Category {
            parent_name: Some("Electronics".into()),
            ..base.clone()
        };
        assert!(child.is_child());
    }

    #[test]
    fn new_category_constructors() {
        assert_eq!(NewCategory::base("Tools").parent_name, None);
        assert_eq!(
            NewCategory::child_of("Hand Tools", "Tools").parent_name.as_deref(),
            Some("Tools")
        );
    }

    #[test]
    fn changes_emptiness() {
        assert!(CategoryChanges::default().is_empty());
        let changes: CategoryChanges =
            serde_json::from_str(r#"{"name": "Renamed"}"#).unwrap();
        assert!(!changes.is_empty());
    }

    #[test]
    fn new_category_deserializes_without_parent() {
        let new: NewCategory = serde_json::from_str(r#"{"name": "Tools"}"#).unwrap();
        assert_eq!(new, NewCategory::base("Tools"));
    }
}
