use stockroom_store::StoreError;
use stockroom_types::EntityId;
use thiserror::Error;

/// A write rejected because it would violate a uniqueness or
/// referential/hierarchy invariant.
///
/// Every variant names the specific invariant violated; the HTTP layer maps
/// all of them to the same conflict status.
#[derive(Debug, Error, PartialEq)]
pub enum ConflictError {
    /// The requested parent category does not exist, or is the category
    /// being written itself.
    #[error("could not assign category to parent {parent:?}")]
    ParentNotAssignable { parent: String },

    /// The category still has child categories.
    #[error("could not modify category {name:?}: category has children")]
    HasChildren { name: String },

    /// The category is still assigned to at least one part.
    #[error("could not modify category {name:?}: category is assigned to parts")]
    AssignedToParts { name: String },

    /// The part references a category that does not exist.
    #[error("could not assign part to category {category:?}: no such category")]
    UnknownPartCategory { category: String },

    /// The part references a base category; parts may only be assigned to
    /// child categories.
    #[error("could not assign part to base category {category:?}")]
    BaseCategory { category: String },

    /// A uniqueness index rejected the write.
    #[error("duplicate {field} {value:?} in {collection}")]
    Duplicate {
        collection: &'static str,
        field: &'static str,
        value: String,
    },

    /// The record was updated concurrently since it was loaded.
    #[error("record {id} was updated concurrently; reload and retry")]
    ConcurrentUpdate { id: EntityId },
}

/// The entity kind a failed lookup was addressing.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Entity {
    Category,
    Part,
}

impl std::fmt::Display for Entity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Category => write!(f, "category"),
            Self::Part => write!(f, "part"),
        }
    }
}

/// Errors surfaced by the inventory service.
#[derive(Debug, Error, PartialEq)]
pub enum EngineError {
    /// A consistency guard rejected the write.
    #[error(transparent)]
    Conflict(#[from] ConflictError),

    /// No record exists for the given identifier.
    #[error("{entity} {id} not found")]
    NotFound { entity: Entity, id: EntityId },

    /// The update payload would change nothing.
    #[error("update payload is empty")]
    EmptyUpdate,

    /// Malformed input that passed deserialization but violates a field
    /// constraint.
    #[error("invalid input: {0}")]
    Validation(String),
}

impl EngineError {
    pub fn not_found(entity: Entity, id: EntityId) -> Self {
        Self::NotFound { entity, id }
    }
}

/// Store failures carry conflict semantics: uniqueness violations and
/// revision races are both client-visible conflicts, not internal errors.
impl From<StoreError> for ConflictError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::DuplicateKey {
                collection,
                field,
                value,
            } => Self::Duplicate {
                collection,
                field,
                value,
            },
            StoreError::RevisionConflict { id, .. } => Self::ConcurrentUpdate { id },
        }
    }
}

impl From<StoreError> for EngineError {
    fn from(err: StoreError) -> Self {
        Self::Conflict(err.into())
    }
}

/// Result alias for engine operations.
pub type EngineResult<T> = Result<T, EngineError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_key_maps_to_conflict() {
        let err: EngineError = StoreError::DuplicateKey {
            collection: "categories",
            field: "name",
            value: "Tools".into(),
        }
        .into();
        assert_eq!(
            err,
            EngineError::Conflict(ConflictError::Duplicate {
                collection: "categories",
                field: "name",
                value: "Tools".into(),
            })
        );
    }

    #[test]
    fn revision_conflict_maps_to_concurrent_update() {
        let id = EntityId::new();
        let err: EngineError = StoreError::RevisionConflict {
            id,
            expected: 1,
            actual: 2,
        }
        .into();
        assert_eq!(
            err,
            EngineError::Conflict(ConflictError::ConcurrentUpdate { id })
        );
    }

    #[test]
    fn messages_name_the_invariant() {
        let err = ConflictError::BaseCategory {
            category: "Tools".into(),
        };
        assert!(err.to_string().contains("base category"));

        let err = ConflictError::HasChildren {
            name: "Tools".into(),
        };
        assert!(err.to_string().contains("children"));

        let err = ConflictError::AssignedToParts {
            name: "Tools".into(),
        };
        assert!(err.to_string().contains("assigned to parts"));
    }
}
