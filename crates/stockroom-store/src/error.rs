use stockroom_types::EntityId;

/// Errors from entity store operations.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum StoreError {
    /// A uniqueness index rejected the write.
    #[error("duplicate key: {collection}.{field} = {value:?}")]
    DuplicateKey {
        collection: &'static str,
        field: &'static str,
        value: String,
    },

    /// The record was updated concurrently since it was loaded.
    #[error("revision conflict on {id}: expected {expected}, found {actual}")]
    RevisionConflict {
        id: EntityId,
        expected: u64,
        actual: u64,
    },
}

/// Result alias for store operations.
pub type StoreResult<T> = Result<T, StoreError>;
