use stockroom_types::{
    Category, CategoryChanges, EntityId, Location, NewCategory, NewPart, Part,
};

use crate::error::StoreResult;

/// Storage backend for the category collection.
///
/// Implementations must be thread-safe (`Send + Sync`) and provide atomic
/// single-record operations. `name` is a uniqueness index. Lookups return
/// `Ok(None)` for missing records; only index violations and concurrency
/// conflicts are errors.
pub trait CategoryStore: Send + Sync {
    /// Read a category by id.
    fn find(&self, id: &EntityId) -> StoreResult<Option<Category>>;

    /// Read a category by its unique name.
    fn find_by_name(&self, name: &str) -> StoreResult<Option<Category>>;

    /// Find any category whose `parent_name` equals `parent_name`.
    ///
    /// Existence probe for the children guard; which child comes back is
    /// unspecified.
    fn find_child_of(&self, parent_name: &str) -> StoreResult<Option<Category>>;

    /// Insert a new category, assigning id and revision 1.
    ///
    /// Fails with [`crate::StoreError::DuplicateKey`] if the name is taken.
    fn insert(&self, new: NewCategory) -> StoreResult<Category>;

    /// Apply a partial update. `None` fields are left unchanged.
    ///
    /// Returns `Ok(None)` if no record has this id. When
    /// `expected_revision` is supplied and does not match the stored
    /// revision, fails with [`crate::StoreError::RevisionConflict`]. On
    /// success the revision is bumped and the updated record returned.
    fn update(
        &self,
        id: &EntityId,
        changes: &CategoryChanges,
        expected_revision: Option<u64>,
    ) -> StoreResult<Option<Category>>;

    /// Delete by id. Returns `true` if the record existed.
    fn delete(&self, id: &EntityId) -> StoreResult<bool>;

    /// All categories, ordered by id (insertion order under UUID v7).
    fn list(&self) -> StoreResult<Vec<Category>>;
}

/// Field-wise update for a part record, as the store applies it.
///
/// Unlike [`stockroom_types::PartChanges`] — the wire payload, whose
/// `location` is a patch — `location` here is the full, already-merged
/// address: callers resolve the merge against the pre-update snapshot
/// before handing the write to the store.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PartUpdate {
    pub serial_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub location: Option<Location>,
}

/// Storage backend for the part collection.
///
/// Same contract as [`CategoryStore`]; `serial_number` is the uniqueness
/// index.
pub trait PartStore: Send + Sync {
    /// Read a part by id.
    fn find(&self, id: &EntityId) -> StoreResult<Option<Part>>;

    /// Read a part by its unique serial number.
    fn find_by_serial(&self, serial_number: &str) -> StoreResult<Option<Part>>;

    /// Find any part assigned to the named category.
    ///
    /// Existence probe for the parts guard; which part comes back is
    /// unspecified.
    fn find_by_category(&self, category: &str) -> StoreResult<Option<Part>>;

    /// Insert a new part, assigning id and revision 1.
    ///
    /// Fails with [`crate::StoreError::DuplicateKey`] if the serial number
    /// is taken.
    fn insert(&self, new: NewPart) -> StoreResult<Part>;

    /// Apply a partial update. `None` fields are left unchanged.
    ///
    /// Returns `Ok(None)` if no record has this id; revision semantics as
    /// for [`CategoryStore::update`].
    fn update(
        &self,
        id: &EntityId,
        update: &PartUpdate,
        expected_revision: Option<u64>,
    ) -> StoreResult<Option<Part>>;

    /// Delete by id. Returns `true` if the record existed.
    fn delete(&self, id: &EntityId) -> StoreResult<bool>;

    /// All parts, ordered by id (insertion order under UUID v7).
    fn list(&self) -> StoreResult<Vec<Part>>;
}
