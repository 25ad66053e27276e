//! Structured storage addresses and their partial-update semantics.
//!
//! A [`Location`] pins a part to a physical spot in the warehouse: room,
//! bookcase, shelf, cubicle, column, row. Every slot is optional, and slots
//! are labelled with whatever scheme the warehouse uses — `"A101"` in one
//! room, plain `4` in another — so a slot accepts either a string or an
//! integer on the wire.
//!
//! Updates to a location are **merges**, not replacements: a
//! [`LocationPatch`] only touches the slots it explicitly carries. A slot
//! absent from the patch keeps its stored value; a slot present with an
//! explicit `null` is cleared.

use serde::{Deserialize, Deserializer, Serialize};

/// One slot of a storage address. Accepts either form on the wire.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum LocationSlot {
    Text(String),
    Number(i64),
}

impl From<&str> for LocationSlot {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

impl From<i64> for LocationSlot {
    fn from(n: i64) -> Self {
        Self::Number(n)
    }
}

/// A free-form structured storage address. All slots independently optional.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Location {
    pub room: Option<LocationSlot>,
    pub bookcase: Option<LocationSlot>,
    pub shelf: Option<LocationSlot>,
    pub cubicle: Option<LocationSlot>,
    pub column: Option<LocationSlot>,
    pub row: Option<LocationSlot>,
}

impl Location {
    /// Returns `true` if no slot is set.
    pub fn is_empty(&self) -> bool {
        self.room.is_none()
            && self.bookcase.is_none()
            && self.shelf.is_none()
            && self.cubicle.is_none()
            && self.column.is_none()
            && self.row.is_none()
    }
}

/// Partial update for a [`Location`].
///
/// Each field is doubly optional to distinguish the two wire shapes that a
/// plain `Option` cannot: an **omitted** slot (`None` — keep the stored
/// value) and an **explicit null** (`Some(None)` — clear the slot).
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LocationPatch {
    #[serde(deserialize_with = "double_option")]
    pub room: Option<Option<LocationSlot>>,
    #[serde(deserialize_with = "double_option")]
    pub bookcase: Option<Option<LocationSlot>>,
    #[serde(deserialize_with = "double_option")]
    pub shelf: Option<Option<LocationSlot>>,
    #[serde(deserialize_with = "double_option")]
    pub cubicle: Option<Option<LocationSlot>>,
    #[serde(deserialize_with = "double_option")]
    pub column: Option<Option<LocationSlot>>,
    #[serde(deserialize_with = "double_option")]
    pub row: Option<Option<LocationSlot>>,
}

/// Wraps a present field (null or not) in the outer `Some`; missing fields
/// fall back to the `#[serde(default)]` outer `None`.
fn double_option<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Option::<T>::deserialize(deserializer).map(Some)
}

impl LocationPatch {
    /// Returns `true` if the patch touches no slot at all.
    pub fn is_empty(&self) -> bool {
        self.room.is_none()
            && self.bookcase.is_none()
            && self.shelf.is_none()
            && self.cubicle.is_none()
            && self.column.is_none()
            && self.row.is_none()
    }

    /// Merge this patch over `base`, slot by slot.
    ///
    /// The merge base must be the pre-update snapshot of the stored
    /// location; the result is what gets persisted.
    pub fn apply(&self, base: &Location) -> Location {
        fn slot(
            patch: &Option<Option<LocationSlot>>,
            stored: &Option<LocationSlot>,
        ) -> Option<LocationSlot> {
            match patch {
                None => stored.clone(),
                Some(overwrite) => overwrite.clone(),
            }
        }

        Location {
            room: slot(&self.room, &base.room),
            bookcase: slot(&self.bookcase, &base.bookcase),
            shelf: slot(&self.shelf, &base.shelf),
            cubicle: slot(&self.cubicle, &base.cubicle),
            column: slot(&self.column, &base.column),
            row: slot(&self.row, &base.row),
        }
    }
}
