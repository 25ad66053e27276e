//! Part records and their write payloads.

use serde::{Deserialize, Serialize};

use crate::id::EntityId;
use crate::location::{Location, LocationPatch};

/// A persisted part record.
///
/// `category` is a soft reference to a [`crate::Category`] by name; the
/// referenced category must exist and must be a child category. The engine
/// enforces both at write time.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Part {
    /// Store-assigned identifier.
    pub id: EntityId,
    /// Store-maintained revision, bumped on every update.
    pub revision: u64,
    /// Globally unique serial number.
    pub serial_number: String,
    pub name: String,
    pub description: String,
    /// Name of the child category this part belongs to.
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    pub location: Location,
}

/// Payload for creating a part. The store assigns id and revision.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NewPart {
    pub serial_number: String,
    pub name: String,
    pub description: String,
    pub category: String,
    pub quantity: u32,
    pub price: f64,
    /// Defaults to an empty location when omitted.
    #[serde(default)]
    pub location: Location,
}

/// Partial update for a part. `None` fields are left unchanged.
///
/// `location` carries a patch, not a replacement: supplied slots are merged
/// over the stored location, omitted slots survive.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct PartChanges {
    pub serial_number: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub quantity: Option<u32>,
    pub price: Option<f64>,
    pub location: Option<LocationPatch>,
}

impl PartChanges {
    /// Returns `true` if no field would change. A `location` key carrying
    /// an empty patch does not count as a change on its own.
    pub fn is_empty(&self) -> bool {
        self.serial_number.is_none()
            && self.name.is_none()
            && self.description.is_none()
            && self.category.is_none()
            && self.quantity.is_none()
            && self.price.is_none()
            && self.location.as_ref().map_or(true, |patch| patch.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn new_part_json() -> &'static str {
        r#"{
            "serial_number": "ABC123",
            "name": "Widget",
            "description": "test-object",
            "category": "Electronics",
            "quantity": 10,
            "price": 5.99,
            "location": {"room": "A101", "shelf": "3", "row": 1}
        }"#
    }

    #[test]
    fn new_part_deserializes() {
        let new: NewPart = serde_json::from_str(new_part_json()).unwrap();
        assert_eq!(new.serial_number, "ABC123");
        assert_eq!(new.quantity, 10);
        assert_eq!(new.location.room, Some("A101".into()));
        assert_eq!(new.location.row, Some(1.into()));
    }

    #[test]
    fn new_part_location_defaults_to_empty() {
        let new: NewPart = serde_json::from_str(
            r#"{
                "serial_number": "X",
                "name": "n",
                "description": "",
                "category": "c",
                "quantity": 0,
                "price": 0.0
            }"#,
        )
        .unwrap();
        assert!(new.location.is_empty());
    }

    #[test]
    fn negative_quantity_is_rejected_at_the_wire() {
        let result: Result<NewPart, _> = serde_json::from_str(
            r#"{
                "serial_number": "X",
                "name": "n",
                "description": "",
                "category": "c",
                "quantity": -1,
                "price": 1.0
            }"#,
        );
        assert!(result.is_err());
    }

    #[test]
    fn changes_emptiness() {
        assert!(PartChanges::default().is_empty());

        let with_empty_location: PartChanges =
            serde_json::from_str(r#"{"location": {}}"#).unwrap();
        assert!(with_empty_location.is_empty());

        let with_location: PartChanges =
            serde_json::from_str(r#"{"location": {"shelf": "5"}}"#).unwrap();
        assert!(!with_location.is_empty());

        let with_price: PartChanges = serde_json::from_str(r#"{"price": 2.5}"#).unwrap();
        assert!(!with_price.is_empty());
    }
}
