//! Relational-integrity validation engine for Stockroom.
//!
//! The document store underneath Stockroom enforces uniqueness indexes and
//! nothing else: the links that relate the two collections — a category's
//! `parent_name` and a part's `category`, both soft string references — are
//! invisible to it. This crate is where those links become invariants:
//!
//! 1. A child category's parent must exist and must not be the category
//!    itself (two-level hierarchy, no self-parenting).
//! 2. A category with child categories or assigned parts is immutable and
//!    undeletable until the dependents are reassigned or removed.
//! 3. A part may only ever be bound to an existing **child** category,
//!    never to a base category.
//!
//! Guards are explicit functions ([`CategoryValidator`], [`PartValidator`])
//! run by the [`InventoryService`] strictly before each write. The
//! multi-step check-then-act sequences are not atomic against concurrent
//! writers (a child category can appear between the children-check and a
//! delete committing); the update path narrows the window with an
//! optimistic revision guard, the delete path accepts it. See DESIGN.md.

pub mod category;
pub mod error;
pub mod part;
pub mod service;

pub use category::CategoryValidator;
pub use error::{ConflictError, EngineError, EngineResult, Entity};
pub use part::PartValidator;
pub use service::InventoryService;

#[cfg(test)]
mod tests {
    use stockroom_types::{
        CategoryChanges, EntityId, Location, NewCategory, NewPart, PartChanges,
    };

    use super::*;

    fn widget(serial: &str, category: &str) -> NewPart {
        NewPart {
            serial_number: serial.into(),
            name: "Widget".into(),
            description: "test-object".into(),
            category: category.into(),
            quantity: 10,
            price: 5.99,
            location: Location {
                room: Some("A".into()),
                shelf: Some("3".into()),
                ..Location::default()
            },
        }
    }

    // -----------------------------------------------------------------------
    // 1. Full lifecycle: base -> child -> part, then teardown in reverse
    // -----------------------------------------------------------------------
    #[test]
    fn lifecycle_teardown_must_run_leaf_first() {
        let svc = InventoryService::in_memory();
        let a = svc.create_category(NewCategory::base("A")).unwrap();
        let b = svc
            .create_category(NewCategory::child_of("B", "A"))
            .unwrap();
        let x = svc.create_part(widget("X1", "B")).unwrap();

        // Deleting the base fails: it has child B.
        let err = svc.delete_category(&a.id).unwrap_err();
        assert_eq!(
            err,
            EngineError::Conflict(ConflictError::HasChildren { name: "A".into() })
        );

        // Deleting the child fails: part X references it.
        let err = svc.delete_category(&b.id).unwrap_err();
        assert_eq!(
            err,
            EngineError::Conflict(ConflictError::AssignedToParts { name: "B".into() })
        );

        // Leaf-first teardown succeeds.
        svc.delete_part(&x.id).unwrap();
        svc.delete_category(&b.id).unwrap();
        svc.delete_category(&a.id).unwrap();
        assert!(svc.list_categories().unwrap().is_empty());
        assert!(svc.list_parts().unwrap().is_empty());
    }

    // -----------------------------------------------------------------------
    // 2. Parts can never land on a base category
    // -----------------------------------------------------------------------
    #[test]
    fn part_on_base_category_is_rejected_and_not_persisted() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("A")).unwrap();

        let err = svc.create_part(widget("X1", "A")).unwrap_err();
        assert_eq!(
            err,
            EngineError::Conflict(ConflictError::BaseCategory {
                category: "A".into()
            })
        );
        assert!(svc.list_parts().unwrap().is_empty());
    }

    #[test]
    fn part_on_missing_category_gets_the_existence_error() {
        let svc = InventoryService::in_memory();
        let err = svc.create_part(widget("X1", "Ghost")).unwrap_err();
        assert_eq!(
            err,
            EngineError::Conflict(ConflictError::UnknownPartCategory {
                category: "Ghost".into()
            })
        );
    }

    // -----------------------------------------------------------------------
    // 3. Category creation: parent must exist and differ
    // -----------------------------------------------------------------------
    #[test]
    fn child_creation_succeeds_iff_parent_exists_and_differs() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("Tools")).unwrap();

        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();
        assert!(svc
            .create_category(NewCategory::child_of("Power Tools", "Ghost"))
            .is_err());
        assert!(svc
            .create_category(NewCategory::child_of("Loop", "Loop"))
            .is_err());
    }

    // -----------------------------------------------------------------------
    // 4. Blocked writes leave the record unchanged
    // -----------------------------------------------------------------------
    #[test]
    fn blocked_update_leaves_record_unchanged() {
        let svc = InventoryService::in_memory();
        let parent = svc.create_category(NewCategory::base("Tools")).unwrap();
        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();

        let rename = CategoryChanges {
            name: Some("Renamed".into()),
            parent_name: None,
        };
        svc.update_category(&parent.id, rename).unwrap_err();

        let reloaded = svc.get_category(&parent.id).unwrap();
        assert_eq!(reloaded.name, "Tools");
        assert_eq!(reloaded.revision, parent.revision);
    }

    // -----------------------------------------------------------------------
    // 5. Uniqueness violations surface as conflicts
    // -----------------------------------------------------------------------
    #[test]
    fn second_category_with_same_name_conflicts() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("Tools")).unwrap();
        let err = svc.create_category(NewCategory::base("Tools")).unwrap_err();
        assert_eq!(
            err,
            EngineError::Conflict(ConflictError::Duplicate {
                collection: "categories",
                field: "name",
                value: "Tools".into(),
            })
        );
        assert_eq!(svc.list_categories().unwrap().len(), 1);
    }

    #[test]
    fn second_part_with_same_serial_conflicts() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("Tools")).unwrap();
        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();
        svc.create_part(widget("X1", "Hand Tools")).unwrap();
        let err = svc.create_part(widget("X1", "Hand Tools")).unwrap_err();
        assert!(matches!(
            err,
            EngineError::Conflict(ConflictError::Duplicate {
                field: "serial_number",
                ..
            })
        ));
    }

    // -----------------------------------------------------------------------
    // 6. Location updates merge over the stored snapshot
    // -----------------------------------------------------------------------
    #[test]
    fn location_update_merges_field_by_field() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("Tools")).unwrap();
        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();
        let part = svc.create_part(widget("X1", "Hand Tools")).unwrap();

        let changes: PartChanges =
            serde_json::from_str(r#"{"location": {"shelf": "5"}}"#).unwrap();
        let updated = svc.update_part(&part.id, changes).unwrap();
        assert_eq!(updated.location.room, Some("A".into()));
        assert_eq!(updated.location.shelf, Some("5".into()));
    }

    // -----------------------------------------------------------------------
    // 7. Empty updates are rejected before reaching the store
    // -----------------------------------------------------------------------
    #[test]
    fn empty_update_is_a_bad_request() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("Tools")).unwrap();
        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();
        let part = svc.create_part(widget("X1", "Hand Tools")).unwrap();

        let err = svc
            .update_part(&part.id, PartChanges::default())
            .unwrap_err();
        assert_eq!(err, EngineError::EmptyUpdate);

        // A lone empty location patch changes nothing either.
        let changes: PartChanges = serde_json::from_str(r#"{"location": {}}"#).unwrap();
        assert_eq!(
            svc.update_part(&part.id, changes).unwrap_err(),
            EngineError::EmptyUpdate
        );

        let cat = svc.list_categories().unwrap().remove(0);
        assert_eq!(
            svc.update_category(&cat.id, CategoryChanges::default())
                .unwrap_err(),
            EngineError::EmptyUpdate
        );
    }

    // -----------------------------------------------------------------------
    // 8. Part update validates the new binding before the write lands
    // -----------------------------------------------------------------------
    #[test]
    fn rebinding_to_base_category_is_rejected_pre_write() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("Tools")).unwrap();
        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();
        let part = svc.create_part(widget("X1", "Hand Tools")).unwrap();

        let changes = PartChanges {
            category: Some("Tools".into()),
            ..PartChanges::default()
        };
        svc.update_part(&part.id, changes).unwrap_err();

        // The invalid binding never hit the store.
        let reloaded = svc.get_part(&part.id).unwrap();
        assert_eq!(reloaded.category, "Hand Tools");
        assert_eq!(reloaded.revision, part.revision);
    }

    // -----------------------------------------------------------------------
    // 9. Stale revision surfaces as a concurrent-update conflict
    // -----------------------------------------------------------------------
    #[test]
    fn stale_writer_gets_concurrent_update_conflict() {
        use stockroom_store::{InMemoryCategoryStore, InMemoryPartStore, PartStore};
        use std::sync::Arc;

        let parts = Arc::new(InMemoryPartStore::new());
        let svc = InventoryService::new(
            Arc::new(InMemoryCategoryStore::new()),
            Arc::clone(&parts) as Arc<dyn PartStore>,
        );
        svc.create_category(NewCategory::base("Tools")).unwrap();
        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();
        let part = svc.create_part(widget("X1", "Hand Tools")).unwrap();

        // A concurrent writer bumps the revision behind the service's back.
        parts
            .update(
                &part.id,
                &stockroom_store::PartUpdate {
                    quantity: Some(99),
                    ..stockroom_store::PartUpdate::default()
                },
                None,
            )
            .unwrap();

        // The service loaded revision 1 and logically "lost the race": a
        // second update through the service reloads, so simulate the stale
        // path at the store level the way the service issues it.
        let err = parts
            .update(
                &part.id,
                &stockroom_store::PartUpdate {
                    quantity: Some(1),
                    ..stockroom_store::PartUpdate::default()
                },
                Some(part.revision),
            )
            .unwrap_err();
        let engine_err: EngineError = err.into();
        assert_eq!(
            engine_err,
            EngineError::Conflict(ConflictError::ConcurrentUpdate { id: part.id })
        );
    }

    // -----------------------------------------------------------------------
    // 10. Not-found paths
    // -----------------------------------------------------------------------
    #[test]
    fn missing_ids_are_not_found() {
        let svc = InventoryService::in_memory();
        let id = EntityId::new();
        assert!(matches!(
            svc.get_category(&id).unwrap_err(),
            EngineError::NotFound {
                entity: Entity::Category,
                ..
            }
        ));
        assert!(matches!(
            svc.get_part(&id).unwrap_err(),
            EngineError::NotFound {
                entity: Entity::Part,
                ..
            }
        ));
        assert!(svc.delete_part(&id).is_err());
        assert!(svc.delete_category(&id).is_err());
    }

    // -----------------------------------------------------------------------
    // 11. Price validation
    // -----------------------------------------------------------------------
    #[test]
    fn negative_price_is_invalid_input() {
        let svc = InventoryService::in_memory();
        svc.create_category(NewCategory::base("Tools")).unwrap();
        svc.create_category(NewCategory::child_of("Hand Tools", "Tools"))
            .unwrap();

        let mut new = widget("X1", "Hand Tools");
        new.price = -1.0;
        assert!(matches!(
            svc.create_part(new).unwrap_err(),
            EngineError::Validation(_)
        ));
    }
}
