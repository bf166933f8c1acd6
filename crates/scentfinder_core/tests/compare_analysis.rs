use scentfinder_core::{
    compare, CompareSlots, DiscoveryConfig, Fragrance, Gender, NoteRef, NoteType, SlotError,
};

fn fragrance(id: i64, notes: &[(&str, NoteType)]) -> Fragrance {
    Fragrance::new(id, format!("Fragrance {id}"), "House", Gender::Unisex, "Woody").with_notes(
        notes
            .iter()
            .map(|(name, kind)| NoteRef::new(*name, *kind)),
    )
}

fn shared_flags(result: &scentfinder_core::ComparisonResult, index: usize) -> Vec<(String, bool)> {
    result.per_fragrance[index]
        .notes
        .iter()
        .map(|tagged| (tagged.note.name.clone(), tagged.is_shared))
        .collect()
}

#[test]
fn shared_notes_are_tagged_per_fragrance() {
    let first = fragrance(1, &[("Bergamot", NoteType::Top), ("Rose", NoteType::Middle)]);
    let second = fragrance(2, &[("Rose", NoteType::Top), ("Oud", NoteType::Base)]);

    let result = compare(&[first, second]).unwrap();

    assert_eq!(result.shared, vec!["Rose"]);
    assert_eq!(
        shared_flags(&result, 0),
        vec![("Bergamot".to_string(), false), ("Rose".to_string(), true)]
    );
    assert_eq!(
        shared_flags(&result, 1),
        vec![("Rose".to_string(), true), ("Oud".to_string(), false)]
    );
    assert_eq!(
        result.per_fragrance[0]
            .unique_notes()
            .map(|note| note.name.as_str())
            .collect::<Vec<_>>(),
        vec!["Bergamot"]
    );
}

#[test]
fn shared_set_is_order_independent() {
    let a = fragrance(
        1,
        &[
            ("Amber", NoteType::Base),
            ("Rose", NoteType::Middle),
            ("Musk", NoteType::Base),
        ],
    );
    let b = fragrance(
        2,
        &[
            ("Musk", NoteType::Base),
            ("Amber", NoteType::Base),
            ("Iris", NoteType::Middle),
        ],
    );
    let c = fragrance(3, &[("Amber", NoteType::Top), ("Musk", NoteType::Top)]);

    let forward = compare(&[&a, &b, &c]).unwrap();
    let backward = compare(&[&c, &b, &a]).unwrap();

    let mut forward_shared = forward.shared.clone();
    let mut backward_shared = backward.shared.clone();
    forward_shared.sort();
    backward_shared.sort();
    assert_eq!(forward_shared, vec!["Amber", "Musk"]);
    assert_eq!(forward_shared, backward_shared);
    assert_eq!(backward.per_fragrance[0].fragrance_id, 3);
}

#[test]
fn fewer_than_two_fragrances_yield_none() {
    let only = fragrance(1, &[("Rose", NoteType::Middle)]);

    assert!(compare(&[only]).is_none());
    assert!(compare::<Fragrance>(&[]).is_none());
}

#[test]
fn fragrance_without_notes_empties_shared() {
    let bare = fragrance(1, &[]);
    let rich = fragrance(2, &[("Rose", NoteType::Middle)]);

    let result = compare(&[&bare, &rich]).unwrap();
    assert!(result.shared.is_empty());
    assert!(result.per_fragrance[0].notes.is_empty());
    assert_eq!(shared_flags(&result, 1), vec![("Rose".to_string(), false)]);
}

#[test]
fn same_name_with_different_types_counts_as_shared() {
    let a = fragrance(1, &[("Vanilla", NoteType::Top), ("Vanilla", NoteType::Base)]);
    let b = fragrance(2, &[("Vanilla", NoteType::Middle)]);

    let result = compare(&[a, b]).unwrap();
    assert_eq!(result.shared, vec!["Vanilla"]);
    assert!(result.per_fragrance[0].notes.iter().all(|tagged| tagged.is_shared));
}

#[test]
fn compare_slots_reject_duplicates_and_out_of_range() {
    let mut slots = CompareSlots::default();
    assert_eq!(slots.slot_count(), 3);

    slots.fill(0, fragrance(1, &[("Rose", NoteType::Middle)])).unwrap();
    assert_eq!(
        slots.fill(2, fragrance(1, &[])).unwrap_err(),
        SlotError::AlreadySelected {
            fragrance_id: 1,
            slot: 0,
        }
    );
    assert_eq!(
        slots.fill(3, fragrance(9, &[])).unwrap_err(),
        SlotError::OutOfRange {
            slot: 3,
            available: 3,
        }
    );
    assert!(slots.analyze().is_none());
    assert_eq!(slots.first_empty(), Some(1));
}

#[test]
fn compare_slots_analyze_filled_slots_in_order() {
    let mut slots = CompareSlots::default();
    slots
        .fill(2, fragrance(7, &[("Oud", NoteType::Base), ("Rose", NoteType::Middle)]))
        .unwrap();
    slots
        .fill(0, fragrance(3, &[("Rose", NoteType::Top)]))
        .unwrap();

    let result = slots.analyze().unwrap();
    assert_eq!(result.shared, vec!["Rose"]);
    assert_eq!(
        result
            .per_fragrance
            .iter()
            .map(|entry| entry.fragrance_id)
            .collect::<Vec<_>>(),
        vec![3, 7]
    );

    let removed = slots.clear(0).unwrap();
    assert_eq!(removed.map(|fragrance| fragrance.id), Some(3));
    assert!(!slots.is_selected(3));
    assert!(slots.analyze().is_none());
}

#[test]
fn compare_slots_follow_configured_count() {
    let two_slots = DiscoveryConfig {
        compare_slots: 2,
        ..DiscoveryConfig::default()
    };
    let mut slots = CompareSlots::with_config(&two_slots);
    assert_eq!(slots.slot_count(), 2);
    assert_eq!(
        slots.fill(2, fragrance(1, &[])).unwrap_err(),
        SlotError::OutOfRange {
            slot: 2,
            available: 2,
        }
    );

    let zero_slots = DiscoveryConfig {
        compare_slots: 0,
        ..DiscoveryConfig::default()
    };
    assert_eq!(CompareSlots::with_config(&zero_slots).slot_count(), 3);
}
