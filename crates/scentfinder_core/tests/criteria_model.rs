use scentfinder_core::model::criteria::DEFAULT_CRITERIA_LIMIT;
use scentfinder_core::{build_criteria, Criteria, Gender};
use serde_json::json;

#[test]
fn all_sentinels_are_omitted_from_payload() {
    let criteria = build_criteria(["Rose", "Oud"], Some(Gender::All), Some("All"), Some(12));

    assert_eq!(criteria.gender, None);
    assert_eq!(criteria.family, None);
    assert_eq!(
        serde_json::to_value(&criteria).unwrap(),
        json!({ "notes": ["Rose", "Oud"], "limit": 12 })
    );
}

#[test]
fn concrete_filters_are_serialized() {
    let criteria = build_criteria(["Vanilla"], Some(Gender::Women), Some("Oriental"), None);

    assert_eq!(
        serde_json::to_value(&criteria).unwrap(),
        json!({
            "notes": ["Vanilla"],
            "gender": "Women",
            "family": "Oriental",
            "limit": 50
        })
    );
}

#[test]
fn missing_or_invalid_limit_uses_default() {
    let no_limit = build_criteria(Vec::<String>::new(), None, None, None);
    let zero_limit = build_criteria(Vec::<String>::new(), None, None, Some(0));

    assert_eq!(no_limit.limit, DEFAULT_CRITERIA_LIMIT);
    assert_eq!(zero_limit.limit, DEFAULT_CRITERIA_LIMIT);
    assert_eq!(no_limit, Criteria::default());
    assert!(no_limit.is_empty_query());
    assert!(!no_limit.has_preferences());
}

#[test]
fn duplicate_notes_keep_first_occurrence() {
    let criteria = build_criteria(["Rose", "Musk", "Rose", "Amber", "Musk"], None, None, None);

    assert_eq!(criteria.notes, vec!["Rose", "Musk", "Amber"]);
}

#[test]
fn payload_without_filters_deserializes_as_any() {
    let criteria: Criteria =
        serde_json::from_value(json!({ "notes": ["Cedar"], "limit": 10 })).unwrap();

    assert_eq!(criteria.gender, None);
    assert_eq!(criteria.family, None);
    assert_eq!(criteria.limit, 10);
}

#[test]
fn decoded_payload_is_normalized() {
    let criteria: Criteria = serde_json::from_value(json!({
        "notes": ["Oud", "Oud", " ", "Amber"],
        "gender": "All",
        "family": "All",
        "limit": 0
    }))
    .unwrap();

    assert_eq!(criteria.notes, vec!["Oud", "Amber"]);
    assert_eq!(criteria.gender, None);
    assert_eq!(criteria.family, None);
    assert_eq!(criteria.limit, DEFAULT_CRITERIA_LIMIT);

    let negative: Criteria = serde_json::from_value(json!({ "notes": [], "limit": -4 })).unwrap();
    assert_eq!(negative.limit, DEFAULT_CRITERIA_LIMIT);
    assert!(negative.is_empty_query());
}
