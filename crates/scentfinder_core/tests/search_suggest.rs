use scentfinder_core::{
    filter_by_name_or_brand, group_notes_by_type, DiscoveryConfig, Fragrance, Gender, Note,
    NoteType, ResolveOutcome, ServiceError, SuggestionBox, SuggestionPoll, SuggestionRequest,
};
use std::time::{Duration, Instant};

fn catalog_items(count: i64) -> Vec<Fragrance> {
    (1..=count)
        .map(|id| Fragrance::new(id, format!("Rose {id}"), "Maison", Gender::Women, "Floral"))
        .collect()
}

fn expect_request(poll: SuggestionPoll) -> SuggestionRequest {
    match poll {
        SuggestionPoll::Request(request) => request,
        other => panic!("expected request, got {other:?}"),
    }
}

#[test]
fn input_fires_once_after_quiet_period() {
    let mut suggestions = SuggestionBox::new(&DiscoveryConfig::default());
    let start = Instant::now();

    suggestions.input("ro", start);
    suggestions.input("ros", start + Duration::from_millis(100));
    assert_eq!(
        suggestions.poll(start + Duration::from_millis(350)),
        SuggestionPoll::Idle
    );

    let request = expect_request(suggestions.poll(start + Duration::from_millis(400)));
    assert_eq!(request.filter.search.as_deref(), Some("ros"));
    assert_eq!(
        suggestions.poll(start + Duration::from_millis(900)),
        SuggestionPoll::Idle
    );
}

#[test]
fn short_query_clears_without_request() {
    let mut suggestions = SuggestionBox::new(&DiscoveryConfig::default());
    let start = Instant::now();

    suggestions.input("rose", start);
    let request = expect_request(suggestions.poll(start + Duration::from_millis(300)));
    suggestions.resolve(request.ticket, Ok(catalog_items(2)));
    assert_eq!(suggestions.suggestions().len(), 2);

    suggestions.input(" r ", start + Duration::from_millis(400));
    assert_eq!(
        suggestions.poll(start + Duration::from_millis(700)),
        SuggestionPoll::Cleared
    );
    assert!(suggestions.suggestions().is_empty());
}

#[test]
fn suggestions_are_capped_at_limit() {
    let mut suggestions = SuggestionBox::new(&DiscoveryConfig::default());
    let start = Instant::now();

    suggestions.input("rose", start);
    let request = expect_request(suggestions.poll(start + Duration::from_millis(300)));

    assert_eq!(
        suggestions.resolve(request.ticket, Ok(catalog_items(9))),
        ResolveOutcome::Applied(5)
    );
    assert_eq!(
        suggestions
            .suggestions()
            .iter()
            .map(|item| item.id)
            .collect::<Vec<_>>(),
        vec![1, 2, 3, 4, 5]
    );
}

#[test]
fn older_response_after_newer_request_is_dropped() {
    let mut suggestions = SuggestionBox::new(&DiscoveryConfig::default());
    let start = Instant::now();

    suggestions.input("ro", start);
    let first = expect_request(suggestions.poll(start + Duration::from_millis(300)));
    suggestions.input("rose", start + Duration::from_millis(310));
    let second = expect_request(suggestions.poll(start + Duration::from_millis(610)));

    assert_eq!(
        suggestions.resolve(second.ticket, Ok(catalog_items(1))),
        ResolveOutcome::Applied(1)
    );
    assert_eq!(
        suggestions.resolve(first.ticket, Ok(catalog_items(4))),
        ResolveOutcome::Superseded
    );
    assert_eq!(suggestions.suggestions().len(), 1);
}

#[test]
fn failure_and_reset_clear_suggestions() {
    let mut suggestions = SuggestionBox::new(&DiscoveryConfig::default());
    let start = Instant::now();

    suggestions.input("oud", start);
    let request = expect_request(suggestions.poll(start + Duration::from_millis(300)));
    assert_eq!(
        suggestions.resolve(
            request.ticket,
            Err(ServiceError::Transient("timeout".to_string()))
        ),
        ResolveOutcome::Failed
    );
    assert!(suggestions.suggestions().is_empty());

    suggestions.input("oud", start + Duration::from_millis(400));
    suggestions.reset();
    assert_eq!(
        suggestions.poll(start + Duration::from_secs(5)),
        SuggestionPoll::Idle
    );
}

#[test]
fn local_filter_matches_name_or_brand_case_insensitively() {
    let items = vec![
        Fragrance::new(1, "Black Orchid", "Tom Ford", Gender::Unisex, "Oriental"),
        Fragrance::new(2, "Bleu", "Chanel", Gender::Men, "Woody"),
        Fragrance::new(3, "Coco Mademoiselle", "Chanel", Gender::Women, "Chypre"),
    ];

    let by_brand = filter_by_name_or_brand(&items, "  CHANEL ");
    assert_eq!(by_brand.iter().map(|item| item.id).collect::<Vec<_>>(), vec![2, 3]);

    let by_name = filter_by_name_or_brand(&items, "orchid");
    assert_eq!(by_name.iter().map(|item| item.id).collect::<Vec<_>>(), vec![1]);

    assert_eq!(filter_by_name_or_brand(&items, "").len(), 3);
}

#[test]
fn notes_are_grouped_by_type_with_search() {
    let notes = vec![
        Note::new("Bergamot", NoteType::Top),
        Note::new("Rose", NoteType::Middle),
        Note::new("Rosewood", NoteType::Base),
        Note::new("Amber", NoteType::Base),
    ];

    let all = group_notes_by_type(&notes, "");
    assert_eq!(all.len(), 4);
    assert_eq!(all.get(NoteType::Base).len(), 2);

    let roses = group_notes_by_type(&notes, "rose");
    assert!(roses.top.is_empty());
    assert_eq!(roses.middle, vec![Note::new("Rose", NoteType::Middle)]);
    assert_eq!(roses.base, vec![Note::new("Rosewood", NoteType::Base)]);
}

#[test]
fn keystroke_supersedes_request_in_flight() {
    let mut suggestions = SuggestionBox::new(&DiscoveryConfig::default());
    let start = Instant::now();

    suggestions.input("ro", start);
    let in_flight = expect_request(suggestions.poll(start + Duration::from_millis(300)));
    suggestions.input("ros", start + Duration::from_millis(320));

    assert_eq!(
        suggestions.resolve(in_flight.ticket, Ok(catalog_items(3))),
        ResolveOutcome::Superseded
    );
    assert!(suggestions.suggestions().is_empty());

    let latest = expect_request(suggestions.poll(start + Duration::from_millis(620)));
    assert_eq!(latest.filter.search.as_deref(), Some("ros"));
    assert_eq!(
        suggestions.resolve(latest.ticket, Ok(catalog_items(3))),
        ResolveOutcome::Applied(3)
    );
}
