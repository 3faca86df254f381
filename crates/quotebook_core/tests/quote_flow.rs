use quotebook_core::store::quote_store::{LAST_CATEGORY_KEY, LAST_QUOTE_INDEX_KEY, QUOTES_KEY};
use quotebook_core::{
    default_quotes, AddQuoteOutcome, CategoryFilter, KeyValueStore, MemoryKeyValueStore,
    MemoryView, NoticeKind, PickOutcome, Quote, QuoteApp, QuoteValidationError, UiEvent,
};
use rand::rngs::StdRng;
use rand::SeedableRng;

type TestApp = QuoteApp<MemoryKeyValueStore, MemoryKeyValueStore, MemoryView, StdRng>;

fn start_with(durable: MemoryKeyValueStore, session: MemoryKeyValueStore) -> TestApp {
    QuoteApp::start(durable, session, MemoryView::new(), StdRng::seed_from_u64(42)).unwrap()
}

fn start_fresh() -> TestApp {
    start_with(MemoryKeyValueStore::new(), MemoryKeyValueStore::new())
}

fn durable_with_quotes(quotes: &[Quote]) -> MemoryKeyValueStore {
    let mut durable = MemoryKeyValueStore::new();
    durable
        .set(QUOTES_KEY, &serde_json::to_string(quotes).unwrap())
        .unwrap();
    durable
}

#[test]
fn startup_seeds_defaults_and_renders_initial_screen() {
    let app = start_fresh();

    assert_eq!(app.service().quotes(), default_quotes().as_slice());
    assert!(app.view().form_mounted());
    assert_eq!(
        app.view().option_values(),
        vec!["all", "Motivation", "Life", "Inspiration"]
    );
    assert_eq!(app.view().selected(), "all");
    assert_eq!(app.view().display().len(), 2);
    assert!(app.view().display()[1].starts_with("Category: "));
    assert_eq!(
        app.service().store().durable().peek(LAST_CATEGORY_KEY),
        Some("all")
    );
}

#[test]
fn add_quote_appends_persists_and_displays_new_quote() {
    let mut app = start_fresh();
    app.view_mut().fill_add_form("Test", "QA");
    app.dispatch(UiEvent::AddQuote).unwrap();

    assert_eq!(app.service().quotes().len(), 4);
    assert!(app.view().option_values().contains(&"QA".to_string()));
    assert_eq!(app.view().display(), ["\"Test\"", "Category: QA"]);
    assert_eq!(app.view().form().text, "");
    assert_eq!(app.view().form().category, "");

    let stored = app
        .service()
        .store()
        .durable()
        .peek(QUOTES_KEY)
        .expect("quotes should be persisted");
    let stored: Vec<Quote> = serde_json::from_str(stored).unwrap();
    assert_eq!(stored.len(), 4);
    assert_eq!(stored[3], Quote::new("Test", "QA"));
}

#[test]
fn add_quote_trims_input() {
    let mut app = start_fresh();
    app.view_mut().fill_add_form("  Padded  ", " QA ");
    app.dispatch(UiEvent::AddQuote).unwrap();

    assert_eq!(
        app.service().quotes().last(),
        Some(&Quote::new("Padded", "QA"))
    );
}

#[test]
fn add_quote_reports_which_field_failed() {
    let mut app = start_fresh();
    let mut detached = MemoryView::new();
    detached.fill_add_form("", "QA");

    let outcome = app.service_mut().add_quote(&mut detached).unwrap();
    assert_eq!(
        outcome,
        AddQuoteOutcome::Rejected(QuoteValidationError::EmptyText)
    );
    assert_eq!(detached.notices().len(), 1);
}

#[test]
fn add_quote_with_blank_field_is_rejected_without_mutation() {
    let mut app = start_fresh();
    app.view_mut().fill_add_form("Only text", "   ");
    app.dispatch(UiEvent::AddQuote).unwrap();

    assert_eq!(app.service().quotes().len(), 3);
    let notice = app.view().last_notice().expect("validation alert");
    assert_eq!(notice.kind, NoticeKind::Error);
    assert_eq!(notice.message, "Please enter both quote text and category.");
    assert_eq!(app.view().form().text, "Only text");
}

#[test]
fn random_quote_respects_category_filter() {
    let mut app = start_fresh();
    app.dispatch(UiEvent::FilterChanged("Life".to_string()))
        .unwrap();

    for _ in 0..20 {
        app.dispatch(UiEvent::NewQuote).unwrap();
        assert_eq!(app.view().display()[1], "Category: Life");
    }
    assert_eq!(
        app.service().store().durable().peek(LAST_CATEGORY_KEY),
        Some("Life")
    );
    assert_eq!(
        app.service().store().session().peek(LAST_QUOTE_INDEX_KEY),
        Some("0")
    );
}

#[test]
fn random_quote_with_all_draws_from_full_collection() {
    let mut app = start_fresh();
    let texts: Vec<String> = app
        .service()
        .quotes()
        .iter()
        .map(Quote::display_text)
        .collect();

    let mut seen = std::collections::HashSet::new();
    for _ in 0..60 {
        app.dispatch(UiEvent::NewQuote).unwrap();
        let shown = app.view().display()[0].clone();
        assert!(texts.contains(&shown));
        seen.insert(shown);
    }
    assert_eq!(seen.len(), 3);
}

#[test]
fn empty_filter_renders_message_and_skips_session_write() {
    let mut app = start_fresh();
    let index_before = app
        .service()
        .store()
        .session()
        .peek(LAST_QUOTE_INDEX_KEY)
        .map(str::to_owned);
    assert!(index_before.is_some());

    app.dispatch(UiEvent::FilterChanged("Nothing Here".to_string()))
        .unwrap();
    app.dispatch(UiEvent::NewQuote).unwrap();

    assert_eq!(
        app.view().display(),
        ["No quotes available for this category."]
    );
    assert_eq!(
        app.service()
            .store()
            .session()
            .peek(LAST_QUOTE_INDEX_KEY)
            .map(str::to_owned),
        index_before
    );
}

#[test]
fn empty_filter_pick_reports_empty_outcome() {
    let mut app = start_fresh();
    let outcome = app
        .service_mut()
        .filter_quotes(&mut MemoryView::new(), "Nothing Here")
        .unwrap();
    assert_eq!(outcome, PickOutcome::Empty);
}

#[test]
fn saved_category_is_restored_on_startup() {
    let mut durable = MemoryKeyValueStore::new();
    durable.set(LAST_CATEGORY_KEY, "Life").unwrap();
    let app = start_with(durable, MemoryKeyValueStore::new());

    assert_eq!(
        app.service().selected(),
        &CategoryFilter::Category("Life".to_string())
    );
    assert_eq!(app.view().selected(), "Life");
    assert_eq!(app.view().display()[1], "Category: Life");
}

#[test]
fn saved_category_missing_from_collection_resets_to_all() {
    let mut durable = MemoryKeyValueStore::new();
    durable.set(LAST_CATEGORY_KEY, "Deleted").unwrap();
    let app = start_with(durable, MemoryKeyValueStore::new());

    assert_eq!(app.service().selected(), &CategoryFilter::All);
    assert_eq!(
        app.service().store().durable().peek(LAST_CATEGORY_KEY),
        Some("all")
    );
}

#[test]
fn last_shown_quote_is_restored_only_under_same_filter() {
    let quotes = vec![
        Quote::new("first", "A"),
        Quote::new("second", "B"),
        Quote::new("third", "B"),
    ];

    let mut session = MemoryKeyValueStore::new();
    session.set(LAST_QUOTE_INDEX_KEY, "1").unwrap();
    session.set("lastQuoteFilter", "B").unwrap();
    let mut durable = durable_with_quotes(&quotes);
    durable.set(LAST_CATEGORY_KEY, "B").unwrap();
    let app = start_with(durable, session.clone());
    assert_eq!(app.view().display()[0], "\"third\"");

    // Same session index, but the active filter is now `all`.
    let mut durable = durable_with_quotes(&quotes);
    durable.set(LAST_CATEGORY_KEY, "all").unwrap();
    let app = start_with(durable, session);
    assert_eq!(
        app.service().store().session().peek("lastQuoteFilter"),
        Some("all")
    );
}

#[test]
fn out_of_range_last_index_falls_back_to_random_pick() {
    let mut session = MemoryKeyValueStore::new();
    session.set(LAST_QUOTE_INDEX_KEY, "99").unwrap();
    session.set("lastQuoteFilter", "all").unwrap();
    let app = start_with(MemoryKeyValueStore::new(), session);

    assert_eq!(app.view().display().len(), 2);
    let index: usize = app
        .service()
        .store()
        .session()
        .peek(LAST_QUOTE_INDEX_KEY)
        .unwrap()
        .parse()
        .unwrap();
    assert!(index < 3);
}

#[test]
fn corrupt_stored_quotes_start_from_defaults() {
    let mut durable = MemoryKeyValueStore::new();
    durable.set(QUOTES_KEY, "[{\"text\": ").unwrap();
    let app = start_with(durable, MemoryKeyValueStore::new());

    assert_eq!(app.service().quotes(), default_quotes().as_slice());
}

#[test]
fn duplicate_quotes_are_retained_and_categories_stay_unique() {
    let mut app = start_fresh();
    for _ in 0..2 {
        app.view_mut().fill_add_form("Same", "Life");
        app.dispatch(UiEvent::AddQuote).unwrap();
    }

    assert_eq!(app.service().quotes().len(), 5);
    assert_eq!(
        app.view().option_values(),
        vec!["all", "Motivation", "Life", "Inspiration"]
    );
}

#[test]
fn add_quote_with_reserved_all_category_keeps_options_unique() {
    let mut app = start_fresh();
    app.view_mut().fill_add_form("Test", "all");
    app.dispatch(UiEvent::AddQuote).unwrap();

    assert_eq!(app.service().quotes().len(), 3);
    let options = app.view().option_values();
    let unique: std::collections::HashSet<&String> = options.iter().collect();
    assert_eq!(unique.len(), options.len());
    assert_eq!(
        app.view().last_notice().map(|notice| notice.message.as_str()),
        Some("\"all\" cannot be used as a quote category.")
    );
}

#[test]
fn filter_change_updates_rendered_selection() {
    let mut app = start_fresh();
    app.dispatch(UiEvent::FilterChanged("Life".to_string()))
        .unwrap();
    assert_eq!(app.view().selected(), "Life");
    assert_eq!(
        app.view().option_values(),
        vec!["all", "Motivation", "Life", "Inspiration"]
    );

    app.dispatch(UiEvent::FilterChanged("all".to_string()))
        .unwrap();
    assert_eq!(app.view().selected(), "all");
}
