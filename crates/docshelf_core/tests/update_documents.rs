use std::sync::Once;

use docshelf_core::{update, AppState, Document, Effect, Msg, EMPTY_RESULTS_LABEL};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn doc(id: i64, title: Option<&str>) -> Document {
    Document {
        id,
        url: format!("http://example.com/{id}"),
        title: title.map(str::to_string),
        category_name: None,
        created: "2026-08-06".to_string(),
    }
}

#[test]
fn every_keystroke_refreshes_with_the_raw_text() {
    init_logging();
    let (_, effects) = update(AppState::new(), Msg::SearchChanged(" rust ".to_string()));

    // The text is passed through untrimmed; the client layer decides
    // whether it becomes a query parameter.
    assert_eq!(
        effects,
        vec![Effect::LoadDocuments {
            search: " rust ".to_string(),
            category: None,
        }]
    );
}

#[test]
fn explicit_submit_refreshes_too() {
    init_logging();
    let (state, _) = update(AppState::new(), Msg::SearchChanged("abc".to_string()));
    let (_, effects) = update(state, Msg::SearchSubmitted);

    assert_eq!(
        effects,
        vec![Effect::LoadDocuments {
            search: "abc".to_string(),
            category: None,
        }]
    );
}

#[test]
fn rows_apply_display_fallbacks() {
    init_logging();
    let documents = vec![doc(1, Some("First")), doc(2, None)];
    let (state, effects) = update(
        AppState::new(),
        Msg::DocumentsLoaded {
            result: Ok(documents),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.rows.len(), 2);
    assert!(!view.no_documents);
    assert_eq!(view.rows[0].title, "First");
    assert_eq!(view.rows[1].title, "Untitled");
    assert_eq!(view.rows[1].category, "-");
}

#[test]
fn empty_listing_yields_the_placeholder_row() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::DocumentsLoaded {
            result: Ok(vec![doc(1, Some("First"))]),
        },
    );
    let (state, _) = update(state, Msg::DocumentsLoaded { result: Ok(Vec::new()) });
    let view = state.view();

    assert!(view.rows.is_empty());
    assert!(view.no_documents);
    // Sanity-check the label the shell renders for the empty state.
    assert_eq!(EMPTY_RESULTS_LABEL, "No documents found");
}

#[test]
fn load_failure_keeps_previous_rows() {
    init_logging();
    let (state, _) = update(
        AppState::new(),
        Msg::DocumentsLoaded {
            result: Ok(vec![doc(1, Some("First")), doc(2, None)]),
        },
    );

    let (state, effects) = update(
        state,
        Msg::DocumentsLoaded {
            result: Err("network error".to_string()),
        },
    );

    assert!(effects.is_empty());
    assert_eq!(state.view().rows.len(), 2);
}
