use std::sync::Once;

use docshelf_core::{
    update, AppState, Category, Effect, Modal, Msg, NoticeLevel, SelectorEntry,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

fn cat(id: i64, name: &str) -> Category {
    Category {
        id,
        name: name.to_string(),
    }
}

fn open_creation_popup(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::SelectorChosen(SelectorEntry::AddNew));
    assert_eq!(state.view().modal, Some(Modal::NewCategory));
    state
}

#[test]
fn empty_name_never_issues_a_request() {
    init_logging();
    let state = open_creation_popup(AppState::new());
    let (state, _) = update(state, Msg::CategoryNameChanged("   ".to_string()));

    let (state, effects) = update(state, Msg::CategorySubmitted);

    assert!(effects.is_empty());
    assert!(state
        .view()
        .notices
        .iter()
        .any(|n| n.level == NoticeLevel::Error && n.text.contains("category name")));
}

#[test]
fn submit_sends_the_trimmed_name() {
    init_logging();
    let state = open_creation_popup(AppState::new());
    let (state, _) = update(state, Msg::CategoryNameChanged("  Science  ".to_string()));

    let (_, effects) = update(state, Msg::CategorySubmitted);

    assert_eq!(
        effects,
        vec![Effect::CreateCategory {
            name: "Science".to_string(),
        }]
    );
}

#[test]
fn creation_closes_the_popup_and_chains_the_reloads() {
    init_logging();
    let state = open_creation_popup(AppState::new());
    let (state, _) = update(state, Msg::CategoryNameChanged("Science".to_string()));
    let (state, _) = update(state, Msg::CategorySubmitted);

    let (state, effects) = update(
        state,
        Msg::CategoryCreated {
            result: Ok(cat(5, "Science")),
        },
    );
    let view = state.view();
    assert_eq!(view.modal, None);
    assert!(view.category_name.is_empty());
    assert_eq!(effects, vec![Effect::LoadCategories { preferred: Some(5) }]);

    // The reload answers with the fresh collection; the new category is
    // committed and only then do documents refresh against it.
    let (state, effects) = update(
        state,
        Msg::CategoriesLoaded {
            preferred: Some(5),
            result: Ok(vec![cat(1, "Tech"), cat(5, "Science")]),
        },
    );
    assert_eq!(state.view().committed_category, Some(5));
    assert_eq!(
        effects,
        vec![Effect::LoadDocuments {
            search: String::new(),
            category: Some(5),
        }]
    );
}

#[test]
fn creation_failure_keeps_the_popup_open() {
    init_logging();
    let state = open_creation_popup(AppState::new());
    let (state, _) = update(state, Msg::CategoryNameChanged("Tech".to_string()));
    let (state, _) = update(state, Msg::CategorySubmitted);

    let (state, effects) = update(
        state,
        Msg::CategoryCreated {
            result: Err("Category already exists".to_string()),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.modal, Some(Modal::NewCategory));
    assert!(view
        .notices
        .iter()
        .any(|n| n.text.contains("Category already exists")));
    // Input is kept for correction.
    assert_eq!(view.category_name, "Tech");
}
