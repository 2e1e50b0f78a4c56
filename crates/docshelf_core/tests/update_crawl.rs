use std::sync::Once;

use docshelf_core::{
    update, AppState, Category, CrawlPhase, CrawlReceipt, Effect, Modal, Msg, NoticeLevel,
    StatusKind,
};

fn init_logging() {
    static INIT: Once = Once::new();
    INIT.call_once(client_logging::initialize_for_tests);
}

/// State with one committed category, as after a normal startup.
fn state_with_category() -> AppState {
    let (state, _) = update(AppState::new(), Msg::Started);
    let (state, _) = update(
        state,
        Msg::CategoriesLoaded {
            preferred: None,
            result: Ok(vec![Category {
                id: 1,
                name: "Tech".to_string(),
            }]),
        },
    );
    state
}

fn open_popup(state: AppState) -> AppState {
    let (state, _) = update(state, Msg::NewDocumentRequested);
    assert_eq!(state.view().modal, Some(Modal::NewDocument));
    state
}

#[test]
fn popup_requires_a_committed_category() {
    init_logging();
    let (state, effects) = update(AppState::new(), Msg::NewDocumentRequested);
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.modal, None);
    assert!(view
        .notices
        .iter()
        .any(|n| n.level == NoticeLevel::Error && n.text.contains("category")));
}

#[test]
fn empty_url_never_issues_a_request() {
    init_logging();
    let state = open_popup(state_with_category());

    let (state, effects) = update(state, Msg::CrawlSubmitted);
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.crawl_phase, CrawlPhase::Idle);
    assert!(view
        .notices
        .iter()
        .any(|n| n.text.contains("Please enter a valid URL")));
}

#[test]
fn submit_moves_to_submitting_and_requests_the_crawl() {
    init_logging();
    let state = open_popup(state_with_category());
    let (state, _) = update(state, Msg::CrawlUrlChanged("  http://x.test  ".to_string()));

    let (state, effects) = update(state, Msg::CrawlSubmitted);
    let view = state.view();

    assert_eq!(
        effects,
        vec![Effect::SubmitCrawl {
            url: "http://x.test".to_string(),
            category: 1,
        }]
    );
    assert_eq!(view.crawl_phase, CrawlPhase::Submitting);
    let status = view.crawl_status.expect("status shown while submitting");
    assert_eq!(status.kind, StatusKind::Info);
}

#[test]
fn second_submit_while_in_flight_is_ignored() {
    init_logging();
    let state = open_popup(state_with_category());
    let (state, _) = update(state, Msg::CrawlUrlChanged("http://x.test".to_string()));
    let (state, _) = update(state, Msg::CrawlSubmitted);

    let (_, effects) = update(state, Msg::CrawlSubmitted);

    assert!(effects.is_empty());
}

#[test]
fn success_shows_the_title_then_settles_into_a_refresh() {
    init_logging();
    let state = open_popup(state_with_category());
    let (state, _) = update(state, Msg::CrawlUrlChanged("http://x.test".to_string()));
    let (state, _) = update(state, Msg::CrawlSubmitted);

    let (state, effects) = update(
        state,
        Msg::CrawlFinished {
            result: Ok(CrawlReceipt {
                id: Some(9),
                title: Some("X".to_string()),
            }),
        },
    );
    let view = state.view();
    assert_eq!(effects, vec![Effect::ScheduleCrawlSettle]);
    assert_eq!(view.crawl_phase, CrawlPhase::Idle);
    let status = view.crawl_status.expect("success status shown");
    assert_eq!(status.kind, StatusKind::Success);
    assert!(status.text.contains('X'));
    // Popup stays up until the pacing delay elapses.
    assert_eq!(view.modal, Some(Modal::NewDocument));

    let (state, effects) = update(state, Msg::CrawlSettled);
    let view = state.view();
    assert_eq!(
        effects,
        vec![Effect::LoadDocuments {
            search: String::new(),
            category: Some(1),
        }]
    );
    assert_eq!(view.modal, None);
    assert!(view.crawl_url.is_empty());
    assert_eq!(view.crawl_status, None);
}

#[test]
fn failure_keeps_the_popup_open_for_correction() {
    init_logging();
    let state = open_popup(state_with_category());
    let (state, _) = update(state, Msg::CrawlUrlChanged("http://x.test".to_string()));
    let (state, _) = update(state, Msg::CrawlSubmitted);

    let (state, effects) = update(
        state,
        Msg::CrawlFinished {
            result: Err("Failed to crawl URL".to_string()),
        },
    );
    let view = state.view();

    assert!(effects.is_empty());
    assert_eq!(view.crawl_phase, CrawlPhase::Idle);
    assert_eq!(view.modal, Some(Modal::NewDocument));
    let status = view.crawl_status.expect("error status shown");
    assert_eq!(status.kind, StatusKind::Error);
    assert!(status.text.contains("Failed to crawl URL"));
    // The URL stays in place so the user can fix it.
    assert_eq!(view.crawl_url, "http://x.test");
}

#[test]
fn settle_after_dismissal_does_nothing() {
    init_logging();
    let state = open_popup(state_with_category());
    let (state, _) = update(state, Msg::CrawlUrlChanged("http://x.test".to_string()));
    let (state, _) = update(state, Msg::CrawlSubmitted);
    let (state, _) = update(
        state,
        Msg::CrawlFinished {
            result: Ok(CrawlReceipt::default()),
        },
    );
    let (state, _) = update(state, Msg::ModalDismissed);

    let (state, effects) = update(state, Msg::CrawlSettled);

    assert!(effects.is_empty());
    assert_eq!(state.view().modal, None);
}
