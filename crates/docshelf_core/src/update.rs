use crate::state::{CrawlPhase, Modal, StatusKind, StatusLine};
use crate::view_model::UNTITLED_LABEL;
use crate::{AppState, Effect, Msg, NoticeLevel, SelectorEntry};

/// Pure update function: applies a message to state and returns any effects.
pub fn update(mut state: AppState, msg: Msg) -> (AppState, Vec<Effect>) {
    let effects = match msg {
        Msg::Started => vec![
            Effect::LoadCategories { preferred: None },
            state.document_query(),
        ],
        Msg::SearchChanged(text) => {
            state.set_search(text);
            // No debounce: every keystroke refreshes.
            vec![state.document_query()]
        }
        Msg::SearchSubmitted => vec![state.document_query()],
        Msg::SelectorChosen(entry) => match entry {
            SelectorEntry::AddNew => {
                // The sentinel is never committed; the previous selection
                // stays in place while the creation popup is open.
                state.open_modal(Modal::NewCategory);
                Vec::new()
            }
            SelectorEntry::Category(id) => {
                state.commit_category(Some(id));
                vec![state.document_query()]
            }
            SelectorEntry::Placeholder => {
                state.commit_category(None);
                vec![state.document_query()]
            }
        },
        Msg::CategoriesLoaded { preferred, result } => match result {
            Ok(categories) => {
                state.apply_categories(categories, preferred);
                if preferred.is_some() {
                    // Creation path: the document refresh runs only after
                    // the new selection has been applied.
                    vec![state.document_query()]
                } else {
                    Vec::new()
                }
            }
            // Logged by the platform layer; selector keeps its prior state.
            Err(_) => Vec::new(),
        },
        Msg::DocumentsLoaded { result } => {
            match result {
                Ok(documents) => state.set_documents(documents),
                // Logged by the platform layer; the table keeps its rows.
                Err(_) => {}
            }
            Vec::new()
        }
        Msg::NewDocumentRequested => {
            if state.committed_category().is_none() {
                state.push_notice(NoticeLevel::Error, "Please select a category first");
            } else {
                state.open_modal(Modal::NewDocument);
            }
            Vec::new()
        }
        Msg::CrawlUrlChanged(text) => {
            state.set_crawl_url(text);
            Vec::new()
        }
        Msg::CrawlSubmitted => {
            if state.crawl_phase() == CrawlPhase::Submitting {
                // Disabled-control guard: one submission at a time.
                return (state, Vec::new());
            }
            let url = state.crawl_url().trim().to_string();
            if url.is_empty() {
                state.push_notice(NoticeLevel::Error, "Please enter a valid URL");
                return (state, Vec::new());
            }
            match state.committed_category() {
                None => {
                    state.push_notice(NoticeLevel::Error, "Please select a category");
                    Vec::new()
                }
                Some(category) => {
                    state.begin_crawl();
                    vec![Effect::SubmitCrawl { url, category }]
                }
            }
        }
        Msg::CrawlFinished { result } => match result {
            Ok(receipt) => {
                let text = match receipt.title {
                    Some(title) => format!("Crawled: {title}"),
                    None => "Crawled successfully".to_string(),
                };
                state.finish_crawl(StatusLine {
                    kind: StatusKind::Success,
                    text,
                });
                vec![Effect::ScheduleCrawlSettle]
            }
            Err(message) => {
                state.finish_crawl(StatusLine {
                    kind: StatusKind::Error,
                    text: message,
                });
                Vec::new()
            }
        },
        Msg::CrawlSettled => {
            if state.settle_crawl() {
                vec![state.document_query()]
            } else {
                Vec::new()
            }
        }
        Msg::CategoryNameChanged(text) => {
            state.set_category_name(text);
            Vec::new()
        }
        Msg::CategorySubmitted => {
            let name = state.category_name().trim().to_string();
            if name.is_empty() {
                state.push_notice(NoticeLevel::Error, "Please enter a category name");
                Vec::new()
            } else {
                vec![Effect::CreateCategory { name }]
            }
        }
        Msg::CategoryCreated { result } => match result {
            Ok(category) => {
                state.clear_category_name();
                state.close_modal();
                // The document refresh is chained off the category reload.
                vec![Effect::LoadCategories {
                    preferred: Some(category.id),
                }]
            }
            Err(message) => {
                // Popup stays open for correction.
                state.push_notice(NoticeLevel::Error, message);
                Vec::new()
            }
        },
        Msg::DeleteRequested { id } => {
            let title = state.find_document(id).map(|doc| {
                doc.title
                    .clone()
                    .unwrap_or_else(|| UNTITLED_LABEL.to_string())
            });
            if let Some(title) = title {
                state.open_modal(Modal::ConfirmDelete { id, title });
            }
            Vec::new()
        }
        Msg::DeleteConfirmed => {
            if let Some(Modal::ConfirmDelete { id, .. }) = state.modal().cloned() {
                state.close_modal();
                vec![Effect::DeleteDocument { id }]
            } else {
                Vec::new()
            }
        }
        Msg::DocumentDeleted { result } => match result {
            Ok(()) => vec![state.document_query()],
            Err(message) => {
                state.push_notice(NoticeLevel::Error, message);
                Vec::new()
            }
        },
        Msg::RecategorizeRequested { id } => {
            if state.categories().is_empty() {
                state.push_notice(NoticeLevel::Info, "Create a category first");
            } else if state.find_document(id).is_some() {
                state.open_modal(Modal::PickCategory { id });
            }
            Vec::new()
        }
        Msg::CategoryPicked(category) => {
            if let Some(Modal::PickCategory { id }) = state.modal().cloned() {
                state.close_modal();
                vec![Effect::AssignCategory { id, category }]
            } else {
                Vec::new()
            }
        }
        Msg::CategoryAssigned { result } => match result {
            Ok(()) => vec![state.document_query()],
            Err(message) => {
                state.push_notice(NoticeLevel::Error, message);
                Vec::new()
            }
        },
        Msg::PreviewRequested { id } => vec![Effect::LoadPreview { id }],
        Msg::PreviewLoaded { id, result } => {
            match result {
                Ok(content) => {
                    let title = state
                        .find_document(id)
                        .and_then(|doc| doc.title.clone())
                        .unwrap_or_else(|| UNTITLED_LABEL.to_string());
                    state.open_modal(Modal::Preview { title, content });
                }
                Err(message) => state.push_notice(NoticeLevel::Error, message),
            }
            Vec::new()
        }
        Msg::OpenOriginalRequested { id } => match state.find_document(id) {
            Some(doc) => vec![Effect::OpenExternal {
                url: doc.url.clone(),
            }],
            None => Vec::new(),
        },
        Msg::OpenRenderedRequested { id } => vec![Effect::OpenRendered { id }],
        Msg::ModalDismissed => {
            if state.modal().is_some() {
                state.close_modal();
            }
            Vec::new()
        }
        Msg::Tick => {
            state.decay_notices();
            Vec::new()
        }
        Msg::QuitRequested => {
            state.quit();
            Vec::new()
        }
        Msg::NoOp => Vec::new(),
    };

    (state, effects)
}
