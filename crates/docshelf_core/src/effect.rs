use crate::{CategoryId, DocumentId};

/// Side effects requested by `update`, executed by the platform shell.
/// Completions come back as the matching `Msg` variants.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    LoadCategories {
        preferred: Option<CategoryId>,
    },
    /// `search` is the raw input text; the client layer decides which
    /// query parameters the request actually carries.
    LoadDocuments {
        search: String,
        category: Option<CategoryId>,
    },
    SubmitCrawl {
        url: String,
        category: CategoryId,
    },
    CreateCategory {
        name: String,
    },
    DeleteDocument {
        id: DocumentId,
    },
    AssignCategory {
        id: DocumentId,
        category: CategoryId,
    },
    LoadPreview {
        id: DocumentId,
    },
    /// Fixed-duration pacing after a successful crawl; fires `Msg::CrawlSettled`.
    ScheduleCrawlSettle,
    /// Open a URL in the system browser.
    OpenExternal {
        url: String,
    },
    /// Open the server-rendered view of a document in the system browser.
    OpenRendered {
        id: DocumentId,
    },
}
