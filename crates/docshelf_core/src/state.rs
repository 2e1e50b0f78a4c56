use crate::view_model::AppViewModel;

/// Server-assigned category identifier, treated as opaque.
pub type CategoryId = i64;
/// Server-assigned document identifier, treated as opaque.
pub type DocumentId = i64;

/// A category as returned by the listing endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// One document summary row as returned by the listing endpoint.
///
/// `created` is already formatted for display; the platform layer owns
/// date localization so this crate stays free of time dependencies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    pub id: DocumentId,
    pub url: String,
    pub title: Option<String>,
    pub category_name: Option<String>,
    pub created: String,
}

/// What the server reported back for an accepted crawl.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrawlReceipt {
    pub id: Option<DocumentId>,
    pub title: Option<String>,
}

/// Entries of the category selector. The placeholder and the add-new
/// sentinel are selector-only: neither can become the committed
/// category, which is always an `Option<CategoryId>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectorEntry {
    /// Shown only while no categories exist.
    Placeholder,
    Category(CategoryId),
    /// Choosing this opens the category-creation popup instead of selecting.
    AddNew,
}

/// Crawl submission control state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrawlPhase {
    #[default]
    Idle,
    Submitting,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Error,
}

/// Inline status line shown in the crawl popup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusLine {
    pub kind: StatusKind,
    pub text: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeLevel {
    Info,
    Error,
}

/// A transient banner message, dropped after its ticks run out.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub text: String,
    pub ttl_ticks: u16,
}

/// Popup dialogs; at most one is open at a time.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    NewDocument,
    NewCategory,
    ConfirmDelete { id: DocumentId, title: String },
    PickCategory { id: DocumentId },
    Preview { title: String, content: String },
}

/// Ticks a notice stays visible.
const NOTICE_TTL: u16 = 40;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppState {
    running: bool,
    search: String,
    categories: Vec<Category>,
    committed_category: Option<CategoryId>,
    documents: Vec<Document>,
    crawl_url: String,
    crawl_phase: CrawlPhase,
    crawl_status: Option<StatusLine>,
    category_name: String,
    modal: Option<Modal>,
    notices: Vec<Notice>,
    dirty: bool,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    pub fn new() -> Self {
        Self {
            running: true,
            search: String::new(),
            categories: Vec::new(),
            committed_category: None,
            documents: Vec::new(),
            crawl_url: String::new(),
            crawl_phase: CrawlPhase::Idle,
            crawl_status: None,
            category_name: String::new(),
            modal: None,
            notices: Vec::new(),
            dirty: false,
        }
    }

    pub fn view(&self) -> AppViewModel {
        AppViewModel::project(self)
    }

    /// Returns the dirty flag and clears it; the shell renders when true.
    pub fn consume_dirty(&mut self) -> bool {
        std::mem::take(&mut self.dirty)
    }

    fn mark_dirty(&mut self) {
        self.dirty = true;
    }

    // ── accessors ──────────────────────────────────────────────────────

    pub fn running(&self) -> bool {
        self.running
    }

    pub fn search(&self) -> &str {
        &self.search
    }

    pub fn committed_category(&self) -> Option<CategoryId> {
        self.committed_category
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn documents(&self) -> &[Document] {
        &self.documents
    }

    pub fn crawl_phase(&self) -> CrawlPhase {
        self.crawl_phase
    }

    pub fn crawl_url(&self) -> &str {
        &self.crawl_url
    }

    pub fn crawl_status(&self) -> Option<&StatusLine> {
        self.crawl_status.as_ref()
    }

    pub fn category_name(&self) -> &str {
        &self.category_name
    }

    pub fn modal(&self) -> Option<&Modal> {
        self.modal.as_ref()
    }

    pub fn notices(&self) -> &[Notice] {
        &self.notices
    }

    pub(crate) fn find_document(&self, id: DocumentId) -> Option<&Document> {
        self.documents.iter().find(|doc| doc.id == id)
    }

    // ── mutations (driven by `update`) ─────────────────────────────────

    pub(crate) fn quit(&mut self) {
        self.running = false;
        self.mark_dirty();
    }

    pub(crate) fn set_search(&mut self, text: String) {
        if self.search != text {
            self.search = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn commit_category(&mut self, id: Option<CategoryId>) {
        self.committed_category = id;
        self.mark_dirty();
    }

    /// Replaces the category list and re-derives the committed selection.
    ///
    /// `preferred` wins when it exists in the new list; otherwise a still
    /// existing previous selection is kept; otherwise the first category
    /// is committed when any exist. A previously committed id that is no
    /// longer present counts as no selection at all.
    pub(crate) fn apply_categories(
        &mut self,
        categories: Vec<Category>,
        preferred: Option<CategoryId>,
    ) {
        self.categories = categories;
        let exists = |id: CategoryId| self.categories.iter().any(|c| c.id == id);
        self.committed_category = match preferred {
            Some(id) if exists(id) => Some(id),
            _ => match self.committed_category {
                Some(id) if exists(id) => Some(id),
                _ => self.categories.first().map(|c| c.id),
            },
        };
        self.mark_dirty();
    }

    pub(crate) fn set_documents(&mut self, documents: Vec<Document>) {
        self.documents = documents;
        self.mark_dirty();
    }

    pub(crate) fn open_modal(&mut self, modal: Modal) {
        self.modal = Some(modal);
        self.mark_dirty();
    }

    /// Closes any open popup. Input text is kept so a reopened popup
    /// resumes where the user left off; only the status banner is hidden.
    pub(crate) fn close_modal(&mut self) {
        self.modal = None;
        self.crawl_status = None;
        self.mark_dirty();
    }

    pub(crate) fn set_crawl_url(&mut self, text: String) {
        if self.crawl_url != text {
            self.crawl_url = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn set_category_name(&mut self, text: String) {
        if self.category_name != text {
            self.category_name = text;
            self.mark_dirty();
        }
    }

    pub(crate) fn begin_crawl(&mut self) {
        self.crawl_phase = CrawlPhase::Submitting;
        self.crawl_status = Some(StatusLine {
            kind: StatusKind::Info,
            text: "Crawling URL, this may take a moment...".to_string(),
        });
        self.mark_dirty();
    }

    /// Cleanup step after a crawl completes, regardless of outcome.
    pub(crate) fn finish_crawl(&mut self, status: StatusLine) {
        self.crawl_phase = CrawlPhase::Idle;
        self.crawl_status = Some(status);
        self.mark_dirty();
    }

    /// Finishes the success pacing delay: closes the popup and clears its
    /// input. Returns false when the popup is no longer in a settled
    /// success state (e.g. the user already dismissed it).
    pub(crate) fn settle_crawl(&mut self) -> bool {
        let succeeded = matches!(
            self.crawl_status,
            Some(StatusLine {
                kind: StatusKind::Success,
                ..
            })
        ) && matches!(self.modal, Some(Modal::NewDocument));
        if succeeded {
            self.crawl_url.clear();
            self.close_modal();
        }
        succeeded
    }

    pub(crate) fn clear_category_name(&mut self) {
        self.category_name.clear();
        self.mark_dirty();
    }

    pub(crate) fn push_notice(&mut self, level: NoticeLevel, text: impl Into<String>) {
        self.notices.push(Notice {
            level,
            text: text.into(),
            ttl_ticks: NOTICE_TTL,
        });
        self.mark_dirty();
    }

    /// Ages notices by one tick, dropping the expired ones.
    pub(crate) fn decay_notices(&mut self) {
        if self.notices.is_empty() {
            return;
        }
        for notice in &mut self.notices {
            notice.ttl_ticks = notice.ttl_ticks.saturating_sub(1);
        }
        self.notices.retain(|notice| notice.ttl_ticks > 0);
        self.mark_dirty();
    }

    /// Snapshot of the current document filter, as sent to the server:
    /// the raw search text plus the committed category, if any.
    pub(crate) fn document_query(&self) -> crate::Effect {
        crate::Effect::LoadDocuments {
            search: self.search.clone(),
            category: self.committed_category,
        }
    }
}
