use crate::state::{
    AppState, CategoryId, CrawlPhase, DocumentId, Modal, Notice, SelectorEntry, StatusLine,
};

/// Selector label for the empty placeholder entry.
pub const PLACEHOLDER_LABEL: &str = "Select Category";
/// Selector label for the add-new sentinel entry.
pub const ADD_CATEGORY_LABEL: &str = "+ Add New Category";
/// Title fallback for documents without one.
pub const UNTITLED_LABEL: &str = "Untitled";
/// Category fallback for uncategorized documents.
pub const UNCATEGORIZED_LABEL: &str = "-";
/// Text of the single row shown when the listing is empty.
pub const EMPTY_RESULTS_LABEL: &str = "No documents found";

/// One entry of the rendered category selector.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectorItemView {
    pub entry: SelectorEntry,
    pub label: String,
    pub selected: bool,
}

/// One rendered document row, fallbacks already applied.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRowView {
    pub id: DocumentId,
    pub title: String,
    pub category: String,
    pub created: String,
    pub url: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppViewModel {
    pub running: bool,
    pub search: String,
    pub selector: Vec<SelectorItemView>,
    pub committed_category: Option<CategoryId>,
    pub rows: Vec<DocumentRowView>,
    /// True when the listing came back empty and the placeholder row shows.
    pub no_documents: bool,
    /// Whether the new-document trigger is enabled (a category is committed).
    pub crawl_enabled: bool,
    pub crawl_phase: CrawlPhase,
    pub crawl_url: String,
    pub crawl_status: Option<StatusLine>,
    pub category_name: String,
    pub modal: Option<Modal>,
    pub notices: Vec<Notice>,
}

impl AppViewModel {
    pub(crate) fn project(state: &AppState) -> Self {
        let committed = state.committed_category();

        let mut selector = Vec::with_capacity(state.categories().len() + 2);
        if state.categories().is_empty() {
            selector.push(SelectorItemView {
                entry: SelectorEntry::Placeholder,
                label: PLACEHOLDER_LABEL.to_string(),
                selected: committed.is_none(),
            });
        }
        for category in state.categories() {
            selector.push(SelectorItemView {
                entry: SelectorEntry::Category(category.id),
                label: category.name.clone(),
                selected: committed == Some(category.id),
            });
        }
        // The sentinel is always present and always last.
        selector.push(SelectorItemView {
            entry: SelectorEntry::AddNew,
            label: ADD_CATEGORY_LABEL.to_string(),
            selected: false,
        });

        let rows: Vec<DocumentRowView> = state
            .documents()
            .iter()
            .map(|doc| DocumentRowView {
                id: doc.id,
                title: doc
                    .title
                    .clone()
                    .unwrap_or_else(|| UNTITLED_LABEL.to_string()),
                category: doc
                    .category_name
                    .clone()
                    .unwrap_or_else(|| UNCATEGORIZED_LABEL.to_string()),
                created: doc.created.clone(),
                url: doc.url.clone(),
            })
            .collect();

        Self {
            running: state.running(),
            search: state.search().to_string(),
            committed_category: committed,
            no_documents: rows.is_empty(),
            rows,
            crawl_enabled: committed.is_some(),
            crawl_phase: state.crawl_phase(),
            crawl_url: state.crawl_url().to_string(),
            crawl_status: state.crawl_status().cloned(),
            category_name: state.category_name().to_string(),
            modal: state.modal().cloned(),
            notices: state.notices().to_vec(),
            selector,
        }
    }

    /// Categories offered by the recategorize picker: real entries only,
    /// in selector order.
    pub fn picker_entries(&self) -> Vec<(CategoryId, String)> {
        self.selector
            .iter()
            .filter_map(|item| match item.entry {
                SelectorEntry::Category(id) => Some((id, item.label.clone())),
                _ => None,
            })
            .collect()
    }
}
