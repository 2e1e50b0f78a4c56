use crate::{Category, CategoryId, CrawlReceipt, Document, DocumentId, SelectorEntry};

/// Completion results carry the user-facing message on failure; the
/// platform layer turns transport errors into strings before dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// First message after the shell comes up; triggers the initial loads.
    Started,
    /// Search box edited; fires on every keystroke, without debounce.
    SearchChanged(String),
    /// Search submitted explicitly (Enter in the search box).
    SearchSubmitted,
    /// An entry was chosen from the category selector.
    SelectorChosen(SelectorEntry),
    /// Category fetch finished; `preferred` echoes the requested selection.
    CategoriesLoaded {
        preferred: Option<CategoryId>,
        result: Result<Vec<Category>, String>,
    },
    /// Document fetch finished.
    DocumentsLoaded { result: Result<Vec<Document>, String> },
    /// Open the new-document popup.
    NewDocumentRequested,
    /// URL input inside the new-document popup edited.
    CrawlUrlChanged(String),
    /// Submit the crawl form.
    CrawlSubmitted,
    /// Crawl request finished.
    CrawlFinished { result: Result<CrawlReceipt, String> },
    /// Pacing delay after a successful crawl elapsed.
    CrawlSettled,
    /// Name input inside the new-category popup edited.
    CategoryNameChanged(String),
    /// Submit the new-category form.
    CategorySubmitted,
    /// Category creation finished.
    CategoryCreated { result: Result<Category, String> },
    /// Ask to delete a document; opens the confirmation popup.
    DeleteRequested { id: DocumentId },
    /// The user confirmed the pending deletion.
    DeleteConfirmed,
    /// Deletion request finished.
    DocumentDeleted { result: Result<(), String> },
    /// Ask to move a document to another category; opens the picker.
    RecategorizeRequested { id: DocumentId },
    /// A category was picked for the document in the picker popup.
    CategoryPicked(CategoryId),
    /// Category reassignment finished.
    CategoryAssigned { result: Result<(), String> },
    /// Fetch a document's markdown content for the in-app preview.
    PreviewRequested { id: DocumentId },
    /// Preview content fetch finished.
    PreviewLoaded {
        id: DocumentId,
        result: Result<String, String>,
    },
    /// Open a document's original URL in the system browser.
    OpenOriginalRequested { id: DocumentId },
    /// Open a document's server-rendered view in the system browser.
    OpenRenderedRequested { id: DocumentId },
    /// Close whatever popup is open (Esc / decline).
    ModalDismissed,
    /// UI tick: ages transient notices.
    Tick,
    QuitRequested,
    /// Fallback for placeholder wiring.
    NoOp,
}
