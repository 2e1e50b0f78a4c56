//! Docshelf core: pure state machine and view-model helpers.
mod effect;
mod msg;
mod state;
mod update;
mod view_model;

pub use effect::Effect;
pub use msg::Msg;
pub use state::{
    AppState, Category, CategoryId, CrawlPhase, CrawlReceipt, Document, DocumentId, Modal,
    Notice, NoticeLevel, SelectorEntry, StatusKind, StatusLine,
};
pub use update::update;
pub use view_model::{
    AppViewModel, DocumentRowView, SelectorItemView, ADD_CATEGORY_LABEL, EMPTY_RESULTS_LABEL,
    PLACEHOLDER_LABEL, UNCATEGORIZED_LABEL, UNTITLED_LABEL,
};
