//! Docshelf client: typed access to the document server's HTTP API.
mod client;
mod error;
mod handle;
mod query;
mod types;

pub use client::{ApiClient, ClientSettings, DocumentService};
pub use error::ApiError;
pub use handle::{ClientCommand, ClientEvent, ClientHandle};
pub use query::DocumentQuery;
pub use types::{Category, CategoryId, CrawlReceipt, Document, DocumentId};
