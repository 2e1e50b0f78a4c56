use serde::Deserialize;

pub type CategoryId = i64;
pub type DocumentId = i64;

/// A category record as served by the category endpoints.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Category {
    pub id: CategoryId,
    pub name: String,
}

/// A document summary as served by the listing endpoint.
///
/// `created_at` is kept verbatim; the server has emitted both RFC 3339
/// and bare SQL timestamps over time, so parsing is left to the caller.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Document {
    pub id: DocumentId,
    pub url: String,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub category_name: Option<String>,
    #[serde(default)]
    pub created_at: String,
}

/// What the server reported back for an accepted crawl submission.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CrawlReceipt {
    pub id: Option<DocumentId>,
    pub title: Option<String>,
}

/// Acknowledgement body shared by the mutation endpoints: a `success`
/// flag and/or an error text. All fields are optional because some
/// responses carry only an HTTP status.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct AckBody {
    #[serde(default)]
    pub success: Option<bool>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

impl AckBody {
    pub(crate) fn rejection_text(&self, fallback: &str) -> String {
        self.error
            .clone()
            .or_else(|| self.message.clone())
            .unwrap_or_else(|| fallback.to_string())
    }
}

/// Response body of the crawl endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct CrawlBody {
    #[serde(default)]
    pub success: bool,
    #[serde(default)]
    pub id: Option<DocumentId>,
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
    #[serde(default)]
    pub message: Option<String>,
}

/// Response body of the content endpoint.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct ContentBody {
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub error: Option<String>,
}
