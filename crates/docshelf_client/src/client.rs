use std::time::Duration;

use url::Url;

use crate::query::DocumentQuery;
use crate::types::{AckBody, Category, ContentBody, CrawlBody, CrawlReceipt, Document};
use crate::{ApiError, CategoryId, DocumentId};

/// Where and how to reach the document server.
#[derive(Debug, Clone)]
pub struct ClientSettings {
    pub base_url: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for ClientSettings {
    fn default() -> Self {
        Self {
            base_url: "http://127.0.0.1:8000".to_string(),
            connect_timeout: Duration::from_secs(10),
            request_timeout: Duration::from_secs(30),
        }
    }
}

/// The server operations the shell depends on. `ApiClient` is the real
/// implementation; tests substitute their own.
#[async_trait::async_trait]
pub trait DocumentService: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ApiError>;
    async fn create_category(&self, name: &str) -> Result<Category, ApiError>;
    async fn documents(&self, query: &DocumentQuery) -> Result<Vec<Document>, ApiError>;
    async fn delete_document(&self, id: DocumentId) -> Result<(), ApiError>;
    async fn assign_category(
        &self,
        id: DocumentId,
        category: CategoryId,
    ) -> Result<(), ApiError>;
    async fn submit_crawl(
        &self,
        url: &str,
        category: Option<CategoryId>,
    ) -> Result<CrawlReceipt, ApiError>;
    async fn content(&self, id: DocumentId) -> Result<String, ApiError>;
}

/// `reqwest`-backed implementation of [`DocumentService`].
#[derive(Debug, Clone)]
pub struct ApiClient {
    http: reqwest::Client,
    base: Url,
}

impl ApiClient {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        // A trailing slash keeps `Url::join` from eating the last path
        // segment of the base address.
        let mut raw = settings.base_url.trim().to_string();
        if !raw.ends_with('/') {
            raw.push('/');
        }
        let base = Url::parse(&raw).map_err(|err| ApiError::InvalidBaseUrl(err.to_string()))?;

        let http = reqwest::Client::builder()
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(|err| ApiError::Network(err.to_string()))?;

        Ok(Self { http, base })
    }

    /// Navigation target for the server-rendered view of a document.
    pub fn view_url(&self, id: DocumentId) -> String {
        self.base
            .join(&format!("view/{id}"))
            .map(|url| url.to_string())
            .unwrap_or_else(|_| format!("{}view/{id}", self.base))
    }

    fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base
            .join(path)
            .map_err(|err| ApiError::InvalidBaseUrl(err.to_string()))
    }
}

/// Maps a non-success response to the server's own rejection text when
/// the body carries one, or to a bare status error otherwise.
async fn rejection(response: reqwest::Response, fallback: &str) -> ApiError {
    let status = response.status().as_u16();
    match response.json::<AckBody>().await {
        Ok(body) if body.error.is_some() || body.message.is_some() => {
            ApiError::Rejected(body.rejection_text(fallback))
        }
        _ => ApiError::HttpStatus(status),
    }
}

#[async_trait::async_trait]
impl DocumentService for ApiClient {
    async fn categories(&self) -> Result<Vec<Category>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("api/categories")?)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status().as_u16()));
        }
        response.json().await.map_err(ApiError::from_reqwest)
    }

    async fn create_category(&self, name: &str) -> Result<Category, ApiError> {
        let response = self
            .http
            .post(self.endpoint("api/categories")?)
            .json(&serde_json::json!({ "name": name }))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(rejection(response, "Failed to create category").await);
        }
        response.json().await.map_err(ApiError::from_reqwest)
    }

    async fn documents(&self, query: &DocumentQuery) -> Result<Vec<Document>, ApiError> {
        let response = self
            .http
            .get(self.endpoint("api/documents")?)
            .query(&query.params())
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(ApiError::HttpStatus(response.status().as_u16()));
        }
        response.json().await.map_err(ApiError::from_reqwest)
    }

    async fn delete_document(&self, id: DocumentId) -> Result<(), ApiError> {
        let response = self
            .http
            .delete(self.endpoint(&format!("api/documents/{id}"))?)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(rejection(response, "Failed to delete document").await);
        }
        // The server answers with either a bare status or an explicit
        // success flag.
        let ack: AckBody = response.json().await.unwrap_or_default();
        match ack.success {
            Some(false) => Err(ApiError::Rejected(
                ack.rejection_text("Failed to delete document"),
            )),
            _ => Ok(()),
        }
    }

    async fn assign_category(
        &self,
        id: DocumentId,
        category: CategoryId,
    ) -> Result<(), ApiError> {
        let response = self
            .http
            .put(self.endpoint(&format!("api/documents/{id}/category"))?)
            .json(&serde_json::json!({ "category_id": category }))
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(rejection(response, "Failed to update category").await);
        }
        let ack: AckBody = response.json().await.unwrap_or_default();
        match ack.success {
            Some(false) => Err(ApiError::Rejected(
                ack.rejection_text("Failed to update category"),
            )),
            _ => Ok(()),
        }
    }

    async fn submit_crawl(
        &self,
        url: &str,
        category: Option<CategoryId>,
    ) -> Result<CrawlReceipt, ApiError> {
        let mut body = serde_json::json!({ "url": url });
        if let Some(category) = category {
            body["category_id"] = category.into();
        }

        let response = self
            .http
            .post(self.endpoint("crawl")?)
            .json(&body)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        let status = response.status();
        let parsed: CrawlBody = response.json().await.unwrap_or_default();

        if status.is_success() && parsed.success {
            Ok(CrawlReceipt {
                id: parsed.id,
                title: parsed.title,
            })
        } else if parsed.error.is_some() || parsed.message.is_some() {
            Err(ApiError::Rejected(
                parsed
                    .error
                    .or(parsed.message)
                    .unwrap_or_else(|| "Failed to crawl URL".to_string()),
            ))
        } else if !status.is_success() {
            Err(ApiError::HttpStatus(status.as_u16()))
        } else {
            Err(ApiError::Rejected("Failed to crawl URL".to_string()))
        }
    }

    async fn content(&self, id: DocumentId) -> Result<String, ApiError> {
        let response = self
            .http
            .get(self.endpoint(&format!("content/{id}"))?)
            .send()
            .await
            .map_err(ApiError::from_reqwest)?;
        if !response.status().is_success() {
            return Err(rejection(response, "Failed to load document content").await);
        }
        let body: ContentBody = response.json().await.map_err(ApiError::from_reqwest)?;
        match body.error {
            Some(error) => Err(ApiError::Rejected(error)),
            None => Ok(body.content),
        }
    }
}
