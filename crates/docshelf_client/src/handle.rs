use std::sync::{mpsc, Arc};
use std::thread;

use client_logging::client_warn;

use crate::client::DocumentService;
use crate::query::DocumentQuery;
use crate::{
    ApiClient, ApiError, Category, CategoryId, ClientSettings, CrawlReceipt, Document, DocumentId,
};

/// Requests the shell hands to the background worker. Each one answers
/// with the matching [`ClientEvent`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ClientCommand {
    LoadCategories { preferred: Option<CategoryId> },
    LoadDocuments { query: DocumentQuery },
    SubmitCrawl {
        url: String,
        category: Option<CategoryId>,
    },
    CreateCategory { name: String },
    DeleteDocument { id: DocumentId },
    AssignCategory {
        id: DocumentId,
        category: CategoryId,
    },
    LoadContent { id: DocumentId },
}

/// Completions flowing back to the shell.
#[derive(Debug, Clone, PartialEq)]
pub enum ClientEvent {
    Categories {
        preferred: Option<CategoryId>,
        result: Result<Vec<Category>, ApiError>,
    },
    Documents {
        result: Result<Vec<Document>, ApiError>,
    },
    CrawlDone {
        result: Result<CrawlReceipt, ApiError>,
    },
    CategoryCreated {
        result: Result<Category, ApiError>,
    },
    DocumentDeleted {
        id: DocumentId,
        result: Result<(), ApiError>,
    },
    CategoryAssigned {
        id: DocumentId,
        result: Result<(), ApiError>,
    },
    Content {
        id: DocumentId,
        result: Result<String, ApiError>,
    },
}

/// Owns the API worker: a background thread with its own runtime that
/// executes commands as they arrive. Commands run concurrently, so two
/// overlapping document loads may complete in either order; the shell
/// applies whichever response lands last.
pub struct ClientHandle {
    cmd_tx: mpsc::Sender<ClientCommand>,
    event_rx: mpsc::Receiver<ClientEvent>,
    client: Arc<ApiClient>,
}

impl ClientHandle {
    pub fn new(settings: &ClientSettings) -> Result<Self, ApiError> {
        let client = Arc::new(ApiClient::new(settings)?);
        let (cmd_tx, cmd_rx) = mpsc::channel::<ClientCommand>();
        let (event_tx, event_rx) = mpsc::channel();

        let worker = client.clone();
        thread::spawn(move || {
            let runtime = match tokio::runtime::Runtime::new() {
                Ok(runtime) => runtime,
                Err(err) => {
                    client_warn!("API worker runtime failed to start: {err}");
                    return;
                }
            };
            while let Ok(command) = cmd_rx.recv() {
                let client = worker.clone();
                let event_tx = event_tx.clone();
                runtime.spawn(async move {
                    let event = dispatch(client.as_ref(), command).await;
                    let _ = event_tx.send(event);
                });
            }
        });

        Ok(Self {
            cmd_tx,
            event_rx,
            client,
        })
    }

    pub fn send(&self, command: ClientCommand) {
        let _ = self.cmd_tx.send(command);
    }

    pub fn try_recv(&self) -> Option<ClientEvent> {
        self.event_rx.try_recv().ok()
    }

    /// Navigation target for the server-rendered view of a document.
    pub fn view_url(&self, id: DocumentId) -> String {
        self.client.view_url(id)
    }
}

async fn dispatch(service: &dyn DocumentService, command: ClientCommand) -> ClientEvent {
    match command {
        ClientCommand::LoadCategories { preferred } => ClientEvent::Categories {
            preferred,
            result: service.categories().await,
        },
        ClientCommand::LoadDocuments { query } => ClientEvent::Documents {
            result: service.documents(&query).await,
        },
        ClientCommand::SubmitCrawl { url, category } => ClientEvent::CrawlDone {
            result: service.submit_crawl(&url, category).await,
        },
        ClientCommand::CreateCategory { name } => ClientEvent::CategoryCreated {
            result: service.create_category(&name).await,
        },
        ClientCommand::DeleteDocument { id } => ClientEvent::DocumentDeleted {
            id,
            result: service.delete_document(id).await,
        },
        ClientCommand::AssignCategory { id, category } => ClientEvent::CategoryAssigned {
            id,
            result: service.assign_category(id, category).await,
        },
        ClientCommand::LoadContent { id } => ClientEvent::Content {
            id,
            result: service.content(id).await,
        },
    }
}
