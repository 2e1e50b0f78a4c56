use std::process::Command;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use chrono::{DateTime, Local, NaiveDateTime};
use client_logging::{client_info, client_warn};
use docshelf_client::{ClientCommand, ClientEvent, ClientHandle, DocumentQuery};
use docshelf_core::{Category, CrawlReceipt, Document, Effect, Msg};

/// Pause between a successful crawl's status banner and the popup close.
const CRAWL_SETTLE_DELAY: Duration = Duration::from_millis(1200);

/// Executes core effects against the API worker and converts its
/// completions back into messages.
pub struct EffectRunner {
    handle: ClientHandle,
    msg_tx: mpsc::Sender<Msg>,
}

impl EffectRunner {
    pub fn new(handle: ClientHandle, msg_tx: mpsc::Sender<Msg>) -> Self {
        Self { handle, msg_tx }
    }

    pub fn enqueue(&self, effects: Vec<Effect>) {
        for effect in effects {
            match effect {
                Effect::LoadCategories { preferred } => {
                    self.handle.send(ClientCommand::LoadCategories { preferred });
                }
                Effect::LoadDocuments { search, category } => {
                    self.handle.send(ClientCommand::LoadDocuments {
                        query: DocumentQuery::from_inputs(search, category),
                    });
                }
                Effect::SubmitCrawl { url, category } => {
                    client_info!("Submitting crawl for {url}");
                    self.handle.send(ClientCommand::SubmitCrawl {
                        url,
                        category: Some(category),
                    });
                }
                Effect::CreateCategory { name } => {
                    self.handle.send(ClientCommand::CreateCategory { name });
                }
                Effect::DeleteDocument { id } => {
                    self.handle.send(ClientCommand::DeleteDocument { id });
                }
                Effect::AssignCategory { id, category } => {
                    self.handle
                        .send(ClientCommand::AssignCategory { id, category });
                }
                Effect::LoadPreview { id } => {
                    self.handle.send(ClientCommand::LoadContent { id });
                }
                Effect::ScheduleCrawlSettle => {
                    let tx = self.msg_tx.clone();
                    thread::spawn(move || {
                        thread::sleep(CRAWL_SETTLE_DELAY);
                        let _ = tx.send(Msg::CrawlSettled);
                    });
                }
                Effect::OpenExternal { url } => open_in_browser(&url),
                Effect::OpenRendered { id } => open_in_browser(&self.handle.view_url(id)),
            }
        }
    }

    /// Drains completed API calls, converting them into messages.
    pub fn poll_events(&self) -> Vec<Msg> {
        let mut msgs = Vec::new();
        while let Some(event) = self.handle.try_recv() {
            msgs.push(map_event(event));
        }
        msgs
    }
}

fn map_event(event: ClientEvent) -> Msg {
    match event {
        ClientEvent::Categories { preferred, result } => Msg::CategoriesLoaded {
            preferred,
            result: result
                .map(|categories| categories.into_iter().map(map_category).collect())
                .map_err(|err| {
                    client_warn!("Category refresh failed: {err}");
                    err.to_string()
                }),
        },
        ClientEvent::Documents { result } => Msg::DocumentsLoaded {
            result: result
                .map(|documents| documents.into_iter().map(map_document).collect())
                .map_err(|err| {
                    client_warn!("Document refresh failed: {err}");
                    err.to_string()
                }),
        },
        ClientEvent::CrawlDone { result } => Msg::CrawlFinished {
            result: result.map(map_receipt).map_err(|err| {
                client_warn!("Crawl failed: {err}");
                err.to_string()
            }),
        },
        ClientEvent::CategoryCreated { result } => Msg::CategoryCreated {
            result: result.map(map_category).map_err(|err| {
                client_warn!("Category creation failed: {err}");
                err.to_string()
            }),
        },
        ClientEvent::DocumentDeleted { id, result } => Msg::DocumentDeleted {
            result: result.map_err(|err| {
                client_warn!("Deleting document {id} failed: {err}");
                err.to_string()
            }),
        },
        ClientEvent::CategoryAssigned { id, result } => Msg::CategoryAssigned {
            result: result.map_err(|err| {
                client_warn!("Recategorizing document {id} failed: {err}");
                err.to_string()
            }),
        },
        ClientEvent::Content { id, result } => Msg::PreviewLoaded {
            id,
            result: result.map_err(|err| {
                client_warn!("Loading content for document {id} failed: {err}");
                err.to_string()
            }),
        },
    }
}

fn map_category(category: docshelf_client::Category) -> Category {
    Category {
        id: category.id,
        name: category.name,
    }
}

fn map_document(document: docshelf_client::Document) -> Document {
    Document {
        id: document.id,
        url: document.url,
        title: document.title,
        category_name: document.category_name,
        created: display_date(&document.created_at),
    }
}

fn map_receipt(receipt: docshelf_client::CrawlReceipt) -> CrawlReceipt {
    CrawlReceipt {
        id: receipt.id,
        title: receipt.title,
    }
}

/// Formats a server timestamp as a local date. The server has emitted
/// both RFC 3339 and bare SQL timestamps; anything else passes through.
fn display_date(raw: &str) -> String {
    if let Ok(parsed) = DateTime::parse_from_rfc3339(raw) {
        return parsed.with_timezone(&Local).format("%x").to_string();
    }
    if let Ok(parsed) = NaiveDateTime::parse_from_str(raw, "%Y-%m-%d %H:%M:%S") {
        return parsed
            .and_utc()
            .with_timezone(&Local)
            .format("%x")
            .to_string();
    }
    raw.to_string()
}

fn open_in_browser(url: &str) {
    #[cfg(target_os = "macos")]
    let result = Command::new("open").arg(url).spawn();
    #[cfg(target_os = "windows")]
    let result = Command::new("cmd").args(["/C", "start", url]).spawn();
    #[cfg(not(any(target_os = "macos", target_os = "windows")))]
    let result = Command::new("xdg-open").arg(url).spawn();

    match result {
        Ok(_) => client_info!("Opened {url} in the system browser"),
        Err(err) => client_warn!("Could not open {url}: {err}"),
    }
}
