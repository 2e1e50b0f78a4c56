use std::io;
use std::sync::mpsc;
use std::thread;
use std::time::Duration;

use client_logging::client_info;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use crossterm::terminal::{
    disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen,
};
use crossterm::ExecutableCommand;
use docshelf_client::{ClientHandle, ClientSettings};
use docshelf_core::{update, AppState, AppViewModel, DocumentId, Modal, Msg};
use ratatui::backend::CrosstermBackend;
use ratatui::Terminal;

use super::effects::EffectRunner;
use super::logging::{self, LogDestination};
use super::ui::{self, input::TextField, Focus, UiState};

pub fn run_app() -> anyhow::Result<()> {
    logging::initialize(LogDestination::File);

    let mut settings = ClientSettings::default();
    if let Some(base) = std::env::args().nth(1) {
        settings.base_url = base;
    }
    client_info!("Using document server at {}", settings.base_url);

    let handle = ClientHandle::new(&settings)?;
    let (msg_tx, msg_rx) = mpsc::channel::<Msg>();
    let runner = EffectRunner::new(handle, msg_tx.clone());

    // Background tick to age notices and pace redraws.
    thread::spawn(move || {
        let interval = Duration::from_millis(75);
        while msg_tx.send(Msg::Tick).is_ok() {
            thread::sleep(interval);
        }
    });

    enable_raw_mode()?;
    io::stdout().execute(EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(io::stdout());
    let mut terminal = Terminal::new(backend)?;

    let mut shell = Shell::new(runner, msg_rx);
    let result = shell.run(&mut terminal);

    disable_raw_mode()?;
    io::stdout().execute(LeaveAlternateScreen)?;
    result
}

struct Shell {
    state: AppState,
    ui: UiState,
    runner: EffectRunner,
    msg_rx: mpsc::Receiver<Msg>,
}

enum EditOutcome {
    TextChanged,
    CursorMoved,
    Ignored,
}

impl Shell {
    fn new(runner: EffectRunner, msg_rx: mpsc::Receiver<Msg>) -> Self {
        Self {
            state: AppState::new(),
            ui: UiState::new(),
            runner,
            msg_rx,
        }
    }

    fn run(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        self.dispatch(Msg::Started);
        let mut view = self.state.view();
        let _ = self.state.consume_dirty();
        let mut redraw = true;

        loop {
            if redraw {
                terminal.draw(|frame| ui::render::draw(frame, &view, &self.ui))?;
                redraw = false;
            }

            // Terminal input, with a timeout so queued messages still drain.
            if event::poll(Duration::from_millis(25))? {
                let input = event::read()?;
                if self.handle_input(&input, &view) {
                    redraw = true;
                }
            }

            // Messages from the tick thread and the shell itself.
            while let Ok(msg) = self.msg_rx.try_recv() {
                self.dispatch(msg);
            }
            // Completions from the API worker.
            for msg in self.runner.poll_events() {
                self.dispatch(msg);
            }

            if self.state.consume_dirty() {
                view = self.state.view();
                self.sync_inputs(&view);
                redraw = true;
            }
            if !view.running {
                return Ok(());
            }
        }
    }

    /// Runs a message through the pure update and hands the resulting
    /// effects to the runner.
    fn dispatch(&mut self, msg: Msg) {
        let state = std::mem::take(&mut self.state);
        let (state, effects) = update(state, msg);
        self.state = state;
        if !effects.is_empty() {
            self.runner.enqueue(effects);
        }
    }

    /// Keeps the input buffers aligned with the core state after it
    /// clears or restores text, and clamps the table selection.
    fn sync_inputs(&mut self, view: &AppViewModel) {
        if self.ui.search.text() != view.search {
            self.ui.search.set_text(&view.search);
        }
        if self.ui.crawl_url.text() != view.crawl_url {
            self.ui.crawl_url.set_text(&view.crawl_url);
        }
        if self.ui.category_name.text() != view.category_name {
            self.ui.category_name.set_text(&view.category_name);
        }
        if view.rows.is_empty() {
            self.ui.table_row = 0;
        } else {
            self.ui.table_row = self.ui.table_row.min(view.rows.len() - 1);
        }
    }

    /// Maps terminal input to messages or presentation changes.
    /// Returns true when a redraw is needed for a purely visual change.
    fn handle_input(&mut self, input: &Event, view: &AppViewModel) -> bool {
        let Event::Key(KeyEvent {
            code,
            modifiers,
            kind: KeyEventKind::Press,
            ..
        }) = input
        else {
            return false;
        };
        let (code, modifiers) = (*code, *modifiers);

        if modifiers.contains(KeyModifiers::CONTROL) && code == KeyCode::Char('c') {
            self.dispatch(Msg::QuitRequested);
            return true;
        }

        if let Some(modal) = view.modal.clone() {
            return self.handle_modal_input(&modal, code, view);
        }
        if self.ui.selector_open {
            return self.handle_selector_input(code, view);
        }
        match self.ui.focus {
            Focus::Search => self.handle_search_input(code),
            Focus::Table => self.handle_table_input(code, view),
        }
    }

    fn handle_search_input(&mut self, code: KeyCode) -> bool {
        match code {
            KeyCode::Esc | KeyCode::Tab => {
                self.ui.focus = Focus::Table;
                true
            }
            KeyCode::Enter => {
                self.dispatch(Msg::SearchSubmitted);
                true
            }
            code => match apply_edit(&mut self.ui.search, code) {
                EditOutcome::TextChanged => {
                    let text = self.ui.search.text().to_string();
                    self.dispatch(Msg::SearchChanged(text));
                    true
                }
                EditOutcome::CursorMoved => true,
                EditOutcome::Ignored => false,
            },
        }
    }

    fn handle_table_input(&mut self, code: KeyCode, view: &AppViewModel) -> bool {
        match code {
            KeyCode::Char('/') => {
                self.ui.focus = Focus::Search;
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.ui.table_row = self.ui.table_row.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = view.rows.len().saturating_sub(1);
                self.ui.table_row = (self.ui.table_row + 1).min(last);
                true
            }
            KeyCode::Char('c') => {
                self.ui.selector_open = true;
                self.ui.selector_cursor = view
                    .selector
                    .iter()
                    .position(|item| item.selected)
                    .unwrap_or(0);
                true
            }
            KeyCode::Char('n') => {
                self.dispatch(Msg::NewDocumentRequested);
                true
            }
            KeyCode::Char('d') => {
                if let Some(id) = self.selected_id(view) {
                    self.dispatch(Msg::DeleteRequested { id });
                }
                true
            }
            KeyCode::Char('m') => {
                if let Some(id) = self.selected_id(view) {
                    self.ui.picker_cursor = 0;
                    self.dispatch(Msg::RecategorizeRequested { id });
                }
                true
            }
            KeyCode::Enter | KeyCode::Char('p') => {
                if let Some(id) = self.selected_id(view) {
                    self.ui.preview_scroll = 0;
                    self.dispatch(Msg::PreviewRequested { id });
                }
                true
            }
            KeyCode::Char('o') => {
                if let Some(id) = self.selected_id(view) {
                    self.dispatch(Msg::OpenOriginalRequested { id });
                }
                true
            }
            KeyCode::Char('v') => {
                if let Some(id) = self.selected_id(view) {
                    self.dispatch(Msg::OpenRenderedRequested { id });
                }
                true
            }
            KeyCode::Char('q') => {
                self.dispatch(Msg::QuitRequested);
                true
            }
            _ => false,
        }
    }

    fn handle_selector_input(&mut self, code: KeyCode, view: &AppViewModel) -> bool {
        match code {
            KeyCode::Esc => {
                self.ui.selector_open = false;
                true
            }
            KeyCode::Up | KeyCode::Char('k') => {
                self.ui.selector_cursor = self.ui.selector_cursor.saturating_sub(1);
                true
            }
            KeyCode::Down | KeyCode::Char('j') => {
                let last = view.selector.len().saturating_sub(1);
                self.ui.selector_cursor = (self.ui.selector_cursor + 1).min(last);
                true
            }
            KeyCode::Enter => {
                if let Some(item) = view.selector.get(self.ui.selector_cursor) {
                    let entry = item.entry;
                    self.ui.selector_open = false;
                    self.dispatch(Msg::SelectorChosen(entry));
                }
                true
            }
            _ => false,
        }
    }

    fn handle_modal_input(&mut self, modal: &Modal, code: KeyCode, view: &AppViewModel) -> bool {
        match modal {
            Modal::NewDocument => match code {
                KeyCode::Esc => {
                    self.dispatch(Msg::ModalDismissed);
                    true
                }
                KeyCode::Enter => {
                    self.dispatch(Msg::CrawlSubmitted);
                    true
                }
                code => match apply_edit(&mut self.ui.crawl_url, code) {
                    EditOutcome::TextChanged => {
                        let text = self.ui.crawl_url.text().to_string();
                        self.dispatch(Msg::CrawlUrlChanged(text));
                        true
                    }
                    EditOutcome::CursorMoved => true,
                    EditOutcome::Ignored => false,
                },
            },
            Modal::NewCategory => match code {
                KeyCode::Esc => {
                    self.dispatch(Msg::ModalDismissed);
                    true
                }
                KeyCode::Enter => {
                    self.dispatch(Msg::CategorySubmitted);
                    true
                }
                code => match apply_edit(&mut self.ui.category_name, code) {
                    EditOutcome::TextChanged => {
                        let text = self.ui.category_name.text().to_string();
                        self.dispatch(Msg::CategoryNameChanged(text));
                        true
                    }
                    EditOutcome::CursorMoved => true,
                    EditOutcome::Ignored => false,
                },
            },
            Modal::ConfirmDelete { .. } => match code {
                KeyCode::Enter | KeyCode::Char('y') => {
                    self.dispatch(Msg::DeleteConfirmed);
                    true
                }
                KeyCode::Esc | KeyCode::Char('n') => {
                    self.dispatch(Msg::ModalDismissed);
                    true
                }
                _ => false,
            },
            Modal::PickCategory { .. } => {
                let entries = view.picker_entries();
                match code {
                    KeyCode::Esc => {
                        self.dispatch(Msg::ModalDismissed);
                        true
                    }
                    KeyCode::Up | KeyCode::Char('k') => {
                        self.ui.picker_cursor = self.ui.picker_cursor.saturating_sub(1);
                        true
                    }
                    KeyCode::Down | KeyCode::Char('j') => {
                        let last = entries.len().saturating_sub(1);
                        self.ui.picker_cursor = (self.ui.picker_cursor + 1).min(last);
                        true
                    }
                    KeyCode::Enter => {
                        if let Some((id, _)) = entries.get(self.ui.picker_cursor) {
                            self.dispatch(Msg::CategoryPicked(*id));
                        }
                        true
                    }
                    _ => false,
                }
            }
            Modal::Preview { .. } => match code {
                KeyCode::Esc | KeyCode::Char('q') => {
                    self.ui.preview_scroll = 0;
                    self.dispatch(Msg::ModalDismissed);
                    true
                }
                KeyCode::Up | KeyCode::Char('k') => {
                    self.ui.preview_scroll = self.ui.preview_scroll.saturating_sub(1);
                    true
                }
                KeyCode::Down | KeyCode::Char('j') => {
                    self.ui.preview_scroll = self.ui.preview_scroll.saturating_add(1);
                    true
                }
                KeyCode::PageUp => {
                    self.ui.preview_scroll = self.ui.preview_scroll.saturating_sub(10);
                    true
                }
                KeyCode::PageDown => {
                    self.ui.preview_scroll = self.ui.preview_scroll.saturating_add(10);
                    true
                }
                KeyCode::Home => {
                    self.ui.preview_scroll = 0;
                    true
                }
                _ => false,
            },
        }
    }

    fn selected_id(&self, view: &AppViewModel) -> Option<DocumentId> {
        view.rows.get(self.ui.table_row).map(|row| row.id)
    }
}

fn apply_edit(field: &mut TextField, code: KeyCode) -> EditOutcome {
    match code {
        KeyCode::Char(c) => {
            field.insert_char(c);
            EditOutcome::TextChanged
        }
        KeyCode::Backspace => {
            field.backspace();
            EditOutcome::TextChanged
        }
        KeyCode::Left => {
            field.move_left();
            EditOutcome::CursorMoved
        }
        KeyCode::Right => {
            field.move_right();
            EditOutcome::CursorMoved
        }
        KeyCode::Home => {
            field.move_home();
            EditOutcome::CursorMoved
        }
        KeyCode::End => {
            field.move_end();
            EditOutcome::CursorMoved
        }
        _ => EditOutcome::Ignored,
    }
}
