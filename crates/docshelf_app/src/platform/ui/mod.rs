pub mod input;
pub mod layout;
pub mod render;
pub mod theme;

use input::TextField;

/// Which main-screen control has keyboard focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Search,
    Table,
}

/// Presentation-only state owned by the shell: focus, input buffers,
/// cursors and scroll offsets. Everything with meaning to the server
/// lives in the core state instead.
pub struct UiState {
    pub focus: Focus,
    pub search: TextField,
    pub crawl_url: TextField,
    pub category_name: TextField,
    pub table_row: usize,
    pub selector_open: bool,
    pub selector_cursor: usize,
    pub picker_cursor: usize,
    pub preview_scroll: u16,
}

impl UiState {
    pub fn new() -> Self {
        Self {
            focus: Focus::Table,
            search: TextField::new(),
            crawl_url: TextField::new(),
            category_name: TextField::new(),
            table_row: 0,
            selector_open: false,
            selector_cursor: 0,
            picker_cursor: 0,
            preview_scroll: 0,
        }
    }
}
