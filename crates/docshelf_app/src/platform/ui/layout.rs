use ratatui::layout::{Constraint, Layout, Rect};

/// Main screen regions: the filter header, the results table and the
/// one-line status bar.
pub struct ScreenAreas {
    pub header: Rect,
    pub table: Rect,
    pub status: Rect,
}

pub fn screen(area: Rect) -> ScreenAreas {
    let [header, table, status] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Min(1),
        Constraint::Length(1),
    ])
    .areas(area);
    ScreenAreas {
        header,
        table,
        status,
    }
}

/// Header regions: search box, category summary, key hints.
pub fn header(area: Rect) -> (Rect, Rect, Rect) {
    let [search, category, hints] = Layout::horizontal([
        Constraint::Percentage(45),
        Constraint::Percentage(30),
        Constraint::Percentage(25),
    ])
    .areas(area);
    (search, category, hints)
}

/// A centered popup area sized in percent of the screen.
pub fn popup_percent(area: Rect, width: u16, height: u16) -> Rect {
    let [_, horizontal, _] = Layout::horizontal([
        Constraint::Percentage((100 - width) / 2),
        Constraint::Percentage(width),
        Constraint::Percentage((100 - width) / 2),
    ])
    .areas(area);
    let [_, vertical, _] = Layout::vertical([
        Constraint::Percentage((100 - height) / 2),
        Constraint::Percentage(height),
        Constraint::Percentage((100 - height) / 2),
    ])
    .areas(horizontal);
    vertical
}

/// A centered popup area with a fixed height in rows.
pub fn popup_rows(area: Rect, width: u16, rows: u16) -> Rect {
    let wide = popup_percent(area, width, 100);
    let [_, vertical, _] = Layout::vertical([
        Constraint::Fill(1),
        Constraint::Length(rows),
        Constraint::Fill(1),
    ])
    .areas(wide);
    vertical
}
