use ratatui::layout::{Constraint, Layout, Rect};
use ratatui::style::{Modifier, Style};
use ratatui::text::Line;
use ratatui::widgets::{
    Block, Borders, Cell, Clear, List, ListItem, ListState, Paragraph, Row, Table, TableState,
    Wrap,
};
use ratatui::Frame;

use docshelf_core::{
    AppViewModel, CrawlPhase, Modal, NoticeLevel, SelectorEntry, StatusKind, EMPTY_RESULTS_LABEL,
    PLACEHOLDER_LABEL,
};

use super::input::TextField;
use super::{layout, theme, Focus, UiState};

pub fn draw(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let areas = layout::screen(frame.area());
    let overlay_open = view.modal.is_some() || ui.selector_open;

    draw_header(frame, areas.header, view, ui, overlay_open);
    draw_table(frame, areas.table, view, ui, overlay_open);
    draw_status_bar(frame, areas.status, view);

    if ui.selector_open {
        draw_selector(frame, view, ui);
    }
    match &view.modal {
        Some(Modal::NewDocument) => draw_new_document(frame, view, ui),
        Some(Modal::NewCategory) => draw_new_category(frame, ui),
        Some(Modal::ConfirmDelete { title, .. }) => draw_confirm_delete(frame, title),
        Some(Modal::PickCategory { .. }) => draw_picker(frame, view, ui),
        Some(Modal::Preview { title, content }) => draw_preview(frame, title, content, ui),
        None => {}
    }
}

fn draw_header(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    ui: &UiState,
    overlay_open: bool,
) {
    let (search_area, category_area, hints_area) = layout::header(area);

    let search_focused = ui.focus == Focus::Search && !overlay_open;
    let search = Paragraph::new(ui.search.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Search ")
            .border_style(theme::border(search_focused)),
    );
    frame.render_widget(search, search_area);
    if search_focused {
        set_input_cursor(frame, search_area, &ui.search);
    }

    let selected_label = view
        .selector
        .iter()
        .find(|item| item.selected)
        .map(|item| item.label.as_str())
        .unwrap_or(PLACEHOLDER_LABEL);
    let category_style = if view.crawl_enabled {
        Style::default().fg(theme::TEXT)
    } else {
        Style::default().fg(theme::TEXT_DIM)
    };
    let category = Paragraph::new(selected_label).style(category_style).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Category (c) ")
            .border_style(theme::border(false)),
    );
    frame.render_widget(category, category_area);

    let hints = Paragraph::new("n add  d delete  m move  p preview")
        .style(Style::default().fg(theme::TEXT_MUTED))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme::border(false)),
        );
    frame.render_widget(hints, hints_area);
}

fn draw_table(
    frame: &mut Frame,
    area: Rect,
    view: &AppViewModel,
    ui: &UiState,
    overlay_open: bool,
) {
    let header = Row::new(
        ["Title", "Category", "Added", "URL"]
            .iter()
            .map(|h| Cell::from(*h).style(theme::title())),
    )
    .height(1);

    let rows: Vec<Row> = if view.no_documents {
        // The empty state is a single, visually distinct placeholder row.
        vec![Row::new(vec![Cell::from(EMPTY_RESULTS_LABEL).style(
            Style::default()
                .fg(theme::TEXT_DIM)
                .add_modifier(Modifier::ITALIC),
        )])]
    } else {
        view.rows
            .iter()
            .map(|row| {
                Row::new(vec![
                    Cell::from(row.title.clone()),
                    Cell::from(row.category.clone()),
                    Cell::from(row.created.clone()),
                    Cell::from(row.url.clone())
                        .style(Style::default().fg(theme::TEXT_MUTED)),
                ])
            })
            .collect()
    };

    let table_focused = ui.focus == Focus::Table && !overlay_open;
    let table = Table::new(
        rows,
        [
            Constraint::Percentage(35),
            Constraint::Percentage(15),
            Constraint::Percentage(12),
            Constraint::Percentage(38),
        ],
    )
    .header(header)
    .block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Documents ")
            .border_style(theme::border(table_focused)),
    )
    .row_highlight_style(Style::default().add_modifier(Modifier::REVERSED))
    .highlight_symbol(">> ");

    let mut table_state = TableState::default();
    if !view.no_documents {
        table_state.select(Some(ui.table_row.min(view.rows.len().saturating_sub(1))));
    }
    frame.render_stateful_widget(table, area, &mut table_state);
}

fn draw_status_bar(frame: &mut Frame, area: Rect, view: &AppViewModel) {
    let line = match view.notices.last() {
        Some(notice) => {
            let color = match notice.level {
                NoticeLevel::Info => theme::INFO,
                NoticeLevel::Error => theme::ERROR,
            };
            Line::styled(notice.text.clone(), Style::default().fg(color))
        }
        None => Line::styled(
            format!(
                "/ search   c category   q quit   {} document(s)",
                view.rows.len()
            ),
            Style::default().fg(theme::TEXT_MUTED),
        ),
    };
    frame.render_widget(Paragraph::new(line), area);
}

fn draw_selector(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let rows = (view.selector.len() as u16).saturating_add(2);
    let area = layout::popup_rows(frame.area(), 40, rows);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = view
        .selector
        .iter()
        .map(|item| {
            let marker = if item.selected { "• " } else { "  " };
            let style = match item.entry {
                SelectorEntry::AddNew => Style::default().fg(theme::PRIMARY),
                SelectorEntry::Placeholder => Style::default().fg(theme::TEXT_DIM),
                SelectorEntry::Category(_) => Style::default().fg(theme::TEXT),
            };
            ListItem::new(format!("{marker}{}", item.label)).style(style)
        })
        .collect();

    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Category ")
                .border_style(theme::border(true)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(ui.selector_cursor.min(view.selector.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_new_document(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let area = layout::popup_rows(frame.area(), 60, 8);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" Add Document ")
        .border_style(theme::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [url_area, status_area, hint_area] = Layout::vertical([
        Constraint::Length(3),
        Constraint::Length(1),
        Constraint::Length(1),
    ])
    .areas(inner);

    let url = Paragraph::new(ui.crawl_url.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" URL ")
            .border_style(theme::border(view.crawl_phase == CrawlPhase::Idle)),
    );
    frame.render_widget(url, url_area);
    if view.crawl_phase == CrawlPhase::Idle {
        set_input_cursor(frame, url_area, &ui.crawl_url);
    }

    if let Some(status) = &view.crawl_status {
        let color = match status.kind {
            StatusKind::Info => theme::INFO,
            StatusKind::Success => theme::SUCCESS,
            StatusKind::Error => theme::ERROR,
        };
        frame.render_widget(
            Paragraph::new(status.text.clone()).style(Style::default().fg(color)),
            status_area,
        );
    }

    let hint = if view.crawl_phase == CrawlPhase::Submitting {
        "Crawling..."
    } else {
        "Enter: submit   Esc: close"
    };
    frame.render_widget(
        Paragraph::new(hint).style(Style::default().fg(theme::TEXT_MUTED)),
        hint_area,
    );
}

fn draw_new_category(frame: &mut Frame, ui: &UiState) {
    let area = layout::popup_rows(frame.area(), 50, 7);
    frame.render_widget(Clear, area);

    let block = Block::default()
        .borders(Borders::ALL)
        .title(" New Category ")
        .border_style(theme::border(true));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let [name_area, hint_area] =
        Layout::vertical([Constraint::Length(3), Constraint::Length(1)]).areas(inner);

    let name = Paragraph::new(ui.category_name.text()).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Name ")
            .border_style(theme::border(true)),
    );
    frame.render_widget(name, name_area);
    set_input_cursor(frame, name_area, &ui.category_name);

    frame.render_widget(
        Paragraph::new("Enter: create   Esc: close")
            .style(Style::default().fg(theme::TEXT_MUTED)),
        hint_area,
    );
}

fn draw_confirm_delete(frame: &mut Frame, title: &str) {
    let area = layout::popup_rows(frame.area(), 50, 5);
    frame.render_widget(Clear, area);

    let lines = vec![
        Line::raw(format!("Delete \"{title}\"?")),
        Line::raw(""),
        Line::styled(
            "y/Enter: delete   n/Esc: keep",
            Style::default().fg(theme::TEXT_MUTED),
        ),
    ];
    let confirm = Paragraph::new(lines).wrap(Wrap { trim: false }).block(
        Block::default()
            .borders(Borders::ALL)
            .title(" Confirm ")
            .border_style(Style::default().fg(theme::ERROR)),
    );
    frame.render_widget(confirm, area);
}

fn draw_picker(frame: &mut Frame, view: &AppViewModel, ui: &UiState) {
    let entries = view.picker_entries();
    let rows = (entries.len() as u16).saturating_add(2);
    let area = layout::popup_rows(frame.area(), 40, rows);
    frame.render_widget(Clear, area);

    let items: Vec<ListItem> = entries
        .iter()
        .map(|(_, name)| ListItem::new(name.clone()))
        .collect();
    let list = List::new(items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Move to ")
                .border_style(theme::border(true)),
        )
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED));

    let mut state = ListState::default();
    state.select(Some(ui.picker_cursor.min(entries.len().saturating_sub(1))));
    frame.render_stateful_widget(list, area, &mut state);
}

fn draw_preview(frame: &mut Frame, title: &str, content: &str, ui: &UiState) {
    let area = layout::popup_percent(frame.area(), 80, 80);
    frame.render_widget(Clear, area);

    let preview = Paragraph::new(content.to_string())
        .wrap(Wrap { trim: false })
        .scroll((ui.preview_scroll, 0))
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(format!(" {title} "))
                .title_bottom(" Up/Down: scroll   Esc: close ")
                .border_style(theme::border(true)),
        );
    frame.render_widget(preview, area);
}

/// Places the terminal cursor inside a bordered single-line input.
fn set_input_cursor(frame: &mut Frame, area: Rect, field: &TextField) {
    let offset = field.text()[..field.cursor_position()].chars().count() as u16;
    let max = area.width.saturating_sub(2);
    frame.set_cursor_position((area.x + 1 + offset.min(max), area.y + 1));
}
