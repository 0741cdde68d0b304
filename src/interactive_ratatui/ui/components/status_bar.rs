use crate::interactive_ratatui::domain::models::FetchStatus;
use crate::interactive_ratatui::ui::components::loader::Loader;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::events::Message;
use ratatui::{
    Frame,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::Paragraph,
};

const LOAD_MORE_LABEL: &str = "[ Load more ]";

/// Footer below the gallery: loader for follow-up pages, the load-more control,
/// the retry hint after a failure, and key hints.
#[derive(Default)]
pub struct StatusBar {
    status: Option<FetchStatus>,
    load_more_visible: bool,
    has_items: bool,
    button_area: Option<Rect>,
}

impl StatusBar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_status(&mut self, status: FetchStatus) {
        self.status = Some(status);
    }

    pub fn set_load_more_visible(&mut self, visible: bool) {
        self.load_more_visible = visible;
    }

    pub fn set_has_items(&mut self, has_items: bool) {
        self.has_items = has_items;
    }

    /// Clicking the load-more control requests the next page.
    pub fn click_at(&self, column: u16, row: u16) -> Option<Message> {
        self.button_area
            .filter(|area| area.contains(Position::new(column, row)))
            .map(|_| Message::LoadMore)
    }

    pub fn render(&mut self, f: &mut Frame, area: Rect, loader: &Loader) {
        self.button_area = None;

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([Constraint::Length(1), Constraint::Length(1)])
            .split(area);

        let control = match self.status {
            Some(FetchStatus::Pending) if self.has_items => loader.line("Loading more images..."),
            Some(FetchStatus::Rejected) => Line::from(vec![
                Span::styled("Request failed. ", Styles::error()),
                Span::styled("Ctrl+R", Styles::action_key()),
                Span::raw(": Retry"),
            ]),
            _ if self.load_more_visible => {
                let width = LOAD_MORE_LABEL.chars().count() as u16;
                let row = chunks[0];
                let x = row.x + row.width.saturating_sub(width) / 2;
                self.button_area = Some(Rect::new(x, row.y, width.min(row.width), 1));
                Line::from(Span::styled(LOAD_MORE_LABEL, Styles::success()))
            }
            _ => Line::from(""),
        };

        f.render_widget(
            Paragraph::new(control).alignment(Alignment::Center),
            chunks[0],
        );

        let hints = "Enter: Search/Open | ↑/↓: Navigate | Ctrl+L: Load more | Ctrl+R: Retry | Esc: Exit | ?: Help";
        f.render_widget(
            Paragraph::new(hints)
                .style(Styles::dimmed())
                .alignment(Alignment::Center),
            chunks[1],
        );
    }
}
