use crate::interactive_ratatui::constants::LIST_PAGE_JUMP;
use crate::interactive_ratatui::domain::models::ImageItem;
use crate::interactive_ratatui::ui::components::{
    Component,
    view_layout::{ColorScheme, Styles},
};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, Paragraph},
};

const ID_COLUMN_WIDTH: usize = 10;

/// Scrollable list of gallery items, one row per image.
#[derive(Default)]
pub struct ImageList {
    items: Vec<ImageItem>,
    selected_index: usize,
    scroll_offset: usize,
    area: Rect,
    // Screen row of each rendered item with its identifier, for mouse hit-testing
    rendered_rows: Vec<(u16, String)>,
}

impl ImageList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_items(&mut self, items: Vec<ImageItem>) {
        self.items = items;
        if self.selected_index >= self.items.len() {
            self.selected_index = 0;
            self.scroll_offset = 0;
        }
    }

    pub fn set_selected_index(&mut self, index: usize) {
        if index < self.items.len() {
            self.selected_index = index;
        }
    }

    pub fn selected_index(&self) -> usize {
        self.selected_index
    }

    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    pub fn selected_item(&self) -> Option<&ImageItem> {
        self.items.get(self.selected_index)
    }

    /// Resolve a mouse click to the identifier of the row under it.
    pub fn click_at(&self, column: u16, row: u16) -> Option<Message> {
        if !self.area.contains(Position::new(column, row)) {
            return None;
        }
        self.rendered_rows
            .iter()
            .find(|(y, _)| *y == row)
            .map(|(_, id)| Message::ImageClicked(id.clone()))
    }

    fn select(&mut self, index: usize) -> Option<Message> {
        let last = self.items.len().saturating_sub(1);
        let index = index.min(last);
        if self.items.is_empty() || index == self.selected_index {
            return None;
        }
        self.selected_index = index;
        Some(Message::SelectItem(index))
    }

    fn adjust_scroll_offset(&mut self, visible_count: usize) {
        if visible_count == 0 {
            return;
        }
        if self.selected_index < self.scroll_offset {
            self.scroll_offset = self.selected_index;
        } else if self.selected_index >= self.scroll_offset + visible_count {
            self.scroll_offset = self.selected_index + 1 - visible_count;
        }
    }

    fn item_line(item: &ImageItem, width: usize) -> Line<'static> {
        let id = format!("#{:<width$}", item.id.0, width = ID_COLUMN_WIDTH - 1);
        let remaining = width.saturating_sub(ID_COLUMN_WIDTH + 1);
        let tags_width = remaining * 2 / 5;
        let url_width = remaining.saturating_sub(tags_width + 2);

        Line::from(vec![
            Span::styled(format!("{id} "), Styles::dimmed()),
            Span::styled(
                format!("{:<tags_width$}  ", truncate(&item.tags, tags_width)),
                Style::default().fg(ColorScheme::SECONDARY),
            ),
            Span::styled(truncate(&item.webformat_url, url_width), Styles::normal()),
        ])
    }
}

impl Component for ImageList {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        self.area = area;
        self.rendered_rows.clear();

        if self.items.is_empty() {
            let empty = Paragraph::new("No images yet. Type a search term and press Enter.")
                .block(Block::default().title("Images").borders(Borders::ALL))
                .style(Styles::dimmed());
            f.render_widget(empty, area);
            return;
        }

        let visible_count = area.height.saturating_sub(2) as usize;
        self.adjust_scroll_offset(visible_count);
        let start = self.scroll_offset;
        let end = (start + visible_count).min(self.items.len());
        let text_width = area.width.saturating_sub(2) as usize;

        let rows: Vec<ListItem> = (start..end)
            .map(|i| {
                let item = &self.items[i];
                self.rendered_rows
                    .push((area.y + 1 + (i - start) as u16, item.id.to_string()));

                let style = if i == self.selected_index {
                    Styles::selected()
                } else {
                    Style::default()
                };
                ListItem::new(Self::item_line(item, text_width)).style(style)
            })
            .collect();

        let title = format!(
            "Images ({}/{}) - Showing {}-{}",
            self.selected_index + 1,
            self.items.len(),
            start + 1,
            end
        );

        let list = List::new(rows).block(
            Block::default()
                .title(Span::styled(title, Styles::title()))
                .borders(Borders::ALL),
        );
        f.render_widget(list, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Up => self.select(self.selected_index.saturating_sub(1)),
            KeyCode::Down => self.select(self.selected_index + 1),
            KeyCode::Char('p') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(self.selected_index.saturating_sub(1))
            }
            KeyCode::Char('n') if key.modifiers == KeyModifiers::CONTROL => {
                self.select(self.selected_index + 1)
            }
            KeyCode::PageUp => self.select(self.selected_index.saturating_sub(LIST_PAGE_JUMP)),
            KeyCode::PageDown => self.select(self.selected_index + LIST_PAGE_JUMP),
            KeyCode::Home => self.select(0),
            KeyCode::End => self.select(self.items.len().saturating_sub(1)),
            KeyCode::Enter => self
                .selected_item()
                .map(|item| Message::ImageClicked(item.id.to_string())),
            _ => None,
        }
    }
}

pub fn truncate(text: &str, max_width: usize) -> String {
    let text = text.replace('\n', " ");
    let count = text.chars().count();

    if count <= max_width {
        text
    } else if max_width <= 3 {
        text.chars().take(max_width).collect()
    } else {
        let truncated: String = text.chars().take(max_width - 3).collect();
        format!("{truncated}...")
    }
}
