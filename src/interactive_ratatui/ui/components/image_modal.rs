use crate::interactive_ratatui::domain::models::ImageItem;
use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::{Styles, dialog_area};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
};

/// Preview of the focused image: its tags and full-resolution URL.
#[derive(Default)]
pub struct ImageModal {
    large_image_url: String,
    item: Option<ImageItem>,
}

impl ImageModal {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_image(&mut self, large_image_url: String, item: Option<ImageItem>) {
        self.large_image_url = large_image_url;
        self.item = item;
    }

    fn lines(&self) -> Vec<Line<'static>> {
        let mut lines = Vec::new();

        if let Some(item) = &self.item {
            lines.push(Line::from(vec![
                Span::styled("Tags:    ", Styles::label()),
                Span::raw(item.tags.clone()),
            ]));
            lines.push(Line::from(vec![
                Span::styled("Preview: ", Styles::label()),
                Span::styled(item.webformat_url.clone(), Styles::dimmed()),
            ]));
        }
        lines.push(Line::from(vec![
            Span::styled("Full:    ", Styles::label()),
            Span::styled(
                self.large_image_url.clone(),
                Style::default().fg(Color::Cyan),
            ),
        ]));
        lines.push(Line::from(""));
        lines.push(Line::from(vec![
            Span::styled("c", Styles::action_key()),
            Span::raw(": Copy URL  "),
            Span::styled("Esc/Enter", Styles::action_key()),
            Span::raw(": Close"),
        ]));
        lines
    }
}

impl Component for ImageModal {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let lines = self.lines();
        // Long URLs wrap, leave room for them
        let dialog = dialog_area(area, lines.len() as u16 + 6);
        f.render_widget(Clear, dialog);

        let title = match &self.item {
            Some(item) => format!(" Image #{} ", item.id),
            None => " Image ".to_string(),
        };

        let modal = Paragraph::new(lines)
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .alignment(Alignment::Left)
            .wrap(Wrap { trim: false });

        f.render_widget(modal, dialog);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        match key.code {
            KeyCode::Esc | KeyCode::Enter | KeyCode::Backspace | KeyCode::Char('q') => {
                Some(Message::CloseModal)
            }
            KeyCode::Char('c') => Some(Message::CopyFocusedUrl),
            _ => None,
        }
    }
}
