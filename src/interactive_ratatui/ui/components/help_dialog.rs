use crate::interactive_ratatui::ui::components::Component;
use crate::interactive_ratatui::ui::components::view_layout::dialog_area;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub struct HelpDialog;

impl Default for HelpDialog {
    fn default() -> Self {
        Self::new()
    }
}

impl HelpDialog {
    pub fn new() -> Self {
        Self
    }

    fn section(title: &'static str) -> Line<'static> {
        Line::from(vec![Span::styled(
            title,
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        )])
    }

    fn get_help_text() -> Vec<Line<'static>> {
        vec![
            Line::from(vec![Span::styled(
                "Image Gallery - Interactive Mode",
                Style::default()
                    .fg(Color::Cyan)
                    .add_modifier(Modifier::BOLD),
            )]),
            Line::from(""),
            Self::section("Gallery:"),
            Line::from("  type + Enter  - Search for images"),
            Line::from("  ↑/↓           - Navigate images"),
            Line::from("  PageUp/Down   - Jump 10 images"),
            Line::from("  Ctrl+Home/End - First/last image"),
            Line::from("  Enter         - Open selected image (when the search is unchanged)"),
            Line::from("  Click         - Open clicked image"),
            Line::from("  Ctrl+L        - Load more images"),
            Line::from("  Ctrl+R        - Retry a failed request"),
            Line::from("  Esc           - Quit"),
            Line::from("  ?             - Show this help"),
            Line::from(""),
            Self::section("Image Preview:"),
            Line::from("  c             - Copy full-size URL to clipboard"),
            Line::from("  Esc/Enter     - Close preview"),
            Line::from(""),
            Line::from("Press any key to close this help..."),
        ]
    }
}

impl Component for HelpDialog {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let help_text = Self::get_help_text();
        let dialog = dialog_area(area, help_text.len() as u16 + 2);

        // Clear the area behind the dialog
        f.render_widget(Clear, dialog);

        let help = Paragraph::new(help_text)
            .block(
                Block::default()
                    .title(" Help ")
                    .borders(Borders::ALL)
                    .border_style(Style::default().fg(Color::Cyan)),
            )
            .style(Style::default().fg(Color::White))
            .alignment(Alignment::Left);

        f.render_widget(help, dialog);
    }

    fn handle_key(&mut self, _key: KeyEvent) -> Option<Message> {
        // Any key closes the help dialog
        Some(Message::CloseHelp)
    }
}
