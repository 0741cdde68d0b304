use crate::interactive_ratatui::ui::components::{Component, is_exit_prompt};
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

/// Search input. Editing stays local; only Enter emits a message.
#[derive(Default)]
pub struct SearchBar {
    input: String,
    cursor_position: usize,
    active_query: Option<String>,
    is_searching: bool,
    message: Option<String>,
}

impl SearchBar {
    pub fn new() -> Self {
        Self {
            input: String::new(),
            cursor_position: 0,
            active_query: None,
            is_searching: false,
            message: None,
        }
    }

    pub fn set_input(&mut self, input: String) {
        self.input = input;
        self.cursor_position = self.input.chars().count();
    }

    pub fn set_active_query(&mut self, query: Option<String>) {
        self.active_query = query;
    }

    pub fn set_searching(&mut self, is_searching: bool) {
        self.is_searching = is_searching;
    }

    pub fn set_message(&mut self, message: Option<String>) {
        self.message = message;
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    #[allow(dead_code)]
    pub fn cursor_position(&self) -> usize {
        self.cursor_position
    }

    /// True when Enter would start a new search rather than act on the gallery.
    pub fn has_pending_submit(&self) -> bool {
        let trimmed = self.input.trim();
        !trimmed.is_empty() && self.active_query.as_deref() != Some(trimmed)
    }

    fn byte_offset(&self, char_pos: usize) -> usize {
        self.input
            .chars()
            .take(char_pos)
            .map(|c| c.len_utf8())
            .sum::<usize>()
    }

    /// Find the previous word boundary from the given position
    fn find_prev_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.input.chars().collect();
        let mut pos = from;

        // Skip whitespace backwards
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| c.is_whitespace()) {
            pos -= 1;
        }

        // Skip non-whitespace backwards
        while pos > 0 && chars.get(pos - 1).is_some_and(|c| !c.is_whitespace()) {
            pos -= 1;
        }

        pos
    }

    /// Find the next word boundary from the given position
    fn find_next_word_boundary(&self, from: usize) -> usize {
        let chars: Vec<char> = self.input.chars().collect();
        let mut pos = from;
        let len = chars.len();

        while pos < len && chars.get(pos).is_some_and(|c| !c.is_whitespace()) {
            pos += 1;
        }

        while pos < len && chars.get(pos).is_some_and(|c| c.is_whitespace()) {
            pos += 1;
        }

        pos
    }

    /// Delete chars in `start..end` and move the cursor to `start`
    fn delete_range(&mut self, start: usize, end: usize) -> bool {
        if start >= end || end > self.input.chars().count() {
            return false;
        }

        let byte_start = self.byte_offset(start);
        let byte_end = self.byte_offset(end);
        self.input.drain(byte_start..byte_end);
        self.cursor_position = start;
        true
    }
}

impl Component for SearchBar {
    fn render(&mut self, f: &mut Frame, area: Rect) {
        let input_text = if self.cursor_position < self.input.chars().count() {
            let before: String = self.input.chars().take(self.cursor_position).collect();
            let mut after = self.input.chars().skip(self.cursor_position);
            let under_cursor = after.next().unwrap_or(' ').to_string();
            let rest: String = after.collect();

            vec![
                Span::raw(before),
                Span::styled(
                    under_cursor,
                    Style::default().bg(Color::White).fg(Color::Black),
                ),
                Span::raw(rest),
            ]
        } else {
            vec![
                Span::raw(self.input.as_str()),
                Span::styled(" ", Style::default().bg(Color::White).fg(Color::Black)),
            ]
        };

        let mut title = "Search images".to_string();
        if let Some(query) = &self.active_query {
            title.push_str(&format!(" [showing: {query}]"));
        }
        if self.is_searching {
            title.push_str(" - [searching...]");
        }
        if let Some(msg) = &self.message {
            title.push_str(&format!(" - {msg}"));
        }

        let border_style = if is_exit_prompt(&self.message) {
            Style::default().fg(Color::Red)
        } else {
            Style::default()
        };

        let input = Paragraph::new(Line::from(input_text))
            .block(
                Block::default()
                    .title(title)
                    .borders(Borders::ALL)
                    .border_style(border_style),
            )
            .style(Style::default().fg(Color::Yellow));

        f.render_widget(input, area);
    }

    fn handle_key(&mut self, key: KeyEvent) -> Option<Message> {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            match key.code {
                // Ctrl+A - Move cursor to beginning of line
                KeyCode::Char('a') => self.cursor_position = 0,
                // Ctrl+E - Move cursor to end of line
                KeyCode::Char('e') => self.cursor_position = self.input.chars().count(),
                // Ctrl+B - Move cursor backward one character
                KeyCode::Char('b') => self.cursor_position = self.cursor_position.saturating_sub(1),
                // Ctrl+F - Move cursor forward one character
                KeyCode::Char('f') => {
                    if self.cursor_position < self.input.chars().count() {
                        self.cursor_position += 1;
                    }
                }
                // Ctrl+H - Delete character before cursor
                KeyCode::Char('h') => {
                    if self.cursor_position > 0 {
                        self.delete_range(self.cursor_position - 1, self.cursor_position);
                    }
                }
                // Ctrl+D - Delete character under cursor
                KeyCode::Char('d') => {
                    self.delete_range(self.cursor_position, self.cursor_position + 1);
                }
                // Ctrl+W - Delete word before cursor
                KeyCode::Char('w') => {
                    let new_pos = self.find_prev_word_boundary(self.cursor_position);
                    self.delete_range(new_pos, self.cursor_position);
                }
                // Ctrl+U - Delete from cursor to beginning of line
                KeyCode::Char('u') => {
                    self.delete_range(0, self.cursor_position);
                }
                // Ctrl+K - Delete from cursor to end of line
                KeyCode::Char('k') => {
                    let len = self.input.chars().count();
                    self.delete_range(self.cursor_position, len);
                }
                _ => {}
            }
            return None;
        }

        if key.modifiers.contains(KeyModifiers::ALT) {
            match key.code {
                // Alt+B - Move cursor backward one word
                KeyCode::Char('b') => {
                    self.cursor_position = self.find_prev_word_boundary(self.cursor_position);
                }
                // Alt+F - Move cursor forward one word
                KeyCode::Char('f') => {
                    self.cursor_position = self.find_next_word_boundary(self.cursor_position);
                }
                _ => {}
            }
            return None;
        }

        match key.code {
            KeyCode::Char(c) => {
                let byte_pos = self.byte_offset(self.cursor_position);
                self.input.insert(byte_pos, c);
                self.cursor_position += 1;
                None
            }
            KeyCode::Backspace => {
                if self.cursor_position > 0 {
                    self.delete_range(self.cursor_position - 1, self.cursor_position);
                }
                None
            }
            KeyCode::Delete => {
                self.delete_range(self.cursor_position, self.cursor_position + 1);
                None
            }
            KeyCode::Left => {
                self.cursor_position = self.cursor_position.saturating_sub(1);
                None
            }
            KeyCode::Right => {
                if self.cursor_position < self.input.chars().count() {
                    self.cursor_position += 1;
                }
                None
            }
            KeyCode::Home => {
                self.cursor_position = 0;
                None
            }
            KeyCode::End => {
                self.cursor_position = self.input.chars().count();
                None
            }
            KeyCode::Enter => {
                let query = self.input.trim();
                if query.is_empty() {
                    None
                } else {
                    Some(Message::SubmitSearch(query.to_string()))
                }
            }
            _ => None,
        }
    }
}
