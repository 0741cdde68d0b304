pub mod help_dialog;
pub mod image_list;
pub mod image_modal;
pub mod loader;
pub mod search_bar;
pub mod status_bar;
pub mod toast;
pub mod view_layout;

#[cfg(test)]
mod image_modal_test;

use crate::interactive_ratatui::constants::EXIT_PROMPT_TEXT;
use crate::interactive_ratatui::ui::events::Message;
use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};

pub trait Component {
    fn render(&mut self, f: &mut Frame, area: Rect);
    fn handle_key(&mut self, key: KeyEvent) -> Option<Message>;
}

/// Check if a message is the exit prompt
pub fn is_exit_prompt(message: &Option<String>) -> bool {
    message
        .as_ref()
        .map(|msg| msg == EXIT_PROMPT_TEXT)
        .unwrap_or(false)
}
