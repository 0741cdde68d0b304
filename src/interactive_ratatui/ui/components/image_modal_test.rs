#[cfg(test)]
mod tests {
    use super::super::Component;
    use super::super::image_modal::*;
    use crate::interactive_ratatui::test_support::item;
    use crate::interactive_ratatui::ui::events::Message;
    use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    #[test]
    fn test_render_shows_full_size_url() {
        let mut modal = ImageModal::new();
        let focused = item(42);
        modal.set_image(focused.large_image_url.clone(), Some(focused));

        let backend = TestBackend::new(100, 24);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|f| modal.render(f, f.area())).unwrap();
        let buffer = terminal.backend().buffer();

        assert!(buffer_contains(buffer, "Image #42"));
        assert!(buffer_contains(buffer, "https://img.test/42_1280.jpg"));
        assert!(buffer_contains(buffer, "tag42, sample"));
    }

    #[test]
    fn test_close_keys() {
        let mut modal = ImageModal::new();
        for code in [KeyCode::Esc, KeyCode::Enter, KeyCode::Char('q')] {
            let msg = modal.handle_key(KeyEvent::new(code, KeyModifiers::empty()));
            assert!(matches!(msg, Some(Message::CloseModal)));
        }
    }

    #[test]
    fn test_copy_key() {
        let mut modal = ImageModal::new();
        let msg = modal.handle_key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::empty()));
        assert!(matches!(msg, Some(Message::CopyFocusedUrl)));
    }

    #[test]
    fn test_other_keys_ignored() {
        let mut modal = ImageModal::new();
        let msg = modal.handle_key(KeyEvent::new(KeyCode::Char('x'), KeyModifiers::empty()));
        assert!(msg.is_none());
    }
}
