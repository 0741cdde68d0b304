#[cfg(test)]
mod tests {
    use super::super::app_state::*;
    use super::super::events::Message;
    use super::super::notifications::Notification;
    use super::super::renderer::*;
    use crate::interactive_ratatui::domain::models::{FetchResponse, FetchTag, ImagePage};
    use crate::interactive_ratatui::test_support::image_page;
    use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};

    fn buffer_contains(buffer: &Buffer, text: &str) -> bool {
        let content = buffer
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect::<String>();
        content.contains(text)
    }

    fn completed(query: &str, page: u32, result: ImagePage) -> Message {
        Message::FetchCompleted(FetchResponse {
            tag: FetchTag::new(query, page),
            outcome: Ok(result),
        })
    }

    fn draw(renderer: &mut Renderer, state: &AppState, toast: Option<&Notification>) -> Buffer {
        let backend = TestBackend::new(100, 30);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal
            .draw(|f| renderer.render(f, state, toast))
            .unwrap();
        terminal.backend().buffer().clone()
    }

    #[test]
    fn test_empty_gallery() {
        let mut renderer = Renderer::new();
        let state = AppState::new();

        let buffer = draw(&mut renderer, &state, None);
        assert!(buffer_contains(&buffer, "Search images"));
        assert!(buffer_contains(&buffer, "No images yet"));
        assert!(!buffer_contains(&buffer, "[ Load more ]"));
    }

    #[test]
    fn test_first_page_shows_loader() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.update(Message::SubmitSearch("cats".to_string()));

        let buffer = draw(&mut renderer, &state, None);
        assert!(buffer_contains(&buffer, "Loading images..."));
        assert!(buffer_contains(&buffer, "[searching...]"));
    }

    #[test]
    fn test_short_result_hides_load_more() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.update(Message::SubmitSearch("cats".to_string()));
        state.update(completed("cats", 1, image_page(5, 1..=5)));

        let buffer = draw(&mut renderer, &state, None);
        assert!(buffer_contains(&buffer, "[showing: cats]"));
        assert!(buffer_contains(&buffer, "Images (1/5)"));
        assert!(buffer_contains(&buffer, "#5 "));
        assert!(!buffer_contains(&buffer, "[ Load more ]"));
        assert!(!buffer_contains(&buffer, "Loading images..."));
    }

    #[test]
    fn test_more_pages_show_load_more() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.update(Message::SubmitSearch("dogs".to_string()));
        state.update(completed("dogs", 1, image_page(50, 1..=12)));

        let buffer = draw(&mut renderer, &state, None);
        assert!(buffer_contains(&buffer, "Images (1/12)"));
        assert!(buffer_contains(&buffer, "[ Load more ]"));
    }

    #[test]
    fn test_next_page_loading_keeps_items_visible() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.update(Message::SubmitSearch("dogs".to_string()));
        state.update(completed("dogs", 1, image_page(50, 1..=12)));
        state.update(Message::LoadMore);

        let buffer = draw(&mut renderer, &state, None);
        assert!(buffer_contains(&buffer, "Images (1/12)"));
        assert!(buffer_contains(&buffer, "Loading more images..."));
        assert!(!buffer_contains(&buffer, "Loading images..."));
        assert!(!buffer_contains(&buffer, "[ Load more ]"));
    }

    #[test]
    fn test_load_more_button_is_clickable_after_render() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.update(Message::SubmitSearch("dogs".to_string()));
        state.update(completed("dogs", 1, image_page(50, 1..=12)));

        let buffer = draw(&mut renderer, &state, None);
        let area = buffer.area;
        let hit = (0..area.width).find_map(|x| renderer.get_status_bar().click_at(x, area.height - 2));
        assert!(matches!(hit, Some(Message::LoadMore)));
    }

    #[test]
    fn test_modal_overlay() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.update(Message::SubmitSearch("dogs".to_string()));
        state.update(completed("dogs", 1, image_page(50, 1..=12)));
        state.update(Message::ImageClicked("3".to_string()));

        let buffer = draw(&mut renderer, &state, None);
        assert!(buffer_contains(&buffer, " Image #3 "));
        assert!(buffer_contains(&buffer, "https://img.test/3_1280.jpg"));
    }

    #[test]
    fn test_help_overlay() {
        let mut renderer = Renderer::new();
        let mut state = AppState::new();
        state.update(Message::ShowHelp);

        let buffer = draw(&mut renderer, &state, None);
        assert!(buffer_contains(&buffer, "Image Gallery - Interactive Mode"));
    }

    #[test]
    fn test_toast_drawn_on_top() {
        let mut renderer = Renderer::new();
        let state = AppState::new();
        let toast = Notification::no_results();

        let buffer = draw(&mut renderer, &state, Some(&toast));
        assert!(buffer_contains(&buffer, "Nothing found. Try a different query."));
    }
}
