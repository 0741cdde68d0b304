use crate::interactive_ratatui::ui::components::view_layout::{Styles, centered};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

const SPINNER_FRAMES: [&str; 8] = ["⣾", "⣽", "⣻", "⢿", "⡿", "⣟", "⣯", "⣷"];

/// Activity indicator shown while a page is loading.
#[derive(Default)]
pub struct Loader {
    frame: usize,
}

impl Loader {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tick(&mut self) {
        self.frame = (self.frame + 1) % SPINNER_FRAMES.len();
    }

    pub fn spinner(&self) -> &'static str {
        SPINNER_FRAMES[self.frame]
    }

    pub fn line(&self, label: &str) -> Line<'static> {
        Line::from(vec![
            Span::styled(format!("{} ", self.spinner()), Styles::title()),
            Span::styled(label.to_string(), Styles::normal()),
        ])
    }

    /// Full-size loader used while the first page of a search is pending.
    pub fn render_centered(&self, f: &mut Frame, area: Rect, label: &str) {
        let box_area = centered(area, 40, 3);
        f.render_widget(Clear, box_area);
        let loader = Paragraph::new(self.line(label))
            .block(Block::default().borders(Borders::ALL))
            .alignment(Alignment::Center);
        f.render_widget(loader, box_area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tick_cycles_frames() {
        let mut loader = Loader::new();
        let first = loader.spinner();
        for _ in 0..SPINNER_FRAMES.len() {
            loader.tick();
        }
        assert_eq!(loader.spinner(), first);

        loader.tick();
        assert_ne!(loader.spinner(), first);
    }
}
