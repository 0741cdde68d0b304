use crate::interactive_ratatui::constants::{DIALOG_MARGIN, DIALOG_MAX_WIDTH};
use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
};

/// Centered dialog area of at most `DIALOG_MAX_WIDTH` columns and `content_height`
/// rows, clamped to the available space.
pub fn dialog_area(area: Rect, content_height: u16) -> Rect {
    let width = DIALOG_MAX_WIDTH.min(area.width.saturating_sub(DIALOG_MARGIN));
    let height = content_height.min(area.height.saturating_sub(DIALOG_MARGIN));
    centered(area, width, height)
}

/// Rect of the given size centered in `area`.
pub fn centered(area: Rect, width: u16, height: u16) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    Rect::new(
        area.x + (area.width - width) / 2,
        area.y + (area.height - height) / 2,
        width,
        height,
    )
}

// Helper struct for consistent color scheme
pub struct ColorScheme;

impl ColorScheme {
    pub const PRIMARY: Color = Color::Cyan;
    pub const SECONDARY: Color = Color::Yellow;
    pub const TEXT: Color = Color::White;
    pub const TEXT_DIM: Color = Color::DarkGray;
    pub const SELECTION: Color = Color::DarkGray;
    pub const SUCCESS: Color = Color::Green;
    pub const ERROR: Color = Color::Red;
}

// Helper struct for consistent styling
pub struct Styles;

impl Styles {
    pub fn title() -> Style {
        Style::default()
            .fg(ColorScheme::PRIMARY)
            .add_modifier(Modifier::BOLD)
    }

    pub fn label() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn selected() -> Style {
        Style::default()
            .bg(ColorScheme::SELECTION)
            .add_modifier(Modifier::BOLD)
    }

    pub fn normal() -> Style {
        Style::default().fg(ColorScheme::TEXT)
    }

    pub fn dimmed() -> Style {
        Style::default().fg(ColorScheme::TEXT_DIM)
    }

    pub fn action_key() -> Style {
        Style::default().fg(ColorScheme::SECONDARY)
    }

    pub fn success() -> Style {
        Style::default()
            .fg(ColorScheme::SUCCESS)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(ColorScheme::ERROR)
            .add_modifier(Modifier::BOLD)
    }
}
