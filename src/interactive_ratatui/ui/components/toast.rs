use crate::interactive_ratatui::constants::TOAST_MAX_WIDTH;
use crate::interactive_ratatui::ui::components::view_layout::Styles;
use crate::interactive_ratatui::ui::notifications::{Notification, ToastPosition};
use ratatui::{
    Frame,
    layout::{Alignment, Rect},
    widgets::{Block, Borders, Clear, Paragraph},
};

pub fn toast_area(area: Rect, notification: &Notification) -> Rect {
    let text_width = notification.text.chars().count() as u16 + 4;
    let width = text_width.min(TOAST_MAX_WIDTH).min(area.width);
    let height = 3.min(area.height);

    match notification.position {
        ToastPosition::TopCenter => Rect::new(
            area.x + (area.width - width) / 2,
            area.y,
            width,
            height,
        ),
    }
}

pub fn render_toast(f: &mut Frame, area: Rect, notification: &Notification) {
    let toast_area = toast_area(area, notification);
    let style = if notification.is_error() {
        Styles::error()
    } else {
        Styles::success()
    };

    f.render_widget(Clear, toast_area);
    f.render_widget(
        Paragraph::new(notification.text.as_str())
            .style(style)
            .alignment(Alignment::Center)
            .block(Block::default().borders(Borders::ALL).border_style(style)),
        toast_area,
    );
}
