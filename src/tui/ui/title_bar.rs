//! 标题栏

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::Span,
    widgets::Paragraph,
    Frame,
};

use crate::scenes::APP_TITLE;

/// 渲染居中的标题栏
pub fn render_title_bar(frame: &mut Frame, area: Rect) {
    let title = Paragraph::new(Span::styled(
        APP_TITLE,
        Style::default()
            .fg(Color::Black)
            .add_modifier(Modifier::BOLD),
    ))
    .alignment(Alignment::Center)
    .style(Style::default().bg(Color::Yellow));

    frame.render_widget(title, area);
}
