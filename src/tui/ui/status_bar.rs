//! 状态栏组件
//!
//! 显示当前模式、阶段和状态信息

use ratatui::{
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::state_machine::SqueezeSource;
use crate::tui::{App, AppMode};

/// 渲染状态栏
pub fn render_status_bar<S: SqueezeSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    // 模式指示器
    let mode_span = match app.mode {
        AppMode::Normal => Span::styled(
            format!(" {} ", app.stage().as_str().to_uppercase()),
            Style::default()
                .fg(Color::Black)
                .bg(Color::Green)
                .add_modifier(Modifier::BOLD),
        ),
        AppMode::Quitting => Span::styled(
            " QUIT? ",
            Style::default()
                .fg(Color::Black)
                .bg(Color::Red)
                .add_modifier(Modifier::BOLD),
        ),
    };

    // 状态消息
    let status_span = Span::styled(
        format!(" {} ", app.status_message),
        Style::default().fg(Color::White),
    );

    // 剩余挤压次数（可选）
    let counter_span = match app.controller.squeeze_remaining() {
        Some(left) if app.show_squeeze_count => Span::styled(
            format!(" squeezes left: {} ", left),
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),
        ),
        _ => Span::raw(""),
    };

    let line = Line::from(vec![mode_span, status_span, counter_span]);

    let status_bar = Paragraph::new(line).style(Style::default().bg(Color::DarkGray));

    frame.render_widget(status_bar, area);
}
