//! 阶段视图组件
//!
//! 图片框 + 提示文字。图片框标题是无障碍描述。

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Text},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

use crate::state_machine::{SqueezeSource, Stage};
use crate::tui::App;

use super::card_areas;

fn stage_color(stage: Stage) -> Color {
    match stage {
        Stage::Select => Color::Green,
        Stage::Squeeze => Color::Yellow,
        Stage::Drink => Color::LightYellow,
        Stage::Empty => Color::Gray,
    }
}

/// 渲染当前阶段（`area` 为整个屏幕）
pub fn render_stage<S: SqueezeSource>(frame: &mut Frame, area: Rect, app: &App<S>) {
    let scene = app.scene();
    let card = card_areas(area, &scene);
    let color = stage_color(app.stage());

    let art: Vec<Line> = scene.art.iter().map(|line| Line::from(*line)).collect();

    let picture_block = Block::default()
        .title(format!(" {} ", scene.description))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(color));

    let picture = Paragraph::new(Text::from(art))
        .block(picture_block)
        .alignment(Alignment::Center)
        .style(Style::default().fg(color));

    frame.render_widget(picture, card.picture);

    let label = Paragraph::new(Line::from(scene.label))
        .alignment(Alignment::Center)
        .style(Style::default().add_modifier(Modifier::BOLD));

    frame.render_widget(label, card.label);
}
