//! 布局管理
//!
//! 定义 TUI 的整体布局结构
//!
//! ```text
//! ┌──────────────────────────────────┐
//! │            Lemonade              │  标题栏
//! ├──────────────────────────────────┤
//! │          ┌──────────┐            │
//! │          │  picture │            │  图片框（可点击）
//! │          └──────────┘            │
//! │        label text here           │  提示文字
//! ├──────────────────────────────────┤
//! │           Status Bar             │
//! └──────────────────────────────────┘
//! ```
//!
//! 渲染和点击命中测试共用 [`card_areas`]，保证两者一致。

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

use crate::scenes::Scene;
use crate::state_machine::SqueezeSource;
use crate::tui::App;

use super::{render_stage, render_status_bar, render_title_bar};

/// 图片与边框之间的水平留白
const PICTURE_PADDING: u16 = 2;
/// 图片框与提示文字之间的空行
const LABEL_SPACING: u16 = 1;

/// 屏幕三段区域
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenAreas {
    pub title: Rect,
    pub body: Rect,
    pub status: Rect,
}

/// 主体区域内的卡片
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CardAreas {
    /// 图片框（含边框）
    pub picture: Rect,
    /// 提示文字行
    pub label: Rect,
}

/// 垂直分割: 标题栏 + 主内容区域 + 状态栏
pub fn screen_areas(area: Rect) -> ScreenAreas {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // 标题栏
            Constraint::Min(3),    // 主内容区域
            Constraint::Length(1), // 状态栏
        ])
        .split(area);

    ScreenAreas {
        title: chunks[0],
        body: chunks[1],
        status: chunks[2],
    }
}

/// 计算图片框和提示文字的位置（居中）
pub fn card_areas(area: Rect, scene: &Scene) -> CardAreas {
    let body = screen_areas(area).body;

    let picture_width = (scene.art_width() + 2 + PICTURE_PADDING * 2).min(body.width);
    let picture_height = (scene.art_height() + 2).min(body.height);

    let total_height = (picture_height + LABEL_SPACING + 1).min(body.height);
    let top = body.y + (body.height - total_height) / 2;
    let left = body.x + (body.width - picture_width) / 2;

    let picture = Rect::new(left, top, picture_width, picture_height);

    let label_y = (top + picture_height + LABEL_SPACING).min(body.bottom().saturating_sub(1));
    let label = Rect::new(body.x, label_y, body.width, 1);

    CardAreas { picture, label }
}

/// 渲染主界面
pub fn render<S: SqueezeSource>(frame: &mut Frame, app: &App<S>) {
    let area = frame.area();
    let areas = screen_areas(area);

    render_title_bar(frame, areas.title);
    render_stage(frame, area, app);
    render_status_bar(frame, areas.status, app);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scenes::scene_for;
    use crate::state_machine::Stage;

    #[test]
    fn test_screen_areas() {
        let areas = screen_areas(Rect::new(0, 0, 80, 24));
        assert_eq!(areas.title.height, 1);
        assert_eq!(areas.status.y, 23);
        assert_eq!(areas.body.height, 22);
    }

    #[test]
    fn test_card_is_centered_inside_body() {
        let area = Rect::new(0, 0, 80, 24);
        let body = screen_areas(area).body;
        let scene = scene_for(Stage::Select);
        let card = card_areas(area, &scene);

        assert_eq!(card.picture.width, scene.art_width() + 6);
        assert_eq!(card.picture.height, scene.art_height() + 2);
        assert!(card.picture.y >= body.y);
        assert!(card.label.y < body.bottom());
        assert!(card.label.y > card.picture.bottom() - 1);

        let left_gap = card.picture.x - body.x;
        let right_gap = body.right() - card.picture.right();
        assert!(left_gap.abs_diff(right_gap) <= 1);
    }

    #[test]
    fn test_card_fits_tiny_terminal() {
        let area = Rect::new(0, 0, 10, 5);
        let body = screen_areas(area).body;
        let card = card_areas(area, &scene_for(Stage::Drink));

        assert!(card.picture.right() <= body.right());
        assert!(card.picture.bottom() <= body.bottom());
        assert!(card.label.y < body.bottom());
    }
}
