//! 应用状态管理
//!
//! `App` 是 TUI 的状态容器，持有:
//! - 阶段控制器
//! - 当前运行模式
//! - 终端尺寸（用于点击命中测试）
//! - 状态消息

use crossterm::event::{
    KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

use crate::config::LemonadeConfig;
use crate::scenes::{scene_for, Scene};
use crate::state_machine::{RandomSqueeze, SqueezeSource, Stage, StepController};
use crate::tui::ui::card_areas;

/// 应用运行模式
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AppMode {
    /// 正常模式 - 点击推进阶段
    Normal,
    /// 退出确认
    Quitting,
}

const DEFAULT_STATUS: &str = "Click the picture or press Enter | q to quit";

/// 应用状态
pub struct App<S = RandomSqueeze> {
    /// 阶段控制器
    pub controller: StepController<S>,

    /// 当前运行模式
    pub mode: AppMode,

    /// 是否应该退出
    pub should_quit: bool,

    /// 终端尺寸
    pub terminal_size: (u16, u16),

    /// 状态消息（显示在状态栏）
    pub status_message: String,

    /// 是否显示剩余挤压次数
    pub show_squeeze_count: bool,
}

impl App<RandomSqueeze> {
    /// 按配置创建应用
    pub fn from_config(config: &LemonadeConfig, cols: u16, rows: u16) -> Self {
        let controller =
            StepController::with_source(RandomSqueeze::from_seed_option(config.seed));
        let mut app = Self::new(controller, cols, rows);
        app.show_squeeze_count = config.show_squeeze_count;
        app
    }
}

impl<S: SqueezeSource> App<S> {
    /// 创建新的应用实例
    pub fn new(controller: StepController<S>, cols: u16, rows: u16) -> Self {
        Self {
            controller,
            mode: AppMode::Normal,
            should_quit: false,
            terminal_size: (cols, rows),
            status_message: DEFAULT_STATUS.to_string(),
            show_squeeze_count: false,
        }
    }

    /// 当前阶段
    pub fn stage(&self) -> Stage {
        self.controller.stage()
    }

    /// 当前阶段的画面
    pub fn scene(&self) -> Scene {
        scene_for(self.stage())
    }

    /// 一次点击
    pub fn tap(&mut self) {
        self.controller.activate();

        self.status_message = match self.stage() {
            Stage::Select => format!(
                "Glasses finished: {} | q to quit",
                self.controller.cycles_completed()
            ),
            _ => DEFAULT_STATUS.to_string(),
        };
    }

    /// 处理键盘事件
    pub fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
            self.should_quit = true;
            return;
        }

        match self.mode {
            AppMode::Normal => match key.code {
                KeyCode::Enter | KeyCode::Char(' ') => self.tap(),
                KeyCode::Char('c') => self.toggle_squeeze_count(),
                KeyCode::Char('q') | KeyCode::Esc => {
                    self.mode = AppMode::Quitting;
                    self.status_message = "Quit? (y/n)".to_string();
                }
                _ => {}
            },
            AppMode::Quitting => match key.code {
                KeyCode::Char('y') | KeyCode::Char('Y') => self.should_quit = true,
                _ => {
                    self.mode = AppMode::Normal;
                    self.status_message = DEFAULT_STATUS.to_string();
                }
            },
        }
    }

    /// 处理鼠标事件 - 只有点中图片才算一次点击
    pub fn handle_mouse(&mut self, mouse: MouseEvent) {
        if self.mode != AppMode::Normal {
            return;
        }

        if let MouseEventKind::Down(MouseButton::Left) = mouse.kind {
            if self.hits_picture(mouse.column, mouse.row) {
                self.tap();
            }
        }
    }

    /// 坐标是否落在图片框内
    pub fn hits_picture(&self, column: u16, row: u16) -> bool {
        let (cols, rows) = self.terminal_size;
        let areas = card_areas(Rect::new(0, 0, cols, rows), &self.scene());
        let picture = areas.picture;

        column >= picture.x
            && column < picture.x.saturating_add(picture.width)
            && row >= picture.y
            && row < picture.y.saturating_add(picture.height)
    }

    /// 调整终端大小
    pub fn resize(&mut self, cols: u16, rows: u16) {
        self.terminal_size = (cols, rows);
    }

    /// 切换剩余挤压次数显示
    pub fn toggle_squeeze_count(&mut self) {
        self.show_squeeze_count = !self.show_squeeze_count;
        self.status_message = if self.show_squeeze_count {
            "Squeeze counter ON | c to toggle".to_string()
        } else {
            "Squeeze counter OFF | c to toggle".to_string()
        };
    }
}
