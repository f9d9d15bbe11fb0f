//! UI 组件模块
//!
//! 包含所有 TUI 界面组件

mod layout;
mod stage_view;
mod status_bar;
mod title_bar;

pub use layout::{card_areas, render, screen_areas, CardAreas, ScreenAreas};
pub use stage_view::render_stage;
pub use status_bar::render_status_bar;
pub use title_bar::render_title_bar;
