//! TUI 模块 - 基于 Ratatui 的柠檬水界面
//!
//! 核心组件:
//! - `app`: 应用状态管理
//! - `event`: 事件系统 (键盘、鼠标、定时器)
//! - `terminal`: 终端初始化与恢复
//! - `ui`: 用户界面组件

pub mod app;
pub mod event;
pub mod terminal;
pub mod ui;

// 重导出常用类型
pub use app::{App, AppMode};
pub use event::{Event, EventHandler};
pub use terminal::{init_terminal, install_panic_hook, restore_terminal, Tui};

use anyhow::{Context, Result};

use crate::config::LemonadeConfig;

/// 运行 TUI，直到用户退出
pub fn run(config: &LemonadeConfig) -> Result<()> {
    install_panic_hook();
    let mut terminal = init_terminal().context("Failed to initialize terminal")?;

    let result = run_loop(&mut terminal, config);

    finish(result, restore_terminal())
}

/// 合并循环结果与终端恢复结果，循环本身的错误优先
fn finish(result: Result<()>, restored: Result<()>) -> Result<()> {
    result?;
    restored.context("Failed to restore terminal")
}

fn run_loop(terminal: &mut Tui, config: &LemonadeConfig) -> Result<()> {
    let size = terminal.size()?;
    let mut app = App::from_config(config, size.width, size.height);
    let events = EventHandler::new(config.tick_rate());

    tracing::info!(seed = ?config.seed, "lemonade session started");

    while !app.should_quit {
        terminal.draw(|frame| ui::render(frame, &app))?;

        match events.next()? {
            Event::Key(key) => app.handle_key(key),
            Event::Mouse(mouse) => app.handle_mouse(mouse),
            Event::Resize(cols, rows) => app.resize(cols, rows),
            Event::Tick => {}
            Event::Error(e) => anyhow::bail!("Terminal event error: {}", e),
        }
    }

    tracing::info!(
        cycles = app.controller.cycles_completed(),
        stage = %app.stage(),
        "lemonade session finished"
    );

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finish_prefers_loop_error() {
        let err = finish(
            Err(anyhow::anyhow!("event loop broke")),
            Err(anyhow::anyhow!("restore broke")),
        )
        .unwrap_err();
        assert!(err.to_string().contains("event loop broke"));
    }

    #[test]
    fn test_finish_reports_restore_error() {
        let err = finish(Ok(()), Err(anyhow::anyhow!("restore broke"))).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to restore terminal"));
        assert!(format!("{:#}", err).contains("restore broke"));
    }

    #[test]
    fn test_finish_ok() {
        assert!(finish(Ok(()), Ok(())).is_ok());
    }
}
