// Lemonade - Library Root
//
// 四阶段柠檬水状态机，外加终端界面和无界面 CLI

pub mod cli;
pub mod config;
pub mod error;
pub mod logging;
pub mod scenes;
pub mod state_machine;
pub mod tui;

// 重新导出常用类型
pub use config::LemonadeConfig;
pub use error::{LemonadeError, Result};
pub use state_machine::{Stage, StepController};
