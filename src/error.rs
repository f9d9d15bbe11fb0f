//! 错误类型
//!
//! 状态机本身不会失败，这里只覆盖外围：阶段名解析和配置加载。

use std::path::PathBuf;
use thiserror::Error;

/// Lemonade 库错误
#[derive(Debug, Error)]
pub enum LemonadeError {
    /// 无法识别的阶段名
    #[error("unknown stage '{0}' (expected one of: select, squeeze, drink, empty)")]
    UnknownStage(String),

    /// 配置文件无效
    #[error("invalid config {}: {message}", path.display())]
    Config { path: PathBuf, message: String },

    /// 配置项取值越界
    #[error("invalid setting: {0}")]
    InvalidSetting(String),
}

pub type Result<T> = std::result::Result<T, LemonadeError>;
