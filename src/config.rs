//! 配置
//!
//! 可选的 JSON 配置文件，命令行参数优先于文件中的值：
//!
//! ```json
//! { "seed": 42, "tick_rate_ms": 250, "show_squeeze_count": false }
//! ```

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

use crate::error::{LemonadeError, Result};

/// 默认 tick 间隔（毫秒）
pub const DEFAULT_TICK_RATE_MS: u64 = 250;

const TICK_RATE_RANGE_MS: std::ops::RangeInclusive<u64> = 10..=5000;

/// 运行配置
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct LemonadeConfig {
    /// 随机种子（None 表示使用系统熵）
    pub seed: Option<u64>,
    /// TUI 事件轮询间隔
    pub tick_rate_ms: u64,
    /// 状态栏是否显示剩余挤压次数
    pub show_squeeze_count: bool,
}

impl Default for LemonadeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            tick_rate_ms: DEFAULT_TICK_RATE_MS,
            show_squeeze_count: false,
        }
    }
}

impl LemonadeConfig {
    /// 从 JSON 文件加载
    pub fn load(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|e| LemonadeError::Config {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;

        let config: LemonadeConfig =
            serde_json::from_str(&content).map_err(|e| LemonadeError::Config {
                path: path.to_path_buf(),
                message: e.to_string(),
            })?;

        config.validate()?;
        Ok(config)
    }

    /// 有路径则加载，否则使用默认值
    pub fn load_or_default(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    /// 用命令行参数覆盖
    pub fn with_overrides(
        mut self,
        seed: Option<u64>,
        tick_rate_ms: Option<u64>,
        show_squeeze_count: bool,
    ) -> Result<Self> {
        if seed.is_some() {
            self.seed = seed;
        }
        if let Some(tick_rate_ms) = tick_rate_ms {
            self.tick_rate_ms = tick_rate_ms;
        }
        self.show_squeeze_count |= show_squeeze_count;

        self.validate()?;
        Ok(self)
    }

    /// 校验取值范围
    pub fn validate(&self) -> Result<()> {
        if !TICK_RATE_RANGE_MS.contains(&self.tick_rate_ms) {
            return Err(LemonadeError::InvalidSetting(format!(
                "tick_rate_ms must be between {} and {}, got {}",
                TICK_RATE_RANGE_MS.start(),
                TICK_RATE_RANGE_MS.end(),
                self.tick_rate_ms
            )));
        }
        Ok(())
    }

    pub fn tick_rate(&self) -> Duration {
        Duration::from_millis(self.tick_rate_ms)
    }
}
