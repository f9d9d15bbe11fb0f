//! 柠檬水状态机模块
//!
//! 四个阶段构成一个无限循环：
//! - 选柠檬（Select）
//! - 挤柠檬（Squeeze，需要点击 2-4 次）
//! - 喝柠檬水（Drink）
//! - 空杯（Empty），再点一次回到开头
//!
//! 唯一的输入是一次“激活”（点击），状态变更同步完成，立即可见。

pub mod controller;
pub mod squeeze;
pub mod visualizer;
pub mod workflow;

// 重导出核心类型
pub use controller::StepController;
pub use squeeze::{FixedSqueeze, RandomSqueeze, SqueezeSource, SQUEEZE_MAX, SQUEEZE_MIN};
pub use visualizer::StageVisualizer;
pub use workflow::WorkflowEngine;

use serde::{Deserialize, Serialize};

use crate::error::LemonadeError;

// ═══════════════════════════════════════════════════════════════════
// 阶段定义
// ═══════════════════════════════════════════════════════════════════

/// 阶段枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// 选一个柠檬
    #[default]
    Select,
    /// 挤柠檬
    Squeeze,
    /// 喝柠檬水
    Drink,
    /// 空杯，等待重新开始
    Empty,
}

impl Stage {
    /// 按循环顺序排列的全部阶段
    pub const ALL: [Stage; 4] = [Stage::Select, Stage::Squeeze, Stage::Drink, Stage::Empty];

    /// 转换为字符串
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Select => "select",
            Stage::Squeeze => "squeeze",
            Stage::Drink => "drink",
            Stage::Empty => "empty",
        }
    }

    /// 从字符串解析（忽略大小写）
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "select" => Some(Stage::Select),
            "squeeze" => Some(Stage::Squeeze),
            "drink" => Some(Stage::Drink),
            "empty" => Some(Stage::Empty),
            _ => None,
        }
    }

    /// 获取显示图标
    pub fn icon(&self) -> &'static str {
        match self {
            Stage::Select => "🌳",
            Stage::Squeeze => "🍋",
            Stage::Drink => "🥤",
            Stage::Empty => "🥛",
        }
    }
}

impl std::fmt::Display for Stage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl std::str::FromStr for Stage {
    type Err = LemonadeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Stage::parse(s).ok_or_else(|| LemonadeError::UnknownStage(s.to_string()))
    }
}

// ═══════════════════════════════════════════════════════════════════
// 只读视图
// ═══════════════════════════════════════════════════════════════════

/// 控制器的只读快照
///
/// `squeeze_remaining` 只在 Squeeze 阶段有值，其余阶段计数器没有意义。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StepSnapshot {
    pub stage: Stage,
    pub squeeze_remaining: Option<u32>,
}

/// 一次激活的记录（由激活前后的快照组成）
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Activation {
    /// 从 1 开始的序号
    pub index: usize,
    pub from: Stage,
    pub to: Stage,
    /// 激活后剩余的挤压次数（仅当 `to` 为 Squeeze）
    #[serde(skip_serializing_if = "Option::is_none")]
    pub squeeze_remaining: Option<u32>,
}

impl Activation {
    /// 由前后快照构造
    pub fn between(index: usize, before: StepSnapshot, after: StepSnapshot) -> Self {
        Activation {
            index,
            from: before.stage,
            to: after.stage,
            squeeze_remaining: after.squeeze_remaining,
        }
    }

    /// 是否完成了一整轮（空杯 → 选柠檬）
    pub fn completes_cycle(&self) -> bool {
        self.from == Stage::Empty && self.to == Stage::Select
    }
}
