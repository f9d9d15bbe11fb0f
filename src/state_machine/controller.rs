//! 阶段控制器
//!
//! 持有当前阶段和剩余挤压次数，每次 `activate()` 前进一步。

use super::squeeze::{RandomSqueeze, SqueezeSource, SQUEEZE_MAX, SQUEEZE_MIN};
use super::{Stage, StepSnapshot};

/// 柠檬水阶段控制器
///
/// 单线程、同步：调用方（渲染层）每次点击调用一次 [`StepController::activate`]，
/// 然后用 [`StepController::stage`] 决定显示什么。
#[derive(Debug, Clone)]
pub struct StepController<S = RandomSqueeze> {
    stage: Stage,
    /// 只在 Squeeze 阶段读写
    squeeze_count: u32,
    cycles_completed: u64,
    source: S,
}

impl StepController<RandomSqueeze> {
    /// 使用系统熵作为随机源
    pub fn new() -> Self {
        Self::with_source(RandomSqueeze::from_entropy())
    }

    /// 使用固定种子
    pub fn seeded(seed: u64) -> Self {
        Self::with_source(RandomSqueeze::seeded(seed))
    }
}

impl Default for StepController<RandomSqueeze> {
    fn default() -> Self {
        Self::new()
    }
}

impl<S: SqueezeSource> StepController<S> {
    /// 注入任意随机源
    pub fn with_source(source: S) -> Self {
        Self {
            stage: Stage::Select,
            squeeze_count: 0,
            cycles_completed: 0,
            source,
        }
    }

    /// 处理一次点击
    pub fn activate(&mut self) {
        let from = self.stage;

        self.stage = match self.stage {
            Stage::Select => {
                self.squeeze_count = self.draw_squeeze_count();
                Stage::Squeeze
            }
            Stage::Squeeze => {
                self.squeeze_count = self.squeeze_count.saturating_sub(1);
                if self.squeeze_count == 0 {
                    Stage::Drink
                } else {
                    Stage::Squeeze
                }
            }
            Stage::Drink => Stage::Empty,
            Stage::Empty => {
                self.cycles_completed += 1;
                tracing::info!(cycles = self.cycles_completed, "lemonade cycle completed");
                Stage::Select
            }
        };

        tracing::debug!(
            from = %from,
            to = %self.stage,
            squeeze_remaining = ?self.squeeze_remaining(),
            "activated"
        );
    }

    /// 当前阶段
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// 剩余挤压次数（仅 Squeeze 阶段有值）
    pub fn squeeze_remaining(&self) -> Option<u32> {
        match self.stage {
            Stage::Squeeze => Some(self.squeeze_count),
            _ => None,
        }
    }

    /// 只读快照
    pub fn snapshot(&self) -> StepSnapshot {
        StepSnapshot {
            stage: self.stage,
            squeeze_remaining: self.squeeze_remaining(),
        }
    }

    /// 已完成的完整循环数（空杯 → 选柠檬 的次数）
    pub fn cycles_completed(&self) -> u64 {
        self.cycles_completed
    }

    /// 随机源
    pub fn source(&self) -> &S {
        &self.source
    }

    fn draw_squeeze_count(&mut self) -> u32 {
        let drawn = self.source.draw();
        let count = drawn.clamp(SQUEEZE_MIN, SQUEEZE_MAX);
        if count != drawn {
            tracing::warn!(drawn, clamped = count, "squeeze count out of range");
        }
        count
    }
}
