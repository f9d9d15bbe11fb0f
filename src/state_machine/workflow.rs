//! 工作流引擎 - 阶段循环的静态规则

use super::Stage;

/// 阶段规则（无状态）
pub struct WorkflowEngine;

impl WorkflowEngine {
    /// 循环中的下一个不同阶段
    ///
    /// Squeeze 可能停留在自身，这里返回它最终离开时的阶段。
    pub fn next_stage(stage: Stage) -> Stage {
        match stage {
            Stage::Select => Stage::Squeeze,
            Stage::Squeeze => Stage::Drink,
            Stage::Drink => Stage::Empty,
            Stage::Empty => Stage::Select,
        }
    }

    /// 一次激活后可能到达的阶段
    pub fn possible_targets(stage: Stage) -> Vec<Stage> {
        match stage {
            Stage::Squeeze => vec![Stage::Squeeze, Stage::Drink],
            other => vec![Self::next_stage(other)],
        }
    }

    /// 阶段是否可以停留在自身
    pub fn can_repeat(stage: Stage) -> bool {
        matches!(stage, Stage::Squeeze)
    }

    /// 获取阶段描述
    pub fn stage_description(stage: Stage) -> &'static str {
        match stage {
            Stage::Select => "Pick a lemon from the tree",
            Stage::Squeeze => "Squeeze the lemon (2 to 4 taps)",
            Stage::Drink => "Drink the lemonade",
            Stage::Empty => "The glass is empty, start again",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_next_stage_cycle() {
        let mut stage = Stage::Select;
        for _ in 0..4 {
            stage = WorkflowEngine::next_stage(stage);
        }
        assert_eq!(stage, Stage::Select);
    }

    #[test]
    fn test_possible_targets() {
        assert_eq!(
            WorkflowEngine::possible_targets(Stage::Squeeze),
            vec![Stage::Squeeze, Stage::Drink]
        );
        assert_eq!(
            WorkflowEngine::possible_targets(Stage::Empty),
            vec![Stage::Select]
        );
    }

    #[test]
    fn test_only_squeeze_repeats() {
        for stage in Stage::ALL {
            assert_eq!(WorkflowEngine::can_repeat(stage), stage == Stage::Squeeze);
        }
    }
}
