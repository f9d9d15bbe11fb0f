//! 状态机可视化器 - 生成阶段循环图

use super::{Activation, Stage, WorkflowEngine, SQUEEZE_MAX, SQUEEZE_MIN};
use colored::Colorize;

/// 阶段可视化器
pub struct StageVisualizer;

impl StageVisualizer {
    /// 生成循环图（ASCII 艺术），可选高亮当前阶段
    pub fn render_cycle(current: Option<Stage>) -> String {
        let mut output = String::new();

        output.push_str("🔄 Lemonade Cycle:\n\n");
        output.push_str("    Start\n");
        output.push_str("      │\n");

        for stage in Stage::ALL {
            let name = format!("{:8}", stage.as_str());
            let name = if Some(stage) == current {
                name.yellow().bold().to_string()
            } else {
                name
            };

            output.push_str("      ▼\n");
            output.push_str(&format!("  {} {}", stage.icon(), name));

            if WorkflowEngine::can_repeat(stage) {
                output.push_str(&format!(" ↺ {}-{} taps", SQUEEZE_MIN, SQUEEZE_MAX));
            }
            if Some(stage) == current {
                output.push_str(" ← Current");
            }
            output.push('\n');
            output.push_str("      │\n");
        }

        output.push_str(&format!(
            "      └──▶ {} (restart)\n",
            WorkflowEngine::next_stage(Stage::Empty).as_str()
        ));

        output
    }

    /// 生成简化的激活流程
    pub fn render_compact_flow(activations: &[Activation]) -> String {
        let mut output = String::new();

        output.push_str("Stage Flow: ");

        if let Some(first) = activations.first() {
            output.push_str(&format!("{} {}", first.from.icon(), first.from.as_str()));
        }

        for activation in activations {
            output.push_str(&format!(" → {} {}", activation.to.icon(), activation.to.as_str()));
        }

        output.push('\n');

        output
    }

    /// 逐行列出激活记录
    pub fn render_trace(activations: &[Activation]) -> String {
        let mut output = String::new();

        for activation in activations {
            let arrow = if activation.completes_cycle() {
                "↻".green().bold().to_string()
            } else {
                "→".to_string()
            };

            output.push_str(&format!(
                "  {:>3}. {:8} {} {:8}",
                activation.index,
                activation.from.as_str(),
                arrow,
                activation.to.as_str()
            ));

            if let Some(left) = activation.squeeze_remaining {
                output.push_str(&format!(" (squeezes left: {})", left));
            }
            output.push('\n');
        }

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn activation(index: usize, from: Stage, to: Stage, left: Option<u32>) -> Activation {
        Activation {
            index,
            from,
            to,
            squeeze_remaining: left,
        }
    }

    #[test]
    fn test_render_cycle_lists_all_stages() {
        let output = StageVisualizer::render_cycle(None);

        assert!(output.contains("Lemonade Cycle"));
        for stage in Stage::ALL {
            assert!(output.contains(stage.as_str()));
        }
        assert!(output.contains("2-4 taps"));
        assert!(!output.contains("Current"));
    }

    #[test]
    fn test_render_cycle_marks_current() {
        let output = StageVisualizer::render_cycle(Some(Stage::Drink));
        let marked: Vec<&str> = output.lines().filter(|l| l.contains("Current")).collect();
        assert_eq!(marked.len(), 1);
        assert!(marked[0].contains("drink"));
    }

    #[test]
    fn test_render_compact_flow() {
        let activations = vec![
            activation(1, Stage::Select, Stage::Squeeze, Some(2)),
            activation(2, Stage::Squeeze, Stage::Squeeze, Some(1)),
            activation(3, Stage::Squeeze, Stage::Drink, None),
        ];

        let output = StageVisualizer::render_compact_flow(&activations);
        assert!(output.starts_with("Stage Flow: 🌳 select"));
        assert_eq!(output.matches("→").count(), 3);
        assert!(output.trim_end().ends_with("drink"));
    }

    #[test]
    fn test_render_trace() {
        let activations = vec![
            activation(1, Stage::Select, Stage::Squeeze, Some(3)),
            activation(2, Stage::Empty, Stage::Select, None),
        ];

        let output = StageVisualizer::render_trace(&activations);
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("squeezes left: 3"));
        assert!(lines[1].contains("empty"));
        assert!(!lines[1].contains("squeezes left"));
    }
}
