//! `run` 命令 - 不启动界面，连续执行 N 次点击

use anyhow::Result;
use colored::Colorize;
use serde::{Deserialize, Serialize};

use crate::state_machine::{Activation, SqueezeSource, Stage, StageVisualizer, StepController};

/// 一次无界面运行的结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RunReport {
    /// 使用的随机种子（熵初始化时为 None）
    pub seed: Option<u64>,
    pub taps: usize,
    pub activations: Vec<Activation>,
    pub final_stage: Stage,
    pub cycles_completed: u64,
}

impl RunReport {
    /// 在给定控制器上执行 `taps` 次点击并记录
    pub fn collect<S: SqueezeSource>(controller: &mut StepController<S>, taps: usize) -> Self {
        let activations = (1..=taps)
            .map(|index| {
                let before = controller.snapshot();
                controller.activate();
                Activation::between(index, before, controller.snapshot())
            })
            .collect();

        RunReport {
            seed: controller.source().seed(),
            taps,
            activations,
            final_stage: controller.stage(),
            cycles_completed: controller.cycles_completed(),
        }
    }

    /// 文本输出
    pub fn render_text(&self) -> String {
        let mut output = String::new();

        let seed = self
            .seed
            .map(|s| s.to_string())
            .unwrap_or_else(|| "random".to_string());
        output.push_str(&format!(
            "🍋 Lemonade run: {} taps (seed: {})\n\n",
            self.taps, seed
        ));

        if self.activations.is_empty() {
            output.push_str("  No taps performed.\n");
        } else {
            output.push_str(&StageVisualizer::render_trace(&self.activations));
            output.push('\n');
            output.push_str(&StageVisualizer::render_compact_flow(&self.activations));
        }

        output.push('\n');
        output.push_str(&format!(
            "Final stage: {} {}\n",
            self.final_stage.icon(),
            self.final_stage.as_str()
        ));
        output.push_str(&format!("Cycles completed: {}\n", self.cycles_completed));

        output
    }
}

/// 执行 `run` 命令
pub fn run_taps(taps: usize, seed: Option<u64>, json: bool) -> Result<()> {
    let mut controller = StepController::with_source(
        crate::state_machine::RandomSqueeze::from_seed_option(seed),
    );

    tracing::info!(taps, seed = ?seed, "headless run started");
    let report = RunReport::collect(&mut controller, taps);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report.render_text());
        if report.cycles_completed > 0 {
            println!("{}", "✓ Lemonade served".green());
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::state_machine::FixedSqueeze;

    #[test]
    fn test_collect_full_cycle() {
        let mut controller = StepController::with_source(FixedSqueeze::always(3));
        let report = RunReport::collect(&mut controller, 6);

        let stages: Vec<Stage> = report.activations.iter().map(|a| a.to).collect();
        assert_eq!(
            stages,
            vec![
                Stage::Squeeze,
                Stage::Squeeze,
                Stage::Squeeze,
                Stage::Drink,
                Stage::Empty,
                Stage::Select
            ]
        );
        assert_eq!(report.activations[0].squeeze_remaining, Some(3));
        assert_eq!(report.activations[2].squeeze_remaining, Some(1));
        assert_eq!(report.final_stage, Stage::Select);
        assert_eq!(report.cycles_completed, 1);
        assert!(report.activations[5].completes_cycle());
        assert_eq!(report.seed, None);

        let text = report.render_text();
        assert!(text.contains("Stage Flow: 🌳 select → 🍋 squeeze"));
        assert!(text.contains("seed: random"));
    }

    #[test]
    fn test_collect_zero_taps() {
        let mut controller = StepController::seeded(5);
        let report = RunReport::collect(&mut controller, 0);

        assert!(report.activations.is_empty());
        assert_eq!(report.final_stage, Stage::Select);
        assert!(report.render_text().contains("No taps performed"));
        assert_eq!(report.seed, Some(5));
        assert!(report.render_text().contains("seed: 5"));
        assert!(!report.render_text().contains("Stage Flow"));
    }

    #[test]
    fn test_report_json_shape() {
        let mut controller = StepController::with_source(FixedSqueeze::always(2));
        let report = RunReport::collect(&mut controller, 2);

        let json = serde_json::to_value(&report).unwrap();
        assert_eq!(json["final_stage"], "squeeze");
        assert_eq!(json["activations"][0]["from"], "select");
        assert_eq!(json["activations"][1]["squeeze_remaining"], 1);
    }
}
