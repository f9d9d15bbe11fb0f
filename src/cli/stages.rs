//! `stages` 与 `graph` 命令

use anyhow::Result;
use colored::Colorize;

use crate::scenes::scene_for;
use crate::state_machine::{Stage, StageVisualizer, WorkflowEngine};

/// 列出所有阶段
pub fn list_stages() -> Result<()> {
    println!("{}", "🍋 Lemonade Stages:".cyan().bold());
    println!();

    for (idx, stage) in Stage::ALL.iter().enumerate() {
        let scene = scene_for(*stage);
        println!(
            "  {}. {} {}",
            idx + 1,
            stage.icon(),
            stage.as_str().yellow()
        );
        println!("     Label:   {}", scene.label);
        println!("     Picture: {}", scene.description);
        println!("     {}", WorkflowEngine::stage_description(*stage));

        let next: Vec<&str> = WorkflowEngine::possible_targets(*stage)
            .iter()
            .map(|s| s.as_str())
            .collect();
        println!("     {} {}", "→".green(), next.join(" | "));
        println!();
    }

    Ok(())
}

/// 显示阶段循环图
pub fn show_graph(current: Option<Stage>) -> Result<()> {
    print!("{}", StageVisualizer::render_cycle(current));
    Ok(())
}
