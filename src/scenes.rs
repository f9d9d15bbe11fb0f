//! 阶段画面查找表
//!
//! 渲染层持有的静态数据：每个阶段对应的文字提示、图片和无障碍描述。
//! 状态机不依赖这里的任何内容。

use crate::state_machine::Stage;

/// 应用标题
pub const APP_TITLE: &str = "Lemonade";

/// 单个阶段的画面
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scene {
    /// 图片下方的提示文字
    pub label: &'static str,
    /// 图片（字符画，每行一个元素）
    pub art: &'static [&'static str],
    /// 图片的无障碍描述
    pub description: &'static str,
}

impl Scene {
    /// 图片宽度（按字符计）
    pub fn art_width(&self) -> u16 {
        self.art
            .iter()
            .map(|line| line.chars().count())
            .max()
            .unwrap_or(0) as u16
    }

    /// 图片高度（行数）
    pub fn art_height(&self) -> u16 {
        self.art.len() as u16
    }
}

const LEMON_TREE: &[&str] = &[
    r"     .-@@@@-.     ",
    r"   .@@@o@@@@@@.   ",
    r"  @@@@@@@@o@@@@@  ",
    r"  @@o@@@@@@@@@o@  ",
    r"   '@@@@@o@@@@'   ",
    r"      '-||-'      ",
    r"        ||        ",
    r"        ||        ",
    r"     ___||___     ",
];

const LEMON: &[&str] = &[
    r"                  ",
    r"       _.--._     ",
    r"    .-'      '-.  ",
    r"   (            )>",
    r"    '-.      .-'  ",
    r"       '--..'     ",
    r"                  ",
    r"   squeeze me!    ",
    r"                  ",
];

const GLASS_OF_LEMONADE: &[&str] = &[
    r"        |         ",
    r"    ____|_____    ",
    r"   |~~~~|~~~~~|   ",
    r"   |::::|:::::|   ",
    r"   |:::o::::::|   ",
    r"   |::::::o:::|   ",
    r"   |:o::::::::|   ",
    r"    \________/    ",
    r"                  ",
];

const EMPTY_GLASS: &[&str] = &[
    r"                  ",
    r"    __________    ",
    r"   |          |   ",
    r"   |          |   ",
    r"   |          |   ",
    r"   |          |   ",
    r"   |          |   ",
    r"    \________/    ",
    r"                  ",
];

/// 查找阶段对应的画面
pub fn scene_for(stage: Stage) -> Scene {
    match stage {
        Stage::Select => Scene {
            label: "Tap the lemon tree to select a lemon",
            art: LEMON_TREE,
            description: "Lemon tree",
        },
        Stage::Squeeze => Scene {
            label: "Keep tapping the lemon to squeeze it",
            art: LEMON,
            description: "Lemon",
        },
        Stage::Drink => Scene {
            label: "Tap the lemonade to drink it",
            art: GLASS_OF_LEMONADE,
            description: "Glass of lemonade",
        },
        Stage::Empty => Scene {
            label: "Tap the empty glass to start again",
            art: EMPTY_GLASS,
            description: "Empty glass",
        },
    }
}
