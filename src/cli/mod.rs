//! 无界面命令实现

pub mod run;
pub mod stages;

pub use run::{run_taps, RunReport};
pub use stages::{list_stages, show_graph};
