//! 记账应用更新检查器
//!
//! - `utils::version`: 点分数字版本号比较 (`is_newer`)
//! - `services`: 查询发布API、下载安装包、加载配置
//! - `commands`: 命令行入口

pub mod commands;
pub mod models;
pub mod services;
pub mod utils;

pub use utils::version::{is_newer, Version};
