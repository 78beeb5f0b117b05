//! 数据模型模块
//!
//! 包含所有核心数据结构:
//! - errors: 错误类型定义 (更新检查、配置加载)
//! - release: 发布信息与更新检查结论
//! - updater_config: 更新检查配置

pub mod errors;
pub mod release;
pub mod updater_config;

// 重导出常用类型,简化外部引用
pub use errors::{ConfigError, UpdateError};
pub use release::{Release, ReleaseAsset, UpdateDecision, UpdateInfo};
pub use updater_config::UpdaterConfig;
