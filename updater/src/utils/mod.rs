//! 工具模块
//!
//! - `version`: 版本号解析与比较
//! - `logger`: 日志系统初始化

pub mod logger;
pub mod version;
