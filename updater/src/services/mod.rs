//! 服务层模块
//!
//! 包含所有业务逻辑服务:
//! - `config_service`: 配置加载,合并 .env 文件与环境变量
//! - `update_checker`: 发布API客户端,给出更新结论
//! - `download_service`: 安装包下载
//!
//! # 服务架构
//!
//! ```text
//! ┌─────────────────┐
//! │   CLI Commands  │
//! └────────┬────────┘
//!          │
//!          ▼
//! ┌──────────────────────────────────────┐
//! │         Services Layer               │
//! │  ┌──────────────┐  ┌──────────────┐ │
//! │  │UpdateChecker │─▶│DownloadSvc   │ │
//! │  └──────┬───────┘  └──────┬───────┘ │
//! └─────────┼─────────────────┼─────────┘
//!           ▼                 ▼
//!      Release API       Asset URL
//! ```
//!
//! # 使用示例
//!
//! ```no_run
//! use bookkeeping_updater::services::{ConfigService, DownloadService, UpdateChecker};
//! use bookkeeping_updater::models::UpdateDecision;
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ConfigService::load()?;
//! let download_dir = config.download_dir.clone();
//! let checker = UpdateChecker::new(config)?;
//!
//! if let UpdateDecision::Available(update) = checker.check_for_update().await? {
//!     let downloader = DownloadService::new(checker.client().clone());
//!     let outcome = downloader.download(&update, &download_dir).await?;
//!     println!("saved to {}", outcome.path.display());
//! }
//! # Ok(())
//! # }
//! ```

pub mod config_service;
pub mod download_service;
pub mod update_checker;

// 重导出常用类型,简化外部引用
pub use config_service::ConfigService;
pub use download_service::{DownloadOutcome, DownloadService};
pub use update_checker::UpdateChecker;
