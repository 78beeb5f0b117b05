//! 命令行命令模块
//!
//! 包含所有子命令:
//! - compare: 比较两个版本号
//! - check: 查询最新发布并给出更新结论
//! - download: 检查更新并下载安装包

pub mod update_commands;

use crate::services::ConfigService;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// 退出码
pub mod exit_codes {
    pub const SUCCESS: i32 = 0;
    pub const UPDATE_ERROR: i32 = 1;
    pub const CONFIG_ERROR: i32 = 2;
}

#[derive(Debug, Parser)]
#[command(name = "bookkeeping-updater", version, about = "记账应用更新检查器")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// 判断 CANDIDATE 是否严格新于 BASELINE
    Compare { candidate: String, baseline: String },

    /// 查询最新发布
    Check {
        #[command(flatten)]
        target: TargetArgs,

        /// 以JSON输出结论
        #[arg(long)]
        json: bool,
    },

    /// 检查更新并下载安装包
    Download {
        #[command(flatten)]
        target: TargetArgs,

        /// 下载目录
        #[arg(long)]
        dir: Option<PathBuf>,

        /// 以JSON输出结果
        #[arg(long)]
        json: bool,
    },
}

/// 覆盖配置文件的公共参数
#[derive(Debug, Clone, Default, clap::Args)]
pub struct TargetArgs {
    /// 当前版本 (默认为构建版本)
    #[arg(long)]
    pub current: Option<String>,

    /// 发布API地址
    #[arg(long)]
    pub url: Option<String>,
}

/// 执行子命令,返回退出码
pub async fn dispatch(cli: Cli) -> i32 {
    let (target, dir, download, json) = match cli.command {
        Command::Compare {
            candidate,
            baseline,
        } => {
            println!("{}", update_commands::compare(&candidate, &baseline));
            return exit_codes::SUCCESS;
        }
        Command::Check { target, json } => (target, None, false, json),
        Command::Download { target, dir, json } => (target, dir, true, json),
    };

    let config = match ConfigService::load() {
        Ok(config) => config,
        Err(e) => {
            tracing::error!(error = %e, "配置加载失败");
            eprintln!("配置错误: {}", e);
            return exit_codes::CONFIG_ERROR;
        }
    };

    let mut config = update_commands::apply_target(config, &target);
    if let Some(dir) = dir {
        config = config.with_download_dir(dir);
    }

    let result = if download {
        update_commands::download(config, json).await
    } else {
        update_commands::check(config, json).await
    };

    match result {
        Ok(output) => {
            println!("{}", output);
            exit_codes::SUCCESS
        }
        Err(e) => {
            tracing::error!(error = %e, "更新检查失败");
            eprintln!("检查更新失败: {}", e);
            exit_codes::UPDATE_ERROR
        }
    }
}
