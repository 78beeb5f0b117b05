//! 更新相关命令
//!
//! 每个命令返回待打印的文本,由调用方决定输出位置。

use super::TargetArgs;
use crate::models::{UpdateDecision, UpdateError, UpdaterConfig};
use crate::services::{DownloadService, UpdateChecker};
use crate::utils::version::is_newer;

/// 将命令行参数覆盖到配置上
pub fn apply_target(config: UpdaterConfig, target: &TargetArgs) -> UpdaterConfig {
    let config = match &target.current {
        Some(current) => config.with_current_version(current.as_str()),
        None => config,
    };
    match &target.url {
        Some(url) => config.with_release_url(url.as_str()),
        None => config,
    }
}

/// 比较两个版本号,输出 `true` / `false`
pub fn compare(candidate: &str, baseline: &str) -> String {
    is_newer(candidate, baseline).to_string()
}

/// 渲染更新结论
fn render_decision(decision: &UpdateDecision, json: bool) -> Result<String, UpdateError> {
    if json {
        return Ok(serde_json::to_string_pretty(decision)?);
    }

    let mut text = decision.description();
    if let UpdateDecision::Available(update) = decision {
        text.push_str(&format!("\n下载地址: {}", update.download_url));
        if !update.notes.is_empty() {
            text.push_str(&format!("\n\n更新日志:\n\n{}", update.notes));
        }
    }
    Ok(text)
}

/// 查询最新发布
pub async fn check(config: UpdaterConfig, json: bool) -> Result<String, UpdateError> {
    let checker = UpdateChecker::new(config)?;
    let decision = checker.check_for_update().await?;
    render_decision(&decision, json)
}

/// 检查更新并在有可用安装包时下载
///
/// 没有更新或缺少安装包时只输出结论,不视为错误。
pub async fn download(config: UpdaterConfig, json: bool) -> Result<String, UpdateError> {
    let download_dir = config.download_dir.clone();
    let checker = UpdateChecker::new(config)?;

    let update = match checker.check_for_update().await? {
        UpdateDecision::Available(update) => update,
        other => return render_decision(&other, json),
    };

    let downloader = DownloadService::new(checker.client().clone());
    let outcome = downloader.download(&update, &download_dir).await?;

    if json {
        return Ok(serde_json::to_string_pretty(&outcome)?);
    }
    Ok(format!(
        "v{} 已下载: {} ({} 字节)",
        update.version,
        outcome.path.display(),
        outcome.bytes
    ))
}
