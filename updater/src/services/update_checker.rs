//! 更新检查服务
//!
//! 负责查询发布API并给出更新结论:
//! - 获取最新发布信息
//! - 规范化发布标签并与当前版本比较
//! - 在发布附件中查找安装包

use crate::models::release::{normalize_tag, package_file_name};
use crate::models::{Release, UpdateDecision, UpdateError, UpdateInfo, UpdaterConfig};
use crate::utils::version::is_newer;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use std::time::Duration;
use tracing::{debug, error, info, warn};

/// 发布API要求的 Accept 头
const GITHUB_ACCEPT: &str = "application/vnd.github+json";

/// 错误信息中保留的响应体长度
const BODY_PREVIEW_CHARS: usize = 200;

/// 更新检查服务
pub struct UpdateChecker {
    client: reqwest::Client,
    config: UpdaterConfig,
}

impl UpdateChecker {
    /// 创建新的检查服务
    ///
    /// # 错误
    /// - `UpdateError::InvalidUrl`: 发布API地址无法解析
    /// - `UpdateError::NetworkFailed`: HTTP客户端构建失败
    pub fn new(config: UpdaterConfig) -> Result<Self, UpdateError> {
        reqwest::Url::parse(&config.release_url)
            .map_err(|e| UpdateError::InvalidUrl(format!("{}: {}", config.release_url, e)))?;

        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(GITHUB_ACCEPT));

        let timeout = Duration::from_secs(config.timeout_secs);
        let client = reqwest::Client::builder()
            .user_agent(config.user_agent.clone())
            .default_headers(headers)
            .connect_timeout(timeout)
            .timeout(timeout)
            .build()
            .map_err(|e| UpdateError::NetworkFailed(format!("HTTP客户端初始化失败: {}", e)))?;

        info!(
            release_url = %config.release_url,
            timeout_secs = config.timeout_secs,
            "更新检查服务已初始化"
        );

        Ok(Self { client, config })
    }

    /// 当前配置
    pub fn config(&self) -> &UpdaterConfig {
        &self.config
    }

    /// 共享的HTTP客户端,供下载服务复用
    pub fn client(&self) -> &reqwest::Client {
        &self.client
    }

    /// 获取最新发布信息
    ///
    /// # 错误
    /// - `UpdateError::NetworkFailed` / `UpdateError::Timeout`: 请求失败
    /// - `UpdateError::HttpStatus`: 非2xx状态码
    /// - `UpdateError::JsonParseFailed`: 响应不是合法的发布JSON
    pub async fn fetch_latest_release(&self) -> Result<Release, UpdateError> {
        debug!(url = %self.config.release_url, "正在获取最新发布信息");

        let response = self
            .client
            .get(&self.config.release_url)
            .send()
            .await
            .map_err(|e| {
                error!(error = %e, "发布信息请求失败");
                UpdateError::from(e)
            })?;

        let status = response.status();
        let body = response.text().await?;

        if !status.is_success() {
            error!(status = status.as_u16(), "发布API返回错误状态");
            return Err(UpdateError::HttpStatus {
                status: status.as_u16(),
                message: body_preview(&body),
            });
        }

        let release: Release = serde_json::from_str(&body).map_err(|e| {
            error!(error = %e, body = %body_preview(&body), "发布信息解析失败");
            UpdateError::JsonParseFailed(e.to_string())
        })?;

        debug!(
            tag = %release.tag_name,
            assets = release.assets.len(),
            "已获取最新发布信息"
        );

        Ok(release)
    }

    /// 根据发布信息给出更新结论
    ///
    /// `current` 与发布标签都会先去除前导 `v`。
    pub fn decide(release: &Release, current: &str, asset_suffix: &str) -> UpdateDecision {
        let latest = release.version();
        let current = normalize_tag(current);

        if !is_newer(&latest, &current) {
            return UpdateDecision::UpToDate { current };
        }

        match release.find_asset(asset_suffix) {
            Some(asset) => UpdateDecision::Available(UpdateInfo {
                file_name: package_file_name(&latest, asset_suffix),
                download_url: asset.browser_download_url.clone(),
                notes: release.notes().to_string(),
                size: asset.size,
                version: latest,
            }),
            None => UpdateDecision::AssetMissing { version: latest },
        }
    }

    /// 检查是否有可用更新
    ///
    /// 使用配置中的当前版本与安装包后缀。
    pub async fn check_for_update(&self) -> Result<UpdateDecision, UpdateError> {
        let release = self.fetch_latest_release().await?;
        let decision = Self::decide(
            &release,
            &self.config.current_version,
            &self.config.asset_suffix,
        );

        match &decision {
            UpdateDecision::UpToDate { current } => {
                info!(current = %current, latest = %release.version(), "当前已是最新版本");
            }
            UpdateDecision::Available(update) => {
                info!(
                    current = %self.config.current_version,
                    latest = %update.version,
                    download_url = %update.download_url,
                    "发现新版本"
                );
            }
            UpdateDecision::AssetMissing { version } => {
                warn!(
                    current = %self.config.current_version,
                    latest = %version,
                    suffix = %self.config.asset_suffix,
                    "发现新版本,但未找到匹配的安装包"
                );
            }
        }

        Ok(decision)
    }
}

/// 截取响应体前若干字符用于日志与错误信息
fn body_preview(body: &str) -> String {
    body.chars().take(BODY_PREVIEW_CHARS).collect()
}
