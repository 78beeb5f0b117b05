use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 默认发布API地址
pub const DEFAULT_RELEASE_URL: &str =
    "https://api.github.com/repos/xiaofeng1coin/jizhangxt/releases/latest";

/// 默认超时 (秒), 同时作用于连接与读取
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

/// 默认安装包后缀
pub const DEFAULT_ASSET_SUFFIX: &str = ".apk";

/// 构建时版本号
pub const CURRENT_VERSION: &str = env!("CARGO_PKG_VERSION");

/// 更新检查配置
///
/// 封装一次更新检查所需的全部参数。
/// 所有字段都有默认值,可通过构建器方法逐项覆盖。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdaterConfig {
    /// 发布API地址 (返回最新发布的JSON)
    pub release_url: String,

    /// 请求超时 (秒)
    pub timeout_secs: u64,

    /// 安装包文件名后缀
    ///
    /// 默认: ".apk"
    pub asset_suffix: String,

    /// 安装包下载目录
    ///
    /// 默认: 系统下载目录,不可用时回退到 ./downloads
    pub download_dir: PathBuf,

    /// 当前已安装的版本
    pub current_version: String,

    /// 请求时携带的 User-Agent
    pub user_agent: String,
}

impl Default for UpdaterConfig {
    fn default() -> Self {
        Self {
            release_url: DEFAULT_RELEASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            asset_suffix: DEFAULT_ASSET_SUFFIX.to_string(),
            download_dir: dirs::download_dir().unwrap_or_else(|| PathBuf::from("downloads")),
            current_version: CURRENT_VERSION.to_string(),
            user_agent: format!("bookkeeping-updater/{}", CURRENT_VERSION),
        }
    }
}

impl UpdaterConfig {
    /// 设置发布API地址 (构建器模式)
    ///
    /// # 示例
    /// ```
    /// use bookkeeping_updater::models::UpdaterConfig;
    ///
    /// let config = UpdaterConfig::default()
    ///     .with_release_url("http://127.0.0.1:8080/releases/latest");
    /// ```
    pub fn with_release_url(mut self, url: impl Into<String>) -> Self {
        self.release_url = url.into();
        self
    }

    /// 设置超时 (构建器模式)
    pub fn with_timeout_secs(mut self, timeout_secs: u64) -> Self {
        self.timeout_secs = timeout_secs;
        self
    }

    /// 设置安装包后缀 (构建器模式)
    pub fn with_asset_suffix(mut self, suffix: impl Into<String>) -> Self {
        self.asset_suffix = suffix.into();
        self
    }

    /// 设置下载目录 (构建器模式)
    pub fn with_download_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.download_dir = dir.into();
        self
    }

    /// 设置当前版本 (构建器模式)
    ///
    /// 前导 `v` 会被去除,与发布标签保持同一格式。
    pub fn with_current_version(mut self, version: impl Into<String>) -> Self {
        self.current_version = crate::models::release::normalize_tag(&version.into());
        self
    }

    /// 生成日志摘要
    pub fn summary_for_logging(&self) -> String {
        format!(
            "url={} timeout={}s suffix={} dir={} current={}",
            self.release_url,
            self.timeout_secs,
            self.asset_suffix,
            self.download_dir.display(),
            self.current_version
        )
    }
}
