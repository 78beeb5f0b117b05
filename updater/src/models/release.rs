//! 发布信息数据模型
//!
//! 对应发布API (GitHub "latest release") 的JSON结构,以及更新检查的结论:
//! - `Release`: 一次发布的元数据
//! - `ReleaseAsset`: 发布附带的可下载文件
//! - `UpdateInfo`: 可供下载的新版本信息
//! - `UpdateDecision`: 更新检查结论

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// 发布附件
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReleaseAsset {
    /// 文件名 (如: "app-release.apk")
    pub name: String,

    /// 浏览器直接下载地址
    pub browser_download_url: String,

    /// 文件大小 (字节)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// 一次发布
///
/// 未知字段会被忽略,仅 `tag_name` 为必需字段。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Release {
    /// 发布标签 (如: "v1.2.3")
    pub tag_name: String,

    /// 发布标题
    #[serde(default)]
    pub name: Option<String>,

    /// 更新日志 (Markdown)
    #[serde(default)]
    pub body: Option<String>,

    /// 发布时间
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,

    /// 附件列表,保持API返回顺序
    #[serde(default)]
    pub assets: Vec<ReleaseAsset>,
}

impl Release {
    /// 去除前缀后的版本号
    pub fn version(&self) -> String {
        normalize_tag(&self.tag_name)
    }

    /// 查找第一个文件名以 `suffix` 结尾的附件
    pub fn find_asset(&self, suffix: &str) -> Option<&ReleaseAsset> {
        self.assets.iter().find(|asset| asset.name.ends_with(suffix))
    }

    /// 更新日志,缺失时为空字符串
    pub fn notes(&self) -> &str {
        self.body.as_deref().unwrap_or("")
    }
}

/// 规范化发布标签
///
/// 去除首尾空白和一个前导 `v`/`V`: `"v1.2.3"` -> `"1.2.3"`
pub fn normalize_tag(tag: &str) -> String {
    let trimmed = tag.trim();
    trimmed
        .strip_prefix(['v', 'V'])
        .unwrap_or(trimmed)
        .to_string()
}

/// 安装包文件名
///
/// 格式: `Bookkeeping_v{version}{suffix}`
pub fn package_file_name(version: &str, suffix: &str) -> String {
    format!("Bookkeeping_v{}{}", version, suffix)
}

/// 可下载的新版本
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UpdateInfo {
    /// 新版本号 (已去除前缀)
    pub version: String,
    /// 更新日志
    pub notes: String,
    /// 安装包下载地址
    pub download_url: String,
    /// 本地保存的文件名
    pub file_name: String,
    /// 安装包大小 (字节)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,
}

/// 更新检查结论
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum UpdateDecision {
    /// 当前已是最新版本
    UpToDate { current: String },
    /// 发现新版本且找到安装包
    Available(UpdateInfo),
    /// 发现新版本,但发布中没有匹配的安装包
    AssetMissing { version: String },
}

impl UpdateDecision {
    /// 是否存在更新 (无论安装包是否可用)
    pub fn has_update(&self) -> bool {
        !matches!(self, UpdateDecision::UpToDate { .. })
    }

    /// 面向用户的简短描述
    pub fn description(&self) -> String {
        match self {
            UpdateDecision::UpToDate { current } => format!("当前已是最新版本 (v{})", current),
            UpdateDecision::Available(info) => format!("发现新版本 v{}", info.version),
            UpdateDecision::AssetMissing { version } => {
                format!("找到新版本 v{},但未找到安装包下载链接", version)
            }
        }
    }
}
