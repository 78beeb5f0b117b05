use serde::{Deserialize, Serialize};
use thiserror::Error;

/// 更新检查相关错误
///
/// 处理与发布API交互、下载安装包时的各种失败场景。
/// 每个错误都包含足够的上下文信息,帮助调试和恢复。
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum UpdateError {
    /// 网络请求失败
    ///
    /// 可能原因:
    /// - 网络连接中断
    /// - 发布服务器不可达
    /// - DNS解析失败
    #[error("网络请求失败: {0}")]
    NetworkFailed(String),

    /// 请求超时
    ///
    /// 超过配置的连接/读取超时 (默认15秒)
    #[error("请求超时: {0}")]
    Timeout(String),

    /// HTTP状态码错误
    ///
    /// 发布API或下载地址返回了非2xx状态码
    #[error("HTTP错误 {status}: {message}")]
    HttpStatus { status: u16, message: String },

    /// JSON解析失败
    ///
    /// 发布API返回的数据格式不符合预期 (如缺少 tag_name)
    #[error("响应数据解析失败: {0}")]
    JsonParseFailed(String),

    /// 文件系统错误
    ///
    /// 创建下载目录、写入或重命名安装包失败
    #[error("I/O错误: {0}")]
    Io(String),

    /// 无效的URL
    #[error("无效的URL: {0}")]
    InvalidUrl(String),
}

/// 配置加载相关错误
#[derive(Debug, Error, Serialize, Deserialize)]
#[serde(tag = "error", content = "details")]
pub enum ConfigError {
    /// 配置项取值无效
    ///
    /// 如 `UPDATER_TIMEOUT_SECS=abc`
    #[error("配置项 {key} 的值无效: {value}")]
    InvalidValue { key: String, value: String },

    /// I/O错误
    ///
    /// 读取 .env 文件时的文件系统错误
    #[error("I/O错误: {0}")]
    Io(String),
}

/// 实现从reqwest::Error到UpdateError的转换
impl From<reqwest::Error> for UpdateError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_timeout() {
            UpdateError::Timeout(err.to_string())
        } else if err.is_connect() {
            UpdateError::NetworkFailed(format!("无法连接到服务器: {}", err))
        } else if err.is_decode() {
            UpdateError::JsonParseFailed(err.to_string())
        } else if let Some(status) = err.status() {
            UpdateError::HttpStatus {
                status: status.as_u16(),
                message: err.to_string(),
            }
        } else {
            UpdateError::NetworkFailed(err.to_string())
        }
    }
}

impl From<serde_json::Error> for UpdateError {
    fn from(err: serde_json::Error) -> Self {
        UpdateError::JsonParseFailed(err.to_string())
    }
}

impl From<std::io::Error> for UpdateError {
    fn from(err: std::io::Error) -> Self {
        match err.kind() {
            std::io::ErrorKind::PermissionDenied => {
                UpdateError::Io(format!("Permission denied: {}", err))
            }
            std::io::ErrorKind::NotFound => {
                UpdateError::Io(format!("File or directory not found: {}", err))
            }
            _ => UpdateError::Io(err.to_string()),
        }
    }
}

impl From<std::io::Error> for ConfigError {
    fn from(err: std::io::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}

impl From<dotenvy::Error> for ConfigError {
    fn from(err: dotenvy::Error) -> Self {
        ConfigError::Io(err.to_string())
    }
}
