//! 测试公共模块
//!
//! 提供发布API的Mock响应和客户端构造工具。

#![allow(dead_code)]

use bookkeeping_updater::models::UpdaterConfig;
use serde_json::{json, Value};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Mock发布API路径
pub const RELEASE_PATH: &str = "/repos/owner/bookkeeping/releases/latest";

/// 安装包路径
pub const ASSET_PATH: &str = "/downloads/app-release.apk";

/// 构造发布JSON
///
/// `assets` 为 (文件名, 下载地址) 列表
pub fn release_json(tag: &str, notes: &str, assets: &[(&str, String)]) -> Value {
    json!({
        "url": "https://api.github.com/repos/owner/bookkeeping/releases/1",
        "tag_name": tag,
        "name": format!("Release {}", tag),
        "body": notes,
        "draft": false,
        "prerelease": false,
        "published_at": "2025-10-05T10:30:45Z",
        "assets": assets
            .iter()
            .map(|(name, url)| json!({
                "name": name,
                "browser_download_url": url,
                "size": 4,
                "content_type": "application/vnd.android.package-archive"
            }))
            .collect::<Vec<_>>()
    })
}

/// 挂载发布API响应
pub async fn mount_release(server: &MockServer, body: Value) {
    Mock::given(method("GET"))
        .and(path(RELEASE_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

/// 挂载安装包下载响应
pub async fn mount_asset(server: &MockServer, bytes: &[u8]) {
    Mock::given(method("GET"))
        .and(path(ASSET_PATH))
        .respond_with(ResponseTemplate::new(200).set_body_bytes(bytes.to_vec()))
        .mount(server)
        .await;
}

/// 指向Mock服务器的配置
pub fn config_for(server: &MockServer, current: &str) -> UpdaterConfig {
    UpdaterConfig::default()
        .with_release_url(format!("{}{}", server.uri(), RELEASE_PATH))
        .with_current_version(current)
        .with_timeout_secs(5)
}

/// Mock服务器上的安装包地址
pub fn asset_url(server: &MockServer) -> String {
    format!("{}{}", server.uri(), ASSET_PATH)
}
