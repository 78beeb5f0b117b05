use bookkeeping_updater::models::release::normalize_tag;
use bookkeeping_updater::models::Release;

const GITHUB_RELEASE: &str = r#"{
    "url": "https://api.github.com/repos/xiaofeng1coin/jizhangxt/releases/1",
    "id": 1,
    "tag_name": "v1.4.2",
    "name": "v1.4.2",
    "draft": false,
    "prerelease": false,
    "published_at": "2025-10-05T10:30:45Z",
    "body": "- 修复账单导出\n- 优化分类列表",
    "assets": [
        {
            "name": "output-metadata.json",
            "browser_download_url": "https://github.com/x/releases/download/v1.4.2/output-metadata.json",
            "size": 320
        },
        {
            "name": "app-release.apk",
            "browser_download_url": "https://github.com/x/releases/download/v1.4.2/app-release.apk",
            "size": 10485760,
            "download_count": 12
        }
    ]
}"#;

#[test]
fn test_release_解析GitHub响应() {
    let release: Release = serde_json::from_str(GITHUB_RELEASE).unwrap();

    assert_eq!(release.version(), "1.4.2");
    assert_eq!(release.assets.len(), 2);
    assert!(release.notes().contains("修复账单导出"));
    assert!(release.published_at.is_some());
}

#[test]
fn test_release_按后缀查找附件() {
    let release: Release = serde_json::from_str(GITHUB_RELEASE).unwrap();

    let apk = release.find_asset(".apk").unwrap();
    assert_eq!(apk.name, "app-release.apk");
    assert_eq!(apk.size, Some(10485760));

    assert!(release.find_asset(".ipa").is_none());
}

#[test]
fn test_release_可选字段缺失() {
    let release: Release = serde_json::from_str(r#"{"tag_name": "2.0"}"#).unwrap();

    assert_eq!(release.notes(), "");
    assert!(release.assets.is_empty());
    assert!(release.find_asset(".apk").is_none());
}

#[test]
fn test_normalize_tag_只去除一个前缀() {
    assert_eq!(normalize_tag("v1.0"), "1.0");
    assert_eq!(normalize_tag("release-1.0"), "release-1.0");
}
