use bookkeeping_updater::{is_newer, Version};

// ============================================================================
// is_newer 测试
// ============================================================================

#[test]
fn test_is_newer_相同版本不算更新() {
    for v in ["1.0.0", "1.2.3", "0", "2024.10.1", "abc", ""] {
        assert!(!is_newer(v, v), "{:?}", v);
    }
}

#[test]
fn test_is_newer_补丁号更高() {
    assert!(is_newer("1.2.3", "1.2.2"));
}

#[test]
fn test_is_newer_末尾补零等价() {
    assert!(!is_newer("1.2.0", "1.2"));
    assert!(!is_newer("1.2", "1.2.0"));
}

#[test]
fn test_is_newer_主版本号更高() {
    assert!(is_newer("2.0.0", "1.9.9"));
}

#[test]
fn test_is_newer_较短版本缺失段视为0() {
    assert!(!is_newer("1.2.3", "1.2.3.1"));
    assert!(is_newer("1.2.3.1", "1.2.3"));
}

#[test]
fn test_is_newer_非法段视为0() {
    assert!(!is_newer("abc", "1.0.0"));
    assert!(is_newer("1.0.0", "abc"));
    assert!(!is_newer("1.x", "1.0"));
    assert!(is_newer("1.1", "1.x"));
}

#[test]
fn test_is_newer_按数值而非字典序() {
    assert!(is_newer("1.10.0", "1.9.0"));
    assert!(!is_newer("1.09", "1.9"));
}

#[test]
fn test_is_newer_负数段保留() {
    assert!(is_newer("1.0", "1.-1"));
    assert!(!is_newer("1.-1", "1.0"));
    assert!(is_newer("1.-1", "1.-2"));
}

#[test]
fn test_is_newer_超出i32范围的段视为0() {
    assert!(!is_newer("1.2147483648", "1.0"));
    assert!(!is_newer("1.3000000000", "1.5"));
    assert!(is_newer("1.2147483647", "1.5"));
    assert!(!is_newer("1.99999999999999999999999", "1.0"));
}

#[test]
fn test_is_newer_重复调用结果一致() {
    let first = is_newer("3.1.4", "3.1.3");
    for _ in 0..100 {
        assert_eq!(is_newer("3.1.4", "3.1.3"), first);
    }
}

// ============================================================================
// Version 排序测试
// ============================================================================

#[test]
fn test_version_排序() {
    let mut versions: Vec<Version> = ["1.10", "1.2.1", "1.2", "0.9.9", "1.2.0.0"]
        .into_iter()
        .map(Version::from)
        .collect();
    versions.sort();

    let rendered: Vec<String> = versions.iter().map(|v| v.to_string()).collect();
    assert_eq!(rendered[0], "0.9.9");
    assert_eq!(rendered[3], "1.2.1");
    assert_eq!(rendered[4], "1.10");
    assert_eq!(versions[1], versions[2]);
}

#[test]
fn test_version_跨线程调用() {
    let handles: Vec<_> = (0..4)
        .map(|i| std::thread::spawn(move || is_newer(&format!("1.{}", i + 1), "1.0")))
        .collect();
    for handle in handles {
        assert!(handle.join().unwrap());
    }
}
