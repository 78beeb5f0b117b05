//! 版本比较工具
//!
//! 提供点分数字版本号的比较功能:
//! - 宽松解析: 无法解析的段视为 0,永不失败
//! - 严格解析: 供需要识别非法输入的调用方使用
//! - 补零比较: 段数较少的版本在末尾补 0 (`1.2` == `1.2.0`)

use std::cmp::Ordering;
use std::fmt;
use thiserror::Error;

/// 严格解析失败
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("版本段无效: 第 {index} 段 {segment:?} 不是32位整数")]
pub struct VersionParseError {
    /// 出错段的位置 (从 0 开始)
    pub index: usize,
    /// 原始段内容
    pub segment: String,
}

/// 版本号
///
/// 不可变的32位有符号整数序列。比较时按位置逐段进行,缺失的段视为 0,
/// 因此 `PartialEq`/`Ord` 都基于补零后的序列,而非原始段数。
#[derive(Debug, Clone, Default)]
pub struct Version {
    segments: Vec<i32>,
}

impl Version {
    /// 宽松解析 (如 "1.2.3")
    ///
    /// 按 `.` 分割,每段解析为 `i32`,解析失败或溢出的段记为 0,负数保留。
    /// 空字符串得到 `[0]`。
    ///
    /// # 示例
    /// ```
    /// use bookkeeping_updater::utils::version::Version;
    ///
    /// assert_eq!(Version::parse("1.x.3").segments(), &[1, 0, 3]);
    /// ```
    pub fn parse(version_str: &str) -> Self {
        let segments = version_str
            .split('.')
            .map(|segment| segment.parse::<i32>().unwrap_or(0))
            .collect();
        Self { segments }
    }

    /// 严格解析
    ///
    /// 任何一段不是32位整数即返回错误,不做补零替换。
    pub fn parse_strict(version_str: &str) -> Result<Self, VersionParseError> {
        let segments = version_str
            .split('.')
            .enumerate()
            .map(|(index, segment)| {
                segment.parse::<i32>().map_err(|_| VersionParseError {
                    index,
                    segment: segment.to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self { segments })
    }

    /// 原始段序列 (未补零)
    pub fn segments(&self) -> &[i32] {
        &self.segments
    }

    /// 第 `index` 段,越界返回 0
    fn segment(&self, index: usize) -> i32 {
        self.segments.get(index).copied().unwrap_or(0)
    }

    /// 比较版本大小
    pub fn compare(&self, other: &Version) -> Ordering {
        let max_len = self.segments.len().max(other.segments.len());
        for index in 0..max_len {
            match self.segment(index).cmp(&other.segment(index)) {
                Ordering::Equal => continue,
                ord => return ord,
            }
        }
        Ordering::Equal
    }

    /// 是否严格新于 `baseline`
    pub fn is_newer_than(&self, baseline: &Version) -> bool {
        self.compare(baseline) == Ordering::Greater
    }
}

impl PartialEq for Version {
    fn eq(&self, other: &Self) -> bool {
        self.compare(other) == Ordering::Equal
    }
}

impl Eq for Version {}

impl PartialOrd for Version {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Version {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

impl From<&str> for Version {
    fn from(version_str: &str) -> Self {
        Self::parse(version_str)
    }
}

impl fmt::Display for Version {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut first = true;
        for segment in &self.segments {
            if !first {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
            first = false;
        }
        Ok(())
    }
}

/// 判断 `candidate` 是否严格新于 `baseline`
///
/// 前缀 (如 `v`) 需由调用方预先去除。非法段按 0 处理,相等返回 `false`。
///
/// # 示例
/// ```
/// use bookkeeping_updater::utils::version::is_newer;
///
/// assert!(is_newer("1.2.3", "1.2.2"));
/// assert!(!is_newer("1.2.0", "1.2"));
/// ```
pub fn is_newer(candidate: &str, baseline: &str) -> bool {
    Version::parse(candidate).is_newer_than(&Version::parse(baseline))
}
