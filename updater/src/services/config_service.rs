use crate::models::{ConfigError, UpdaterConfig};
use std::collections::HashMap;
use std::env;
use std::path::{Path, PathBuf};

/// 配置项键名
pub const KEY_RELEASE_URL: &str = "UPDATER_RELEASE_URL";
pub const KEY_TIMEOUT_SECS: &str = "UPDATER_TIMEOUT_SECS";
pub const KEY_ASSET_SUFFIX: &str = "UPDATER_ASSET_SUFFIX";
pub const KEY_DOWNLOAD_DIR: &str = "UPDATER_DOWNLOAD_DIR";
pub const KEY_CURRENT_VERSION: &str = "UPDATER_CURRENT_VERSION";

const ALL_KEYS: [&str; 5] = [
    KEY_RELEASE_URL,
    KEY_TIMEOUT_SECS,
    KEY_ASSET_SUFFIX,
    KEY_DOWNLOAD_DIR,
    KEY_CURRENT_VERSION,
];

/// 配置服务
///
/// 加载更新检查配置,职责单一:
/// - 从 .env 文件读取配置项
/// - 进程环境变量覆盖文件中的同名项
/// - 未设置的项使用默认值
pub struct ConfigService;

impl ConfigService {
    /// 获取 .env 文件路径
    ///
    /// 查找顺序:
    /// 1. 当前工作目录的 .env
    /// 2. 上层目录(工作区根目录)的 .env
    ///
    /// 都不存在时返回 `None`
    fn env_file_path() -> Result<Option<PathBuf>, ConfigError> {
        let cwd = env::current_dir()?;

        let env_path = cwd.join(".env");
        if env_path.exists() {
            return Ok(Some(env_path));
        }

        if let Some(parent) = cwd.parent() {
            let parent_env = parent.join(".env");
            if parent_env.exists() {
                return Ok(Some(parent_env));
            }
        }

        Ok(None)
    }

    /// 读取 .env 文件中的全部配置项
    fn read_env_file(path: &Path) -> Result<HashMap<String, String>, ConfigError> {
        let mut vars = HashMap::new();
        for item in dotenvy::from_path_iter(path)? {
            let (key, value) = item?;
            vars.insert(key, value);
        }
        Ok(vars)
    }

    /// 将配置项解析为 `UpdaterConfig`
    ///
    /// 空值视为未设置。
    ///
    /// # 错误处理
    /// - `UPDATER_TIMEOUT_SECS` 不是正整数时返回 InvalidValue
    pub fn resolve(vars: &HashMap<String, String>) -> Result<UpdaterConfig, ConfigError> {
        fn get<'a>(vars: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
            vars.get(key).map(|v| v.trim()).filter(|v| !v.is_empty())
        }

        let mut config = UpdaterConfig::default();

        if let Some(url) = get(vars, KEY_RELEASE_URL) {
            config = config.with_release_url(url);
        }

        if let Some(raw) = get(vars, KEY_TIMEOUT_SECS) {
            let timeout = raw
                .parse::<u64>()
                .ok()
                .filter(|secs| *secs > 0)
                .ok_or_else(|| ConfigError::InvalidValue {
                    key: KEY_TIMEOUT_SECS.to_string(),
                    value: raw.to_string(),
                })?;
            config = config.with_timeout_secs(timeout);
        }

        if let Some(suffix) = get(vars, KEY_ASSET_SUFFIX) {
            config = config.with_asset_suffix(suffix);
        }

        if let Some(dir) = get(vars, KEY_DOWNLOAD_DIR) {
            config = config.with_download_dir(dir);
        }

        if let Some(version) = get(vars, KEY_CURRENT_VERSION) {
            config = config.with_current_version(version);
        }

        Ok(config)
    }

    /// 从指定 .env 文件加载配置 (不读取进程环境变量)
    pub fn load_from_file(path: &Path) -> Result<UpdaterConfig, ConfigError> {
        let vars = Self::read_env_file(path)?;
        Self::resolve(&vars)
    }

    /// 加载更新检查配置
    ///
    /// # 错误处理
    /// - 文件不存在时仅使用环境变量和默认值(不报错)
    /// - 文件读取失败时返回 Io
    /// - 配置值格式错误时返回 InvalidValue
    pub fn load() -> Result<UpdaterConfig, ConfigError> {
        let mut vars = match Self::env_file_path()? {
            Some(path) => {
                let vars = Self::read_env_file(&path)?;
                tracing::info!(path = %path.display(), count = vars.len(), "已读取 .env 配置文件");
                vars
            }
            None => {
                tracing::info!("配置文件不存在,使用环境变量与默认配置");
                HashMap::new()
            }
        };

        for key in ALL_KEYS {
            if let Ok(value) = env::var(key) {
                vars.insert(key.to_string(), value);
            }
        }

        let config = Self::resolve(&vars)?;

        tracing::info!(config = %config.summary_for_logging(), "已加载更新配置");

        Ok(config)
    }
}
