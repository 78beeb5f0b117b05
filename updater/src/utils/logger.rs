use std::io;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 应用数据目录名
const APP_DIR_NAME: &str = "bookkeeping";

/// 日志目录
///
/// - Linux: `~/.local/share/bookkeeping/logs/`
/// - macOS: `~/Library/Application Support/bookkeeping/logs/`
/// - Windows: `C:\Users\<user>\AppData\Roaming\bookkeeping\logs\`
///
/// 系统数据目录不可用时回退到 `./logs`
pub fn log_dir() -> PathBuf {
    dirs::data_dir()
        .map(|p| p.join(APP_DIR_NAME).join("logs"))
        .unwrap_or_else(|| PathBuf::from("logs"))
}

/// 初始化日志系统
///
/// - JSON格式文件日志: 按天轮转,文件名 `bookkeeping-updater.YYYY-MM-DD.log`
/// - non_blocking: 避免日志I/O阻塞更新检查
/// - 控制台日志: 人类可读格式,输出到 stderr,不干扰 stdout 上的命令结果
/// - 环境变量控制: 默认 INFO, `RUST_LOG=debug` 可调整
///
/// # 重要提示
/// 返回的guard必须被调用者保存,直到程序退出。
/// 如果guard被drop,日志写入器将被关闭。
pub fn init() -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    init_in(&log_dir())
}

/// 在指定目录初始化日志系统
///
/// 行为与 [`init`] 相同,目录不存在时自动创建。
pub fn init_in(log_dir: &Path) -> Result<WorkerGuard, Box<dyn std::error::Error>> {
    std::fs::create_dir_all(log_dir)?;

    let file_appender = RollingFileAppender::builder()
        .rotation(Rotation::DAILY)
        .filename_prefix("bookkeeping-updater")
        .filename_suffix("log")
        .build(log_dir)?;
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    // 文件层: JSON格式,便于日志分析工具解析
    let file_layer = fmt::layer()
        .json()
        .with_writer(non_blocking)
        .with_target(true)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_file(false)
        .with_line_number(false);

    // 控制台层
    let console_layer = fmt::layer()
        .with_writer(io::stderr)
        .with_target(false)
        .with_level(true);

    tracing_subscriber::registry()
        .with(env_filter)
        .with(file_layer)
        .with(console_layer)
        .try_init()?;

    Ok(guard)
}
