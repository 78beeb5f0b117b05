use bookkeeping_updater::commands::{dispatch, Cli};
use bookkeeping_updater::utils::logger;
use clap::Parser;

#[tokio::main]
async fn main() {
    // 初始化日志系统, guard 需保持到退出前
    let guard = match logger::init() {
        Ok(guard) => Some(guard),
        Err(e) => {
            eprintln!("日志系统初始化失败: {}", e);
            None
        }
    };

    let cli = Cli::parse();
    let code = dispatch(cli).await;

    drop(guard);
    std::process::exit(code);
}
