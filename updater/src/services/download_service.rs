//! 安装包下载服务
//!
//! 将新版本安装包下载到本地目录:
//! - 目标文件已存在时先删除
//! - 边下载边写入 `.part` 临时文件,完成后重命名
//! - 写入或重命名失败时清理临时文件

use crate::models::{UpdateError, UpdateInfo};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, error, info};

/// 下载结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DownloadOutcome {
    /// 安装包保存路径
    pub path: PathBuf,
    /// 写入的字节数
    pub bytes: u64,
}

/// 下载服务
pub struct DownloadService {
    client: reqwest::Client,
}

impl DownloadService {
    /// 使用已有的HTTP客户端创建下载服务
    pub fn new(client: reqwest::Client) -> Self {
        Self { client }
    }

    /// 下载安装包到 `dir/update.file_name`
    ///
    /// # 错误
    /// - `UpdateError::HttpStatus`: 下载地址返回非2xx状态码
    /// - `UpdateError::Io`: 目录创建、写入或重命名失败
    /// - `UpdateError::NetworkFailed` / `UpdateError::Timeout`: 传输中断
    pub async fn download(
        &self,
        update: &UpdateInfo,
        dir: &Path,
    ) -> Result<DownloadOutcome, UpdateError> {
        let destination = dir.join(&update.file_name);
        let partial = dir.join(format!("{}.part", update.file_name));

        info!(
            url = %update.download_url,
            destination = %destination.display(),
            "开始下载安装包"
        );

        fs::create_dir_all(dir).await?;

        let existing_file = fs::metadata(&destination)
            .await
            .map(|meta| meta.is_file())
            .unwrap_or(false);
        if existing_file {
            debug!(path = %destination.display(), "删除已存在的旧安装包");
            fs::remove_file(&destination).await?;
        }

        let response = self.client.get(&update.download_url).send().await?;
        let status = response.status();
        if !status.is_success() {
            error!(status = status.as_u16(), url = %update.download_url, "下载地址返回错误状态");
            return Err(UpdateError::HttpStatus {
                status: status.as_u16(),
                message: format!("下载失败: {}", update.download_url),
            });
        }

        let bytes = match Self::write_body(response, &partial).await {
            Ok(bytes) => bytes,
            Err(e) => {
                error!(error = %e, "下载中断,清理临时文件");
                Self::discard_partial(&partial).await;
                return Err(e);
            }
        };

        if let Err(e) = fs::rename(&partial, &destination).await {
            error!(error = %e, destination = %destination.display(), "重命名安装包失败,清理临时文件");
            Self::discard_partial(&partial).await;
            return Err(e.into());
        }

        info!(
            path = %destination.display(),
            bytes,
            "安装包下载完成"
        );

        Ok(DownloadOutcome {
            path: destination,
            bytes,
        })
    }

    /// 删除临时文件,失败仅记录日志
    async fn discard_partial(partial: &Path) {
        if let Err(e) = fs::remove_file(partial).await {
            debug!(path = %partial.display(), error = %e, "临时文件未能删除");
        }
    }

    /// 逐块写入响应体,返回总字节数
    async fn write_body(mut response: reqwest::Response, path: &Path) -> Result<u64, UpdateError> {
        let mut file = fs::File::create(path).await?;
        let mut written: u64 = 0;

        while let Some(chunk) = response.chunk().await? {
            file.write_all(&chunk).await?;
            written += chunk.len() as u64;
        }

        file.flush().await?;
        Ok(written)
    }
}
