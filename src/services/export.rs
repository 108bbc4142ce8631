//! # 文档下载服务
//!
//! 把文档生成器的可编辑内容写入用户选择的位置。
//!
//! ## 写入策略
//! - 内容按 UTF-8 原样写入，不附加任何头部
//! - 目标路径缺少 `.md` 扩展名时自动补上（下载产物固定为 Markdown 文件）
//! - 父目录不存在时递归创建

use std::path::{Path, PathBuf};

use crate::error::AppError;
use crate::models::document::DownloadArtifact;

/// 确保路径以 `.md` 结尾（大小写不敏感），否则替换扩展名
pub fn ensure_markdown_extension(path: &Path) -> PathBuf {
    let mut result = path.to_path_buf();
    let is_markdown = result
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("md"));
    if !is_markdown {
        result.set_extension("md");
    }
    result
}

/// 写入下载产物
///
/// # 参数
/// - `target` - 保存对话框返回的路径
/// - `artifact` - 文件名与内容
///
/// # 返回值
/// 实际写入的文件路径
///
/// # 错误
/// 目录创建或文件写入失败时返回 `AppError::Io`
pub async fn write_artifact(target: &Path, artifact: &DownloadArtifact) -> Result<PathBuf, AppError> {
    let path = ensure_markdown_extension(target);

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }
    tokio::fs::write(&path, artifact.contents.as_bytes()).await?;

    log::info!(
        "文档已保存: {} ({} 字节)",
        path.display(),
        artifact.contents.len()
    );
    Ok(path)
}
