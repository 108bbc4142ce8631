//! # 路径工具函数
//!
//! 提供与本地文件路径相关的工具函数，包括：
//! - 获取上传 / 下载对话框的默认目录
//! - 生成带时间戳的下载文件名
//! - 从任意路径中提取展示用的文件名

use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

/// 下载文件名前缀
const DOWNLOAD_FILE_PREFIX: &str = "generated-document-";

/// 获取下载对话框的默认目录
///
/// 优先使用系统 Downloads 目录，其次用户主目录，都无法确定时退回当前目录。
pub fn default_download_dir() -> PathBuf {
    dirs::download_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 获取上传文件选择器的默认目录：Documents → 主目录 → 当前目录
pub fn default_upload_dir() -> PathBuf {
    dirs::document_dir()
        .or_else(dirs::home_dir)
        .unwrap_or_else(|| PathBuf::from("."))
}

/// 当前 Unix 毫秒时间戳
pub fn unix_millis_now() -> u128 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis()
}

/// 生成下载文件名：`generated-document-<unix 毫秒时间戳>.md`
///
/// 扩展名固定为 `.md`，与所选文档格式无关。
///
/// # 参数
/// - `millis` - Unix 毫秒时间戳
pub fn download_file_name(millis: u128) -> String {
    format!("{}{}.md", DOWNLOAD_FILE_PREFIX, millis)
}

/// 提取路径中的文件名部分，无法提取时返回原字符串
pub fn display_file_name(path: &str) -> String {
    Path::new(path)
        .file_name()
        .map(|name| name.to_string_lossy().to_string())
        .unwrap_or_else(|| path.to_string())
}
