//! # 上传与数据处理页数据模型
//!
//! - `UploadStatus` - 上传状态机的四个状态
//! - `RecentFile` - 侧边栏"最近文件"条目
//! - `DataProcessingView` - 数据处理页（上传 + 搜索）返回给前端的快照

use serde::Serialize;

use crate::models::search::SearchResult;

/// 上传状态
///
/// 对应前端 TypeScript 类型：
/// ```typescript
/// type UploadStatus = 'idle' | 'uploading' | 'success' | 'error';
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum UploadStatus {
    #[default]
    Idle,
    Uploading,
    Success,
    Error,
}

/// 最近上传的文件
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RecentFile {
    /// 后端返回的文件名
    pub name: String,
    /// 大小描述，如 "7 chunks"
    pub size_descriptor: String,
}

impl RecentFile {
    pub fn from_chunks(name: impl Into<String>, chunks_created: u64) -> Self {
        Self {
            name: name.into(),
            size_descriptor: format!("{} chunks", chunks_created),
        }
    }
}

/// 数据处理页快照
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DataProcessingView {
    pub upload_status: UploadStatus,
    /// 上传成功或失败的提示文本；idle / uploading 时为空
    pub message: String,
    pub search_results: Vec<SearchResult>,
    pub is_searching: bool,
}
