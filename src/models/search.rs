//! # 相似度搜索数据模型

use serde::{Deserialize, Serialize};

/// 搜索结果的元数据，后端原样透传向量库中存储的 metadata
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchMetadata {
    #[serde(default)]
    pub filename: Option<String>,
}

/// 单条搜索结果
///
/// 对应前端 TypeScript 接口：
/// ```typescript
/// interface SearchResult {
///   document: string;
///   metadata?: { filename?: string };
///   distance?: number;
/// }
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchResult {
    /// 命中的文本块内容
    pub document: String,

    #[serde(default)]
    pub metadata: Option<SearchMetadata>,

    /// 与查询向量的距离，越小越相似
    #[serde(default)]
    pub distance: Option<f64>,
}

impl SearchResult {
    /// 来源文件名（metadata 缺失时为 None）
    pub fn filename(&self) -> Option<&str> {
        self.metadata.as_ref()?.filename.as_deref()
    }
}
