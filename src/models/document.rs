//! # 文档生成器数据模型

use serde::{Deserialize, Serialize};

use crate::models::stats::SavedTemplate;

/// 文档输出格式
///
/// 仅作为生成风格提示发送给后端；下载文件始终为 `.md`。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentFormat {
    #[default]
    Markdown,
    Html,
    Text,
}

/// 一次生成调用的结果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GeneratedDocument {
    pub content: String,
    pub format: DocumentFormat,
}

/// 下载产物：文件名 + 内容
#[derive(Debug, Clone, PartialEq)]
pub struct DownloadArtifact {
    /// `generated-document-<unix 毫秒时间戳>.md`
    pub file_name: String,
    pub contents: String,
}

/// 文档生成器页快照
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocumentGeneratorView {
    /// 可选模板列表，来自侧边栏最近一次刷新
    pub saved_templates: Vec<SavedTemplate>,
    pub selected_template: Option<String>,
    pub user_query: String,
    pub document_format: DocumentFormat,
    /// 后端生成的原始内容
    pub generated_document: Option<GeneratedDocument>,
    /// 用户可编辑的副本
    pub editable_content: String,
    pub is_generating: bool,
    pub is_editing: bool,
}
