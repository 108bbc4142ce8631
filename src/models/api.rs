//! # 后端接口数据模型
//!
//! 对应后端 HTTP 接口的请求体和响应体。字段名与后端 JSON 保持一致（snake_case），
//! 因此这里的结构体不做 `rename_all`。
//!
//! 响应体只声明前端实际用到的字段，其余字段由 serde 忽略；
//! 可能缺失的字段统一使用 `#[serde(default)]`，与原前端 `data.x || 0` 的宽松读取一致。

use serde::{Deserialize, Serialize};

use crate::models::document::DocumentFormat;
use crate::models::search::SearchResult;

/// `GET /status` 响应体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct StatusResponse {
    /// 向量库中的向量（文本块）总数
    #[serde(default)]
    pub total_vectors: u64,

    /// 向量库中的去重文件数
    #[serde(default)]
    pub total_files: u64,

    /// 后端内存中已保存的模板名称列表
    #[serde(default)]
    pub templates_in_memory: Vec<String>,

    /// 已入库的文件名列表（侧边栏暂未使用，仅用于日志）
    #[serde(default)]
    pub files_in_database: Vec<String>,

    /// 向量库连接状态描述，如 "Connected" 或 "Error: ..."
    #[serde(default)]
    pub chromadb_status: Option<String>,
}

/// 待上传的单个文件（`POST /upload` 的 multipart 字段 `file`）
#[derive(Debug, Clone, PartialEq)]
pub struct UploadFile {
    pub file_name: String,
    /// `application/pdf` 或 `text/plain`
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// `POST /upload` 成功响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UploadResponse {
    pub filename: String,
    pub chunks_created: u64,
}

/// `POST /search` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SearchRequest {
    pub query: String,
    pub n_results: u32,
}

/// `POST /search` 成功响应体
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub results: Vec<SearchResult>,
}

/// `POST /generate-template` 请求体
///
/// `current_template` 携带当前草稿，使后端可以在其基础上做增量修改而非重新生成。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTemplateRequest {
    pub prompt: String,
    pub current_template: String,
}

/// `POST /generate-template` 成功响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateTemplateResponse {
    pub template: String,
}

/// `POST /save-template` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveTemplateRequest {
    pub name: String,
    pub content: String,
}

/// `POST /save-template` 响应体
///
/// 无论 HTTP 状态码如何都会被解析：成功时后端返回 `message`，
/// 校验失败（400）时返回 `error`。
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SaveTemplateResponse {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub error: Option<String>,
}

impl SaveTemplateResponse {
    /// 展示给用户的文本：优先 `message`，其次 `error`
    pub fn notice(&self) -> String {
        self.message
            .clone()
            .or_else(|| self.error.clone())
            .unwrap_or_else(|| "Template save returned no message.".to_string())
    }
}

/// `POST /generate-document` 请求体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentRequest {
    pub template_name: String,
    pub user_query: String,
    pub format: DocumentFormat,
}

/// `POST /generate-document` 成功响应体
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerateDocumentResponse {
    pub generated_content: String,
}

/// 非 2xx 响应体中的错误字段
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}
