//! # 后端 API 客户端
//!
//! 对本地后端服务的薄封装，负责发起请求并把成功 / 失败统一为：
//! - 成功（2xx）：按接口解析为强类型响应体
//! - 后端报告的失败（非 2xx）：读取响应 JSON 的 `error` 字段，缺失时使用各接口的通用文案
//! - 网络失败：请求未能完成，返回 `ApiError::Network`
//!
//! 例外是 `/save-template`：无论状态码如何都解析响应体并返回，
//! 由调用方原样展示后端给出的 `message`。
//!
//! 工作流通过 `Backend` trait 访问后端，测试中替换为内存实现。

use std::future::Future;

use reqwest::multipart::{Form, Part};
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::config::ClientConfig;
use crate::error::ApiError;
use crate::models::api::{
    ErrorBody, GenerateDocumentRequest, GenerateDocumentResponse, GenerateTemplateRequest,
    GenerateTemplateResponse, SaveTemplateRequest, SaveTemplateResponse, SearchRequest,
    SearchResponse, StatusResponse, UploadFile, UploadResponse,
};

/// 各接口非 2xx 且响应体没有 `error` 字段时使用的通用文案
const STATUS_FALLBACK: &str = "Failed to fetch status";
const UPLOAD_FALLBACK: &str = "Network response was not ok";
const SEARCH_FALLBACK: &str = "Search failed";
const GENERATE_TEMPLATE_FALLBACK: &str = "Failed to generate template";
const GENERATE_DOCUMENT_FALLBACK: &str = "Failed to generate document";

/// 后端服务能力
///
/// 方法按值接收请求体，返回的 future 必须是 `Send`，
/// 以便在 Tauri 的多线程 tokio runtime 上执行。
pub trait Backend: Send + Sync {
    /// `GET /status`
    fn status(&self) -> impl Future<Output = Result<StatusResponse, ApiError>> + Send;

    /// `POST /upload`（multipart 字段 `file`）
    fn upload(
        &self,
        file: UploadFile,
    ) -> impl Future<Output = Result<UploadResponse, ApiError>> + Send;

    /// `POST /search`
    fn search(
        &self,
        request: SearchRequest,
    ) -> impl Future<Output = Result<SearchResponse, ApiError>> + Send;

    /// `POST /generate-template`
    fn generate_template(
        &self,
        request: GenerateTemplateRequest,
    ) -> impl Future<Output = Result<GenerateTemplateResponse, ApiError>> + Send;

    /// `POST /save-template`
    ///
    /// 只有网络失败或响应体无法解析时返回错误，非 2xx 响应同样返回 `Ok`。
    fn save_template(
        &self,
        request: SaveTemplateRequest,
    ) -> impl Future<Output = Result<SaveTemplateResponse, ApiError>> + Send;

    /// `POST /generate-document`
    fn generate_document(
        &self,
        request: GenerateDocumentRequest,
    ) -> impl Future<Output = Result<GenerateDocumentResponse, ApiError>> + Send;
}

/// 基于 reqwest 的后端客户端
///
/// 未设置超时：请求挂起时对应工作流会一直保持忙碌状态。
pub struct ApiClient {
    http: reqwest::Client,
    config: ClientConfig,
}

impl ApiClient {
    /// 创建客户端
    ///
    /// 后端始终位于本机回环地址，因此禁用系统代理，避免请求被转发到代理服务器。
    pub fn new(config: ClientConfig) -> Self {
        let http = reqwest::Client::builder()
            .no_proxy()
            .build()
            .unwrap_or_else(|e| {
                log::warn!("构建 HTTP 客户端失败，使用默认配置: {}", e);
                reqwest::Client::new()
            });
        Self { http, config }
    }

    /// 发送 JSON 请求体并解析响应
    async fn post_json<B, T>(&self, path: &str, body: &B, fallback: &str) -> Result<T, ApiError>
    where
        B: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let response = self
            .http
            .post(self.config.endpoint(path))
            .json(body)
            .send()
            .await?;
        decode_response(response, fallback).await
    }
}

/// 统一的响应处理：非 2xx 转为 `ApiError::Backend`，2xx 解析为目标类型
async fn decode_response<T: DeserializeOwned>(
    response: reqwest::Response,
    fallback: &str,
) -> Result<T, ApiError> {
    let status = response.status();

    if !status.is_success() {
        // 错误响应体不是 JSON 或没有 error 字段时使用通用文案
        let message = response
            .json::<ErrorBody>()
            .await
            .ok()
            .and_then(|body| body.error)
            .unwrap_or_else(|| fallback.to_string());
        return Err(ApiError::Backend {
            status: status.as_u16(),
            message,
        });
    }

    response
        .json::<T>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}

impl Backend for ApiClient {
    async fn status(&self) -> Result<StatusResponse, ApiError> {
        let response = self.http.get(self.config.endpoint("/status")).send().await?;
        decode_response(response, STATUS_FALLBACK).await
    }

    async fn upload(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        log::info!(
            "上传文件: {} ({}, {} 字节)",
            file.file_name,
            file.content_type,
            file.bytes.len()
        );

        let part = Part::bytes(file.bytes)
            .file_name(file.file_name)
            .mime_str(&file.content_type)?;
        let form = Form::new().part("file", part);

        let response = self
            .http
            .post(self.config.endpoint("/upload"))
            .multipart(form)
            .send()
            .await?;
        decode_response(response, UPLOAD_FALLBACK).await
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ApiError> {
        self.post_json("/search", &request, SEARCH_FALLBACK).await
    }

    async fn generate_template(
        &self,
        request: GenerateTemplateRequest,
    ) -> Result<GenerateTemplateResponse, ApiError> {
        self.post_json("/generate-template", &request, GENERATE_TEMPLATE_FALLBACK)
            .await
    }

    async fn save_template(
        &self,
        request: SaveTemplateRequest,
    ) -> Result<SaveTemplateResponse, ApiError> {
        let response = self
            .http
            .post(self.config.endpoint("/save-template"))
            .json(&request)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            log::warn!("保存模板返回非成功状态码: {}", status);
        }

        response
            .json::<SaveTemplateResponse>()
            .await
            .map_err(|e| ApiError::Decode(e.to_string()))
    }

    async fn generate_document(
        &self,
        request: GenerateDocumentRequest,
    ) -> Result<GenerateDocumentResponse, ApiError> {
        self.post_json("/generate-document", &request, GENERATE_DOCUMENT_FALLBACK)
            .await
    }
}
