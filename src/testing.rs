//! # 测试辅助
//!
//! - `FakeBackend` - 内存实现的 `Backend`，按接口预置响应并记录每次调用
//! - `spawn_http_stub` - 基于 hyper 的本地 HTTP 桩服务，用于验证真实 reqwest 客户端

use std::collections::VecDeque;
use std::convert::Infallible;
use std::sync::{Arc, Mutex};

use bytes::Bytes;
use http_body_util::{BodyExt, Full};
use hyper::body::Incoming;
use hyper::server::conn::http1;
use hyper::service::service_fn;
use hyper::{Request, Response};
use hyper_util::rt::TokioIo;
use tokio::net::TcpListener;
use tokio::sync::Notify;

use crate::error::ApiError;
use crate::models::api::{
    GenerateDocumentRequest, GenerateDocumentResponse, GenerateTemplateRequest,
    GenerateTemplateResponse, SaveTemplateRequest, SaveTemplateResponse, SearchRequest,
    SearchResponse, StatusResponse, UploadFile, UploadResponse,
};
use crate::services::api_client::Backend;

// ============ FakeBackend ============

/// FakeBackend 记录的一次调用
#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    Status,
    Upload(UploadFile),
    Search(SearchRequest),
    GenerateTemplate(GenerateTemplateRequest),
    SaveTemplate(SaveTemplateRequest),
    GenerateDocument(GenerateDocumentRequest),
}

type Queue<T> = Mutex<VecDeque<Result<T, ApiError>>>;

/// 内存实现的后端
///
/// 每个接口有独立的响应队列，队列为空时 `/status` 返回空统计，其余接口返回网络错误。
/// 设置 `gate` 后，除 `/status` 外的接口会在返回前等待 `Notify`，用于构造"请求在途"的场景。
#[derive(Default)]
pub struct FakeBackend {
    calls: Mutex<Vec<Call>>,
    status: Queue<StatusResponse>,
    upload: Queue<UploadResponse>,
    search: Queue<SearchResponse>,
    generate_template: Queue<GenerateTemplateResponse>,
    save_template: Queue<SaveTemplateResponse>,
    generate_document: Queue<GenerateDocumentResponse>,
    gate: Option<Arc<Notify>>,
}

fn pop<T>(queue: &Queue<T>) -> Result<T, ApiError> {
    queue
        .lock()
        .unwrap()
        .pop_front()
        .unwrap_or_else(|| Err(ApiError::Network("no scripted response".into())))
}

impl FakeBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// 非 `/status` 接口在返回前等待 `gate.notify_one()`
    pub fn gated(gate: Arc<Notify>) -> Self {
        Self {
            gate: Some(gate),
            ..Self::default()
        }
    }

    pub fn push_status(&self, r: Result<StatusResponse, ApiError>) -> &Self {
        self.status.lock().unwrap().push_back(r);
        self
    }

    pub fn push_upload(&self, r: Result<UploadResponse, ApiError>) -> &Self {
        self.upload.lock().unwrap().push_back(r);
        self
    }

    pub fn push_search(&self, r: Result<SearchResponse, ApiError>) -> &Self {
        self.search.lock().unwrap().push_back(r);
        self
    }

    pub fn push_generate_template(&self, r: Result<GenerateTemplateResponse, ApiError>) -> &Self {
        self.generate_template.lock().unwrap().push_back(r);
        self
    }

    pub fn push_save_template(&self, r: Result<SaveTemplateResponse, ApiError>) -> &Self {
        self.save_template.lock().unwrap().push_back(r);
        self
    }

    pub fn push_generate_document(&self, r: Result<GenerateDocumentResponse, ApiError>) -> &Self {
        self.generate_document.lock().unwrap().push_back(r);
        self
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, pred: impl Fn(&Call) -> bool) -> usize {
        self.calls.lock().unwrap().iter().filter(|c| pred(c)).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    async fn wait_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

impl Backend for FakeBackend {
    async fn status(&self) -> Result<StatusResponse, ApiError> {
        self.record(Call::Status);
        self.status
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(StatusResponse::default()))
    }

    async fn upload(&self, file: UploadFile) -> Result<UploadResponse, ApiError> {
        self.record(Call::Upload(file));
        let response = pop(&self.upload);
        self.wait_gate().await;
        response
    }

    async fn search(&self, request: SearchRequest) -> Result<SearchResponse, ApiError> {
        self.record(Call::Search(request));
        let response = pop(&self.search);
        self.wait_gate().await;
        response
    }

    async fn generate_template(
        &self,
        request: GenerateTemplateRequest,
    ) -> Result<GenerateTemplateResponse, ApiError> {
        self.record(Call::GenerateTemplate(request));
        let response = pop(&self.generate_template);
        self.wait_gate().await;
        response
    }

    async fn save_template(
        &self,
        request: SaveTemplateRequest,
    ) -> Result<SaveTemplateResponse, ApiError> {
        self.record(Call::SaveTemplate(request));
        pop(&self.save_template)
    }

    async fn generate_document(
        &self,
        request: GenerateDocumentRequest,
    ) -> Result<GenerateDocumentResponse, ApiError> {
        self.record(Call::GenerateDocument(request));
        let response = pop(&self.generate_document);
        self.wait_gate().await;
        response
    }
}

// ============ HTTP 桩服务 ============

/// 桩服务收到的一次请求
#[derive(Debug, Clone)]
pub struct StubRequest {
    pub method: String,
    pub path: String,
    pub content_type: Option<String>,
    pub body: Bytes,
}

/// 在随机端口上启动 HTTP/1.1 桩服务
///
/// `handler` 根据请求返回 `(状态码, JSON 响应体)`。
///
/// # 返回值
/// `(根地址, 已接收请求列表)`
pub async fn spawn_http_stub<F>(handler: F) -> (String, Arc<Mutex<Vec<StubRequest>>>)
where
    F: Fn(&StubRequest) -> (u16, String) + Send + Sync + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let seen: Arc<Mutex<Vec<StubRequest>>> = Arc::new(Mutex::new(Vec::new()));
    let handler = Arc::new(handler);

    let seen_by_server = seen.clone();
    tokio::spawn(async move {
        while let Ok((stream, _)) = listener.accept().await {
            let handler = handler.clone();
            let seen = seen_by_server.clone();
            tokio::spawn(async move {
                let service = service_fn(move |req: Request<Incoming>| {
                    let handler = handler.clone();
                    let seen = seen.clone();
                    async move {
                        let method = req.method().to_string();
                        let path = req.uri().path().to_string();
                        let content_type = req
                            .headers()
                            .get(http::header::CONTENT_TYPE)
                            .and_then(|v| v.to_str().ok())
                            .map(str::to_string);
                        let body = req
                            .into_body()
                            .collect()
                            .await
                            .map(|collected| collected.to_bytes())
                            .unwrap_or_default();

                        let stub_request = StubRequest {
                            method,
                            path,
                            content_type,
                            body,
                        };
                        let (status, payload) = handler(&stub_request);
                        seen.lock().unwrap().push(stub_request);

                        let response = Response::builder()
                            .status(status)
                            .header(http::header::CONTENT_TYPE, "application/json")
                            .body(Full::new(Bytes::from(payload)))
                            .unwrap();
                        Ok::<_, Infallible>(response)
                    }
                });

                let _ = http1::Builder::new()
                    .serve_connection(TokioIo::new(stream), service)
                    .await;
            });
        }
    });

    (format!("http://{}", addr), seen)
}
