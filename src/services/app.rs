//! # 应用状态编排
//!
//! `SynthesisApp` 把各工作流的同步状态机与异步后端调用组合起来，
//! 作为 Tauri managed state 供 command 层使用。
//!
//! ## 并发模型
//! 每个工作流各自持有一把 `std::sync::Mutex`，只在状态转移的瞬间加锁，
//! 绝不在 `.await` 期间持有锁：
//! 1. 加锁 → `begin` 占用请求槽位 → 解锁
//! 2. 等待后端响应
//! 3. 加锁 → `complete` 释放槽位并应用结果 → 解锁
//!
//! 不同工作流之间互不阻塞，例如搜索进行中仍可生成文档。
//!
//! ## 回调
//! - 上传成功：追加最近文件，然后刷新侧边栏统计
//! - 模板保存：无论后端返回何种状态码，都刷新侧边栏统计

use std::path::Path;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::config::ClientConfig;
use crate::error::AppError;
use crate::models::api::UploadFile;
use crate::models::document::{DocumentFormat, DocumentGeneratorView, DownloadArtifact};
use crate::models::session::{Credentials, SessionView, View};
use crate::models::stats::{SidebarView, StatsSnapshot};
use crate::models::template::TemplateBuilderView;
use crate::models::upload::{DataProcessingView, RecentFile};
use crate::services::api_client::{ApiClient, Backend};
use crate::services::auth::{AcceptAnyCredentials, Authenticator};
use crate::services::document_generator::DocumentGenerator;
use crate::services::search::SearchWorkflow;
use crate::services::session::SessionState;
use crate::services::template_builder::{SAVE_FAILURE_MESSAGE, TemplateBuilder};
use crate::services::upload::UploadWorkflow;
use crate::utils::file_kind::first_accepted;
use crate::utils::path::display_file_name;

/// 注册到 Tauri 的应用状态类型
pub type AppState = SynthesisApp<ApiClient, AcceptAnyCredentials>;

/// 加锁；锁被毒化时继续使用内部数据（状态机的每次转移都是完整的赋值）
fn lock<T>(mutex: &Mutex<T>) -> MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(PoisonError::into_inner)
}

/// 模板保存结果
#[derive(Debug, Clone, PartialEq)]
pub struct TemplateSaved {
    /// 后端返回的提示文本，原样展示
    pub notice: String,
    /// 保存后刷新得到的侧边栏
    pub sidebar: SidebarView,
}

pub struct SynthesisApp<B, A = AcceptAnyCredentials> {
    backend: B,
    authenticator: A,
    config: ClientConfig,
    session: Mutex<SessionState>,
    upload: Mutex<UploadWorkflow>,
    search: Mutex<SearchWorkflow>,
    template: Mutex<TemplateBuilder>,
    document: Mutex<DocumentGenerator>,
}

impl<B: Backend> SynthesisApp<B, AcceptAnyCredentials> {
    pub fn new(backend: B, config: ClientConfig) -> Self {
        Self::with_authenticator(backend, AcceptAnyCredentials, config)
    }
}

impl<B: Backend, A: Authenticator> SynthesisApp<B, A> {
    pub fn with_authenticator(backend: B, authenticator: A, config: ClientConfig) -> Self {
        Self {
            session: Mutex::new(SessionState::new(config.recent_file_limit)),
            upload: Mutex::new(UploadWorkflow::default()),
            search: Mutex::new(SearchWorkflow::default()),
            template: Mutex::new(TemplateBuilder::default()),
            document: Mutex::new(DocumentGenerator::default()),
            backend,
            authenticator,
            config,
        }
    }

    fn ensure_authenticated(&self) -> Result<(), AppError> {
        lock(&self.session).ensure_authenticated()
    }

    // ============ 会话 ============

    pub fn session_view(&self) -> SessionView {
        lock(&self.session).view()
    }

    pub fn login(&self, credentials: Credentials) -> Result<SessionView, AppError> {
        let mut session = lock(&self.session);
        session.login(&self.authenticator, &credentials)?;
        Ok(session.view())
    }

    /// 登出只影响登录态，各工作流状态保持原样
    pub fn logout(&self) -> SessionView {
        let mut session = lock(&self.session);
        session.logout();
        session.view()
    }

    pub fn navigate(&self, view: View) -> Result<SessionView, AppError> {
        let mut session = lock(&self.session);
        session.navigate(view)?;
        Ok(session.view())
    }

    pub fn sidebar(&self) -> SidebarView {
        lock(&self.session).sidebar()
    }

    /// 从后端拉取最新统计并整体替换快照
    ///
    /// 失败时只记录警告，保留上一次的快照。
    pub async fn refresh_stats(&self) -> SidebarView {
        let result = self.backend.status().await;
        match result {
            Ok(status) => {
                let snapshot = StatsSnapshot::from(status);
                log::debug!(
                    "统计已刷新: {} 个向量，{} 个文件，{} 个模板",
                    snapshot.stats.vector_count,
                    snapshot.stats.file_count,
                    snapshot.templates.len()
                );
                lock(&self.session).replace_snapshot(snapshot);
            }
            Err(e) => log::warn!("刷新统计失败，保留上一次快照: {}", e),
        }
        self.sidebar()
    }

    // ============ 数据处理：上传 + 搜索 ============

    pub fn data_processing_view(&self) -> DataProcessingView {
        let (upload_status, message) = {
            let upload = lock(&self.upload);
            (upload.status(), upload.message().to_string())
        };
        let search = lock(&self.search);
        DataProcessingView {
            upload_status,
            message,
            search_results: search.results().to_vec(),
            is_searching: search.is_searching(),
        }
    }

    /// 上传入口：从候选路径中取第一个 PDF / TXT 文件上传
    ///
    /// 没有符合类型的文件，或上传工作流不在 idle 状态时为空操作。
    /// 本地读取失败与后端失败一样进入 error 状态。
    ///
    /// # 返回值
    /// 上传成功时返回刷新后的侧边栏，否则为 None
    pub async fn upload_paths<P: AsRef<Path>>(
        &self,
        paths: &[P],
    ) -> Result<Option<SidebarView>, AppError> {
        self.ensure_authenticated()?;

        let names: Vec<String> = paths
            .iter()
            .map(|p| display_file_name(&p.as_ref().to_string_lossy()))
            .collect();
        let Some((index, kind)) = first_accepted(&names) else {
            log::debug!("没有可上传的文件（仅支持 PDF / TXT）: {:?}", names);
            return Ok(None);
        };

        let begun = lock(&self.upload).begin();
        let Some(handle) = begun else {
            log::debug!("上传工作流不在 idle 状态，忽略新文件");
            return Ok(None);
        };

        let bytes = match tokio::fs::read(paths[index].as_ref()).await {
            Ok(bytes) => bytes,
            Err(e) => {
                lock(&self.upload).complete(handle, Err(AppError::from(e)));
                return Ok(None);
            }
        };

        let file = UploadFile {
            file_name: names[index].clone(),
            content_type: kind.content_type().to_string(),
            bytes,
        };
        let result = self.backend.upload(file).await;
        let recent = lock(&self.upload).complete(handle, result);

        match recent {
            Some(recent) => Ok(Some(self.on_upload_success(recent).await)),
            None => Ok(None),
        }
    }

    async fn on_upload_success(&self, recent: RecentFile) -> SidebarView {
        lock(&self.session).push_recent_file(recent);
        self.refresh_stats().await
    }

    pub fn reset_upload(&self) -> DataProcessingView {
        lock(&self.upload).reset();
        self.data_processing_view()
    }

    /// 相似度搜索；空查询或已有在途搜索时不发请求
    pub async fn search(&self, query: &str) -> Result<DataProcessingView, AppError> {
        self.ensure_authenticated()?;

        let begun = lock(&self.search).begin(query, self.config.search_result_count);
        if let Some((handle, request)) = begun {
            let result = self.backend.search(request).await;
            lock(&self.search).complete(handle, result);
        }
        Ok(self.data_processing_view())
    }

    // ============ 模板构建器 ============

    pub fn template_view(&self) -> TemplateBuilderView {
        let template = lock(&self.template);
        TemplateBuilderView {
            chat_history: template.transcript().to_vec(),
            current_template: template.draft().to_string(),
            is_loading: template.is_loading(),
        }
    }

    pub async fn send_template_message(&self, text: &str) -> Result<TemplateBuilderView, AppError> {
        self.ensure_authenticated()?;

        let begun = lock(&self.template).begin_send(text);
        if let Some((handle, request)) = begun {
            let result = self.backend.generate_template(request).await;
            lock(&self.template).complete_send(handle, result);
        }
        Ok(self.template_view())
    }

    /// 保存当前草稿
    ///
    /// # 错误
    /// - 名称或草稿为空：`AppError::Validation`，不发请求
    /// - 请求未能完成：`AppError::Notice`，不刷新统计
    pub async fn save_template(&self, name: Option<String>) -> Result<TemplateSaved, AppError> {
        self.ensure_authenticated()?;

        let request = lock(&self.template).prepare_save(name.as_deref())?;
        log::info!("保存模板: {}", request.name);

        match self.backend.save_template(request).await {
            Ok(response) => {
                let notice = response.notice();
                let sidebar = self.on_template_saved().await;
                Ok(TemplateSaved { notice, sidebar })
            }
            Err(e) => {
                log::error!("保存模板失败: {}", e);
                Err(AppError::Notice(SAVE_FAILURE_MESSAGE.to_string()))
            }
        }
    }

    async fn on_template_saved(&self) -> SidebarView {
        self.refresh_stats().await
    }

    // ============ 文档生成器 ============

    /// 文档生成器页快照；可选模板列表取自最近一次统计快照
    pub fn document_view(&self) -> DocumentGeneratorView {
        let saved_templates = lock(&self.session).snapshot().templates.clone();
        let document = lock(&self.document);
        DocumentGeneratorView {
            saved_templates,
            selected_template: document.selected_template().map(str::to_string),
            user_query: document.user_query().to_string(),
            document_format: document.format(),
            generated_document: document.generated().cloned(),
            editable_content: document.editable_content().to_string(),
            is_generating: document.is_generating(),
            is_editing: document.is_editing(),
        }
    }

    pub fn select_template(&self, name: Option<String>) -> DocumentGeneratorView {
        lock(&self.document).select_template(name);
        self.document_view()
    }

    pub fn set_document_query(&self, query: String) -> DocumentGeneratorView {
        lock(&self.document).set_query(query);
        self.document_view()
    }

    pub fn set_document_format(&self, format: DocumentFormat) -> DocumentGeneratorView {
        lock(&self.document).set_format(format);
        self.document_view()
    }

    pub fn edit_document(&self, content: String) -> DocumentGeneratorView {
        lock(&self.document).edit(content);
        self.document_view()
    }

    pub fn toggle_document_edit(&self) -> DocumentGeneratorView {
        lock(&self.document).toggle_edit();
        self.document_view()
    }

    /// 生成文档；未选模板、需求为空或生成中时不发请求
    ///
    /// # 错误
    /// 生成失败时返回 `AppError::Notice`，已有内容保持不变
    pub async fn generate_document(&self) -> Result<DocumentGeneratorView, AppError> {
        self.ensure_authenticated()?;

        let begun = lock(&self.document).begin();
        let Some((handle, request)) = begun else {
            return Ok(self.document_view());
        };

        let format = request.format;
        let result = self.backend.generate_document(request).await;
        lock(&self.document).complete(handle, format, result)?;
        Ok(self.document_view())
    }

    /// 构造下载产物；可编辑内容为空时返回 None
    pub fn prepare_download(&self, millis: u128) -> Result<Option<DownloadArtifact>, AppError> {
        self.ensure_authenticated()?;
        Ok(lock(&self.document).download(millis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ApiError;
    use crate::models::api::{
        GenerateDocumentResponse, GenerateTemplateResponse, SaveTemplateResponse, SearchResponse,
        StatusResponse, UploadResponse,
    };
    use crate::models::search::SearchResult;
    use crate::models::stats::SavedTemplate;
    use crate::models::template::ChatMessage;
    use crate::models::upload::UploadStatus;
    use crate::services::template_builder::{
        ACKNOWLEDGEMENT, GREETING, SAVE_VALIDATION_MESSAGE,
    };
    use crate::testing::{Call, FakeBackend};
    use pretty_assertions::assert_eq;
    use std::path::PathBuf;
    use std::sync::Arc;
    use tempfile::TempDir;
    use tokio::sync::Notify;

    fn signed_in(backend: FakeBackend) -> SynthesisApp<FakeBackend> {
        let app = SynthesisApp::new(backend, ClientConfig::default());
        app.login(Credentials::default()).unwrap();
        app
    }

    fn write_file(dir: &TempDir, name: &str, contents: &[u8]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, contents).unwrap();
        path
    }

    fn status_with_templates(names: &[&str]) -> StatusResponse {
        StatusResponse {
            total_vectors: 120,
            total_files: 3,
            templates_in_memory: names.iter().map(|n| n.to_string()).collect(),
            ..StatusResponse::default()
        }
    }

    fn hit(document: &str) -> SearchResult {
        SearchResult {
            document: document.into(),
            metadata: None,
            distance: Some(0.1),
        }
    }

    fn is_upload(call: &Call) -> bool {
        matches!(call, Call::Upload(_))
    }

    fn is_status(call: &Call) -> bool {
        matches!(call, Call::Status)
    }

    // ============ 会话 ============

    #[test]
    fn test_workflows_require_login() {
        let app = SynthesisApp::new(FakeBackend::new(), ClientConfig::default());
        assert_eq!(app.navigate(View::TemplateBuilder), Err(AppError::NotAuthenticated));
        assert_eq!(app.session_view().active_view, View::DataProcessing);
        assert_eq!(app.prepare_download(1), Err(AppError::NotAuthenticated));
    }

    #[tokio::test]
    async fn test_logged_out_search_makes_no_call() {
        let backend = FakeBackend::new();
        let app = SynthesisApp::new(backend, ClientConfig::default());
        assert_eq!(app.search("revenue").await, Err(AppError::NotAuthenticated));
        assert!(app.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_logout_keeps_workflow_state() {
        let backend = FakeBackend::new();
        backend.push_generate_template(Ok(GenerateTemplateResponse {
            template: "# Report".into(),
        }));
        let app = signed_in(backend);
        app.navigate(View::TemplateBuilder).unwrap();
        app.send_template_message("make a report").await.unwrap();

        let view = app.logout();
        assert!(!view.authenticated);
        assert_eq!(view.active_view, View::DataProcessing);
        assert_eq!(app.template_view().current_template, "# Report");
        assert_eq!(app.template_view().chat_history.len(), 3);
    }

    // ============ 统计 ============

    #[tokio::test]
    async fn test_refresh_failure_keeps_previous_snapshot() {
        let backend = FakeBackend::new();
        backend
            .push_status(Ok(status_with_templates(&["Report"])))
            .push_status(Err(ApiError::Network("connection refused".into())));
        let app = SynthesisApp::new(backend, ClientConfig::default());

        let first = app.refresh_stats().await;
        assert_eq!(first.stats.vector_count, 120);
        assert_eq!(first.stats.storage_estimate, "1.2 MB");

        let second = app.refresh_stats().await;
        assert_eq!(second, first);
    }

    // ============ 上传 ============

    #[tokio::test]
    async fn test_upload_report_adds_recent_file_and_refreshes_stats() {
        let dir = TempDir::new().unwrap();
        let report = write_file(&dir, "report.pdf", b"%PDF-1.4");

        let backend = FakeBackend::new();
        backend
            .push_upload(Ok(UploadResponse {
                filename: "report.pdf".into(),
                chunks_created: 7,
            }))
            .push_status(Ok(status_with_templates(&[])));
        let app = signed_in(backend);

        let sidebar = app.upload_paths(&[report]).await.unwrap().unwrap();

        assert_eq!(
            sidebar.recent_files[0],
            RecentFile {
                name: "report.pdf".into(),
                size_descriptor: "7 chunks".into(),
            }
        );
        assert_eq!(sidebar.stats.vector_count, 120);
        assert_eq!(
            app.backend.calls(),
            vec![
                Call::Upload(UploadFile {
                    file_name: "report.pdf".into(),
                    content_type: "application/pdf".into(),
                    bytes: b"%PDF-1.4".to_vec(),
                }),
                Call::Status,
            ]
        );

        let view = app.data_processing_view();
        assert_eq!(view.upload_status, UploadStatus::Success);
        assert_eq!(view.message, "Successfully processed report.pdf. Created 7 chunks.");
    }

    #[tokio::test]
    async fn test_upload_takes_first_qualifying_file() {
        let dir = TempDir::new().unwrap();
        let docx = write_file(&dir, "interview.docx", b"PK");
        let notes = write_file(&dir, "notes.TXT", b"hello");
        let report = write_file(&dir, "report.pdf", b"%PDF");

        let backend = FakeBackend::new();
        backend.push_upload(Ok(UploadResponse {
            filename: "notes.TXT".into(),
            chunks_created: 1,
        }));
        let app = signed_in(backend);

        app.upload_paths(&[docx, notes, report]).await.unwrap();

        assert_eq!(app.backend.count(is_upload), 1);
        match &app.backend.calls()[0] {
            Call::Upload(file) => {
                assert_eq!(file.file_name, "notes.TXT");
                assert_eq!(file.content_type, "text/plain");
            }
            other => panic!("unexpected call: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_upload_without_qualifying_file_is_noop() {
        let dir = TempDir::new().unwrap();
        let docx = write_file(&dir, "interview.docx", b"PK");
        let app = signed_in(FakeBackend::new());

        assert_eq!(app.upload_paths(&[docx]).await.unwrap(), None);
        assert!(app.backend.calls().is_empty());
        assert_eq!(app.data_processing_view().upload_status, UploadStatus::Idle);
    }

    #[tokio::test]
    async fn test_upload_backend_error_skips_callback() {
        let dir = TempDir::new().unwrap();
        let report = write_file(&dir, "report.pdf", b"%PDF");

        let backend = FakeBackend::new();
        backend.push_upload(Err(ApiError::Backend {
            status: 500,
            message: "Network response was not ok".into(),
        }));
        let app = signed_in(backend);

        assert_eq!(app.upload_paths(&[report.clone()]).await.unwrap(), None);
        assert_eq!(app.backend.count(is_status), 0);
        assert!(app.sidebar().recent_files.is_empty());

        let view = app.data_processing_view();
        assert_eq!(view.upload_status, UploadStatus::Error);
        assert_eq!(view.message, "Upload failed: Network response was not ok");

        // error 状态下需要先 reset 才能再次上传
        app.upload_paths(&[report.clone()]).await.unwrap();
        assert_eq!(app.backend.count(is_upload), 1);
        assert_eq!(app.reset_upload().upload_status, UploadStatus::Idle);
    }

    #[tokio::test]
    async fn test_unreadable_file_enters_error_state() {
        let dir = TempDir::new().unwrap();
        let missing = dir.path().join("missing.pdf");
        let app = signed_in(FakeBackend::new());

        assert_eq!(app.upload_paths(&[missing]).await.unwrap(), None);

        let view = app.data_processing_view();
        assert_eq!(view.upload_status, UploadStatus::Error);
        assert!(view.message.starts_with("Upload failed: File operation failed"));
        assert!(app.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_recent_files_capped_at_five() {
        let dir = TempDir::new().unwrap();
        let backend = FakeBackend::new();
        for i in 0..6 {
            backend.push_upload(Ok(UploadResponse {
                filename: format!("file{}.pdf", i),
                chunks_created: i,
            }));
        }
        let app = signed_in(backend);

        for i in 0..6 {
            let path = write_file(&dir, &format!("file{}.pdf", i), b"%PDF");
            app.upload_paths(&[path]).await.unwrap();
            app.reset_upload();
        }

        let names: Vec<String> = app.sidebar().recent_files.into_iter().map(|f| f.name).collect();
        assert_eq!(
            names,
            vec!["file5.pdf", "file4.pdf", "file3.pdf", "file2.pdf", "file1.pdf"]
        );
    }

    // ============ 搜索 ============

    #[tokio::test]
    async fn test_blank_search_keeps_prior_results() {
        let backend = FakeBackend::new();
        backend.push_search(Ok(SearchResponse {
            results: vec![hit("Q3 revenue grew")],
        }));
        let app = signed_in(backend);

        app.search("revenue").await.unwrap();
        let view = app.search("   ").await.unwrap();

        assert_eq!(view.search_results, vec![hit("Q3 revenue grew")]);
        assert_eq!(
            app.backend.calls(),
            vec![Call::Search(crate::models::api::SearchRequest {
                query: "revenue".into(),
                n_results: 5,
            })]
        );
    }

    #[tokio::test]
    async fn test_second_search_while_in_flight_is_noop() {
        let gate = Arc::new(Notify::new());
        let backend = FakeBackend::gated(gate.clone());
        backend.push_search(Ok(SearchResponse {
            results: vec![hit("first")],
        }));
        let app = signed_in(backend);

        let (first, ()) = tokio::join!(app.search("revenue"), async {
            tokio::task::yield_now().await;
            assert!(app.data_processing_view().is_searching);

            let second = app.search("margin").await.unwrap();
            assert!(second.is_searching);
            assert_eq!(app.backend.count(|c| matches!(c, Call::Search(_))), 1);

            gate.notify_one();
        });

        let view = first.unwrap();
        assert!(!view.is_searching);
        assert_eq!(view.search_results, vec![hit("first")]);
        assert_eq!(app.backend.count(|c| matches!(c, Call::Search(_))), 1);
    }

    #[tokio::test]
    async fn test_search_failure_clears_results() {
        let backend = FakeBackend::new();
        backend
            .push_search(Ok(SearchResponse {
                results: vec![hit("a")],
            }))
            .push_search(Err(ApiError::Backend {
                status: 500,
                message: "Search failed".into(),
            }));
        let app = signed_in(backend);

        app.search("revenue").await.unwrap();
        let view = app.search("margin").await.unwrap();
        assert!(view.search_results.is_empty());
    }

    // ============ 模板构建器 ============

    #[tokio::test]
    async fn test_chat_send_updates_draft_and_transcript() {
        let backend = FakeBackend::new();
        backend.push_generate_template(Ok(GenerateTemplateResponse {
            template: "# Report\n...".into(),
        }));
        let app = signed_in(backend);

        let view = app
            .send_template_message("Create a business report template")
            .await
            .unwrap();

        assert_eq!(view.current_template, "# Report\n...");
        assert_eq!(
            view.chat_history,
            vec![
                ChatMessage::ai(GREETING),
                ChatMessage::user("Create a business report template"),
                ChatMessage::ai(ACKNOWLEDGEMENT),
            ]
        );
        assert_eq!(
            app.backend.calls(),
            vec![Call::GenerateTemplate(
                crate::models::api::GenerateTemplateRequest {
                    prompt: "Create a business report template".into(),
                    current_template: String::new(),
                }
            )]
        );
    }

    #[tokio::test]
    async fn test_chat_failure_still_appends_ai_message() {
        let app = signed_in(FakeBackend::new());
        let view = app.send_template_message("hello").await.unwrap();

        assert_eq!(view.chat_history.len(), 3);
        assert!(view.chat_history[2].text.starts_with("Sorry, an error occurred: "));
        assert!(view.current_template.is_empty());
        assert!(!view.is_loading);
    }

    #[tokio::test]
    async fn test_save_validation_makes_no_call() {
        let backend = FakeBackend::new();
        backend.push_generate_template(Ok(GenerateTemplateResponse {
            template: "# Report".into(),
        }));
        let app = signed_in(backend);

        let err = app.save_template(Some("Report".into())).await.unwrap_err();
        assert_eq!(err, AppError::Validation(SAVE_VALIDATION_MESSAGE.into()));

        app.send_template_message("make a report").await.unwrap();
        assert!(app.save_template(None).await.is_err());
        assert!(app.save_template(Some(String::new())).await.is_err());

        assert_eq!(app.backend.count(|c| matches!(c, Call::SaveTemplate(_))), 0);
    }

    #[tokio::test]
    async fn test_save_shows_backend_message_and_refreshes() {
        let backend = FakeBackend::new();
        backend
            .push_generate_template(Ok(GenerateTemplateResponse {
                template: "# Report".into(),
            }))
            .push_save_template(Ok(SaveTemplateResponse {
                message: None,
                error: Some("Template name and content are required.".into()),
            }))
            .push_status(Ok(status_with_templates(&["Report"])));
        let app = signed_in(backend);
        app.send_template_message("make a report").await.unwrap();

        let saved = app.save_template(Some("Report".into())).await.unwrap();
        assert_eq!(saved.notice, "Template name and content are required.");
        assert_eq!(saved.sidebar.saved_templates, vec![SavedTemplate::from_name("Report")]);
        assert_eq!(app.backend.count(is_status), 1);
    }

    #[tokio::test]
    async fn test_save_transport_failure_skips_refresh() {
        let backend = FakeBackend::new();
        backend
            .push_generate_template(Ok(GenerateTemplateResponse {
                template: "# Report".into(),
            }))
            .push_save_template(Err(ApiError::Network("connection refused".into())));
        let app = signed_in(backend);
        app.send_template_message("make a report").await.unwrap();

        let err = app.save_template(Some("Report".into())).await.unwrap_err();
        assert_eq!(err.to_string(), SAVE_FAILURE_MESSAGE);
        assert_eq!(app.backend.count(is_status), 0);
    }

    // ============ 文档生成器 ============

    #[tokio::test]
    async fn test_generate_without_template_makes_no_call() {
        let app = signed_in(FakeBackend::new());
        app.set_document_query("Summarise Q3".into());

        let view = app.generate_document().await.unwrap();
        assert!(view.generated_document.is_none());
        assert!(app.backend.calls().is_empty());
    }

    #[tokio::test]
    async fn test_generate_then_edit_keeps_generated_content() {
        let backend = FakeBackend::new();
        backend
            .push_status(Ok(status_with_templates(&["Report"])))
            .push_generate_document(Ok(GenerateDocumentResponse {
                generated_content: "# Q3 Summary".into(),
            }));
        let app = signed_in(backend);
        app.refresh_stats().await;

        let view = app.document_view();
        assert_eq!(view.saved_templates, vec![SavedTemplate::from_name("Report")]);

        app.select_template(Some("Report".into()));
        app.set_document_query("Summarise Q3".into());
        app.set_document_format(DocumentFormat::Html);
        let view = app.generate_document().await.unwrap();

        let generated = view.generated_document.unwrap();
        assert_eq!(generated.content, "# Q3 Summary");
        assert_eq!(generated.format, DocumentFormat::Html);
        assert_eq!(view.editable_content, "# Q3 Summary");

        let view = app.edit_document("# Q3 Summary (edited)".into());
        assert_eq!(view.editable_content, "# Q3 Summary (edited)");
        assert_eq!(view.generated_document.unwrap().content, "# Q3 Summary");

        let artifact = app.prepare_download(42).unwrap().unwrap();
        assert_eq!(artifact.file_name, "generated-document-42.md");
        assert_eq!(artifact.contents, "# Q3 Summary (edited)");
    }

    #[tokio::test]
    async fn test_generate_failure_is_notice_and_keeps_content() {
        let backend = FakeBackend::new();
        backend.push_generate_document(Err(ApiError::Backend {
            status: 500,
            message: "Failed to generate document".into(),
        }));
        let app = signed_in(backend);
        app.select_template(Some("Report".into()));
        app.set_document_query("Summarise Q3".into());
        app.edit_document("my notes".into());

        let err = app.generate_document().await.unwrap_err();
        assert_eq!(
            err,
            AppError::Notice("Failed to generate document: Failed to generate document".into())
        );

        let view = app.document_view();
        assert!(view.generated_document.is_none());
        assert_eq!(view.editable_content, "my notes");
        assert!(!view.is_generating);
    }

    #[test]
    fn test_download_with_empty_content_is_noop() {
        let app = signed_in(FakeBackend::new());
        assert_eq!(app.prepare_download(1), Ok(None));

        let view = app.toggle_document_edit();
        assert!(view.is_editing);
        assert_eq!(app.prepare_download(1), Ok(None));
    }
}
