//! # 文档生成器工作流
//!
//! 选择模板 + 输入需求 + 选择格式 → 请求后端生成 → 本地编辑 / 下载。
//!
//! ## 生成内容与可编辑内容
//! 生成成功时，`generated` 与 `editable_content` 由同一个值初始化，此后两者完全独立：
//! 用户编辑只修改 `editable_content`，不会覆盖后端生成的原始记录。
//!
//! ## 下载
//! 下载文件始终命名为 `generated-document-<毫秒时间戳>.md`，与所选格式无关；
//! 格式只作为生成风格提示发送给后端。

use std::fmt::Display;

use crate::error::AppError;
use crate::models::api::{GenerateDocumentRequest, GenerateDocumentResponse};
use crate::models::document::{DocumentFormat, DownloadArtifact, GeneratedDocument};
use crate::services::request_slot::{RequestHandle, RequestSlot};
use crate::utils::path::download_file_name;

#[derive(Debug, Default)]
pub struct DocumentGenerator {
    selected_template: Option<String>,
    user_query: String,
    format: DocumentFormat,
    generated: Option<GeneratedDocument>,
    editable_content: String,
    is_editing: bool,
    slot: RequestSlot,
}

impl DocumentGenerator {
    pub fn selected_template(&self) -> Option<&str> {
        self.selected_template.as_deref()
    }

    pub fn user_query(&self) -> &str {
        &self.user_query
    }

    pub fn format(&self) -> DocumentFormat {
        self.format
    }

    pub fn generated(&self) -> Option<&GeneratedDocument> {
        self.generated.as_ref()
    }

    pub fn editable_content(&self) -> &str {
        &self.editable_content
    }

    pub fn is_editing(&self) -> bool {
        self.is_editing
    }

    pub fn is_generating(&self) -> bool {
        self.slot.is_busy()
    }

    /// 选择模板；传入 None 或空字符串表示取消选择
    pub fn select_template(&mut self, name: Option<String>) {
        self.selected_template = name.filter(|n| !n.is_empty());
    }

    pub fn set_query(&mut self, query: impl Into<String>) {
        self.user_query = query.into();
    }

    pub fn set_format(&mut self, format: DocumentFormat) {
        self.format = format;
    }

    /// 编辑可编辑副本，不影响生成的原始内容
    pub fn edit(&mut self, content: impl Into<String>) {
        self.editable_content = content.into();
    }

    /// 在原始文本编辑与渲染预览之间切换，内容保持不变
    pub fn toggle_edit(&mut self) {
        self.is_editing = !self.is_editing;
    }

    /// 开始生成
    ///
    /// 未选择模板、需求为空白或已有在途请求时返回 None。
    pub fn begin(&mut self) -> Option<(RequestHandle, GenerateDocumentRequest)> {
        let template_name = self.selected_template.clone()?;
        if self.user_query.trim().is_empty() {
            return None;
        }
        let handle = self.slot.try_begin()?;

        log::info!(
            "生成文档: 模板 {}，格式 {:?}",
            template_name,
            self.format
        );
        Some((
            handle,
            GenerateDocumentRequest {
                template_name,
                user_query: self.user_query.clone(),
                format: self.format,
            },
        ))
    }

    /// 生成结束
    ///
    /// # 参数
    /// - `format` - 发起请求时使用的格式
    ///
    /// # 错误
    /// 生成失败时返回需要以阻塞提示展示的 `AppError::Notice`，已有内容保持不变
    pub fn complete<E: Display>(
        &mut self,
        handle: RequestHandle,
        format: DocumentFormat,
        result: Result<GenerateDocumentResponse, E>,
    ) -> Result<(), AppError> {
        self.slot.settle(handle);

        match result {
            Ok(response) => {
                self.editable_content = response.generated_content.clone();
                self.generated = Some(GeneratedDocument {
                    content: response.generated_content,
                    format,
                });
                Ok(())
            }
            Err(e) => {
                log::error!("文档生成失败: {}", e);
                Err(AppError::Notice(format!(
                    "Failed to generate document: {}",
                    e
                )))
            }
        }
    }

    /// 构造下载产物；可编辑内容为空时返回 None
    ///
    /// # 参数
    /// - `millis` - 用于文件名的 Unix 毫秒时间戳
    pub fn download(&self, millis: u128) -> Option<DownloadArtifact> {
        if self.editable_content.is_empty() {
            return None;
        }
        Some(DownloadArtifact {
            file_name: download_file_name(millis),
            contents: self.editable_content.clone(),
        })
    }
}
