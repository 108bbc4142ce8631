//! # 模板构建器工作流
//!
//! 两份状态同步演进：
//! - **对话记录**：只追加，不修改、不删除
//! - **模板草稿**：单一可变槽位，每次后端返回后整体替换
//!
//! 一次完整的发送循环恰好追加两条消息：发送时立即追加用户消息（乐观更新），
//! 请求结束后追加一条 AI 消息（成功时为固定确认语，失败时为错误信息）。
//!
//! 发送时会把当前草稿一并提交，后端据此做增量修改而不是从头生成。

use std::fmt::Display;

use crate::error::AppError;
use crate::models::api::{GenerateTemplateRequest, GenerateTemplateResponse, SaveTemplateRequest};
use crate::models::template::{ChatMessage, TemplateDraft};
use crate::services::request_slot::{RequestHandle, RequestSlot};

/// 对话开场白
pub const GREETING: &str =
    "Hello! I'm here to help you create document templates. What type of template would you like to create?";

/// 模板更新成功后的固定回复（不展示后端生成的对话文本）
pub const ACKNOWLEDGEMENT: &str = "Here's the updated template. What would you like to do next?";

/// 保存前校验失败的提示
pub const SAVE_VALIDATION_MESSAGE: &str =
    "Template name cannot be empty and there must be content to save.";

/// 保存请求未能完成时的提示
pub const SAVE_FAILURE_MESSAGE: &str = "Failed to save the template.";

#[derive(Debug)]
pub struct TemplateBuilder {
    transcript: Vec<ChatMessage>,
    draft: TemplateDraft,
    slot: RequestSlot,
}

impl Default for TemplateBuilder {
    fn default() -> Self {
        Self {
            transcript: vec![ChatMessage::ai(GREETING)],
            draft: TemplateDraft::default(),
            slot: RequestSlot::default(),
        }
    }
}

impl TemplateBuilder {
    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    pub fn draft(&self) -> &str {
        &self.draft.content
    }

    pub fn is_loading(&self) -> bool {
        self.slot.is_busy()
    }

    /// 发送一条用户消息
    ///
    /// 文本为空白或已有在途请求时为空操作。否则立即追加用户消息，
    /// 并返回携带当前草稿的生成请求。
    pub fn begin_send(&mut self, text: &str) -> Option<(RequestHandle, GenerateTemplateRequest)> {
        if text.trim().is_empty() {
            return None;
        }
        let handle = self.slot.try_begin()?;
        self.transcript.push(ChatMessage::user(text));

        Some((
            handle,
            GenerateTemplateRequest {
                prompt: text.to_string(),
                current_template: self.draft.content.clone(),
            },
        ))
    }

    /// 请求结束：成功时替换草稿，失败时草稿不变；两种情况都追加一条 AI 消息
    pub fn complete_send<E: Display>(
        &mut self,
        handle: RequestHandle,
        result: Result<GenerateTemplateResponse, E>,
    ) {
        self.slot.settle(handle);

        match result {
            Ok(response) => {
                self.draft = TemplateDraft {
                    content: response.template,
                };
                self.transcript.push(ChatMessage::ai(ACKNOWLEDGEMENT));
            }
            Err(e) => {
                log::error!("模板生成失败: {}", e);
                self.transcript
                    .push(ChatMessage::ai(format!("Sorry, an error occurred: {}", e)));
            }
        }
    }

    /// 构造保存请求
    ///
    /// # 参数
    /// - `name` - 用户在命名提示框中输入的名称；取消输入时为 None
    ///
    /// # 错误
    /// 名称为空或草稿为空时返回 `AppError::Validation`，不会发起网络请求
    pub fn prepare_save(&self, name: Option<&str>) -> Result<SaveTemplateRequest, AppError> {
        match name {
            Some(name) if !name.is_empty() && !self.draft.content.is_empty() => {
                Ok(SaveTemplateRequest {
                    name: name.to_string(),
                    content: self.draft.content.clone(),
                })
            }
            _ => Err(AppError::Validation(SAVE_VALIDATION_MESSAGE.to_string())),
        }
    }
}
