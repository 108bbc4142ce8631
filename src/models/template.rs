//! # 模板构建器数据模型

use serde::Serialize;

/// 对话消息的发送方
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Ai,
}

/// 对话记录中的单条消息，写入后不再修改
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ChatMessage {
    pub sender: Sender,
    pub text: String,
}

impl ChatMessage {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::User,
            text: text.into(),
        }
    }

    pub fn ai(text: impl Into<String>) -> Self {
        Self {
            sender: Sender::Ai,
            text: text.into(),
        }
    }
}

/// 当前模板草稿
///
/// 每次后端返回后整体替换，从不做差异合并。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct TemplateDraft {
    pub content: String,
}

/// 模板构建器页快照
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TemplateBuilderView {
    pub chat_history: Vec<ChatMessage>,
    pub current_template: String,
    pub is_loading: bool,
}
