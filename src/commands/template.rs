//! # 模板构建器 Tauri Commands

use tauri::{AppHandle, State};

use crate::commands::emit_sidebar_updated;
use crate::models::template::TemplateBuilderView;
use crate::services::app::AppState;

#[tauri::command]
pub fn get_template_builder(state: State<'_, AppState>) -> TemplateBuilderView {
    state.template_view()
}

/// 发送一条对话消息，后端返回后更新模板草稿
#[tauri::command]
pub async fn send_template_message(
    text: String,
    state: State<'_, AppState>,
) -> Result<TemplateBuilderView, String> {
    state
        .send_template_message(&text)
        .await
        .map_err(|e| e.to_string())
}

/// 保存当前草稿
///
/// # 参数
/// - `name` - 命名提示框的输入；用户取消时为 null
///
/// # 返回值
/// 后端返回的提示文本，由前端以提示框展示
#[tauri::command]
pub async fn save_template(
    name: Option<String>,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<String, String> {
    let saved = state.save_template(name).await.map_err(|e| e.to_string())?;
    emit_sidebar_updated(&app, &saved.sidebar);
    Ok(saved.notice)
}
