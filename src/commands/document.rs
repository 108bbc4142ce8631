//! # 文档生成器 Tauri Commands
//!
//! 输入项（模板、需求、格式）与编辑操作都是同步的状态修改；
//! `generate_document` 调用后端，`download_document` 弹出保存对话框并写入磁盘。

use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;
use tauri_plugin_opener::OpenerExt;

use crate::models::document::{DocumentFormat, DocumentGeneratorView};
use crate::services::app::AppState;
use crate::services::export;
use crate::utils::path::{default_download_dir, unix_millis_now};

#[tauri::command]
pub fn get_document_generator(state: State<'_, AppState>) -> DocumentGeneratorView {
    state.document_view()
}

#[tauri::command]
pub fn select_template(name: Option<String>, state: State<'_, AppState>) -> DocumentGeneratorView {
    state.select_template(name)
}

#[tauri::command]
pub fn set_document_query(query: String, state: State<'_, AppState>) -> DocumentGeneratorView {
    state.set_document_query(query)
}

/// # 参数
/// - `format` - `"markdown"` / `"html"` / `"text"`
#[tauri::command]
pub fn set_document_format(
    format: DocumentFormat,
    state: State<'_, AppState>,
) -> DocumentGeneratorView {
    state.set_document_format(format)
}

#[tauri::command]
pub fn edit_document(content: String, state: State<'_, AppState>) -> DocumentGeneratorView {
    state.edit_document(content)
}

#[tauri::command]
pub fn toggle_document_edit(state: State<'_, AppState>) -> DocumentGeneratorView {
    state.toggle_document_edit()
}

/// 生成文档
///
/// # 错误
/// 后端生成失败时返回需要以提示框展示的错误文本
#[tauri::command]
pub async fn generate_document(state: State<'_, AppState>) -> Result<DocumentGeneratorView, String> {
    state.generate_document().await.map_err(|e| e.to_string())
}

/// 下载当前可编辑内容
///
/// 弹出保存对话框（默认位于 Downloads 目录），写入后在系统文件管理器中定位该文件。
///
/// # 返回值
/// - `Some(path)` - 实际写入的文件路径
/// - `None` - 内容为空或用户取消了对话框
#[tauri::command]
pub async fn download_document(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<Option<String>, String> {
    let Some(artifact) = state
        .prepare_download(unix_millis_now())
        .map_err(|e| e.to_string())?
    else {
        return Ok(None);
    };

    let target = app
        .dialog()
        .file()
        .set_title("Save Document")
        .add_filter("Markdown", &["md"])
        .set_directory(default_download_dir())
        .set_file_name(&artifact.file_name)
        .blocking_save_file();

    let Some(target) = target else {
        return Ok(None);
    };
    let target = target
        .into_path()
        .map_err(|e| format!("Could not access the save location: {}", e))?;

    let written = export::write_artifact(&target, &artifact)
        .await
        .map_err(|e| e.to_string())?;

    if let Err(e) = app.opener().reveal_item_in_dir(&written) {
        log::warn!("在文件管理器中定位文件失败: {}", e);
    }

    Ok(Some(written.to_string_lossy().to_string()))
}
