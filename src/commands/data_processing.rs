//! # 数据处理 Tauri Commands
//!
//! - `get_data_processing` - 上传状态与搜索结果快照
//! - `upload_files` - 拖拽上传入口，接收文件路径列表
//! - `pick_upload_file` - 打开系统文件选择器后上传
//! - `reset_upload` - 上传完成后回到 idle
//! - `search` - 相似度搜索
//!
//! 上传成功后会广播 `sidebar-updated` 事件。

use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

use crate::commands::emit_sidebar_updated;
use crate::models::upload::DataProcessingView;
use crate::services::app::AppState;
use crate::utils::path::default_upload_dir;

#[tauri::command]
pub fn get_data_processing(state: State<'_, AppState>) -> DataProcessingView {
    state.data_processing_view()
}

/// 上传文件
///
/// 只处理第一个 PDF / TXT 文件，其余文件被忽略。
///
/// # 参数
/// - `paths` - 拖入的文件路径列表
#[tauri::command]
pub async fn upload_files(
    paths: Vec<String>,
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<DataProcessingView, String> {
    let sidebar = state
        .upload_paths(paths.as_slice())
        .await
        .map_err(|e| e.to_string())?;
    if let Some(sidebar) = sidebar {
        emit_sidebar_updated(&app, &sidebar);
    }
    Ok(state.data_processing_view())
}

/// 打开文件选择器并上传所选文件
///
/// 用户取消选择时直接返回当前快照。
#[tauri::command]
pub async fn pick_upload_file(
    app: AppHandle,
    state: State<'_, AppState>,
) -> Result<DataProcessingView, String> {
    let picked = app
        .dialog()
        .file()
        .set_title("Choose a file to upload")
        .add_filter("PDF or text documents", &["pdf", "txt"])
        .set_directory(default_upload_dir())
        .blocking_pick_file();

    let Some(picked) = picked else {
        return Ok(state.data_processing_view());
    };
    let path = picked
        .into_path()
        .map_err(|e| format!("Could not access the selected file: {}", e))?;

    upload_files(vec![path.to_string_lossy().to_string()], app, state).await
}

#[tauri::command]
pub fn reset_upload(state: State<'_, AppState>) -> DataProcessingView {
    state.reset_upload()
}

/// 相似度搜索，每次返回最多 5 条结果
#[tauri::command]
pub async fn search(query: String, state: State<'_, AppState>) -> Result<DataProcessingView, String> {
    state.search(&query).await.map_err(|e| e.to_string())
}
