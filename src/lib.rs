//! # Synthesis - Tauri 应用核心初始化模块
//!
//! 本模块负责 Tauri 应用的完整初始化流程，包括：
//! - 注册 Tauri 官方插件（对话框、文件管理器定位、日志）
//! - 注册自定义 Tauri commands（登录、上传、搜索、模板、文档生成）
//! - 初始化应用全局状态（各工作流状态机 + 后端 API 客户端）
//! - 启动后立即拉取一次侧边栏统计
//!
//! ## 模块结构
//! - `commands/` - Tauri command 处理函数（IPC 接口层）
//! - `models/` - 数据模型（后端接口结构与前端视图快照）
//! - `services/` - 核心业务逻辑（工作流状态机、API 客户端）
//! - `utils/` - 通用工具函数
//! - `config` / `error` - 客户端配置与错误类型

mod commands;
mod config;
mod error;
mod models;
mod services;
mod utils;

#[cfg(test)]
mod testing;

use tauri::Manager;

use config::ClientConfig;
use services::api_client::ApiClient;
use services::app::AppState;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
/// Tauri 应用启动函数
///
/// 1. 注册对话框与 Opener 插件
/// 2. 以固定的本机后端地址初始化 `AppState`
/// 3. 注册所有自定义 Tauri commands
/// 4. 在 `setup` 钩子中按需注册日志插件，并在后台刷新一次统计
///
/// # Panics
/// Tauri 应用启动失败（例如配置文件缺失或窗口创建失败）时 panic。
pub fn run() {
    tauri::Builder::default()
        // 对话框插件：上传文件选择器与下载保存对话框
        .plugin(tauri_plugin_dialog::init())
        // Opener 插件：下载完成后在系统文件管理器中定位文件
        .plugin(tauri_plugin_opener::init())
        .manage(AppState::new(
            ApiClient::new(ClientConfig::default()),
            ClientConfig::default(),
        ))
        .invoke_handler(tauri::generate_handler![
            // 会话与侧边栏
            commands::session::get_session,
            commands::session::login,
            commands::session::logout,
            commands::session::navigate,
            commands::session::get_sidebar,
            commands::session::refresh_stats,
            // 数据处理：上传 + 搜索
            commands::data_processing::get_data_processing,
            commands::data_processing::upload_files,
            commands::data_processing::pick_upload_file,
            commands::data_processing::reset_upload,
            commands::data_processing::search,
            // 模板构建器
            commands::template::get_template_builder,
            commands::template::send_template_message,
            commands::template::save_template,
            // 文档生成器
            commands::document::get_document_generator,
            commands::document::select_template,
            commands::document::set_document_query,
            commands::document::set_document_format,
            commands::document::edit_document,
            commands::document::toggle_document_edit,
            commands::document::generate_document,
            commands::document::download_document,
        ])
        .setup(|app| {
            // 仅在开发调试模式下启用日志插件
            if cfg!(debug_assertions) {
                app.handle().plugin(
                    tauri_plugin_log::Builder::default()
                        .level(log::LevelFilter::Info)
                        .build(),
                )?;
            }

            // 启动时拉取一次统计，失败时侧边栏保持默认值
            let handle = app.handle().clone();
            tauri::async_runtime::spawn(async move {
                let state = handle.state::<AppState>();
                state.refresh_stats().await;
            });
            Ok(())
        })
        .run(tauri::generate_context!())
        .expect("error while running tauri application");
}
