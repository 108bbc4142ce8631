//! # Tauri Command 处理模块
//!
//! 本模块包含所有注册到 Tauri 的 command 处理函数。
//! 每个子模块对应一个功能域：
//! - `session` - 登录、登出、视图切换与侧边栏
//! - `data_processing` - 文件上传与相似度搜索
//! - `template` - 模板构建器对话与保存
//! - `document` - 文档生成、编辑与下载
//!
//! 所有 command 的错误统一以 `String` 返回，内容即为展示给用户的文本。

use tauri::{AppHandle, Emitter};

use crate::models::stats::SidebarView;

pub mod data_processing;
pub mod document;
pub mod session;
pub mod template;

/// 侧边栏数据变化时向前端广播的事件名
pub const SIDEBAR_UPDATED_EVENT: &str = "sidebar-updated";

/// 广播最新的侧边栏数据；发送失败只记录日志
fn emit_sidebar_updated(app: &AppHandle, sidebar: &SidebarView) {
    if let Err(e) = app.emit(SIDEBAR_UPDATED_EVENT, sidebar) {
        log::warn!("发送 {} 事件失败: {}", SIDEBAR_UPDATED_EVENT, e);
    }
}
