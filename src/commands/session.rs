//! # 会话 Tauri Commands
//!
//! - `get_session` / `login` / `logout` / `navigate` - 登录态与当前视图
//! - `get_sidebar` / `refresh_stats` - 侧边栏统计、已保存模板与最近文件

use tauri::State;

use crate::models::session::{Credentials, SessionView, View};
use crate::models::stats::SidebarView;
use crate::services::app::AppState;

#[tauri::command]
pub fn get_session(state: State<'_, AppState>) -> SessionView {
    state.session_view()
}

/// 登录
///
/// 登录表单目前仅作展示，默认的认证器接受任何输入。
///
/// # 参数
/// - `email` - 邮箱
/// - `otp` - 一次性验证码
#[tauri::command]
pub fn login(email: String, otp: String, state: State<'_, AppState>) -> Result<SessionView, String> {
    state
        .login(Credentials { email, otp })
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub fn logout(state: State<'_, AppState>) -> SessionView {
    state.logout()
}

/// 切换工作流视图
///
/// # 参数
/// - `view` - `"dataProcessing"` / `"templateBuilder"` / `"documentGenerator"`
///
/// # 错误
/// 未登录时返回错误，视图不变
#[tauri::command]
pub fn navigate(view: View, state: State<'_, AppState>) -> Result<SessionView, String> {
    state.navigate(view).map_err(|e| e.to_string())
}

#[tauri::command]
pub fn get_sidebar(state: State<'_, AppState>) -> SidebarView {
    state.sidebar()
}

/// 从后端刷新侧边栏统计
///
/// 刷新失败不会返回错误，只保留上一次的数据。
#[tauri::command]
pub async fn refresh_stats(state: State<'_, AppState>) -> Result<SidebarView, String> {
    Ok(state.refresh_stats().await)
}
