//! # 会话（登录态）数据模型
//!
//! 定义了登录状态与当前工作视图。任何时刻恰好满足以下之一：
//! - 未登录 → 显示登录页
//! - 已登录 → 显示且仅显示一个工作流视图
//!
//! 这一约束通过 `Screen` 枚举在类型层面表达。

use serde::{Deserialize, Serialize};

/// 工作流视图
///
/// 对应前端 TypeScript 类型：
/// ```typescript
/// type View = 'dataProcessing' | 'templateBuilder' | 'documentGenerator';
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum View {
    /// 数据处理：文件上传 + 相似度搜索
    #[default]
    DataProcessing,
    /// 模板构建器：对话式编写模板
    TemplateBuilder,
    /// 文档生成器：基于已保存模板生成文档
    DocumentGenerator,
}

/// 当前应显示的页面
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "screen", content = "view", rename_all = "camelCase")]
pub enum Screen {
    Login,
    Workflow(View),
}

/// 登录表单内容
///
/// 登录表单目前仅作展示，凭据由 `Authenticator` 决定是否校验。
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct Credentials {
    pub email: String,
    pub otp: String,
}

/// 登录态
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub authenticated: bool,
    pub active_view: View,
}

impl Session {
    pub fn screen(&self) -> Screen {
        if self.authenticated {
            Screen::Workflow(self.active_view)
        } else {
            Screen::Login
        }
    }
}

/// 返回给前端的登录态快照
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionView {
    pub authenticated: bool,
    pub active_view: View,
    pub screen: Screen,
}

impl From<&Session> for SessionView {
    fn from(session: &Session) -> Self {
        Self {
            authenticated: session.authenticated,
            active_view: session.active_view,
            screen: session.screen(),
        }
    }
}
