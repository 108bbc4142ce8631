//! # 会话状态服务
//!
//! 管理登录态、当前视图、最近文件列表以及侧边栏统计快照：
//! - 登录：交给 `Authenticator` 校验，成功后进入数据处理视图
//! - 登出：回到登录页，视图重置为数据处理，但不清空其他工作流的状态
//! - 切换视图：仅在已登录时允许
//! - 统计快照：每次刷新整体替换，从不本地计算或合并

use crate::error::AppError;
use crate::models::session::{Credentials, Session, SessionView, View};
use crate::models::stats::{SidebarView, StatsSnapshot};
use crate::models::upload::RecentFile;
use crate::services::auth::Authenticator;

#[derive(Debug)]
pub struct SessionState {
    session: Session,
    recent_files: Vec<RecentFile>,
    snapshot: StatsSnapshot,
    recent_file_limit: usize,
}

impl SessionState {
    /// # 参数
    /// - `recent_file_limit` - 最近文件列表上限
    pub fn new(recent_file_limit: usize) -> Self {
        Self {
            session: Session::default(),
            recent_files: Vec::new(),
            snapshot: StatsSnapshot::default(),
            recent_file_limit,
        }
    }

    pub fn view(&self) -> SessionView {
        SessionView::from(&self.session)
    }

    pub fn ensure_authenticated(&self) -> Result<(), AppError> {
        if self.session.authenticated {
            Ok(())
        } else {
            Err(AppError::NotAuthenticated)
        }
    }

    pub fn login(
        &mut self,
        authenticator: &dyn Authenticator,
        credentials: &Credentials,
    ) -> Result<(), AppError> {
        authenticator.authenticate(credentials)?;
        self.session.authenticated = true;
        self.session.active_view = View::DataProcessing;
        log::info!("登录成功");
        Ok(())
    }

    pub fn logout(&mut self) {
        self.session.authenticated = false;
        self.session.active_view = View::default();
        log::info!("已登出");
    }

    /// 切换工作流视图
    ///
    /// # 错误
    /// 未登录时返回 `AppError::NotAuthenticated`，视图不变
    pub fn navigate(&mut self, view: View) -> Result<(), AppError> {
        self.ensure_authenticated()?;
        self.session.active_view = view;
        Ok(())
    }

    pub fn recent_files(&self) -> &[RecentFile] {
        &self.recent_files
    }

    /// 追加最近文件：新条目放在最前，超出上限时淘汰最旧的条目
    pub fn push_recent_file(&mut self, file: RecentFile) {
        self.recent_files.insert(0, file);
        self.recent_files.truncate(self.recent_file_limit);
    }

    pub fn snapshot(&self) -> &StatsSnapshot {
        &self.snapshot
    }

    /// 用最新的后端快照整体替换
    pub fn replace_snapshot(&mut self, snapshot: StatsSnapshot) {
        self.snapshot = snapshot;
    }

    pub fn sidebar(&self) -> SidebarView {
        SidebarView {
            stats: self.snapshot.stats.clone(),
            saved_templates: self.snapshot.templates.clone(),
            recent_files: self.recent_files.clone(),
        }
    }
}
