//! # 登录认证
//!
//! 登录表单目前只是展示用途：默认的 `AcceptAnyCredentials` 对任何输入都放行。
//! 会话状态机只依赖 `Authenticator` trait，
//! 接入真实的服务端令牌校验时只需提供新的实现，无需改动登录流程本身。

use crate::error::AppError;
use crate::models::session::Credentials;

/// 凭据校验能力
pub trait Authenticator: Send + Sync {
    /// 校验登录凭据
    ///
    /// # 错误
    /// 凭据无效时返回 `AppError::AuthenticationFailed`
    fn authenticate(&self, credentials: &Credentials) -> Result<(), AppError>;
}

/// 默认实现：不做任何校验，总是登录成功
#[derive(Debug, Clone, Copy, Default)]
pub struct AcceptAnyCredentials;

impl Authenticator for AcceptAnyCredentials {
    fn authenticate(&self, _credentials: &Credentials) -> Result<(), AppError> {
        log::debug!("登录凭据未校验，直接放行");
        Ok(())
    }
}
