//! # 错误类型
//!
//! 按错误来源分为两层：
//! - `ApiError` - 与后端交互产生的错误（后端报告的失败、网络失败、响应解析失败）
//! - `AppError` - 工作流层面的错误（未登录、输入校验失败、文件读写、对话框）
//!
//! 两者的 `Display` 输出即为展示给用户的文本，
//! command 层统一通过 `.map_err(|e| e.to_string())` 转换为 `String` 返回给前端。

use thiserror::Error;

/// 后端 API 调用错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    /// 后端返回非 2xx 状态码；`message` 取自响应 JSON 的 `error` 字段，缺失时为通用文案
    #[error("{message}")]
    Backend { status: u16, message: String },

    /// 请求未能完成（连接失败、连接被重置等）
    #[error("{0}")]
    Network(String),

    /// 2xx 响应体无法按预期结构解析
    #[error("Could not parse backend response: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for ApiError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_decode() {
            ApiError::Decode(e.to_string())
        } else {
            ApiError::Network(e.to_string())
        }
    }
}

/// 应用层错误
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AppError {
    /// 未登录时调用了需要登录的操作
    #[error("Please sign in first.")]
    NotAuthenticated,

    /// 登录凭据未通过 `Authenticator` 校验
    #[error("Sign in failed: {0}")]
    AuthenticationFailed(String),

    /// 输入校验失败，在发起任何网络请求之前拦截
    #[error("{0}")]
    Validation(String),

    /// 需要以阻塞提示框展示给用户的失败信息
    #[error("{0}")]
    Notice(String),

    #[error(transparent)]
    Api(#[from] ApiError),

    #[error("File operation failed: {0}")]
    Io(String),

    #[error("Dialog failed: {0}")]
    Dialog(String),
}

impl From<std::io::Error> for AppError {
    fn from(e: std::io::Error) -> Self {
        AppError::Io(e.to_string())
    }
}
