//! # 客户端配置
//!
//! 后端地址固定为本机回环地址，不向用户开放修改。
//! `ClientConfig` 只是把这些常量集中到一处，便于测试时替换为本地桩服务的地址。

/// 后端服务的固定地址（loopback + 固定端口）
pub const DEFAULT_BASE_URL: &str = "http://127.0.0.1:5000";

/// 每次相似度搜索请求的结果数量（`n_results`）
pub const SEARCH_RESULT_COUNT: u32 = 5;

/// 侧边栏"最近文件"列表的最大长度
pub const RECENT_FILE_LIMIT: usize = 5;

/// API 客户端与工作流共用的配置
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// 后端根地址，不带末尾斜杠
    pub base_url: String,

    /// 搜索请求中的 `n_results`
    pub search_result_count: u32,

    /// 最近文件列表上限，超出时淘汰最旧条目
    pub recent_file_limit: usize,
}

impl ClientConfig {
    /// 使用指定的后端根地址，其余字段取默认值
    pub fn with_base_url(base_url: impl Into<String>) -> Self {
        let base_url = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            search_result_count: SEARCH_RESULT_COUNT,
            recent_file_limit: RECENT_FILE_LIMIT,
        }
    }

    /// 拼接接口的完整 URL
    ///
    /// # 参数
    /// - `path` - 以 `/` 开头的接口路径（如 `/status`）
    pub fn endpoint(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::with_base_url(DEFAULT_BASE_URL)
    }
}
