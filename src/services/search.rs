//! # 相似度搜索工作流
//!
//! 单次请求 / 响应循环，与上传状态互不影响：
//! - 查询为空或仅含空白时不发请求，保留上一次的结果
//! - 同一时刻最多一个在途搜索，`is_searching` 期间再次提交为空操作
//! - 成功时整体替换结果列表；失败时清空结果并记录日志

use std::fmt::Display;

use crate::models::api::{SearchRequest, SearchResponse};
use crate::models::search::SearchResult;
use crate::services::request_slot::{RequestHandle, RequestSlot};

#[derive(Debug, Default)]
pub struct SearchWorkflow {
    results: Vec<SearchResult>,
    slot: RequestSlot,
}

impl SearchWorkflow {
    pub fn results(&self) -> &[SearchResult] {
        &self.results
    }

    pub fn is_searching(&self) -> bool {
        self.slot.is_busy()
    }

    /// 开始一次搜索
    ///
    /// # 参数
    /// - `query` - 用户输入的查询，原样发送（仅用 trim 判断是否为空）
    /// - `n_results` - 请求的结果数量
    ///
    /// # 返回值
    /// 需要发送的请求；查询为空或已有在途搜索时返回 None
    pub fn begin(&mut self, query: &str, n_results: u32) -> Option<(RequestHandle, SearchRequest)> {
        if query.trim().is_empty() {
            return None;
        }
        let handle = self.slot.try_begin()?;
        Some((
            handle,
            SearchRequest {
                query: query.to_string(),
                n_results,
            },
        ))
    }

    pub fn complete<E: Display>(&mut self, handle: RequestHandle, result: Result<SearchResponse, E>) {
        self.slot.settle(handle);

        match result {
            Ok(response) => {
                let sources: Vec<&str> = response
                    .results
                    .iter()
                    .filter_map(SearchResult::filename)
                    .collect();
                log::debug!(
                    "搜索返回 {} 条结果，来源文件: {:?}",
                    response.results.len(),
                    sources
                );
                self.results = response.results;
            }
            Err(e) => {
                log::error!("搜索失败: {}", e);
                self.results.clear();
            }
        }
    }
}
