//! # 侧边栏共享数据模型
//!
//! 向量库统计（VectorStats）和已保存模板（SavedTemplate）完全来自后端 `/status` 的快照，
//! 本地从不计算或合并，每次刷新整体替换为一个新的 `StatsSnapshot`。

use serde::Serialize;

use crate::models::api::StatusResponse;
use crate::models::upload::RecentFile;

/// 向量库统计
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct VectorStats {
    pub vector_count: u64,
    pub file_count: u64,
    /// 存储占用估算，如 "0.7 MB"
    pub storage_estimate: String,
}

impl Default for VectorStats {
    fn default() -> Self {
        Self {
            vector_count: 0,
            file_count: 0,
            storage_estimate: "0 MB".to_string(),
        }
    }
}

/// 已保存的模板
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SavedTemplate {
    pub name: String,
    pub description: String,
}

impl SavedTemplate {
    pub fn from_name(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            description: format!("Saved template: {}", name),
            name,
        }
    }
}

/// 一次 `/status` 刷新得到的完整快照
///
/// 作为一个整体被替换，读取方永远不会看到"统计已更新、模板列表未更新"的中间状态。
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsSnapshot {
    pub stats: VectorStats,
    pub templates: Vec<SavedTemplate>,
}

impl From<StatusResponse> for StatsSnapshot {
    fn from(status: StatusResponse) -> Self {
        // 每个向量按约 0.01 MB 粗略估算
        let storage_mb = status.total_vectors as f64 * 0.01;
        Self {
            stats: VectorStats {
                vector_count: status.total_vectors,
                file_count: status.total_files,
                storage_estimate: format!("{:.1} MB", storage_mb),
            },
            templates: status
                .templates_in_memory
                .into_iter()
                .map(SavedTemplate::from_name)
                .collect(),
        }
    }
}

/// 返回给前端的侧边栏数据
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SidebarView {
    pub stats: VectorStats,
    pub saved_templates: Vec<SavedTemplate>,
    pub recent_files: Vec<RecentFile>,
}
