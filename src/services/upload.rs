//! # 文件上传工作流
//!
//! 状态机：`idle → uploading → success | error → idle`
//!
//! | 转移 | 触发 |
//! |------|------|
//! | idle → uploading | 收到一个可上传文件（仅在 idle 时接受） |
//! | uploading → success | 后端 2xx `{filename, chunks_created}` |
//! | uploading → error | 后端非 2xx、网络失败或本地文件读取失败 |
//! | success / error → idle | 用户点击"Upload Another File" / "Try Again" |
//!
//! 成功时产出一个 `RecentFile`，由上层追加到最近文件列表并刷新侧边栏统计。

use std::fmt::Display;

use crate::models::api::UploadResponse;
use crate::models::upload::{RecentFile, UploadStatus};
use crate::services::request_slot::{RequestHandle, RequestSlot};

/// 上传工作流状态
#[derive(Debug, Default)]
pub struct UploadWorkflow {
    status: UploadStatus,
    message: String,
    slot: RequestSlot,
}

impl UploadWorkflow {
    pub fn status(&self) -> UploadStatus {
        self.status
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    /// 进入 uploading 状态
    ///
    /// 只在 idle 状态下生效；成功、失败或上传中时返回 None，状态不变。
    pub fn begin(&mut self) -> Option<RequestHandle> {
        if self.status != UploadStatus::Idle {
            return None;
        }
        let handle = self.slot.try_begin()?;
        self.status = UploadStatus::Uploading;
        self.message.clear();
        Some(handle)
    }

    /// 结束上传
    ///
    /// # 返回值
    /// 成功时返回需要追加到最近文件列表的条目
    pub fn complete<E: Display>(
        &mut self,
        handle: RequestHandle,
        result: Result<UploadResponse, E>,
    ) -> Option<RecentFile> {
        self.slot.settle(handle);

        match result {
            Ok(response) => {
                log::info!(
                    "文件处理完成: {}，生成 {} 个文本块",
                    response.filename,
                    response.chunks_created
                );
                self.status = UploadStatus::Success;
                self.message = format!(
                    "Successfully processed {}. Created {} chunks.",
                    response.filename, response.chunks_created
                );
                Some(RecentFile::from_chunks(
                    response.filename,
                    response.chunks_created,
                ))
            }
            Err(e) => {
                log::error!("上传失败: {}", e);
                self.status = UploadStatus::Error;
                self.message = format!("Upload failed: {}", e);
                None
            }
        }
    }

    /// 从 success / error 回到 idle 并清空提示；其他状态下为空操作
    pub fn reset(&mut self) {
        if matches!(self.status, UploadStatus::Success | UploadStatus::Error) {
            self.status = UploadStatus::Idle;
            self.message.clear();
        }
    }
}
