//! # 单槽请求句柄
//!
//! 每个工作流同一时刻最多只有一个在途请求。发起请求时占用槽位并得到句柄，
//! 请求结束（成功或失败）后凭句柄释放槽位。槽位被占用期间再次发起请求是空操作。
//!
//! 没有取消机制：已发出的请求总会运行到结束并更新工作流状态，
//! 即使用户在此期间切换到了其他视图。
//! 不同工作流的槽位相互独立，例如搜索与文档生成可以同时进行。

/// 在途请求的句柄
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestHandle(u64);

/// 单槽请求状态
#[derive(Debug, Default)]
pub struct RequestSlot {
    current: Option<RequestHandle>,
    next_id: u64,
}

impl RequestSlot {
    /// 是否有在途请求
    pub fn is_busy(&self) -> bool {
        self.current.is_some()
    }

    /// 尝试占用槽位
    ///
    /// # 返回值
    /// - `Some(handle)` - 占用成功
    /// - `None` - 已有在途请求
    pub fn try_begin(&mut self) -> Option<RequestHandle> {
        if self.current.is_some() {
            return None;
        }
        self.next_id += 1;
        let handle = RequestHandle(self.next_id);
        self.current = Some(handle);
        Some(handle)
    }

    /// 释放槽位
    ///
    /// 句柄与当前占用者不一致时（旧请求已被放弃）不做任何事并返回 false。
    pub fn settle(&mut self, handle: RequestHandle) -> bool {
        if self.current == Some(handle) {
            self.current = None;
            true
        } else {
            false
        }
    }
}
