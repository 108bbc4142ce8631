//! # 数据模型模块
//!
//! 定义了与前端 TypeScript 类型一一对应的 Rust 数据结构。
//! 需要传给前端的结构体均派生 `Serialize`，字段按 camelCase 序列化。
//! - `api` - 后端 HTTP 接口的请求体与响应体
//! - `session` - 登录状态与当前视图
//! - `stats` - 向量库统计与已保存模板（侧边栏数据）
//! - `upload` - 上传状态机与最近文件
//! - `search` - 相似度搜索结果
//! - `template` - 模板构建器的对话记录与草稿
//! - `document` - 文档生成器的输出格式与下载产物

pub mod api;
pub mod document;
pub mod search;
pub mod session;
pub mod stats;
pub mod template;
pub mod upload;
