//! # 业务逻辑服务模块
//!
//! 包含核心业务逻辑的实现，与 Tauri command 层解耦：
//! - `api_client` - 后端 HTTP 客户端与 `Backend` trait
//! - `auth` - 可替换的登录凭据校验
//! - `request_slot` - 工作流共用的单槽在途请求句柄
//! - `session` - 登录态、最近文件与统计快照
//! - `upload` / `search` - 数据处理页的两个工作流
//! - `template_builder` - 对话式模板编写
//! - `document_generator` - 基于模板生成、编辑与下载文档
//! - `export` - 下载产物写入磁盘
//! - `app` - 组合以上状态机与后端调用的应用状态

pub mod api_client;
pub mod app;
pub mod auth;
pub mod document_generator;
pub mod export;
pub mod request_slot;
pub mod search;
pub mod session;
pub mod template_builder;
pub mod upload;
