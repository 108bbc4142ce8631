//! # 通用工具函数
//! - `path` - 下载目录、下载文件名等路径工具
//! - `file_kind` - 上传文件类型识别

pub mod file_kind;
pub mod path;
