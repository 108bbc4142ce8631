//! # 上传文件类型识别
//!
//! 只接受 PDF 与纯文本两类文件，对应的 content type 分别为
//! `application/pdf` 与 `text/plain`。类型由扩展名（不区分大小写）推断。

use std::sync::LazyLock;

use regex::Regex;

/// 匹配可上传文件的扩展名，捕获组 1 为小写化前的扩展名
static ACCEPTED_EXTENSION_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.(pdf|txt)$").expect("static regex"));

/// 可上传的文件类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FileKind {
    Pdf,
    PlainText,
}

impl FileKind {
    /// 根据文件名推断类型；不支持的类型返回 None
    pub fn from_file_name(name: &str) -> Option<Self> {
        let caps = ACCEPTED_EXTENSION_RE.captures(name)?;
        match caps.get(1)?.as_str().to_ascii_lowercase().as_str() {
            "pdf" => Some(FileKind::Pdf),
            "txt" => Some(FileKind::PlainText),
            _ => None,
        }
    }

    pub fn content_type(self) -> &'static str {
        match self {
            FileKind::Pdf => "application/pdf",
            FileKind::PlainText => "text/plain",
        }
    }
}

/// 从候选文件中选出第一个可上传的文件
///
/// 拖拽或选择了多个文件时只处理第一个符合类型的文件；没有符合的文件时返回 None。
///
/// # 返回值
/// `(候选项下标, 文件类型)`
pub fn first_accepted<S: AsRef<str>>(names: &[S]) -> Option<(usize, FileKind)> {
    names
        .iter()
        .enumerate()
        .find_map(|(i, name)| FileKind::from_file_name(name.as_ref()).map(|kind| (i, kind)))
}
