//! # Synthesis - Tauri Cargo 构建脚本
//!
//! 在 `cargo build` 编译主项目之前由 Cargo 自动执行。
//! Tauri 通过此脚本读取 `tauri.conf.json` 与 `capabilities/`，
//! 生成运行时所需的资源绑定代码、权限清单以及平台相关的资源文件。

fn main() {
  tauri_build::build()
}
