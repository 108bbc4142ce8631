//! # Synthesis - Tauri 桌面应用原生入口点
//!
//! `main()` 只负责调用 `synthesis_lib::run()`，
//! 插件注册、全局状态、command 注册等初始化逻辑全部位于 `lib.rs`。

// Prevents additional console window on Windows in release, DO NOT REMOVE!!
#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

fn main() {
  synthesis_lib::run();
}
