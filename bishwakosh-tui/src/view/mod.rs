//! View 层：把 Model 渲染为终端界面
//!
//! 只读取 `App`，不修改任何状态。

mod components;
mod layout;
mod pages;
pub mod theme;

pub use layout::render;
