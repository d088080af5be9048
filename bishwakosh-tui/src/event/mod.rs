//!
//! src/event/mod.rs
//! Event 层：事件处理
//!
//! 负责把终端输入事件翻译为 Message，本身不修改任何状态。
//!
//!     · poll_event      事件轮询，受 app.rs 调用，最长阻塞 timeout
//!     · handle_event    事件分发
//!
//! 按键分发顺序：
//!     1. Ctrl+C 任何时候都退出
//!     2. 有弹窗时只处理弹窗按键
//!     3. 详情浮层打开时只处理浮层按键
//!     4. 全局快捷键（F1 / F2 / F3 / Alt+R / Tab）
//!     5. 按焦点分发到搜索框或网格

mod handler;
mod keymap;

pub use handler::{handle_event, poll_event};
