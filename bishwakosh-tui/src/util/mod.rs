//!
//! src/util/mod.rs
//! Util 层：基础设施和工具函数
//!
//! 与业务逻辑无关的基础设施代码：
//!
//!     mod logging;        // 日志初始化（stderr，默认关闭）
//!     mod terminal;       // 终端初始化和恢复
//!     mod text;           // 按显示宽度截断文本
//!
//! 终端在 main.rs 中初始化，`app::run` 返回后无论成败都先恢复终端，
//! 再返回错误结果。否则终端会停留在原始模式。
//!
//! 日志写到 stderr。TUI 占用着终端，所以 stderr 是终端时默认不输出；
//! 需要排查时用 `RUST_LOG=debug bishwakosh 2>bishwakosh.log`。
//!

mod logging;
mod terminal;
mod text;

pub use logging::init_logging;
pub use terminal::{init_terminal, restore_terminal, Term};
pub use text::{tail_to_width, truncate_to_width};
