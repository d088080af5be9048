//!
//! src/message/mod.rs
//! Message 层：事件消息定义
//!
//! Event 层把按键翻译成这里的消息，Backend 的结果也包装成消息，
//! 两者统一交给 Update 层消费。
//!
//! 有模块结构：
//!     src/message/mod.rs
//!         mod app;        // 顶层 AppMessage
//!         mod search;     // 搜索框
//!         mod grid;       // 国家网格
//!         mod details;    // 详情浮层
//!         mod modal;      // 弹窗

mod app;
mod details;
mod grid;
mod modal;
mod search;

pub use app::AppMessage;
pub use details::DetailsMessage;
pub use grid::GridMessage;
pub use modal::ModalMessage;
pub use search::SearchMessage;
