//! 视图组件

pub mod details;
pub mod header;
pub mod modal;
pub mod statusbar;
