//! 弹窗状态

/// 弹窗类型
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Modal {
    /// 快捷键帮助
    Help,
    /// 阻塞式错误提示
    Error { title: String, message: String },
}

#[derive(Debug, Clone, Default)]
pub struct ModalState {
    /// 当前活动的弹窗
    pub active: Option<Modal>,
}

impl ModalState {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn show(&mut self, modal: Modal) {
        self.active = Some(modal);
    }

    pub fn close(&mut self) {
        self.active = None;
    }

    pub fn is_open(&self) -> bool {
        self.active.is_some()
    }

    pub fn show_help(&mut self) {
        self.show(Modal::Help);
    }

    pub fn show_error(&mut self, title: impl Into<String>, message: impl Into<String>) {
        self.show(Modal::Error {
            title: title.into(),
            message: message.into(),
        });
    }
}
