use super::{CatalogState, DetailsState, FocusPanel, ModalState, SettingsState};
use crate::i18n::Language;

/// 应用主状态
#[derive(Debug)]
pub struct App {
    /// 是否应该退出
    pub should_quit: bool,

    /// 当前焦点
    pub focus: FocusPanel,

    /// 状态栏消息
    pub status_message: Option<String>,

    /// 国家列表
    pub catalog: CatalogState,
    /// 详情浮层
    pub details: DetailsState,
    /// 弹窗
    pub modal: ModalState,
    /// 会话设置
    pub settings: SettingsState,
}

impl App {
    /// 创建新的应用实例（列表处于加载中）
    pub fn new(language: Language) -> Self {
        Self {
            should_quit: false,
            focus: FocusPanel::Search,
            status_message: None,
            catalog: CatalogState::new(),
            details: DetailsState::new(),
            modal: ModalState::new(),
            settings: SettingsState::new(language),
        }
    }

    /// 是否有覆盖在列表之上的界面（弹窗或详情浮层）
    pub fn has_overlay(&self) -> bool {
        self.modal.is_open() || self.details.is_open()
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
    }

    pub fn clear_status(&mut self) {
        self.status_message = None;
    }
}

impl Default for App {
    fn default() -> Self {
        Self::new(Language::default())
    }
}
