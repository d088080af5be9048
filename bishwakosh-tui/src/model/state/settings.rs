//! 会话设置（仅保存在内存中）

use crate::i18n::{self, Language};
use crate::view::theme;

/// 主题
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    #[must_use]
    pub fn next(self) -> Theme {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// 主题索引（0 = Dark, 1 = Light），与 `view::theme` 约定一致
    pub fn index(self) -> u8 {
        match self {
            Theme::Dark => 0,
            Theme::Light => 1,
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct SettingsState {
    /// 界面语言，同时决定 AI 详情的输出语言
    pub language: Language,
    pub theme: Theme,
}

impl SettingsState {
    pub fn new(language: Language) -> Self {
        Self {
            language,
            theme: Theme::default(),
        }
    }

    /// 切换语言并应用到全局翻译
    pub fn cycle_language(&mut self) {
        self.language = self.language.next();
        i18n::set_language(self.language);
    }

    /// 切换主题并应用到全局配色
    pub fn cycle_theme(&mut self) {
        self.theme = self.theme.next();
        theme::set_theme_index(self.theme.index());
    }

    /// 把当前设置写入全局状态（启动时调用）
    pub fn apply(&self) {
        i18n::set_language(self.language);
        theme::set_theme_index(self.theme.index());
    }
}
