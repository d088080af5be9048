//! 国际化（i18n）
//!
//! 翻译表是编译期常量，当前语言保存在一个原子变量里，
//! 任何层都可以通过 `t()` 直接读取，无需把语言参数层层传递。
//!
//! 切换语言同时决定 AI 生成详情所用的输出语言
//! （见 [`Language::output_language`]）。

use std::sync::atomic::{AtomicUsize, Ordering};

use bishwakosh_catalog::OutputLanguage;

mod bn_bd;
mod en_us;
pub mod keys;

pub use keys::*;

/// 支持的语言
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Language {
    /// 孟加拉语（孟加拉国）
    #[default]
    BnBd,
    /// 英语（美国）
    EnUs,
}

impl Language {
    /// 获取语言的显示名称（使用该语言本身的文字）
    pub fn display_name(self) -> &'static str {
        match self {
            Language::BnBd => "বাংলা",
            Language::EnUs => "English",
        }
    }

    /// 获取下一个语言（用于循环切换）
    #[must_use]
    pub fn next(self) -> Language {
        match self {
            Language::BnBd => Language::EnUs,
            Language::EnUs => Language::BnBd,
        }
    }

    /// AI 详情的输出语言
    pub fn output_language(self) -> OutputLanguage {
        match self {
            Language::BnBd => OutputLanguage::Bengali,
            Language::EnUs => OutputLanguage::English,
        }
    }

    fn index(self) -> usize {
        match self {
            Language::BnBd => 0,
            Language::EnUs => 1,
        }
    }
}

impl From<OutputLanguage> for Language {
    fn from(language: OutputLanguage) -> Self {
        match language {
            OutputLanguage::Bengali => Language::BnBd,
            OutputLanguage::English => Language::EnUs,
        }
    }
}

/// 当前语言索引（0 = BnBd）
static CURRENT_LANGUAGE: AtomicUsize = AtomicUsize::new(0);

/// 获取当前语言的翻译
pub fn t() -> &'static Translations {
    match CURRENT_LANGUAGE.load(Ordering::Relaxed) {
        1 => &en_us::TRANSLATIONS,
        _ => &bn_bd::TRANSLATIONS,
    }
}

/// 设置当前语言
pub fn set_language(lang: Language) {
    CURRENT_LANGUAGE.store(lang.index(), Ordering::Relaxed);
}
