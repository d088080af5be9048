//! 主题配色

use ratatui::style::{Color, Modifier, Style};
use std::sync::atomic::{AtomicU8, Ordering};

// 0 = Dark, 1 = Light
static CURRENT_THEME: AtomicU8 = AtomicU8::new(0);

/// 设置主题（通过索引值）
pub fn set_theme_index(index: u8) {
    CURRENT_THEME.store(index, Ordering::SeqCst);
}

/// 获取当前主题的颜色方案
pub fn colors() -> ThemeColors {
    match CURRENT_THEME.load(Ordering::SeqCst) {
        0 => ThemeColors::dark(),
        _ => ThemeColors::light(),
    }
}

/// 主题颜色
#[derive(Debug, Clone)]
pub struct ThemeColors {
    pub bg: Color,
    pub fg: Color,
    pub border: Color,
    pub border_focused: Color,
    pub highlight: Color,
    pub selected_bg: Color,
    pub selected_fg: Color,
    pub accent: Color,
    pub error: Color,
    pub muted: Color,
}

impl ThemeColors {
    /// 深色主题
    pub fn dark() -> Self {
        Self {
            bg: Color::Rgb(15, 23, 42),
            fg: Color::Rgb(226, 232, 240),
            border: Color::Rgb(51, 65, 85),
            border_focused: Color::Rgb(59, 130, 246),
            highlight: Color::Rgb(37, 99, 235),
            selected_bg: Color::Rgb(30, 64, 175),
            selected_fg: Color::White,
            accent: Color::Rgb(129, 140, 248),
            error: Color::Rgb(248, 113, 113),
            muted: Color::Rgb(148, 163, 184),
        }
    }

    /// 浅色主题
    pub fn light() -> Self {
        Self {
            bg: Color::Rgb(248, 250, 252),
            fg: Color::Rgb(30, 41, 59),
            border: Color::Rgb(203, 213, 225),
            border_focused: Color::Rgb(37, 99, 235),
            highlight: Color::Rgb(37, 99, 235),
            selected_bg: Color::Rgb(219, 234, 254),
            selected_fg: Color::Rgb(30, 41, 59),
            accent: Color::Rgb(79, 70, 229),
            error: Color::Rgb(220, 38, 38),
            muted: Color::Rgb(100, 116, 139),
        }
    }
}

/// 常用样式
pub struct Styles;

impl Styles {
    pub fn base() -> Style {
        let c = colors();
        Style::default().bg(c.bg).fg(c.fg)
    }

    pub fn border(focused: bool) -> Style {
        let c = colors();
        Style::default().fg(if focused { c.border_focused } else { c.border })
    }

    pub fn selected() -> Style {
        let c = colors();
        Style::default()
            .bg(c.selected_bg)
            .fg(c.selected_fg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn title() -> Style {
        Style::default().fg(colors().fg).add_modifier(Modifier::BOLD)
    }

    pub fn muted() -> Style {
        Style::default().fg(colors().muted)
    }

    pub fn accent() -> Style {
        Style::default()
            .fg(colors().accent)
            .add_modifier(Modifier::BOLD)
    }

    pub fn error() -> Style {
        Style::default()
            .fg(colors().error)
            .add_modifier(Modifier::BOLD)
    }

    pub fn statusbar() -> Style {
        let c = colors();
        Style::default().bg(c.highlight).fg(Color::White)
    }

    /// 快捷键提示样式
    pub fn hint_key() -> Style {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    }

    /// 快捷键说明样式
    pub fn hint_desc() -> Style {
        Style::default().fg(Color::Rgb(226, 232, 240))
    }
}
