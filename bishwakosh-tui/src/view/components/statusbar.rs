//! 底部状态栏组件

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, FocusPanel, Theme};
use crate::view::theme::Styles;

/// 渲染状态栏
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let hints = get_hints(app);

    let mut spans = Vec::new();
    for (i, (key, desc)) in hints.iter().enumerate() {
        if i > 0 {
            spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        }
        spans.push(Span::styled(*key, Styles::hint_key()));
        spans.push(Span::raw(" "));
        spans.push(Span::styled(*desc, Styles::hint_desc()));
    }

    if let Some(ref msg) = app.status_message {
        spans.push(Span::styled(" │ ", Style::default().fg(Color::DarkGray)));
        spans.push(Span::styled(msg.clone(), Style::default().fg(Color::Yellow)));
    }

    // 右侧显示当前语言与主题
    let texts = t();
    let theme = match app.settings.theme {
        Theme::Dark => texts.common.theme_dark,
        Theme::Light => texts.common.theme_light,
    };
    let right = format!(" {} · {} ", app.settings.language.display_name(), theme);
    let right_width = u16::try_from(right.width()).unwrap_or(0);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(right_width)])
        .split(area);

    frame.render_widget(
        Paragraph::new(Line::from(spans)).style(Styles::statusbar()),
        columns[0],
    );
    frame.render_widget(
        Paragraph::new(Line::styled(right, Styles::hint_desc())).style(Styles::statusbar()),
        columns[1],
    );
}

/// 根据当前状态生成快捷键提示
fn get_hints(app: &App) -> Vec<(&'static str, &'static str)> {
    let texts = &t().status_bar;
    let mut hints = Vec::new();

    if app.modal.is_open() {
        hints.push(("Esc", texts.close));
        return hints;
    }

    if app.details.is_open() {
        hints.push(("↑↓", texts.scroll));
        hints.push(("Esc", texts.close));
        return hints;
    }

    hints.push(("Tab", texts.switch_focus));
    match app.focus {
        FocusPanel::Search => {
            hints.push(("Enter", texts.open));
            hints.push(("Esc", texts.clear));
            hints.push(("F1", texts.help));
            hints.push(("Ctrl+C", texts.quit));
        }
        FocusPanel::Grid => {
            hints.push(("←↑↓→", texts.select));
            hints.push(("Enter", texts.open));
            hints.push(("F1", texts.help));
            hints.push(("q", texts.quit));
        }
    }

    hints
}
