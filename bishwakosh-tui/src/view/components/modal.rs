//! 弹窗组件

use ratatui::{
    layout::{Alignment, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, Modal};
use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

/// 渲染当前弹窗（如有）
pub fn render(app: &App, frame: &mut Frame) {
    match &app.modal.active {
        Some(Modal::Help) => render_help(frame),
        Some(Modal::Error { title, message }) => render_error(frame, title, message),
        None => {}
    }
}

/// 渲染错误弹窗
fn render_error(frame: &mut Frame, title: &str, message: &str) {
    let area = centered_rect(56, 9, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::styled(format!(" {} ", title), Styles::error()))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Style::default().fg(colors().error))
        .style(Styles::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect::new(
        inner.x + 1,
        inner.y + 1,
        inner.width.saturating_sub(2),
        inner.height.saturating_sub(1),
    );

    let lines = vec![
        Line::styled(message.to_string(), Styles::title()),
        Line::from(""),
        Line::styled(t().alerts.dismiss_hint, Styles::muted()),
    ];

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true });
    frame.render_widget(paragraph, inner);
}

/// 渲染帮助弹窗
fn render_help(frame: &mut Frame) {
    let texts = &t().help;
    let actions = &texts.actions;

    let sections: [(&str, &[(&str, &str)]); 4] = [
        (
            texts.global,
            &[
                ("Tab", actions.switch_focus),
                ("F1", actions.help),
                ("F2", actions.language),
                ("F3", actions.theme),
                ("Alt+R", actions.refresh),
                ("Ctrl+C", actions.quit),
            ],
        ),
        (
            texts.search,
            &[
                ("abc", actions.type_to_search),
                ("Enter", actions.open_details),
                ("Esc", actions.clear_query),
            ],
        ),
        (
            texts.grid,
            &[
                ("←↑↓→/hjkl", actions.move_selection),
                ("Enter", actions.open_details),
                ("/", actions.switch_focus),
                ("q", actions.quit),
            ],
        ),
        (
            texts.details,
            &[
                ("↑↓/PgUp/PgDn", actions.scroll),
                ("Esc", actions.close_overlay),
            ],
        ),
    ];

    let heading = Style::default()
        .fg(colors().accent)
        .add_modifier(Modifier::BOLD);

    let mut lines = Vec::new();
    for (i, (title, keys)) in sections.iter().enumerate() {
        if i > 0 {
            lines.push(Line::from(""));
        }
        lines.push(Line::styled(*title, heading));
        for (key, desc) in keys.iter() {
            lines.push(Line::from(vec![
                Span::styled(format!("  {:<14}", key), Styles::hint_key()),
                Span::styled(*desc, Styles::title()),
            ]));
        }
    }

    let height = u16::try_from(lines.len()).unwrap_or(u16::MAX).saturating_add(2);
    let area = centered_rect(64, height, frame.area());
    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(format!(" {} ", texts.title))
        .title_alignment(Alignment::Center)
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Styles::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let inner = Rect::new(inner.x + 1, inner.y, inner.width.saturating_sub(2), inner.height);
    frame.render_widget(Paragraph::new(lines), inner);
}
