//! 标题栏、搜索框、标语与页脚

use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::App;
use crate::util::tail_to_width;
use crate::view::theme::Styles;

/// 标题 + 搜索框
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let title = format!(" 🌐 {}", texts.common.app_name);
    let title_width = u16::try_from(title.width()).unwrap_or(u16::MAX).saturating_add(2);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Length(title_width), Constraint::Min(10)])
        .split(area);

    let title = Paragraph::new(vec![Line::from(""), Line::styled(title, Styles::accent())]);
    frame.render_widget(title, columns[0]);

    render_search_box(app, frame, columns[1]);
}

fn render_search_box(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_search() && !app.has_overlay();

    let block = Block::default()
        .title(" 🔍 ")
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.catalog.query.is_empty() {
        let placeholder = Paragraph::new(Span::styled(texts.header.search_placeholder, Styles::muted()));
        frame.render_widget(placeholder, inner);
        if focused {
            frame.set_cursor_position((inner.x, inner.y));
        }
        return;
    }

    // 查询过长时只显示末尾，光标留一格
    let max = usize::from(inner.width.saturating_sub(1));
    let shown = tail_to_width(&app.catalog.query, max);
    let cursor_x = inner.x + u16::try_from(shown.width()).unwrap_or(0);

    frame.render_widget(Paragraph::new(Span::styled(shown, Styles::title())), inner);
    if focused {
        frame.set_cursor_position((cursor_x, inner.y));
    }
}

/// 标语区
pub fn render_hero(frame: &mut Frame, area: Rect) {
    let texts = t();
    let lines = vec![
        Line::styled(texts.header.tagline, Styles::title()),
        Line::styled(texts.header.subtitle, Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// 页脚
pub fn render_footer(frame: &mut Frame, area: Rect) {
    let texts = t();
    let line = Line::from(vec![
        Span::styled(texts.footer.notice, Styles::muted()),
        Span::styled("  ·  ", Styles::muted()),
        Span::styled(texts.footer.data_source, Styles::muted()),
    ]);
    frame.render_widget(Paragraph::new(line).alignment(Alignment::Center), area);
}
