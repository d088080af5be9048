//! 国家网格页面

use bishwakosh_catalog::{CountryBrief, GLOBE_GLYPH};
use ratatui::{
    layout::{Alignment, Rect},
    text::Line,
    widgets::{Block, BorderType, Borders, Paragraph},
    Frame,
};

use crate::i18n::t;
use crate::model::{App, ListPhase, CARD_HEIGHT, CARD_WIDTH};
use crate::util::truncate_to_width;
use crate::view::theme::Styles;

/// 渲染列表区域（带计数标题的外框 + 内容）
pub fn render(app: &App, frame: &mut Frame, area: Rect) {
    let texts = t();
    let focused = app.focus.is_grid() && !app.has_overlay();

    let heading = if app.catalog.phase == ListPhase::Loading {
        String::new()
    } else if app.catalog.query.is_empty() {
        format!(" {} ({}) ", texts.catalog.all_countries, app.catalog.countries.len())
    } else {
        format!(" {} ({}) ", texts.catalog.search_results, app.catalog.visible_len())
    };

    let block = Block::default()
        .title(Line::styled(heading, Styles::title()))
        .borders(Borders::ALL)
        .border_style(Styles::border(focused));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    if app.catalog.phase == ListPhase::Loading {
        render_loading(frame, inner);
        return;
    }

    let visible = app.catalog.visible();
    if visible.is_empty() {
        render_empty(frame, inner);
    } else {
        render_grid(app, &visible, frame, inner);
    }
}

fn render_loading(frame: &mut Frame, area: Rect) {
    let lines = vec![
        Line::from(""),
        Line::styled("⟳", Styles::accent()),
        Line::from(""),
        Line::styled(t().catalog.loading_list, Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

fn render_empty(frame: &mut Frame, area: Rect) {
    let texts = t();
    let lines = vec![
        Line::from(""),
        Line::from("🔍"),
        Line::from(""),
        Line::styled(texts.catalog.empty_title, Styles::title()),
        Line::styled(texts.catalog.empty_hint, Styles::muted()),
    ];
    frame.render_widget(Paragraph::new(lines).alignment(Alignment::Center), area);
}

/// 按行渲染卡片，保证选中行可见
fn render_grid(app: &App, visible: &[&CountryBrief], frame: &mut Frame, area: Rect) {
    let columns = app.catalog.columns.max(1);
    let rows_on_screen = usize::from((area.height / CARD_HEIGHT).max(1));
    let selected_row = app.catalog.selected_row();
    let first_row = (selected_row + 1).saturating_sub(rows_on_screen);

    for (index, country) in visible.iter().enumerate().skip(first_row * columns) {
        let row = index / columns - first_row;
        if row >= rows_on_screen {
            break;
        }
        let col = index % columns;

        let (Ok(col), Ok(row)) = (u16::try_from(col), u16::try_from(row)) else {
            break;
        };
        let card = Rect::new(
            area.x + col * CARD_WIDTH,
            area.y + row * CARD_HEIGHT,
            CARD_WIDTH,
            CARD_HEIGHT,
        )
        .intersection(area);
        if card.is_empty() {
            continue;
        }

        render_card(country, index == app.catalog.selected, frame, card);
    }
}

fn render_card(country: &CountryBrief, selected: bool, frame: &mut Frame, area: Rect) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
        .border_style(Styles::border(selected));
    let block = if selected {
        block.style(Styles::selected())
    } else {
        block
    };
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let width = usize::from(inner.width);
    let lines = vec![
        Line::from(format!("{}  {}", flag_of(country), country.two_letter_code)),
        Line::from(truncate_to_width(&country.display_name, width)),
    ];
    frame.render_widget(Paragraph::new(lines), inner);
}

/// 终端无法显示 SVG，用区域指示符拼出国旗；目录没有国旗时显示地球
fn flag_of(country: &CountryBrief) -> String {
    if country.has_flag_image() {
        country
            .flag_emoji()
            .unwrap_or_else(|| GLOBE_GLYPH.to_string())
    } else {
        GLOBE_GLYPH.to_string()
    }
}
