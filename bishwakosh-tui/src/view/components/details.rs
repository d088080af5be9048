//! 详情浮层

use bishwakosh_catalog::{map_embed_url, CountryDetails};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::i18n::t;
use crate::model::{App, DetailsPhase};
use crate::view::layout::centered_rect;
use crate::view::theme::{colors, Styles};

const MAX_WIDTH: u16 = 96;

pub fn render(app: &App, frame: &mut Frame) {
    let texts = t();
    let screen = frame.area();
    let area = centered_rect(
        MAX_WIDTH.min(screen.width.saturating_sub(4)),
        screen.height.saturating_sub(4),
        screen,
    );

    let (title, body, scroll) = match &app.details.phase {
        DetailsPhase::Idle => return,
        DetailsPhase::Loading { .. } => (
            texts.details.loading_title.to_string(),
            loading_lines(),
            0,
        ),
        DetailsPhase::Ready { details, scroll } => {
            (details.name.clone(), detail_lines(details), *scroll)
        }
    };

    frame.render_widget(Clear, area);

    let block = Block::default()
        .title(Line::styled(format!(" {title} "), Styles::accent()))
        .title_bottom(
            Line::styled(format!(" Esc: {} ", texts.common.close), Styles::muted())
                .right_aligned(),
        )
        .borders(Borders::ALL)
        .border_style(Styles::border(true))
        .style(Styles::base());
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let padded = Rect::new(
        inner.x + 1,
        inner.y,
        inner.width.saturating_sub(2),
        inner.height,
    );

    let paragraph = Paragraph::new(body)
        .wrap(Wrap { trim: false })
        .scroll((scroll, 0));
    let paragraph = if app.details.is_loading() {
        paragraph.alignment(Alignment::Center)
    } else {
        paragraph
    };
    frame.render_widget(paragraph, padded);
}

fn loading_lines() -> Vec<Line<'static>> {
    vec![
        Line::from(""),
        Line::styled("⏳", Styles::accent()),
        Line::from(""),
        Line::styled(t().details.loading_body, Styles::muted()),
    ]
}

fn detail_lines(details: &CountryDetails) -> Vec<Line<'static>> {
    let texts = t();
    let labels = &texts.details.labels;
    let not_available = texts.common.not_available;

    let rows = [
        (labels.continent, &details.continent),
        (labels.capital, &details.capital),
        (labels.language, &details.language),
        (labels.population, &details.population),
        (labels.religion, &details.religion),
        (labels.area, &details.area),
        (labels.currency, &details.currency),
        (labels.exchange_rate, &details.exchange_rate_summary),
        (labels.iso_code, &details.iso_code_pair),
        (labels.dialing_code, &details.dialing_code),
    ];
    let label_width = rows.iter().map(|(label, _)| label.width()).max().unwrap_or(0);

    let mut lines = vec![
        Line::from(vec![
            Span::styled(format!("🗺  {}: ", texts.details.map_embed), Styles::muted()),
            Span::styled(map_embed_url(&details.name), Styles::accent()),
        ]),
        Line::from(vec![
            Span::styled(format!("🔗 {}: ", texts.details.map_link), Styles::muted()),
            Span::raw(
                details
                    .map_url
                    .clone()
                    .unwrap_or_else(|| not_available.to_string()),
            ),
        ]),
        Line::from(""),
    ];

    for (label, value) in rows {
        let pad = " ".repeat(label_width - label.width());
        let value = if value.trim().is_empty() {
            not_available.to_string()
        } else {
            value.clone()
        };
        lines.push(Line::from(vec![
            Span::styled(format!("{label}{pad}  "), Styles::muted()),
            Span::styled(value, Styles::title()),
        ]));
    }

    lines.push(Line::from(""));
    lines.push(Line::from(vec![
        Span::styled("▍", ratatui::style::Style::default().fg(colors().highlight)),
        Span::styled(texts.details.history, Styles::title()),
    ]));
    lines.extend(details.history.lines().map(|l| Line::from(l.to_string())));

    lines
}
