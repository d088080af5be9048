use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    widgets::Block,
    Frame,
};

use crate::model::App;

use super::components;
use super::pages;
use super::theme::Styles;

/// 低于此高度时省略标语区
const HERO_MIN_HEIGHT: u16 = 24;

/// 渲染主布局
pub fn render(app: &App, frame: &mut Frame) {
    let size = frame.area();
    frame.render_widget(Block::default().style(Styles::base()), size);

    let hero_height = if size.height >= HERO_MIN_HEIGHT { 2 } else { 0 };

    // 标题栏与搜索框 + 标语 + 国家网格 + 页脚 + 状态栏
    let main_layout = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(hero_height),
            Constraint::Min(1),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(size);

    components::header::render(app, frame, main_layout[0]);
    if hero_height > 0 {
        components::header::render_hero(frame, main_layout[1]);
    }
    pages::catalog::render(app, frame, main_layout[2]);
    components::header::render_footer(frame, main_layout[3]);
    components::statusbar::render(app, frame, main_layout[4]);

    // 浮层在最上层，弹窗再在其上
    components::details::render(app, frame);
    components::modal::render(app, frame);
}

/// 计算居中区域
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let width = width.min(area.width);
    let height = height.min(area.height);
    let x = area.x + (area.width - width) / 2;
    let y = area.y + (area.height - height) / 2;
    Rect::new(x, y, width, height)
}
