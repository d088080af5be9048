//! 网格更新

use crate::backend::Command;
use crate::message::GridMessage;
use crate::model::{App, FocusPanel};

pub fn update(app: &mut App, msg: GridMessage) -> Option<Command> {
    match msg {
        GridMessage::Up => app.catalog.select_up(),
        GridMessage::Down => app.catalog.select_down(),
        GridMessage::Left => app.catalog.select_left(),
        GridMessage::Right => app.catalog.select_right(),
        GridMessage::First => app.catalog.select_first(),
        GridMessage::Last => app.catalog.select_last(),
        GridMessage::Activate => return activate(app),
    }
    None
}

/// 打开选中国家的详情：领取新票号并请求 AI 详情
///
/// 列表尚未就绪或没有可选项时不做任何事。
fn activate(app: &mut App) -> Option<Command> {
    if !app.catalog.is_ready() {
        tracing::debug!("ignoring activation while the country list is loading");
        return None;
    }
    let brief = app.catalog.selected_brief()?.clone();
    let ticket = app.details.begin(&brief.display_name);
    app.focus = FocusPanel::Grid;

    Some(Command::DescribeCountry {
        ticket,
        brief,
        language: app.settings.language.output_language(),
    })
}
