//! 详情浮层更新

use crate::message::DetailsMessage;
use crate::model::App;

const PAGE: i32 = 10;

pub fn update(app: &mut App, msg: DetailsMessage) {
    match msg {
        DetailsMessage::ScrollUp => app.details.scroll_by(-1),
        DetailsMessage::ScrollDown => app.details.scroll_by(1),
        DetailsMessage::PageUp => app.details.scroll_by(-PAGE),
        DetailsMessage::PageDown => app.details.scroll_by(PAGE),
        DetailsMessage::Top => app.details.scroll_to_top(),
        // 仍在途的请求不会被取消，其结果到达时按票号丢弃
        DetailsMessage::Close => app.details.close(),
    }
}
