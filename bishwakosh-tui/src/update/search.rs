//! 搜索框更新

use crate::message::SearchMessage;
use crate::model::App;

pub fn update(app: &mut App, msg: SearchMessage) {
    match msg {
        SearchMessage::Input(c) => app.catalog.push_char(c),
        SearchMessage::Backspace => app.catalog.pop_char(),
        SearchMessage::Clear => {
            app.catalog.clear_query();
        }
    }
}
