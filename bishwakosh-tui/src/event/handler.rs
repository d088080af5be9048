//! 事件处理器

use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::event::keymap::DefaultKeymap;
use crate::message::{AppMessage, DetailsMessage, GridMessage, ModalMessage, SearchMessage};
use crate::model::App;

/// 轮询事件
pub fn poll_event(timeout: Duration) -> Result<Option<Event>> {
    if event::poll(timeout)? {
        Ok(Some(event::read()?))
    } else {
        Ok(None)
    }
}

/// 处理事件，返回对应的消息
pub fn handle_event(event: Event, app: &App) -> AppMessage {
    match event {
        Event::Key(key_event) => handle_key_event(key_event, app),
        Event::Resize(width, _) => AppMessage::Resize { width },
        _ => AppMessage::Noop,
    }
}

/// 处理键盘事件
fn handle_key_event(key: KeyEvent, app: &App) -> AppMessage {
    // 只处理 Press，忽略 Release 和 Repeat（Windows 终端会重复上报）
    if key.kind != KeyEventKind::Press {
        return AppMessage::Noop;
    }

    if DefaultKeymap::FORCE_QUIT.matches(&key) {
        return AppMessage::Quit;
    }

    if app.modal.is_open() {
        return handle_modal_keys(key);
    }

    if app.details.is_open() {
        return handle_details_keys(key);
    }

    if DefaultKeymap::HELP.matches(&key) {
        return AppMessage::ShowHelp;
    }
    if DefaultKeymap::LANGUAGE.matches(&key) {
        return AppMessage::CycleLanguage;
    }
    if DefaultKeymap::THEME.matches(&key) {
        return AppMessage::CycleTheme;
    }
    if DefaultKeymap::REFRESH.matches(&key) {
        return AppMessage::Refresh;
    }
    if DefaultKeymap::TOGGLE_FOCUS.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    if app.focus.is_search() {
        handle_search_keys(key)
    } else {
        handle_grid_keys(key)
    }
}

/// 弹窗：Esc / Enter 关闭
fn handle_modal_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Esc | KeyCode::Enter => AppMessage::Modal(ModalMessage::Close),
        _ => AppMessage::Noop,
    }
}

/// 详情浮层：滚动与关闭
fn handle_details_keys(key: KeyEvent) -> AppMessage {
    let msg = match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Char('q') => DetailsMessage::Close,
        KeyCode::Up | KeyCode::Char('k') => DetailsMessage::ScrollUp,
        KeyCode::Down | KeyCode::Char('j') => DetailsMessage::ScrollDown,
        KeyCode::PageUp => DetailsMessage::PageUp,
        KeyCode::PageDown | KeyCode::Char(' ') => DetailsMessage::PageDown,
        KeyCode::Home => DetailsMessage::Top,
        _ => return AppMessage::Noop,
    };
    AppMessage::Details(msg)
}

/// 搜索框：字符输入编辑查询
fn handle_search_keys(key: KeyEvent) -> AppMessage {
    match key.code {
        KeyCode::Char(c) if !key.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT) => {
            AppMessage::Search(SearchMessage::Input(c))
        }
        KeyCode::Backspace => AppMessage::Search(SearchMessage::Backspace),
        KeyCode::Esc => AppMessage::Search(SearchMessage::Clear),
        // Enter 直接打开当前第一个（或选中的）结果
        KeyCode::Enter => AppMessage::Grid(GridMessage::Activate),
        KeyCode::Down => AppMessage::ToggleFocus,
        _ => AppMessage::Noop,
    }
}

/// 网格：方向键移动选中项
fn handle_grid_keys(key: KeyEvent) -> AppMessage {
    if DefaultKeymap::QUIT.matches(&key) {
        return AppMessage::Quit;
    }
    if DefaultKeymap::OPEN.matches(&key) {
        return AppMessage::Grid(GridMessage::Activate);
    }
    if DefaultKeymap::BACK.matches(&key) {
        return AppMessage::Search(SearchMessage::Clear);
    }
    if DefaultKeymap::FOCUS_SEARCH.matches(&key) {
        return AppMessage::ToggleFocus;
    }

    let msg = match key.code {
        KeyCode::Up | KeyCode::Char('k') => GridMessage::Up,
        KeyCode::Down | KeyCode::Char('j') => GridMessage::Down,
        KeyCode::Left | KeyCode::Char('h') => GridMessage::Left,
        KeyCode::Right | KeyCode::Char('l') => GridMessage::Right,
        KeyCode::Home => GridMessage::First,
        KeyCode::End => GridMessage::Last,
        _ => return AppMessage::Noop,
    };
    AppMessage::Grid(msg)
}
