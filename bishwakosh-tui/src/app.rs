//!
//! app.rs
//! 应用主循环
//!
//! 启动时 `update::startup` 已经把列表置为加载中，并发出了 `LoadCountries`。
//!
//! 主循环大约每 100 ms 执行一次（取决于有无事件）：
//! loop {
//!
//!     terminal.draw(|f| view::render(&app, f))        // 渲染 UI
//!     if app.should_quit { break }                    // 检查是否应该退出
//!     for event in backend.drain() {                  // 取回后台结果
//!         update(&mut app, AppMessage::Backend(event))    // 可能产生新的 Command
//!     }
//!     if let Some(event) = poll_event() {             // 轮询输入，最多等待 100ms
//!         let msg = handle_event(event, &app);            // 原始事件 → 消息
//!         update(&mut app, msg)                           // 更新状态，可能产生 Command
//!     }
//! }
//!
//! 所有 Command 都立即交给 `backend.execute`，它只派发任务，不会阻塞界面。

use std::time::Duration;

use anyhow::Result;

use crate::backend::Backend;
use crate::event;
use crate::message::AppMessage;
use crate::model::App;
use crate::update;
use crate::util::Term;
use crate::view;

const TICK: Duration = Duration::from_millis(100);

/// 运行应用主循环
pub fn run(terminal: &mut Term, app: &mut App, backend: &mut Backend) -> Result<()> {
    loop {
        // 1. 渲染 UI
        terminal.draw(|frame| {
            view::render(app, frame);
        })?;

        // 2. 检查是否应该退出
        if app.should_quit {
            break;
        }

        // 3. 处理后台结果
        for event in backend.drain() {
            dispatch(app, backend, AppMessage::Backend(event));
        }

        // 4. 轮询输入事件
        if let Some(event) = event::poll_event(TICK)? {
            let msg = event::handle_event(event, app);
            dispatch(app, backend, msg);
        }
    }

    Ok(())
}

fn dispatch(app: &mut App, backend: &Backend, msg: AppMessage) {
    if let Some(command) = update::update(app, msg) {
        backend.execute(command);
    }
}
