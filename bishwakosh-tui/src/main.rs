//! Bishwakosh TUI
//!
//! ## 架构
//!
//! 采用 Elm Architecture (TEA) 模式：
//! - **Model**: 应用状态 (`model/`)
//! - **Message**: 事件消息 (`message/`)
//! - **Update**: 状态更新 (`update/`)
//! - **View**: UI 渲染 (`view/`)
//! - **Event**: 输入处理 (`event/`)
//! - **Backend**: 后台网络请求 (`backend/`)
//!
//!
//! main.rs
//! 程序入口
//!
//! fn `main()` {
//!
//!     init_logging()          // stderr 日志，RUST_LOG 控制
//!     CatalogConfig::from_env()   // 目录地址、Gemini 密钥与模型、输出语言
//!     Backend::new()          // 后台运行时与 HTTP 客户端
//!     init_terminal()         // 原始模式 + 备用屏幕
//!     update::startup()       // 列表置为加载中，请求国家列表
//!     app::run()              // 主循环
//!     restore_terminal()      // 无论成功与否，都恢复终端
//!
//! }
//!
//! 配置全部来自环境变量，见 `bishwakosh_catalog::CatalogConfig`。

mod app;
mod backend;
mod event;
mod i18n;
mod message;
mod model;
mod update;
mod util;
mod view;

use anyhow::Result;
use bishwakosh_catalog::CatalogConfig;

use backend::Backend;
use i18n::Language;
use util::{init_logging, init_terminal, restore_terminal};

fn main() -> Result<(), anyhow::Error> {
    // 1. 日志与配置
    init_logging();
    let config = CatalogConfig::from_env();
    tracing::info!(
        directory = %config.directory_url,
        model = %config.model,
        language = config.language.code(),
        "starting bishwakosh"
    );

    // 2. 后台运行时
    let mut backend = Backend::new(&config)?;

    // 3. 初始化终端
    let mut terminal = init_terminal()?;

    // 4. 创建应用实例并请求国家列表
    let mut app = model::App::new(Language::from(config.language));
    let width = terminal.size().map(|size| size.width).unwrap_or(80);
    backend.execute(update::startup(&mut app, width));

    // 5. 运行主循环
    let result = app::run(&mut terminal, &mut app, &mut backend);

    // 6. 恢复终端（无论成功失败都执行）
    restore_terminal(&mut terminal)?;
    backend.shutdown();

    if let Err(ref e) = result {
        tracing::error!("exited with error: {e:#}");
    }
    result
}
