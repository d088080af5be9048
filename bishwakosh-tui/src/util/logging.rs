//! 日志初始化

use std::io::IsTerminal;

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// 安装 stderr 上的 tracing 订阅者
///
/// `RUST_LOG` 优先；未设置时，stderr 是终端则关闭日志（避免破坏界面），
/// 被重定向则记录 info 及以上。目录与补全客户端的 `log` 记录也会被收集。
pub fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        EnvFilter::new(if std::io::stderr().is_terminal() {
            "off"
        } else {
            "info"
        })
    });

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .without_time()
                .with_ansi(false),
        )
        .with(filter)
        .init();
}
