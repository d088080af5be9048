//!
//! src/model/mod.rs
//! Model 层：应用状态定义
//!
//! Model 层是应用状态的 “唯一真相来源”。
//! 这里只有数据结构和就地修改它们的小方法，
//! 所有状态变更都由 Update 层根据消息触发。
//!
//!
//! 有模块结构：
//!     src/model/mod.rs
//!         mod app;            // 主应用状态
//!         mod focus;          // 焦点状态（Search / Grid）
//!         pub mod state;      // 各区域数据状态
//!
//!
//! ═══════════════════════════════════════════════════════════════════════════
//! 两条相互独立的状态线
//! ═══════════════════════════════════════════════════════════════════════════
//!
//!     列表：  ListPhase::Loading ──▶ ListPhase::Ready
//!             （失败时以空列表进入 Ready，错误只写日志）
//!
//!     详情：  Idle ──▶ Loading{ticket} ──▶ Ready ──▶ Idle
//!                         │
//!                         └── 失败 ──▶ 错误弹窗 + Idle
//!
//!     只有列表处于 Ready 时才能打开详情；
//!     关闭浮层无论处于哪个阶段都回到 Idle。

mod app;
mod focus;
pub mod state;

pub use app::App;
pub use focus::FocusPanel;
pub use state::{
    CatalogState, DetailsPhase, DetailsState, ListPhase, Modal, ModalState, SettingsState, Theme,
    Ticket, CARD_HEIGHT, CARD_WIDTH,
};
