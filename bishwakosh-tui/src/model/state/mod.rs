//! 页面数据状态

mod catalog;
mod details;
mod modal;
mod settings;

pub use catalog::{CatalogState, ListPhase, CARD_HEIGHT, CARD_WIDTH};
pub use details::{DetailsPhase, DetailsState, Ticket};
pub use modal::{Modal, ModalState};
pub use settings::{SettingsState, Theme};
