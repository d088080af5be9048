use super::{DetailsMessage, GridMessage, ModalMessage, SearchMessage};
use crate::backend::BackendEvent;

/// 应用主消息
#[derive(Debug, Clone)]
pub enum AppMessage {
    /// 退出应用
    Quit,

    /// 在搜索框与网格之间切换焦点
    ToggleFocus,

    /// 搜索框消息
    Search(SearchMessage),

    /// 网格消息
    Grid(GridMessage),

    /// 详情浮层消息
    Details(DetailsMessage),

    /// 弹窗消息
    Modal(ModalMessage),

    /// 后台任务结果
    Backend(BackendEvent),

    /// 终端宽度变化（决定网格列数）
    Resize { width: u16 },

    /// 重新加载国家列表
    Refresh,

    /// 显示帮助
    ShowHelp,

    /// 切换语言
    CycleLanguage,

    /// 切换主题
    CycleTheme,

    /// 无操作（用于忽略未处理的事件）
    Noop,
}
