//! 焦点状态

/// 当前获得键盘输入的区域
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FocusPanel {
    /// 顶部搜索框
    #[default]
    Search,
    /// 国家卡片网格
    Grid,
}

impl FocusPanel {
    /// 切换到另一个区域
    #[must_use]
    pub fn toggle(self) -> Self {
        match self {
            FocusPanel::Search => FocusPanel::Grid,
            FocusPanel::Grid => FocusPanel::Search,
        }
    }

    pub fn is_search(self) -> bool {
        matches!(self, FocusPanel::Search)
    }

    pub fn is_grid(self) -> bool {
        matches!(self, FocusPanel::Grid)
    }
}
