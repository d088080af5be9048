//! 国家列表状态
//!
//! 列表只在加载完成时整体写入一次；搜索结果每次都从完整列表重新过滤，
//! `selected` 是过滤结果中的下标。

use bishwakosh_catalog::{filter_countries, CountryBrief};

/// 单张卡片宽度（含边框）
pub const CARD_WIDTH: u16 = 24;
/// 单张卡片高度（含边框）
pub const CARD_HEIGHT: u16 = 4;

/// 列表加载阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListPhase {
    #[default]
    Loading,
    Ready,
}

/// 国家列表页面状态
#[derive(Debug)]
pub struct CatalogState {
    /// 加载阶段
    pub phase: ListPhase,
    /// 完整的国家列表（已排序）
    pub countries: Vec<CountryBrief>,
    /// 搜索关键字（原样保存，不做裁剪）
    pub query: String,
    /// 过滤结果中的选中下标
    pub selected: usize,
    /// 网格列数（由终端宽度决定）
    pub columns: usize,
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogState {
    pub fn new() -> Self {
        Self {
            phase: ListPhase::Loading,
            countries: Vec::new(),
            query: String::new(),
            selected: 0,
            columns: 1,
        }
    }

    pub fn is_ready(&self) -> bool {
        self.phase == ListPhase::Ready
    }

    /// 重新进入加载阶段（手动刷新）
    pub fn begin_loading(&mut self) {
        self.phase = ListPhase::Loading;
    }

    /// 写入加载结果；失败时传入空列表
    pub fn finish_loading(&mut self, countries: Vec<CountryBrief>) {
        self.countries = countries;
        self.phase = ListPhase::Ready;
        self.clamp_selection();
    }

    /// 当前查询下可见的国家
    pub fn visible(&self) -> Vec<&CountryBrief> {
        filter_countries(&self.countries, &self.query)
    }

    pub fn visible_len(&self) -> usize {
        self.visible().len()
    }

    pub fn selected_brief(&self) -> Option<&CountryBrief> {
        self.visible().get(self.selected).copied()
    }

    // ========== 搜索 ==========

    pub fn push_char(&mut self, c: char) {
        self.query.push(c);
        self.selected = 0;
    }

    pub fn pop_char(&mut self) {
        if self.query.pop().is_some() {
            self.selected = 0;
        }
    }

    /// 清空查询，返回是否有变化
    pub fn clear_query(&mut self) -> bool {
        if self.query.is_empty() {
            return false;
        }
        self.query.clear();
        self.selected = 0;
        true
    }

    // ========== 网格导航 ==========

    /// 根据终端宽度计算列数（内容区两侧各有一列边框）
    pub fn set_columns_for_width(&mut self, terminal_width: u16) {
        let inner = terminal_width.saturating_sub(2);
        self.columns = usize::from((inner / CARD_WIDTH).max(1));
    }

    pub fn select_left(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn select_right(&mut self) {
        if self.selected + 1 < self.visible_len() {
            self.selected += 1;
        }
    }

    pub fn select_up(&mut self) {
        if self.selected >= self.columns {
            self.selected -= self.columns;
        }
    }

    pub fn select_down(&mut self) {
        let len = self.visible_len();
        if len == 0 {
            return;
        }
        let target = self.selected + self.columns;
        if target < len {
            self.selected = target;
        } else if self.selected / self.columns < (len - 1) / self.columns {
            // 下一行是不满的最后一行
            self.selected = len - 1;
        }
    }

    pub fn select_first(&mut self) {
        self.selected = 0;
    }

    pub fn select_last(&mut self) {
        self.selected = self.visible_len().saturating_sub(1);
    }

    /// 选中项所在的行
    pub fn selected_row(&self) -> usize {
        self.selected / self.columns
    }

    fn clamp_selection(&mut self) {
        let len = self.visible_len();
        if self.selected >= len {
            self.selected = len.saturating_sub(1);
        }
    }
}
