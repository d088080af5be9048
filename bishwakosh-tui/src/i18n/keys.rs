//! 翻译文本结构定义

/// 所有翻译文本的根结构
pub struct Translations {
    /// 通用文本
    pub common: CommonTexts,
    /// 标题栏与搜索框
    pub header: HeaderTexts,
    /// 国家列表
    pub catalog: CatalogTexts,
    /// 详情浮层
    pub details: DetailsTexts,
    /// 阻塞式提示
    pub alerts: AlertTexts,
    /// 页脚
    pub footer: FooterTexts,
    /// 状态栏
    pub status_bar: StatusBarTexts,
    /// 帮助弹窗
    pub help: HelpTexts,
}

// ============================================================================
// 通用文本
// ============================================================================

pub struct CommonTexts {
    pub app_name: &'static str,
    pub close: &'static str,
    pub error: &'static str,
    pub not_available: &'static str,
    pub theme_dark: &'static str,
    pub theme_light: &'static str,
}

// ============================================================================
// 页面文本
// ============================================================================

pub struct HeaderTexts {
    pub search_placeholder: &'static str,
    pub tagline: &'static str,
    pub subtitle: &'static str,
}

pub struct CatalogTexts {
    pub loading_list: &'static str,
    /// 无查询时的标题，后接数量
    pub all_countries: &'static str,
    /// 有查询时的标题，后接数量
    pub search_results: &'static str,
    pub empty_title: &'static str,
    pub empty_hint: &'static str,
    pub refreshing: &'static str,
    /// 加载完成提示，后接数量
    pub loaded: &'static str,
}

pub struct DetailsTexts {
    pub loading_title: &'static str,
    pub loading_body: &'static str,
    pub map_embed: &'static str,
    pub map_link: &'static str,
    pub labels: DetailLabels,
    pub history: &'static str,
}

/// 详情中十个字段的标签
pub struct DetailLabels {
    pub continent: &'static str,
    pub capital: &'static str,
    pub language: &'static str,
    pub population: &'static str,
    pub religion: &'static str,
    pub area: &'static str,
    pub currency: &'static str,
    pub exchange_rate: &'static str,
    pub iso_code: &'static str,
    pub dialing_code: &'static str,
}

pub struct AlertTexts {
    pub details_failed: &'static str,
    pub dismiss_hint: &'static str,
}

pub struct FooterTexts {
    pub notice: &'static str,
    pub data_source: &'static str,
}

// ============================================================================
// 状态栏 / 帮助
// ============================================================================

pub struct StatusBarTexts {
    pub switch_focus: &'static str,
    pub select: &'static str,
    pub open: &'static str,
    pub clear: &'static str,
    pub scroll: &'static str,
    pub close: &'static str,
    pub help: &'static str,
    pub quit: &'static str,
}

pub struct HelpTexts {
    pub title: &'static str,
    pub global: &'static str,
    pub search: &'static str,
    pub grid: &'static str,
    pub details: &'static str,
    pub actions: HelpActionTexts,
}

pub struct HelpActionTexts {
    pub switch_focus: &'static str,
    pub move_selection: &'static str,
    pub open_details: &'static str,
    pub clear_query: &'static str,
    pub type_to_search: &'static str,
    pub scroll: &'static str,
    pub close_overlay: &'static str,
    pub help: &'static str,
    pub language: &'static str,
    pub theme: &'static str,
    pub refresh: &'static str,
    pub quit: &'static str,
}
