/// 详情浮层消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DetailsMessage {
    ScrollUp,
    ScrollDown,
    PageUp,
    PageDown,
    Top,
    /// 关闭浮层（加载中同样可以关闭）
    Close,
}
