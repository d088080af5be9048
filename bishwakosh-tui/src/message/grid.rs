/// 国家网格消息
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GridMessage {
    Up,
    Down,
    Left,
    Right,
    First,
    Last,
    /// 打开选中国家的详情
    Activate,
}
