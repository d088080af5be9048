//! 详情浮层状态
//!
//! `Idle -> Loading -> Ready -> Idle`。每次打开都会领取一个新的票号，
//! 只有票号与当前 `Loading` 相同的结果才会被接受（后点击者胜出）。

use bishwakosh_catalog::CountryDetails;

/// 详情请求票号
pub type Ticket = u64;

/// 详情浮层阶段
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum DetailsPhase {
    /// 未打开
    #[default]
    Idle,
    /// 等待 AI 结果
    Loading { ticket: Ticket, country: String },
    /// 结果已显示
    Ready {
        details: Box<CountryDetails>,
        /// 垂直滚动偏移（行）
        scroll: u16,
    },
}

#[derive(Debug, Default)]
pub struct DetailsState {
    pub phase: DetailsPhase,
    next_ticket: Ticket,
}

impl DetailsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// 浮层是否可见（加载中或已就绪）
    pub fn is_open(&self) -> bool {
        !matches!(self.phase, DetailsPhase::Idle)
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.phase, DetailsPhase::Loading { .. })
    }

    /// 开始加载 `country`，返回新票号；之前的任何请求随之作废
    pub fn begin(&mut self, country: &str) -> Ticket {
        self.next_ticket += 1;
        let ticket = self.next_ticket;
        self.phase = DetailsPhase::Loading {
            ticket,
            country: country.to_string(),
        };
        ticket
    }

    /// `ticket` 是否仍是当前等待中的请求
    pub fn is_current(&self, ticket: Ticket) -> bool {
        matches!(self.phase, DetailsPhase::Loading { ticket: current, .. } if current == ticket)
    }

    /// 接受结果；票号过期时返回 `false` 且状态不变
    pub fn resolve(&mut self, ticket: Ticket, details: CountryDetails) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = DetailsPhase::Ready {
            details: Box::new(details),
            scroll: 0,
        };
        true
    }

    /// 请求失败回到 `Idle`；票号过期时返回 `false` 且状态不变
    pub fn fail(&mut self, ticket: Ticket) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.phase = DetailsPhase::Idle;
        true
    }

    /// 关闭浮层，无论当前处于哪个阶段
    pub fn close(&mut self) {
        self.phase = DetailsPhase::Idle;
    }

    pub fn scroll_by(&mut self, delta: i32) {
        if let DetailsPhase::Ready { scroll, .. } = &mut self.phase {
            let next = i32::from(*scroll).saturating_add(delta).clamp(0, i32::from(u16::MAX));
            *scroll = u16::try_from(next).unwrap_or(0);
        }
    }

    pub fn scroll_to_top(&mut self) {
        if let DetailsPhase::Ready { scroll, .. } = &mut self.phase {
            *scroll = 0;
        }
    }

    /// 已就绪的详情
    pub fn details(&self) -> Option<&CountryDetails> {
        match &self.phase {
            DetailsPhase::Ready { details, .. } => Some(details.as_ref()),
            _ => None,
        }
    }
}
