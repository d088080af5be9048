//! Backend 层：后台网络请求
//!
//! Update 层只产出 [`Command`]，由主循环交给 [`Backend::execute`]。
//! 请求在 Backend 自带的 tokio 运行时上执行，结果以 [`BackendEvent`]
//! 的形式经无界通道送回 UI 线程，主循环每一轮用 [`Backend::drain`] 取出。
//!
//! Backend 不做任何取舍：过期的详情结果同样会被送回，
//! 由 Update 层按票号丢弃。

use anyhow::{Context, Result};
use bishwakosh_catalog::{
    create_service, CatalogConfig, CatalogService, CountryBrief, CountryDetails, LoadError,
    OutputLanguage,
};
use tokio::runtime::Runtime;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

use crate::model::Ticket;

/// 交给 Backend 执行的副作用
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// 加载国家列表
    LoadCountries,
    /// 为一个国家生成详情
    DescribeCountry {
        ticket: Ticket,
        brief: CountryBrief,
        language: OutputLanguage,
    },
}

/// 后台任务完成后送回 UI 线程的事件
#[derive(Debug, Clone)]
pub enum BackendEvent {
    CountriesLoaded(Result<Vec<CountryBrief>, LoadError>),
    DetailsLoaded {
        ticket: Ticket,
        result: Result<CountryDetails, LoadError>,
    },
}

pub struct Backend {
    runtime: Runtime,
    service: CatalogService,
    tx: UnboundedSender<BackendEvent>,
    rx: UnboundedReceiver<BackendEvent>,
}

impl Backend {
    /// 创建运行时与目录/补全客户端
    pub fn new(config: &CatalogConfig) -> Result<Self> {
        let runtime = tokio::runtime::Builder::new_multi_thread()
            .worker_threads(2)
            .thread_name("bishwakosh-backend")
            .enable_all()
            .build()
            .context("failed to start async runtime")?;
        let service = create_service(config).context("failed to create HTTP clients")?;
        let (tx, rx) = mpsc::unbounded_channel();

        Ok(Self {
            runtime,
            service,
            tx,
            rx,
        })
    }

    /// 在后台执行命令，立即返回
    pub fn execute(&self, command: Command) {
        let service = self.service.clone();
        let tx = self.tx.clone();

        match command {
            Command::LoadCountries => {
                tracing::debug!("loading country list");
                self.runtime.spawn(async move {
                    let result = service.load_countries().await;
                    // 接收端只会在退出时关闭
                    let _ = tx.send(BackendEvent::CountriesLoaded(result));
                });
            }
            Command::DescribeCountry {
                ticket,
                brief,
                language,
            } => {
                tracing::debug!(ticket, country = %brief.display_name, "requesting details");
                self.runtime.spawn(async move {
                    let result = service.describe(&brief, language).await;
                    let _ = tx.send(BackendEvent::DetailsLoaded { ticket, result });
                });
            }
        }
    }

    /// 取出所有已完成的事件（不阻塞）
    pub fn drain(&mut self) -> Vec<BackendEvent> {
        let mut events = Vec::new();
        while let Ok(event) = self.rx.try_recv() {
            events.push(event);
        }
        events
    }

    /// 关闭运行时，不等待仍在进行中的请求
    pub fn shutdown(self) {
        self.runtime.shutdown_background();
    }
}
