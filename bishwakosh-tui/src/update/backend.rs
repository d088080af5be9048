//! 后台结果更新

use crate::backend::BackendEvent;
use crate::i18n::t;
use crate::model::App;

pub fn update(app: &mut App, event: BackendEvent) {
    match event {
        BackendEvent::CountriesLoaded(Ok(countries)) => {
            let count = countries.len();
            app.catalog.finish_loading(countries);
            app.set_status(format!("{count} {}", t().catalog.loaded));
        }
        BackendEvent::CountriesLoaded(Err(e)) => {
            // 列表加载失败只记录日志，界面显示空列表
            tracing::warn!(error = %e, "showing an empty country list");
            app.catalog.finish_loading(Vec::new());
            app.clear_status();
        }
        BackendEvent::DetailsLoaded {
            ticket,
            result: Ok(details),
        } => {
            if !app.details.resolve(ticket, details) {
                tracing::debug!(ticket, "dropping stale details result");
            }
        }
        BackendEvent::DetailsLoaded {
            ticket,
            result: Err(e),
        } => {
            if app.details.fail(ticket) {
                let texts = t();
                app.modal
                    .show_error(texts.common.error, texts.alerts.details_failed);
            } else {
                tracing::debug!(ticket, error = %e, "dropping stale details failure");
            }
        }
    }
}
