//!
//! src/update/mod.rs
//! Update 层：状态更新
//!
//! 唯一允许修改 Model 的地方。`update` 消费一条消息，
//! 需要网络请求时返回一个 [`Command`]，由主循环交给 Backend 执行；
//! Update 层本身从不阻塞，也不接触网络。

mod backend;
mod details;
mod grid;
mod modal;
mod search;

use crate::backend::Command;
use crate::i18n::t;
use crate::message::AppMessage;
use crate::model::App;

/// 启动：应用设置、计算网格列数，并请求国家列表
pub fn startup(app: &mut App, terminal_width: u16) -> Command {
    app.settings.apply();
    app.catalog.set_columns_for_width(terminal_width);
    Command::LoadCountries
}

pub fn update(app: &mut App, msg: AppMessage) -> Option<Command> {
    match msg {
        AppMessage::Quit => {
            app.should_quit = true;
        }

        AppMessage::ToggleFocus => {
            if !app.has_overlay() {
                app.focus = app.focus.toggle();
            }
        }

        AppMessage::Search(search_msg) => search::update(app, search_msg),

        AppMessage::Grid(grid_msg) => return grid::update(app, grid_msg),

        AppMessage::Details(details_msg) => details::update(app, details_msg),

        AppMessage::Modal(modal_msg) => modal::update(app, modal_msg),

        AppMessage::Backend(event) => backend::update(app, event),

        AppMessage::Resize { width } => app.catalog.set_columns_for_width(width),

        AppMessage::Refresh => {
            // 加载中再次刷新没有意义
            if !app.catalog.is_ready() {
                return None;
            }
            app.catalog.begin_loading();
            app.set_status(t().catalog.refreshing);
            return Some(Command::LoadCountries);
        }

        AppMessage::ShowHelp => app.modal.show_help(),

        AppMessage::CycleLanguage => {
            app.settings.cycle_language();
            app.clear_status();
        }

        AppMessage::CycleTheme => app.settings.cycle_theme(),

        AppMessage::Noop => {}
    }
    None
}

#[cfg(test)]
mod tests {
    use bishwakosh_catalog::{CatalogError, CountryBrief, CountryDetails, LoadError, OutputLanguage};

    use super::*;
    use crate::backend::BackendEvent;
    use crate::message::{DetailsMessage, GridMessage, ModalMessage, SearchMessage};
    use crate::model::{DetailsPhase, FocusPanel, ListPhase, Modal, Ticket};

    fn brief(name: &str, code: &str) -> CountryBrief {
        CountryBrief {
            display_name: name.to_string(),
            flag_image_url: format!("https://flagcdn.com/{}.svg", code.to_lowercase()),
            two_letter_code: code.to_string(),
            external_map_url: Some(format!("https://goo.gl/maps/{code}")),
        }
    }

    fn details_for(brief: &CountryBrief, capital: &str) -> CountryDetails {
        CountryDetails {
            name: brief.display_name.clone(),
            continent: "Somewhere".into(),
            capital: capital.into(),
            language: "Local".into(),
            population: "1M".into(),
            religion: "Various".into(),
            area: "1 km2".into(),
            currency: "Coin".into(),
            exchange_rate_summary: "1 C = 1 BDT (1 USD = 100 C)".into(),
            iso_code_pair: format!("{}/{}X", brief.two_letter_code, brief.two_letter_code),
            dialing_code: "+0".into(),
            history: "Long ago.".into(),
            map_url: brief.external_map_url.clone(),
        }
    }

    /// 列表已就绪的应用，焦点在网格
    fn ready_app() -> App {
        let mut app = App::default();
        let cmd = startup(&mut app, 100);
        assert_eq!(cmd, Command::LoadCountries);
        update(
            &mut app,
            AppMessage::Backend(BackendEvent::CountriesLoaded(Ok(vec![
                brief("Bangladesh", "BD"),
                brief("Brazil", "BR"),
                brief("Japan", "JP"),
            ]))),
        );
        app.focus = FocusPanel::Grid;
        app
    }

    fn select(app: &mut App, code: &str) {
        let index = app
            .catalog
            .visible()
            .iter()
            .position(|c| c.two_letter_code == code)
            .unwrap();
        update(app, AppMessage::Grid(GridMessage::First));
        for _ in 0..index {
            update(app, AppMessage::Grid(GridMessage::Right));
        }
    }

    /// 打开选中国家，返回请求的票号
    fn open(app: &mut App, code: &str) -> (Ticket, CountryBrief) {
        select(app, code);
        match update(app, AppMessage::Grid(GridMessage::Activate)) {
            Some(Command::DescribeCountry { ticket, brief, .. }) => (ticket, brief),
            other => panic!("expected a details request, got {other:?}"),
        }
    }

    fn deliver(app: &mut App, ticket: Ticket, result: Result<CountryDetails, LoadError>) {
        update(
            app,
            AppMessage::Backend(BackendEvent::DetailsLoaded { ticket, result }),
        );
    }

    fn details_error(country: &str, source: CatalogError) -> LoadError {
        LoadError::Details {
            country: country.to_string(),
            source,
        }
    }

    #[test]
    fn startup_requests_country_list() {
        let mut app = App::default();
        assert_eq!(startup(&mut app, 100), Command::LoadCountries);
        assert_eq!(app.catalog.phase, ListPhase::Loading);
        assert_eq!(app.catalog.columns, 4);
    }

    #[test]
    fn activation_is_ignored_while_list_loads() {
        let mut app = App::default();
        startup(&mut app, 100);
        assert_eq!(update(&mut app, AppMessage::Grid(GridMessage::Activate)), None);
        assert_eq!(app.details.phase, DetailsPhase::Idle);
    }

    #[test]
    fn activation_requests_details_in_ui_language() {
        let mut app = ready_app();
        select(&mut app, "JP");
        let cmd = update(&mut app, AppMessage::Grid(GridMessage::Activate));

        assert!(matches!(
            &cmd,
            Some(Command::DescribeCountry { brief, language: OutputLanguage::Bengali, .. })
                if brief.two_letter_code == "JP"
        ));
        assert!(matches!(
            &app.details.phase,
            DetailsPhase::Loading { country, .. } if country == "Japan"
        ));
    }

    #[test]
    fn details_success_shows_overlay_with_brief_map_link() {
        let mut app = ready_app();
        let (ticket, brief) = open(&mut app, "JP");
        deliver(&mut app, ticket, Ok(details_for(&brief, "Tokyo")));

        let details = app.details.details().unwrap();
        assert_eq!(details.capital, "Tokyo");
        assert_eq!(details.map_url, brief.external_map_url);
        assert!(!app.modal.is_open());
    }

    #[test]
    fn missing_history_shows_alert_and_returns_to_idle() {
        let mut app = ready_app();
        let (ticket, _) = open(&mut app, "JP");
        deliver(
            &mut app,
            ticket,
            Err(details_error(
                "Japan",
                CatalogError::SchemaViolation {
                    service: "gemini".into(),
                    field: "history".into(),
                    detail: "missing required field".into(),
                },
            )),
        );

        assert_eq!(app.details.phase, DetailsPhase::Idle);
        assert!(matches!(app.modal.active, Some(Modal::Error { .. })));

        update(&mut app, AppMessage::Modal(ModalMessage::Close));
        assert!(!app.has_overlay());
    }

    #[test]
    fn result_for_closed_overlay_is_dropped() {
        let mut app = ready_app();
        let (ticket, brief) = open(&mut app, "JP");
        update(&mut app, AppMessage::Details(DetailsMessage::Close));
        assert_eq!(app.details.phase, DetailsPhase::Idle);

        deliver(&mut app, ticket, Ok(details_for(&brief, "Tokyo")));
        assert_eq!(app.details.phase, DetailsPhase::Idle);

        deliver(
            &mut app,
            ticket,
            Err(details_error("Japan", CatalogError::EmptyResponse { service: "gemini".into() })),
        );
        assert!(!app.modal.is_open(), "stale failures must not alert");
    }

    #[test]
    fn last_clicked_wins() {
        let mut app = ready_app();
        let (first, japan) = open(&mut app, "JP");
        update(&mut app, AppMessage::Details(DetailsMessage::Close));
        let (second, brazil) = open(&mut app, "BR");
        assert!(second > first);

        deliver(&mut app, first, Ok(details_for(&japan, "Tokyo")));
        assert!(app.details.is_loading(), "superseded result must not render");

        deliver(&mut app, second, Ok(details_for(&brazil, "Brasília")));
        assert_eq!(app.details.details().map(|d| d.name.as_str()), Some("Brazil"));
    }

    #[test]
    fn reopening_replaces_every_field() {
        let mut app = ready_app();
        let (ticket, japan) = open(&mut app, "JP");
        deliver(&mut app, ticket, Ok(details_for(&japan, "Tokyo")));
        update(&mut app, AppMessage::Details(DetailsMessage::ScrollDown));
        update(&mut app, AppMessage::Details(DetailsMessage::Close));

        let (ticket, bangladesh) = open(&mut app, "BD");
        assert!(app.details.details().is_none(), "no stale fields while loading");
        deliver(&mut app, ticket, Ok(details_for(&bangladesh, "Dhaka")));

        let DetailsPhase::Ready { details, scroll } = &app.details.phase else {
            panic!("expected ready overlay");
        };
        assert_eq!(**details, details_for(&bangladesh, "Dhaka"));
        assert_eq!(*scroll, 0);
    }

    #[test]
    fn directory_timeout_leaves_usable_empty_list() {
        let mut app = App::default();
        startup(&mut app, 80);
        update(
            &mut app,
            AppMessage::Backend(BackendEvent::CountriesLoaded(Err(LoadError::List(
                CatalogError::Timeout {
                    service: "restcountries".into(),
                    detail: "operation timed out".into(),
                },
            )))),
        );

        assert_eq!(app.catalog.phase, ListPhase::Ready);
        assert!(app.catalog.countries.is_empty());

        update(&mut app, AppMessage::Search(SearchMessage::Input('b')));
        assert_eq!(app.catalog.query, "b");
        assert!(app.catalog.visible().is_empty());
        assert_eq!(update(&mut app, AppMessage::Grid(GridMessage::Activate)), None);
        assert!(!app.has_overlay());
    }

    #[test]
    fn search_br_keeps_only_brazil() {
        let mut app = ready_app();
        update(&mut app, AppMessage::Search(SearchMessage::Input('b')));
        update(&mut app, AppMessage::Search(SearchMessage::Input('r')));
        let names: Vec<&str> = app
            .catalog
            .visible()
            .iter()
            .map(|c| c.display_name.as_str())
            .collect();
        assert_eq!(names, vec!["Brazil"]);

        update(&mut app, AppMessage::Search(SearchMessage::Clear));
        assert_eq!(app.catalog.visible_len(), 3);
    }

    #[test]
    fn refresh_reloads_only_when_ready() {
        let mut app = ready_app();
        assert_eq!(update(&mut app, AppMessage::Refresh), Some(Command::LoadCountries));
        assert_eq!(app.catalog.phase, ListPhase::Loading);
        assert_eq!(update(&mut app, AppMessage::Refresh), None);
    }

    #[test]
    fn focus_does_not_move_under_overlay() {
        let mut app = ready_app();
        open(&mut app, "JP");
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Grid);

        update(&mut app, AppMessage::Details(DetailsMessage::Close));
        update(&mut app, AppMessage::ToggleFocus);
        assert_eq!(app.focus, FocusPanel::Search);
    }

    #[test]
    fn language_switch_changes_enrichment_language() {
        let mut app = ready_app();
        update(&mut app, AppMessage::CycleLanguage);
        select(&mut app, "JP");
        let cmd = update(&mut app, AppMessage::Grid(GridMessage::Activate));
        assert!(matches!(
            cmd,
            Some(Command::DescribeCountry { language: OutputLanguage::English, .. })
        ));
    }

    #[test]
    fn quit_sets_flag() {
        let mut app = App::default();
        update(&mut app, AppMessage::Quit);
        assert!(app.should_quit);
    }
}
