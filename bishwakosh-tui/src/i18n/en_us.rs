//! 英文翻译 (en-US)

use super::keys::{
    AlertTexts, CatalogTexts, CommonTexts, DetailLabels, DetailsTexts, FooterTexts, HeaderTexts,
    HelpActionTexts, HelpTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "Bishwakosh",
        close: "Close",
        error: "Error",
        not_available: "N/A",
        theme_dark: "Dark theme",
        theme_light: "Light theme",
    },

    header: HeaderTexts {
        search_placeholder: "Search by country name...",
        tagline: "Every country in the world at your fingertips",
        subtitle: "From continent to history, population to currency. Reliable facts about any country in a single keystroke.",
    },

    catalog: CatalogTexts {
        loading_list: "Preparing the country list...",
        all_countries: "All countries",
        search_results: "Search results",
        empty_title: "No country found",
        empty_hint: "Please check the spelling and try again.",
        refreshing: "Reloading the country list...",
        loaded: "countries loaded",
    },

    details: DetailsTexts {
        loading_title: "Loading details...",
        loading_body: "The AI is gathering information...",
        map_embed: "Map",
        map_link: "Google Maps",
        labels: DetailLabels {
            continent: "Continent",
            capital: "Capital",
            language: "Official language",
            population: "Population (approx.)",
            religion: "Religion",
            area: "Area",
            currency: "Currency",
            exchange_rate: "Exchange rate (BDT & USD)",
            iso_code: "Country code (ISO)",
            dialing_code: "Dialing code",
        },
        history: "History",
    },

    alerts: AlertTexts {
        details_failed: "Sorry, the details could not be loaded. Please try again.",
        dismiss_hint: "Press Esc or Enter to close",
    },

    footer: FooterTexts {
        notice: "Bishwakosh - facts are generated by AI and may be inaccurate.",
        data_source: "Data source: REST Countries API & Gemini AI",
    },

    status_bar: StatusBarTexts {
        switch_focus: "Focus",
        select: "Select",
        open: "Details",
        clear: "Clear",
        scroll: "Scroll",
        close: "Close",
        help: "Help",
        quit: "Quit",
    },

    help: HelpTexts {
        title: "Help",
        global: "Global",
        search: "Search box",
        grid: "Country grid",
        details: "Details",
        actions: HelpActionTexts {
            switch_focus: "Switch focus between search and grid",
            move_selection: "Move selection",
            open_details: "Open country details",
            clear_query: "Clear search",
            type_to_search: "Type to filter",
            scroll: "Scroll",
            close_overlay: "Close",
            help: "Help",
            language: "Switch language",
            theme: "Switch theme",
            refresh: "Reload country list",
            quit: "Quit",
        },
    },
};
