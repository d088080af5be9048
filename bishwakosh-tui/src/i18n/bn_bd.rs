//! 孟加拉语翻译 (bn-BD)

use super::keys::{
    AlertTexts, CatalogTexts, CommonTexts, DetailLabels, DetailsTexts, FooterTexts, HeaderTexts,
    HelpActionTexts, HelpTexts, StatusBarTexts, Translations,
};

pub const TRANSLATIONS: Translations = Translations {
    common: CommonTexts {
        app_name: "বিশ্বকোষ",
        close: "বন্ধ করুন",
        error: "ত্রুটি",
        not_available: "N/A",
        theme_dark: "গাঢ় থিম",
        theme_light: "হালকা থিম",
    },

    header: HeaderTexts {
        search_placeholder: "দেশের নাম দিয়ে খুঁজুন...",
        tagline: "পৃথিবীর সব দেশ আপনার নখদর্পণে",
        subtitle: "মহাদেশ থেকে ইতিহাস, জনসংখ্যা থেকে মুদ্রা। একটি মাত্র ক্লিকেই জানুন বিশ্বের যেকোনো দেশের নির্ভরযোগ্য তথ্য।",
    },

    catalog: CatalogTexts {
        loading_list: "দেশের তালিকা তৈরি করা হচ্ছে...",
        all_countries: "সব দেশ",
        search_results: "অনুসন্ধানের ফলাফল",
        empty_title: "কোনো দেশ খুঁজে পাওয়া যায়নি",
        empty_hint: "অনুগ্রহ করে সঠিক বানান দিয়ে আবার চেষ্টা করুন।",
        refreshing: "তালিকা নতুন করে লোড হচ্ছে...",
        loaded: "দেশ লোড হয়েছে",
    },

    details: DetailsTexts {
        loading_title: "তথ্য লোড হচ্ছে...",
        loading_body: "কৃত্রিম বুদ্ধিমত্তা তথ্য সংগ্রহ করছে...",
        map_embed: "মানচিত্র",
        map_link: "Google Maps",
        labels: DetailLabels {
            continent: "মহাদেশ",
            capital: "রাজধানী",
            language: "দাপ্তরিক ভাষা",
            population: "জনসংখ্যা (আনুমানিক)",
            religion: "ধর্ম",
            area: "আয়তন",
            currency: "মুদ্রা",
            exchange_rate: "বিনিময় হার (BDT ও USD)",
            iso_code: "দেশ কোড (ISO)",
            dialing_code: "ডায়ালিং কোড",
        },
        history: "দেশের ইতিহাস",
    },

    alerts: AlertTexts {
        details_failed: "দুঃখিত, তথ্য লোড করতে সমস্যা হয়েছে। আবার চেষ্টা করুন।",
        dismiss_hint: "বন্ধ করতে Esc বা Enter চাপুন",
    },

    footer: FooterTexts {
        notice: "বিশ্বকোষ - তথ্যের নির্ভুলতা নিশ্চিত করতে কৃত্রিম বুদ্ধিমত্তা ব্যবহৃত হয়েছে।",
        data_source: "ডাটা সোর্স: REST Countries API & Gemini AI",
    },

    status_bar: StatusBarTexts {
        switch_focus: "ফোকাস",
        select: "নির্বাচন",
        open: "বিস্তারিত",
        clear: "মুছুন",
        scroll: "স্ক্রল",
        close: "বন্ধ",
        help: "সাহায্য",
        quit: "প্রস্থান",
    },

    help: HelpTexts {
        title: "সাহায্য",
        global: "সাধারণ",
        search: "অনুসন্ধান",
        grid: "দেশের তালিকা",
        details: "বিস্তারিত",
        actions: HelpActionTexts {
            switch_focus: "অনুসন্ধান ও তালিকার মধ্যে ফোকাস বদলান",
            move_selection: "নির্বাচন সরান",
            open_details: "দেশের বিস্তারিত দেখুন",
            clear_query: "অনুসন্ধান মুছুন",
            type_to_search: "লিখে খুঁজুন",
            scroll: "স্ক্রল করুন",
            close_overlay: "বন্ধ করুন",
            help: "সাহায্য",
            language: "ভাষা বদলান",
            theme: "থিম বদলান",
            refresh: "তালিকা নতুন করে লোড করুন",
            quit: "প্রস্থান",
        },
    },
};
