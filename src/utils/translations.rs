use crate::model::lang::Lang;

pub const CHOOSE_LANGUAGE: &str = "Please choose your language:\nאנא בחר את השפה שלך:";

pub(crate) struct Texts {
    pub welcome: &'static str,
    pub welcome_back: &'static str,
    pub about_text: &'static str,
    pub find_by_area: &'static str,
    pub find_by_vibe: &'static str,
    pub find_nearby: &'static str,
    pub current_happy_hours: &'static str,
    pub popular_places: &'static str,
    pub about: &'static str,
    pub change_language: &'static str,
    pub choose_area: &'static str,
    pub choose_vibe: &'static str,
    pub choose_radius: &'static str,
    pub send_location: &'static str,
    pub send_location_button: &'static str,
    pub location_expected: &'static str,
    pub send_start: &'static str,
    pub searching: &'static str,
    pub area_header: &'static str,
    pub vibe_header: &'static str,
    pub nearby_header: &'static str,
    pub current_header: &'static str,
    pub popular_header: &'static str,
    pub no_results: &'static str,
    pub no_current_hours: &'static str,
    pub unknown_option: &'static str,
    pub data_unavailable: &'static str,
    pub more_options: &'static str,
    pub refresh: &'static str,
    pub new_search: &'static str,
    pub main_menu: &'static str,
    pub km: &'static str,
}

static EN: Texts = Texts {
    welcome: include_str!("../resources/welcome_en.txt"),
    welcome_back: "Welcome back! What would you like to do?",
    about_text: include_str!("../resources/about_en.txt"),
    find_by_area: "🔍 Find by Area",
    find_by_vibe: "🎯 Find by Vibe",
    find_nearby: "📍 Near Me",
    current_happy_hours: "⏰ Current Happy Hours",
    popular_places: "🌟 Popular Places",
    about: "ℹ️ About",
    change_language: "🌐 Change Language",
    choose_area: "📍 Choose an area in Tel Aviv to explore happy hours:",
    choose_vibe: "🎯 What kind of place are you in the mood for?",
    choose_radius: "📏 How far are you willing to go?",
    send_location: "📍 Share your location and I'll look within {} km.",
    send_location_button: "📍 Send my location",
    location_expected: "Please use the button below to share your location.",
    send_start: "Please use the menu buttons or send /start.",
    searching: "🔎 Looking for happy hours within {} km...",
    area_header: "🎉 Happy Hours in {}:",
    vibe_header: "🎯 {} places:",
    nearby_header: "📍 Happy hours within {} km:",
    current_header: "🎉 Current happy hours (at {})",
    popular_header: "🌟 Most Popular Happy Hours in Tel Aviv:",
    no_results: "😔 Sorry, no happy hours found here.",
    no_current_hours: "😔 No happy hours currently running!\n\nWould you like to search by area instead?",
    unknown_option: "This option is no longer available.",
    data_unavailable: "⚠️ Venue data is unavailable right now. Please try again later.",
    more_options: "Want to see more options? Use the buttons below!",
    refresh: "🔄 Refresh",
    new_search: "🔍 New Search",
    main_menu: "🏠 Main Menu",
    km: "km",
};

static HE: Texts = Texts {
    welcome: include_str!("../resources/welcome_he.txt"),
    welcome_back: "ברוך שובך! מה תרצה לעשות?",
    about_text: include_str!("../resources/about_he.txt"),
    find_by_area: "🔍 חפש לפי אזור",
    find_by_vibe: "🎯 חפש לפי אווירה",
    find_nearby: "📍 קרוב אליי",
    current_happy_hours: "⏰ הפי אוור עכשיו",
    popular_places: "🌟 מקומות פופולריים",
    about: "ℹ️ אודות",
    change_language: "🌐 שנה שפה",
    choose_area: "📍 בחר אזור בתל אביב לחיפוש הפי אוור:",
    choose_vibe: "🎯 לאיזו אווירה בא לך?",
    choose_radius: "📏 כמה רחוק אתה מוכן ללכת?",
    send_location: "📍 שתף את המיקום שלך ואחפש ברדיוס של {} ק\"מ.",
    send_location_button: "📍 שלח את המיקום שלי",
    location_expected: "השתמש בכפתור למטה כדי לשתף מיקום.",
    send_start: "השתמש בכפתורי התפריט או שלח /start.",
    searching: "🔎 מחפש הפי אוור ברדיוס של {} ק\"מ...",
    area_header: "🎉 הפי אוור ב{}:",
    vibe_header: "🎯 מקומות באווירה {}:",
    nearby_header: "📍 הפי אוור ברדיוס של {} ק\"מ:",
    current_header: "🎉 הפי אוור פעיל כרגע ({})",
    popular_header: "🌟 ההפי אוורס הפופולריים בתל אביב:",
    no_results: "😔 מצטערים, לא נמצא הפי אוור כאן.",
    no_current_hours: "😔 אין הפי אוור פעיל כרגע!\n\nהאם תרצה לחפש לפי אזור?",
    unknown_option: "האפשרות הזו כבר לא זמינה.",
    data_unavailable: "⚠️ המידע על המקומות לא זמין כרגע. נסה שוב מאוחר יותר.",
    more_options: "רוצה לראות עוד אפשרויות? השתמש בכפתורים למטה!",
    refresh: "🔄 רענן",
    new_search: "🔍 חיפוש חדש",
    main_menu: "🏠 תפריט ראשי",
    km: "ק\"מ",
};

impl Lang {
    pub(crate) fn texts(self) -> &'static Texts {
        match self {
            Lang::En => &EN,
            Lang::He => &HE,
        }
    }

    pub(crate) fn button_label(self) -> &'static str {
        match self {
            Lang::En => "English 🇺🇸",
            Lang::He => "עברית 🇮🇱",
        }
    }
}

/// Fills the single `{}` placeholder of a translated template.
pub(crate) fn fill(template: &str, value: impl std::fmt::Display) -> String {
    template.replacen("{}", &value.to_string(), 1)
}

pub(crate) struct Area {
    pub key: &'static str,
    /// Matched against venue addresses and names.
    pub query: &'static str,
    pub en: &'static str,
    pub he: &'static str,
}

pub(crate) static AREAS: [Area; 4] = [
    Area {
        key: "dizengoff",
        query: "Dizengoff",
        en: "Dizengoff",
        he: "דיזנגוף",
    },
    Area {
        key: "florentin",
        query: "Florentin",
        en: "Florentin",
        he: "פלורנטין",
    },
    Area {
        key: "rothschild",
        query: "Rothschild",
        en: "Rothschild",
        he: "רוטשילד",
    },
    Area {
        key: "carmel_market",
        query: "Carmel",
        en: "Carmel Market",
        he: "שוק הכרמל",
    },
];

/// Vibe tags as they are spelled in the venue data for each language.
pub(crate) struct Vibe {
    pub key: &'static str,
    pub en: &'static str,
    pub he: &'static str,
}

pub(crate) static VIBES: [Vibe; 4] = [
    Vibe {
        key: "casual",
        en: "Casual",
        he: "לא פורמלי",
    },
    Vibe {
        key: "upscale",
        en: "Upscale",
        he: "יוקרתי",
    },
    Vibe {
        key: "trendy",
        en: "Trendy",
        he: "טרנדי",
    },
    Vibe {
        key: "alternative",
        en: "Alternative",
        he: "אלטרנטיבי",
    },
];

impl Area {
    pub(crate) fn find(key: &str) -> Option<&'static Area> {
        AREAS.iter().find(|area| area.key == key)
    }

    pub(crate) fn label(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::He => self.he,
        }
    }
}

impl Vibe {
    pub(crate) fn find(key: &str) -> Option<&'static Vibe> {
        VIBES.iter().find(|vibe| vibe.key == key)
    }

    pub(crate) fn tag(&self, lang: Lang) -> &'static str {
        match lang {
            Lang::En => self.en,
            Lang::He => self.he,
        }
    }
}
