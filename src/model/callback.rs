use crate::model::lang::Lang;
use crate::model::state::State;
use crate::utils::constants::SEARCH_RADII_KM;
use std::fmt;

/// Payload carried by inline keyboard buttons.
#[derive(Clone, Debug, PartialEq, Eq)]
pub(crate) enum Callback {
    Language(Lang),
    ChangeLanguage,
    MainMenu,
    FindByArea,
    Area(String),
    FindByVibe,
    Vibe(String),
    FindNearby,
    Radius(u8),
    Current,
    Popular,
    About,
}

impl Callback {
    pub(crate) fn parse(data: &str) -> Option<Self> {
        let callback = match data.split_once(':') {
            Some(("lang", code)) => Callback::Language(Lang::from_code(code)?),
            Some(("area", key)) if !key.is_empty() => Callback::Area(key.to_owned()),
            Some(("vibe", key)) if !key.is_empty() => Callback::Vibe(key.to_owned()),
            Some(("radius", km)) => {
                let km = km.parse::<u8>().ok()?;
                if !SEARCH_RADII_KM.contains(&km) {
                    return None;
                }
                Callback::Radius(km)
            }
            Some(_) => return None,
            None => match data {
                "change_lang" => Callback::ChangeLanguage,
                "menu" => Callback::MainMenu,
                "find_area" => Callback::FindByArea,
                "find_vibe" => Callback::FindByVibe,
                "find_nearby" => Callback::FindNearby,
                "current" => Callback::Current,
                "popular" => Callback::Popular,
                "about" => Callback::About,
                _ => return None,
            },
        };
        Some(callback)
    }

    /// Language the reply to this button is written in: the one just picked,
    /// otherwise the dialogue's, otherwise `default`.
    pub(crate) fn reply_lang(&self, state: &State, default: Lang) -> Lang {
        match self {
            Callback::Language(chosen) => *chosen,
            _ => state.lang().unwrap_or(default),
        }
    }
}

impl fmt::Display for Callback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Callback::Language(lang) => write!(f, "lang:{lang}"),
            Callback::ChangeLanguage => f.write_str("change_lang"),
            Callback::MainMenu => f.write_str("menu"),
            Callback::FindByArea => f.write_str("find_area"),
            Callback::Area(key) => write!(f, "area:{key}"),
            Callback::FindByVibe => f.write_str("find_vibe"),
            Callback::Vibe(key) => write!(f, "vibe:{key}"),
            Callback::FindNearby => f.write_str("find_nearby"),
            Callback::Radius(km) => write!(f, "radius:{km}"),
            Callback::Current => f.write_str("current"),
            Callback::Popular => f.write_str("popular"),
            Callback::About => f.write_str("about"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reply_lang() {
        let hebrew = State::ChoosingAction { lang: Lang::He };
        assert_eq!(Callback::Popular.reply_lang(&hebrew, Lang::En), Lang::He);
        assert_eq!(Callback::Popular.reply_lang(&State::Start, Lang::En), Lang::En);
        assert_eq!(
            Callback::Language(Lang::En).reply_lang(&hebrew, Lang::He),
            Lang::En
        );
        assert_eq!(
            Callback::Language(Lang::He).reply_lang(&State::ChoosingLanguage, Lang::En),
            Lang::He
        );
    }

    #[test]
    fn test_parse_button_payloads() {
        assert_eq!(Callback::parse("lang:he"), Some(Callback::Language(Lang::He)));
        assert_eq!(Callback::parse("menu"), Some(Callback::MainMenu));
        assert_eq!(
            Callback::parse("area:carmel_market"),
            Some(Callback::Area("carmel_market".to_owned()))
        );
        assert_eq!(Callback::parse("radius:5"), Some(Callback::Radius(5)));
        assert_eq!(
            Callback::parse(&Callback::Vibe("trendy".into()).to_string()),
            Some(Callback::Vibe("trendy".into()))
        );
    }

    #[test]
    fn test_reject_unknown_payloads() {
        assert_eq!(Callback::parse("lang:fr"), None);
        assert_eq!(Callback::parse("radius:3"), None);
        assert_eq!(Callback::parse("radius:-1"), None);
        assert_eq!(Callback::parse("area:"), None);
        assert_eq!(Callback::parse("loc_dizengoff"), None);
        assert_eq!(Callback::parse("refresh"), None);
        assert_eq!(Callback::parse("menu:extra"), None);
    }
}
