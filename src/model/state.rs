use crate::model::lang::Lang;

#[derive(Clone, Default, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub(crate) enum State {
    #[default]
    Start,
    ChoosingLanguage,
    ChoosingAction {
        lang: Lang,
    },
    ChoosingArea {
        lang: Lang,
    },
    ChoosingVibe {
        lang: Lang,
    },
    ChoosingRadius {
        lang: Lang,
    },
    ReceiveLocation {
        lang: Lang,
        radius_km: u8,
    },
}

impl State {
    /// Language picked by the user, once there is one.
    pub(crate) fn lang(&self) -> Option<Lang> {
        match self {
            State::Start | State::ChoosingLanguage => None,
            State::ChoosingAction { lang }
            | State::ChoosingArea { lang }
            | State::ChoosingVibe { lang }
            | State::ChoosingRadius { lang }
            | State::ReceiveLocation { lang, .. } => Some(*lang),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lang_is_carried_through_the_dialogue() {
        assert_eq!(State::Start.lang(), None);
        assert_eq!(State::ChoosingLanguage.lang(), None);
        assert_eq!(State::ChoosingVibe { lang: Lang::He }.lang(), Some(Lang::He));
        assert_eq!(
            State::ReceiveLocation {
                lang: Lang::En,
                radius_km: 2
            }
            .lang(),
            Some(Lang::En)
        );
    }
}
