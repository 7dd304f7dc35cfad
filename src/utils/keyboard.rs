use crate::model::callback::Callback;
use crate::model::lang::Lang;
use crate::utils::constants::SEARCH_RADII_KM;
use crate::utils::translations::{AREAS, VIBES};

use lazy_static::lazy_static;
use teloxide::types::{
    ButtonRequest, InlineKeyboardButton, InlineKeyboardMarkup, KeyboardButton, KeyboardMarkup,
};

fn button(text: &str, callback: Callback) -> InlineKeyboardButton {
    InlineKeyboardButton::callback(text, callback.to_string())
}

pub fn make_location_keyboard(lang: Lang) -> KeyboardMarkup {
    let mut keyboard: Vec<Vec<KeyboardButton>> = vec![];
    let mut location_button = KeyboardButton::new(lang.texts().send_location_button);
    location_button.request = Some(ButtonRequest::Location);
    let row = vec![location_button];
    keyboard.push(row);
    let mut markup = KeyboardMarkup::new(keyboard);
    markup.resize_keyboard = Option::from(true);
    markup
}

lazy_static! {
    static ref LANGUAGE_KEYBOARD: InlineKeyboardMarkup = InlineKeyboardMarkup::new(vec![Lang::ALL
        .iter()
        .map(|lang| button(lang.button_label(), Callback::Language(*lang)))
        .collect::<Vec<_>>()]);
}

pub fn make_language_keyboard() -> InlineKeyboardMarkup {
    LANGUAGE_KEYBOARD.clone()
}

pub fn make_main_menu_keyboard(lang: Lang) -> InlineKeyboardMarkup {
    let texts = lang.texts();
    InlineKeyboardMarkup::new(vec![
        vec![
            button(texts.find_by_area, Callback::FindByArea),
            button(texts.find_by_vibe, Callback::FindByVibe),
        ],
        vec![
            button(texts.find_nearby, Callback::FindNearby),
            button(texts.current_happy_hours, Callback::Current),
        ],
        vec![
            button(texts.popular_places, Callback::Popular),
            button(texts.about, Callback::About),
        ],
        vec![button(texts.change_language, Callback::ChangeLanguage)],
    ])
}

pub fn make_area_keyboard(lang: Lang) -> InlineKeyboardMarkup {
    make_keyboard_from_buttons(
        AREAS
            .iter()
            .map(|area| button(area.label(lang), Callback::Area(area.key.to_owned())))
            .collect(),
        lang,
    )
}

pub fn make_vibe_keyboard(lang: Lang) -> InlineKeyboardMarkup {
    make_keyboard_from_buttons(
        VIBES
            .iter()
            .map(|vibe| button(vibe.tag(lang), Callback::Vibe(vibe.key.to_owned())))
            .collect(),
        lang,
    )
}

pub fn make_radius_keyboard(lang: Lang) -> InlineKeyboardMarkup {
    make_keyboard_from_buttons(
        SEARCH_RADII_KM
            .iter()
            .map(|km| button(&format!("{km} {}", lang.texts().km), Callback::Radius(*km)))
            .collect(),
        lang,
    )
}

/// Shown under search results. Refresh repeats `query`, New Search goes back to `new_search`.
pub fn make_results_keyboard(
    lang: Lang,
    query: Callback,
    new_search: Callback,
) -> InlineKeyboardMarkup {
    let texts = lang.texts();
    InlineKeyboardMarkup::new(vec![
        vec![
            button(texts.refresh, query),
            button(texts.new_search, new_search),
        ],
        vec![button(texts.main_menu, Callback::MainMenu)],
    ])
}

pub fn make_back_keyboard(lang: Lang) -> InlineKeyboardMarkup {
    InlineKeyboardMarkup::new(vec![vec![button(lang.texts().main_menu, Callback::MainMenu)]])
}

fn make_keyboard_from_buttons(
    variants: Vec<InlineKeyboardButton>,
    lang: Lang,
) -> InlineKeyboardMarkup {
    let mut keyboard: Vec<Vec<InlineKeyboardButton>> = vec![];

    for versions in variants.chunks(2) {
        keyboard.push(versions.to_vec());
    }
    keyboard.push(vec![button(lang.texts().main_menu, Callback::MainMenu)]);

    InlineKeyboardMarkup::new(keyboard)
}

#[cfg(test)]
mod tests {
    use super::*;
    use teloxide::types::InlineKeyboardButtonKind;

    fn callbacks(markup: &InlineKeyboardMarkup) -> Vec<Vec<Callback>> {
        markup
            .inline_keyboard
            .iter()
            .map(|row| {
                row.iter()
                    .map(|button| match &button.kind {
                        InlineKeyboardButtonKind::CallbackData(data) => {
                            Callback::parse(data).unwrap()
                        }
                        kind => panic!("unexpected button kind {kind:?}"),
                    })
                    .collect()
            })
            .collect()
    }

    #[test]
    fn test_area_keyboard_layout() {
        let rows = callbacks(&make_area_keyboard(Lang::En));
        assert_eq!(rows.len(), 3);
        assert_eq!(
            rows[1],
            [
                Callback::Area("rothschild".to_owned()),
                Callback::Area("carmel_market".to_owned())
            ]
        );
        assert_eq!(rows[2], [Callback::MainMenu]);
    }

    #[test]
    fn test_radius_keyboard_offers_supported_radii() {
        let rows = callbacks(&make_radius_keyboard(Lang::He));
        assert_eq!(rows[0], [Callback::Radius(1), Callback::Radius(2)]);
        assert_eq!(rows[1], [Callback::Radius(5)]);
    }

    #[test]
    fn test_results_keyboard_repeats_query() {
        let rows = callbacks(&make_results_keyboard(
            Lang::En,
            Callback::Vibe("casual".to_owned()),
            Callback::FindByVibe,
        ));
        assert_eq!(
            rows,
            vec![
                vec![Callback::Vibe("casual".to_owned()), Callback::FindByVibe],
                vec![Callback::MainMenu]
            ]
        );
    }

    #[test]
    fn test_every_menu_button_is_parsable() {
        for lang in Lang::ALL {
            for markup in [
                make_language_keyboard(),
                make_main_menu_keyboard(lang),
                make_vibe_keyboard(lang),
                make_back_keyboard(lang),
            ] {
                assert!(!callbacks(&markup).is_empty());
            }
        }
    }

    #[test]
    fn test_location_keyboard_requests_location() {
        let markup = make_location_keyboard(Lang::En);
        assert_eq!(markup.keyboard[0][0].request, Some(ButtonRequest::Location));
    }
}
