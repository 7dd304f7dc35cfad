use crate::config::Config;
use crate::model::callback::Callback;
use crate::model::commands::BotCommand;
use crate::model::lang::Lang;
use crate::model::venue::Venue;
use crate::model::{state::State, types::*};
use crate::utils::filter::{by_area, by_vibe, currently_open, nearby, popular};
use crate::utils::format::format_results;
use crate::utils::keyboard::*;
use crate::utils::translations::{fill, Area, Vibe, CHOOSE_LANGUAGE};
use std::sync::Arc;
use teloxide::types::{InlineKeyboardMarkup, MessageId, ParseMode, ReplyMarkup};
use teloxide::{
    dispatching::{dialogue, dialogue::InMemStorage, UpdateHandler},
    prelude::*,
    utils::command::BotCommands,
    ApiError, RequestError,
};

pub(crate) fn schema() -> UpdateHandler<Box<dyn std::error::Error + Send + Sync + 'static>> {
    use dptree::case;

    let command_handler = teloxide::filter_command::<BotCommand, _>()
        .branch(case![BotCommand::Start].endpoint(start))
        .branch(case![BotCommand::Language].endpoint(start))
        .branch(case![BotCommand::Help].endpoint(help))
        .branch(case![BotCommand::Reset].endpoint(reset));
    let message_handler = Update::filter_message()
        .branch(command_handler)
        .branch(case![State::ReceiveLocation { lang, radius_km }].endpoint(receive_location))
        .branch(dptree::endpoint(invalid_input));
    let callback_handler = Update::filter_callback_query()
        .branch(
            dptree::filter_map(|q: CallbackQuery| q.data.as_deref().and_then(Callback::parse))
                .endpoint(receive_action),
        )
        .branch(dptree::endpoint(stale_callback));

    dialogue::enter::<Update, InMemStorage<State>, State, _>()
        .branch(message_handler)
        .branch(callback_handler)
}

async fn invalid_input(
    bot: Bot,
    msg: Message,
    state: State,
    config: Arc<Config>,
) -> HandlerResult {
    let lang = state.lang().unwrap_or(config.bot.default_language);
    bot.send_message(msg.chat.id, lang.texts().send_start).await?;
    Ok(())
}

/// COMMAND HANDLERS
async fn help(bot: Bot, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, BotCommand::descriptions().to_string())
        .await?;
    Ok(())
}

async fn start(bot: Bot, dialogue: MyDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, CHOOSE_LANGUAGE)
        .reply_markup(make_language_keyboard())
        .await?;
    dialogue.update(State::ChoosingLanguage).await?;
    Ok(())
}

async fn reset(bot: Bot, dialogue: MyDialogue, msg: Message) -> HandlerResult {
    bot.send_message(msg.chat.id, BotCommand::descriptions().to_string())
        .reply_markup(ReplyMarkup::kb_remove())
        .await?;
    dialogue.exit().await?;
    Ok(())
}

/// CALLBACK HANDLERS
async fn stale_callback(bot: Bot, q: CallbackQuery) -> HandlerResult {
    log::warn!("Unknown callback data {:?} from user_id = {}", q.data, q.from.id);
    bot.answer_callback_query(q.id).await?;
    Ok(())
}

async fn receive_action(
    bot: Bot,
    dialogue: MyDialogue,
    q: CallbackQuery,
    callback: Callback,
    state: State,
    store: SharedStore,
    config: Arc<Config>,
) -> HandlerResult {
    bot.answer_callback_query(q.id).await?;
    let Some(Message { id, chat, .. }) = q.message else {
        return Ok(());
    };
    let lang = callback.reply_lang(&state, config.bot.default_language);
    let texts = lang.texts();
    let user_id = q.from.id;

    let (text, keyboard, next_state) = match &callback {
        Callback::Language(_) => {
            log::info!("User with user_id = {} chose language {}", user_id, lang);
            (
                texts.welcome.to_owned(),
                make_main_menu_keyboard(lang),
                State::ChoosingAction { lang },
            )
        }
        Callback::MainMenu => (
            texts.welcome_back.to_owned(),
            make_main_menu_keyboard(lang),
            State::ChoosingAction { lang },
        ),
        Callback::ChangeLanguage => (
            CHOOSE_LANGUAGE.to_owned(),
            make_language_keyboard(),
            State::ChoosingLanguage,
        ),
        Callback::About => (
            texts.about_text.to_owned(),
            make_back_keyboard(lang),
            State::ChoosingAction { lang },
        ),
        Callback::FindByArea => (
            texts.choose_area.to_owned(),
            make_area_keyboard(lang),
            State::ChoosingArea { lang },
        ),
        Callback::FindByVibe => (
            texts.choose_vibe.to_owned(),
            make_vibe_keyboard(lang),
            State::ChoosingVibe { lang },
        ),
        Callback::FindNearby => (
            texts.choose_radius.to_owned(),
            make_radius_keyboard(lang),
            State::ChoosingRadius { lang },
        ),
        Callback::Radius(radius_km) => {
            edit(
                &bot,
                chat.id,
                id,
                texts.choose_radius.to_owned(),
                make_back_keyboard(lang),
            )
            .await?;
            bot.send_message(chat.id, fill(texts.send_location, radius_km))
                .reply_markup(make_location_keyboard(lang))
                .await?;
            dialogue
                .update(State::ReceiveLocation {
                    lang,
                    radius_km: *radius_km,
                })
                .await?;
            return Ok(());
        }
        Callback::Area(key) => {
            let keyboard = make_results_keyboard(lang, callback.clone(), Callback::FindByArea);
            let text = match Area::find(key) {
                Some(area) => match load_venues(&store).await {
                    Some(venues) => {
                        let found = by_area(&venues, area.query);
                        log::info!(
                            "User with user_id = {} searched area {} and got {} venues",
                            user_id,
                            area.key,
                            found.len()
                        );
                        format_results(
                            &fill(texts.area_header, area.label(lang)),
                            without_distance(found),
                            lang,
                            texts.no_results,
                        )
                    }
                    None => texts.data_unavailable.to_owned(),
                },
                None => texts.unknown_option.to_owned(),
            };
            (text, keyboard, State::ChoosingAction { lang })
        }
        Callback::Vibe(key) => {
            let keyboard = make_results_keyboard(lang, callback.clone(), Callback::FindByVibe);
            let text = match Vibe::find(key) {
                Some(vibe) => match load_venues(&store).await {
                    Some(venues) => {
                        let found = by_vibe(&venues, vibe.tag(lang), lang.code());
                        log::info!(
                            "User with user_id = {} searched vibe {} and got {} venues",
                            user_id,
                            vibe.key,
                            found.len()
                        );
                        format_results(
                            &fill(texts.vibe_header, vibe.tag(lang)),
                            without_distance(found),
                            lang,
                            texts.no_results,
                        )
                    }
                    None => texts.data_unavailable.to_owned(),
                },
                None => texts.unknown_option.to_owned(),
            };
            (text, keyboard, State::ChoosingAction { lang })
        }
        Callback::Current => {
            let now = config.bot.current_time();
            let text = match load_venues(&store).await {
                Some(venues) => {
                    let found = currently_open(&venues, &now);
                    log::info!(
                        "User with user_id = {} asked for happy hours open at {} and got {} venues",
                        user_id,
                        now,
                        found.len()
                    );
                    format_results(
                        &fill(texts.current_header, &now),
                        without_distance(found),
                        lang,
                        texts.no_current_hours,
                    )
                }
                None => texts.data_unavailable.to_owned(),
            };
            (
                text,
                make_results_keyboard(lang, Callback::Current, Callback::FindByArea),
                State::ChoosingAction { lang },
            )
        }
        Callback::Popular => {
            let text = match load_venues(&store).await {
                Some(venues) => {
                    let found = popular(&venues);
                    log::info!(
                        "User with user_id = {} asked for popular places and got {} venues",
                        user_id,
                        found.len()
                    );
                    format_results(
                        texts.popular_header,
                        without_distance(found),
                        lang,
                        texts.no_results,
                    )
                }
                None => texts.data_unavailable.to_owned(),
            };
            (
                text,
                make_results_keyboard(lang, Callback::Popular, Callback::FindByArea),
                State::ChoosingAction { lang },
            )
        }
    };

    edit(&bot, chat.id, id, text, keyboard).await?;
    dialogue.update(next_state).await?;
    Ok(())
}

/// STATE HANDLERS
async fn receive_location(
    store: SharedStore,
    bot: Bot,
    dialogue: MyDialogue,
    (lang, radius_km): (Lang, u8),
    msg: Message,
) -> HandlerResult {
    let texts = lang.texts();
    let user_id = msg.from().map(|user| user.id.0).unwrap_or_default();
    match msg.location() {
        Some(location) => {
            bot.send_message(msg.chat.id, fill(texts.searching, radius_km))
                .reply_markup(ReplyMarkup::kb_remove())
                .await?;

            let text = match load_venues(&store).await {
                Some(venues) => {
                    let closest = nearby(
                        &venues,
                        location.latitude,
                        location.longitude,
                        f64::from(radius_km),
                    );
                    log::info!(
                        "User with user_id = {} searched within {} km of latitude = {} and longitude = {} and got {} venues",
                        user_id,
                        radius_km,
                        location.latitude,
                        location.longitude,
                        closest.len()
                    );
                    format_results(
                        &fill(texts.nearby_header, radius_km),
                        closest
                            .into_iter()
                            .map(|(venue, distance)| (venue, Some(distance)))
                            .collect(),
                        lang,
                        texts.no_results,
                    )
                }
                None => texts.data_unavailable.to_owned(),
            };

            bot.send_message(msg.chat.id, text)
                .parse_mode(ParseMode::Html)
                .disable_web_page_preview(true)
                .reply_markup(make_results_keyboard(
                    lang,
                    Callback::Radius(radius_km),
                    Callback::FindNearby,
                ))
                .await?;
            dialogue.update(State::ChoosingAction { lang }).await?;
        }
        None => {
            bot.send_message(msg.chat.id, texts.location_expected)
                .reply_markup(make_location_keyboard(lang))
                .await?;
        }
    }

    Ok(())
}

async fn load_venues(store: &SharedStore) -> Option<Vec<Venue>> {
    store
        .load()
        .await
        .map_err(|err| log::error!("Error loading venues: {}", err))
        .ok()
}

fn without_distance(venues: Vec<&Venue>) -> Vec<(&Venue, Option<f64>)> {
    venues.into_iter().map(|venue| (venue, None)).collect()
}

/// Edits a menu message in place. Pressing Refresh on unchanged results is not an error.
async fn edit(
    bot: &Bot,
    chat_id: ChatId,
    message_id: MessageId,
    text: String,
    keyboard: InlineKeyboardMarkup,
) -> HandlerResult {
    match bot
        .edit_message_text(chat_id, message_id, text)
        .parse_mode(ParseMode::Html)
        .disable_web_page_preview(true)
        .reply_markup(keyboard)
        .await
    {
        Ok(_) | Err(RequestError::Api(ApiError::MessageNotModified)) => Ok(()),
        Err(err) => Err(err.into()),
    }
}
