mod config;
mod model;
mod schema;
mod store;
mod utils;

use crate::config::{Config, LoggingConfig, VenuesConfig};
use crate::model::commands::BotCommand;
use crate::model::state::State;
use crate::model::types::SharedStore;
use crate::store::{CachedVenueStore, JsonFileVenueStore};
use crate::utils::constants::DEFAULT_CONFIG_PATH;
use anyhow::Result;
use dotenv::dotenv;

use schema::schema;

use log4rs::append::file::FileAppender;
use log4rs::config::{Appender, Config as LogConfig, Root};
use log4rs::encode::pattern::PatternEncoder;
use secrecy::ExposeSecret;
use std::env;
use std::sync::Arc;
use std::time::Duration;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::types::MenuButton;
use teloxide::{prelude::*, utils::command::BotCommands};

fn init_logging(config: &LoggingConfig) -> Result<()> {
    let level = config.level_filter()?;

    match &config.file {
        Some(path) => {
            let logfile = FileAppender::builder()
                .encoder(Box::new(PatternEncoder::new("{d} - {l} - {m}\n")))
                .build(path)?;

            let log_config = LogConfig::builder()
                .appender(Appender::builder().build("logfile", Box::new(logfile)))
                .build(Root::builder().appender("logfile").build(level))?;

            log4rs::init_config(log_config)?;
        }
        None => pretty_env_logger::formatted_builder()
            .filter_level(level)
            .parse_default_env()
            .init(),
    }

    Ok(())
}

fn open_store(config: &VenuesConfig) -> SharedStore {
    let store = JsonFileVenueStore::new(&config.path);
    if config.cache_ttl_secs == 0 {
        Arc::new(store)
    } else {
        Arc::new(CachedVenueStore::new(
            store,
            Duration::from_secs(config.cache_ttl_secs),
        ))
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv().ok();

    let config_path =
        env::var("HAPPY_HOUR_CONFIG").unwrap_or_else(|_| DEFAULT_CONFIG_PATH.to_owned());
    let config = Config::load(&config_path)?.with_env_overrides(|key| env::var(key).ok());

    init_logging(&config.logging)?;

    log::info!("Starting Happy Hour bot...");

    let store = open_store(&config.venues);
    match store.load().await {
        Ok(venues) => log::info!(
            "{} venues available in {}",
            venues.len(),
            config.venues.path.display()
        ),
        Err(err) => log::error!("Venues are not available yet: {}", err),
    }

    let bot = match &config.bot.token {
        Some(token) => Bot::new(token.expose_secret().as_str()),
        None => Bot::from_env(),
    };

    bot.set_my_commands(BotCommand::bot_commands()).await?;
    bot.set_chat_menu_button()
        .menu_button(MenuButton::Commands)
        .await?;

    Dispatcher::builder(bot, schema())
        .dependencies(dptree::deps![
            InMemStorage::<State>::new(),
            store,
            Arc::new(config)
        ])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    Ok(())
}
