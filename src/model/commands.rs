use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone)]
#[command(rename_rule = "lowercase")]
pub(crate) enum BotCommand {
    #[command(description = "Start using the bot")]
    Start,
    #[command(description = "Choose the interface language")]
    Language,
    #[command(description = "Reset the dialogue state")]
    Reset,
    #[command(description = "Show all commands")]
    Help,
}
