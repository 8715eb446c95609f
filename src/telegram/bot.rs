//! Bot initialization and command definitions

use teloxide::prelude::*;
use teloxide::utils::command::BotCommands;

use crate::core::config;

/// Bot commands enum with descriptions
///
/// The numbered university selections (`/0`, `/1`, ...) are generated at
/// runtime and cannot live here; they are routed by a text-prefix filter
/// in the handler schema.
#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "snake_case", description = "Я умею:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "показать список команд")]
    Help,
    #[command(description = "выбрать уровень образования 'Бакалавриат'")]
    Bachelor,
    #[command(description = "выбрать уровень образования 'Магистратура'")]
    Master,
    #[command(description = "выбрать уровень образования 'Докторантура'")]
    Doctorate,
    #[command(description = "искать программу по названию вуза")]
    ByUniversity,
    #[command(description = "искать программу по специальности")]
    BySpecialty,
}

/// Creates a Bot instance from the TOKEN environment variable.
///
/// # Returns
/// * `Ok(Bot)` - Successfully created bot instance
/// * `Err(anyhow::Error)` - TOKEN is unset or empty
pub fn create_bot() -> anyhow::Result<Bot> {
    let token = config::BOT_TOKEN.as_str();
    if token.is_empty() {
        return Err(anyhow::anyhow!("TOKEN environment variable is not set"));
    }
    Ok(Bot::new(token))
}

/// Sets up bot commands in the Telegram UI
pub async fn setup_bot_commands(bot: &Bot) -> Result<(), teloxide::RequestError> {
    use teloxide::types::BotCommand;

    bot.set_my_commands(vec![
        BotCommand::new("start", "начать работу с ботом"),
        BotCommand::new("help", "показать список команд"),
        BotCommand::new("bachelor", "выбрать уровень образования 'Бакалавриат'"),
        BotCommand::new("master", "выбрать уровень образования 'Магистратура'"),
        BotCommand::new("doctorate", "выбрать уровень образования 'Докторантура'"),
        BotCommand::new("by_university", "искать программу по названию вуза"),
        BotCommand::new("by_specialty", "искать программу по специальности"),
    ])
    .await?;

    Ok(())
}
