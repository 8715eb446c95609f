//! Dispatcher schema and handler chain builders
//!
//! The same schema is used in production and in integration tests: a
//! command branch for the fixed command set, a numbered-selection branch
//! for the runtime-generated `/0`, `/1`, ... menu entries, and a
//! free-text branch for specialty queries.

use std::sync::Arc;

use teloxide::dispatching::{UpdateFilterExt, UpdateHandler};
use teloxide::prelude::*;
use teloxide::types::{Message, ParseMode};

use super::bot::Command;
use crate::catalog::EducationLevel;
use crate::dialog::{parse_event, DialogController, Event, SearchMethod};
use crate::render::{self, Markup, Reply};

/// Error type for handlers
pub type HandlerError = Box<dyn std::error::Error + Send + Sync + 'static>;

/// Dependencies required by handlers
#[derive(Clone)]
pub struct HandlerDeps {
    pub controller: Arc<DialogController>,
}

impl HandlerDeps {
    pub fn new(controller: Arc<DialogController>) -> Self {
        Self { controller }
    }
}

/// Creates the main dispatcher schema for the Telegram bot.
///
/// # Arguments
/// * `deps` - Handler dependencies (dialog controller over the catalog)
pub fn schema(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    let deps_commands = deps.clone();
    let deps_selection = deps.clone();

    dptree::entry()
        // Fixed command set first
        .branch(command_handler(deps_commands))
        // Numbered university selections (/0, /1, ...) are not in the
        // Command enum; route them by text prefix
        .branch(selection_handler(deps_selection))
        // Free text is a specialty query
        .branch(message_handler(deps))
}

/// Handler for the fixed bot commands
fn command_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message().branch(dptree::entry().filter_command::<Command>().endpoint(
        move |bot: Bot, msg: Message, cmd: Command| {
            let deps = deps.clone();
            async move {
                log::info!("Received command: {:?} from chat {}", cmd, msg.chat.id);

                let reply = match cmd {
                    // /help is stateless and does not touch any session
                    Command::Help => render::help(),
                    Command::Start => deps.controller.handle(msg.chat.id.0, Event::Start),
                    Command::Bachelor => deps
                        .controller
                        .handle(msg.chat.id.0, Event::Level(EducationLevel::Bachelor)),
                    Command::Master => deps
                        .controller
                        .handle(msg.chat.id.0, Event::Level(EducationLevel::Master)),
                    Command::Doctorate => deps
                        .controller
                        .handle(msg.chat.id.0, Event::Level(EducationLevel::Doctorate)),
                    Command::ByUniversity => deps
                        .controller
                        .handle(msg.chat.id.0, Event::Method(SearchMethod::ByUniversity)),
                    Command::BySpecialty => deps
                        .controller
                        .handle(msg.chat.id.0, Event::Method(SearchMethod::BySpecialty)),
                };

                send_reply(&bot, msg.chat.id, &reply).await?;
                Ok(())
            }
        },
    ))
}

/// Handler for numbered university menu selections (`/0`, `/1`, ...)
fn selection_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| {
            msg.text()
                .and_then(|text| text.strip_prefix('/'))
                .map(|rest| !rest.is_empty() && rest.bytes().all(|b| b.is_ascii_digit()))
                .unwrap_or(false)
        })
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                if let Some(event) = parse_event(text) {
                    log::info!("Menu selection {} from chat {}", text, msg.chat.id);
                    let reply = deps.controller.handle(msg.chat.id.0, event);
                    send_reply(&bot, msg.chat.id, &reply).await?;
                }
                Ok(())
            }
        })
}

/// Handler for regular messages (specialty search queries)
fn message_handler(deps: HandlerDeps) -> UpdateHandler<HandlerError> {
    Update::filter_message()
        .filter(|msg: Message| msg.text().map(|text| !text.starts_with('/')).unwrap_or(false))
        .endpoint(move |bot: Bot, msg: Message| {
            let deps = deps.clone();
            async move {
                let text = msg.text().unwrap_or_default();
                match parse_event(text) {
                    Some(event) => {
                        let reply = deps.controller.handle(msg.chat.id.0, event);
                        send_reply(&bot, msg.chat.id, &reply).await?;
                    }
                    None => {
                        log::debug!("Ignoring unroutable message from chat {}", msg.chat.id);
                    }
                }
                Ok(())
            }
        })
}

/// Sends a rendered reply with its parse mode.
async fn send_reply(bot: &Bot, chat_id: ChatId, reply: &Reply) -> Result<(), teloxide::RequestError> {
    let parse_mode = match reply.markup {
        Markup::Markdown => ParseMode::Markdown,
        Markup::Html => ParseMode::Html,
    };
    bot.send_message(chat_id, reply.text.as_str()).parse_mode(parse_mode).await?;
    Ok(())
}
