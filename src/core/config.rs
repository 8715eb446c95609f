use once_cell::sync::Lazy;
use std::env;

/// Configuration for the bot, read once at startup from the environment
/// (dotenvy loads `.env` first, see `main`).

/// Telegram bot token.
/// Read from the TOKEN environment variable; empty means not configured,
/// which is a fatal startup condition checked in `create_bot`.
pub static BOT_TOKEN: Lazy<String> = Lazy::new(|| env::var("TOKEN").unwrap_or_default());

/// Path to the JSON file with the program catalog.
/// Read from PROGRAMS_FILE, defaults to the file shipped at the repo root.
pub static PROGRAMS_FILE: Lazy<String> =
    Lazy::new(|| env::var("PROGRAMS_FILE").unwrap_or_else(|_| "educational_programs.json".to_string()));

/// Log file path for the file half of the combined logger.
pub static LOG_FILE_PATH: Lazy<String> =
    Lazy::new(|| env::var("LOG_FILE").unwrap_or_else(|_| "bilimbot.log".to_string()));
