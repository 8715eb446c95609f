use std::path::Path;
use std::sync::Arc;

use anyhow::Result;
use dotenvy::dotenv;
use teloxide::prelude::*;

use bilimbot::catalog::ProgramCatalog;
use bilimbot::cli::{Cli, Commands};
use bilimbot::core::{config, init_logger};
use bilimbot::dialog::DialogController;
use bilimbot::telegram::{create_bot, schema, setup_bot_commands, HandlerDeps};

/// Main entry point for the Telegram bot
///
/// Parses CLI arguments and dispatches to the appropriate subcommand.
///
/// # Errors
/// Returns an error if initialization fails (logging, catalog load, bot creation).
#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse_args();

    // Initialize logger (console + file)
    init_logger(&config::LOG_FILE_PATH)?;

    // Load environment variables from .env if present
    let _ = dotenv();

    match cli.command {
        Some(Commands::CheckData { file }) => {
            let path = file.unwrap_or_else(|| config::PROGRAMS_FILE.clone());
            run_check_data(&path)
        }
        Some(Commands::Run) | None => run_bot().await,
    }
}

/// Validate the catalog file and print a summary without starting the bot
fn run_check_data(path: &str) -> Result<()> {
    let catalog = ProgramCatalog::load(Path::new(path))?;
    let universities = catalog.universities();

    println!("Catalog OK: {}", path);
    println!("  records:      {}", catalog.len());
    println!("  universities: {}", universities.len());
    for (i, uni) in universities.iter().enumerate() {
        println!("  /{} - {}", i, uni);
    }
    Ok(())
}

/// Run the Telegram bot
async fn run_bot() -> Result<()> {
    log::info!("Starting bot...");

    // Load the catalog before anything else; a missing, malformed or
    // empty catalog is fatal and the bot must not serve traffic.
    let catalog_path = config::PROGRAMS_FILE.clone();
    let catalog = match ProgramCatalog::load(Path::new(&catalog_path)) {
        Ok(catalog) => Arc::new(catalog),
        Err(e) => {
            log::error!("Failed to load program catalog: {}", e);
            return Err(e.into());
        }
    };
    log::info!(
        "Catalog loaded from {}: {} record(s), {} universit(ies)",
        catalog_path,
        catalog.len(),
        catalog.universities().len()
    );

    // Create bot instance
    let bot = create_bot()?;

    // Set up bot commands in the Telegram UI
    if let Err(e) = setup_bot_commands(&bot).await {
        log::warn!("Failed to set bot commands: {}. Continuing anyway.", e);
    }

    // The controller owns the per-chat session store; the catalog is
    // shared read-only across all conversations.
    let controller = Arc::new(DialogController::new(catalog));
    let handler = schema(HandlerDeps::new(controller));

    log::info!("Starting bot in long polling mode");

    Dispatcher::builder(bot, handler)
        .dependencies(DependencyMap::new())
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    log::info!("Dispatcher shutdown gracefully");
    Ok(())
}
