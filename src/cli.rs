use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "bilimbot")]
#[command(author, version, about = "Telegram bot for looking up educational programs in Kazakhstan", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Run the bot (long polling)
    Run,

    /// Validate the program catalog file and print a summary
    CheckData {
        /// Path to the catalog JSON file (defaults to PROGRAMS_FILE)
        #[arg(short, long)]
        file: Option<String>,
    },
}

impl Cli {
    pub fn parse_args() -> Self {
        Self::parse()
    }
}
