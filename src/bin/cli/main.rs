mod app;
mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "wordchain-cli", about = "Spaced repetition vocabulary drills", version)]
struct Cli {
    /// Use a specific data directory (default: platform data dir)
    #[arg(long, global = true)]
    data_dir: Option<PathBuf>,

    /// Output format
    #[arg(long, global = true, default_value = "plain")]
    format: OutputFormat,

    #[command(subcommand)]
    command: Command,
}

#[derive(Clone, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Plain,
    Json,
}

#[derive(Subcommand)]
enum Command {
    /// List your languages
    List,

    /// Create a new language
    New {
        /// Display name, e.g. "French"
        name: String,
    },

    /// Add a word pair to a language
    Add {
        /// Language name (case-insensitive prefix match)
        language: String,
        /// Prompt text
        original: String,
        /// Expected answer
        translation: String,
    },

    /// List a language's words in review order
    Words {
        /// Language name (case-insensitive prefix match)
        language: String,
    },

    /// Show the word due next
    Head {
        /// Language name (case-insensitive prefix match)
        language: String,
    },

    /// Answer the word due next
    Guess {
        /// Language name (case-insensitive prefix match)
        language: String,
        /// Your translation of the prompted word
        answer: String,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let app = app::App::new(cli.data_dir)?;

    match cli.command {
        Command::List => {
            commands::list::run(&app, &cli.format)?;
        }
        Command::New { name } => {
            commands::new::run(&app, &name, &cli.format)?;
        }
        Command::Add {
            language,
            original,
            translation,
        } => {
            commands::add::run(&app, &language, &original, &translation, &cli.format)?;
        }
        Command::Words { language } => {
            commands::words::run(&app, &language, &cli.format)?;
        }
        Command::Head { language } => {
            commands::head::run(&app, &language, &cli.format)?;
        }
        Command::Guess { language, answer } => {
            commands::guess::run(&app, &language, &answer, &cli.format)?;
        }
    }

    Ok(())
}
