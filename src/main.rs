//! Word Trie - Main entrypoint.
//!
//! Loads configuration, initializes logging, and runs the interactive menu
//! over stdin and stdout.

use clap::{Parser, Subcommand};
use std::io;
use std::path::PathBuf;
use std::process;
use tracing::info;
use word_trie_lib::config::{self, ConfigLoader, LogConfig, WordTrieConfig};
use word_trie_lib::error::{WordTrieError, WordTrieResult};
use word_trie_lib::logging::init_logging;
use word_trie_lib::{Session, WordStore};

/// Command line arguments for the word trie.
#[derive(Parser, Debug)]
#[clap(name = "Word Trie", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Directory word files are saved to and loaded from
    #[clap(short, long, value_parser)]
    data_dir: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Option<Command>,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Run the interactive menu
    Menu,

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Main entry point for the application.
fn main() -> WordTrieResult<()> {
    let args = Args::parse();
    let loader = ConfigLoader::new(args.config.as_deref(), config::ENV_PREFIX);

    match args.command.unwrap_or(Command::Menu) {
        Command::Menu => {
            let mut config = load_or_exit(&loader);
            if let Some(dir) = args.data_dir {
                config.storage.directory = dir;
            }
            init_logging(&config.log)?;

            let store = WordStore::from_config(&config.storage);
            info!(directory = %store.directory().display(), "Starting word trie session");
            let stdin = io::stdin();
            let mut session = Session::new(store, stdin.lock(), io::stdout());
            session.run()
        }
        Command::Validate => {
            init_logging(&LogConfig::default())?;
            info!("Validating configuration");
            load_or_exit(&loader);
            info!("Configuration validated successfully");
            Ok(())
        }
        Command::GenConfig { output } => {
            init_logging(&LogConfig::default())?;
            info!("Generating default configuration");
            let default_config = WordTrieConfig::default();

            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&default_config)
                .map_err(|e| WordTrieError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
            Ok(())
        }
    }
}

/// Loads the configuration, exiting the process when it is unusable.
fn load_or_exit(loader: &ConfigLoader) -> WordTrieConfig {
    match loader.load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {e}");
            process::exit(1);
        }
    }
}
