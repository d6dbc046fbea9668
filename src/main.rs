//! TST - Main entrypoint.
//!
//! Loads configuration, initializes logging, then runs one query against a
//! ternary search tree built from a word list.

use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use std::process;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use tst_lib::config::{AppConfig, ConfigLoader, LogConfig, ENV_PREFIX};
use tst_lib::error::{TstError, TstResult};
use tst_lib::wordlist;
use tst_lib::TernarySearchTree;

/// Command line arguments for the TST tool.
#[derive(Parser, Debug)]
#[clap(name = "tst", version, author, about)]
struct Args {
    /// Path to configuration file
    #[clap(short, long, value_parser)]
    config: Option<PathBuf>,

    /// Command to execute
    #[clap(subcommand)]
    command: Command,
}

/// Available subcommands.
#[derive(Subcommand, Debug)]
enum Command {
    /// Print the number of distinct words in a word list
    Count {
        /// Word list, one term per line
        wordlist: PathBuf,
    },

    /// Look terms up in a word list
    Search {
        /// Word list, one term per line
        wordlist: PathBuf,

        /// Terms to look up
        #[clap(required = true)]
        terms: Vec<String>,

        /// Match whole words only instead of prefixes
        #[clap(short, long)]
        exact: bool,
    },

    /// Print the distinct words in ascending order
    List {
        /// Word list, one term per line
        wordlist: PathBuf,

        /// Only print words starting with this prefix
        #[clap(short, long)]
        prefix: Option<String>,

        /// Print a JSON array instead of one word per line
        #[clap(long)]
        json: bool,
    },

    /// Draw the tree built from a word list
    Render {
        /// Word list, one term per line
        wordlist: PathBuf,
    },

    /// Validate the configuration file
    Validate,

    /// Generate a default configuration file
    GenConfig {
        /// Path to output configuration file
        #[clap(short, long, value_parser)]
        output: PathBuf,
    },
}

/// Initialize the logging system.
///
/// `RUST_LOG` takes precedence over the configured level. Logs go to stderr so
/// query output on stdout stays clean.
fn init_logging(log: &LogConfig) -> TstResult<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&log.level));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_file(log.source_location)
        .with_line_number(log.source_location);

    let result = if log.json {
        tracing::subscriber::set_global_default(builder.json().finish())
    } else {
        tracing::subscriber::set_global_default(builder.finish())
    };

    result.map_err(|e| TstError::Custom(format!("Failed to set global tracing subscriber: {e}")))
}

fn build_tree(path: &Path, config: &AppConfig) -> TstResult<TernarySearchTree> {
    let tree = wordlist::load_tree(path, &config.wordlist)?;
    info!(path = %path.display(), words = tree.len(), "tree built");
    Ok(tree)
}

fn run(command: Command, config: &AppConfig) -> TstResult<()> {
    match command {
        Command::Count { wordlist } => {
            let tree = build_tree(&wordlist, config)?;
            println!("{}", tree.len());
        }
        Command::Search {
            wordlist,
            terms,
            exact,
        } => {
            let tree = build_tree(&wordlist, config)?;
            for term in terms {
                println!("{term}\t{}", tree.search(&term, exact));
            }
        }
        Command::List {
            wordlist,
            prefix,
            json,
        } => {
            let tree = build_tree(&wordlist, config)?;
            let words = match prefix {
                Some(prefix) => tree.strings_with_prefix(prefix),
                None => tree.all_strings(),
            };
            if json {
                println!("{}", serde_json::to_string_pretty(&words)?);
            } else {
                for word in words {
                    println!("{word}");
                }
            }
        }
        Command::Render { wordlist } => {
            let tree = build_tree(&wordlist, config)?;
            print!("{}", tree.render());
        }
        Command::Validate => {
            info!("Configuration validated successfully");
            println!("configuration is valid");
        }
        Command::GenConfig { output } => {
            // Create parent directories if they don't exist
            if let Some(parent) = output.parent() {
                std::fs::create_dir_all(parent)?;
            }

            let toml = toml::to_string_pretty(&AppConfig::default())
                .map_err(|e| TstError::Custom(format!("Failed to serialize config: {e}")))?;
            std::fs::write(&output, toml)?;

            info!("Default configuration written to {:?}", output);
        }
    }

    Ok(())
}

/// Main entry point for the application.
fn main() {
    let args = Args::parse();

    let loaded = ConfigLoader::new(args.config.as_deref(), ENV_PREFIX).load();
    let log_config = match &loaded {
        Ok(config) => config.log.clone(),
        Err(_) => LogConfig::default(),
    };
    if let Err(e) = init_logging(&log_config) {
        eprintln!("{e}");
    }

    let result = loaded
        .map_err(TstError::from)
        .and_then(|config| run(args.command, &config));

    if let Err(e) = result {
        error!("{}", e);
        eprintln!("error: {e}");
        process::exit(1);
    }
}
