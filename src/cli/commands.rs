//! CLI commands implementation.
//!
//! This module contains the CLI parser and dispatches to command-specific modules.

mod entries;
mod export;
mod serve;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

use crate::config::{load_settings_with_options, LoadOptions};

#[derive(Parser)]
#[command(name = "diary")]
#[command(about = "Humanity's Diary: read and serve the collective diary")]
#[command(version)]
pub struct Cli {
    /// Config file path (overrides auto-discovery)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Diary entries JSON file (overrides config and DIARY_DATA_FILE)
    #[arg(long, short = 'd', global = true)]
    data: Option<PathBuf>,

    /// Resolve relative paths from current working directory instead of config file location
    #[arg(long, global = true)]
    cwd: bool,

    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

/// Check if verbose mode is enabled (for early logging setup).
pub fn is_verbose() -> bool {
    std::env::args().any(|arg| arg == "-v" || arg == "--verbose")
}

#[derive(Subcommand)]
enum Commands {
    /// Start the web server
    Serve {
        /// Bind address: port, host, or host:port (default from config, else 127.0.0.1:3030)
        bind: Option<String>,
    },

    /// List one page of entries
    List {
        /// Page number (invalid values fall back to page 1, large ones to the last page)
        #[arg(short, long)]
        page: Option<String>,
    },

    /// Show a single entry
    Show {
        /// Entry date (yyyy-mm-dd)
        date: String,
    },

    /// Validate the entries file
    Check,

    /// Render the whole site to static HTML
    Export {
        /// Output directory
        out_dir: PathBuf,
    },
}

/// Run the CLI.
pub async fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();

    let options = LoadOptions {
        config_path: cli.config,
        use_cwd: cli.cwd,
        data_file: cli.data,
    };
    let settings = load_settings_with_options(options).await;

    match cli.command {
        Commands::Serve { bind } => serve::cmd_serve(&settings, bind.as_deref()).await,
        Commands::List { page } => entries::cmd_list(&settings, page.as_deref()).await,
        Commands::Show { date } => entries::cmd_show(&settings, &date).await,
        Commands::Check => entries::cmd_check(&settings).await,
        Commands::Export { out_dir } => export::cmd_export(&settings, &out_dir).await,
    }
}
