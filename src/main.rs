// SPDX-License-Identifier: AGPL-3.0-or-later
// SPDX-FileCopyrightText: 2025 Jonathan D.A. Jewell
//
//! Timetable CLI - expand term schedules, check classroom conflicts, generate ranks

use anyhow::Result;
use clap::{CommandFactory, Parser, Subcommand};
use std::path::PathBuf;
use timetable::{commands, config};

#[derive(Parser)]
#[command(name = "timetable")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    /// Quiet mode (suppress non-error output)
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Configuration file path
    #[arg(short, long, env = "TIMETABLE_CONFIG", global = true)]
    config: Option<PathBuf>,

    /// Disable colored output
    #[arg(long, env = "NO_COLOR", global = true)]
    no_color: bool,

    /// Output in JSON format
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List dated occurrences of all active classrooms
    Expand {
        /// Selections file (JSON, or TOML with a .toml extension)
        file: PathBuf,
    },

    /// Report classroom pairs with overlapping meetings
    Conflicts {
        /// Selections file (JSON, or TOML with a .toml extension)
        file: PathBuf,
    },

    /// Show the first and last meeting of all active classrooms
    Span {
        /// Selections file (JSON, or TOML with a .toml extension)
        file: PathBuf,
    },

    /// Generate LexoRank values
    Rank {
        /// Action: init, next, prev, between, spread
        action: String,

        /// Ranks (next, prev, between) or a count (spread)
        values: Vec<String>,

        /// Rank length for spread (defaults to rank_length from config)
        #[arg(long)]
        length: Option<usize>,
    },

    /// Show the academic year and semester for a date
    Term {
        /// Date (YYYY-MM-DD), defaults to today
        #[arg(long)]
        date: Option<String>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type (bash, zsh, fish, powershell)
        shell: clap_complete::Shell,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(cli.config.as_deref())?;

    // Initialize logging; -v/-q win over log_level from config
    let log_level = match cli.verbose {
        0 if cli.quiet => tracing::Level::ERROR,
        0 => cfg.log_level.parse().unwrap_or(tracing::Level::INFO),
        1 => tracing::Level::DEBUG,
        _ => tracing::Level::TRACE,
    };

    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let color = !cli.no_color;

    // Execute command
    match cli.command {
        Commands::Expand { file } => commands::expand::run(&file, cli.json, &cfg),
        Commands::Conflicts { file } => commands::conflicts::run(&file, cli.json, color, &cfg),
        Commands::Span { file } => commands::span::run(&file, cli.json),
        Commands::Rank { action, values, length } => {
            commands::rank::run(&action, &values, length.unwrap_or(cfg.rank_length))
        }
        Commands::Term { date } => commands::term::run(date.as_deref(), cli.json),
        Commands::Completions { shell } => commands::completions::run(shell, &mut Cli::command()),
    }
}
