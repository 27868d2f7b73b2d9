//! multi-claude-install - installer for the multi-claude tmux workflow.
//!
//! Stages a distribution into a package-manager-style prefix, bootstraps
//! `~/.multi-claude`, writes the `multi-claude-global` launcher, links it
//! as `~/bin/multi-claude`, and audits PATH.
#![allow(dead_code)]

mod audit;
mod bootstrap;
mod commands;
mod config;
mod distribution;
mod doctor;
mod error;
mod fsutil;
mod launcher;
mod link;
mod stage;

use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};

use config::Config;

#[derive(Parser)]
#[command(name = "multi-claude-install")]
#[command(about = "Installer for the multi-claude multi-agent tmux workflow")]
#[command(
    after_help = "QUICK START:\n  multi-claude-install install --distribution ./dist\n  multi-claude-install doctor   Check an existing install\n  multi-claude-install audit    Check PATH only"
)]
struct Cli {
    /// Override the home directory (default: $MULTI_CLAUDE_HOME, then the
    /// real home)
    #[arg(long, global = true)]
    home: Option<PathBuf>,

    /// Override the stage prefix (default: $MULTI_CLAUDE_PREFIX, then a
    /// versioned dir under ~/.local/share/multi-claude)
    #[arg(long, global = true)]
    prefix: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Full install: stage the distribution, then bootstrap the user state
    Install {
        /// Distribution directory to install from
        #[arg(long)]
        distribution: PathBuf,
    },

    /// Stage the distribution into the prefix (package-manager install hook)
    Stage {
        /// Distribution directory to stage
        #[arg(long)]
        distribution: PathBuf,
    },

    /// Bootstrap user state from an already-staged prefix (post-install hook)
    PostInstall,

    /// Check whether ~/bin is on PATH
    Audit,

    /// Health-check an existing installation
    Doctor,

    /// Show the resolved configuration
    Show {
        /// Emit JSON instead of text
        #[arg(long)]
        json: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Load .env if present
    dotenvy::dotenv().ok();
    let config = Config::load(cli.home, cli.prefix)?;

    match cli.command {
        Commands::Install { distribution } => commands::cmd_install(&config, &distribution)?,
        Commands::Stage { distribution } => commands::cmd_stage(&config, &distribution)?,
        Commands::PostInstall => commands::cmd_post_install(&config)?,
        Commands::Audit => commands::cmd_audit(&config)?,
        Commands::Doctor => commands::cmd_doctor(&config)?,
        Commands::Show { json } => commands::cmd_show(&config, json)?,
    }

    Ok(())
}
