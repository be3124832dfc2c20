//! Command-line interface for stack-escape.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use stack_escape::arena::SourceSpec;

/// Stack Escape - rules engine and match runner
#[derive(Parser, Debug)]
#[command(name = "stack-escape")]
#[command(about = "Play and pit bots against each other in the stacking escape game", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Arena settings shared by every subcommand
    #[command(flatten)]
    pub arena: ArenaArgs,

    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Overrides applied on top of the config file.
#[derive(Args, Debug)]
pub struct ArenaArgs {
    /// Path to an arena config file (TOML)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Maximum submissions per game
    #[arg(long, global = true)]
    pub max_moves: Option<usize>,

    /// Consecutive invalid moves before a side forfeits
    #[arg(long, global = true)]
    pub max_invalid_moves: Option<usize>,

    /// Bot answer timeout in milliseconds
    #[arg(long, global = true)]
    pub timeout_ms: Option<u64>,

    /// Seed for random move sources
    #[arg(long, global = true)]
    pub seed: Option<u64>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play a single game
    Play {
        /// White side: `human`, `random` or a bot executable
        #[arg(short, long, default_value = "human")]
        white: SourceSpec,

        /// Black side: `human`, `random` or a bot executable
        #[arg(short, long, default_value = "random")]
        black: SourceSpec,

        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Play a head-to-head series, each side taking white in turn
    Series {
        /// First entrant
        a: SourceSpec,

        /// Second entrant
        b: SourceSpec,

        /// Games per color assignment
        #[arg(short, long, default_value = "100")]
        games: usize,
    },

    /// Round robin: every ordered pair of entrants plays once
    Tourney {
        /// Entrants: `random` or bot executables
        #[arg(required = true, num_args = 2..)]
        entrants: Vec<SourceSpec>,
    },
}
