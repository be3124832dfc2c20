//! Stack Escape - command-line driver
//!
//! Single games, head-to-head series and round-robin tournaments between
//! humans, random players and bot executables.

mod cli;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{ArenaArgs, Cli, Command};
use tracing::info;
use tracing_subscriber::EnvFilter;

use stack_escape::arena::{
    play_game, run_series, run_tournament, ArenaConfig, SourceSpec, TournamentReport,
};
use stack_escape::core::GameRng;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = load_config(&cli.arena)?;

    match cli.command {
        Command::Play { white, black, json } => run_play(&white, &black, json, &config),
        Command::Series { a, b, games } => run_head_to_head(&a, &b, games, &config),
        Command::Tourney { entrants } => run_round_robin(&entrants, &config),
    }
}

/// Config file first, then command-line overrides.
fn load_config(args: &ArenaArgs) -> Result<ArenaConfig> {
    let mut config = match &args.config {
        Some(path) => ArenaConfig::from_file(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => ArenaConfig::default(),
    };

    if let Some(max) = args.max_moves {
        config = config.with_max_moves(max);
    }
    if let Some(max) = args.max_invalid_moves {
        config = config.with_max_invalid_moves(max);
    }
    if let Some(millis) = args.timeout_ms {
        config = config.with_bot_timeout_ms(millis);
    }
    if let Some(seed) = args.seed {
        config = config.with_seed(seed);
    }

    config.validate()?;
    info!(?config, "Arena configured");
    Ok(config)
}

/// Play one game and print how it ended.
fn run_play(white: &SourceSpec, black: &SourceSpec, json: bool, config: &ArenaConfig) -> Result<()> {
    let mut rng = GameRng::new(config.seed);
    let mut white_source = white.build(config, &mut rng);
    let mut black_source = black.build(config, &mut rng);

    let report = play_game(white_source.as_mut(), black_source.as_mut(), config);

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        for record in report.log.iter() {
            println!("{:>4}  {}  {}", record.sequence, record.mv, record.response.result);
        }
        println!("{} (white) vs {} (black): {}", report.white, report.black, report.ending);
    }
    Ok(())
}

/// Play a series and print both entrants' records.
fn run_head_to_head(a: &SourceSpec, b: &SourceSpec, games: usize, config: &ArenaConfig) -> Result<()> {
    let report = run_series(a, b, games, config);

    for standing in &report.standings {
        println!(
            "{:<24} white {:>4}/{:<4} black {:>4}/{:<4} overall {:.3}",
            standing.name,
            standing.white_wins,
            standing.white_games,
            standing.black_wins,
            standing.black_games,
            standing.overall_rate()
        );
    }
    println!("undecided: {}", report.undecided);
    Ok(())
}

/// Play a round robin and print the rankings.
fn run_round_robin(entrants: &[SourceSpec], config: &ArenaConfig) -> Result<()> {
    if entrants.iter().any(|e| *e == SourceSpec::Human) {
        bail!("humans cannot enter a tournament");
    }
    let report = run_tournament(entrants, config);
    print_rankings(&report);
    Ok(())
}

fn print_rankings(report: &TournamentReport) {
    println!("Overall:");
    for (rank, standing) in report.rankings().into_iter().enumerate() {
        println!("{:>3}. {:<24} {:.3}", rank + 1, standing.name, standing.overall_rate());
    }
    println!("As white:");
    for (rank, standing) in report.white_rankings().into_iter().enumerate() {
        println!("{:>3}. {:<24} {:.3}", rank + 1, standing.name, standing.white_rate());
    }
    println!("As black:");
    for (rank, standing) in report.black_rankings().into_iter().enumerate() {
        println!("{:>3}. {:<24} {:.3}", rank + 1, standing.name, standing.black_rate());
    }
}
