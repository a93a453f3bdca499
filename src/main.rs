//! Headless slidebox runner (default binary).
//!
//! `replay` plays a move string against one level of a pack and prints every
//! outcome plus the final board; `check` loads every level of a pack and
//! reports the ones that fail to build.

use std::path::{Path, PathBuf};

use anyhow::{bail, Context, Result};
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use slidebox::core::{Board, EngineConfig, Palette};
use slidebox::engine::{LevelPack, LevelSource, MemoryProgress, Session};
use slidebox::types::{Direction, LevelKey};

#[derive(Debug, Parser)]
#[command(name = "slidebox", version, about = "Sliding-block puzzle engine")]
struct Cli {
    /// Seed for block color assignment (overrides SLIDEBOX_SEED)
    #[arg(long, global = true)]
    seed: Option<u32>,

    /// Comma separated palette, e.g. "red,blue,green" (overrides SLIDEBOX_PALETTE)
    #[arg(long, global = true)]
    palette: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Play a sequence of shoves (U/D/L/R) on one level
    Replay {
        #[arg(long)]
        pack: PathBuf,
        #[arg(long, default_value_t = 1)]
        stage: u32,
        #[arg(long, default_value_t = 1)]
        level: u32,
        #[arg(long)]
        moves: String,
        /// Print the final board as JSON instead of text
        #[arg(long)]
        json: bool,
    },
    /// Load every level in a pack and report construction errors
    Check {
        #[arg(long)]
        pack: PathBuf,
    },
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = build_config(&cli)?;

    match cli.command {
        Command::Replay {
            pack,
            stage,
            level,
            moves,
            json,
        } => replay(&pack, LevelKey::new(stage, level), &moves, json, config),
        Command::Check { pack } => check(&pack, &config),
    }
}

fn build_config(cli: &Cli) -> Result<EngineConfig> {
    let mut config = EngineConfig::from_env();
    if let Some(seed) = cli.seed {
        config = config.with_seed(seed);
    }
    if let Some(list) = &cli.palette {
        let palette = Palette::parse(list).context("invalid --palette")?;
        config = config.with_palette(palette);
    }
    config.validate()?;
    Ok(config)
}

fn load_pack(path: &Path) -> Result<LevelPack> {
    let json = std::fs::read_to_string(path)
        .with_context(|| format!("reading level pack {}", path.display()))?;
    LevelPack::from_json(&json).with_context(|| format!("parsing level pack {}", path.display()))
}

fn parse_moves(moves: &str) -> Result<Vec<Direction>> {
    moves
        .chars()
        .filter(|c| !c.is_whitespace() && *c != ',')
        .map(|c| Direction::from_char(c).with_context(|| format!("unknown move {:?}", c)))
        .collect()
}

fn replay(path: &Path, key: LevelKey, moves: &str, json: bool, config: EngineConfig) -> Result<()> {
    let directions = parse_moves(moves)?;
    let pack = load_pack(path)?;
    let mut session = Session::new(pack, MemoryProgress::new(), config);

    let board = session.start(key)?;
    println!("level {}", key);
    print!("{}", board.snapshot());

    for (n, direction) in directions.into_iter().enumerate() {
        let report = session.shove(direction)?;
        println!(
            "{:>3} {:<5} moved={} destroyed={} -> {}",
            n + 1,
            direction.as_str(),
            report.moved.len(),
            report.destroyed.len(),
            report.outcome.as_str()
        );
        if report.outcome.is_terminal() {
            break;
        }
    }

    let snapshot = session
        .board()
        .map(Board::snapshot)
        .context("no board after replay")?;
    if json {
        println!("{}", snapshot.to_json()?);
    } else {
        print!("{}", snapshot);
        println!("status: {:?}", snapshot.status);
    }
    Ok(())
}

fn check(path: &Path, config: &EngineConfig) -> Result<()> {
    let pack = load_pack(path)?;
    let mut failures = 0usize;

    for key in pack.keys() {
        let Some(data) = pack.level(key) else {
            continue;
        };
        match Board::load(&data, config) {
            Ok(board) => println!("{:<8} ok ({} blocks)", key.to_string(), board.registry().len()),
            Err(err) => {
                failures += 1;
                println!("{:<8} error: {}", key.to_string(), err);
            }
        }
    }

    if failures > 0 {
        bail!("{} of {} levels failed to load", failures, pack.len());
    }
    Ok(())
}
