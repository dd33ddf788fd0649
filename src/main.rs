// Copyright (C) 2025 Jeremy J. Carroll. See LICENSE for details.

//! Command-line front end.
//!
//! ```text
//! snake-cube                         # solve the built-in 4x4x4 puzzle
//! snake-cube solve --chain 3,3,3,3,2,2,2,3,3,2,2,3,2,3,2,2,3
//! snake-cube solve --chain-file puzzle.json --format detailed
//! snake-cube check --chain 3,2 --side 4 ""
//! ```

use anyhow::{bail, Context, Result};
use clap::{Args, Parser, Subcommand, ValueEnum};
use snake_cube::chain::{self, Chain};
use snake_cube::context::SEED_MOVES;
use snake_cube::engine::replay;
use snake_cube::geometry::Move;
use snake_cube::report::{self, Format, PrintSink};
use snake_cube::search::{self, SearchConfig, SymmetryBreaking};
use std::io::{self, Write};
use std::ops::ControlFlow;
use std::path::PathBuf;
use tracing::level_filters::LevelFilter;
use tracing_subscriber::fmt::SubscriberBuilder;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "snake-cube")]
#[command(about = "Enumerate every fold of a snake cube chain")]
struct Cmd {
    /// Increase log verbosity (-v info, -vv debug, -vvv trace); RUST_LOG overrides
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    action: Option<Action>,
}

#[derive(Subcommand)]
enum Action {
    /// Search for every fold of the chain (the default)
    Solve(SolveArgs),
    /// Replay a rendered solution against the chain
    Check(CheckArgs),
}

#[derive(Args, Default)]
struct ChainArgs {
    /// Segment lengths, separated by commas or spaces
    #[arg(long, conflicts_with = "chain_file")]
    chain: Option<String>,

    /// Chain definition file (plain list or JSON)
    #[arg(long)]
    chain_file: Option<PathBuf>,

    /// Side of the target cube (default: derived from the chain)
    #[arg(long)]
    side: Option<usize>,
}

#[derive(Args, Default)]
struct SolveArgs {
    #[command(flatten)]
    chain: ChainArgs,

    /// Disable both symmetry-breaking rules and enumerate every orientation
    #[arg(long)]
    no_symmetry: bool,

    /// Stop after this many solutions
    #[arg(long, value_parser = clap::value_parser!(u64).range(1..))]
    max_solutions: Option<u64>,

    /// Log progress every N positions
    #[arg(long, value_name = "N", value_parser = clap::value_parser!(u64).range(1..))]
    progress: Option<u64>,

    /// Solution output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Compact)]
    format: OutputFormat,

    /// Print only the summary
    #[arg(short, long)]
    quiet: bool,
}

#[derive(Args)]
struct CheckArgs {
    #[command(flatten)]
    chain: ChainArgs,

    /// Moves as printed by `solve`, e.g. "-x+z+x-y-x"
    moves: String,

    /// The moves include the opening +x+y instead of starting after it
    #[arg(long)]
    no_seed: bool,
}

#[derive(Clone, Copy, Default, ValueEnum)]
enum OutputFormat {
    #[default]
    Compact,
    Detailed,
}

impl From<OutputFormat> for Format {
    fn from(format: OutputFormat) -> Self {
        match format {
            OutputFormat::Compact => Format::Compact,
            OutputFormat::Detailed => Format::Detailed,
        }
    }
}

impl Cmd {
    /// Log level from `-v`, raised to info when progress lines were asked for.
    fn log_level(&self) -> LevelFilter {
        let level = match self.verbose {
            0 => LevelFilter::WARN,
            1 => LevelFilter::INFO,
            2 => LevelFilter::DEBUG,
            _ => LevelFilter::TRACE,
        };
        match &self.action {
            Some(Action::Solve(args)) if args.progress.is_some() => level.max(LevelFilter::INFO),
            _ => level,
        }
    }
}

fn main() -> Result<()> {
    let cmd = Cmd::parse();
    let filter = EnvFilter::builder()
        .with_default_directive(cmd.log_level().into())
        .from_env_lossy();
    SubscriberBuilder::default()
        .with_target(false)
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cmd.action.unwrap_or(Action::Solve(SolveArgs::default())) {
        Action::Solve(args) => solve(args),
        Action::Check(args) => check(args),
    }
}

/// Resolve the chain and cube side from the command line, a file, or the built-in puzzle.
fn load_chain(args: &ChainArgs) -> Result<(Chain, usize)> {
    let (chain, file_side) = if let Some(list) = &args.chain {
        let segments = chain::parse_list(list).context("parsing --chain")?;
        (Chain::new(segments)?, None)
    } else if let Some(path) = &args.chain_file {
        chain::load_file(path)
            .and_then(|definition| definition.into_chain())
            .with_context(|| format!("loading chain from {}", path.display()))?
    } else {
        (Chain::default_puzzle(), None)
    };
    let side = chain.resolve_side(args.side.or(file_side))?;
    tracing::info!(segments = chain.len(), side, "chain loaded");
    Ok((chain, side))
}

fn solve(args: SolveArgs) -> Result<()> {
    let (chain, side) = load_chain(&args.chain)?;
    let symmetry = if args.no_symmetry {
        SymmetryBreaking::none()
    } else {
        SymmetryBreaking::canonical()
    };
    let config = SearchConfig::new(side)
        .with_symmetry(symmetry)
        .with_max_solutions(args.max_solutions)
        .with_progress_interval(args.progress);

    let summary = if args.quiet {
        search::run(&chain, &config, &mut |_: &search::Solution<'_>| {
            ControlFlow::Continue(())
        })?
    } else {
        let writer = io::BufWriter::new(io::stdout().lock());
        let mut sink = PrintSink::new(writer, args.format.into());
        let summary = search::run(&chain, &config, &mut sink)?;
        sink.finish().context("writing solutions")?;
        summary
    };

    let mut out = io::stdout().lock();
    writeln!(out, "{}", report::render_summary(&summary))?;
    Ok(())
}

/// The full move sequence for `check`: the opening moves unless `--no-seed`, then the given moves.
fn moves_to_replay(args: &CheckArgs) -> Result<Vec<Move>> {
    let chosen = report::parse_moves(&args.moves)?;
    if args.no_seed {
        return Ok(chosen);
    }
    Ok(SEED_MOVES.iter().copied().chain(chosen).collect())
}

fn check(args: CheckArgs) -> Result<()> {
    let (chain, side) = load_chain(&args.chain)?;
    let moves = moves_to_replay(&args)?;

    let summary = match replay(&chain, side, &moves) {
        Ok(summary) => summary,
        Err(err) => bail!("not a valid fold: {}", err),
    };
    let [x, y, z] = summary.span.dimensions();
    println!(
        "valid fold: {} cells in a {}x{}x{} box, ends at {:?}",
        summary.occupied,
        x,
        y,
        z,
        summary.end.components()
    );
    if summary.occupied == side * side * side {
        println!("fills the {side}x{side}x{side} cube");
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use snake_cube::chain::DEFAULT_CHAIN;
    use std::io::Write as _;

    fn parse(args: &[&str]) -> Cmd {
        Cmd::try_parse_from(std::iter::once("snake-cube").chain(args.iter().copied())).unwrap()
    }

    fn chain_args(cmd: &Cmd) -> &ChainArgs {
        match cmd.action.as_ref().unwrap() {
            Action::Solve(args) => &args.chain,
            Action::Check(args) => &args.chain,
        }
    }

    fn check_args(cmd: &Cmd) -> &CheckArgs {
        match cmd.action.as_ref().unwrap() {
            Action::Check(args) => args,
            Action::Solve(_) => panic!("expected check"),
        }
    }

    fn chain_file(contents: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_log_level_from_verbosity() {
        assert_eq!(parse(&[]).log_level(), LevelFilter::WARN);
        assert_eq!(parse(&["solve"]).log_level(), LevelFilter::WARN);
        assert_eq!(parse(&["-v", "solve"]).log_level(), LevelFilter::INFO);
        assert_eq!(parse(&["solve", "-vv"]).log_level(), LevelFilter::DEBUG);
        assert_eq!(parse(&["-vvvv", "solve"]).log_level(), LevelFilter::TRACE);
    }

    #[test]
    fn test_progress_raises_log_level() {
        let cmd = parse(&["solve", "--chain", "3,2", "--side", "4", "--progress", "1000", "-q"]);
        assert_eq!(cmd.log_level(), LevelFilter::INFO);
        // Progress never lowers an explicitly higher verbosity.
        let cmd = parse(&["-vv", "solve", "--progress", "10"]);
        assert_eq!(cmd.log_level(), LevelFilter::DEBUG);
    }

    #[test]
    fn test_default_chain_when_no_source_given() {
        let cmd = parse(&["solve"]);
        let (chain, side) = load_chain(chain_args(&cmd)).unwrap();
        assert_eq!(chain.segments(), DEFAULT_CHAIN.as_slice());
        assert_eq!(side, 4);
    }

    #[test]
    fn test_chain_argument_with_derived_side() {
        let cmd = parse(&["solve", "--chain", "3,3,3,3,2,2,2,3,3,2,2,3,2,3,2,2,3"]);
        let (chain, side) = load_chain(chain_args(&cmd)).unwrap();
        assert_eq!(chain.len(), 17);
        assert_eq!(side, 3);
    }

    #[test]
    fn test_chain_argument_wins_over_file() {
        let file = chain_file("2 2 2 2 2 2 2");
        let args = ChainArgs {
            chain: Some("3,2".to_string()),
            chain_file: Some(file.path().to_path_buf()),
            side: Some(4),
        };
        let (chain, side) = load_chain(&args).unwrap();
        assert_eq!(chain.segments(), &[3, 2]);
        assert_eq!(side, 4);
    }

    #[test]
    fn test_chain_and_chain_file_conflict_on_command_line() {
        let result = Cmd::try_parse_from([
            "snake-cube",
            "solve",
            "--chain",
            "3,2",
            "--chain-file",
            "puzzle.json",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_chain_file_side_is_used() {
        let file = chain_file(r#"{"segments": [3, 2], "side": 4}"#);
        let path = file.path().to_str().unwrap();
        let cmd = parse(&["solve", "--chain-file", path]);
        let (chain, side) = load_chain(chain_args(&cmd)).unwrap();
        assert_eq!(chain.segments(), &[3, 2]);
        assert_eq!(side, 4);
    }

    #[test]
    fn test_side_argument_overrides_file() {
        let file = chain_file(r#"{"segments": [3, 2], "side": 4}"#);
        let path = file.path().to_str().unwrap();
        let cmd = parse(&["solve", "--chain-file", path, "--side", "6"]);
        let (_, side) = load_chain(chain_args(&cmd)).unwrap();
        assert_eq!(side, 6);
    }

    #[test]
    fn test_unknown_side_is_an_error() {
        let cmd = parse(&["check", "--chain", "3,2", ""]);
        assert!(load_chain(chain_args(&cmd)).is_err());
    }

    #[test]
    fn test_check_prepends_opening_moves() {
        let cmd = parse(&["check", "--chain", "3,2", "--side", "4", ""]);
        let moves = moves_to_replay(check_args(&cmd)).unwrap();
        assert_eq!(moves, SEED_MOVES.to_vec());

        let (chain, side) = load_chain(chain_args(&cmd)).unwrap();
        let summary = replay(&chain, side, &moves).unwrap();
        assert_eq!(summary.occupied, 4);
    }

    #[test]
    fn test_check_no_seed_uses_moves_as_given() {
        let cmd = parse(&["check", "--chain", "3,2", "--side", "4", "--no-seed", "+x+y"]);
        let moves = moves_to_replay(check_args(&cmd)).unwrap();
        assert_eq!(moves, SEED_MOVES.to_vec());

        let cmd = parse(&["check", "--chain", "3,2", "--side", "4", "--no-seed", ""]);
        assert!(moves_to_replay(check_args(&cmd)).unwrap().is_empty());
    }

    #[test]
    fn test_check_classic_solution_replays() {
        let cmd = parse(&[
            "check",
            "--chain",
            "3,3,3,3,2,2,2,3,3,2,2,3,2,3,2,2,3",
            "moves: -x+z+x-z+x-y-x+z+y-z+x+z-y+x+y",
        ]);
        let (chain, side) = load_chain(chain_args(&cmd)).unwrap();
        let moves = moves_to_replay(check_args(&cmd)).unwrap();
        assert_eq!(moves.len(), chain.len());
        let summary = replay(&chain, side, &moves).unwrap();
        assert_eq!(summary.occupied, 27);
    }
}
