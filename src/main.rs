use std::fmt::Display;
use std::str::FromStr;

use anyhow::{Context, Result};
use clap::{ArgAction, Parser, Subcommand, ValueEnum};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use twisty::coord::FromCoordinate;
use twisty::cube122::Cube122;
use twisty::cube123::Cube123;
use twisty::cube222::{Cube222, StickerCube222};
use twisty::error::ParseMoveError;
use twisty::moves::MoveSequence;
use twisty::puzzle::{Puzzle, Solvable};
use twisty::solver::Solver;

#[derive(Parser)]
#[command(name = "twisty")]
#[command(about = "Optimal solver for the 1x2x2, 1x2x3 and 2x2x2 puzzles.")]
struct CommandLine {
    /// Log more, repeat for even more. RUST_LOG overrides this
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Find an optimal solution for a scrambled puzzle
    #[command(alias = "s")]
    Solve {
        puzzle: PuzzleKind,
        /// The moves that scrambled the puzzle, e.g. "R U2 F'"
        #[arg(default_value = "")]
        scramble: String,
        /// Read a 2x2x2 state from its 24 sticker colours instead
        #[arg(long, conflicts_with = "scramble")]
        stickers: Option<String>,
        /// Print every optimal solution
        #[arg(long)]
        all: bool,
    },
    /// Generate random state scrambles
    #[command(alias = "r")]
    Scramble {
        puzzle: PuzzleKind,
        #[arg(short = 'n', long, default_value_t = 1)]
        count: usize,
        /// Seed the generator to reproduce scrambles
        #[arg(long)]
        seed: Option<u64>,
    },
    /// Count the states at each distance from solved
    Stats { puzzle: PuzzleKind },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
enum PuzzleKind {
    #[value(name = "122")]
    Cube122,
    #[value(name = "123")]
    Cube123,
    #[value(name = "222")]
    Cube222,
}

impl CommandLine {
    fn parse_args() -> Self {
        Self::parse()
    }
}

fn init_tracing(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        2 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("twisty={level}").into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn main() -> Result<()> {
    let args = CommandLine::parse_args();
    init_tracing(args.verbose);

    match args.command {
        Commands::Solve {
            puzzle,
            scramble,
            stickers,
            all,
        } => match (puzzle, stickers) {
            (PuzzleKind::Cube222, Some(stickers)) => {
                let sticker_cube: StickerCube222 = stickers
                    .parse()
                    .with_context(|| format!("invalid stickers {stickers:?}"))?;
                let cube = Cube222::try_from(sticker_cube)
                    .with_context(|| format!("invalid stickers {stickers:?}"))?;
                solve_state(cube, all)
            }
            (_, Some(_)) => anyhow::bail!("--stickers is only supported for the 2x2x2"),
            (PuzzleKind::Cube122, None) => solve::<Cube122>(&scramble, all),
            (PuzzleKind::Cube123, None) => solve::<Cube123>(&scramble, all),
            (PuzzleKind::Cube222, None) => solve::<Cube222>(&scramble, all),
        },
        Commands::Scramble {
            puzzle,
            count,
            seed,
        } => match puzzle {
            PuzzleKind::Cube122 => scramble::<Cube122>(count, seed),
            PuzzleKind::Cube123 => scramble::<Cube123>(count, seed),
            PuzzleKind::Cube222 => scramble::<Cube222>(count, seed),
        },
        Commands::Stats { puzzle } => match puzzle {
            PuzzleKind::Cube122 => stats::<Cube122>(),
            PuzzleKind::Cube123 => stats::<Cube123>(),
            PuzzleKind::Cube222 => stats::<Cube222>(),
        },
    }
}

fn solve<P>(scramble: &str, all: bool) -> Result<()>
where
    P: Solvable + FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
    P::Move: Display + FromStr<Err = ParseMoveError>,
{
    let mvs: MoveSequence<P::Move> = scramble
        .parse()
        .with_context(|| format!("invalid {} scramble {scramble:?}", P::NAME))?;
    info!(puzzle = P::NAME, scramble = %mvs, "solving");
    solve_state(P::SOLVED.make_moves(mvs), all)
}

fn solve_state<P>(state: P, all: bool) -> Result<()>
where
    P: Solvable + FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
    P::Move: Display,
{
    let solver = Solver::<P>::new();
    let solutions = if all {
        solver.solve_all(&state)?
    } else {
        vec![solver.solve(&state)?]
    };

    info!(
        puzzle = P::NAME,
        solutions = solutions.len(),
        length = solutions.first().map_or(0, MoveSequence::len),
        "solved"
    );
    for solution in solutions {
        println!("{solution}");
    }
    Ok(())
}

fn scramble<P>(count: usize, seed: Option<u64>) -> Result<()>
where
    P: Solvable + FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
    P::Move: Display,
{
    let seed = seed.unwrap_or_else(rand::random);
    info!(puzzle = P::NAME, seed, count, "generating scrambles");
    let mut rng = StdRng::seed_from_u64(seed);

    let solver = Solver::<P>::new();
    for _ in 0..count {
        println!("{}", solver.scramble(&mut rng)?);
    }
    Ok(())
}

fn stats<P>() -> Result<()>
where
    P: Solvable + FromCoordinate<P::Perm> + FromCoordinate<P::Orient>,
{
    let solver = Solver::<P>::new();
    println!("{}", P::NAME);
    for (depth, states) in solver.depth_counts().iter().enumerate() {
        println!("{depth:>5} {states:>10}");
    }
    println!("total {:>10}", solver.state_count());
    Ok(())
}
