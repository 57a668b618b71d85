use std::io::{self, Read, Write};

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use countdown::{
    CountdownSolver, Expression, Puzzle, SolverConfig, Strategy, Value, parse_input, render,
    validate_puzzle,
};
use log::{info, warn};

/// Log level for the application
#[derive(Debug, Clone, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn to_log_level_filter(&self) -> log::LevelFilter {
        match self {
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        }
    }
}

/// Search strategy selectable from the command line
#[derive(Debug, Clone, ValueEnum)]
pub enum StrategyArg {
    /// Generate every expression, then evaluate
    Naive,
    /// Prune while generating, skipping equivalent expressions
    Optimized,
}

impl StrategyArg {
    pub fn to_strategy(&self) -> Strategy {
        match self {
            StrategyArg::Naive => Strategy::Naive,
            StrategyArg::Optimized => Strategy::Optimized,
        }
    }
}

/// Countdown - Solve the Countdown numbers game
#[derive(Parser, Debug)]
#[command(name = "countdown")]
#[command(about = "Print every arithmetic expression over the given numbers that equals the target")]
#[command(version)]
pub struct CliArgs {
    /// Target value; when omitted the target and numbers are read from stdin
    pub target: Option<Value>,

    /// Numbers available to build expressions from
    pub numbers: Vec<Value>,

    /// Search strategy
    #[arg(short, long, value_enum, default_value = "optimized")]
    pub strategy: StrategyArg,

    /// Stop after this many solutions
    #[arg(short = 'n', long)]
    pub limit: Option<usize>,

    /// Search subbags on all cores (collects every solution before printing)
    #[arg(short, long)]
    pub parallel: bool,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Configuration for the CLI application
pub struct CliConfig {
    pub target: Option<Value>,
    pub numbers: Vec<Value>,
    pub strategy: Strategy,
    pub limit: Option<usize>,
    pub parallel: bool,
    pub log_level: LogLevel,
}

impl From<CliArgs> for CliConfig {
    fn from(args: CliArgs) -> Self {
        Self {
            target: args.target,
            numbers: args.numbers,
            strategy: args.strategy.to_strategy(),
            limit: args.limit,
            parallel: args.parallel,
            log_level: args.log_level,
        }
    }
}

/// Parse command line arguments and return configuration
pub fn parse_args() -> Result<CliConfig> {
    let args = CliArgs::parse();
    Ok(CliConfig::from(args))
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .try_init()
        .context("Failed to initialize logging")?;
    Ok(())
}

/// Take the puzzle from the arguments, or from stdin when no target was given
pub fn load_puzzle(config: &CliConfig) -> Result<Puzzle> {
    let puzzle = match config.target {
        Some(target) => Puzzle {
            target,
            numbers: config.numbers.clone(),
        },
        None => {
            info!("No target argument, reading puzzle from stdin");
            let mut text = String::new();
            io::stdin()
                .read_to_string(&mut text)
                .context("Failed to read puzzle from stdin")?;
            parse_input(&text).context("Invalid puzzle input")?
        }
    };

    validate_puzzle(&puzzle).context("Invalid puzzle")?;
    Ok(puzzle)
}

/// Summary sentence printed after the solutions
pub fn describe_count(count: usize) -> String {
    match count {
        0 => "no solutions".to_string(),
        1 => "the only solution".to_string(),
        n => format!("{} solutions", n),
    }
}

/// Write up to `limit` solutions, one per line, and return how many were written
///
/// When the limit is reached, one more solution is searched for so that a
/// truncated listing can be reported.
pub fn print_solutions<I, W>(solutions: I, limit: Option<usize>, out: &mut W) -> Result<usize>
where
    I: IntoIterator<Item = Expression>,
    W: Write,
{
    let mut solutions = solutions.into_iter();
    let mut count = 0;
    for expr in solutions.by_ref().take(limit.unwrap_or(usize::MAX)) {
        writeln!(out, "{}", render(&expr)).context("Failed to write solution")?;
        count += 1;
    }

    if limit == Some(count) && solutions.next().is_some() {
        warn!("Stopped after {} solutions, more exist", count);
    }
    Ok(count)
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let config = parse_args()?;

    // Initialize logging
    init_logging(&config.log_level)?;

    let puzzle = load_puzzle(&config)?;
    let solver = CountdownSolver::with_config(SolverConfig {
        strategy: config.strategy,
    });

    info!(
        "Searching for expressions using {:?} that equal {}",
        puzzle.numbers, puzzle.target
    );

    let stdout = io::stdout();
    let mut out = stdout.lock();
    let count = if config.parallel {
        let solutions = solver.solve_parallel(&puzzle.numbers, puzzle.target);
        print_solutions(solutions, config.limit, &mut out)?
    } else {
        let solutions = solver.solve(&puzzle.numbers, puzzle.target);
        print_solutions(solutions, config.limit, &mut out)?
    };

    writeln!(out, "{}", describe_count(count)).context("Failed to write summary")?;
    Ok(())
}
