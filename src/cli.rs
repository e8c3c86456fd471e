use anyhow::Result;
use clap::{Parser, ValueEnum};
use log::info;

use crate::stepper::{Direction, PermutationStepper};

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

/// Direction in which to step through the permutations
#[derive(Debug, Clone, ValueEnum)]
pub enum DirectionArg {
    /// Increasing lexicographic order
    Ascending,
    /// Decreasing lexicographic order
    Descending,
}

impl DirectionArg {
    pub fn to_direction(&self) -> Direction {
        match self {
            DirectionArg::Ascending => Direction::Ascending,
            DirectionArg::Descending => Direction::Descending,
        }
    }
}

/// Lexperm - List lexicographic permutations of a symbol sequence
#[derive(Parser, Debug)]
#[command(name = "lexperm")]
#[command(about = "List successive permutations of a symbol sequence in lexicographic order")]
#[command(version)]
pub struct CliArgs {
    /// Sequence of symbols to permute, taken as the starting arrangement
    pub sequence: String,

    /// Direction to step in (default: ascending)
    #[arg(short, long, value_enum, default_value = "ascending")]
    pub direction: DirectionArg,

    /// Log level (default: warn)
    #[arg(short, long, value_enum, default_value = "warn")]
    pub log_level: LogLevel,
}

/// Initialize logging based on the provided log level
pub fn init_logging(log_level: &LogLevel) -> Result<()> {
    env_logger::Builder::from_default_env()
        .filter_level(log_level.to_log_level_filter())
        .init();
    Ok(())
}

/// Run the main application logic
pub fn run() -> Result<()> {
    let args = CliArgs::parse();

    init_logging(&args.log_level)?;

    let direction = args.direction.to_direction();
    let mut stepper = PermutationStepper::new(args.sequence.chars().collect(), direction);

    info!(
        "Listing {:?} permutations starting from '{}'",
        direction, args.sequence
    );

    let mut count: usize = 1;
    println!("{}:{}", count, render(stepper.current()));
    while stepper.has_next() {
        stepper.advance();
        count += 1;
        println!("{}:{}", count, render(stepper.current()));
    }

    info!("Listed {} permutations", count);
    Ok(())
}

fn render(symbols: &[char]) -> String {
    symbols.iter().collect()
}
