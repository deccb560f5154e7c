use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};

use astar_matrix::HeuristicKind;

/// Shortest paths over adjacency matrices with A*
#[derive(Parser, Debug)]
#[command(name = "astar-matrix", version, about)]
pub struct Cli {
    /// TOML file with default settings (node_count, input, heuristic, positions)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Emit logs as JSON lines on stderr
    #[arg(long, global = true)]
    pub log_json: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Search a path in an adjacency matrix file
    Search(SearchArgs),
    /// Search a path across a 0/1 occupancy grid (at most 4096 cells)
    Grid(GridArgs),
    /// Write a random adjacency matrix file
    Generate(GenerateArgs),
    /// Print the settings in effect as TOML
    Config,
}

#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Adjacency matrix file [default: adjacency.txt]
    #[arg(long, short)]
    pub input: Option<PathBuf>,

    /// Number of nodes in the matrix [default: 20]
    #[arg(long, short = 'n')]
    pub node_count: Option<usize>,

    /// Start node; prompted for when omitted
    #[arg(long, short)]
    pub start: Option<usize>,

    /// Goal node; prompted for when omitted
    #[arg(long, short)]
    pub goal: Option<usize>,

    #[arg(long, value_enum)]
    pub heuristic: Option<HeuristicArg>,

    /// Coordinate file for the manhattan heuristic (x y per node)
    #[arg(long)]
    pub positions: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = Algorithm::AStar)]
    pub algorithm: Algorithm,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct GridArgs {
    /// Grid file, one row of 0 (free) / 1 (blocked) cells per line.
    /// Larger grids than 64x64 (4096 cells) are rejected
    #[arg(long, short)]
    pub input: PathBuf,

    /// Start cell as row,col
    #[arg(long, short, value_parser = parse_cell)]
    pub start: (usize, usize),

    /// Goal cell as row,col
    #[arg(long, short, value_parser = parse_cell)]
    pub goal: (usize, usize),

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Destination file
    #[arg(long, short)]
    pub output: PathBuf,

    #[arg(long, short = 'n', default_value_t = astar_matrix::config::DEFAULT_NODE_COUNT)]
    pub node_count: usize,

    /// Probability that any given edge exists
    #[arg(long, default_value_t = 0.2)]
    pub density: f64,

    #[arg(long, default_value_t = 10)]
    pub max_weight: u32,

    /// Seed for reproducible output
    #[arg(long)]
    pub seed: Option<u64>,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum HeuristicArg {
    Zero,
    Manhattan,
}

impl From<HeuristicArg> for HeuristicKind {
    fn from(arg: HeuristicArg) -> Self {
        match arg {
            HeuristicArg::Zero => HeuristicKind::Zero,
            HeuristicArg::Manhattan => HeuristicKind::Manhattan,
        }
    }
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum Algorithm {
    AStar,
    Dijkstra,
}

#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum OutputFormat {
    Text,
    Json,
}

fn parse_cell(value: &str) -> Result<(usize, usize), String> {
    let (row, col) = value
        .split_once(',')
        .ok_or_else(|| format!("expected row,col but got {value:?}"))?;
    let row = row.trim().parse().map_err(|e| format!("invalid row {row:?}: {e}"))?;
    let col = col.trim().parse().map_err(|e| format!("invalid column {col:?}: {e}"))?;
    Ok((row, col))
}
