use std::path::PathBuf;

use thiserror::Error;

/// Result alias used across the crate
pub type Result<T> = std::result::Result<T, Error>;

/// Everything the loader, the geometry helpers and the planners can fail with.
/// A search that exhausts the frontier is not an error, see `PathResult::NotFound`.
#[derive(Debug, Error)]
pub enum Error {
    /// The input file could not be opened or read
    #[error("could not read {path}")]
    SourceUnavailable {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Fewer numeric tokens than the requested shape needs
    #[error("not enough numbers found: expected {expected}, found {found}")]
    InsufficientData { expected: usize, found: usize },

    /// Edge weights must be non-negative
    #[error("negative edge weight {value} at row {row}, column {col}")]
    NegativeWeight { row: usize, col: usize, value: i64 },

    #[error("node count must be at least 1")]
    InvalidNodeCount,

    /// node_count^2 matrix slots overflow or cannot be allocated
    #[error("node count {node_count} is too large for a dense matrix")]
    NodeCountTooLarge { node_count: usize },

    #[error("matrix has {rows} rows of {cols} weights, expected a square matrix")]
    NonSquareMatrix { rows: usize, cols: usize },

    /// Start or goal outside `[0, node_count)`
    #[error("node index {index} is out of range (0-{})", node_count.saturating_sub(1))]
    InvalidNodeIndex { index: usize, node_count: usize },

    /// Position table does not cover every node of the graph
    #[error("expected {expected} node positions, found {found}")]
    PositionCountMismatch { expected: usize, found: usize },

    #[error("grid row {row} has {found} cells, expected {expected}")]
    RaggedGrid {
        row: usize,
        expected: usize,
        found: usize,
    },

    #[error("invalid grid cell {cell:?} at row {row}, column {col}")]
    InvalidGridCell { row: usize, col: usize, cell: char },

    /// Grids become dense matrices of cells^2 slots, so their size is capped
    #[error("grid has {cells} cells, at most {limit} are supported")]
    GridTooLarge { cells: usize, limit: usize },

    #[error("malformed configuration in {path}: {message}")]
    Config { path: PathBuf, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
