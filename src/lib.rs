//! Shortest paths over dense, directed adjacency matrices with A*.
//!
//! ```
//! use astar_matrix::{AStar, AdjacencyMatrix, PathResult, ZeroHeuristic};
//!
//! let graph = AdjacencyMatrix::from_rows(&[
//!     [0, 1, 4, 0],
//!     [1, 0, 2, 5],
//!     [4, 2, 0, 1],
//!     [0, 5, 1, 0],
//! ]).unwrap();
//!
//! let result = AStar::new().search(&graph, &ZeroHeuristic, 0, 3).unwrap();
//! assert_eq!(result, PathResult::Found { path: vec![0, 1, 2, 3], cost: 4 });
//! ```

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod heuristic;

pub use config::Config;
pub use errors::{Error, Result};
pub use geometry::{GridPosition, NodePositions};
pub use graph::{AdjacencyMatrix, Cost};
pub use graph::loader::{load_matrix, parse_matrix_reader, parse_matrix_str};
pub use graph::occupancy::OccupancyGrid;
pub use graph_algos::PathResult;
pub use graph_algos::a_star::AStar;
pub use graph_algos::dijkstra::shortest_path_dijkstra;
pub use heuristic::{Heuristic, HeuristicKind, ManhattanHeuristic, ZeroHeuristic};
