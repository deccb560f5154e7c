pub mod dijkstra;
pub mod a_star;
mod shortest_path;

use serde::{Serialize, Serializer};
use shortest_path::{predecessor_path, shortest_path};

use crate::collections::FxIndexMap;

/// Type alias for the node map used by the generic Dijkstra planner
/// N: Node - space on a graph
/// C: Cost of reaching the node from the start
/// The tuple contains (parent_index, cost) where:
/// - parent_index is the index of the parent node in the map
/// - cost is the total cost to reach this node from the start
pub type GraphNodeMap<N, C> = FxIndexMap<N, (usize, C)>;


/// Outcome of a search between two nodes
/// Exhausting the graph without reaching the goal is a normal result, not an error
/// Serialises as `{"found":true,"path":[..],"cost":n}` or `{"found":false}`
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PathResult {
    /// Nodes from start to goal inclusive and the summed edge weight
    Found { path: Vec<usize>, cost: u64 },
    NotFound,
}

impl PathResult {
    pub fn is_found(&self) -> bool {
        matches!(self, PathResult::Found { .. })
    }

    pub fn path(&self) -> Option<&[usize]> {
        match self {
            PathResult::Found { path, .. } => Some(path),
            PathResult::NotFound => None,
        }
    }

    pub fn cost(&self) -> Option<u64> {
        match self {
            PathResult::Found { cost, .. } => Some(*cost),
            PathResult::NotFound => None,
        }
    }
}

#[derive(Serialize)]
struct PathResultRecord<'a> {
    found: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    path: Option<&'a [usize]>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cost: Option<u64>,
}

impl Serialize for PathResult {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        PathResultRecord {
            found: self.is_found(),
            path: self.path(),
            cost: self.cost(),
        }
        .serialize(serializer)
    }
}
