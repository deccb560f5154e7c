//! Distance estimates used to order the A* frontier.
//!
//! A heuristic must never overestimate the remaining cost to the goal, otherwise
//! the planner may return a suboptimal path. The planner does not check this:
//! for [`ManhattanHeuristic`] it is up to the caller to pick coordinates whose
//! grid distance is a lower bound on the edge weights between them.

use serde::{Deserialize, Serialize};

use crate::errors::Result;
use crate::geometry::NodePositions;


/// Estimate of the cost from `node` to `goal`
/// Closures `Fn(usize, usize) -> u64` implement this too
pub trait Heuristic {
    fn estimate(&self, node: usize, goal: usize) -> u64;
}

impl<F> Heuristic for F
where
    F: Fn(usize, usize) -> u64,
{
    fn estimate(&self, node: usize, goal: usize) -> u64 {
        self(node, goal)
    }
}


/// Always 0, turns A* into uniform-cost search
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ZeroHeuristic;

impl Heuristic for ZeroHeuristic {
    fn estimate(&self, _node: usize, _goal: usize) -> u64 {
        0
    }
}


/// |dx| + |dy| between the positions of two nodes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ManhattanHeuristic {
    positions: NodePositions,
}

impl ManhattanHeuristic {
    pub fn new(positions: NodePositions) -> Self {
        Self { positions }
    }

    /// Positions from the default grid layout
    pub fn grid_layout(node_count: usize) -> Result<Self> {
        Ok(Self::new(NodePositions::grid_layout(node_count)?))
    }

    pub fn positions(&self) -> &NodePositions {
        &self.positions
    }
}

impl Heuristic for ManhattanHeuristic {
    fn estimate(&self, node: usize, goal: usize) -> u64 {
        // Unknown nodes get no guidance rather than a bogus estimate
        match (self.positions.get(node), self.positions.get(goal)) {
            (Some(a), Some(b)) => a.manhattan(b),
            _ => 0,
        }
    }
}


/// Heuristic selector used by configuration and the command line
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum HeuristicKind {
    #[default]
    Zero,
    Manhattan,
}
