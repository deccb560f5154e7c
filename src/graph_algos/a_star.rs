use crate::errors::Result;
use crate::graph::AdjacencyMatrix;
use crate::heuristic::Heuristic;
use super::{PathResult, predecessor_path};

use std::{
    collections::BinaryHeap,
    cmp::Ordering
};


/// Frontier entry
#[derive(Debug)]
struct Node {
    index: usize, // node id in the matrix
    f_cost: u64, // Total cost = cost + h(n) aka estimated cost
}

impl Ord for Node {
    fn cmp(&self, other: &Self) -> Ordering {
        other.f_cost.cmp(&self.f_cost)
    }
}
impl PartialOrd for Node {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for Node {
    fn eq(&self, other: &Self) -> bool {
        self.f_cost == other.f_cost
    }
}
impl Eq for Node {}


/// Per-search bookkeeping, one slot per node
/// Lives only for the duration of a single `search` call
struct SearchState {
    cost_from_start: Vec<Option<u64>>, // None = not reached yet (infinite)
    estimated_total_cost: Vec<Option<u64>>,
    predecessor: Vec<Option<usize>>,
    closed: Vec<bool>,
}

impl SearchState {
    fn new(node_count: usize) -> Self {
        Self {
            cost_from_start: vec![None; node_count],
            estimated_total_cost: vec![None; node_count],
            predecessor: vec![None; node_count],
            closed: vec![false; node_count],
        }
    }
}


/// A* Algorithm over a dense adjacency matrix
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// Stateless: every call to [`AStar::search`] owns its own state, so one planner
/// (and one graph) can serve any number of searches, including from several threads.
#[derive(Clone, Copy, Debug, Default)]
pub struct AStar {}

impl AStar {

    pub fn new() -> Self {
        Self {}
    }

    /// Find a cheapest path from `start` to `goal`
    /// The result is optimal when:
    /// 1. The heuristic is admissible and consistent (never overestimates, obeys the triangle inequality)
    /// 2. Edge weights are non-negative, which the matrix type guarantees
    ///
    /// Out of range node ids are rejected with `Error::InvalidNodeIndex`.
    /// An unreachable goal is `PathResult::NotFound`
    pub fn search<H>(&self, graph: &AdjacencyMatrix, heuristic: &H, start: usize, goal: usize) -> Result<PathResult>
    where
        H: Heuristic + ?Sized,
    {
        graph.check_node(start)?;
        graph.check_node(goal)?;

        let mut state = SearchState::new(graph.node_count());

        // Open List
        // Nodes that need to be evaluated, implemented as priority queue sorted by f_cost
        // Entries are never updated in place; an improved cost pushes a new entry
        // and the stale one is dropped when popped after its node was closed
        let mut open_list: BinaryHeap<Node> = BinaryHeap::new();

        let start_estimate = heuristic.estimate(start, goal);
        state.cost_from_start[start] = Some(0);
        state.estimated_total_cost[start] = Some(start_estimate);
        open_list.push(Node {
            index: start,
            f_cost: start_estimate,
        });

        let mut expanded = 0usize;

        while let Some(Node { index: current, .. }) = open_list.pop() {

            // stale duplicate of a node we already finalised
            if state.closed[current] {
                continue;
            }
            state.closed[current] = true;
            expanded += 1;

            // cost of a popped node is always known
            let Some(current_cost) = state.cost_from_start[current] else {
                continue;
            };
            tracing::trace!(node = current, cost = current_cost, estimate = ?state.estimated_total_cost[current], "expanding node");

            // Check if we've reached the goal
            if current == goal {
                let path = predecessor_path(&state.predecessor, goal);
                tracing::debug!(start, goal, cost = current_cost, hops = path.len() - 1, expanded, "path found");
                return Ok(PathResult::Found {
                    path,
                    cost: current_cost,
                });
            }

            // relax every outgoing edge into a node that is still open
            for (neighbor, edge_cost) in graph.neighbors(current) {
                if state.closed[neighbor] {
                    continue;
                }

                // new cost to reach this node = edge cost + node cost
                let tentative = current_cost + u64::from(edge_cost);

                let improves = state.cost_from_start[neighbor].is_none_or(|known| tentative < known);
                if !improves {
                    continue;
                }

                let f_cost = tentative + heuristic.estimate(neighbor, goal);
                state.predecessor[neighbor] = Some(current);
                state.cost_from_start[neighbor] = Some(tentative);
                state.estimated_total_cost[neighbor] = Some(f_cost);

                open_list.push(Node {
                    index: neighbor,
                    f_cost,
                });
            }
        }

        tracing::debug!(start, goal, expanded, "no path found");
        Ok(PathResult::NotFound)
    }
}
