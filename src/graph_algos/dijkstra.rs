use crate::errors::Result;
use crate::graph::AdjacencyMatrix;
use super::{GraphNodeMap, PathResult, shortest_path};

use std::{collections::BinaryHeap, hash::Hash, cmp::Ordering, fmt::Debug};
use num_traits::Zero;
use indexmap::map::Entry::{Occupied, Vacant};


/// Dijkstra's algorithm over a neighbour closure
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Returns the path from `start` to the first node accepted by `goal` and its cost,
/// None when no reachable node qualifies
pub fn dijkstra<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> Option<(Vec<N>, C)>
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
    {

    let (settled, goal_index) = settle(start, neighbors, goal);

    let goal_index = goal_index?;
    let (_, &(_, cost)) = settled.get_index(goal_index)?;
    let path = shortest_path(&settled, goal_index)?;
    Some((path, cost))
}


/// Uniform-cost search over an adjacency matrix
/// Same contract as `AStar::search` with a zero heuristic, computed independently
pub fn shortest_path_dijkstra(graph: &AdjacencyMatrix, start: usize, goal: usize) -> Result<PathResult> {
    graph.check_node(start)?;
    graph.check_node(goal)?;

    let neighbors = |node: &usize| {
        graph
            .neighbors(*node)
            .map(|(neighbor, weight)| (neighbor, u64::from(weight)))
            .collect::<Vec<_>>()
    };

    let result = match dijkstra(start, neighbors, |node| *node == goal) {
        Some((path, cost)) => PathResult::Found { path, cost },
        None => PathResult::NotFound,
    };
    tracing::debug!(start, goal, found = result.is_found(), "dijkstra finished");
    Ok(result)
}


/// Reference search used to cross-check `AStar::search` and behind `--algorithm dijkstra`.
/// Shares nothing with the A* engine: nodes are keyed in an index map instead of
/// per-node arrays, and outdated heap entries are recognised by comparing costs
/// rather than by a closed flag.
///
/// Returns every node reached so far as (parent index, best cost) along with the
/// map index of the goal, if one was settled
fn settle<N, C, IT, NN, G>(start: N, neighbors: NN, goal: G) -> (GraphNodeMap<N, C>, Option<usize>)
where
    N: Eq + Hash + Clone + Debug,
    NN: Fn(&N) -> IT,
    IT: IntoIterator<Item = (N, C)>,
    C: Zero + Ord + Copy + Debug,
    G: Fn(&N) -> bool,
    {

    // the start node has no parent, marked by usize::MAX
    let mut reached: GraphNodeMap<N, C> = GraphNodeMap::default();
    let (start_index, _) = reached.insert_full(start, (usize::MAX, C::zero()));

    let mut frontier = BinaryHeap::from([NodeId { index: start_index, cost: C::zero() }]);

    while let Some(NodeId { index, cost }) = frontier.pop() {
        let Some((node, &(_, best))) = reached.get_index(index) else {
            continue;
        };
        // a cheaper entry for this node was already handled
        if cost > best {
            continue;
        }
        if goal(node) {
            return (reached, Some(index));
        }

        for (neighbor, edge_cost) in neighbors(node) {
            let candidate = best + edge_cost;
            let neighbor_index = match reached.entry(neighbor) {
                Vacant(slot) => {
                    let i = slot.index();
                    slot.insert((index, candidate));
                    i
                }
                Occupied(mut slot) if candidate < slot.get().1 => {
                    slot.insert((index, candidate));
                    slot.index()
                }
                Occupied(_) => continue,
            };
            frontier.push(NodeId { index: neighbor_index, cost: candidate });
        }
    }

    (reached, None)
}


/// Heap entry, ordered by cost only (reversed, so the heap pops the cheapest)
#[derive(Debug)]
struct NodeId<T> {
    index: usize,
    cost: T
}

impl<T: Ord> Ord for NodeId<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        other.cost.cmp(&self.cost)
    }
}
impl<T: Ord> PartialOrd for NodeId<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl<T: PartialEq> PartialEq for NodeId<T> {
    fn eq(&self, other: &Self) -> bool {
        self.cost == other.cost
    }
}
impl<T: PartialEq> Eq for NodeId<T> {}
