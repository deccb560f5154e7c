//! Shared helpers for integration tests.

use astar_matrix::{AdjacencyMatrix, GridPosition, NodePositions};
use rand::{Rng, SeedableRng, rngs::StdRng};

#[allow(dead_code)]
/// Graph used by the worked examples
pub fn diamond() -> AdjacencyMatrix {
    AdjacencyMatrix::from_rows(&[
        [0, 1, 4, 0],
        [1, 0, 2, 5],
        [4, 2, 0, 1],
        [0, 5, 1, 0],
    ])
    .expect("valid matrix")
}

#[allow(dead_code)]
pub fn seeded_rng(seed: u64) -> StdRng {
    StdRng::seed_from_u64(seed)
}

#[allow(dead_code)]
/// Bellman-Ford shortest costs from `start`, None for unreachable nodes
pub fn bellman_ford(graph: &AdjacencyMatrix, start: usize) -> Vec<Option<u64>> {
    let n = graph.node_count();
    let mut dist = vec![None; n];
    dist[start] = Some(0u64);

    for _ in 0..n {
        let mut changed = false;
        for from in 0..n {
            let Some(base) = dist[from] else { continue };
            for (to, weight) in graph.neighbors(from) {
                let candidate = base + u64::from(weight);
                if dist[to].is_none_or(|d| candidate < d) {
                    dist[to] = Some(candidate);
                    changed = true;
                }
            }
        }
        if !changed {
            break;
        }
    }
    dist
}

#[allow(dead_code)]
/// Sum of edge weights along `path`, panics if an edge is missing
pub fn path_cost(graph: &AdjacencyMatrix, path: &[usize]) -> u64 {
    path.windows(2)
        .map(|pair| {
            u64::from(
                graph
                    .edge(pair[0], pair[1])
                    .unwrap_or_else(|| panic!("path uses missing edge {} -> {}", pair[0], pair[1])),
            )
        })
        .sum()
}

/// Random graph whose weights never undercut the Manhattan distance of their endpoints,
/// which keeps the Manhattan heuristic admissible and consistent
#[allow(dead_code)]
pub fn random_geometric_graph(rng: &mut StdRng, node_count: usize) -> (AdjacencyMatrix, NodePositions) {
    let positions = NodePositions::grid_layout(node_count).expect("non-empty");
    let mut graph = AdjacencyMatrix::new(node_count).expect("non-empty");

    for from in 0..node_count {
        for to in 0..node_count {
            if from == to || !rng.random_bool(0.3) {
                continue;
            }
            let a: &GridPosition = positions.get(from).expect("position");
            let b = positions.get(to).expect("position");
            let floor = a.manhattan(b) as u32;
            let weight = floor + rng.random_range(0..5);
            graph.set_edge(from, to, weight.max(1)).expect("in range");
        }
    }
    (graph, positions)
}
