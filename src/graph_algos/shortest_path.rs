use super::GraphNodeMap;

/// Construct the shortest path from the goal node back to the start node
/// Returns the ordered path as a vector of nodes from start to goal
/// node_map: GraphNodeMap<N, C> - map of nodes with their parent index and cost
/// goal_index: usize - index of the goal node in the node_map
/// The start node is the one whose parent index is usize::MAX
pub(crate) fn shortest_path<N, C>(node_map: &GraphNodeMap<N, C>, goal_index: usize) -> Option<Vec<N>>
where
    N: Clone,
{

    let mut path = Vec::new();
    let mut current_index = goal_index;

    // Trace back from goal to start
    while current_index != usize::MAX {
        let (node, &(parent_index, _)) = node_map.get_index(current_index)?;
        path.push(node.clone());
        current_index = parent_index;
    }

    path.reverse();
    (!path.is_empty()).then_some(path)
}

/// Walk predecessor links from `goal` until a node without a predecessor (the start)
/// Returns the nodes from start to goal inclusive
pub(crate) fn predecessor_path(predecessors: &[Option<usize>], goal: usize) -> Vec<usize> {
    let mut path = vec![goal];
    let mut current = goal;

    while let Some(previous) = predecessors[current] {
        path.push(previous);
        current = previous;
    }

    path.reverse();
    path
}
