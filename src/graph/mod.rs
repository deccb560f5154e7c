pub mod loader;
pub mod occupancy;

use std::{fmt, io::Write};

use rand::Rng;

use crate::errors::{Error, Result};

/// Weight of a single edge
pub type Cost = u32;


/// Dense directed graph stored as an N x N matrix of optional edge weights
///
/// The text format uses `0` for "no edge". In memory an absent edge is `None`,
/// so a genuine zero-cost edge can still be added with [`AdjacencyMatrix::set_edge`].
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AdjacencyMatrix {
    node_count: usize,
    edges: Vec<Option<Cost>>, // row-major, node_count * node_count
}

impl AdjacencyMatrix {

    /// Graph with `node_count` nodes and no edges
    pub fn new(node_count: usize) -> Result<Self> {
        let slots = slot_count(node_count)?;
        let mut edges = Vec::new();
        edges
            .try_reserve_exact(slots)
            .map_err(|_| Error::NodeCountTooLarge { node_count })?;
        edges.resize(slots, None);
        Ok(Self { node_count, edges })
    }

    /// Build from row-major weights where 0 means "no edge"
    /// Only the first node_count^2 weights are used
    pub fn from_weights(node_count: usize, weights: &[Cost]) -> Result<Self> {
        let expected = slot_count(node_count)?;
        if weights.len() < expected {
            return Err(Error::InsufficientData {
                expected,
                found: weights.len(),
            });
        }

        let mut matrix = Self::new(node_count)?;
        for (slot, &weight) in matrix.edges.iter_mut().zip(weights) {
            *slot = (weight != 0).then_some(weight);
        }
        Ok(matrix)
    }

    /// Build from square rows where 0 means "no edge"
    pub fn from_rows<const N: usize>(rows: &[[Cost; N]]) -> Result<Self> {
        if rows.len() != N {
            return Err(Error::NonSquareMatrix {
                rows: rows.len(),
                cols: N,
            });
        }
        let weights: Vec<Cost> = rows.iter().flatten().copied().collect();
        Self::from_weights(N, &weights)
    }

    /// Random directed graph, mostly useful to produce sample input files
    /// Each off-diagonal edge exists with probability `density` and weighs 1..=max_weight
    pub fn random<R: Rng + ?Sized>(node_count: usize, density: f64, max_weight: Cost, rng: &mut R) -> Result<Self> {
        let mut matrix = Self::new(node_count)?;
        let density = if density.is_nan() { 0.0 } else { density.clamp(0.0, 1.0) };
        let max_weight = max_weight.max(1);

        for from in 0..node_count {
            for to in 0..node_count {
                if from != to && rng.random_bool(density) {
                    matrix.edges[from * node_count + to] = Some(rng.random_range(1..=max_weight));
                }
            }
        }
        Ok(matrix)
    }

    pub fn node_count(&self) -> usize {
        self.node_count
    }

    pub fn contains_node(&self, node: usize) -> bool {
        node < self.node_count
    }

    /// Weight of the edge from -> to, if present
    pub fn edge(&self, from: usize, to: usize) -> Option<Cost> {
        if !self.contains_node(from) || !self.contains_node(to) {
            return None;
        }
        self.edges[from * self.node_count + to]
    }

    /// Add or replace an edge. A weight of 0 is a real zero-cost edge here
    pub fn set_edge(&mut self, from: usize, to: usize, weight: Cost) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.edges[from * self.node_count + to] = Some(weight);
        Ok(())
    }

    pub fn remove_edge(&mut self, from: usize, to: usize) -> Result<()> {
        self.check_node(from)?;
        self.check_node(to)?;
        self.edges[from * self.node_count + to] = None;
        Ok(())
    }

    /// Outgoing edges of `node` as (neighbor, weight)
    pub fn neighbors(&self, node: usize) -> impl Iterator<Item = (usize, Cost)> + '_ {
        let row = if self.contains_node(node) {
            &self.edges[node * self.node_count..(node + 1) * self.node_count]
        } else {
            &[][..]
        };
        row.iter()
            .enumerate()
            .filter_map(|(neighbor, weight)| weight.map(|w| (neighbor, w)))
    }

    /// Number of present edges
    pub fn edge_count(&self) -> usize {
        self.edges.iter().filter(|e| e.is_some()).count()
    }

    /// Reject node ids outside `[0, node_count)`
    pub fn check_node(&self, node: usize) -> Result<()> {
        if self.contains_node(node) {
            Ok(())
        } else {
            Err(Error::InvalidNodeIndex {
                index: node,
                node_count: self.node_count,
            })
        }
    }

    /// Write the matrix in the loader's text format, one row per line
    /// Absent edges are written as 0, so explicit zero-cost edges do not survive the trip
    pub fn write_to<W: Write>(&self, mut writer: W) -> Result<()> {
        write!(writer, "{self}")?;
        writer.flush()?;
        Ok(())
    }
}

/// Number of matrix slots for `node_count` nodes
pub(crate) fn slot_count(node_count: usize) -> Result<usize> {
    if node_count == 0 {
        return Err(Error::InvalidNodeCount);
    }
    node_count
        .checked_mul(node_count)
        .ok_or(Error::NodeCountTooLarge { node_count })
}

impl fmt::Display for AdjacencyMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.edges.chunks(self.node_count) {
            let mut first = true;
            for weight in row {
                if !first {
                    f.write_str(" ")?;
                }
                first = false;
                write!(f, "{}", weight.unwrap_or(0))?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;
    use rand::{SeedableRng, rngs::StdRng};

    #[test]
    fn test_from_rows_maps_zero_to_absent() {
        let matrix = AdjacencyMatrix::from_rows(&[[0, 3], [0, 0]]).unwrap();
        assert_eq!(matrix.node_count(), 2);
        assert_eq!(matrix.edge(0, 1), Some(3));
        assert_eq!(matrix.edge(1, 0), None);
        assert_eq!(matrix.edge(0, 0), None);
        assert_eq!(matrix.edge_count(), 1);
    }

    #[test]
    fn test_from_rows_rejects_non_square() {
        assert!(matches!(
            AdjacencyMatrix::from_rows(&[[0, 1, 2], [1, 0, 2]]),
            Err(Error::NonSquareMatrix { rows: 2, cols: 3 })
        ));
    }

    #[test]
    fn test_empty_matrix_is_rejected() {
        assert!(matches!(AdjacencyMatrix::new(0), Err(Error::InvalidNodeCount)));
    }

    #[test]
    fn test_oversized_matrix_is_rejected() {
        // node_count^2 overflows usize
        assert!(matches!(
            AdjacencyMatrix::new(usize::MAX / 2),
            Err(Error::NodeCountTooLarge { .. })
        ));
        // fits usize but not the address space
        assert!(matches!(
            AdjacencyMatrix::new(1usize << (usize::BITS / 2 - 1)),
            Err(Error::NodeCountTooLarge { .. })
        ));
        assert!(matches!(
            AdjacencyMatrix::from_weights(usize::MAX / 2, &[0, 1, 1, 0]),
            Err(Error::NodeCountTooLarge { .. })
        ));
    }

    #[test]
    fn test_set_edge_allows_zero_weight() {
        let mut matrix = AdjacencyMatrix::new(3).unwrap();
        matrix.set_edge(0, 2, 0).unwrap();
        assert_eq!(matrix.edge(0, 2), Some(0));
        assert_eq!(matrix.neighbors(0).collect::<Vec<_>>(), vec![(2, 0)]);

        matrix.remove_edge(0, 2).unwrap();
        assert_eq!(matrix.edge(0, 2), None);
    }

    #[test]
    fn test_set_edge_out_of_range() {
        let mut matrix = AdjacencyMatrix::new(2).unwrap();
        assert!(matches!(
            matrix.set_edge(0, 2, 1),
            Err(Error::InvalidNodeIndex { index: 2, node_count: 2 })
        ));
    }

    #[test]
    fn test_neighbors_lists_outgoing_edges_only() {
        let matrix = AdjacencyMatrix::from_rows(&[[0, 1, 4], [0, 0, 2], [7, 0, 0]]).unwrap();
        assert_eq!(matrix.neighbors(0).collect::<Vec<_>>(), vec![(1, 1), (2, 4)]);
        assert_eq!(matrix.neighbors(2).collect::<Vec<_>>(), vec![(0, 7)]);
        assert_eq!(matrix.neighbors(9).count(), 0);
    }

    #[test]
    fn test_display_format() {
        let matrix = AdjacencyMatrix::from_rows(&[[0, 5], [2, 0]]).unwrap();
        assert_eq!(matrix.to_string(), "0 5\n2 0\n");
    }

    #[test]
    fn test_random_has_empty_diagonal_and_bounded_weights() {
        let mut rng = StdRng::seed_from_u64(7);
        let matrix = AdjacencyMatrix::random(12, 0.5, 9, &mut rng).unwrap();
        for node in 0..12 {
            assert_eq!(matrix.edge(node, node), None);
            for (_, weight) in matrix.neighbors(node) {
                assert!((1..=9).contains(&weight));
            }
        }
    }

    #[test]
    fn test_random_density_extremes() {
        let mut rng = StdRng::seed_from_u64(1);
        let empty = AdjacencyMatrix::random(5, 0.0, 3, &mut rng).unwrap();
        assert_eq!(empty.edge_count(), 0);
        let full = AdjacencyMatrix::random(5, 1.0, 3, &mut rng).unwrap();
        assert_eq!(full.edge_count(), 20);
    }
}
