use std::{
    io::{BufRead, Cursor},
    path::Path,
};

use num_traits::{Num, Signed};
use serde::{Deserialize, Serialize};

use crate::errors::{Error, Result};
use crate::graph::loader::{numeric_values, read_source};


/// Manhattan distance
pub fn manhattan_distance<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Num + Copy + Signed,
    {
    (x1 - x2).abs() + (y1 - y2).abs()
}


/// 2D integer position of a node
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GridPosition {
    pub x: i32,
    pub y: i32,
}

impl GridPosition {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// |dx| + |dy|, widened so extreme coordinates cannot overflow
    pub fn manhattan(&self, other: &GridPosition) -> u64 {
        manhattan_distance(
            i64::from(self.x),
            i64::from(self.y),
            i64::from(other.x),
            i64::from(other.y),
        )
        .unsigned_abs()
    }
}


/// Position table indexed by node id
/// Built once and never mutated, so it can be shared freely between searches
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NodePositions {
    positions: Vec<GridPosition>,
}

impl NodePositions {

    /// Use an explicit list of positions, one per node
    pub fn new(positions: Vec<GridPosition>) -> Self {
        Self { positions }
    }

    /// Lay nodes out row by row on a square-ish grid
    /// grid_size = floor(sqrt(n)), x = index % grid_size, y = index / grid_size
    pub fn grid_layout(node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidNodeCount);
        }
        let grid_size = node_count.isqrt();

        let positions = (0..node_count)
            .map(|index| {
                GridPosition::new((index % grid_size) as i32, (index / grid_size) as i32)
            })
            .collect();

        Ok(Self { positions })
    }

    /// Read `node_count` (x, y) pairs from a reader
    /// Uses the same tolerant tokenisation as the matrix loader
    pub fn from_reader<R: BufRead>(reader: R, node_count: usize) -> Result<Self> {
        if node_count == 0 {
            return Err(Error::InvalidNodeCount);
        }
        let expected = node_count
            .checked_mul(2)
            .ok_or(Error::NodeCountTooLarge { node_count })?;
        let values = numeric_values(reader)?;
        if values.len() < expected {
            return Err(Error::InsufficientData {
                expected,
                found: values.len(),
            });
        }

        let positions = values[..expected]
            .chunks_exact(2)
            .map(|pair| GridPosition::new(pair[0] as i32, pair[1] as i32))
            .collect();

        Ok(Self { positions })
    }

    /// Read a coordinate file, see [`NodePositions::from_reader`]
    pub fn load(path: &Path, node_count: usize) -> Result<Self> {
        let data = read_source(path)?;
        let positions = Self::from_reader(Cursor::new(data), node_count)?;
        tracing::debug!(path = %path.display(), node_count, "loaded node positions");
        Ok(positions)
    }

    pub fn get(&self, node: usize) -> Option<&GridPosition> {
        self.positions.get(node)
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// Ensure the table covers exactly `node_count` nodes
    pub fn check_covers(&self, node_count: usize) -> Result<()> {
        if self.positions.len() != node_count {
            return Err(Error::PositionCountMismatch {
                expected: node_count,
                found: self.positions.len(),
            });
        }
        Ok(())
    }
}


#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_manhattan_distance() {
        assert_eq!(manhattan_distance(0, 0, 3, 4), 7);
        assert_eq!(manhattan_distance(-2, 5, 1, -1), 9);
    }

    #[test]
    fn test_grid_layout_for_twenty_nodes() {
        // floor(sqrt(20)) = 4
        let positions = NodePositions::grid_layout(20).unwrap();
        assert_eq!(positions.len(), 20);
        assert_eq!(positions.get(0), Some(&GridPosition::new(0, 0)));
        assert_eq!(positions.get(3), Some(&GridPosition::new(3, 0)));
        assert_eq!(positions.get(4), Some(&GridPosition::new(0, 1)));
        assert_eq!(positions.get(19), Some(&GridPosition::new(3, 4)));
    }

    #[test]
    fn test_grid_layout_single_node() {
        let positions = NodePositions::grid_layout(1).unwrap();
        assert_eq!(positions.get(0), Some(&GridPosition::new(0, 0)));
    }

    #[test]
    fn test_grid_layout_rejects_zero_nodes() {
        assert!(matches!(NodePositions::grid_layout(0), Err(Error::InvalidNodeCount)));
    }

    #[test]
    fn test_positions_from_reader() {
        let data = "0 0\n1 0\n# comment\n1 1 9 9";
        let positions = NodePositions::from_reader(Cursor::new(data), 3).unwrap();
        assert_eq!(positions.len(), 3);
        assert_eq!(positions.get(2), Some(&GridPosition::new(1, 1)));
    }

    #[test]
    fn test_positions_from_reader_too_short() {
        let result = NodePositions::from_reader(Cursor::new("0 0 1"), 2);
        assert!(matches!(result, Err(Error::InsufficientData { expected: 4, found: 3 })));

        let result = NodePositions::from_reader(Cursor::new("0 0"), usize::MAX);
        assert!(matches!(result, Err(Error::NodeCountTooLarge { .. })));
    }

    #[test]
    fn test_check_covers() {
        let positions = NodePositions::grid_layout(4).unwrap();
        assert!(positions.check_covers(4).is_ok());
        assert!(matches!(
            positions.check_covers(5),
            Err(Error::PositionCountMismatch { expected: 5, found: 4 })
        ));
    }
}
