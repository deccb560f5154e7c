use std::{fmt, path::Path};

use super::AdjacencyMatrix;
use super::loader::read_source;
use crate::errors::{Error, Result};
use crate::geometry::{GridPosition, NodePositions};

/// Largest grid `to_graph` accepts: 64x64 cells, a 4096^2 slot matrix (~128 MiB)
pub const MAX_GRID_CELLS: usize = 4096;


/// Obstacle grid of free (`0`) and blocked (`1`) cells
/// Cell (row, col) becomes node `row * width + col`
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OccupancyGrid {
    width: usize,
    cells: Vec<bool>, // true = blocked
}

impl OccupancyGrid {

    /// Parse rows of 0/1 cells; whitespace between cells is optional, blank lines are skipped
    pub fn parse_str(data: &str) -> Result<Self> {
        let mut width = None;
        let mut cells = Vec::new();

        for (row, line) in data.lines().filter(|l| !l.trim().is_empty()).enumerate() {
            let mut row_len = 0;
            for (col, cell) in line.chars().filter(|c| !c.is_whitespace()).enumerate() {
                match cell {
                    '0' => cells.push(false),
                    '1' => cells.push(true),
                    _ => return Err(Error::InvalidGridCell { row, col, cell }),
                }
                row_len += 1;
            }

            match width {
                None => width = Some(row_len),
                Some(expected) if expected != row_len => {
                    return Err(Error::RaggedGrid {
                        row,
                        expected,
                        found: row_len,
                    });
                }
                Some(_) => {}
            }
        }

        match width {
            Some(width) if width > 0 => Ok(Self { width, cells }),
            _ => Err(Error::InvalidNodeCount),
        }
    }

    pub fn load(path: &Path) -> Result<Self> {
        let data = read_source(path)?;
        let grid = Self::parse_str(&data)?;
        tracing::info!(path = %path.display(), width = grid.width, height = grid.height(), "loaded occupancy grid");
        Ok(grid)
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.cells.len() / self.width
    }

    /// Node id of a cell
    pub fn node(&self, row: usize, col: usize) -> Option<usize> {
        (row < self.height() && col < self.width).then(|| row * self.width + col)
    }

    pub fn is_blocked(&self, row: usize, col: usize) -> bool {
        self.node(row, col).is_none_or(|node| self.cells[node])
    }

    /// 4-connected unit-cost graph over the free cells, plus each cell's position
    /// Blocked cells stay in the graph as isolated nodes so node ids match cell ids.
    /// Grids over [`MAX_GRID_CELLS`] cells are rejected with `Error::GridTooLarge`
    pub fn to_graph(&self) -> Result<(AdjacencyMatrix, NodePositions)> {
        if self.cells.len() > MAX_GRID_CELLS {
            return Err(Error::GridTooLarge {
                cells: self.cells.len(),
                limit: MAX_GRID_CELLS,
            });
        }
        let height = self.height();
        let mut matrix = AdjacencyMatrix::new(self.cells.len())?;
        let mut positions = Vec::with_capacity(self.cells.len());

        for row in 0..height {
            for col in 0..self.width {
                positions.push(GridPosition::new(col as i32, row as i32));
                if self.is_blocked(row, col) {
                    continue;
                }
                let from = row * self.width + col;

                let up = row.checked_sub(1).map(|r| (r, col));
                let down = Some((row + 1, col));
                let left = col.checked_sub(1).map(|c| (row, c));
                let right = Some((row, col + 1));

                for (r, c) in [up, down, left, right].into_iter().flatten() {
                    if !self.is_blocked(r, c) {
                        matrix.set_edge(from, r * self.width + c, 1)?;
                    }
                }
            }
        }

        Ok((matrix, NodePositions::new(positions)))
    }
}

impl fmt::Display for OccupancyGrid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in self.cells.chunks(self.width) {
            for &blocked in row {
                f.write_str(if blocked { "1" } else { "0" })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}
