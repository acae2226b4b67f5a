//! Connected regions of filled cells in a 0/1 grid.
//!
//! Cells are adjacent when they touch horizontally, vertically or diagonally.

use log::debug;
use std::collections::VecDeque;

use crate::cs::error::{Error, Result};

/// Row and column offsets of the eight neighbors, clockwise from north.
const NEIGHBORS: [(isize, isize); 8] = [
    (-1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
    (1, 0),
    (1, -1),
    (0, -1),
    (-1, -1),
];

/// Size of the largest 8-connected region of cells equal to `1`.
///
/// Any other cell value counts as empty. An empty grid has no regions and
/// yields 0.
///
/// # Errors
/// * `InvalidInput` if the rows do not all have the same length
///
/// # Examples
/// ```
/// use algos_paths::cs::graph::largest_region;
///
/// let grid = vec![
///     vec![1, 1, 0, 0],
///     vec![0, 1, 1, 0],
///     vec![0, 0, 1, 0],
///     vec![1, 0, 0, 0],
/// ];
/// assert_eq!(largest_region(&grid).unwrap(), 5);
/// ```
pub fn largest_region(grid: &[Vec<u8>]) -> Result<usize> {
    let rows = grid.len();
    let cols = grid.first().map_or(0, Vec::len);
    if let Some(row) = grid.iter().position(|r| r.len() != cols) {
        return Err(Error::invalid_input(format!(
            "grid row {} has {} cells, expected {}",
            row,
            grid[row].len(),
            cols
        )));
    }

    let mut visited = vec![vec![false; cols]; rows];
    let mut largest = 0;
    let mut regions = 0;
    for row in 0..rows {
        for col in 0..cols {
            if grid[row][col] == 1 && !visited[row][col] {
                regions += 1;
                largest = largest.max(scan_region(grid, &mut visited, row, col));
            }
        }
    }
    debug!(
        "largest_region: {}x{} grid, {} regions, largest {}",
        rows, cols, regions, largest
    );
    Ok(largest)
}

/// Flood-fills the region containing `(row, col)` and returns its size.
fn scan_region(grid: &[Vec<u8>], visited: &mut [Vec<bool>], row: usize, col: usize) -> usize {
    let rows = grid.len();
    let cols = grid[0].len();
    let mut queue = VecDeque::from([(row, col)]);
    visited[row][col] = true;
    let mut size = 0;

    while let Some((r, c)) = queue.pop_front() {
        size += 1;
        for (dr, dc) in NEIGHBORS {
            let (Some(nr), Some(nc)) = (r.checked_add_signed(dr), c.checked_add_signed(dc)) else {
                continue;
            };
            if nr < rows && nc < cols && grid[nr][nc] == 1 && !visited[nr][nc] {
                visited[nr][nc] = true;
                queue.push_back((nr, nc));
            }
        }
    }
    size
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_diagonal_cells_join_regions() {
        let grid = vec![
            vec![0, 0, 1, 1],
            vec![0, 0, 1, 0],
            vec![0, 1, 1, 0],
            vec![0, 1, 0, 0],
            vec![1, 1, 0, 0],
        ];
        assert_eq!(largest_region(&grid).unwrap(), 8);
    }

    #[test]
    fn test_picks_the_largest_of_several() {
        let grid = vec![
            vec![1, 0, 0, 1, 1],
            vec![0, 0, 0, 1, 1],
            vec![1, 1, 0, 0, 0],
        ];
        assert_eq!(largest_region(&grid).unwrap(), 4);
    }

    #[test]
    fn test_empty_and_blank_grids() {
        assert_eq!(largest_region(&[]).unwrap(), 0);
        assert_eq!(largest_region(&[vec![0, 0], vec![0, 0]]).unwrap(), 0);
        assert_eq!(largest_region(&[vec![], vec![]]).unwrap(), 0);
    }

    #[test]
    fn test_ragged_grid() {
        let grid = vec![vec![1, 0], vec![1]];
        assert!(matches!(
            largest_region(&grid),
            Err(Error::InvalidInput(_))
        ));
    }
}
