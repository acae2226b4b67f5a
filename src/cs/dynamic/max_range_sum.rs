use log::debug;
use ndarray::Array2;

use crate::cs::error::{Error, Result};

/// A contiguous range and its sum. Bounds are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RangeSum {
    pub sum: i64,
    pub start: usize,
    pub end: usize,
}

/// A rectangular block of a matrix and its sum. Corners are inclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubMatrixSum {
    pub sum: i64,
    pub top: usize,
    pub left: usize,
    pub bottom: usize,
    pub right: usize,
}

/// Kadane's algorithm: the contiguous range of `values` with the largest
/// sum.
///
/// If the input slice is empty, returns `None`. When every value is
/// negative the answer is the largest single element. Ties keep the range
/// found first.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::max_range_sum::max_subarray;
///
/// let best = max_subarray(&[4, -5, 4, -3, 4, 4, -4, 4, -5]).unwrap();
/// assert_eq!((best.sum, best.start, best.end), (9, 2, 5));
/// ```
pub fn max_subarray(values: &[i64]) -> Option<RangeSum> {
    let (&first, rest) = values.split_first()?;
    let mut best = RangeSum {
        sum: first,
        start: 0,
        end: 0,
    };
    let mut current = first;
    let mut start = 0;

    for (offset, &val) in rest.iter().enumerate() {
        let j = offset + 1;
        // Either extend the current range or start a new one at `val`
        if current < 0 {
            current = val;
            start = j;
        } else {
            current += val;
        }
        if current > best.sum {
            best = RangeSum {
                sum: current,
                start,
                end: j,
            };
        }
    }
    Some(best)
}

/// Cumulative sums where `table[[i, j]]` holds the sum of the block
/// `(0, 0)..(i - 1, j - 1)`. The zero border avoids edge cases in queries.
struct PrefixSums {
    table: Array2<i64>,
}

impl PrefixSums {
    fn new(matrix: &[Vec<i64>]) -> Result<Self> {
        let rows = matrix.len();
        let cols = matrix.first().map_or(0, Vec::len);
        if let Some(row) = matrix.iter().position(|r| r.len() != cols) {
            return Err(Error::invalid_input(format!(
                "matrix row {} has {} entries, expected {}",
                row,
                matrix[row].len(),
                cols
            )));
        }
        let mut table = Array2::zeros((rows + 1, cols + 1));
        for i in 0..rows {
            for j in 0..cols {
                table[[i + 1, j + 1]] =
                    matrix[i][j] + table[[i, j + 1]] + table[[i + 1, j]] - table[[i, j]];
            }
        }
        Ok(Self { table })
    }

    fn rows(&self) -> usize {
        self.table.nrows() - 1
    }

    fn cols(&self) -> usize {
        self.table.ncols() - 1
    }

    /// Sum of the inclusive block `(top, left)..=(bottom, right)` in O(1).
    fn block(&self, top: usize, left: usize, bottom: usize, right: usize) -> i64 {
        let t = &self.table;
        t[[bottom + 1, right + 1]] - t[[top, right + 1]] - t[[bottom + 1, left]] + t[[top, left]]
    }
}

fn keep_larger(best: &mut Option<SubMatrixSum>, candidate: SubMatrixSum) {
    if best.map_or(true, |b| candidate.sum > b.sum) {
        *best = Some(candidate);
    }
}

/// The sub-matrix with the largest sum.
///
/// Every block is queried in O(1) through a prefix-sum table, so the whole
/// search is O(rows² · cols²). An empty matrix yields `Ok(None)`.
///
/// # Errors
/// * `InvalidInput` if the rows have different lengths
pub fn max_submatrix(matrix: &[Vec<i64>]) -> Result<Option<SubMatrixSum>> {
    let sums = PrefixSums::new(matrix)?;
    let (rows, cols) = (sums.rows(), sums.cols());
    let mut best = None;
    for top in 0..rows {
        for left in 0..cols {
            for bottom in top..rows {
                for right in left..cols {
                    keep_larger(
                        &mut best,
                        SubMatrixSum {
                            sum: sums.block(top, left, bottom, right),
                            top,
                            left,
                            bottom,
                            right,
                        },
                    );
                }
            }
        }
    }
    debug!("max_submatrix: {}x{} matrix, best {:?}", rows, cols, best);
    Ok(best)
}

/// The square sub-matrix with the largest sum, in O(rows · cols · min(rows, cols)).
///
/// # Errors
/// * `InvalidInput` if the rows have different lengths
pub fn max_square_submatrix(matrix: &[Vec<i64>]) -> Result<Option<SubMatrixSum>> {
    let sums = PrefixSums::new(matrix)?;
    let (rows, cols) = (sums.rows(), sums.cols());
    let mut best = None;
    for top in 0..rows {
        for left in 0..cols {
            for side in 0..(rows - top).min(cols - left) {
                keep_larger(
                    &mut best,
                    SubMatrixSum {
                        sum: sums.block(top, left, top + side, left + side),
                        top,
                        left,
                        bottom: top + side,
                        right: left + side,
                    },
                );
            }
        }
    }
    debug!("max_square_submatrix: {}x{} matrix, best {:?}", rows, cols, best);
    Ok(best)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corners(s: SubMatrixSum) -> (i64, usize, usize, usize, usize) {
        (s.sum, s.top, s.left, s.bottom, s.right)
    }

    #[test]
    fn test_empty_array() {
        assert_eq!(max_subarray(&[]), None);
    }

    #[test]
    fn test_single_element() {
        let best = max_subarray(&[42]).unwrap();
        assert_eq!((best.sum, best.start, best.end), (42, 0, 0));
    }

    #[test]
    fn test_all_negative() {
        // Kadane's should pick the largest single negative element: -2
        let best = max_subarray(&[-8, -3, -6, -2, -5, -4]).unwrap();
        assert_eq!((best.sum, best.start, best.end), (-2, 3, 3));
    }

    #[test]
    fn test_mixed_values() {
        let best = max_subarray(&[1, -2, 3, 5, -1]).unwrap();
        assert_eq!((best.sum, best.start, best.end), (8, 2, 3));

        let best = max_subarray(&[10, -5, 2, -1, 15, -20, 25, -2]).unwrap();
        assert_eq!((best.sum, best.start, best.end), (26, 0, 6));
    }

    #[test]
    fn test_submatrix_fixtures() {
        let m = vec![
            vec![0, -2, -7, 0],
            vec![9, 2, -6, 2],
            vec![-4, 1, -4, 1],
            vec![-1, 8, 0, -2],
        ];
        assert_eq!(corners(max_submatrix(&m).unwrap().unwrap()), (15, 1, 0, 3, 1));
        assert_eq!(corners(max_square_submatrix(&m).unwrap().unwrap()), (9, 0, 0, 1, 1));

        let m = vec![vec![2, -8, 4], vec![7, 1, -5], vec![-9, 7, 6]];
        assert_eq!(corners(max_submatrix(&m).unwrap().unwrap()), (13, 2, 1, 2, 2));
        assert_eq!(corners(max_square_submatrix(&m).unwrap().unwrap()), (9, 1, 1, 2, 2));

        let m = vec![
            vec![2, -8, 4, -6],
            vec![7, 1, -5, 3],
            vec![-9, 7, 6, 5],
            vec![8, 3, 2, -4],
        ];
        assert_eq!(corners(max_submatrix(&m).unwrap().unwrap()), (24, 1, 0, 3, 3));
        assert_eq!(corners(max_square_submatrix(&m).unwrap().unwrap()), (20, 1, 0, 3, 2));

        let m = vec![
            vec![1, 2, -1, -4, -20],
            vec![-8, -3, 4, 2, 1],
            vec![3, 8, 10, 1, 3],
            vec![-4, -1, 1, 7, -6],
        ];
        assert_eq!(corners(max_submatrix(&m).unwrap().unwrap()), (29, 1, 1, 3, 3));
        assert_eq!(corners(max_square_submatrix(&m).unwrap().unwrap()), (29, 1, 1, 3, 3));
    }

    #[test]
    fn test_all_negative_matrix() {
        let m = vec![vec![-3, -1], vec![-2, -5]];
        assert_eq!(corners(max_submatrix(&m).unwrap().unwrap()), (-1, 0, 1, 0, 1));
    }

    #[test]
    fn test_empty_and_ragged_matrices() {
        assert_eq!(max_submatrix(&[]).unwrap(), None);
        assert_eq!(max_square_submatrix(&[vec![], vec![]]).unwrap(), None);
        assert!(matches!(
            max_submatrix(&[vec![1, 2], vec![3]]),
            Err(Error::InvalidInput(_))
        ));
    }
}
