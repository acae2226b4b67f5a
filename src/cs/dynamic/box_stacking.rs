//! Box stacking: build the tallest tower from a set of boxes.
//!
//! Each box may be rotated so any of its faces is the base, and every
//! orientation may be used once. A box can rest on another only when both
//! of its base dimensions are strictly smaller. With the orientations
//! sorted by base area this becomes a weighted longest increasing
//! subsequence.

use log::debug;

/// A box, or one orientation of a box. In an orientation `width >= depth`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cuboid {
    pub height: usize,
    pub width: usize,
    pub depth: usize,
}

impl Cuboid {
    pub fn new(height: usize, width: usize, depth: usize) -> Self {
        Self {
            height,
            width,
            depth,
        }
    }

    /// Orientation with the given vertical side and an `a` by `b` base.
    fn oriented(height: usize, a: usize, b: usize) -> Self {
        Self::new(height, a.max(b), a.min(b))
    }

    fn base_area(&self) -> usize {
        self.width * self.depth
    }

    /// Whether `self` can sit on top of `below`.
    fn fits_on(&self, below: &Cuboid) -> bool {
        self.width < below.width && self.depth < below.depth
    }
}

/// The three orientations of every box, smallest base first. Identical
/// orientations are kept once.
fn orientations(boxes: &[Cuboid]) -> Vec<Cuboid> {
    let mut all: Vec<Cuboid> = boxes
        .iter()
        .flat_map(|b| {
            [
                Cuboid::oriented(b.height, b.width, b.depth),
                Cuboid::oriented(b.width, b.height, b.depth),
                Cuboid::oriented(b.depth, b.height, b.width),
            ]
        })
        .collect();
    all.sort_by_key(|c| (c.base_area(), c.width, c.depth, c.height));
    all.dedup();
    all
}

/// `best[j]` is the tallest stack standing on orientation `j`; `parents[j]`
/// lists every orientation that can sit directly on `j` in such a stack.
struct Table {
    boxes: Vec<Cuboid>,
    best: Vec<usize>,
    parents: Vec<Vec<usize>>,
}

fn build_table(boxes: &[Cuboid]) -> Table {
    let boxes = orientations(boxes);
    let mut best: Vec<usize> = boxes.iter().map(|b| b.height).collect();
    let mut parents = vec![Vec::new(); boxes.len()];
    // orientation i is on top, j is below it (j has the larger base)
    for j in 0..boxes.len() {
        for i in 0..j {
            if !boxes[i].fits_on(&boxes[j]) {
                continue;
            }
            let height = best[i] + boxes[j].height;
            if height > best[j] {
                best[j] = height;
                parents[j].clear();
                parents[j].push(i);
            } else if height == best[j] {
                parents[j].push(i);
            }
        }
    }
    Table {
        boxes,
        best,
        parents,
    }
}

/// Height of the tallest stack.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::box_stacking::{box_stacking, Cuboid};
///
/// let boxes = [
///     Cuboid::new(4, 6, 7),
///     Cuboid::new(1, 2, 3),
///     Cuboid::new(4, 5, 6),
///     Cuboid::new(10, 12, 32),
/// ];
/// assert_eq!(box_stacking(&boxes), 60);
/// ```
///
/// # Complexity
/// * Time: O(n²)
/// * Space: O(n²)
pub fn box_stacking(boxes: &[Cuboid]) -> usize {
    let table = build_table(boxes);
    let height = table.best.iter().copied().max().unwrap_or(0);
    debug!(
        "box_stacking: {} boxes, {} orientations, height {}",
        boxes.len(),
        table.boxes.len(),
        height
    );
    height
}

/// Every tallest stack, each listed bottom to top.
pub fn box_stacking_solutions(boxes: &[Cuboid]) -> Vec<Vec<Cuboid>> {
    let table = build_table(boxes);
    let Some(&height) = table.best.iter().max() else {
        return Vec::new();
    };
    (0..table.boxes.len())
        .filter(|&j| table.best[j] == height)
        .flat_map(|j| stacks_on(&table, j))
        .collect()
}

/// Stacks with orientation `bottom` at the bottom, bottom first.
fn stacks_on(table: &Table, bottom: usize) -> Vec<Vec<Cuboid>> {
    if table.parents[bottom].is_empty() {
        return vec![vec![table.boxes[bottom]]];
    }
    table.parents[bottom]
        .iter()
        .flat_map(|&above| stacks_on(table, above))
        .map(|mut stack| {
            stack.insert(0, table.boxes[bottom]);
            stack
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tallest_stack() {
        let boxes = [
            Cuboid::new(4, 6, 7),
            Cuboid::new(1, 2, 3),
            Cuboid::new(4, 5, 6),
            Cuboid::new(10, 12, 32),
        ];
        assert_eq!(box_stacking(&boxes), 60);

        let solutions = box_stacking_solutions(&boxes);
        assert_eq!(
            solutions,
            vec![vec![
                Cuboid::new(10, 32, 12),
                Cuboid::new(32, 12, 10),
                Cuboid::new(4, 7, 6),
                Cuboid::new(4, 6, 5),
                Cuboid::new(6, 5, 4),
                Cuboid::new(1, 3, 2),
                Cuboid::new(3, 2, 1),
            ]]
        );
    }

    #[test]
    fn test_second_fixture() {
        let boxes = [
            Cuboid::new(4, 2, 5),
            Cuboid::new(3, 1, 6),
            Cuboid::new(3, 2, 1),
            Cuboid::new(6, 3, 8),
        ];
        assert_eq!(box_stacking(&boxes), 22);
        let solutions = box_stacking_solutions(&boxes);
        assert_eq!(solutions.len(), 1);
        let stack = &solutions[0];
        assert_eq!(stack.iter().map(|c| c.height).sum::<usize>(), 22);
        for pair in stack.windows(2) {
            assert!(pair[1].fits_on(&pair[0]));
        }
    }

    #[test]
    fn test_cube_stacks_alone() {
        let cube = [Cuboid::new(2, 2, 2)];
        assert_eq!(box_stacking(&cube), 2);
        assert_eq!(box_stacking_solutions(&cube), vec![vec![Cuboid::new(2, 2, 2)]]);
    }

    #[test]
    fn test_no_boxes() {
        assert_eq!(box_stacking(&[]), 0);
        assert!(box_stacking_solutions(&[]).is_empty());
    }
}
