use log::debug;

/// An item that can go into the knapsack.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
    pub weight: usize,
    pub value: usize,
}

impl Item {
    pub fn new(weight: usize, value: usize) -> Self {
        Self { weight, value }
    }
}

/// Optimal 0/1 knapsack packings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Knapsack {
    /// Best total value that fits.
    pub value: usize,
    /// Every distinct item subset reaching `value`, each as ascending item
    /// indices. Listed in lexicographic order.
    pub selections: Vec<Vec<usize>>,
    weights: Vec<usize>,
}

impl Knapsack {
    /// Total weight of each selection, in the same order as `selections`.
    pub fn selection_weights(&self) -> &[usize] {
        &self.weights
    }

    /// Total weight of the heaviest optimal selection.
    pub fn heaviest_weight(&self) -> usize {
        self.weights.iter().copied().max().unwrap_or(0)
    }
}

/// Solves the 0/1 knapsack problem and lists all optimal selections.
///
/// `best[i][c]` is the best value reachable with the items `i..` and
/// capacity `c`. The selections are then enumerated by walking the table
/// from the first item, following every choice (take or skip) that keeps
/// the optimum reachable, and sorted.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::knapsack::{knapsack, Item};
///
/// let items = [Item::new(10, 100), Item::new(4, 70), Item::new(6, 50), Item::new(12, 10)];
/// let packing = knapsack(12, &items);
/// assert_eq!(packing.value, 120);
/// assert_eq!(packing.selections, vec![vec![1, 2]]);
/// assert_eq!(packing.heaviest_weight(), 10);
/// ```
///
/// # Complexity
/// * Time: O(n * capacity) for the table, plus the size of the output
/// * Space: O(n * capacity)
pub fn knapsack(capacity: usize, items: &[Item]) -> Knapsack {
    let n = items.len();
    let mut best = vec![vec![0_usize; capacity + 1]; n + 1];
    for i in (0..n).rev() {
        let Item { weight, value } = items[i];
        for c in 0..=capacity {
            best[i][c] = best[i + 1][c];
            if weight <= c {
                best[i][c] = best[i][c].max(value + best[i + 1][c - weight]);
            }
        }
    }

    let mut packing = Knapsack {
        value: best[0][capacity],
        selections: Vec::new(),
        weights: Vec::new(),
    };
    let mut chosen = Vec::new();
    collect(items, &best, 0, capacity, &mut chosen, &mut packing);
    // a zero-value item can extend a selection that is itself optimal, and
    // the walk emits the extension before its prefix
    let mut found: Vec<_> = packing
        .selections
        .drain(..)
        .zip(packing.weights.drain(..))
        .collect();
    found.sort_unstable();
    (packing.selections, packing.weights) = found.into_iter().unzip();
    debug!(
        "knapsack: {} items, capacity {}, value {}, {} optimal selections",
        n,
        capacity,
        packing.value,
        packing.selections.len()
    );
    packing
}

fn collect(
    items: &[Item],
    best: &[Vec<usize>],
    i: usize,
    remaining: usize,
    chosen: &mut Vec<usize>,
    packing: &mut Knapsack,
) {
    if i == items.len() {
        packing
            .weights
            .push(chosen.iter().map(|&k| items[k].weight).sum());
        packing.selections.push(chosen.clone());
        return;
    }
    let need = best[i][remaining];
    let Item { weight, value } = items[i];
    if weight <= remaining && value + best[i + 1][remaining - weight] == need {
        chosen.push(i);
        collect(items, best, i + 1, remaining - weight, chosen, packing);
        chosen.pop();
    }
    if best[i + 1][remaining] == need {
        collect(items, best, i + 1, remaining, chosen, packing);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(list: &[(usize, usize)]) -> Vec<Item> {
        list.iter().map(|&(w, v)| Item::new(w, v)).collect()
    }

    #[test]
    fn test_single_optimal_selection() {
        let packing = knapsack(10, &items(&[(4, 30), (2, 50), (7, 20), (5, 70)]));
        assert_eq!(packing.value, 120);
        assert_eq!(packing.selections, vec![vec![1, 3]]);
        assert_eq!(packing.heaviest_weight(), 7);

        let packing = knapsack(15, &items(&[(4, 4), (7, 7), (9, 9)]));
        assert_eq!(packing.value, 13);
        assert_eq!(packing.selections, vec![vec![0, 2]]);
        assert_eq!(packing.heaviest_weight(), 13);
    }

    #[test]
    fn test_all_optimal_selections() {
        let packing = knapsack(15, &items(&[(5, 50), (6, 50), (7, 50), (8, 100), (9, 100)]));
        assert_eq!(packing.value, 150);
        assert_eq!(
            packing.selections,
            vec![vec![0, 3], vec![0, 4], vec![1, 3], vec![1, 4], vec![2, 3]]
        );
        assert_eq!(packing.selection_weights(), &[13, 14, 14, 15, 15]);
        assert_eq!(packing.heaviest_weight(), 15);
    }

    #[test]
    fn test_nothing_fits() {
        let packing = knapsack(3, &items(&[(4, 10), (5, 20)]));
        assert_eq!(packing.value, 0);
        assert_eq!(packing.selections, vec![Vec::<usize>::new()]);
        assert_eq!(packing.heaviest_weight(), 0);
    }

    #[test]
    fn test_no_items() {
        let packing = knapsack(10, &[]);
        assert_eq!(packing.value, 0);
        assert_eq!(packing.selections.len(), 1);
    }

    #[test]
    fn test_zero_value_items_keep_lexicographic_order() {
        let packing = knapsack(5, &items(&[(2, 3), (1, 0)]));
        assert_eq!(packing.value, 3);
        assert_eq!(packing.selections, vec![vec![0], vec![0, 1]]);
        assert_eq!(packing.selection_weights(), &[2, 3]);
        assert_eq!(packing.heaviest_weight(), 3);
    }
}
