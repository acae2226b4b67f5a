/// Heap's algorithm for generating every permutation of a sequence.
///
/// Each permutation after the first is produced from the previous one by a
/// single swap. The first item is the input in its original order.
///
/// # Example
/// ```
/// use algos_paths::cs::combinatorial::HeapPermutations;
///
/// let perms: Vec<Vec<i32>> = HeapPermutations::new(vec![1, 2, 3]).collect();
/// assert_eq!(perms, vec![
///     vec![1, 2, 3],
///     vec![2, 1, 3],
///     vec![3, 1, 2],
///     vec![1, 3, 2],
///     vec![2, 3, 1],
///     vec![3, 2, 1],
/// ]);
/// ```
#[derive(Debug, Clone)]
pub struct HeapPermutations<T> {
    items: Vec<T>,
    // counters[i] is how many swaps level i has done since it was last reset
    counters: Vec<usize>,
    level: usize,
    started: bool,
}

impl<T: Clone> HeapPermutations<T> {
    pub fn new(items: Vec<T>) -> Self {
        let counters = vec![0; items.len()];
        Self {
            items,
            counters,
            level: 1,
            started: false,
        }
    }
}

impl<T: Clone> Iterator for HeapPermutations<T> {
    type Item = Vec<T>;

    fn next(&mut self) -> Option<Vec<T>> {
        if !self.started {
            self.started = true;
            return Some(self.items.clone());
        }
        while self.level < self.items.len() {
            let i = self.level;
            if self.counters[i] < i {
                if i % 2 == 0 {
                    self.items.swap(0, i);
                } else {
                    self.items.swap(self.counters[i], i);
                }
                self.counters[i] += 1;
                self.level = 1;
                return Some(self.items.clone());
            }
            self.counters[i] = 0;
            self.level += 1;
        }
        None
    }
}

/// Collects every permutation of `items` in Heap's order.
///
/// Equal elements are not merged, so the result always has `n!` entries.
pub fn heap_permutations<T: Clone>(items: &[T]) -> Vec<Vec<T>> {
    HeapPermutations::new(items.to_vec()).collect()
}
