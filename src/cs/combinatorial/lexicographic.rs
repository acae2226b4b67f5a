/// Rearranges `items` into the previous permutation in lexicographic order.
///
/// Returns `false` when `items` is already the smallest arrangement (sorted
/// ascending), in which case the slice is left as it is. Repeated elements
/// are handled, so every distinct arrangement is visited exactly once.
///
/// # Example
/// ```
/// use algos_paths::cs::combinatorial::prev_permutation;
///
/// let mut v = vec![3, 2, 1];
/// let mut seen = vec![v.clone()];
/// while prev_permutation(&mut v) {
///     seen.push(v.clone());
/// }
/// assert_eq!(seen.len(), 6);
/// assert_eq!(seen.last(), Some(&vec![1, 2, 3]));
/// ```
///
/// # Complexity
/// * Time: O(n) per step
/// * Space: O(1)
pub fn prev_permutation<T: Ord>(items: &mut [T]) -> bool {
    // Longest non-decreasing suffix starts at `pivot + 1`
    let Some(pivot) = (1..items.len())
        .rev()
        .find(|&i| items[i - 1] > items[i])
        .map(|i| i - 1)
    else {
        return false;
    };
    // Rightmost element of the suffix smaller than the pivot
    let Some(swap) = (pivot + 1..items.len())
        .rev()
        .find(|&j| items[j] < items[pivot])
    else {
        return false;
    };
    items.swap(pivot, swap);
    items[pivot + 1..].reverse();
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descending_walk() {
        let mut v = vec![3, 2, 1];
        let mut seen = vec![v.clone()];
        while prev_permutation(&mut v) {
            seen.push(v.clone());
        }
        assert_eq!(
            seen,
            vec![
                vec![3, 2, 1],
                vec![3, 1, 2],
                vec![2, 3, 1],
                vec![2, 1, 3],
                vec![1, 3, 2],
                vec![1, 2, 3],
            ]
        );
        // exhausted: stays at the smallest arrangement
        assert_eq!(v, vec![1, 2, 3]);
    }

    #[test]
    fn test_repeated_elements() {
        let mut v = vec!['b', 'a', 'a'];
        assert!(prev_permutation(&mut v));
        assert_eq!(v, vec!['a', 'b', 'a']);
        assert!(prev_permutation(&mut v));
        assert_eq!(v, vec!['a', 'a', 'b']);
        assert!(!prev_permutation(&mut v));
        assert_eq!(v, vec!['a', 'a', 'b']);
    }

    #[test]
    fn test_short_slices() {
        let mut empty: Vec<i32> = vec![];
        assert!(!prev_permutation(&mut empty));
        let mut one = vec![4];
        assert!(!prev_permutation(&mut one));
        let mut two = vec![5, 4];
        assert!(prev_permutation(&mut two));
        assert_eq!(two, vec![4, 5]);
    }
}
