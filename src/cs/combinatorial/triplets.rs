use log::debug;

/// Counts the triplets `(p, q, r)` of distinct values with `p` from `a`, `q`
/// from `b` and `r` from `c` such that `p <= q` and `r <= q`.
///
/// Duplicates inside each input are counted once. After sorting, one sweep
/// over `b` advances a cursor into `a` and one into `c`.
///
/// # Example
/// ```
/// use algos_paths::cs::combinatorial::count_triplets;
///
/// assert_eq!(count_triplets(&[1, 3, 5], &[2, 3], &[1, 2, 3]), 8);
/// ```
///
/// # Complexity
/// * Time: O(n log n) for the sorts, O(n) for the sweep
/// * Space: O(n)
pub fn count_triplets<T: Ord + Clone>(a: &[T], b: &[T], c: &[T]) -> u64 {
    let a = sorted_distinct(a);
    let b = sorted_distinct(b);
    let c = sorted_distinct(c);

    let (mut in_a, mut in_c) = (0, 0);
    let mut total = 0_u64;
    for q in &b {
        while in_a < a.len() && a[in_a] <= *q {
            in_a += 1;
        }
        while in_c < c.len() && c[in_c] <= *q {
            in_c += 1;
        }
        total += in_a as u64 * in_c as u64;
    }
    debug!(
        "count_triplets: {}x{}x{} distinct values, {} triplets",
        a.len(),
        b.len(),
        c.len(),
        total
    );
    total
}

fn sorted_distinct<T: Ord + Clone>(values: &[T]) -> Vec<T> {
    let mut values = values.to_vec();
    values.sort_unstable();
    values.dedup();
    values
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_inputs() {
        assert_eq!(count_triplets(&[1, 3, 5], &[2, 3], &[1, 2, 3]), 8);
        assert_eq!(count_triplets(&[1, 4, 5], &[2, 3, 3], &[1, 2, 3]), 5);
        assert_eq!(
            count_triplets(&[1, 3, 5, 7], &[5, 7, 9], &[7, 9, 11, 13]),
            12
        );
    }

    #[test]
    fn test_duplicates_count_once() {
        // Unsorted input with duplicates that are not adjacent
        assert_eq!(count_triplets(&[3, 1, 3], &[3, 2, 3], &[2, 1, 2]), 6);
    }

    #[test]
    fn test_no_triplets() {
        assert_eq!(count_triplets(&[9, 10], &[1, 2], &[0]), 0);
        assert_eq!(count_triplets::<u32>(&[], &[1], &[1]), 0);
    }
}
