//! Target-sum problems over a set of values that may be reused any number
//! of times (the "unbounded" coin change family).
//!
//! Every function tabulates the amounts `0..=target` bottom-up: each
//! reachable amount `i` is extended by every value `v` to `i + v`. Zero
//! values never change an amount and are ignored.

use std::collections::BTreeSet;

fn usable(values: &[usize]) -> impl Iterator<Item = usize> + '_ {
    values.iter().copied().filter(|&v| v > 0)
}

/// Whether some combination of `values` adds up to `target`.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::target_sum::can_sum;
///
/// assert!(can_sum(7, &[5, 3, 4, 7]));
/// assert!(!can_sum(7, &[2, 4]));
/// ```
pub fn can_sum(target: usize, values: &[usize]) -> bool {
    let mut reachable = vec![false; target + 1];
    reachable[0] = true;
    for i in 0..target {
        if !reachable[i] {
            continue;
        }
        for v in usable(values) {
            if i + v <= target {
                reachable[i + v] = true;
            }
        }
    }
    reachable[target]
}

/// Walks `parent` back from `target` and returns the values used, in the
/// order they were added.
fn rebuild(target: usize, parent: &[Option<usize>]) -> Option<Vec<usize>> {
    let mut path = Vec::new();
    let mut at = target;
    while at != 0 {
        let prev = parent[at]?;
        path.push(at - prev);
        at = prev;
    }
    path.reverse();
    Some(path)
}

/// Some combination of `values` that adds up to `target`, or `None`.
///
/// The combination recorded for an amount is the last one found for it.
/// Use [`best_sum`] for the shortest one.
pub fn how_sum(target: usize, values: &[usize]) -> Option<Vec<usize>> {
    let mut reachable = vec![false; target + 1];
    let mut parent = vec![None; target + 1];
    reachable[0] = true;
    for i in 0..target {
        if !reachable[i] {
            continue;
        }
        for v in usable(values) {
            if i + v <= target {
                reachable[i + v] = true;
                parent[i + v] = Some(i);
            }
        }
    }
    rebuild(target, &parent)
}

/// A combination of `values` adding up to `target` with as few values as
/// possible. Among equally short combinations the first one found wins.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::target_sum::best_sum;
///
/// assert_eq!(best_sum(8, &[2, 3, 5]), Some(vec![3, 5]));
/// assert_eq!(best_sum(100, &[1, 2, 5, 25]), Some(vec![25, 25, 25, 25]));
/// assert_eq!(best_sum(7, &[2, 4]), None);
/// ```
pub fn best_sum(target: usize, values: &[usize]) -> Option<Vec<usize>> {
    // fewest[i] is the length of the shortest combination for i
    let mut fewest: Vec<Option<usize>> = vec![None; target + 1];
    let mut parent = vec![None; target + 1];
    fewest[0] = Some(0);
    for i in 0..target {
        let Some(count) = fewest[i] else {
            continue;
        };
        for v in usable(values) {
            let j = i + v;
            if j <= target && fewest[j].map_or(true, |c| count + 1 < c) {
                fewest[j] = Some(count + 1);
                parent[j] = Some(i);
            }
        }
    }
    rebuild(target, &parent)
}

/// Number of ordered sequences of `values` adding up to `target`.
///
/// Order matters: `[1, 1, 4]`, `[1, 4, 1]` and `[4, 1, 1]` count as three.
pub fn count_ordered_sums(target: usize, values: &[usize]) -> usize {
    let mut ways = vec![0_usize; target + 1];
    ways[0] = 1;
    for i in 0..target {
        if ways[i] == 0 {
            continue;
        }
        for v in usable(values) {
            if i + v <= target {
                ways[i + v] += ways[i];
            }
        }
    }
    ways[target]
}

/// Every ordered sequence of `values` adding up to `target`.
///
/// The output grows exponentially with `target`.
pub fn all_ordered_sums(target: usize, values: &[usize]) -> Vec<Vec<usize>> {
    let mut table: Vec<Vec<Vec<usize>>> = vec![Vec::new(); target + 1];
    table[0].push(Vec::new());
    for i in 0..target {
        for v in usable(values) {
            if i + v > target {
                continue;
            }
            let extended: Vec<Vec<usize>> = table[i]
                .iter()
                .map(|combination| {
                    let mut next = combination.clone();
                    next.push(v);
                    next
                })
                .collect();
            table[i + v].extend(extended);
        }
    }
    table.swap_remove(target)
}

/// Every distinct multiset of `values` adding up to `target`, each sorted
/// ascending, listed in lexicographic order.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::target_sum::all_combinations;
///
/// assert_eq!(
///     all_combinations(8, &[2, 3, 5]),
///     vec![vec![2, 2, 2, 2], vec![2, 3, 3], vec![3, 5]]
/// );
/// ```
pub fn all_combinations(target: usize, values: &[usize]) -> Vec<Vec<usize>> {
    let mut table: Vec<BTreeSet<Vec<usize>>> = vec![BTreeSet::new(); target + 1];
    table[0].insert(Vec::new());
    for i in 0..target {
        for v in usable(values) {
            if i + v > target {
                continue;
            }
            let extended: Vec<Vec<usize>> = table[i]
                .iter()
                .map(|combination| {
                    let mut next = combination.clone();
                    // keep each multiset sorted so duplicates collapse in the set
                    let at = next.partition_point(|&x| x <= v);
                    next.insert(at, v);
                    next
                })
                .collect();
            table[i + v].extend(extended);
        }
    }
    table.swap_remove(target).into_iter().collect()
}
