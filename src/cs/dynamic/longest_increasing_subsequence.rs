/// Returns the length of the longest strictly increasing subsequence of
/// `numbers`.
///
/// Patience sorting: `tails[k]` is the smallest value that ends an
/// increasing subsequence of length `k + 1`.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::longest_increasing_subsequence::lis_length;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(lis_length(&arr), 4);
/// ```
///
/// # Complexity
/// * Time: O(n log n)
/// * Space: O(n)
pub fn lis_length<T: Ord>(numbers: &[T]) -> usize {
    let mut tails: Vec<&T> = Vec::with_capacity(numbers.len());
    for num in numbers {
        // Ok means an equal tail exists; replacing it keeps the sequence strict
        let (Ok(pos) | Err(pos)) = tails.binary_search(&num);
        if pos == tails.len() {
            tails.push(num);
        } else {
            tails[pos] = num;
        }
    }
    tails.len()
}

/// Returns one longest strictly increasing subsequence of `numbers`.
///
/// Same method as [`lis_length`], but every element remembers the index of
/// the tail it extended, so the subsequence ending at the last tail can be
/// walked back.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::dynamic::longest_increasing_subsequence::longest_increasing_subsequence;
///
/// let arr = vec![10, 9, 2, 5, 3, 7, 101, 18];
/// assert_eq!(longest_increasing_subsequence(&arr), vec![2, 3, 7, 18]);
/// ```
pub fn longest_increasing_subsequence<T: Ord + Clone>(numbers: &[T]) -> Vec<T> {
    // tails[k] = index of the smallest element ending a subsequence of length k+1
    let mut tails: Vec<usize> = Vec::with_capacity(numbers.len());
    let mut prev: Vec<Option<usize>> = vec![None; numbers.len()];

    for (i, num) in numbers.iter().enumerate() {
        let (Ok(pos) | Err(pos)) = tails.binary_search_by(|&idx| numbers[idx].cmp(num));
        if pos > 0 {
            prev[i] = Some(tails[pos - 1]);
        }
        if pos == tails.len() {
            tails.push(i);
        } else {
            tails[pos] = i;
        }
    }

    let mut lis = Vec::with_capacity(tails.len());
    let mut at = tails.last().copied();
    while let Some(i) = at {
        lis.push(numbers[i].clone());
        at = prev[i];
    }
    lis.reverse();
    lis
}

/// Every longest strictly increasing subsequence of `numbers`, grouped by
/// end position and then by predecessor position.
///
/// Quadratic DP where each element keeps all predecessors that give it its
/// best length. The output can grow exponentially with the input.
pub fn all_longest_increasing_subsequences<T: Ord + Clone>(numbers: &[T]) -> Vec<Vec<T>> {
    let mut lengths = vec![1_usize; numbers.len()];
    let mut parents: Vec<Vec<usize>> = vec![Vec::new(); numbers.len()];
    for i in 0..numbers.len() {
        for j in 0..i {
            if numbers[j] < numbers[i] {
                if lengths[j] + 1 > lengths[i] {
                    lengths[i] = lengths[j] + 1;
                    parents[i].clear();
                    parents[i].push(j);
                } else if lengths[j] + 1 == lengths[i] {
                    parents[i].push(j);
                }
            }
        }
    }

    let Some(&longest) = lengths.iter().max() else {
        return Vec::new();
    };
    (0..numbers.len())
        .filter(|&i| lengths[i] == longest)
        .flat_map(|i| chains_ending_at(numbers, &parents, i))
        .collect()
}

fn chains_ending_at<T: Clone>(numbers: &[T], parents: &[Vec<usize>], end: usize) -> Vec<Vec<T>> {
    if parents[end].is_empty() {
        return vec![vec![numbers[end].clone()]];
    }
    parents[end]
        .iter()
        .flat_map(|&p| chains_ending_at(numbers, parents, p))
        .map(|mut chain| {
            chain.push(numbers[end].clone());
            chain
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lis_length_empty() {
        assert_eq!(lis_length::<i32>(&[]), 0);
    }

    #[test]
    fn test_lis_sequence_empty() {
        assert!(longest_increasing_subsequence::<i32>(&[]).is_empty());
        assert!(all_longest_increasing_subsequences::<i32>(&[]).is_empty());
    }

    #[test]
    fn test_lis_length_basic() {
        let nums = [10, 9, 2, 5, 3, 7, 101, 18];
        assert_eq!(lis_length(&nums), 4);

        let nums2 = [0, 1, 0, 3, 2, 3];
        assert_eq!(lis_length(&nums2), 4);

        // equal values never extend a strictly increasing run
        assert_eq!(lis_length(&[7, 7, 7, 7]), 1);
    }

    #[test]
    fn test_lis_sequence_basic() {
        let nums = [-7, 10, 9, 2, 3, 8, 8, 1];
        assert_eq!(longest_increasing_subsequence(&nums), vec![-7, 2, 3, 8]);

        let nums = [3, 1, 2, 1, 8, 6, 7];
        let seq = longest_increasing_subsequence(&nums);
        assert_eq!(seq, vec![1, 2, 6, 7]);
        for w in seq.windows(2) {
            assert!(w[0] < w[1]);
        }
    }

    #[test]
    fn test_lis_on_chars() {
        let letters: Vec<char> = "patience".chars().collect();
        assert_eq!(lis_length(&letters), 3);
    }

    #[test]
    fn test_all_solutions() {
        let nums = [10, 9, 2, 5, 3, 7, 101, 18];
        assert_eq!(
            all_longest_increasing_subsequences(&nums),
            vec![
                vec![2, 5, 7, 101],
                vec![2, 3, 7, 101],
                vec![2, 5, 7, 18],
                vec![2, 3, 7, 18],
            ]
        );
    }
}
