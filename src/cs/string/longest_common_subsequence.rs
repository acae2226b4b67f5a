/// `table[i][j]` is the LCS length of the first `i` chars of `a` and the
/// first `j` chars of `b`.
fn lcs_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0; b.len() + 1]; a.len() + 1];
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1] + 1
            } else {
                table[i - 1][j].max(table[i][j - 1])
            };
        }
    }
    table
}

/// Returns the length of the longest common subsequence (LCS) between `a` and `b`.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::string::longest_common_subsequence::lcs_length;
///
/// assert_eq!(lcs_length("ACAATCC", "AGCATGC"), 5);
/// ```
pub fn lcs_length(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    lcs_table(&a, &b)[a.len()][b.len()]
}

/// Reconstructs one longest common subsequence of `a` and `b`.
///
/// The walk back through the table moves up while the length allows it,
/// then left, and takes a character only when neither move keeps the
/// length. Returns an empty string if there's no common subsequence.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::string::longest_common_subsequence::lcs;
///
/// assert_eq!(lcs("ACAATCC", "AGCATGC"), "ACATC");
/// assert_eq!(lcs("AGGTAB", "GXTXAYB"), "GTAB");
/// ```
pub fn lcs(a: &str, b: &str) -> String {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let table = lcs_table(&a, &b);

    let (mut i, mut j) = (a.len(), b.len());
    let mut subsequence = Vec::with_capacity(table[i][j]);
    while i > 0 && j > 0 {
        if table[i][j] == table[i - 1][j] {
            i -= 1;
        } else if table[i][j] == table[i][j - 1] {
            j -= 1;
        } else {
            subsequence.push(a[i - 1]);
            i -= 1;
            j -= 1;
        }
    }

    // The subsequence is constructed backwards, so reverse it.
    subsequence.iter().rev().collect()
}
