//! Minimum edit distance (Levenshtein) and the edit script behind it.

use log::debug;

/// What happens to one character when turning the source into the target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EditOp {
    /// The source character is kept as is.
    Keep,
    /// The source character is replaced by another one.
    Change,
    /// A target character is inserted.
    Insert,
    /// The source character is deleted.
    Delete,
}

/// `table[i][j]` is the edit distance between the first `i` chars of `a`
/// and the first `j` chars of `b`.
fn distance_table(a: &[char], b: &[char]) -> Vec<Vec<usize>> {
    let mut table = vec![vec![0_usize; b.len() + 1]; a.len() + 1];
    for (i, row) in table.iter_mut().enumerate() {
        row[0] = i;
    }
    for j in 0..=b.len() {
        table[0][j] = j;
    }
    for i in 1..=a.len() {
        for j in 1..=b.len() {
            table[i][j] = if a[i - 1] == b[j - 1] {
                table[i - 1][j - 1]
            } else {
                1 + table[i - 1][j - 1].min(table[i][j - 1]).min(table[i - 1][j])
            };
        }
    }
    table
}

/// Computes the Levenshtein (edit) distance between two string slices.
///
/// The Levenshtein distance is the minimum number of single-character
/// edits (insertions, deletions, substitutions) required to change `a`
/// into `b`.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::string::alignment::edit_distance;
///
/// assert_eq!(edit_distance("", ""), 0);
/// assert_eq!(edit_distance("kitten", "sitting"), 3);
/// assert_eq!(edit_distance("AZCED", "ABCDEF"), 3);
/// ```
pub fn edit_distance(a: &str, b: &str) -> usize {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let b_len = b.len();
    // two rolling rows of the full table
    let mut prev_row: Vec<usize> = (0..=b_len).collect();
    let mut curr_row = vec![0; b_len + 1];

    for (i, ca) in a.iter().enumerate() {
        curr_row[0] = i + 1;
        for (j, cb) in b.iter().enumerate() {
            let cost = usize::from(ca != cb);
            curr_row[j + 1] = (prev_row[j + 1] + 1)
                .min(curr_row[j] + 1)
                .min(prev_row[j] + cost);
        }
        std::mem::swap(&mut prev_row, &mut curr_row);
    }

    prev_row[b_len]
}

/// One minimal edit script turning `a` into `b`, in reading order.
///
/// Each step carries the character it acts on: the target character for
/// [`EditOp::Insert`], the source character otherwise. When several scripts
/// are minimal, matches are preferred, then deletions, then insertions.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::string::alignment::{alignment, EditOp};
///
/// let script = alignment("cat", "cut");
/// assert_eq!(
///     script,
///     vec![('c', EditOp::Keep), ('a', EditOp::Change), ('t', EditOp::Keep)]
/// );
/// ```
pub fn alignment(a: &str, b: &str) -> Vec<(char, EditOp)> {
    let a: Vec<char> = a.chars().collect();
    let b: Vec<char> = b.chars().collect();
    let table = distance_table(&a, &b);

    let (mut i, mut j) = (a.len(), b.len());
    let mut script = Vec::with_capacity(i.max(j));
    while i > 0 || j > 0 {
        if i > 0 && j > 0 && a[i - 1] == b[j - 1] {
            script.push((a[i - 1], EditOp::Keep));
            i -= 1;
            j -= 1;
        } else if i > 0 && table[i][j] == table[i - 1][j] + 1 {
            script.push((a[i - 1], EditOp::Delete));
            i -= 1;
        } else if j > 0 && table[i][j] == table[i][j - 1] + 1 {
            script.push((b[j - 1], EditOp::Insert));
            j -= 1;
        } else {
            script.push((a[i - 1], EditOp::Change));
            i -= 1;
            j -= 1;
        }
    }
    script.reverse();
    debug!(
        "alignment: {} -> {} chars, distance {}",
        a.len(),
        b.len(),
        table[a.len()][b.len()]
    );
    script
}
