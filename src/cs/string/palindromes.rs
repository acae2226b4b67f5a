/// Palindromic spans of `s` with length two or more, as inclusive
/// `(start, end)` char positions ordered by start, then end.
///
/// Every pair of equal characters is checked by comparing the span with its
/// reverse, so the scan is O(n³) in the worst case.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::string::palindromes::palindromic_spans;
///
/// assert_eq!(palindromic_spans("abba"), vec![(0, 3), (1, 2)]);
/// ```
pub fn palindromic_spans(s: &str) -> Vec<(usize, usize)> {
    let chars: Vec<char> = s.chars().collect();
    let n = chars.len();
    let mut spans = Vec::new();
    for i in 0..n {
        for j in (i + 1)..n {
            if chars[i] == chars[j] && is_palindrome(&chars[i..=j]) {
                spans.push((i, j));
            }
        }
    }
    spans
}

fn is_palindrome(chars: &[char]) -> bool {
    chars.iter().eq(chars.iter().rev())
}

/// Number of palindromic substrings of `s`, counted by position: every
/// single character, plus every longer palindromic span.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::string::palindromes::palindromic_substrings;
///
/// assert_eq!(palindromic_substrings("aaa"), 6);
/// ```
pub fn palindromic_substrings(s: &str) -> usize {
    s.chars().count() + palindromic_spans(s).len()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        assert_eq!(palindromic_substrings(""), 0);
        assert_eq!(palindromic_substrings("a"), 1);
        assert_eq!(palindromic_substrings("abc"), 3);
        assert_eq!(palindromic_substrings("abba"), 6);
        assert_eq!(palindromic_substrings("aaa"), 6);
    }

    #[test]
    fn test_spans() {
        assert_eq!(palindromic_spans("aaa"), vec![(0, 1), (0, 2), (1, 2)]);
        assert_eq!(palindromic_spans("racecar"), vec![(0, 6), (1, 5), (2, 4)]);
        assert_eq!(palindromic_spans("ñoño"), vec![(0, 2), (1, 3)]);
    }
}
