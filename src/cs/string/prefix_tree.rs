//! A prefix tree (trie) of words with repetition counts.
//!
//! Children are kept in a `BTreeMap`, so every traversal visits words in
//! lexicographic order, a word always coming before its extensions.

use std::collections::BTreeMap;

#[derive(Debug, Clone, Default)]
struct Node {
    /// How many times the word ending here was inserted.
    count: usize,
    children: BTreeMap<char, Node>,
}

impl Node {
    /// Appends every word below this node to `out`, each as `prefix` plus
    /// the path to it, repeated by its count.
    fn collect(&self, prefix: &mut String, out: &mut Vec<String>) {
        out.extend(std::iter::repeat(prefix.clone()).take(self.count));
        for (&c, child) in &self.children {
            prefix.push(c);
            child.collect(prefix, out);
            prefix.pop();
        }
    }
}

/// Word store supporting prefix queries.
///
/// # Examples
///
/// ```
/// use algos_paths::cs::string::PrefixTree;
///
/// let mut tree = PrefixTree::new();
/// for word in ["mobile", "mouse", "moneypot", "monitor", "mousepad"] {
///     tree.insert(word);
/// }
/// assert_eq!(tree.matches("mou"), vec!["mouse", "mousepad"]);
/// assert_eq!(tree.matches("mouse"), vec!["mouse", "mousepad"]);
/// assert!(tree.matches("mx").is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct PrefixTree {
    root: Node,
    len: usize,
}

impl PrefixTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `word`. Inserting the same word again increments its count.
    pub fn insert(&mut self, word: &str) {
        let mut node = &mut self.root;
        for c in word.chars() {
            node = node.children.entry(c).or_default();
        }
        node.count += 1;
        self.len += 1;
    }

    /// Number of insertions so far, counting repeats.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn find(&self, prefix: &str) -> Option<&Node> {
        prefix
            .chars()
            .try_fold(&self.root, |node, c| node.children.get(&c))
    }

    /// How many times exactly `word` was inserted.
    pub fn occurrences(&self, word: &str) -> usize {
        self.find(word).map_or(0, |node| node.count)
    }

    pub fn contains(&self, word: &str) -> bool {
        self.occurrences(word) > 0
    }

    /// Every inserted word that strictly extends `prefix`, in lexicographic
    /// order, repeated by its count.
    pub fn completions(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            let mut path = prefix.to_string();
            for (&c, child) in &node.children {
                path.push(c);
                child.collect(&mut path, &mut out);
                path.pop();
            }
        }
        out
    }

    /// Every inserted word starting with `prefix`: `prefix` itself as many
    /// times as it was inserted, then all its [`completions`](Self::completions).
    pub fn matches(&self, prefix: &str) -> Vec<String> {
        let mut out = Vec::new();
        if let Some(node) = self.find(prefix) {
            node.collect(&mut prefix.to_string(), &mut out);
        }
        out
    }

    /// Every inserted word in lexicographic order, repeated by its count.
    pub fn words(&self) -> Vec<String> {
        self.matches("")
    }
}

impl<'a> FromIterator<&'a str> for PrefixTree {
    fn from_iter<I: IntoIterator<Item = &'a str>>(words: I) -> Self {
        let mut tree = Self::new();
        for word in words {
            tree.insert(word);
        }
        tree
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PrefixTree {
        ["mobile", "mouse", "moneypot", "monitor", "mousepad"]
            .into_iter()
            .collect()
    }

    #[test]
    fn test_matches_narrow_with_longer_prefixes() {
        let tree = sample();
        assert_eq!(
            tree.matches("mo"),
            vec!["mobile", "moneypot", "monitor", "mouse", "mousepad"]
        );
        assert_eq!(tree.matches("mon"), vec!["moneypot", "monitor"]);
        assert_eq!(tree.matches("mous"), vec!["mouse", "mousepad"]);
        assert_eq!(tree.completions("mouse"), vec!["mousepad"]);
    }

    #[test]
    fn test_repeated_words() {
        let tree: PrefixTree = ["abd", "abd", "abde", "aa"].into_iter().collect();
        assert_eq!(tree.len(), 4);
        assert_eq!(tree.occurrences("abd"), 2);
        assert_eq!(tree.occurrences("ab"), 0);
        assert_eq!(tree.matches("abd"), vec!["abd", "abd", "abde"]);
        assert_eq!(tree.completions("abd"), vec!["abde"]);
        assert_eq!(tree.words(), vec!["aa", "abd", "abd", "abde"]);
    }

    #[test]
    fn test_missing_prefix_and_empty_tree() {
        let tree = sample();
        assert!(tree.matches("x").is_empty());
        assert!(tree.completions("mobiles").is_empty());
        assert!(!tree.contains("mo"));
        assert!(tree.contains("monitor"));

        let empty = PrefixTree::new();
        assert!(empty.is_empty());
        assert!(empty.words().is_empty());
    }

    #[test]
    fn test_empty_word() {
        let mut tree = PrefixTree::new();
        tree.insert("");
        tree.insert("a");
        assert_eq!(tree.occurrences(""), 1);
        assert_eq!(tree.words(), vec!["", "a"]);
        assert_eq!(tree.completions(""), vec!["a"]);
    }
}
