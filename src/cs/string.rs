pub mod alignment;
pub mod longest_common_subsequence;
pub mod palindromes;
pub mod prefix_tree;

// Re-export string algorithms
pub use alignment::{alignment, edit_distance, EditOp};
pub use longest_common_subsequence::{lcs, lcs_length};
pub use palindromes::{palindromic_spans, palindromic_substrings};
pub use prefix_tree::PrefixTree;
