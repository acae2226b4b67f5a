pub mod box_stacking;
pub mod knapsack;
pub mod longest_increasing_subsequence;
pub mod max_range_sum;
pub mod target_sum;
pub mod wedding_shopping;

// Re-export dynamic programming algorithms with descriptive names
pub use box_stacking::{box_stacking, box_stacking_solutions, Cuboid};
pub use knapsack::{knapsack, Item, Knapsack};
pub use longest_increasing_subsequence::{
    all_longest_increasing_subsequences, lis_length, longest_increasing_subsequence,
};
pub use max_range_sum::{max_square_submatrix, max_submatrix, max_subarray, RangeSum, SubMatrixSum};
pub use target_sum::{all_combinations, all_ordered_sums, best_sum, can_sum, count_ordered_sums, how_sum};
pub use wedding_shopping::maximum_spend;
