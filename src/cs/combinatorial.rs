pub mod heap_permutations;
pub mod lexicographic;
pub mod triplets;

pub use heap_permutations::{heap_permutations, HeapPermutations};
pub use lexicographic::prev_permutation;
pub use triplets::count_triplets;
