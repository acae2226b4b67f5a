pub mod combinatorial;
pub mod dynamic;
pub mod error;
pub mod graph;
pub mod string;
