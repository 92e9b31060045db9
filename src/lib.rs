//! deptree - declared dependency graphs rendered as indented trees
//!
//! This crate stores package -> dependency-list declarations exactly as a
//! document gives them and renders the transitive tree under any package,
//! marking cycle closures instead of recursing forever.

pub mod export;
pub mod graph;
pub mod parser;
pub mod tree;
