//! Parser module for dependency documents.
//!
//! Reads a JSON mapping of package names to dependency lists and populates a
//! [`GraphStore`](crate::graph::GraphStore). Malformed documents are rejected
//! here and never reach the store.
//!
//! # Example
//!
//! ```ignore
//! use std::path::Path;
//! use deptree::parser::parse_file;
//!
//! let store = parse_file(Path::new("deps.json")).unwrap();
//! println!("Loaded {} packages", store.len());
//! ```

pub mod document;

pub use document::{parse_file, parse_str, LoadError, LoadResult};
