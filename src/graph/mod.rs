//! Graph module for declared dependency edges.
//!
//! [`GraphStore`] holds the package -> dependency-list mapping exactly as
//! declared. The cycle report builds a petgraph view on top of it.
//!
//! # Example
//!
//! ```rust
//! use deptree::graph::GraphStore;
//!
//! let mut store = GraphStore::new();
//! store.add_edge("pkg1", ["pkg2", "pkg3"]);
//! store.add_edge("pkg2", ["pkg3"]);
//! store.add_edge("pkg3", Vec::<String>::new());
//!
//! assert_eq!(store.len(), 3);
//! assert_eq!(store.edge_count(), 3);
//! assert!(!store.has_cycles());
//! ```

mod cycles;
mod store;

pub use cycles::CycleInfo;
pub use store::GraphStore;
