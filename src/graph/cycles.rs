//! Cycle report over the declared edges.
//!
//! Builds a petgraph view of a [`GraphStore`] and finds circular dependency
//! groups with Tarjan's strongly connected components. This is reporting
//! only; the store and the tree renderer do not depend on it.

use std::collections::{HashMap, HashSet};

use petgraph::algo::{is_cyclic_directed, tarjan_scc};
use petgraph::graph::{DiGraph, NodeIndex};
use serde::Serialize;

use super::GraphStore;

/// Information about a detected circular dependency group.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CycleInfo {
    /// Package names in the group, in first-seen order
    pub nodes: Vec<String>,
}

impl CycleInfo {
    /// Returns a formatted path through the group, closing back on the first.
    ///
    /// For example: "a -> b -> c -> a"
    pub fn cycle_path(&self) -> String {
        let Some(first) = self.nodes.first() else {
            return String::new();
        };
        format!("{} -> {}", self.nodes.join(" -> "), first)
    }

    /// Returns the number of packages in the group.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    /// Returns true if the group is empty (should not happen in practice).
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}

impl GraphStore {
    /// Builds a directed graph with one node per distinct name and one edge
    /// per declared edge.
    ///
    /// Referenced-only packages get a node too. Duplicate declarations become
    /// parallel edges. Node indices follow first-seen order.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deptree::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.add_edge("a", ["b", "b"]);
    ///
    /// let graph = store.to_digraph();
    /// assert_eq!(graph.node_count(), 2);
    /// assert_eq!(graph.edge_count(), 2);
    /// ```
    pub fn to_digraph(&self) -> DiGraph<String, ()> {
        let mut graph = DiGraph::with_capacity(self.len(), self.edge_count());
        let mut indices: HashMap<&str, NodeIndex> = HashMap::with_capacity(self.len());

        for (package, deps) in self.iter() {
            let from = *indices
                .entry(package)
                .or_insert_with(|| graph.add_node(package.to_string()));
            for dep in deps {
                let to = *indices
                    .entry(dep.as_str())
                    .or_insert_with(|| graph.add_node(dep.clone()));
                graph.add_edge(from, to, ());
            }
        }

        graph
    }

    /// Checks if the declared edges contain at least one cycle.
    pub fn has_cycles(&self) -> bool {
        is_cyclic_directed(&self.to_digraph())
    }

    /// Detects every circular dependency group.
    ///
    /// A group is a strongly connected component with more than one package,
    /// or a single package that lists itself. Groups are ordered by their
    /// earliest package.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deptree::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.add_edge("pkg1", ["pkg2"]);
    /// store.add_edge("pkg2", ["pkg3"]);
    /// store.add_edge("pkg3", ["pkg1"]);
    ///
    /// let cycles = store.detect_cycles();
    /// assert_eq!(cycles.len(), 1);
    /// assert_eq!(cycles[0].cycle_path(), "pkg1 -> pkg2 -> pkg3 -> pkg1");
    /// ```
    pub fn detect_cycles(&self) -> Vec<CycleInfo> {
        let graph = self.to_digraph();

        let mut groups: Vec<Vec<NodeIndex>> = tarjan_scc(&graph)
            .into_iter()
            .filter(|scc| match scc.as_slice() {
                [single] => graph.contains_edge(*single, *single),
                members => !members.is_empty(),
            })
            .map(|mut scc| {
                scc.sort_unstable();
                scc
            })
            .collect();
        groups.sort_unstable_by_key(|scc| scc.first().copied());

        groups
            .into_iter()
            .map(|scc| CycleInfo {
                nodes: scc
                    .into_iter()
                    .filter_map(|idx| graph.node_weight(idx).cloned())
                    .collect(),
            })
            .collect()
    }

    /// Returns the set of package names that belong to any cycle.
    pub fn nodes_in_cycles(&self) -> HashSet<String> {
        self.detect_cycles()
            .into_iter()
            .flat_map(|cycle| cycle.nodes)
            .collect()
    }
}
