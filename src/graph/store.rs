//! Declared dependency edges, keyed by package name.
//!
//! The store records exactly what a document declares: dependency lists keep
//! their declaration order and duplicates are never collapsed.

use indexmap::IndexMap;
use serde::Serialize;
use tracing::trace;

/// Mapping from package name to its ordered list of declared dependencies.
///
/// A package only has an entry once it has been passed as the first argument
/// to [`GraphStore::add_edge`]. Packages that are merely referenced as someone
/// else's dependency have no entry and are treated as leaves when rendering.
///
/// Equality compares the per-package dependency lists (order within a list
/// matters); the order in which packages were first added does not.
///
/// # Example
///
/// ```rust
/// use deptree::graph::GraphStore;
///
/// let mut store = GraphStore::new();
/// store.add_edge("app", ["serde", "log"]);
/// store.add_edge("serde", Vec::<String>::new());
///
/// assert_eq!(store.dependencies_of("app"), Some(&["serde".to_string(), "log".to_string()][..]));
/// assert_eq!(store.dependencies_of("serde"), Some(&[][..]));
/// assert_eq!(store.dependencies_of("log"), None);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct GraphStore {
    /// Package name -> declared dependencies, in package insertion order
    edges: IndexMap<String, Vec<String>>,
}

impl GraphStore {
    /// Creates a new empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store with room for `packages` entries.
    pub fn with_capacity(packages: usize) -> Self {
        Self {
            edges: IndexMap::with_capacity(packages),
        }
    }

    /// Appends `dependencies` to the entry for `package`, creating it if absent.
    ///
    /// Calling this with an empty list still creates the entry, which is what
    /// separates "declared with no dependencies" from "never declared".
    /// Repeated calls append again; nothing is deduplicated and dependency
    /// names are not required to be declared packages themselves.
    ///
    /// # Example
    ///
    /// ```rust
    /// use deptree::graph::GraphStore;
    ///
    /// let mut store = GraphStore::new();
    /// store.add_edge("a", ["b"]);
    /// store.add_edge("a", ["b"]);
    ///
    /// assert_eq!(store.dependencies_of("a").map(<[String]>::len), Some(2));
    /// ```
    pub fn add_edge<P, I, S>(&mut self, package: P, dependencies: I)
    where
        P: Into<String>,
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let package = package.into();
        let dependencies: Vec<String> = dependencies.into_iter().map(Into::into).collect();
        trace!(package = %package, added = dependencies.len(), "appending dependency edges");
        self.edges.entry(package).or_default().extend(dependencies);
    }

    /// Returns the declared dependencies of `package`.
    ///
    /// `None` means the package was never declared; `Some(&[])` means it was
    /// declared with no dependencies.
    pub fn dependencies_of(&self, package: &str) -> Option<&[String]> {
        self.edges.get(package).map(Vec::as_slice)
    }

    /// Iterates over every declared package name in insertion order.
    pub fn packages(&self) -> impl Iterator<Item = &str> + '_ {
        self.edges.keys().map(String::as_str)
    }

    /// Iterates over `(package, dependencies)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> + '_ {
        self.edges
            .iter()
            .map(|(package, deps)| (package.as_str(), deps.as_slice()))
    }

    /// Checks if `package` has an explicit entry.
    pub fn contains(&self, package: &str) -> bool {
        self.edges.contains_key(package)
    }

    /// Returns the number of declared packages.
    pub fn len(&self) -> usize {
        self.edges.len()
    }

    /// Checks if no package has been declared.
    pub fn is_empty(&self) -> bool {
        self.edges.is_empty()
    }

    /// Returns the total number of declared edges, duplicates included.
    pub fn edge_count(&self) -> usize {
        self.edges.values().map(Vec::len).sum()
    }
}

impl<P, I, S> Extend<(P, I)> for GraphStore
where
    P: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn extend<T: IntoIterator<Item = (P, I)>>(&mut self, iter: T) {
        for (package, dependencies) in iter {
            self.add_edge(package, dependencies);
        }
    }
}

impl<P, I, S> FromIterator<(P, I)> for GraphStore
where
    P: Into<String>,
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    fn from_iter<T: IntoIterator<Item = (P, I)>>(iter: T) -> Self {
        let mut store = Self::new();
        store.extend(iter);
        store
    }
}
