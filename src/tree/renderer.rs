//! Depth-first rendering of the dependency tree under a root package.
//!
//! The walk is preorder and follows declaration order. A package that is
//! already an ancestor on the current path is emitted once as a cycle
//! closure and not descended into again; a package reached through
//! different branches (a diamond) is rendered once per path.

use std::collections::HashSet;
use std::fmt;
use std::io::{self, Write};

use serde::Serialize;

use crate::graph::GraphStore;

/// Marker appended to cycle closure lines.
pub const CYCLE_MARKER: &str = "(cycle)";

/// One visited node in a rendered tree.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TreeLine {
    /// Indent level (0 = root)
    pub depth: usize,
    /// Package name
    pub name: String,
    /// Whether this node closes a cycle back to one of its ancestors
    #[serde(rename = "cycle")]
    pub is_cycle: bool,
}

impl TreeLine {
    /// Creates a regular tree line.
    pub fn new(depth: usize, name: impl Into<String>) -> Self {
        Self {
            depth,
            name: name.into(),
            is_cycle: false,
        }
    }

    /// Creates a cycle closure line.
    pub fn cycle(depth: usize, name: impl Into<String>) -> Self {
        Self {
            is_cycle: true,
            ..Self::new(depth, name)
        }
    }

    /// Formats the line as `"<2 * depth spaces>- <name>"`.
    ///
    /// Cycle closures get a trailing [`CYCLE_MARKER`].
    ///
    /// # Example
    ///
    /// ```rust
    /// use deptree::tree::TreeLine;
    ///
    /// assert_eq!(TreeLine::new(2, "pkg3").to_line(), "    - pkg3");
    /// assert_eq!(TreeLine::cycle(3, "pkg1").to_line(), "      - pkg1 (cycle)");
    /// ```
    pub fn to_line(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for TreeLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:indent$}- {}", "", self.name, indent = self.depth * 2)?;
        if self.is_cycle {
            write!(f, " {}", CYCLE_MARKER)?;
        }
        Ok(())
    }
}

/// The rendered tree for a single root package.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RenderedTree {
    /// Root package name
    pub root: String,
    /// Visited nodes in preorder
    pub lines: Vec<TreeLine>,
}

/// Renders the tree reachable from `root`, starting at depth 0.
///
/// An undeclared root renders as a single leaf line.
///
/// # Example
///
/// ```rust
/// use deptree::graph::GraphStore;
/// use deptree::tree::render;
///
/// let mut store = GraphStore::new();
/// store.add_edge("pkg1", ["pkg2"]);
/// store.add_edge("pkg2", ["pkg1"]);
///
/// let lines: Vec<String> = render(&store, "pkg1").iter().map(|l| l.to_line()).collect();
/// assert_eq!(lines, vec!["- pkg1", "  - pkg2", "    - pkg1 (cycle)"]);
/// ```
pub fn render<'a>(store: &'a GraphStore, root: &'a str) -> Vec<TreeLine> {
    render_at(store, root, 0)
}

/// Renders the tree reachable from `root` with the root at `depth`.
///
/// The walk keeps its own stack of frames, so graph depth is limited by
/// memory rather than by the thread's call stack.
pub fn render_at<'a>(store: &'a GraphStore, root: &'a str, depth: usize) -> Vec<TreeLine> {
    let mut walk = Walk {
        store,
        visiting: HashSet::new(),
        stack: Vec::new(),
        lines: Vec::new(),
    };
    walk.enter(root, depth);

    while let Some(frame) = walk.stack.last_mut() {
        match frame.deps.next() {
            Some(dep) => {
                let child_depth = frame.depth + 1;
                walk.enter(dep, child_depth);
            }
            None => {
                let package = frame.package;
                walk.visiting.remove(package);
                walk.stack.pop();
            }
        }
    }

    walk.lines
}

/// A package whose dependencies are still being walked.
struct Frame<'a> {
    package: &'a str,
    depth: usize,
    deps: std::slice::Iter<'a, String>,
}

struct Walk<'a> {
    store: &'a GraphStore,
    /// Packages on the current path from the root
    visiting: HashSet<&'a str>,
    stack: Vec<Frame<'a>>,
    lines: Vec<TreeLine>,
}

impl<'a> Walk<'a> {
    fn enter(&mut self, package: &'a str, depth: usize) {
        if self.visiting.contains(package) {
            self.lines.push(TreeLine::cycle(depth, package));
            return;
        }
        self.lines.push(TreeLine::new(depth, package));

        // Undeclared packages are leaves
        let Some(deps) = self.store.dependencies_of(package) else {
            return;
        };

        self.visiting.insert(package);
        self.stack.push(Frame {
            package,
            depth,
            deps: deps.iter(),
        });
    }
}

/// Renders every declared package in insertion order.
pub fn render_all(store: &GraphStore) -> Vec<RenderedTree> {
    store
        .packages()
        .map(|root| RenderedTree {
            root: root.to_string(),
            lines: render(store, root),
        })
        .collect()
}

/// Writes the formatted tree under `root` to `writer`, one line per node.
pub fn write_tree<W: Write>(store: &GraphStore, root: &str, writer: &mut W) -> io::Result<()> {
    for line in render(store, root) {
        writeln!(writer, "{}", line)?;
    }
    Ok(())
}
