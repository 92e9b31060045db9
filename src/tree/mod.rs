//! Textual dependency tree rendering.
//!
//! Turns a [`GraphStore`](crate::graph::GraphStore) and a root package into
//! an indented, depth-first list of [`TreeLine`]s.

mod renderer;

pub use renderer::{
    render, render_all, render_at, write_tree, RenderedTree, TreeLine, CYCLE_MARKER,
};
