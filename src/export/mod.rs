//! Output formats for rendered dependency trees.
//!
//! This module provides exporters that write one or more rendered trees,
//! plus an optional cycle report, as plain text or JSON.

pub mod json;
pub mod text;

use crate::graph::{CycleInfo, GraphStore};
use crate::tree::{render, render_all, RenderedTree};
use std::io::{self, Write};

/// Output format options
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    /// Indented `- name` lines, one per visited node
    #[default]
    Text,
    /// JSON format - machine-readable, full data
    Json,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "text" | "txt" => Ok(OutputFormat::Text),
            "json" => Ok(OutputFormat::Json),
            _ => Err(format!(
                "Unknown output format: '{}'. Valid formats: text, json",
                s
            )),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OutputFormat::Text => write!(f, "text"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Data container for export operations.
#[derive(Debug, Clone, Default)]
pub struct Report {
    /// Rendered trees, in the order they should be written
    pub trees: Vec<RenderedTree>,
    /// Detected cycles, when a cycle report was requested
    pub cycles: Option<Vec<CycleInfo>>,
}

impl Report {
    /// Renders every declared package of `store`.
    pub fn all(store: &GraphStore) -> Self {
        Self {
            trees: render_all(store),
            cycles: None,
        }
    }

    /// Renders only the given roots, in the given order.
    pub fn for_roots<S: AsRef<str>>(store: &GraphStore, roots: &[S]) -> Self {
        Self {
            trees: roots
                .iter()
                .map(|root| RenderedTree {
                    root: root.as_ref().to_string(),
                    lines: render(store, root.as_ref()),
                })
                .collect(),
            cycles: None,
        }
    }

    /// Attaches the cycle report for `store`.
    pub fn with_cycles(mut self, store: &GraphStore) -> Self {
        self.cycles = Some(store.detect_cycles());
        self
    }

    /// Total number of lines across all trees.
    pub fn line_count(&self) -> usize {
        self.trees.iter().map(|tree| tree.lines.len()).sum()
    }
}

/// Trait for exporters.
pub trait Exporter {
    /// Export the report to the given writer.
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()>;
}

/// Export a report in the specified format.
pub fn export<W: Write>(format: OutputFormat, report: &Report, writer: &mut W) -> io::Result<()> {
    match format {
        OutputFormat::Text => text::TextExporter.export(report, writer),
        OutputFormat::Json => json::JsonExporter.export(report, writer),
    }
}

/// Export a report to a string.
pub fn export_to_string(format: OutputFormat, report: &Report) -> io::Result<String> {
    let mut buffer = Vec::new();
    export(format, report, &mut buffer)?;
    String::from_utf8(buffer).map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))
}
