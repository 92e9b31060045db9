//! JSON export implementation.
//!
//! Exports rendered trees in JSON format for machine-readable output.

use super::{Exporter, Report};
use crate::tree::RenderedTree;
use serde::Serialize;
use std::io::{self, Write};

/// JSON exporter implementation.
pub struct JsonExporter;

/// Serializable cycle info for JSON output.
#[derive(Serialize)]
struct JsonCycle {
    packages: Vec<String>,
    path: String,
}

/// Root JSON export structure.
#[derive(Serialize)]
struct JsonExport<'a> {
    trees: &'a [RenderedTree],
    #[serde(skip_serializing_if = "Option::is_none")]
    cycles: Option<Vec<JsonCycle>>,
}

impl Exporter for JsonExporter {
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        let cycles = report.cycles.as_ref().map(|cycles| {
            cycles
                .iter()
                .map(|c| JsonCycle {
                    packages: c.nodes.clone(),
                    path: c.cycle_path(),
                })
                .collect()
        });

        let export = JsonExport {
            trees: &report.trees,
            cycles,
        };

        let json = serde_json::to_string_pretty(&export)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        writeln!(writer, "{}", json)
    }
}
