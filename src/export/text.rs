//! Plain text export implementation.
//!
//! Writes each tree as indented `- name` lines, followed by an optional
//! `cycle:` line per detected cycle.

use super::{Exporter, Report};
use std::io::{self, Write};

/// Text exporter implementation.
pub struct TextExporter;

impl Exporter for TextExporter {
    fn export<W: Write>(&self, report: &Report, writer: &mut W) -> io::Result<()> {
        for tree in &report.trees {
            for line in &tree.lines {
                writeln!(writer, "{}", line)?;
            }
        }

        if let Some(cycles) = &report.cycles {
            for cycle in cycles {
                writeln!(writer, "cycle: {}", cycle.cycle_path())?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::GraphStore;

    fn diamond() -> GraphStore {
        let mut store = GraphStore::new();
        store.add_edge("pkg1", ["pkg2", "pkg3"]);
        store.add_edge("pkg2", ["pkg3"]);
        store.add_edge("pkg3", Vec::<String>::new());
        store
    }

    #[test]
    fn test_text_export_all_packages() {
        let store = diamond();
        let mut output = Vec::new();

        TextExporter.export(&Report::all(&store), &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "- pkg1\n  - pkg2\n    - pkg3\n  - pkg3\n- pkg2\n  - pkg3\n- pkg3\n"
        );
    }

    #[test]
    fn test_text_export_with_cycles() {
        let mut store = GraphStore::new();
        store.add_edge("pkg1", ["pkg2"]);
        store.add_edge("pkg2", ["pkg1"]);

        let report = Report::for_roots(&store, &["pkg1"]).with_cycles(&store);
        let mut output = Vec::new();
        TextExporter.export(&report, &mut output).unwrap();

        let text = String::from_utf8(output).unwrap();
        assert_eq!(
            text,
            "- pkg1\n  - pkg2\n    - pkg1 (cycle)\ncycle: pkg1 -> pkg2 -> pkg1\n"
        );
    }

    #[test]
    fn test_text_export_empty_cycle_report() {
        let store = diamond();
        let report = Report::for_roots(&store, &["pkg3"]).with_cycles(&store);

        let mut output = Vec::new();
        TextExporter.export(&report, &mut output).unwrap();

        assert_eq!(String::from_utf8(output).unwrap(), "- pkg3\n");
    }
}
