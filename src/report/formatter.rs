use crate::graph::{GraphIndex, Node, NodeKind};
use crate::ordering::OrderingReport;
use itertools::Itertools;

const ARROW: &str = "  →  ";

/// Formats ordering output into the text shown by the order inspector.
pub struct InspectorFormatter;

impl InspectorFormatter {
    /// Renders a node id sequence as labels joined by arrows.
    ///
    /// Consecutive repeats of the same node are shown once.
    pub fn format_sequence(sequence: &[String], nodes: &[Node]) -> String {
        if sequence.is_empty() {
            return "No path yet".to_string();
        }
        let index = GraphIndex::new(nodes, &[]);
        sequence
            .iter()
            .dedup()
            .map(|id| Self::label(id, index.node(id)))
            .join(ARROW)
    }

    /// Renders the trail followed by a bulleted warning list, if any.
    pub fn format_report(report: &OrderingReport, nodes: &[Node]) -> String {
        let mut out = Self::format_sequence(&report.sequence, nodes);
        if !report.warnings.is_empty() {
            out.push_str("\nWarnings:");
            for warning in &report.warnings {
                out.push_str("\n  - ");
                out.push_str(warning);
            }
        }
        out
    }

    fn label(id: &str, node: Option<&Node>) -> String {
        match node.map(|n| &n.kind) {
            Some(NodeKind::Start) => "Start".to_string(),
            Some(NodeKind::End) => "End".to_string(),
            Some(NodeKind::Submit(_)) => "Submit".to_string(),
            Some(NodeKind::Field(field)) => field.display_name().to_string(),
            None => id.to_string(),
        }
    }
}
