use crate::graph::{Edge, Field, GraphIndex, Node};
use itertools::Itertools;
use serde::Serialize;

mod walker;

use walker::SectionWalker;

/// The result of ordering a form graph.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct OrderingReport {
    /// Fields in render order, section markers included.
    pub ordered_fields: Vec<Field>,
    /// Node ids along the traversed paths, for the diagnostics trail.
    pub sequence: Vec<String>,
    /// Human-readable, non-fatal problems found while ordering.
    pub warnings: Vec<String>,
}

impl OrderingReport {
    pub fn field_ids(&self) -> Vec<&str> {
        self.ordered_fields.iter().map(|f| f.id.as_str()).collect()
    }
}

/// Linearizes a form graph into its field sequence.
///
/// Sections are the section-marker fields wired directly from `start`. They are
/// emitted in layout order (top to bottom, left to right, then by id), each followed
/// by the chain of fields hanging off it. A field consumed by one section is never
/// emitted again. Partially built or invalid graphs yield partial output and
/// warnings; this function never fails.
pub fn derive_order(nodes: &[Node], edges: &[Edge]) -> OrderingReport {
    let index = GraphIndex::new(nodes, edges);
    let mut report = OrderingReport::default();

    let start = nodes.iter().find(|n| n.is_start());
    let end = nodes.iter().find(|n| n.is_end());
    let submit = nodes.iter().find(|n| n.is_submit());

    if start.is_none() {
        report.warnings.push("Missing Start node.".to_string());
    }
    if end.is_none() {
        report.warnings.push("Missing End node.".to_string());
    }
    if submit.is_none() {
        report.warnings.push("Missing Submit node.".to_string());
    }

    let Some(start) = start else {
        return report;
    };

    let start_targets = index.outgoing(&start.id);
    let roots: Vec<&str> = start_targets
        .iter()
        .copied()
        .filter(|id| index.node(id).is_some_and(Node::is_section))
        .unique()
        .collect();
    if !start_targets.is_empty() && roots.is_empty() {
        report.warnings.push(
            "No static-wrapper (section) connected from Start. Connect Start → Static nodes."
                .to_string(),
        );
    }

    let mut walker = SectionWalker::new(&index, nodes.len());
    for root in index.sort_by_layout(&roots) {
        walker.walk(root, &mut report);
    }

    if let (Some(end), Some(submit)) = (end, submit) {
        report.sequence.push(end.id.clone());
        report.sequence.push(submit.id.clone());
    }

    tracing::debug!(
        sections = roots.len(),
        fields = report.ordered_fields.len(),
        warnings = report.warnings.len(),
        "derived field order"
    );
    report
}
