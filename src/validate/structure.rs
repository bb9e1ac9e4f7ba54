use crate::graph::{Edge, GraphIndex, Node};
use crate::ordering::derive_order;
use ahash::AHashSet;

/// Advisory checks over the whole graph. None of these block editing.
///
/// Reports missing terminal nodes, a submit node not fed by exactly one edge from
/// `end`, wiring that breaks linearity (possible after an import), and field nodes
/// that no section path reaches.
pub fn structural_warnings(nodes: &[Node], edges: &[Edge]) -> Vec<String> {
    let index = GraphIndex::new(nodes, edges);
    let mut warnings = Vec::new();

    let start = nodes.iter().find(|n| n.is_start());
    let end = nodes.iter().find(|n| n.is_end());
    let submit = nodes.iter().find(|n| n.is_submit());

    if start.is_none() {
        warnings.push("Missing Start node.".to_string());
    }
    if end.is_none() {
        warnings.push("Missing End node.".to_string());
    }
    if submit.is_none() {
        warnings.push("Missing Submit node.".to_string());
    }

    if let (Some(end), Some(submit)) = (end, submit) {
        let incoming = index.incoming(&submit.id);
        if incoming.len() != 1 || incoming[0] != end.id {
            warnings.push("Submit must have exactly one incoming edge from End.".to_string());
        }
    }

    for node in nodes {
        let outs = index.outgoing(&node.id).len();
        let ins = index.incoming(&node.id).len();

        if node.is_start() && ins > 0 {
            warnings.push("Start has incoming edges (not allowed).".to_string());
        }
        if node.is_submit() && outs > 0 {
            warnings.push("Submit has outgoing edges (not allowed).".to_string());
        }
        if node.is_end() && outs > 1 {
            warnings.push("End should have only one outgoing edge to Submit.".to_string());
        } else if !node.is_start() && !node.is_submit() && outs > 1 {
            warnings.push(format!(
                "Node {} has multiple outgoing edges; order is linear.",
                node.id
            ));
        }
        if !node.is_start() && ins > 1 {
            warnings.push(format!(
                "Node {} has multiple incoming edges; order is linear.",
                node.id
            ));
        }
    }

    let report = derive_order(nodes, edges);
    let ordered: AHashSet<&str> = report.ordered_fields.iter().map(|f| f.id.as_str()).collect();
    for field in nodes.iter().filter_map(Node::as_field) {
        if !ordered.contains(field.id.as_str()) {
            warnings.push(format!(
                "Field \"{}\" ({}) is not reachable from any section path.",
                field.display_name(),
                field.id
            ));
        }
    }

    warnings
}
