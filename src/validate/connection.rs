use super::cycle::would_create_cycle;
use crate::error::ConnectionError;
use crate::graph::{Edge, Node, NodeKind};

/// Decides whether the edge `source -> target` may be added to the graph.
///
/// Checks run in a fixed order and the first failure is returned:
/// existence and self-loops, duplicates, kind-pair rules, single in/out edge
/// (`start` may fan out), and finally cycles. Nothing is mutated.
pub fn can_connect(
    source: &str,
    target: &str,
    nodes: &[Node],
    edges: &[Edge],
) -> Result<(), ConnectionError> {
    let (s, t) = lookup_pair(source, target, nodes)?;
    if source == target {
        return Err(ConnectionError::SelfLoop);
    }

    if edges
        .iter()
        .any(|e| e.source == source && e.target == target)
    {
        return Err(ConnectionError::DuplicateEdge);
    }

    check_kind_pair(s, t)?;

    if !s.is_start() && edges.iter().any(|e| e.source == source) {
        return Err(ConnectionError::MultipleOutgoing);
    }
    if edges.iter().any(|e| e.target == target) {
        return Err(ConnectionError::MultipleIncoming);
    }

    if would_create_cycle(source, target, edges) {
        return Err(ConnectionError::Cycle);
    }

    Ok(())
}

/// The relaxed check used while a connection is still being drawn.
///
/// Only the kind-pair rules apply. Duplicates, fan-out and cycles are left to
/// [`can_connect`], so every edge it accepts also passes here.
pub fn can_connect_draft(
    source: &str,
    target: &str,
    nodes: &[Node],
) -> Result<(), ConnectionError> {
    let (s, t) = lookup_pair(source, target, nodes)?;
    check_kind_pair(s, t)
}

fn lookup_pair<'a>(
    source: &str,
    target: &str,
    nodes: &'a [Node],
) -> Result<(&'a Node, &'a Node), ConnectionError> {
    let find = |id: &str| nodes.iter().find(|n| n.id == id);
    match (find(source), find(target)) {
        (Some(s), Some(t)) => Ok((s, t)),
        _ => Err(ConnectionError::UnknownNodes),
    }
}

fn check_kind_pair(s: &Node, t: &Node) -> Result<(), ConnectionError> {
    if t.is_start() {
        return Err(ConnectionError::StartHasIncoming);
    }
    match (&s.kind, &t.kind) {
        (NodeKind::Submit(_), _) => Err(ConnectionError::SubmitHasOutgoing),
        (NodeKind::End, NodeKind::Submit(_)) => Ok(()),
        (NodeKind::End, _) => Err(ConnectionError::EndToNonSubmit),
        (_, NodeKind::Submit(_)) => Err(ConnectionError::SubmitFromNonEnd),
        _ => Ok(()),
    }
}
