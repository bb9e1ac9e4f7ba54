use crate::graph::Edge;
use ahash::{AHashMap, AHashSet};

/// Returns `true` if adding `source -> target` to `edges` would close a cycle,
/// i.e. `source` is reachable from `target`.
///
/// Each node is expanded at most once, so the search is linear in the number of edges.
pub fn would_create_cycle(source: &str, target: &str, edges: &[Edge]) -> bool {
    let mut adjacency: AHashMap<&str, Vec<&str>> = AHashMap::new();
    for edge in edges {
        adjacency
            .entry(edge.source.as_str())
            .or_default()
            .push(edge.target.as_str());
    }
    adjacency.entry(source).or_default().push(target);

    let mut stack = vec![target];
    let mut seen: AHashSet<&str> = AHashSet::new();
    while let Some(current) = stack.pop() {
        if current == source {
            return true;
        }
        if !seen.insert(current) {
            continue;
        }
        if let Some(next) = adjacency.get(current) {
            stack.extend(next.iter().copied().filter(|n| !seen.contains(n)));
        }
    }
    false
}
