use super::{Edge, Node};
use ahash::AHashMap;
use std::cmp::Ordering;

/// A read-only adjacency view over a node and edge snapshot.
pub struct GraphIndex<'a> {
    nodes: AHashMap<&'a str, &'a Node>,
    outgoing: AHashMap<&'a str, Vec<&'a str>>,
    incoming: AHashMap<&'a str, Vec<&'a str>>,
}

impl<'a> GraphIndex<'a> {
    pub fn new(nodes: &'a [Node], edges: &'a [Edge]) -> Self {
        let mut by_id = AHashMap::with_capacity(nodes.len());
        // First occurrence wins when ids collide.
        for node in nodes {
            by_id.entry(node.id.as_str()).or_insert(node);
        }

        let mut outgoing: AHashMap<&str, Vec<&str>> = AHashMap::new();
        let mut incoming: AHashMap<&str, Vec<&str>> = AHashMap::new();
        for edge in edges {
            outgoing
                .entry(edge.source.as_str())
                .or_default()
                .push(edge.target.as_str());
            incoming
                .entry(edge.target.as_str())
                .or_default()
                .push(edge.source.as_str());
        }

        Self {
            nodes: by_id,
            outgoing,
            incoming,
        }
    }

    pub fn node(&self, id: &str) -> Option<&'a Node> {
        self.nodes.get(id).copied()
    }

    pub fn outgoing(&self, id: &str) -> &[&'a str] {
        self.outgoing.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn incoming(&self, id: &str) -> &[&'a str] {
        self.incoming.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Orders node ids by layout position (`y`, then `x`), then by id.
    /// Ids without a node sort as if positioned at the origin.
    pub fn layout_cmp(&self, a: &str, b: &str) -> Ordering {
        let pa = self.node(a).map(|n| n.position).unwrap_or_default();
        let pb = self.node(b).map(|n| n.position).unwrap_or_default();
        pa.layout_cmp(&pb).then_with(|| a.cmp(b))
    }

    /// Returns `ids` sorted by [`GraphIndex::layout_cmp`].
    pub fn sort_by_layout(&self, ids: &[&'a str]) -> Vec<&'a str> {
        let mut sorted = ids.to_vec();
        sorted.sort_by(|a, b| self.layout_cmp(a, b));
        sorted
    }
}
