use super::layout::LayoutConfig;
use crate::error::ImportError;
use crate::graph::{Edge, Field, GraphPayload, IdAllocator, Node, NodeKind, SubmitData};
use crate::ordering::derive_order;
use ahash::AHashSet;
use serde_json::Value;

/// A decoded import payload.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaPayload {
    /// A full `{ nodes, edges }` graph.
    Graph(GraphPayload),
    /// A legacy flat field array in render order.
    Flat(Vec<Field>),
}

impl SchemaPayload {
    /// Parses and checks an import document.
    ///
    /// Objects carrying `nodes` and `edges` arrays are read as graphs, arrays as flat
    /// field lists. Anything else is rejected.
    pub fn from_json(json: &str) -> Result<Self, ImportError> {
        let value: Value =
            serde_json::from_str(json).map_err(|e| ImportError::JsonParseError(e.to_string()))?;
        Self::from_value(value)
    }

    pub fn from_value(value: Value) -> Result<Self, ImportError> {
        let is_graph = value.get("nodes").is_some_and(Value::is_array)
            && value.get("edges").is_some_and(Value::is_array);

        let payload = if is_graph {
            let graph: GraphPayload = serde_json::from_value(value)
                .map_err(|e| ImportError::JsonParseError(e.to_string()))?;
            SchemaPayload::Graph(graph)
        } else if value.is_array() {
            let fields: Vec<Field> = serde_json::from_value(value)
                .map_err(|e| ImportError::JsonParseError(e.to_string()))?;
            SchemaPayload::Flat(fields)
        } else {
            return Err(ImportError::UnrecognizedPayload);
        };

        payload.check()?;
        Ok(payload)
    }

    /// Rejects duplicate ids, field nodes whose field id differs from the node id
    /// and edges that point at missing nodes.
    pub fn check(&self) -> Result<(), ImportError> {
        match self {
            SchemaPayload::Graph(graph) => {
                let mut seen = AHashSet::with_capacity(graph.nodes.len());
                for node in &graph.nodes {
                    if !seen.insert(node.id.as_str()) {
                        return Err(ImportError::DuplicateNodeId(node.id.clone()));
                    }
                    if let Some(field) = node.as_field().filter(|f| f.id != node.id) {
                        return Err(ImportError::InvalidNode {
                            node_id: node.id.clone(),
                            message: format!("embedded field id '{}' differs", field.id),
                        });
                    }
                }
                for edge in &graph.edges {
                    for endpoint in [&edge.source, &edge.target] {
                        if !seen.contains(endpoint.as_str()) {
                            return Err(ImportError::DanglingEdge {
                                edge_id: edge.id.clone(),
                                missing_node_id: endpoint.clone(),
                            });
                        }
                    }
                }
                Ok(())
            }
            SchemaPayload::Flat(fields) => {
                let mut seen = AHashSet::with_capacity(fields.len());
                match fields.iter().find(|f| !seen.insert(f.id.as_str())) {
                    Some(duplicate) => Err(ImportError::DuplicateNodeId(duplicate.id.clone())),
                    None => Ok(()),
                }
            }
        }
    }

    /// Converts the payload into a graph. Flat arrays are synthesized into a linear
    /// graph using `layout`; `allocator` is reseeded from the payload's field ids.
    pub fn into_graph(self, layout: &LayoutConfig, allocator: &mut IdAllocator) -> GraphPayload {
        match self {
            SchemaPayload::Graph(graph) => graph,
            SchemaPayload::Flat(fields) => flat_to_graph(&fields, layout, allocator),
        }
    }
}

/// Exports the fields of a graph in render order.
///
/// Falls back to every field node in insertion order when the ordering engine
/// yields nothing, so malformed graphs still export.
pub fn graph_to_fields(nodes: &[Node], edges: &[Edge]) -> Vec<Field> {
    let ordered = derive_order(nodes, edges).ordered_fields;
    if !ordered.is_empty() {
        return ordered;
    }
    nodes.iter().filter_map(Node::as_field).cloned().collect()
}

/// Builds the default linear graph `start -> f1 -> ... -> fn -> end -> submit`
/// for a flat field array. No sections are introduced.
pub fn flat_to_graph(
    fields: &[Field],
    layout: &LayoutConfig,
    allocator: &mut IdAllocator,
) -> GraphPayload {
    allocator.reseed(fields.iter().map(|f| f.id.as_str()));

    let field_nodes: Vec<Node> = fields
        .iter()
        .enumerate()
        .map(|(i, field)| Node::field(field.clone(), layout.grid_position(i)))
        .collect();

    linear_graph(field_nodes, layout, allocator)
}

/// Wraps already positioned field nodes with `start`, `end` and `submit` and chains
/// everything in order.
pub(crate) fn linear_graph(
    field_nodes: Vec<Node>,
    layout: &LayoutConfig,
    allocator: &mut IdAllocator,
) -> GraphPayload {
    let count = field_nodes.len();
    let start = Node::new(
        allocator.allocate("start"),
        layout.structural_position(0),
        NodeKind::Start,
    );
    let end = Node::new(
        allocator.allocate("end"),
        layout.structural_position(count),
        NodeKind::End,
    );
    let submit = Node::new(
        allocator.allocate("submit"),
        layout.structural_position(count + 1),
        NodeKind::Submit(SubmitData::default()),
    );

    let chain: Vec<&str> = std::iter::once(start.id.as_str())
        .chain(field_nodes.iter().map(|n| n.id.as_str()))
        .chain([end.id.as_str(), submit.id.as_str()])
        .collect();
    let edges = chain.windows(2).map(|w| Edge::new(w[0], w[1])).collect();

    let mut nodes = Vec::with_capacity(count + 3);
    nodes.push(start);
    nodes.extend(field_nodes);
    nodes.push(end);
    nodes.push(submit);

    GraphPayload { nodes, edges }
}
