use super::{Edge, Field, GraphIndex, IdAllocator, Node, NodeKind, NodeTemplate, Position, SubmitData};
use crate::error::{ConnectionError, GraphError};
use crate::validate::can_connect;
use serde::{Deserialize, Serialize};

/// The `{ nodes, edges }` payload used for graph import and export.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphPayload {
    pub nodes: Vec<Node>,
    pub edges: Vec<Edge>,
}

/// The editable form graph: nodes and edges in insertion order plus the id allocator.
#[derive(Debug, Clone, Default)]
pub struct FormGraph {
    nodes: Vec<Node>,
    edges: Vec<Edge>,
    allocator: IdAllocator,
}

impl FormGraph {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a graph from a payload, seeding the allocator from its field ids.
    pub fn from_payload(payload: GraphPayload) -> Self {
        let mut graph = Self::new();
        graph.replace(payload);
        graph
    }

    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn allocator(&self) -> &IdAllocator {
        &self.allocator
    }

    pub fn allocator_mut(&mut self) -> &mut IdAllocator {
        &mut self.allocator
    }

    pub fn index(&self) -> GraphIndex<'_> {
        GraphIndex::new(&self.nodes, &self.edges)
    }

    pub fn node(&self, id: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.node(id).is_some()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts a node, rejecting ids that are already taken.
    pub fn add_node(&mut self, node: Node) -> Result<(), GraphError> {
        if self.contains(&node.id) {
            return Err(GraphError::DuplicateNodeId(node.id));
        }
        tracing::debug!(node_id = %node.id, kind = node.kind.name(), "node added");
        self.nodes.push(node);
        Ok(())
    }

    /// Creates a node from a template at `position` and returns its id.
    pub fn create_node(&mut self, template: NodeTemplate, position: Position) -> String {
        let mut node = Node::from_template(template, position, &mut self.allocator);
        // Structural ids are not reseeded on import, so skip any that are taken.
        while self.contains(&node.id) {
            node = Node::from_template(template, position, &mut self.allocator);
        }
        let id = node.id.clone();
        tracing::debug!(node_id = %id, kind = node.kind.name(), "node created");
        self.nodes.push(node);
        id
    }

    /// Removes a node and every edge touching it.
    pub fn remove_node(&mut self, id: &str) -> Result<Node, GraphError> {
        let position = self
            .nodes
            .iter()
            .position(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))?;
        let node = self.nodes.remove(position);
        let removed_edges = self.remove_edges_touching(id);
        tracing::debug!(node_id = %id, removed_edges, "node removed");
        Ok(node)
    }

    /// Appends an edge without validation. Use [`FormGraph::connect`] for user edits.
    pub fn add_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }

    /// Validates and, if accepted, adds the edge `source -> target`.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<&Edge, ConnectionError> {
        can_connect(source, target, &self.nodes, &self.edges)?;
        self.edges.push(Edge::new(source, target));
        tracing::debug!(source, target, "edge added");
        Ok(&self.edges[self.edges.len() - 1])
    }

    /// Removes every edge whose source or target is `node_id`, returning how many were removed.
    pub fn remove_edges_touching(&mut self, node_id: &str) -> usize {
        let before = self.edges.len();
        self.edges.retain(|e| !e.touches(node_id));
        before - self.edges.len()
    }

    pub fn remove_edge(&mut self, edge_id: &str) -> Option<Edge> {
        let position = self.edges.iter().position(|e| e.id == edge_id)?;
        Some(self.edges.remove(position))
    }

    /// Replaces the field embedded in a field node.
    pub fn update_field(&mut self, node_id: &str, field: Field) -> Result<(), GraphError> {
        let node = self.node_mut(node_id)?;
        match &mut node.kind {
            NodeKind::Field(existing) => {
                *existing = field;
                Ok(())
            }
            _ => Err(GraphError::NotAFieldNode(node_id.to_string())),
        }
    }

    /// Replaces the payload of a submit node.
    pub fn update_submit(&mut self, node_id: &str, data: SubmitData) -> Result<(), GraphError> {
        let node = self.node_mut(node_id)?;
        match &mut node.kind {
            NodeKind::Submit(existing) => {
                *existing = data;
                Ok(())
            }
            _ => Err(GraphError::NotASubmitNode(node_id.to_string())),
        }
    }

    /// Moves a node on the canvas.
    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), GraphError> {
        self.node_mut(node_id)?.position = position;
        Ok(())
    }

    /// Replaces the whole graph. The allocator is reseeded from the incoming field ids
    /// and keeps every counter it already had.
    pub fn replace(&mut self, payload: GraphPayload) {
        self.allocator.reseed(
            payload
                .nodes
                .iter()
                .filter_map(Node::as_field)
                .map(|f| f.id.as_str()),
        );
        tracing::debug!(
            nodes = payload.nodes.len(),
            edges = payload.edges.len(),
            "graph replaced"
        );
        self.nodes = payload.nodes;
        self.edges = payload.edges;
    }

    pub fn to_payload(&self) -> GraphPayload {
        GraphPayload {
            nodes: self.nodes.clone(),
            edges: self.edges.clone(),
        }
    }

    fn node_mut(&mut self, id: &str) -> Result<&mut Node, GraphError> {
        self.nodes
            .iter_mut()
            .find(|n| n.id == id)
            .ok_or_else(|| GraphError::NodeNotFound(id.to_string()))
    }
}
