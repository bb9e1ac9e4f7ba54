//! An editing session over a form graph.
//!
//! Every user action goes through [`FormEditor`]: connections are validated before
//! they touch the graph, rejected edits leave a short-lived [`Notice`], and the
//! ordering and structural diagnostics are recomputed from scratch after every
//! successful mutation.

use crate::config::EditorConfig;
use crate::error::{ConnectionError, GraphError, ImportError};
use crate::graph::{
    Edge, Field, FormGraph, GraphPayload, Node, NodeKind, NodeTemplate, Position, SubmitData,
};
use crate::ordering::{OrderingReport, derive_order};
use crate::schema::{SchemaPayload, graph_to_fields, sample_graph};
use crate::validate::{can_connect_draft, structural_warnings};
use itertools::Itertools;
use std::time::{Duration, Instant};

mod builder;

pub use builder::FormEditorBuilder;

/// Pan and zoom of the canvas.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub x: f64,
    pub y: f64,
    pub zoom: f64,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            x: 0.0,
            y: 0.0,
            zoom: 1.0,
        }
    }
}

/// A transient message explaining why an edit was refused.
#[derive(Debug, Clone, PartialEq)]
pub struct Notice {
    pub message: String,
    issued_at: Instant,
    ttl: Duration,
}

impl Notice {
    fn new(message: String, ttl: Duration) -> Self {
        Self {
            message,
            issued_at: Instant::now(),
            ttl,
        }
    }

    pub fn is_expired_at(&self, now: Instant) -> bool {
        now.saturating_duration_since(self.issued_at) >= self.ttl
    }
}

/// Everything derived from the current graph.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Diagnostics {
    pub ordering: OrderingReport,
    pub structural: Vec<String>,
}

impl Diagnostics {
    pub fn compute(nodes: &[Node], edges: &[Edge]) -> Self {
        Self {
            ordering: derive_order(nodes, edges),
            structural: structural_warnings(nodes, edges),
        }
    }

    /// Ordering and structural warnings combined, without repeats.
    pub fn warnings(&self) -> Vec<&str> {
        self.ordering
            .warnings
            .iter()
            .chain(&self.structural)
            .map(String::as_str)
            .unique()
            .collect()
    }
}

pub struct FormEditor {
    graph: FormGraph,
    config: EditorConfig,
    selected: Option<String>,
    viewport: Viewport,
    notice: Option<Notice>,
    diagnostics: Diagnostics,
}

impl FormEditor {
    pub fn builder() -> FormEditorBuilder {
        FormEditorBuilder::new()
    }

    pub fn new() -> Self {
        Self::builder().build()
    }

    pub(crate) fn from_parts(graph: FormGraph, config: EditorConfig) -> Self {
        let diagnostics = Diagnostics::compute(graph.nodes(), graph.edges());
        Self {
            graph,
            config,
            selected: None,
            viewport: Viewport::default(),
            notice: None,
            diagnostics,
        }
    }

    pub fn graph(&self) -> &FormGraph {
        &self.graph
    }

    pub fn config(&self) -> &EditorConfig {
        &self.config
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn selected(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// The rejection notice, if one was issued and has not yet expired.
    pub fn notice(&self) -> Option<&Notice> {
        self.notice
            .as_ref()
            .filter(|n| !n.is_expired_at(Instant::now()))
    }

    pub fn dismiss_notice(&mut self) {
        self.notice = None;
    }

    /// Selects a node, or clears the selection with `None`.
    pub fn select(&mut self, node_id: Option<&str>) -> Result<(), GraphError> {
        match node_id {
            Some(id) if !self.graph.contains(id) => Err(GraphError::NodeNotFound(id.to_string())),
            _ => {
                self.selected = node_id.map(str::to_string);
                Ok(())
            }
        }
    }

    /// Drops a new node from the palette and returns its id.
    pub fn drop_node(&mut self, template: NodeTemplate, position: Position) -> String {
        let id = self.graph.create_node(template, position);
        self.refresh();
        id
    }

    /// Checks a connection that is still being drawn. Never mutates.
    pub fn preview_connection(&self, source: &str, target: &str) -> Result<(), ConnectionError> {
        can_connect_draft(source, target, self.graph.nodes())
    }

    /// Commits a connection. A rejection leaves the graph untouched and raises a notice.
    pub fn connect(&mut self, source: &str, target: &str) -> Result<(), ConnectionError> {
        match self.graph.connect(source, target).map(|_| ()) {
            Ok(()) => {
                self.refresh();
                Ok(())
            }
            Err(e) => {
                tracing::warn!(source, target, reason = %e, "connection rejected");
                self.notice = Some(Notice::new(e.to_string(), self.config.notice_ttl()));
                Err(e)
            }
        }
    }

    pub fn disconnect(&mut self, edge_id: &str) -> Option<Edge> {
        let removed = self.graph.remove_edge(edge_id);
        if removed.is_some() {
            self.refresh();
        }
        removed
    }

    /// Deletes a node together with its edges.
    pub fn delete_node(&mut self, node_id: &str) -> Result<Node, GraphError> {
        let node = self.graph.remove_node(node_id)?;
        if self.selected.as_deref() == Some(node_id) {
            self.selected = None;
        }
        self.refresh();
        Ok(node)
    }

    pub fn delete_selected(&mut self) -> Option<Node> {
        let id = self.selected.take()?;
        self.delete_node(&id).ok()
    }

    pub fn update_field(&mut self, node_id: &str, field: Field) -> Result<(), GraphError> {
        self.graph.update_field(node_id, field)?;
        self.refresh();
        Ok(())
    }

    pub fn update_submit(&mut self, node_id: &str, data: SubmitData) -> Result<(), GraphError> {
        self.graph.update_submit(node_id, data)?;
        self.refresh();
        Ok(())
    }

    pub fn move_node(&mut self, node_id: &str, position: Position) -> Result<(), GraphError> {
        self.graph.move_node(node_id, position)?;
        self.refresh();
        Ok(())
    }

    /// Imports a JSON document holding either a graph or a flat field array.
    pub fn import_json(&mut self, json: &str) -> Result<(), ImportError> {
        let payload = SchemaPayload::from_json(json).inspect_err(|e| {
            tracing::warn!(error = %e, "import rejected");
        })?;
        self.import_payload(payload)
    }

    /// Replaces the graph with an import payload and resets selection and viewport.
    /// On error nothing changes.
    pub fn import_payload(&mut self, payload: SchemaPayload) -> Result<(), ImportError> {
        payload.check().inspect_err(|e| {
            tracing::warn!(error = %e, "import rejected");
        })?;
        let graph = payload.into_graph(&self.config.layout, self.graph.allocator_mut());
        self.replace_graph(graph);
        Ok(())
    }

    /// Replaces the graph with the built-in sample form.
    pub fn load_sample(&mut self) {
        let graph = sample_graph(&self.config.layout, self.graph.allocator_mut());
        self.replace_graph(graph);
    }

    /// The flat field array in render order.
    pub fn export_fields(&self) -> Vec<Field> {
        graph_to_fields(self.graph.nodes(), self.graph.edges())
    }

    pub fn export_graph(&self) -> GraphPayload {
        self.graph.to_payload()
    }

    /// The submit payload for the submission collaborator, or the defaults when
    /// the graph has no submit node.
    pub fn submit_descriptor(&self) -> SubmitData {
        self.graph
            .nodes()
            .iter()
            .find_map(|n| match &n.kind {
                NodeKind::Submit(data) => Some(data.clone()),
                _ => None,
            })
            .unwrap_or_default()
    }

    fn replace_graph(&mut self, graph: GraphPayload) {
        self.graph.replace(graph);
        self.selected = None;
        self.viewport = Viewport::default();
        self.refresh();
    }

    fn refresh(&mut self) {
        self.diagnostics = Diagnostics::compute(self.graph.nodes(), self.graph.edges());
    }
}

impl Default for FormEditor {
    fn default() -> Self {
        Self::new()
    }
}
