use super::FormEditor;
use crate::config::EditorConfig;
use crate::graph::{FormGraph, GraphPayload};
use crate::schema::LayoutConfig;
use std::time::Duration;

pub struct FormEditorBuilder {
    config: EditorConfig,
    graph: Option<GraphPayload>,
}

impl FormEditorBuilder {
    pub fn new() -> Self {
        Self {
            config: EditorConfig::default(),
            graph: None,
        }
    }

    pub fn with_config(mut self, config: EditorConfig) -> Self {
        self.config = config;
        self
    }

    pub fn with_layout(mut self, layout: LayoutConfig) -> Self {
        self.config.layout = layout;
        self
    }

    pub fn with_notice_ttl(mut self, ttl: Duration) -> Self {
        self.config.notice_ttl_ms = u64::try_from(ttl.as_millis()).unwrap_or(u64::MAX);
        self
    }

    /// Starts the session from an existing graph. The payload is taken as is;
    /// use [`FormEditor::import_payload`] for untrusted input.
    pub fn with_graph(mut self, graph: GraphPayload) -> Self {
        self.graph = Some(graph);
        self
    }

    pub fn build(self) -> FormEditor {
        let graph = self
            .graph
            .map(FormGraph::from_payload)
            .unwrap_or_default();
        FormEditor::from_parts(graph, self.config)
    }
}

impl Default for FormEditorBuilder {
    fn default() -> Self {
        Self::new()
    }
}
