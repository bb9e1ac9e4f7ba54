//! Prelude module for convenient imports
//!
//! This module re-exports the most commonly used types and functions from the formflow crate.
//!
//! # Example
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//!
//! # fn run_example() -> Result<()> {
//! let schema_json = std::fs::read_to_string("path/to/schema.json")?;
//!
//! let mut editor = FormEditor::new();
//! editor.import_json(&schema_json)?;
//!
//! for warning in editor.diagnostics().warnings() {
//!     println!("warning: {}", warning);
//! }
//! let fields = editor.export_fields();
//! println!("{} fields", fields.len());
//! # Ok(())
//! # }
//! ```

// Graph model
pub use crate::graph::{
    ApiDescriptor, Edge, Field, FieldType, FormGraph, GraphPayload, IdAllocator, Node, NodeKind,
    NodeTemplate, PaletteItem, Position, SubmitData,
};

// Validation and ordering
pub use crate::ordering::{OrderingReport, derive_order};
pub use crate::validate::{can_connect, can_connect_draft, structural_warnings, would_create_cycle};

// Schema codec
pub use crate::schema::{LayoutConfig, SchemaPayload, flat_to_graph, graph_to_fields};

// Editing session
pub use crate::config::EditorConfig;
pub use crate::editor::{Diagnostics, FormEditor, Viewport};

// Error types
pub use crate::error::{ConfigError, ConnectionError, GraphError, ImportError};

// Diagnostics formatting
pub use crate::report::InspectorFormatter;

// Result type alias for convenience
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;
