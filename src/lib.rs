//! # Formflow - Form Flow Graph Validation and Ordering Engine
//!
//! **Formflow** turns a visually composed form, drawn as a directed graph of flow markers
//! (`start`, `end`, `submit`) and input fields, into one unambiguous, ordered list of
//! fields to render and submit.
//!
//! ## Core Workflow
//!
//! 1.  **Build or Import a Graph**: Drop nodes and connect them through a [`FormEditor`](editor::FormEditor),
//!     or import a `{ nodes, edges }` document or a legacy flat field array.
//! 2.  **Validate Edits**: Every proposed edge is checked by [`can_connect`](validate::can_connect)
//!     before it touches the graph. Self-loops, duplicates, illegal kind pairs, fan-out and
//!     cycles are rejected with a reason.
//! 3.  **Derive the Order**: [`derive_order`](ordering::derive_order) walks each section branch
//!     wired from `start` and produces the ordered fields, a diagnostic node trail and warnings.
//! 4.  **Export**: [`graph_to_fields`](schema::graph_to_fields) yields the flat field array
//!     consumed by the form renderer and the submission collaborator.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use formflow::prelude::*;
//!
//! fn main() -> std::result::Result<(), Box<dyn std::error::Error>> {
//!     let mut editor = FormEditor::new();
//!
//!     // 1. Drop the structural nodes and a section with one field.
//!     let start = editor.drop_node(NodeTemplate::Start, Position::new(40.0, 40.0));
//!     let section = editor.drop_node(
//!         NodeTemplate::Field(PaletteItem::Static),
//!         Position::new(300.0, 40.0),
//!     );
//!     let name = editor.drop_node(
//!         NodeTemplate::Field(PaletteItem::Text),
//!         Position::new(300.0, 160.0),
//!     );
//!     let end = editor.drop_node(NodeTemplate::End, Position::new(40.0, 280.0));
//!     let submit = editor.drop_node(NodeTemplate::Submit, Position::new(40.0, 400.0));
//!
//!     // 2. Wire them. Illegal connections come back as errors with a reason.
//!     editor.connect(&start, &section)?;
//!     editor.connect(&section, &name)?;
//!     editor.connect(&name, &end)?;
//!     editor.connect(&end, &submit)?;
//!     if let Err(reason) = editor.connect(&end, &name) {
//!         println!("Rejected: {}", reason); // "End must connect only to Submit"
//!     }
//!
//!     // 3. Inspect the derived order.
//!     let diagnostics = editor.diagnostics();
//!     println!(
//!         "{}",
//!         InspectorFormatter::format_report(&diagnostics.ordering, editor.graph().nodes())
//!     );
//!
//!     // 4. Export the flat schema.
//!     let fields = editor.export_fields();
//!     println!("{}", serde_json::to_string_pretty(&fields)?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod editor;
pub mod error;
pub mod graph;
pub mod ordering;
pub mod prelude;
pub mod report;
pub mod schema;
pub mod validate;
