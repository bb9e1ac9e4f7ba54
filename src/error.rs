use thiserror::Error;

/// Reasons a proposed connection between two nodes is rejected.
///
/// The display string of each variant is the message shown to the user.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConnectionError {
    #[error("Unknown nodes")]
    UnknownNodes,

    #[error("No self-loops")]
    SelfLoop,

    #[error("Duplicate edge")]
    DuplicateEdge,

    #[error("Start cannot have incoming edges")]
    StartHasIncoming,

    #[error("Submit cannot have outgoing edges")]
    SubmitHasOutgoing,

    #[error("Submit must connect only from End")]
    SubmitFromNonEnd,

    #[error("End must connect only to Submit")]
    EndToNonSubmit,

    #[error("Only one outgoing edge allowed per node")]
    MultipleOutgoing,

    #[error("Only one incoming edge allowed per node")]
    MultipleIncoming,

    #[error("Connection would create a cycle")]
    Cycle,
}

/// Errors that reject an import payload. The current graph is never touched
/// when one of these is returned.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ImportError {
    #[error("Failed to parse import JSON: {0}")]
    JsonParseError(String),

    #[error("Import payload is neither a {{nodes, edges}} graph nor a field array")]
    UnrecognizedPayload,

    #[error("Node id '{0}' appears more than once in the imported graph")]
    DuplicateNodeId(String),

    #[error("Edge '{edge_id}' references node '{missing_node_id}', which is not in the imported graph")]
    DanglingEdge {
        edge_id: String,
        missing_node_id: String,
    },

    #[error("Node '{node_id}' is invalid: {message}")]
    InvalidNode { node_id: String, message: String },
}

/// Errors raised by direct mutations of the graph model.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GraphError {
    #[error("Node '{0}' not found")]
    NodeNotFound(String),

    #[error("Node id '{0}' is already in use")]
    DuplicateNodeId(String),

    #[error("Node '{0}' is not a field node")]
    NotAFieldNode(String),

    #[error("Node '{0}' is not a submit node")]
    NotASubmitNode(String),
}

/// Errors that can occur while loading editor configuration.
#[derive(Error, Debug, Clone)]
pub enum ConfigError {
    #[error("Could not read config file '{path}': {message}")]
    Read { path: String, message: String },

    #[error("Failed to parse config JSON: {0}")]
    Parse(String),
}
