use super::allocator::IdAllocator;
use super::field::{Field, PaletteItem};
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};
use std::cmp::Ordering;
use std::collections::BTreeMap;
use std::str::FromStr;

/// Canvas position of a node. Only used as a deterministic ordering tie-break.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    #[serde(default)]
    pub x: f64,
    #[serde(default)]
    pub y: f64,
}

impl Position {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Orders top-to-bottom, then left-to-right.
    pub fn layout_cmp(&self, other: &Position) -> Ordering {
        self.y
            .total_cmp(&other.y)
            .then_with(|| self.x.total_cmp(&other.x))
    }
}

/// How the submission collaborator should send the collected values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApiDescriptor {
    pub url: String,
    pub method: String,
    pub content_type: String,
    pub headers: BTreeMap<String, String>,
    pub body_template: String,
    pub success_key: String,
    pub success_default: String,
    pub error_key: String,
    pub error_default: String,
}

impl Default for ApiDescriptor {
    fn default() -> Self {
        Self {
            url: String::new(),
            method: "POST".to_string(),
            content_type: "json".to_string(),
            headers: BTreeMap::from([(
                "Content-Type".to_string(),
                "application/json".to_string(),
            )]),
            body_template: String::new(),
            success_key: "message".to_string(),
            success_default: "Submitted successfully.".to_string(),
            error_key: "error".to_string(),
            error_default: "Submission failed.".to_string(),
        }
    }
}

/// Payload of the submit node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SubmitData {
    pub label: String,
    pub color: String,
    pub api: ApiDescriptor,
}

impl Default for SubmitData {
    fn default() -> Self {
        Self {
            label: "Submit".to_string(),
            color: "#2563eb".to_string(),
            api: ApiDescriptor::default(),
        }
    }
}

/// The kind of a node together with its kind-specific payload.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    Start,
    End,
    Submit(SubmitData),
    Field(Field),
}

impl NodeKind {
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::Start => "start",
            NodeKind::End => "end",
            NodeKind::Submit(_) => "submit",
            NodeKind::Field(_) => "field",
        }
    }
}

/// A node of the form graph.
///
/// Serialized as `{ id, type, position, data }` where `data` holds `{ field }` for
/// field nodes and the submit payload for the submit node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawNode", into = "RawNode")]
pub struct Node {
    pub id: String,
    pub position: Position,
    pub kind: NodeKind,
}

impl Node {
    pub fn new(id: impl Into<String>, position: Position, kind: NodeKind) -> Self {
        Self {
            id: id.into(),
            position,
            kind,
        }
    }

    /// Wraps a field in a node that shares the field's id.
    pub fn field(field: Field, position: Position) -> Self {
        Self {
            id: field.id.clone(),
            position,
            kind: NodeKind::Field(field),
        }
    }

    /// Creates a node from a palette template, allocating its id.
    pub fn from_template(
        template: NodeTemplate,
        position: Position,
        allocator: &mut IdAllocator,
    ) -> Self {
        match template {
            NodeTemplate::Start => Self::new(allocator.allocate("start"), position, NodeKind::Start),
            NodeTemplate::End => Self::new(allocator.allocate("end"), position, NodeKind::End),
            NodeTemplate::Submit => Self::new(
                allocator.allocate("submit"),
                position,
                NodeKind::Submit(SubmitData::default()),
            ),
            NodeTemplate::Field(item) => Self::field(item.default_field(allocator), position),
        }
    }

    pub fn as_field(&self) -> Option<&Field> {
        match &self.kind {
            NodeKind::Field(field) => Some(field),
            _ => None,
        }
    }

    pub fn is_field(&self) -> bool {
        matches!(self.kind, NodeKind::Field(_))
    }

    /// True for field nodes whose field is a section marker.
    pub fn is_section(&self) -> bool {
        matches!(&self.kind, NodeKind::Field(field) if field.is_section())
    }

    /// True for `start`, `end` and `submit`.
    pub fn is_structural(&self) -> bool {
        !self.is_field()
    }

    pub fn is_start(&self) -> bool {
        matches!(self.kind, NodeKind::Start)
    }

    pub fn is_end(&self) -> bool {
        matches!(self.kind, NodeKind::End)
    }

    pub fn is_submit(&self) -> bool {
        matches!(self.kind, NodeKind::Submit(_))
    }
}

/// What a user can drop onto the canvas.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeTemplate {
    Start,
    End,
    Submit,
    Field(PaletteItem),
}

impl FromStr for NodeTemplate {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "start" => Ok(NodeTemplate::Start),
            "end" => Ok(NodeTemplate::End),
            "submit" => Ok(NodeTemplate::Submit),
            other => other.parse().map(NodeTemplate::Field),
        }
    }
}

// --- Wire format ---

#[derive(Serialize, Deserialize)]
struct RawNode {
    id: String,
    #[serde(rename = "type")]
    node_type: String,
    #[serde(default)]
    position: Position,
    #[serde(default)]
    data: Value,
}

impl TryFrom<RawNode> for Node {
    type Error = String;

    fn try_from(raw: RawNode) -> Result<Self, Self::Error> {
        let kind = match raw.node_type.as_str() {
            "start" => NodeKind::Start,
            "end" => NodeKind::End,
            "submit" => {
                let data = if raw.data.is_null() {
                    SubmitData::default()
                } else {
                    serde_json::from_value(raw.data).map_err(|e| {
                        format!("node '{}' has invalid submit data: {}", raw.id, e)
                    })?
                };
                NodeKind::Submit(data)
            }
            "field" => {
                let field = raw
                    .data
                    .get("field")
                    .cloned()
                    .ok_or_else(|| format!("field node '{}' has no data.field", raw.id))?;
                let field = serde_json::from_value(field)
                    .map_err(|e| format!("field node '{}' has an invalid field: {}", raw.id, e))?;
                NodeKind::Field(field)
            }
            other => return Err(format!("node '{}' has unknown type '{}'", raw.id, other)),
        };

        Ok(Node {
            id: raw.id,
            position: raw.position,
            kind,
        })
    }
}

impl From<Node> for RawNode {
    fn from(node: Node) -> Self {
        let node_type = node.kind.name().to_string();
        let data = match node.kind {
            NodeKind::Start => json!({ "label": "start" }),
            NodeKind::End => json!({ "label": "end" }),
            NodeKind::Submit(submit) => serde_json::to_value(submit).unwrap_or(Value::Null),
            NodeKind::Field(field) => json!({ "field": field }),
        };
        RawNode {
            id: node.id,
            node_type,
            position: node.position,
            data,
        }
    }
}
