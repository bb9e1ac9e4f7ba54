//! Common test utilities for building form graphs.
use formflow::prelude::*;

#[allow(dead_code)]
pub fn start(id: &str, x: f64, y: f64) -> Node {
    Node::new(id, Position::new(x, y), NodeKind::Start)
}

#[allow(dead_code)]
pub fn end(id: &str, x: f64, y: f64) -> Node {
    Node::new(id, Position::new(x, y), NodeKind::End)
}

#[allow(dead_code)]
pub fn submit(id: &str, x: f64, y: f64) -> Node {
    Node::new(
        id,
        Position::new(x, y),
        NodeKind::Submit(SubmitData::default()),
    )
}

/// A field node whose node id and field id are both `id`.
#[allow(dead_code)]
pub fn field(id: &str, field_type: FieldType, x: f64, y: f64) -> Node {
    let label = format!("Label {}", id);
    Node::field(Field::new(id, field_type, label), Position::new(x, y))
}

#[allow(dead_code)]
pub fn text(id: &str, x: f64, y: f64) -> Node {
    field(id, FieldType::Text, x, y)
}

#[allow(dead_code)]
pub fn section(id: &str, x: f64, y: f64) -> Node {
    field(id, FieldType::Static, x, y)
}

#[allow(dead_code)]
pub fn edges(pairs: &[(&str, &str)]) -> Vec<Edge> {
    pairs.iter().map(|(s, t)| Edge::new(*s, *t)).collect()
}

/// `start_1 -> static_1 -> text_1 -> end_1 -> submit_1`
#[allow(dead_code)]
pub fn create_single_section_graph() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        start("start_1", 40.0, 40.0),
        section("static_1", 300.0, 40.0),
        text("text_1", 300.0, 160.0),
        end("end_1", 40.0, 280.0),
        submit("submit_1", 40.0, 400.0),
    ];
    let edges = edges(&[
        ("start_1", "static_1"),
        ("static_1", "text_1"),
        ("text_1", "end_1"),
        ("end_1", "submit_1"),
    ]);
    (nodes, edges)
}

/// Two sections side by side. `static_2` is wired from start first but sits to the
/// right, so it must come second.
///
/// `static_1 -> text_1 -> text_2` and `static_2 -> text_3 -> end_1 -> submit_1`
#[allow(dead_code)]
pub fn create_two_section_graph() -> (Vec<Node>, Vec<Edge>) {
    let nodes = vec![
        start("start_1", 40.0, 40.0),
        section("static_2", 600.0, 40.0),
        section("static_1", 300.0, 40.0),
        text("text_1", 300.0, 160.0),
        text("text_2", 300.0, 280.0),
        text("text_3", 600.0, 160.0),
        end("end_1", 40.0, 400.0),
        submit("submit_1", 40.0, 520.0),
    ];
    let edges = edges(&[
        ("start_1", "static_2"),
        ("start_1", "static_1"),
        ("static_1", "text_1"),
        ("text_1", "text_2"),
        ("static_2", "text_3"),
        ("text_3", "end_1"),
        ("end_1", "submit_1"),
    ]);
    (nodes, edges)
}

#[allow(dead_code)]
pub fn ids(fields: &[Field]) -> Vec<&str> {
    fields.iter().map(|f| f.id.as_str()).collect()
}
