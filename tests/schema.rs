//! Tests for the schema codec: import, export and graph synthesis.
mod common;
use common::*;
use formflow::prelude::*;
use formflow::schema::{sample_fields, sample_graph};
use serde_json::json;

fn flat(ids_and_types: &[(&str, FieldType)]) -> Vec<Field> {
    ids_and_types
        .iter()
        .map(|(id, t)| Field::new(*id, *t, format!("Label {}", id)))
        .collect()
}

#[test]
fn test_flat_import_then_export_is_unchanged() {
    let json = r#"[{"id":"text_1","type":"text","label":"Full Name","isRequired":true,"placeholder":"John Doe","inputType":"text"}]"#;
    let imported: Vec<Field> = serde_json::from_str(json).unwrap();

    let mut editor = FormEditor::new();
    editor.import_json(json).expect("flat import should succeed");
    let exported = editor.export_fields();

    assert_eq!(exported, imported);
    assert_eq!(
        serde_json::to_value(&exported).unwrap(),
        serde_json::from_str::<serde_json::Value>(json).unwrap()
    );
}

#[test]
fn test_flat_export_keeps_absent_keys_and_integer_sizes() {
    let input = json!([
        {
            "id": "static_1",
            "type": "static",
            "label": "Registration Form",
            "text": "Please fill in all required fields."
        },
        {
            "id": "file_1",
            "type": "file",
            "label": "Upload Resume",
            "isRequired": true,
            "accept": ".pdf",
            "maxSizeMB": 10,
            "multiple": false
        },
        {"id": "text_1", "type": "text"}
    ]);

    let mut editor = FormEditor::new();
    editor.import_json(&input.to_string()).unwrap();
    let exported = serde_json::to_value(editor.export_fields()).unwrap();

    assert_eq!(exported, input);
    assert!(!editor.export_fields()[0].is_required());
}

#[test]
fn test_sample_fields_serialize_like_hand_written_json() {
    let fields = serde_json::to_value(sample_fields()).unwrap();
    assert_eq!(fields[0].get("isRequired"), None);
    assert_eq!(fields[9]["maxSizeMB"], json!(10));
    assert_eq!(fields[9]["maxSizeMB"].to_string(), "10");
}

#[test]
fn test_flat_to_graph_builds_a_linear_chain() {
    let fields = flat(&[
        ("text_1", FieldType::Text),
        ("radio_1", FieldType::Radio),
        ("date_1", FieldType::Date),
        ("file_1", FieldType::File),
    ]);
    let mut allocator = IdAllocator::new();
    let graph = flat_to_graph(&fields, &LayoutConfig::default(), &mut allocator);

    let node_ids: Vec<&str> = graph.nodes.iter().map(|n| n.id.as_str()).collect();
    assert_eq!(
        node_ids,
        vec![
            "start_1", "text_1", "radio_1", "date_1", "file_1", "end_1", "submit_1"
        ]
    );

    let chain: Vec<(&str, &str)> = graph
        .edges
        .iter()
        .map(|e| (e.source.as_str(), e.target.as_str()))
        .collect();
    assert_eq!(
        chain,
        vec![
            ("start_1", "text_1"),
            ("text_1", "radio_1"),
            ("radio_1", "date_1"),
            ("date_1", "file_1"),
            ("file_1", "end_1"),
            ("end_1", "submit_1"),
        ]
    );

    // Three fields per row, then wrap.
    assert_eq!(graph.nodes[1].position, Position::new(50.0, 50.0));
    assert_eq!(graph.nodes[3].position, Position::new(550.0, 50.0));
    assert_eq!(graph.nodes[4].position, Position::new(50.0, 200.0));
    assert_eq!(graph.nodes[5].position, Position::new(40.0, 520.0));
    assert_eq!(graph.nodes[6].position, Position::new(40.0, 640.0));

    // The allocator has seen the imported ids.
    assert_eq!(allocator.allocate("text"), "text_2");
}

#[test]
fn test_flat_to_graph_with_no_fields() {
    let mut allocator = IdAllocator::new();
    let graph = flat_to_graph(&[], &LayoutConfig::default(), &mut allocator);
    assert_eq!(graph.nodes.len(), 3);
    assert_eq!(graph.edges, edges(&[("start_1", "end_1"), ("end_1", "submit_1")]));
}

#[test]
fn test_section_led_flat_array_round_trips_through_ordering() {
    let fields = flat(&[
        ("static_1", FieldType::Static),
        ("text_1", FieldType::Text),
        ("checkbox_1", FieldType::Checkbox),
    ]);
    let layout = LayoutConfig::default();
    let mut allocator = IdAllocator::new();

    let graph = flat_to_graph(&fields, &layout, &mut allocator);
    let exported = graph_to_fields(&graph.nodes, &graph.edges);
    let rebuilt = flat_to_graph(&exported, &layout, &mut allocator);

    let report = derive_order(&rebuilt.nodes, &rebuilt.edges);
    assert_eq!(report.ordered_fields, fields);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
}

#[test]
fn test_export_falls_back_to_insertion_order() {
    let nodes = vec![
        text("text_2", 0.0, 300.0),
        start("start_1", 0.0, 0.0),
        text("text_1", 0.0, 100.0),
    ];
    let exported = graph_to_fields(&nodes, &edges(&[("start_1", "text_1")]));
    assert_eq!(ids(&exported), vec!["text_2", "text_1"]);
}

#[test]
fn test_export_uses_ordering_when_available() {
    let (nodes, edges) = create_two_section_graph();
    let exported = graph_to_fields(&nodes, &edges);
    assert_eq!(
        ids(&exported),
        vec!["static_1", "text_1", "text_2", "static_2", "text_3"]
    );
}

#[test]
fn test_graph_payload_is_recognized() {
    let (nodes, edges) = create_single_section_graph();
    let json = serde_json::to_string(&GraphPayload {
        nodes: nodes.clone(),
        edges: edges.clone(),
    })
    .unwrap();

    match SchemaPayload::from_json(&json).unwrap() {
        SchemaPayload::Graph(graph) => {
            assert_eq!(graph.nodes, nodes);
            assert_eq!(graph.edges, edges);
        }
        other => panic!("Expected a graph payload, got {:?}", other),
    }
}

#[test]
fn test_malformed_payloads_are_rejected() {
    assert!(matches!(
        SchemaPayload::from_json("{not json"),
        Err(ImportError::JsonParseError(_))
    ));
    assert_eq!(
        SchemaPayload::from_json(r#"{"fields": []}"#),
        Err(ImportError::UnrecognizedPayload)
    );
    assert_eq!(
        SchemaPayload::from_json("42"),
        Err(ImportError::UnrecognizedPayload)
    );
    assert!(matches!(
        SchemaPayload::from_json(r#"[{"id":"x_1","type":"slider"}]"#),
        Err(ImportError::JsonParseError(_))
    ));
    assert!(matches!(
        SchemaPayload::from_json(r#"{"nodes":[{"id":"a","type":"mystery"}],"edges":[]}"#),
        Err(ImportError::JsonParseError(_))
    ));
}

#[test]
fn test_duplicate_ids_are_rejected() {
    let dup_flat = json!([
        {"id": "text_1", "type": "text"},
        {"id": "text_1", "type": "textarea"}
    ]);
    assert_eq!(
        SchemaPayload::from_value(dup_flat),
        Err(ImportError::DuplicateNodeId("text_1".to_string()))
    );

    let dup_graph = json!({
        "nodes": [
            {"id": "start_1", "type": "start", "position": {"x": 0, "y": 0}},
            {"id": "start_1", "type": "end", "position": {"x": 0, "y": 0}}
        ],
        "edges": []
    });
    assert_eq!(
        SchemaPayload::from_value(dup_graph),
        Err(ImportError::DuplicateNodeId("start_1".to_string()))
    );
}

#[test]
fn test_dangling_edges_are_rejected() {
    let payload = json!({
        "nodes": [{"id": "start_1", "type": "start", "position": {"x": 0, "y": 0}}],
        "edges": [{"id": "e_1", "source": "start_1", "target": "static_9"}]
    });
    assert_eq!(
        SchemaPayload::from_value(payload),
        Err(ImportError::DanglingEdge {
            edge_id: "e_1".to_string(),
            missing_node_id: "static_9".to_string(),
        })
    );
}

#[test]
fn test_node_wire_format() {
    let value = json!({
        "id": "select_1",
        "type": "field",
        "position": {"x": 10.0, "y": 20.0},
        "data": {"field": {
            "id": "select_1",
            "type": "select",
            "label": "Country",
            "isRequired": true,
            "options": ["India", "USA"],
            "multiple": false,
            "helpText": "Pick one"
        }}
    });
    let node: Node = serde_json::from_value(value.clone()).unwrap();

    let field = node.as_field().expect("field node");
    assert_eq!(field.field_type, FieldType::Select);
    assert!(field.is_required());
    assert_eq!(field.options.as_deref(), Some(&["India".to_string(), "USA".to_string()][..]));
    assert_eq!(field.extra.get("helpText"), Some(&json!("Pick one")));
    assert_eq!(node.position, Position::new(10.0, 20.0));

    assert_eq!(serde_json::to_value(&node).unwrap(), value);
}

#[test]
fn test_submit_node_wire_format_defaults() {
    let node: Node = serde_json::from_value(json!({
        "id": "submit_1",
        "type": "submit",
        "data": {"label": "Send", "api": {"url": "https://example.com/forms"}}
    }))
    .unwrap();

    match node.kind {
        NodeKind::Submit(data) => {
            assert_eq!(data.label, "Send");
            assert_eq!(data.color, "#2563eb");
            assert_eq!(data.api.url, "https://example.com/forms");
            assert_eq!(data.api.method, "POST");
            assert_eq!(
                data.api.headers.get("Content-Type").map(String::as_str),
                Some("application/json")
            );
        }
        other => panic!("Expected a submit node, got {:?}", other),
    }
}

#[test]
fn test_sample_graph_orders_cleanly() {
    let mut allocator = IdAllocator::new();
    let graph = sample_graph(&LayoutConfig::default(), &mut allocator);
    let report = derive_order(&graph.nodes, &graph.edges);

    assert_eq!(report.ordered_fields, sample_fields());
    assert_eq!(report.ordered_fields.len(), 10);
    assert!(report.warnings.is_empty(), "{:?}", report.warnings);
    assert!(structural_warnings(&graph.nodes, &graph.edges).is_empty());
    assert_eq!(allocator.allocate("email"), "email_2");
}

#[test]
fn test_field_node_with_mismatched_field_id_is_rejected() {
    let payload = json!({
        "nodes": [{
            "id": "text_1",
            "type": "field",
            "position": {"x": 0, "y": 0},
            "data": {"field": {"id": "text_9", "type": "text"}}
        }],
        "edges": []
    });
    assert!(matches!(
        SchemaPayload::from_value(payload),
        Err(ImportError::InvalidNode { node_id, .. }) if node_id == "text_1"
    ));
}
