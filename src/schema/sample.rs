use super::codec::linear_graph;
use super::layout::LayoutConfig;
use crate::graph::{Field, FieldType, GraphPayload, IdAllocator, Node, Position};
use serde_json::{Number, Value};

const SAMPLE_FIELD_X: f64 = 320.0;

/// A ten-field registration form, one section, stacked in a single column and
/// chained `start -> fields -> end -> submit`.
pub fn sample_graph(layout: &LayoutConfig, allocator: &mut IdAllocator) -> GraphPayload {
    let fields = sample_fields();
    allocator.reseed(fields.iter().map(|f| f.id.as_str()));

    let field_nodes = fields
        .into_iter()
        .enumerate()
        .map(|(i, field)| {
            let y = layout.structural_top + layout.structural_step * i as f64;
            Node::field(field, Position::new(SAMPLE_FIELD_X, y))
        })
        .collect();

    linear_graph(field_nodes, layout, allocator)
}

/// The fields of the sample form in render order.
pub fn sample_fields() -> Vec<Field> {
    let mut intro = Field::new("static_1", FieldType::Static, "Registration Form");
    intro.text = Some("Please fill in all required fields.".to_string());

    let mut bio = Field::new("textarea_1", FieldType::Textarea, "Short Bio");
    bio.extra
        .insert("placeholder".into(), Value::from("Tell us about yourself"));

    let mut gender = required(Field::new("radio_1", FieldType::Radio, "Gender"));
    gender.options = Some(strings(&["Male", "Female", "Other"]));

    let mut country = required(Field::new("select_1", FieldType::Select, "Country"));
    country.options = Some(strings(&["India", "USA", "UK", "Germany", "Japan"]));
    country.multiple = Some(false);

    let mut languages = Field::new("checkbox_1", FieldType::Checkbox, "Languages Known");
    languages.options = Some(strings(&["English", "Hindi", "Marathi", "Spanish", "German"]));

    let mut birth = required(Field::new("date_1", FieldType::Date, "Date of Birth"));
    birth.min_date = Some("1900-01-01".to_string());
    birth.max_date = Some("2025-12-31".to_string());

    let mut resume = required(Field::new("file_1", FieldType::File, "Upload Resume"));
    resume.accept = Some(".pdf".to_string());
    resume.max_size_mb = Some(Number::from(10));
    resume.multiple = Some(false);

    vec![
        intro,
        text_input("text_1", "Full Name", "John Doe", "text"),
        text_input("email_1", "Email", "you@example.com", "email"),
        text_input("password_1", "Password", "••••••••", "password"),
        bio,
        gender,
        country,
        languages,
        birth,
        resume,
    ]
}

fn text_input(id: &str, label: &str, placeholder: &str, input_type: &str) -> Field {
    let mut field = required(Field::new(id, FieldType::Text, label));
    field
        .extra
        .insert("placeholder".into(), Value::from(placeholder));
    field
        .extra
        .insert("inputType".into(), Value::from(input_type));
    field
}

fn required(mut field: Field) -> Field {
    field.required = Some(true);
    field
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
