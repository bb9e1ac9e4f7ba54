use super::allocator::IdAllocator;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};
use std::fmt;
use std::str::FromStr;

/// The closed set of form field types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldType {
    Text,
    Textarea,
    Radio,
    Select,
    Checkbox,
    Date,
    File,
    /// A section marker. Carries no user value and roots a section branch.
    Static,
}

impl FieldType {
    pub fn as_str(&self) -> &'static str {
        match self {
            FieldType::Text => "text",
            FieldType::Textarea => "textarea",
            FieldType::Radio => "radio",
            FieldType::Select => "select",
            FieldType::Checkbox => "checkbox",
            FieldType::Date => "date",
            FieldType::File => "file",
            FieldType::Static => "static",
        }
    }

    /// Whether fields of this type act as section roots.
    pub fn is_section(&self) -> bool {
        matches!(self, FieldType::Static)
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single form field as embedded in a field node and as exported in the flat schema.
///
/// Attributes the engine does not interpret (e.g. `placeholder`, `inputType`) are kept
/// in `extra` so imported data is written back unchanged. Absent optional keys stay
/// absent on export and numbers keep their written form.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub id: String,
    #[serde(rename = "type")]
    pub field_type: FieldType,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub label: String,
    #[serde(rename = "isRequired", default, skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub options: Option<Vec<String>>,
    #[serde(rename = "minDate", default, skip_serializing_if = "Option::is_none")]
    pub min_date: Option<String>,
    #[serde(rename = "maxDate", default, skip_serializing_if = "Option::is_none")]
    pub max_date: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub accept: Option<String>,
    #[serde(rename = "maxSizeMB", default, skip_serializing_if = "Option::is_none")]
    pub max_size_mb: Option<Number>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub multiple: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Field {
    /// Creates a bare field with the given id and type and no attributes.
    pub fn new(id: impl Into<String>, field_type: FieldType, label: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            field_type,
            label: label.into(),
            required: None,
            options: None,
            min_date: None,
            max_date: None,
            accept: None,
            max_size_mb: None,
            multiple: None,
            text: None,
            extra: Map::new(),
        }
    }

    pub fn is_section(&self) -> bool {
        self.field_type.is_section()
    }

    /// A missing `isRequired` key means optional.
    pub fn is_required(&self) -> bool {
        self.required.unwrap_or(false)
    }

    /// The label if set, otherwise the id.
    pub fn display_name(&self) -> &str {
        if self.label.is_empty() {
            &self.id
        } else {
            &self.label
        }
    }
}

/// An entry of the field palette a user can drop onto the canvas.
///
/// `Email` and `Password` are virtual: they produce `text` fields with a specific
/// `inputType` but keep their own id prefix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PaletteItem {
    Text,
    Email,
    Password,
    Textarea,
    Radio,
    Select,
    Checkbox,
    Date,
    File,
    Static,
}

impl PaletteItem {
    pub const ALL: [PaletteItem; 10] = [
        PaletteItem::Text,
        PaletteItem::Email,
        PaletteItem::Password,
        PaletteItem::Textarea,
        PaletteItem::Radio,
        PaletteItem::Select,
        PaletteItem::Checkbox,
        PaletteItem::Date,
        PaletteItem::File,
        PaletteItem::Static,
    ];

    pub fn id_prefix(&self) -> &'static str {
        match self {
            PaletteItem::Email => "email",
            PaletteItem::Password => "password",
            other => other.field_type().as_str(),
        }
    }

    pub fn field_type(&self) -> FieldType {
        match self {
            PaletteItem::Text | PaletteItem::Email | PaletteItem::Password => FieldType::Text,
            PaletteItem::Textarea => FieldType::Textarea,
            PaletteItem::Radio => FieldType::Radio,
            PaletteItem::Select => FieldType::Select,
            PaletteItem::Checkbox => FieldType::Checkbox,
            PaletteItem::Date => FieldType::Date,
            PaletteItem::File => FieldType::File,
            PaletteItem::Static => FieldType::Static,
        }
    }

    /// Builds a field with this item's default attributes and a freshly allocated id.
    pub fn default_field(&self, allocator: &mut IdAllocator) -> Field {
        let mut field = Field::new(
            allocator.allocate(self.id_prefix()),
            self.field_type(),
            "Untitled",
        );
        field.required = Some(false);
        let options = |items: &[&str]| Some(items.iter().map(|s| s.to_string()).collect());

        match self {
            PaletteItem::Text => set_text_input(&mut field, "Enter text", "text"),
            PaletteItem::Email => set_text_input(&mut field, "you@example.com", "email"),
            PaletteItem::Password => set_text_input(&mut field, "••••••••", "password"),
            PaletteItem::Textarea => {
                field
                    .extra
                    .insert("placeholder".into(), Value::from("Enter details"));
            }
            PaletteItem::Radio => field.options = options(&["Option 1", "Option 2"]),
            PaletteItem::Select => {
                field.options = options(&["Option A", "Option B"]);
                field.multiple = Some(false);
            }
            PaletteItem::Checkbox => field.options = options(&["Check 1", "Check 2"]),
            PaletteItem::Date => {
                field.min_date = Some(String::new());
                field.max_date = Some(String::new());
            }
            PaletteItem::File => {
                field.accept = Some(".png,.jpg".to_string());
                field.max_size_mb = Some(Number::from(5));
                field.multiple = Some(false);
            }
            PaletteItem::Static => field.text = Some("Section text...".to_string()),
        }
        field
    }
}

fn set_text_input(field: &mut Field, placeholder: &str, input_type: &str) {
    field
        .extra
        .insert("placeholder".into(), Value::from(placeholder));
    field
        .extra
        .insert("inputType".into(), Value::from(input_type));
}

impl FromStr for PaletteItem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PaletteItem::ALL
            .into_iter()
            .find(|item| item.id_prefix() == s)
            .ok_or_else(|| format!("Unknown palette item '{}'", s))
    }
}
