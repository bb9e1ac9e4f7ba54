pub mod formatter;

pub use formatter::InspectorFormatter;
