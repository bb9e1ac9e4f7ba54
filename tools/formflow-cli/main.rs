use clap::Parser;
use formflow::prelude::*;
use std::fs;
use std::time::Instant;
use tracing_subscriber::EnvFilter;

/// Validate and order a form flow graph
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to a graph ({nodes, edges}) or flat field-array JSON file
    schema_path: Option<String>,

    /// Use the built-in sample form instead of a file
    #[arg(long, conflicts_with = "schema_path")]
    sample: bool,

    /// Optional editor configuration JSON file
    #[arg(short, long)]
    config: Option<String>,

    /// Write the ordered flat field array to this path
    #[arg(short, long)]
    export: Option<String>,

    /// Write the (normalized) graph payload to this path
    #[arg(short, long)]
    graph_out: Option<String>,

    /// Exit with status 2 when any warning is reported
    #[arg(long)]
    strict: bool,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let config = match &cli.config {
        Some(path) => EditorConfig::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load config: {}", e))),
        None => EditorConfig::default(),
    };
    let mut editor = FormEditor::builder().with_config(config).build();

    // --- 1. Loading ---
    let load_start = Instant::now();
    if cli.sample {
        editor.load_sample();
    } else {
        let path = cli.schema_path.as_deref().unwrap_or_else(|| {
            exit_with_error("A schema path is required unless --sample is given.")
        });
        let json = fs::read_to_string(path).unwrap_or_else(|e| {
            exit_with_error(&format!("Failed to read schema file '{}': {}", path, e))
        });
        editor
            .import_json(&json)
            .unwrap_or_else(|e| exit_with_error(&format!("Import rejected: {}", e)));
    }
    let load_duration = load_start.elapsed();

    // --- 2. Diagnostics ---
    let graph = editor.graph();
    let diagnostics = editor.diagnostics();
    println!(
        "\nLoaded {} nodes and {} edges in {:?}",
        graph.nodes().len(),
        graph.edges().len(),
        load_duration
    );

    println!("\nRender order follows the path:");
    println!(
        "  {}",
        InspectorFormatter::format_sequence(&diagnostics.ordering.sequence, graph.nodes())
    );

    println!("\nOrdered fields:");
    if diagnostics.ordering.ordered_fields.is_empty() {
        println!("  (none)");
    }
    for (i, field) in diagnostics.ordering.ordered_fields.iter().enumerate() {
        println!(
            "  {:>2}. {} [{}] {}",
            i + 1,
            field.id,
            field.field_type,
            field.display_name()
        );
    }

    let warnings = diagnostics.warnings();
    if !warnings.is_empty() {
        println!("\nWarnings:");
        for warning in &warnings {
            println!("  - {}", warning);
        }
    }

    // --- 3. Export ---
    if let Some(path) = &cli.export {
        let fields = editor.export_fields();
        write_json(path, &fields);
        println!("\nExported {} fields to '{}'", fields.len(), path);
    }
    if let Some(path) = &cli.graph_out {
        write_json(path, &editor.export_graph());
        println!("Wrote graph to '{}'", path);
    }

    if cli.strict && !warnings.is_empty() {
        std::process::exit(2);
    }
}

fn init_logging(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level)),
        )
        .with_writer(std::io::stderr)
        .init();
}

fn write_json<T: serde::Serialize>(path: &str, value: &T) {
    let json = serde_json::to_string_pretty(value)
        .unwrap_or_else(|e| exit_with_error(&format!("Serialization failed: {}", e)));
    fs::write(path, json)
        .unwrap_or_else(|e| exit_with_error(&format!("Could not write '{}': {}", path, e)));
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
