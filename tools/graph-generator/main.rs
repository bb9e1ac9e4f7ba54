use clap::Parser;
use formflow::prelude::*;
use rand::Rng;
use rand::rngs::ThreadRng;
use std::fs;

const SECTION_STEP_X: f64 = 260.0;
const FIELD_STEP_Y: f64 = 120.0;

/// A CLI tool to generate random, valid multi-section form graphs
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated graph JSON to
    #[arg(short, long, default_value = "generated_graph.json")]
    output: String,

    /// Number of sections to generate
    #[arg(long, default_value_t = 3)]
    sections: usize,

    /// The minimum number of fields per section
    #[arg(long, default_value_t = 1)]
    min: usize,

    /// The maximum number of fields per section
    #[arg(long, default_value_t = 6)]
    max: usize,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    if cli.min > cli.max {
        eprintln!(
            "Error: --min ({}) cannot be greater than --max ({})",
            cli.min, cli.max
        );
        std::process::exit(1);
    }

    println!(
        "Generating {} section(s) with {} to {} fields each...",
        cli.sections, cli.min, cli.max
    );

    let graph = generate_graph(&mut rng, cli.sections, cli.min, cli.max)?;
    let report = derive_order(graph.nodes(), graph.edges());
    println!(
        "-> {} nodes, {} edges, {} ordered fields, {} warning(s).",
        graph.nodes().len(),
        graph.edges().len(),
        report.ordered_fields.len(),
        report.warnings.len()
    );

    let json_output = serde_json::to_string_pretty(&graph.to_payload())?;
    fs::write(&cli.output, json_output)?;

    println!("Successfully generated and saved graph to '{}'", cli.output);
    Ok(())
}

/// Builds the graph through the connection validator so the output always obeys
/// the editing rules. Only the last section is wired into `end`.
fn generate_graph(
    rng: &mut ThreadRng,
    sections: usize,
    min_fields: usize,
    max_fields: usize,
) -> std::result::Result<FormGraph, ConnectionError> {
    let mut graph = FormGraph::new();
    let start = graph.create_node(NodeTemplate::Start, Position::new(40.0, 40.0));

    let mut deepest = 0;
    let mut last_tail = None;
    for s in 0..sections {
        let x = 320.0 + SECTION_STEP_X * s as f64;
        let section = graph.create_node(
            NodeTemplate::Field(PaletteItem::Static),
            Position::new(x, 40.0),
        );
        graph.connect(&start, &section)?;

        let count = rng.random_range(min_fields..=max_fields);
        let mut tail = section;
        for i in 0..count {
            let item = random_content_item(rng);
            let y = 40.0 + FIELD_STEP_Y * (i + 1) as f64;
            let field = graph.create_node(NodeTemplate::Field(item), Position::new(x, y));
            graph.connect(&tail, &field)?;
            tail = field;
        }
        deepest = deepest.max(count);
        last_tail = Some(tail);
        println!("-> Generated section {} with {} field(s).", s + 1, count);
    }

    let bottom = 40.0 + FIELD_STEP_Y * (deepest + 1) as f64;
    let end = graph.create_node(NodeTemplate::End, Position::new(40.0, bottom));
    let submit = graph.create_node(
        NodeTemplate::Submit,
        Position::new(40.0, bottom + FIELD_STEP_Y),
    );
    graph.connect(last_tail.as_deref().unwrap_or(start.as_str()), &end)?;
    graph.connect(&end, &submit)?;

    Ok(graph)
}

fn random_content_item(rng: &mut ThreadRng) -> PaletteItem {
    let content: Vec<PaletteItem> = PaletteItem::ALL
        .into_iter()
        .filter(|item| *item != PaletteItem::Static)
        .collect();
    content[rng.random_range(0..content.len())]
}
