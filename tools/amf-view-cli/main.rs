use amf_view_model::prelude::*;
use clap::Parser;
use std::fs;
use std::time::Instant;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Prints the form view model of an AMF API graph as JSON
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the AMF JSON-LD document
    document_path: String,

    /// `@id` of the node to transform (defaults to the document's encoded root)
    #[arg(short, long)]
    node: Option<String>,

    /// Skip examples and descriptions
    #[arg(long)]
    no_docs: bool,

    /// Media type used to pick examples
    #[arg(short, long)]
    media_type: Option<String>,

    /// Path to a JSON file with engine options (`noDocs`, `mediaType`)
    #[arg(short, long)]
    config: Option<String>,

    /// Pretty-print the output
    #[arg(short, long)]
    pretty: bool,
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    run(cli);
}

fn run(cli: Cli) {
    let total_start = Instant::now();

    // --- 1. Options ---
    let mut options = match &cli.config {
        Some(path) => {
            let source = fs::read_to_string(path).unwrap_or_else(|e| {
                exit_with_error(&format!("Failed to read config file '{}': {}", path, e))
            });
            EngineOptions::from_json(&source).unwrap_or_else(|e| exit_with_error(&e.to_string()))
        }
        None => EngineOptions::default(),
    };
    if cli.no_docs {
        options.no_docs = true;
    }
    if let Some(media_type) = cli.media_type {
        options.media_type = media_type;
    }

    // --- 2. Graph Loading ---
    let load_start = Instant::now();
    let source = fs::read_to_string(&cli.document_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to read document '{}': {}",
            &cli.document_path, e
        ))
    });
    let graph = AmfGraph::from_json(&source).unwrap_or_else(|e| exit_with_error(&e.to_string()));
    info!(elapsed = ?load_start.elapsed(), compact = graph.is_compact(), "document loaded");

    let node = match &cli.node {
        Some(id) => graph
            .require_node(id)
            .unwrap_or_else(|e| exit_with_error(&e.to_string())),
        None => graph.root(),
    };

    // --- 3. Transformation ---
    let build_start = Instant::now();
    let mut engine = ApiViewModel::builder(&graph).with_options(options).build();
    let items = engine.compute_view_model(node).unwrap_or_default();
    info!(
        items = items.len(),
        cached = engine.cache().len(),
        elapsed = ?build_start.elapsed(),
        "view model computed"
    );

    // --- 4. Output ---
    let output = if cli.pretty {
        serde_json::to_string_pretty(&items)
    } else {
        serde_json::to_string(&items)
    }
    .unwrap_or_else(|e| exit_with_error(&format!("Failed to serialize view model: {}", e)));
    println!("{}", output);
    info!(elapsed = ?total_start.elapsed(), "done");
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("\nError: {}", message);
    std::process::exit(1);
}
