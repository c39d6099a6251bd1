//! Read, filter and render a module graph.

use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::Path;

use modblame_graph::EmissionOrder;
use tracing::{debug, info};

use crate::cli::Cli;
use crate::config::ModblameConfig;
use crate::error::{Result, ResultExt};
use crate::pipeline::{self, Filters};
use crate::render::MermaidRenderer;
use crate::source;

/// Execute a modblame run.
///
/// # Process
///
/// 1. Load and validate configuration (CLI > Env > File > Defaults)
/// 2. Read the edge list from `go mod graph`, a file or stdin
/// 3. Apply the enabled filters
/// 4. Compute the emission order
/// 5. Write the Mermaid diagram to stdout or `--output`
///
/// # Errors
///
/// Returns errors for invalid configuration, a failing or missing go tool,
/// malformed edge lists, and I/O failures while writing the diagram.
pub fn execute(args: Cli) -> Result<()> {
    let config = ModblameConfig::load(&args)?;
    debug!(?config, "resolved configuration");

    let mut source = source::from_config(&config);
    info!("Reading dependency graph from {}...", source.describe());
    let graph = source.read_graph()?;
    info!("Dependency graph contains {}", graph.statistics());

    let graph = pipeline::apply(graph, &Filters::from(&config));

    info!("Organizing graph nodes and edges...");
    let order = EmissionOrder::from_graph(graph);
    let renderer = MermaidRenderer::new(config.direction);

    match &config.output {
        Some(path) => write_file(&renderer, &order, path)?,
        None => {
            let mut stdout = io::stdout().lock();
            renderer
                .render(&order, &mut stdout)
                .and_then(|()| stdout.flush())
                .context("Failed to write diagram to stdout")?;
        }
    }
    Ok(())
}

fn write_file(renderer: &MermaidRenderer, order: &EmissionOrder<String>, path: &Path) -> Result<()> {
    let file = File::create(path).with_path(path)?;
    let mut writer = BufWriter::new(file);
    renderer
        .render(order, &mut writer)
        .and_then(|()| writer.flush())
        .with_path(path)?;
    info!("Wrote diagram to {}", path.display());
    Ok(())
}
