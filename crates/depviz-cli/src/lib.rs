//! depviz command-line interface.
//!
pub mod discovery;
pub mod emconf;
pub mod load;
pub mod options;
pub mod output;

use std::time::Instant;

use tracing::info;

use depviz_core::{
    ConstraintMap, CyclingColors, DependencyGraph, GraphBuilder, GraphConfig, build_with,
};
use depviz_error::{Error, Result};

pub use options::{GraphOptions, InputOptions};
pub use output::{generate_dot_output, write_output};

/// Resolve the effective graph configuration: config file, then flags.
pub fn resolve_config(graph: &GraphOptions) -> Result<GraphConfig> {
    let config = match &graph.config {
        Some(path) => load::load_config(path)?,
        None => GraphConfig::default(),
    };
    Ok(graph.apply(config))
}

/// Obtain the constraint map from a JSON file or by scanning manifests.
pub fn load_constraints(input: &InputOptions) -> Result<ConstraintMap> {
    if let Some(path) = &input.constraints {
        return load::load_constraint_file(path);
    }

    let Some(ext_path) = &input.ext_path else {
        return Err(Error::invalid_argument("either --extpath or --constraints must be given")
            .with_operation("cli::load_constraints"));
    };

    info!("Scanning {} for extensions", ext_path.display());
    let manifests = discovery::discover_manifests(ext_path, &input.ext_pattern)?;
    discovery::collect_constraints(&manifests)
}

/// Build the dependency graph for already loaded constraints.
pub fn build_graph(
    map: &ConstraintMap,
    config: GraphConfig,
    stable_colors: bool,
) -> DependencyGraph {
    let builder = if stable_colors {
        let colors = CyclingColors::new(config.palette.clone());
        GraphBuilder::with_color_source(config, Box::new(colors))
    } else {
        GraphBuilder::new(config)
    };

    let build_start = Instant::now();
    let (graph, stats) = build_with(builder, map);
    info!(
        "Graph build: {:.2}s ({} nodes, {} edges, {} placeholders, {} skipped)",
        build_start.elapsed().as_secs_f64(),
        graph.node_count(),
        graph.edge_count(),
        stats.placeholders,
        stats.skipped
    );
    graph
}

/// Main entry point: load, build, render. Returns the DOT text.
pub fn run_main(input: &InputOptions, graph: &GraphOptions) -> Result<String> {
    let config = resolve_config(graph)?;
    let map = load_constraints(input)?;
    let dependency_graph = build_graph(&map, config, graph.stable_colors);
    Ok(generate_dot_output(&dependency_graph))
}
