//! Passes that turn a constraint map into nodes and edges.
//!
//! 1. [`create_component_nodes`]: one node per declared component
//! 2. [`create_dependency_edges`]: component -> dependency edges, with
//!    placeholder nodes for undeclared dependencies
//! 3. [`create_version_nodes`]: one satellite per distinct (dependency, range)

use crate::color::ColorSource;
use crate::config::GraphConfig;
use crate::constraint::{ConstraintMap, constraints, version_label, version_node_id};
use crate::graph::DependencyGraph;
use crate::graph_builder::{GraphBuilder, Mutation};

/// Counters collected while running the passes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct BuildStats {
    pub components: usize,
    pub placeholders: usize,
    pub dependency_edges: usize,
    pub version_nodes: usize,
    pub version_edges: usize,
    /// Declarations dropped because the dependency had no node.
    pub skipped: usize,
}

/// Create a node for every component key, dependencies or not.
#[tracing::instrument(skip_all)]
pub fn create_component_nodes(builder: &mut GraphBuilder, map: &ConstraintMap) -> usize {
    map.keys()
        .filter(|component| builder.create_node(component, None).1.is_created())
        .count()
}

/// Connect every component to its dependencies.
///
/// Undeclared dependencies get a placeholder (rectangular, version-colored)
/// node when placeholders are enabled; otherwise the declaration is skipped.
#[tracing::instrument(skip_all)]
pub fn create_dependency_edges(
    builder: &mut GraphBuilder,
    map: &ConstraintMap,
    stats: &mut BuildStats,
) {
    let placeholders = builder.config().placeholder_nodes;

    for c in constraints(map) {
        if placeholders && !builder.contains(c.dependency) {
            builder.create_version_node(c.dependency, c.dependency);
            tracing::trace!("placeholder node for undeclared dependency '{}'", c.dependency);
            stats.placeholders += 1;
        }

        match builder.create_edge(c.component, c.dependency) {
            Mutation::Created => stats.dependency_edges += 1,
            _ => {
                tracing::trace!(
                    "skipping '{}' -> '{}': dependency has no node",
                    c.component,
                    c.dependency
                );
                stats.skipped += 1;
            }
        }
    }
}

/// Fan every dependency out into one node per distinct version range.
///
/// The satellite takes the dependency's group color and hangs off the
/// dependency through a version edge. Components declaring the same range
/// share a satellite.
#[tracing::instrument(skip_all)]
pub fn create_version_nodes(
    builder: &mut GraphBuilder,
    map: &ConstraintMap,
    stats: &mut BuildStats,
) {
    for c in constraints(map) {
        let id = version_node_id(c.dependency, c.version);
        if builder.contains(&id) {
            continue;
        }

        builder.create_version_node(&id, &version_label(c.dependency, c.version));
        let color = builder.node_color(c.dependency);
        builder.set_node_color(&id, color);
        stats.version_nodes += 1;

        if builder.create_version_edge(c.dependency, &id).is_created() {
            stats.version_edges += 1;
        }
    }
}

/// Run every pass with random colors from the configured palette.
pub fn build_dependency_graph(map: &ConstraintMap, config: &GraphConfig) -> DependencyGraph {
    build_with(GraphBuilder::new(config.clone()), map).0
}

/// Run every pass with the given color source.
pub fn build_dependency_graph_with(
    map: &ConstraintMap,
    config: &GraphConfig,
    colors: Box<dyn ColorSource>,
) -> DependencyGraph {
    build_with(GraphBuilder::with_color_source(config.clone(), colors), map).0
}

/// Run every pass on an existing builder and report what was created.
pub fn build_with(
    mut builder: GraphBuilder,
    map: &ConstraintMap,
) -> (DependencyGraph, BuildStats) {
    let mut stats = BuildStats {
        components: create_component_nodes(&mut builder, map),
        ..BuildStats::default()
    };
    create_dependency_edges(&mut builder, map, &mut stats);
    if builder.config().show_versions {
        create_version_nodes(&mut builder, map, &mut stats);
    }

    tracing::debug!(
        components = stats.components,
        placeholders = stats.placeholders,
        dependency_edges = stats.dependency_edges,
        version_nodes = stats.version_nodes,
        skipped = stats.skipped,
        "dependency graph built"
    );

    (builder.finish(), stats)
}
