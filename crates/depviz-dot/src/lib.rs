//! Render a finished [`DependencyGraph`] as GraphViz DOT.
//!
//! Output layout: global attributes, then nodes in creation order, then
//! edges in creation order. Ids and labels are always quoted.

mod dot;

use depviz_core::{DependencyGraph, EdgeRouting};

pub use dot::{DotBuilder, escape_label, quote_id, shape_name};

/// Graph name used by [`render_graph`].
pub const DEFAULT_GRAPH_NAME: &str = "dependencies";

/// Render the graph to DOT format.
pub fn render_graph(graph: &DependencyGraph) -> String {
    render_graph_named(graph, DEFAULT_GRAPH_NAME)
}

/// Render the graph to DOT format under a custom graph name.
pub fn render_graph_named(graph: &DependencyGraph, name: &str) -> String {
    let mut dot = DotBuilder::new(name);

    if graph.is_empty() {
        return dot.build();
    }

    for (key, value) in graph.attributes() {
        dot.attr(key, value);
    }
    if !graph.attributes().is_empty() {
        dot.blank();
    }

    for node in graph.nodes() {
        let mut attrs = vec![("label", node.label.as_str()), ("color", node.color.as_str())];
        if let Some(shape) = shape_name(node.shape) {
            attrs.push(("shape", shape));
        }
        dot.node(&node.id, &attrs);
    }

    if !graph.edges().is_empty() {
        dot.blank();
    }

    for edge in graph.edges() {
        let (from, to) = graph.endpoints(edge);
        let mut attrs = vec![("color", edge.color.as_str())];
        match edge.routing {
            EdgeRouting::Straight => attrs.push(("splines", "false")),
        }
        dot.edge(&from.id, &to.id, &attrs);
    }

    tracing::debug!(
        nodes = graph.node_count(),
        edges = graph.edge_count(),
        "rendered dot graph"
    );

    dot.build()
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz_core::{ConstraintMap, CyclingColors, GraphConfig, build_dependency_graph_with};
    use pretty_assertions::assert_eq;

    fn stable_graph(map: &ConstraintMap, config: &GraphConfig) -> DependencyGraph {
        let colors = CyclingColors::new(config.palette.clone());
        build_dependency_graph_with(map, config, Box::new(colors))
    }

    #[test]
    fn empty_graph_renders_empty_digraph() {
        let graph = stable_graph(&ConstraintMap::new(), &GraphConfig::default());
        assert_eq!(render_graph(&graph), "digraph dependencies {\n}\n");
    }

    #[test]
    fn renders_components_placeholders_and_versions() {
        let mut map = ConstraintMap::new();
        map.entry("news".into())
            .or_default()
            .insert("extbase".into(), String::new());
        map.entry("news".into())
            .or_default()
            .insert("typo3".into(), "6.2.0-6.2.99".into());
        map.insert("extbase".into(), Default::default());

        let config = GraphConfig::new()
            .with_palette(["blue", "red"])
            .with_show_versions(true);
        let dot = render_graph(&stable_graph(&map, &config));

        let expected = r#"digraph dependencies {
  ratio="0.2";

  "extbase" [label="extbase", color="blue"];
  "news" [label="news", color="red"];
  "typo3" [label="typo3", color="gray", shape="box"];
  "extbase_*" [label="extbase: *", color="blue", shape="box"];
  "typo3_6.2.0-6.2.99" [label="typo3: 6.2.0-6.2.99", color="gray", shape="box"];

  "news" -> "extbase" [color="red", splines="false"];
  "news" -> "typo3" [color="red", splines="false"];
  "extbase" -> "extbase_*" [color="gray", splines="false"];
  "typo3" -> "typo3_6.2.0-6.2.99" [color="gray", splines="false"];
}
"#;
        assert_eq!(dot, expected);
    }

    #[test]
    fn no_ratio_attribute_when_unset() {
        let mut map = ConstraintMap::new();
        map.insert("solo".into(), Default::default());
        let config = GraphConfig::new().with_ratio(None);

        let dot = render_graph_named(&stable_graph(&map, &config), "G");
        assert!(dot.starts_with("digraph G {\n  \"solo\""));
        assert!(!dot.contains("ratio"));
    }
}
