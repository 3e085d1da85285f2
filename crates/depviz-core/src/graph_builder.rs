//! The mutable builder behind every graph pass.
//!
//! [`GraphBuilder`] owns the node registry and the color source. Every
//! primitive reports a [`Mutation`] instead of failing, so a missing endpoint
//! is skipped rather than raised.

use std::collections::{BTreeMap, HashMap};

use crate::color::{Color, ColorSource, RandomColors};
use crate::config::GraphConfig;
use crate::graph::{DependencyGraph, Edge, EdgeKind, EdgeRouting, Node, NodeId, NodeShape};

/// Result of a builder mutation.
///
/// Missing references are not errors: the operation is skipped and reported
/// here so callers and tests can tell the paths apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Created,
    AlreadyExisted,
    SkippedMissingReference,
}

impl Mutation {
    pub fn is_created(self) -> bool {
        matches!(self, Mutation::Created)
    }

    pub fn is_skipped(self) -> bool {
        matches!(self, Mutation::SkippedMissingReference)
    }
}

/// Owns the node registry and every mutation primitive.
///
/// Node ids are unique, edges only ever connect registered nodes, and a
/// node's color is drawn once at creation.
pub struct GraphBuilder {
    config: GraphConfig,
    colors: Box<dyn ColorSource>,
    nodes: Vec<Node>,
    index: HashMap<String, NodeId>,
    edges: Vec<Edge>,
}

impl GraphBuilder {
    /// Builder drawing random colors from the configured palette.
    pub fn new(config: GraphConfig) -> Self {
        let colors = RandomColors::new(config.palette.clone());
        Self::with_color_source(config, Box::new(colors))
    }

    pub fn with_color_source(config: GraphConfig, colors: Box<dyn ColorSource>) -> Self {
        Self {
            config,
            colors,
            nodes: Vec::new(),
            index: HashMap::new(),
            edges: Vec::new(),
        }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Register a node, or return the existing one with the same id.
    ///
    /// `label` defaults to the id. New nodes get a color from the color
    /// source; an existing node keeps the attributes of its first creation.
    pub fn create_node(&mut self, id: &str, label: Option<&str>) -> (NodeId, Mutation) {
        if let Some(&node_id) = self.index.get(id) {
            return (node_id, Mutation::AlreadyExisted);
        }

        let node_id = NodeId::new(self.nodes.len());
        let color = self.colors.next_color();
        tracing::trace!("creating node '{}' with color {}", id, color);
        self.nodes.push(Node {
            id: id.to_string(),
            label: label.unwrap_or(id).to_string(),
            color,
            shape: NodeShape::Default,
        });
        self.index.insert(id.to_string(), node_id);
        (node_id, Mutation::Created)
    }

    pub fn find_node(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&node_id| &self.nodes[node_id.index()])
    }

    pub fn contains(&self, id: &str) -> bool {
        self.index.contains_key(id)
    }

    /// Overwrite a node's group color. Returns false if no such node exists.
    pub fn set_node_color(&mut self, id: &str, color: Color) -> bool {
        match self.index.get(id) {
            Some(&node_id) => {
                self.nodes[node_id.index()].color = color;
                true
            }
            None => {
                tracing::trace!("cannot color missing node '{}'", id);
                false
            }
        }
    }

    /// Group color of a node; a missing node yields a freshly drawn color.
    pub fn node_color(&mut self, id: &str) -> Color {
        if let Some(node) = self.find_node(id) {
            return node.color.clone();
        }
        self.colors.next_color()
    }

    /// Dependency edge `from -> to`, colored like `from`.
    pub fn create_edge(&mut self, from: &str, to: &str) -> Mutation {
        let Some((from_id, to_id)) = self.endpoints(from, to) else {
            return Mutation::SkippedMissingReference;
        };
        let color = self.nodes[from_id.index()].color.clone();
        self.push_edge(from_id, to_id, EdgeKind::Dependency, color);
        Mutation::Created
    }

    /// Rectangular, version-colored node. Shape and color are applied only
    /// when the node is new.
    pub fn create_version_node(&mut self, id: &str, label: &str) -> (NodeId, Mutation) {
        let (node_id, mutation) = self.create_node(id, Some(label));
        if mutation.is_created() {
            let node = &mut self.nodes[node_id.index()];
            node.shape = NodeShape::Rect;
            node.color = self.config.version_color.clone();
        }
        (node_id, mutation)
    }

    /// Version pin edge `from -> to`, always in the version color.
    pub fn create_version_edge(&mut self, from: &str, to: &str) -> Mutation {
        let Some((from_id, to_id)) = self.endpoints(from, to) else {
            return Mutation::SkippedMissingReference;
        };
        let color = self.config.version_color.clone();
        self.push_edge(from_id, to_id, EdgeKind::VersionPin, color);
        Mutation::Created
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    /// Freeze the model and attach the global display attributes.
    pub fn finish(self) -> DependencyGraph {
        let mut attributes = BTreeMap::new();
        if let Some(ratio) = &self.config.ratio {
            attributes.insert("ratio".to_string(), ratio.clone());
        }
        DependencyGraph {
            nodes: self.nodes,
            index: self.index,
            edges: self.edges,
            attributes,
        }
    }

    fn endpoints(&self, from: &str, to: &str) -> Option<(NodeId, NodeId)> {
        match (self.index.get(from), self.index.get(to)) {
            (Some(&from_id), Some(&to_id)) => Some((from_id, to_id)),
            _ => {
                tracing::trace!("skipping edge '{}' -> '{}': missing endpoint", from, to);
                None
            }
        }
    }

    fn push_edge(&mut self, from: NodeId, to: NodeId, kind: EdgeKind, color: Color) {
        self.edges.push(Edge {
            from,
            to,
            kind,
            color,
            routing: EdgeRouting::Straight,
        });
    }
}
