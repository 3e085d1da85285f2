//! The finished graph model handed to renderers.

use std::collections::{BTreeMap, HashMap};

use strum_macros::{Display, IntoStaticStr};

use crate::color::Color;

/// Position of a node in creation order.
///
/// A graph holds at most `u32::MAX` nodes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(u32);

impl NodeId {
    pub(crate) fn new(index: usize) -> Self {
        let id = u32::try_from(index);
        debug_assert!(id.is_ok(), "node index {index} exceeds u32");
        Self(id.unwrap_or(u32::MAX))
    }

    pub fn as_u32(self) -> u32 {
        self.0
    }

    pub fn index(self) -> usize {
        self.0 as usize
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum NodeShape {
    /// Renderer default; used for declared components.
    #[default]
    Default,
    /// Version satellites and placeholders for undeclared dependencies.
    Rect,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum EdgeKind {
    /// Dependent -> dependency.
    Dependency,
    /// Dependency -> one of its version satellites.
    VersionPin,
}

/// Edge routing hint for the renderer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EdgeRouting {
    /// Curved splines disabled.
    #[default]
    Straight,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    /// Unique within the graph.
    pub id: String,
    pub label: String,
    /// Group color, shared with the edges and satellites this node originates.
    pub color: Color,
    pub shape: NodeShape,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Edge {
    pub from: NodeId,
    pub to: NodeId,
    pub kind: EdgeKind,
    pub color: Color,
    pub routing: EdgeRouting,
}

/// Nodes and edges in creation order plus global display attributes.
///
/// Produced by [`GraphBuilder::finish`](crate::GraphBuilder::finish) and not
/// mutated afterwards. Every edge endpoint refers to a node of this graph.
#[derive(Debug, Clone, Default)]
pub struct DependencyGraph {
    pub(crate) nodes: Vec<Node>,
    pub(crate) index: HashMap<String, NodeId>,
    pub(crate) edges: Vec<Edge>,
    pub(crate) attributes: BTreeMap<String, String>,
}

impl DependencyGraph {
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn node(&self, id: NodeId) -> &Node {
        &self.nodes[id.index()]
    }

    /// Look a node up by its string id.
    pub fn find(&self, id: &str) -> Option<&Node> {
        self.index.get(id).map(|&node_id| self.node(node_id))
    }

    /// Global attributes for the renderer (e.g. `ratio`).
    pub fn attributes(&self) -> &BTreeMap<String, String> {
        &self.attributes
    }

    pub fn attribute(&self, key: &str) -> Option<&str> {
        self.attributes.get(key).map(String::as_str)
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.edges.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Source and target nodes of an edge.
    pub fn endpoints(&self, edge: &Edge) -> (&Node, &Node) {
        (self.node(edge.from), self.node(edge.to))
    }

    /// Edges leaving the node with the given id.
    pub fn edges_from<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        let from = self.index.get(id).copied();
        self.edges.iter().filter(move |e| Some(e.from) == from)
    }

    /// Edges entering the node with the given id.
    pub fn edges_to<'a>(&'a self, id: &str) -> impl Iterator<Item = &'a Edge> + 'a {
        let to = self.index.get(id).copied();
        self.edges.iter().filter(move |e| Some(e.to) == to)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn node_id_keeps_creation_index() {
        let id = NodeId::new(7);
        assert_eq!(id.as_u32(), 7);
        assert_eq!(id.index(), 7);
    }

    #[cfg(all(debug_assertions, target_pointer_width = "64"))]
    #[test]
    #[should_panic(expected = "exceeds u32")]
    fn node_id_rejects_index_past_u32() {
        let _ = NodeId::new(usize::MAX);
    }

    #[test]
    fn shape_names() {
        assert_eq!(NodeShape::Default.to_string(), "default");
        assert_eq!(NodeShape::Rect.to_string(), "rect");
        let kind: &'static str = EdgeKind::VersionPin.into();
        assert_eq!(kind, "version_pin");
    }

    #[test]
    fn empty_graph_has_nothing() {
        let graph = DependencyGraph::default();
        assert!(graph.is_empty());
        assert_eq!(graph.edge_count(), 0);
        assert!(graph.find("anything").is_none());
        assert_eq!(graph.edges_from("anything").count(), 0);
    }
}
