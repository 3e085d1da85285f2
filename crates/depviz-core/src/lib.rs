//! Graph construction for component dependency visualizations.
//!
//! A [`ConstraintMap`] (`component -> dependency -> version range`) is turned
//! into a [`DependencyGraph`]: one node per component, one edge per declared
//! dependency, placeholder nodes for dependencies nobody declares, and
//! optionally one satellite node per distinct version range.
//!
//! ```rust
//! use depviz_core::{ConstraintMap, GraphConfig, build_dependency_graph};
//!
//! let mut map = ConstraintMap::new();
//! map.entry("news".into()).or_default().insert("extbase".into(), "".into());
//!
//! let graph = build_dependency_graph(&map, &GraphConfig::default());
//! assert_eq!(graph.node_count(), 2);
//! assert_eq!(graph.edge_count(), 1);
//! ```

pub mod color;
pub mod config;
pub mod constraint;
pub mod graph;
pub mod graph_builder;
pub mod synthesis;

pub use color::{Color, ColorSource, CyclingColors, RandomColors};
pub use config::GraphConfig;
pub use constraint::{ConstraintMap, Dependencies, normalize_version, version_node_id};
pub use depviz_error::{Error, ErrorKind, Result};
pub use graph::{DependencyGraph, Edge, EdgeKind, EdgeRouting, Node, NodeId, NodeShape};
pub use graph_builder::{GraphBuilder, Mutation};
pub use synthesis::{BuildStats, build_dependency_graph, build_dependency_graph_with, build_with};
