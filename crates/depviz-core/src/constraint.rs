//! Constraint map input and version-range helpers.

use std::collections::BTreeMap;

/// Dependencies declared by one component: dependency name -> version range.
pub type Dependencies = BTreeMap<String, String>;

/// Component name -> declared dependencies.
///
/// Iteration order only affects which random color a component receives.
pub type ConstraintMap = BTreeMap<String, Dependencies>;

/// Marker used in place of an empty version range.
pub const ANY_VERSION: &str = "*";

/// One `(component, dependency, version range)` declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Constraint<'a> {
    pub component: &'a str,
    pub dependency: &'a str,
    pub version: &'a str,
}

/// Iterate every declared dependency of every component.
pub fn constraints(map: &ConstraintMap) -> impl Iterator<Item = Constraint<'_>> {
    map.iter().flat_map(|(component, deps)| {
        deps.iter().map(move |(dependency, version)| Constraint {
            component,
            dependency,
            version,
        })
    })
}

/// An empty range means "any version" and becomes `*`.
pub fn normalize_version(version: &str) -> &str {
    if version.is_empty() { ANY_VERSION } else { version }
}

/// Node id of the version satellite for `dependency` at `version`.
///
/// `<dependency>_<version>`; may collide with a component that happens to be
/// named that way, in which case the two share one node.
pub fn version_node_id(dependency: &str, version: &str) -> String {
    format!("{}_{}", dependency, normalize_version(version))
}

/// Display label of the version satellite, `<dependency>: <version>`.
pub fn version_label(dependency: &str, version: &str) -> String {
    format!("{}: {}", dependency, normalize_version(version))
}
