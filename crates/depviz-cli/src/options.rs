//! Command-line option groups shared by the binary and its tests.

use std::path::PathBuf;

use clap::Args;

use depviz_core::GraphConfig;

/// Where the constraint map comes from.
#[derive(Args, Debug, Clone, Default)]
pub struct InputOptions {
    /// Directory containing one sub-directory per extension
    #[arg(
        long = "extpath",
        value_name = "DIR",
        required_unless_present = "constraints",
        conflicts_with = "constraints"
    )]
    pub ext_path: Option<PathBuf>,

    /// Glob over extension directory names
    #[arg(long = "extpattern", value_name = "GLOB", default_value = "*")]
    pub ext_pattern: String,

    /// JSON file holding a ready-made {component: {dependency: range}} map
    #[arg(long = "constraints", value_name = "FILE")]
    pub constraints: Option<PathBuf>,
}

/// Options controlling graph construction.
#[derive(Args, Debug, Clone, Default)]
pub struct GraphOptions {
    /// Add one node per distinct version range of each dependency
    #[arg(long = "versions")]
    pub versions: bool,

    /// Drop dependencies that are not themselves extensions
    #[arg(long = "no-placeholders")]
    pub no_placeholders: bool,

    /// TOML file overriding palette, version color, ratio and toggles
    #[arg(long = "config", value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Assign palette colors in order instead of at random
    #[arg(long = "stable-colors")]
    pub stable_colors: bool,
}

impl InputOptions {
    pub fn from_ext_path(path: impl Into<PathBuf>) -> Self {
        Self {
            ext_path: Some(path.into()),
            ext_pattern: "*".to_string(),
            constraints: None,
        }
    }

    pub fn from_constraint_file(path: impl Into<PathBuf>) -> Self {
        Self {
            ext_path: None,
            ext_pattern: "*".to_string(),
            constraints: Some(path.into()),
        }
    }

    pub fn with_ext_pattern(mut self, pattern: impl Into<String>) -> Self {
        self.ext_pattern = pattern.into();
        self
    }
}

impl GraphOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_versions(mut self, versions: bool) -> Self {
        self.versions = versions;
        self
    }

    pub fn with_no_placeholders(mut self, no_placeholders: bool) -> Self {
        self.no_placeholders = no_placeholders;
        self
    }

    pub fn with_config(mut self, config: Option<PathBuf>) -> Self {
        self.config = config;
        self
    }

    pub fn with_stable_colors(mut self, stable_colors: bool) -> Self {
        self.stable_colors = stable_colors;
        self
    }

    /// Command-line flags win over the config file, but only to switch a
    /// toggle away from its default.
    pub fn apply(&self, config: GraphConfig) -> GraphConfig {
        let show_versions = config.show_versions || self.versions;
        let placeholders = config.placeholder_nodes && !self.no_placeholders;
        config
            .with_show_versions(show_versions)
            .with_placeholder_nodes(placeholders)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn flags_override_config_toggles() {
        let config = GraphOptions::new()
            .with_versions(true)
            .with_no_placeholders(true)
            .apply(GraphConfig::default());
        assert!(config.show_versions);
        assert!(!config.placeholder_nodes);
    }

    #[test]
    fn absent_flags_keep_config() {
        let base = GraphConfig::default().with_show_versions(true);
        let config = GraphOptions::new().apply(base.clone());
        assert_eq!(config, base);
    }
}
