//! Immutable settings handed to the graph builder.

use serde::{Deserialize, Serialize};

use depviz_error::{Error, Result};

use crate::color::{Color, DEFAULT_VERSION_COLOR, default_palette};

/// Aspect ratio hint passed through to the renderer.
pub const DEFAULT_RATIO: &str = "0.2";

/// Options controlling which nodes the synthesis passes create and how they look.
///
/// Every field has a default, so a partial TOML or JSON document deserializes
/// into a complete configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GraphConfig {
    /// Synthesize a node for dependencies that are not declared as components.
    pub placeholder_nodes: bool,
    /// Fan each dependency out into one node per distinct version range.
    pub show_versions: bool,
    /// Color of version nodes, placeholder nodes and version edges.
    pub version_color: Color,
    /// Colors drawn for newly created nodes.
    pub palette: Vec<Color>,
    /// Global `ratio` attribute of the rendered graph; `None` leaves it unset.
    pub ratio: Option<String>,
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            placeholder_nodes: true,
            show_versions: false,
            version_color: Color::from(DEFAULT_VERSION_COLOR),
            palette: default_palette(),
            ratio: Some(DEFAULT_RATIO.to_string()),
        }
    }
}

impl GraphConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_placeholder_nodes(mut self, enabled: bool) -> Self {
        self.placeholder_nodes = enabled;
        self
    }

    pub fn with_show_versions(mut self, enabled: bool) -> Self {
        self.show_versions = enabled;
        self
    }

    pub fn with_version_color(mut self, color: impl Into<Color>) -> Self {
        self.version_color = color.into();
        self
    }

    pub fn with_palette<I, C>(mut self, palette: I) -> Self
    where
        I: IntoIterator<Item = C>,
        C: Into<Color>,
    {
        self.palette = palette.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_ratio(mut self, ratio: Option<String>) -> Self {
        self.ratio = ratio;
        self
    }

    /// Reject settings the builder cannot honor.
    pub fn validate(&self) -> Result<()> {
        if self.palette.is_empty() {
            return Err(Error::config_invalid("node color palette must not be empty")
                .with_operation("config::validate")
                .with_context("field", "palette"));
        }
        if let Some(color) = self.palette.iter().find(|c| c.as_str().trim().is_empty()) {
            return Err(Error::config_invalid("palette contains a blank color")
                .with_operation("config::validate")
                .with_context("color", color.as_str()));
        }
        if self.version_color.as_str().trim().is_empty() {
            return Err(Error::config_invalid("version color must not be blank")
                .with_operation("config::validate")
                .with_context("field", "version_color"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz_error::ErrorKind;

    #[test]
    fn defaults_match_documented_values() {
        let config = GraphConfig::default();
        assert!(config.placeholder_nodes);
        assert!(!config.show_versions);
        assert_eq!(config.version_color.as_str(), "gray");
        assert_eq!(config.palette.len(), 8);
        assert_eq!(config.ratio.as_deref(), Some("0.2"));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn partial_toml_keeps_other_defaults() {
        let config: GraphConfig = toml::from_str(
            r#"
            show_versions = true
            palette = ["black", "orange"]
            "#,
        )
        .unwrap();

        assert!(config.show_versions);
        assert!(config.placeholder_nodes);
        assert_eq!(config.palette, vec![Color::from("black"), Color::from("orange")]);
        assert_eq!(config.version_color.as_str(), "gray");
    }

    #[test]
    fn unknown_fields_are_rejected() {
        let result = toml::from_str::<GraphConfig>("show_version = true");
        assert!(result.is_err());
    }

    #[test]
    fn empty_palette_is_invalid() {
        let err = GraphConfig::new()
            .with_palette(Vec::<Color>::new())
            .validate()
            .unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn blank_version_color_is_invalid() {
        let err = GraphConfig::new().with_version_color("  ").validate().unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }
}
