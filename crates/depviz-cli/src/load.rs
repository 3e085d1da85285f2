//! Loading constraint maps (JSON) and graph configuration (TOML) from disk.

use std::path::Path;

use depviz_core::{ConstraintMap, GraphConfig};
use depviz_error::{Error, Result};

fn read_file(path: &Path, operation: &'static str) -> Result<String> {
    std::fs::read_to_string(path).map_err(|err| {
        Error::from(err)
            .with_operation(operation)
            .with_context("path", path.display().to_string())
    })
}

/// Read a `{component: {dependency: range}}` JSON document.
pub fn load_constraint_file(path: &Path) -> Result<ConstraintMap> {
    let source = read_file(path, "load::constraint_file")?;
    serde_json::from_str(&source).map_err(|err| {
        Error::deserialization_failed(format!("invalid constraint map: {err}"))
            .with_operation("load::constraint_file")
            .with_context("path", path.display().to_string())
            .set_source(err)
    })
}

/// Read a TOML graph configuration; missing fields keep their defaults.
pub fn load_config(path: &Path) -> Result<GraphConfig> {
    let source = read_file(path, "load::config")?;
    let config: GraphConfig = toml::from_str(&source).map_err(|err| {
        Error::deserialization_failed(format!("invalid config: {err}"))
            .with_operation("load::config")
            .with_context("path", path.display().to_string())
            .set_source(err)
    })?;
    config.validate()?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz_error::ErrorKind;

    #[test]
    fn loads_constraint_json() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("constraints.json");
        std::fs::write(&path, r#"{"news": {"extbase": ""}, "extbase": {}}"#).unwrap();

        let map = load_constraint_file(&path).unwrap();
        assert_eq!(map.len(), 2);
        assert_eq!(map["news"]["extbase"], "");
    }

    #[test]
    fn malformed_json_is_deserialization_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("constraints.json");
        std::fs::write(&path, r#"{"news": ["extbase"]}"#).unwrap();

        let err = load_constraint_file(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::DeserializationFailed);
        assert!(err.source_ref().is_some());
    }

    #[test]
    fn loads_partial_config() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("depviz.toml");
        std::fs::write(&path, "version_color = \"black\"\nratio = \"0.5\"\n").unwrap();

        let config = load_config(&path).unwrap();
        assert_eq!(config.version_color.as_str(), "black");
        assert_eq!(config.ratio.as_deref(), Some("0.5"));
        assert!(config.placeholder_nodes);
    }

    #[test]
    fn empty_palette_in_config_is_rejected() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("depviz.toml");
        std::fs::write(&path, "palette = []\n").unwrap();

        let err = load_config(&path).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::ConfigInvalid);
    }

    #[test]
    fn missing_config_file() {
        let err = load_config(Path::new("/nonexistent/depviz.toml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
    }
}
