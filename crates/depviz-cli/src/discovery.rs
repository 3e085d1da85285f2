//! Locating extension manifests under an extension directory.

use std::path::{Path, PathBuf};
use std::time::Instant;

use ignore::WalkBuilder;
use ignore::overrides::OverrideBuilder;
use tracing::info;

use depviz_core::ConstraintMap;
use depviz_error::{Error, Result};

use crate::emconf::{MANIFEST_FILE, read_manifest};

/// One extension directory holding a manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Manifest {
    /// Directory name, used as the component name.
    pub component: String,
    pub path: PathBuf,
}

/// Find `<ext_path>/<dir>/ext_emconf.php` for every `<dir>` matching `pattern`.
///
/// `pattern` is a glob over directory names (`*`, `news*`, `{news,blog}`).
/// Results are sorted by directory name. Hidden directories are skipped;
/// symlinked extension directories are followed.
pub fn discover_manifests(ext_path: &Path, pattern: &str) -> Result<Vec<Manifest>> {
    let discovery_start = Instant::now();
    let dir = ext_path.display().to_string();

    if !ext_path.is_dir() {
        return Err(Error::invalid_argument("extension path is not a directory")
            .with_operation("discovery::discover_manifests")
            .with_context("dir", dir));
    }

    let mut overrides = OverrideBuilder::new(ext_path);
    overrides.add(pattern).map_err(|err| {
        Error::invalid_argument(format!("invalid extension pattern '{pattern}'"))
            .with_operation("discovery::discover_manifests")
            .set_source(err)
    })?;
    let matcher = overrides.build().map_err(|err| {
        Error::invalid_argument(format!("invalid extension pattern '{pattern}'"))
            .with_operation("discovery::discover_manifests")
            .set_source(err)
    })?;

    let mut manifests = Vec::new();
    let walker = WalkBuilder::new(ext_path)
        .standard_filters(false)
        .hidden(true)
        .follow_links(true)
        .max_depth(Some(1))
        .sort_by_file_name(|a, b| a.cmp(b))
        .build();

    for entry in walker {
        let entry = entry.map_err(|err| {
            Error::traversal_failed(dir.clone(), format!("failed to walk directory {dir}: {err}"))
                .with_operation("discovery::discover_manifests")
                .set_source(err)
        })?;

        if entry.depth() != 1 || !entry.file_type().is_some_and(|ft| ft.is_dir()) {
            continue;
        }
        if !matcher.matched(entry.path(), true).is_whitelist() {
            continue;
        }

        let path = entry.path().join(MANIFEST_FILE);
        if !path.is_file() {
            tracing::debug!("no {} in {}", MANIFEST_FILE, entry.path().display());
            continue;
        }

        let component = entry.file_name().to_string_lossy().into_owned();
        manifests.push(Manifest { component, path });
    }

    info!(
        "Manifest discovery: {:.2}s ({} extensions)",
        discovery_start.elapsed().as_secs_f64(),
        manifests.len()
    );

    Ok(manifests)
}

/// Read every manifest into a constraint map keyed by component name.
pub fn collect_constraints(manifests: &[Manifest]) -> Result<ConstraintMap> {
    let mut map = ConstraintMap::new();
    for manifest in manifests {
        let deps = read_manifest(&manifest.path)
            .map_err(|err| err.with_context("component", manifest.component.clone()))?;
        tracing::trace!("{} declares {} dependencies", manifest.component, deps.len());
        map.insert(manifest.component.clone(), deps);
    }
    Ok(map)
}
