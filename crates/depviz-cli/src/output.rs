//! Output generation (DOT graphs).

use std::path::Path;
use std::time::Instant;

use tracing::info;

use depviz_core::DependencyGraph;
use depviz_dot::render_graph;
use depviz_error::{Error, Result};

/// Render the finished graph to DOT.
pub fn generate_dot_output(graph: &DependencyGraph) -> String {
    let render_start = Instant::now();
    let result = render_graph(graph);
    info!(
        "Graph rendering: {:.2}s",
        render_start.elapsed().as_secs_f64()
    );
    result
}

/// Write DOT to `path`, or to stdout when no path is given.
pub fn write_output(dot: &str, path: Option<&Path>) -> Result<()> {
    match path {
        Some(path) => {
            std::fs::write(path, dot).map_err(|err| {
                Error::from(err)
                    .with_operation("output::write_output")
                    .with_context("path", path.display().to_string())
            })?;
            info!(path = %path.display(), "output written");
        }
        None => print!("{dot}"),
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_to_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("graph.dot");
        write_output("digraph dependencies {\n}\n", Some(&path)).unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "digraph dependencies {\n}\n"
        );
    }

    #[test]
    fn unwritable_path_fails() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("graph.dot");
        assert!(write_output("", Some(&path)).is_err());
    }
}
