//! DOT format utilities for graph rendering.

use std::fmt::Write;

use depviz_core::NodeShape;

/// Map a node shape to its DOT name; `None` keeps the renderer default.
pub fn shape_name(shape: NodeShape) -> Option<&'static str> {
    match shape {
        NodeShape::Default => None,
        NodeShape::Rect => Some("box"),
    }
}

/// Escape special characters for quoted DOT strings.
pub fn escape_label(input: &str) -> String {
    input
        .replace('\\', "\\\\")
        .replace('"', "\\\"")
        .replace('\n', "\\n")
}

/// Quote an identifier. Component names and version ids contain `-`, `.`
/// and `*`, so every id is written as a quoted string.
pub fn quote_id(input: &str) -> String {
    format!("\"{}\"", escape_label(input))
}

/// Graph name as written after `digraph`: bare when it is a plain DOT
/// identifier, quoted otherwise.
pub fn graph_id(name: &str) -> String {
    let mut chars = name.chars();
    let plain = chars
        .next()
        .is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
    if plain { name.to_string() } else { quote_id(name) }
}

/// Write indentation to output.
pub fn write_indent(output: &mut String, level: usize) {
    for _ in 0..level {
        output.push_str("  ");
    }
}

/// A DOT graph builder for constructing valid DOT output.
pub struct DotBuilder {
    output: String,
    indent: usize,
}

impl DotBuilder {
    /// Create a new directed graph with the given name.
    pub fn new(name: &str) -> Self {
        let mut output = String::with_capacity(4096);
        let _ = writeln!(output, "digraph {} {{", graph_id(name));
        Self { output, indent: 1 }
    }

    /// Add a graph attribute.
    pub fn attr(&mut self, key: &str, value: &str) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = writeln!(self.output, "{}=\"{}\";", key, escape_label(value));
        self
    }

    /// Add a blank line for readability.
    pub fn blank(&mut self) -> &mut Self {
        self.output.push('\n');
        self
    }

    /// Add a node with attributes.
    pub fn node(&mut self, id: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        self.output.push_str(&quote_id(id));
        self.write_attrs(attrs);
        self
    }

    /// Add an edge with attributes.
    pub fn edge(&mut self, from: &str, to: &str, attrs: &[(&str, &str)]) -> &mut Self {
        write_indent(&mut self.output, self.indent);
        let _ = write!(self.output, "{} -> {}", quote_id(from), quote_id(to));
        self.write_attrs(attrs);
        self
    }

    /// Finish building and return the DOT string.
    pub fn build(mut self) -> String {
        self.output.push_str("}\n");
        self.output
    }

    fn write_attrs(&mut self, attrs: &[(&str, &str)]) {
        if !attrs.is_empty() {
            self.output.push_str(" [");
            for (i, (key, value)) in attrs.iter().enumerate() {
                if i > 0 {
                    self.output.push_str(", ");
                }
                let _ = write!(self.output, "{}=\"{}\"", key, escape_label(value));
            }
            self.output.push(']');
        }
        self.output.push_str(";\n");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_quotes_and_newlines() {
        assert_eq!(escape_label(r#"say "hi""#), r#"say \"hi\""#);
        assert_eq!(escape_label("a\nb"), "a\\nb");
        assert_eq!(quote_id("L_*"), "\"L_*\"");
    }

    #[test]
    fn graph_names_are_quoted_unless_plain() {
        assert_eq!(graph_id("dependencies"), "dependencies");
        assert_eq!(graph_id("_deps2"), "_deps2");
        assert_eq!(graph_id("my deps"), "\"my deps\"");
        assert_eq!(graph_id("2deps"), "\"2deps\"");
        assert_eq!(graph_id(""), "\"\"");
        assert_eq!(DotBuilder::new("my deps").build(), "digraph \"my deps\" {\n}\n");
    }

    #[test]
    fn builder_writes_nodes_and_edges() {
        let mut dot = DotBuilder::new("g");
        dot.attr("ratio", "0.2")
            .node("a", &[])
            .node("b", &[("shape", "box")])
            .edge("a", "b", &[("color", "red")]);

        assert_eq!(
            dot.build(),
            "digraph g {\n  ratio=\"0.2\";\n  \"a\";\n  \"b\" [shape=\"box\"];\n  \"a\" -> \"b\" [color=\"red\"];\n}\n"
        );
    }
}
