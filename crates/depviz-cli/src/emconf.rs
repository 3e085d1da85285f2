//! Reading `constraints.depends` out of TYPO3 `ext_emconf.php` manifests.
//!
//! Manifests are PHP, but the part we need is a plain array literal:
//!
//! ```php
//! 'constraints' => [
//!     'depends' => [
//!         'typo3' => '6.2.0-6.2.99',
//!         'extbase' => '',
//!     ],
//! ],
//! ```
//!
//! Both `array(...)` and `[...]` syntax are accepted. The file is read
//! textually and never executed.

use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;

use depviz_core::Dependencies;
use depviz_error::{Error, Result};

/// File name of an extension manifest.
pub const MANIFEST_FILE: &str = "ext_emconf.php";

static CONSTRAINTS_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]constraints['"]\s*=>"#).expect("valid regex"));

static DEPENDS_KEY: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r#"['"]depends['"]\s*=>"#).expect("valid regex"));

static PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r#"['"](?P<key>[^'"]+)['"]\s*=>\s*['"](?P<value>[^'"]*)['"]"#)
        .expect("valid regex")
});

/// Body of the array literal that opens `after_arrow`, without its brackets.
///
/// Nesting is tracked for the literal's own bracket kind and quoted strings
/// are skipped, so `array('a' => array())` yields `'a' => array()`.
fn array_literal_body(after_arrow: &str) -> Option<&str> {
    let trimmed = after_arrow.trim_start();
    let (open, close, inner) = match trimmed.strip_prefix('[') {
        Some(inner) => ('[', ']', inner),
        None => {
            let inner = trimmed.strip_prefix("array")?.trim_start().strip_prefix('(')?;
            ('(', ')', inner)
        }
    };

    let mut depth = 0usize;
    let mut quote = None;
    let mut escaped = false;
    for (i, ch) in inner.char_indices() {
        if let Some(q) = quote {
            if escaped {
                escaped = false;
            } else if ch == '\\' {
                escaped = true;
            } else if ch == q {
                quote = None;
            }
            continue;
        }
        match ch {
            '\'' | '"' => quote = Some(ch),
            c if c == open => depth += 1,
            c if c == close => {
                if depth == 0 {
                    return Some(&inner[..i]);
                }
                depth -= 1;
            }
            _ => {}
        }
    }
    None
}

/// Extract the `dependency -> version range` map from manifest source.
///
/// A manifest without a `constraints` entry, or without `depends` inside
/// it, declares no dependencies. Only the `constraints` array is searched
/// for `depends`. Either key not followed by a complete array literal is an
/// [`InvalidFormat`](depviz_error::ErrorKind::InvalidFormat) error.
pub fn extract_dependencies(source: &str) -> Result<Dependencies> {
    let mut deps = Dependencies::new();

    let Some(constraints) = CONSTRAINTS_KEY.find(source) else {
        return Ok(deps);
    };
    let Some(constraints) = array_literal_body(&source[constraints.end()..]) else {
        return Err(Error::invalid_format("'constraints' is not followed by an array literal")
            .with_operation("emconf::extract_dependencies"));
    };
    let Some(depends) = DEPENDS_KEY.find(constraints) else {
        return Ok(deps);
    };
    let Some(body) = array_literal_body(&constraints[depends.end()..]) else {
        return Err(Error::invalid_format("'depends' is not followed by an array literal")
            .with_operation("emconf::extract_dependencies"));
    };

    for pair in PAIR.captures_iter(body) {
        deps.insert(pair["key"].to_string(), pair["value"].to_string());
    }
    Ok(deps)
}

/// Read a manifest from disk and extract its dependencies.
pub fn read_manifest(path: &Path) -> Result<Dependencies> {
    let source = std::fs::read_to_string(path).map_err(|err| {
        Error::from(err)
            .with_operation("emconf::read_manifest")
            .with_context("path", path.display().to_string())
    })?;
    extract_dependencies(&source)
        .map_err(|err| err.with_context("path", path.display().to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use depviz_error::ErrorKind;
    use pretty_assertions::assert_eq;

    fn deps(pairs: &[(&str, &str)]) -> Dependencies {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect()
    }

    #[test]
    fn reads_long_array_syntax() {
        let source = r#"<?php
$EM_CONF[$_EXTKEY] = array(
    'title' => 'News system',
    'version' => '3.0.1',
    'constraints' => array(
        'depends' => array(
            'typo3' => '6.2.0-6.2.99',
            'extbase' => '',
            "fluid" => "",
        ),
        'conflicts' => array(),
        'suggests' => array(
            'realurl' => '1.12.0',
        ),
    ),
);
"#;
        assert_eq!(
            extract_dependencies(source).unwrap(),
            deps(&[("typo3", "6.2.0-6.2.99"), ("extbase", ""), ("fluid", "")])
        );
    }

    #[test]
    fn reads_short_array_syntax() {
        let source = r#"<?php
$EM_CONF[$_EXTKEY] = [
    'constraints' => [
        'depends' => ['typo3' => '8.7.0-9.5.99', 'php' => '7.0.0-7.2.99'],
        'conflicts' => [],
    ],
];
"#;
        assert_eq!(
            extract_dependencies(source).unwrap(),
            deps(&[("typo3", "8.7.0-9.5.99"), ("php", "7.0.0-7.2.99")])
        );
    }

    #[test]
    fn missing_constraints_means_no_dependencies() {
        let source = "<?php\n$EM_CONF[$_EXTKEY] = array('title' => 'Bare');\n";
        assert!(extract_dependencies(source).unwrap().is_empty());
    }

    #[test]
    fn depends_outside_constraints_is_ignored() {
        let source =
            "<?php\n$EM_CONF[$_EXTKEY] = array('depends' => 'cms', 'constraints' => array());\n";
        assert!(extract_dependencies(source).unwrap().is_empty());
    }

    #[test]
    fn depends_after_constraints_block_is_ignored() {
        let source = "<?php\n$EM_CONF[$_EXTKEY] = array(\n    'constraints' => array('conflicts' => array()),\n    'depends' => array('foo' => '1.0'),\n);\n";
        assert!(extract_dependencies(source).unwrap().is_empty());
    }

    #[test]
    fn nested_arrays_and_quoted_brackets_inside_constraints() {
        let source = r#"<?php
$EM_CONF[$_EXTKEY] = [
    'constraints' => [
        'conflicts' => ['old_news' => '', 'note' => 'see [docs] (v2)'],
        'depends' => ['extbase' => '7.6.0-8.7.99'],
    ],
    'suggests' => ['depends' => 'nothing'],
];
"#;
        assert_eq!(
            extract_dependencies(source).unwrap(),
            deps(&[("extbase", "7.6.0-8.7.99")])
        );
    }

    #[test]
    fn unterminated_constraints_is_invalid() {
        let source = "<?php\n$EM_CONF[$_EXTKEY] = array('constraints' => array('depends' => array()";
        let err = extract_dependencies(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn empty_depends_block() {
        let source = "<?php\n$EM_CONF[$_EXTKEY] = ['constraints' => ['depends' => []]];\n";
        assert!(extract_dependencies(source).unwrap().is_empty());
    }

    #[test]
    fn depends_without_array_is_invalid() {
        let source = "<?php\n$EM_CONF[$_EXTKEY] = ['constraints' => ['depends' => $deps]];\n";
        let err = extract_dependencies(source).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::InvalidFormat);
    }

    #[test]
    fn unreadable_manifest_reports_path() {
        let err = read_manifest(Path::new("/nonexistent/news/ext_emconf.php")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::FileNotFound);
        assert!(err.context().iter().any(|(k, _)| *k == "path"));
    }
}
