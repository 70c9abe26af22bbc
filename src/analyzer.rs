//! Per-document analysis driver

use std::path::{Path, PathBuf};

use tracing::{debug, info, warn};
use walkdir::WalkDir;

use crate::checks::{self, Check, Issue};
use crate::dialect::Dialect;
use crate::error::{LintError, Result};
use crate::node::Node;
use crate::pointer::Pointer;

/// One parsed OpenAPI document plus its dialect.
pub struct Document {
    pub root: Node,
    pub dialect: Dialect,
}

impl Document {
    pub fn new(root: Node, dialect: Dialect) -> Self {
        Self { root, dialect }
    }

    pub fn from_json(value: &serde_json::Value, dialect: Dialect) -> Self {
        Self::new(Node::from_json(value), dialect)
    }

    pub fn from_yaml(value: &serde_yaml::Value, dialect: Dialect) -> Self {
        Self::new(Node::from_yaml(value), dialect)
    }

    /// Parse YAML or JSON text (JSON is a YAML subset) and sniff the
    /// dialect from the version field.
    pub fn parse_str(text: &str) -> Result<Self> {
        let value: serde_yaml::Value = serde_yaml::from_str(text)?;
        let root = Node::from_yaml(&value);
        let dialect = Dialect::detect(&root).ok_or_else(|| {
            LintError::UnknownDialect("document declares neither swagger 2 nor openapi 3".into())
        })?;
        Ok(Self::new(root, dialect))
    }

    /// Follow an in-document `$ref` one step. Non-reference nodes and
    /// unresolvable targets come back unchanged; model checks inspect the
    /// best node they can reach rather than failing.
    pub fn resolve<'a>(&'a self, node: &'a Node) -> &'a Node {
        let target = node
            .ref_node()
            .and_then(|r| r.as_str())
            .and_then(Pointer::from_fragment)
            .and_then(|ptr| self.root.at(&ptr.to_string()));
        target.unwrap_or(node)
    }
}

/// Runs a fixed list of checks over documents.
pub struct Analyzer {
    checks: Vec<Box<dyn Check>>,
}

impl Default for Analyzer {
    fn default() -> Self {
        Self::new()
    }
}

impl Analyzer {
    /// Analyzer with the full default check suite.
    pub fn new() -> Self {
        Self { checks: checks::default_checks() }
    }

    pub fn with_checks(checks: Vec<Box<dyn Check>>) -> Self {
        Self { checks }
    }

    /// Run every check against one document. Issues come back in check
    /// registration order, then document order; nothing is kept between
    /// calls.
    pub fn analyze(&self, doc: &Document) -> Vec<Issue> {
        let mut issues = Vec::new();
        for check in &self.checks {
            let found = check.run(doc);
            debug!(rule = check.key(), issues = found.len(), "check complete");
            issues.extend(found);
        }
        info!(dialect = %doc.dialect, issues = issues.len(), "document analyzed");
        issues
    }
}

/// Lint every configured file under the given paths with the default
/// check suite.
///
/// Unreadable files, unparseable files and files that declare no known
/// dialect are all skipped with a warning; one broken file never aborts
/// the run. Files are visited in name order.
pub fn lint_paths(paths: &[PathBuf], suffixes: &[String]) -> Vec<(PathBuf, Vec<Issue>)> {
    let analyzer = Analyzer::new();
    let mut findings = Vec::new();
    for root in paths {
        for entry in WalkDir::new(root)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
        {
            let path = entry.path();
            if !path.is_file() || !has_suffix(path, suffixes) {
                continue;
            }
            let text = match std::fs::read_to_string(path) {
                Ok(text) => text,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping unreadable file");
                    continue;
                }
            };
            let doc = match Document::parse_str(&text) {
                Ok(doc) => doc,
                Err(e) => {
                    warn!(path = %path.display(), error = %e, "skipping file");
                    continue;
                }
            };
            let issues = analyzer.analyze(&doc);
            if !issues.is_empty() {
                findings.push((path.to_path_buf(), issues));
            }
        }
    }
    findings
}

fn has_suffix(path: &Path, suffixes: &[String]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| suffixes.iter().any(|s| s == ext))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn parse_str_detects_dialect() {
        let doc = Document::parse_str("openapi: 3.0.0\ninfo:\n  title: t\n").unwrap();
        assert_eq!(doc.dialect, Dialect::V3);
        let doc = Document::parse_str("swagger: \"2.0\"\n").unwrap();
        assert_eq!(doc.dialect, Dialect::V2);
        assert!(Document::parse_str("title: nope\n").is_err());
    }

    #[test]
    fn resolve_follows_refs_and_tolerates_dangling_ones() {
        let doc = Document::from_json(
            &json!({
                "definitions": { "Pet": { "type": "object" } },
                "a": { "$ref": "#/definitions/Pet" },
                "b": { "$ref": "#/definitions/Ghost" }
            }),
            Dialect::V2,
        );
        let a = doc.root.get("a").unwrap();
        assert_eq!(doc.resolve(a).path(), "/definitions/Pet");
        let b = doc.root.get("b").unwrap();
        assert_eq!(doc.resolve(b).path(), "/b");
    }

    #[test]
    fn analyzer_runs_all_default_checks() {
        let doc = Document::from_json(
            &json!({
                "paths": { "/pets": { "get": {
                    "tags": ["pets"],
                    "operationId": "petsGet",
                    "responses": { "200": { "schema": { "$ref": "#/definitions/Pet" } } }
                } } },
                "definitions": { "Pet": {} }
            }),
            Dialect::V2,
        );
        assert!(Analyzer::new().analyze(&doc).is_empty());
    }
}
