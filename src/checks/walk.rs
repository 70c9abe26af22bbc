//! Shared traversal helpers for the single-node checks.

use crate::analyzer::Document;
use crate::dialect::Dialect;
use crate::node::Node;

const V2_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch"];
const V3_METHODS: &[&str] = &["get", "put", "post", "delete", "options", "head", "patch", "trace"];

/// One operation under `/paths`.
pub struct Operation<'a> {
    /// The path template, e.g. `/pets/{petId}`.
    pub path: &'a str,
    /// Lower-case HTTP method key.
    pub method: &'a str,
    pub node: &'a Node,
}

/// HTTP method keys recognized for a dialect.
pub fn methods(dialect: Dialect) -> &'static [&'static str] {
    match dialect {
        Dialect::V2 => V2_METHODS,
        Dialect::V3 => V3_METHODS,
    }
}

/// Enumerate every operation of the document, in document order.
pub fn operations(doc: &Document) -> Vec<Operation<'_>> {
    let mut out = Vec::new();
    let Some(paths) = doc.root.get("paths") else {
        return out;
    };
    for (path, item) in paths.properties() {
        for (key, node) in item.properties() {
            if methods(doc.dialect).contains(&key.as_str()) {
                out.push(Operation { path: path.as_str(), method: key.as_str(), node });
            }
        }
    }
    out
}
