//! OpenAPI dialects
//!
//! The v2 (Swagger) and v3 layouts differ in where reusable components
//! live and in how discriminators spell their implied references. The
//! dialect is an explicit tag threaded through extraction and reporting;
//! every dialect-specific decision is a `match` on it.

use serde::{Deserialize, Serialize};

use crate::node::Node;

/// OpenAPI specification major version.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Dialect {
    /// OpenAPI 2.0 (Swagger).
    V2,
    /// OpenAPI 3.x.
    V3,
}

/// One reusable-component section: where its entries are declared, and
/// the message reported when a reference into it dangles.
#[derive(Debug, Clone, Copy)]
pub struct Section {
    pub prefix: &'static str,
    pub message: &'static str,
}

const V2_SECTIONS: &[Section] = &[
    Section { prefix: "/definitions", message: "Missing schema" },
    Section { prefix: "/parameters", message: "Missing parameter" },
    Section { prefix: "/responses", message: "Missing response" },
];

const V3_SECTIONS: &[Section] = &[
    Section { prefix: "/components/schemas", message: "Missing schema" },
    Section { prefix: "/components/parameters", message: "Missing parameter" },
    Section { prefix: "/components/responses", message: "Missing response" },
    Section { prefix: "/components/examples", message: "Missing example" },
    Section { prefix: "/components/requestBodies", message: "Missing request body" },
    Section { prefix: "/components/headers", message: "Missing header" },
    Section { prefix: "/components/links", message: "Missing link" },
    Section { prefix: "/components/callbacks", message: "Missing callback" },
];

impl Dialect {
    /// The component sections checked for this dialect, in reporting order.
    pub fn sections(&self) -> &'static [Section] {
        match self {
            Dialect::V2 => V2_SECTIONS,
            Dialect::V3 => V3_SECTIONS,
        }
    }

    /// Sniff the dialect from a parsed root: `swagger: "2..."` vs
    /// `openapi: "3..."`.
    pub fn detect(root: &Node) -> Option<Dialect> {
        if let Some(version) = root.get("swagger").and_then(Node::token_value) {
            if version.starts_with('2') {
                return Some(Dialect::V2);
            }
        }
        if let Some(version) = root.get("openapi").and_then(Node::token_value) {
            if version.starts_with('3') {
                return Some(Dialect::V3);
            }
        }
        None
    }
}

impl std::fmt::Display for Dialect {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Dialect::V2 => write!(f, "v2"),
            Dialect::V3 => write!(f, "v3"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn detects_v2_and_v3() {
        let v2 = Node::from_json(&json!({ "swagger": "2.0" }));
        let v3 = Node::from_json(&json!({ "openapi": "3.0.1" }));
        let neither = Node::from_json(&json!({ "info": {} }));
        assert_eq!(Dialect::detect(&v2), Some(Dialect::V2));
        assert_eq!(Dialect::detect(&v3), Some(Dialect::V3));
        assert_eq!(Dialect::detect(&neither), None);
    }

    #[test]
    fn section_tables() {
        assert_eq!(Dialect::V2.sections().len(), 3);
        assert_eq!(Dialect::V3.sections().len(), 8);
        assert_eq!(Dialect::V2.sections()[0].prefix, "/definitions");
        assert_eq!(Dialect::V3.sections()[4].message, "Missing request body");
    }
}
