//! Structural checks
//!
//! Each check inspects one aspect of a parsed OpenAPI document and emits
//! [`Issue`]s located by JSON Pointer. The single-node checks pattern-match
//! a couple of levels of the tree; the missing-definition check runs the
//! whole-document reference engine in [`crate::refs`].

pub mod contact_email;
pub mod declared_tag;
pub mod defined_response;
pub mod missing_definition;
pub mod operation_id;
pub mod paths;
pub mod request_body;
pub mod url_format;
pub mod walk;

use serde::Serialize;

use crate::analyzer::Document;

/// One finding: the rule that produced it, its message, and the JSON
/// Pointer of the offending node.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Issue {
    pub rule: &'static str,
    pub message: String,
    pub path: String,
}

/// A per-document check.
pub trait Check {
    /// Stable rule key.
    fn key(&self) -> &'static str;

    /// Run against one document, returning findings in document order.
    fn run(&self, doc: &Document) -> Vec<Issue>;
}

/// The full default check suite, in registration order.
pub fn default_checks() -> Vec<Box<dyn Check>> {
    vec![
        Box::new(contact_email::ContactValidEmail::new()),
        Box::new(url_format::UrlFormat),
        Box::new(declared_tag::DeclaredTag),
        Box::new(defined_response::DefinedResponse),
        Box::new(request_body::ProvideRequestBodyDescription),
        Box::new(operation_id::InvalidOperationIdName::new()),
        Box::new(missing_definition::MissingDefinition),
    ]
}
