//! Responses must be declared and carry a model.
//!
//! A response with no schema is acceptable when the operation's `default`
//! response supplies one (per media type in v3). `204` responses are
//! allowed to be empty. Referenced responses are resolved through the
//! document before inspection.

use std::collections::BTreeMap;

use crate::analyzer::Document;
use crate::checks::{walk, Check, Issue};
use crate::dialect::Dialect;
use crate::node::Node;

const MESSAGE_NO_RESPONSE: &str = "Define the responses of your operations.";
const MESSAGE_NO_MODEL: &str = "Define the model of your response.";
const EMPTY_RESPONSE_CODES: &[&str] = &["204"];

pub struct DefinedResponse;

impl Check for DefinedResponse {
    fn key(&self) -> &'static str {
        "DefinedResponse"
    }

    fn run(&self, doc: &Document) -> Vec<Issue> {
        let mut issues = Vec::new();
        for op in walk::operations(doc) {
            let Some(responses) = op.node.get("responses") else {
                continue;
            };
            if responses.properties().is_empty() {
                issues.push(self.issue(MESSAGE_NO_RESPONSE, responses));
            } else if doc.dialect == Dialect::V2 {
                self.visit_v2_responses(doc, responses, &mut issues);
            } else {
                self.visit_v3_responses(doc, responses, &mut issues);
            }
        }
        issues
    }
}

impl DefinedResponse {
    fn issue(&self, message: &str, node: &Node) -> Issue {
        Issue {
            rule: self.key(),
            message: message.to_string(),
            path: node.path().to_string(),
        }
    }

    fn visit_v2_responses(&self, doc: &Document, responses: &Node, issues: &mut Vec<Issue>) {
        let has_default_schema = responses
            .get("default")
            .map(|default| self.check_schema(doc, default, false, issues))
            .unwrap_or(false);

        for (code, response) in responses.properties() {
            if code == "default" || EMPTY_RESPONSE_CODES.contains(&code.as_str()) {
                continue;
            }
            self.check_schema(doc, response, has_default_schema, issues);
        }
    }

    /// A v2 response or a v3 media type: its resolved form must carry a
    /// `schema` unless the default response already supplies one.
    fn check_schema(
        &self,
        doc: &Document,
        node: &Node,
        has_default_schema: bool,
        issues: &mut Vec<Issue>,
    ) -> bool {
        let actual = doc.resolve(node);
        if actual.get("schema").is_none() && !has_default_schema {
            issues.push(self.issue(MESSAGE_NO_MODEL, node));
            return false;
        }
        true
    }

    fn visit_v3_responses(&self, doc: &Document, responses: &Node, issues: &mut Vec<Issue>) {
        let default_schemas = responses
            .get("default")
            .map(|default| self.visit_v3_response(doc, default, &BTreeMap::new(), issues))
            .unwrap_or_default();

        for (code, response) in responses.properties() {
            if code == "default" || EMPTY_RESPONSE_CODES.contains(&code.as_str()) {
                continue;
            }
            self.visit_v3_response(doc, response, &default_schemas, issues);
        }
    }

    /// Check one v3 response; returns which of its media types carried a
    /// schema so the default response can vouch for the others.
    fn visit_v3_response(
        &self,
        doc: &Document,
        response: &Node,
        default_schemas: &BTreeMap<String, bool>,
        issues: &mut Vec<Issue>,
    ) -> BTreeMap<String, bool> {
        let contents = contents(doc, response);
        if contents.is_empty() && default_schemas.is_empty() {
            issues.push(self.issue(MESSAGE_NO_MODEL, response));
            return BTreeMap::new();
        }
        let mut result = BTreeMap::new();
        for (media_type, media_node) in contents {
            let has_default = default_schemas.get(media_type).copied().unwrap_or(false);
            result.insert(
                media_type.to_string(),
                self.check_schema(doc, media_node, has_default, issues),
            );
        }
        result
    }
}

fn contents<'a>(doc: &'a Document, response: &'a Node) -> Vec<(&'a str, &'a Node)> {
    doc.resolve(response)
        .get("content")
        .map(|content| {
            content
                .properties()
                .iter()
                .map(|(name, node)| (name.as_str(), node))
                .collect()
        })
        .unwrap_or_default()
}
