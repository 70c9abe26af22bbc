//! Request bodies must carry a description.

use crate::analyzer::Document;
use crate::checks::{walk, Check, Issue};
use crate::dialect::Dialect;
use crate::node::Node;

const MESSAGE: &str = "Provide a description for each request body.";

pub struct ProvideRequestBodyDescription;

impl Check for ProvideRequestBodyDescription {
    fn key(&self) -> &'static str {
        "ProvideRequestBodyDescription"
    }

    fn run(&self, doc: &Document) -> Vec<Issue> {
        let mut issues = Vec::new();
        for op in walk::operations(doc) {
            let Some(body) = op.node.get("requestBody") else {
                continue;
            };
            match doc.dialect {
                // v2 has no requestBody keyword; the issue lands on the
                // operation carrying the stray one without a description.
                Dialect::V2 => {
                    if body.get("description").is_none() {
                        issues.push(self.issue(op.node));
                    }
                }
                Dialect::V3 => {
                    if !body.is_ref() && body.get("description").is_none() {
                        issues.push(self.issue(body));
                    }
                }
            }
        }
        if doc.dialect == Dialect::V3 {
            if let Some(bodies) = doc.root.at("/components/requestBodies") {
                for (_, body) in bodies.properties() {
                    if body.get("description").is_none() {
                        issues.push(self.issue(body));
                    }
                }
            }
        }
        issues
    }
}

impl ProvideRequestBodyDescription {
    fn issue(&self, node: &Node) -> Issue {
        Issue {
            rule: self.key(),
            message: MESSAGE.to_string(),
            path: node.path().to_string(),
        }
    }
}
