//! Operations must carry at least a tag declaration.

use crate::analyzer::Document;
use crate::checks::{walk, Check, Issue};

const MESSAGE: &str = "Associate a tag to this operation.";

pub struct DeclaredTag;

impl Check for DeclaredTag {
    fn key(&self) -> &'static str {
        "DeclaredTag"
    }

    fn run(&self, doc: &Document) -> Vec<Issue> {
        walk::operations(doc)
            .into_iter()
            .filter(|op| op.node.get("tags").is_none())
            .map(|op| Issue {
                rule: self.key(),
                message: MESSAGE.to_string(),
                path: op.node.path().to_string(),
            })
            .collect()
    }
}
