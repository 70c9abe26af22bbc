//! Check adapter for the reference engine in [`crate::refs`].

use crate::analyzer::Document;
use crate::checks::{Check, Issue};
use crate::refs;

pub struct MissingDefinition;

impl Check for MissingDefinition {
    fn key(&self) -> &'static str {
        "MissingDefinition"
    }

    fn run(&self, doc: &Document) -> Vec<Issue> {
        let used = refs::extract_used_references(&doc.root, doc.dialect);
        refs::report_missing(&doc.root, doc.dialect, used)
    }
}
