//! Operation ids must follow the path-derived camelCase convention.
//!
//! The expected id is the operation's path plus its method, camelCased on
//! `/` with `{var}` segments removed. A `get` on a path ending in a
//! variable is a lookup, so it expects a `FindById` suffix instead of the
//! method name.

use regex::Regex;

use crate::analyzer::Document;
use crate::checks::{walk, Check, Issue};

const OPERATION_ID: &str = "operationId";
// Delimited so camelCasing keeps each word's capital.
const FIND_BY_ID: &str = "/Find/By/Id";

pub struct InvalidOperationIdName {
    variable_segment: Regex,
}

impl InvalidOperationIdName {
    pub fn new() -> Self {
        Self {
            variable_segment: Regex::new(r"/\{(.*?)\}").expect("valid pattern"),
        }
    }
}

impl Default for InvalidOperationIdName {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for InvalidOperationIdName {
    fn key(&self) -> &'static str {
        "InvalidOperationIdName"
    }

    fn run(&self, doc: &Document) -> Vec<Issue> {
        let mut issues = Vec::new();
        for op in walk::operations(doc) {
            let Some(id_node) = op.node.get(OPERATION_ID) else {
                continue;
            };
            let Some(actual) = id_node.token_value() else {
                continue;
            };
            let find_by_id = op.path.ends_with('}') && op.method == "get";
            let source = if find_by_id {
                format!("{}{}", op.path, FIND_BY_ID)
            } else {
                format!("{}/{}", op.path, op.method)
            };
            let expected = to_camel_case(&self.variable_segment.replace_all(&source, ""));
            if actual != expected {
                issues.push(Issue {
                    rule: self.key(),
                    message: format!(
                        "Found {}: `{}` does not match expected format: `{}`",
                        OPERATION_ID, actual, expected
                    ),
                    path: id_node.path().to_string(),
                });
            }
        }
        issues
    }
}

/// camelCase over `/`-delimited words, first letter lower-cased.
fn to_camel_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for (i, word) in s.split('/').filter(|w| !w.is_empty()).enumerate() {
        let word = word.to_lowercase();
        if i == 0 {
            out.push_str(&word);
        } else {
            let mut chars = word.chars();
            if let Some(first) = chars.next() {
                out.extend(first.to_uppercase());
                out.push_str(chars.as_str());
            }
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use serde_json::json;

    fn run(paths: serde_json::Value) -> Vec<Issue> {
        let doc = Document::from_json(&json!({ "paths": paths }), Dialect::V3);
        InvalidOperationIdName::new().run(&doc)
    }

    #[test]
    fn camel_case_conversion() {
        assert_eq!(to_camel_case("/pets/post"), "petsPost");
        assert_eq!(to_camel_case("/pets/Find/By/Id"), "petsFindById");
        assert_eq!(to_camel_case("/store/orders/get"), "storeOrdersGet");
    }

    #[test]
    fn matching_id_passes() {
        let issues = run(json!({
            "/pets": { "post": { "operationId": "petsPost" } }
        }));
        assert!(issues.is_empty());
    }

    #[test]
    fn get_on_variable_path_expects_find_by_id() {
        let issues = run(json!({
            "/pets/{petId}": { "get": { "operationId": "petsFindById" } }
        }));
        assert!(issues.is_empty());
    }

    #[test]
    fn mismatch_is_reported_with_both_forms() {
        let issues = run(json!({
            "/pets": { "post": { "operationId": "createPet" } }
        }));
        assert_eq!(issues.len(), 1);
        assert_eq!(
            issues[0].message,
            "Found operationId: `createPet` does not match expected format: `petsPost`"
        );
        assert_eq!(issues[0].path, "/paths/~1pets/post/operationId");
    }

    #[test]
    fn variable_segments_are_dropped_from_expected_id() {
        let issues = run(json!({
            "/pets/{petId}/toys": { "get": { "operationId": "petsToysGet" } }
        }));
        assert!(issues.is_empty());
    }

    #[test]
    fn operation_without_id_is_skipped() {
        assert!(run(json!({ "/pets": { "get": {} } })).is_empty());
    }
}
