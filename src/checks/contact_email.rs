//! Contact email validity.

use regex::Regex;

use crate::analyzer::Document;
use crate::checks::{Check, Issue};

const MESSAGE: &str = "There should only be a valid email address in contact.";

pub struct ContactValidEmail {
    email: Regex,
}

impl ContactValidEmail {
    pub fn new() -> Self {
        Self {
            email: Regex::new(r"^[A-Za-z0-9._%+-]+@[A-Za-z0-9-]+(\.[A-Za-z0-9-]+)*\.[A-Za-z]{2,}$")
                .expect("valid pattern"),
        }
    }
}

impl Default for ContactValidEmail {
    fn default() -> Self {
        Self::new()
    }
}

impl Check for ContactValidEmail {
    fn key(&self) -> &'static str {
        "ContactValidEmail"
    }

    fn run(&self, doc: &Document) -> Vec<Issue> {
        let Some(email) = doc.root.at("/info/contact/email") else {
            return Vec::new();
        };
        let Some(value) = email.token_value() else {
            return Vec::new();
        };
        if is_checkable(&value) && !self.email.is_match(value.trim()) {
            return vec![Issue {
                rule: self.key(),
                message: MESSAGE.to_string(),
                path: email.path().to_string(),
            }];
        }
        Vec::new()
    }
}

fn is_checkable(s: &str) -> bool {
    !s.trim().is_empty() && s != "null"
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dialect::Dialect;
    use serde_json::json;

    fn run(email: serde_json::Value) -> Vec<Issue> {
        let doc = Document::from_json(
            &json!({ "info": { "contact": { "email": email } } }),
            Dialect::V3,
        );
        ContactValidEmail::new().run(&doc)
    }

    #[test]
    fn valid_email_passes() {
        assert!(run(json!("api-team@example.com")).is_empty());
    }

    #[test]
    fn invalid_email_is_reported() {
        let issues = run(json!("not-an-email"));
        assert_eq!(issues.len(), 1);
        assert_eq!(issues[0].path, "/info/contact/email");
        assert_eq!(issues[0].message, MESSAGE);
    }

    #[test]
    fn blank_and_null_are_ignored() {
        assert!(run(json!("")).is_empty());
        assert!(run(json!("   ")).is_empty());
        assert!(run(json!("null")).is_empty());
        assert!(run(json!(null)).is_empty());
    }
}
