//! URL validity of the info-block links.

use url::Url;

use crate::analyzer::Document;
use crate::checks::{Check, Issue};

const MESSAGE: &str = "Make sure to only use an valid URL.";
const URL_FIELDS: &[&str] = &["/info/termsOfService", "/info/contact/url", "/info/license/url"];
const SCHEMES: &[&str] = &["http", "https", "ftp"];

pub struct UrlFormat;

impl Check for UrlFormat {
    fn key(&self) -> &'static str {
        "UrlFormat"
    }

    fn run(&self, doc: &Document) -> Vec<Issue> {
        let mut issues = Vec::new();
        for field in URL_FIELDS {
            let Some(node) = doc.root.at(field) else { continue };
            let Some(value) = node.token_value() else { continue };
            if !value.trim().is_empty() && value != "null" && !is_valid_url(&value) {
                issues.push(Issue {
                    rule: self.key(),
                    message: MESSAGE.to_string(),
                    path: node.path().to_string(),
                });
            }
        }
        issues
    }
}

fn is_valid_url(value: &str) -> bool {
    match Url::parse(value) {
        Ok(url) => SCHEMES.contains(&url.scheme()) && url.has_host(),
        Err(_) => false,
    }
}
