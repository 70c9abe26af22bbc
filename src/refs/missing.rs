//! Missing-definition reporting
//!
//! Per component section: index what the document declares, subtract it
//! from what the extraction pass saw used, and emit one issue per
//! use-site of every dangling pointer.

use std::collections::BTreeSet;

use tracing::debug;

use crate::checks::Issue;
use crate::dialect::Dialect;
use crate::node::Node;
use crate::pointer::Pointer;
use crate::refs::UsedReferences;

const RULE: &str = "MissingDefinition";

/// The pointers a component section actually declares: its direct
/// property names appended to the section prefix. An absent section
/// declares nothing.
pub fn declared_pointers(root: &Node, section_prefix: &str) -> BTreeSet<Pointer> {
    let Some(prefix) = Pointer::parse(section_prefix) else {
        return BTreeSet::new();
    };
    let Some(section) = root.at(section_prefix) else {
        return BTreeSet::new();
    };
    section
        .properties()
        .iter()
        .map(|(name, _)| prefix.append(name))
        .collect()
}

/// Report every used-but-undeclared pointer at all of its use-sites.
///
/// Sections are checked in the dialect's fixed order; a reported pointer
/// is removed from the table so overlapping prefixes could never report
/// it twice.
pub fn report_missing(root: &Node, dialect: Dialect, mut used: UsedReferences) -> Vec<Issue> {
    let mut issues = Vec::new();
    for section in dialect.sections() {
        let Some(prefix) = Pointer::parse(section.prefix) else {
            continue;
        };
        let declared = declared_pointers(root, section.prefix);
        let dangling: Vec<Pointer> = used
            .pointers()
            .filter(|p| p.starts_with(&prefix) && !declared.contains(*p))
            .cloned()
            .collect();
        for pointer in dangling {
            let sites = used.remove(&pointer);
            debug!(%pointer, use_sites = sites.len(), "dangling reference");
            for site in sites {
                issues.push(Issue {
                    rule: RULE,
                    message: section.message.to_string(),
                    path: site,
                });
            }
        }
    }
    issues
}
