//! Resource-path heuristic
//!
//! Resource-oriented checks care about paths that name a collection or a
//! concrete resource, not the variable lookups underneath them. A path is
//! a resource when its terminal segment is a literal and either its parent
//! segment is also a literal, or the very next declared path drills into
//! it by variable (`/pets` followed by `/pets/{petId}`).

use std::collections::BTreeSet;

use crate::node::Node;

/// Is this path segment a `{variable}`?
pub fn is_variable(segment: &str) -> bool {
    segment.starts_with('{') && segment.ends_with('}')
}

/// Drop a single trailing slash.
pub fn trim_trailing_slash(path: &str) -> &str {
    path.strip_suffix('/').unwrap_or(path)
}

/// The last `/`-separated segment.
pub fn terminal_segment(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or(path)
}

/// The resource paths declared under `/paths`.
pub fn resource_paths(root: &Node) -> BTreeSet<String> {
    let mut declared: Vec<&str> = root
        .get("paths")
        .map(|paths| paths.properties().iter().map(|(name, _)| name.as_str()).collect())
        .unwrap_or_default();
    declared.sort_unstable();

    let mut resources = BTreeSet::new();
    for (i, raw) in declared.iter().enumerate() {
        let path = trim_trailing_slash(raw);
        let fragments: Vec<&str> = path.split('/').collect();
        let Some(last) = fragments.last() else { continue };
        if last.is_empty() || is_variable(last) {
            continue;
        }
        if fragments.len() > 2 && !is_variable(fragments[fragments.len() - 2]) {
            resources.insert(path.to_string());
        } else if let Some(next) = declared.get(i + 1) {
            // Paths like /toto/{titi}/tutu count as resources only when the
            // next declared path drills into them by variable.
            let child = trim_trailing_slash(next);
            if child.starts_with(path) && is_variable(terminal_segment(child)) {
                resources.insert(path.to_string());
            }
        }
    }
    resources
}
