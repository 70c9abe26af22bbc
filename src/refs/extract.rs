//! Whole-document reference extraction
//!
//! Depth-first pre-order walk over the tree. Objects contribute their
//! explicit `$ref` (when present) and their discriminator-implied
//! references, then all their property values are walked; arrays walk
//! their elements; scalars are leaves.

use std::collections::{BTreeMap, BTreeSet};

use crate::dialect::Dialect;
use crate::node::Node;
use crate::pointer::Pointer;

/// Every reference used by one document: the pointers, and for each
/// pointer the paths of the nodes that used it. A pointer referenced from
/// three operations has three use-sites and can produce three diagnostics.
#[derive(Debug, Default, Clone)]
pub struct UsedReferences {
    use_sites: BTreeMap<Pointer, BTreeSet<String>>,
}

impl UsedReferences {
    /// All used pointers, in pointer order.
    pub fn pointers(&self) -> impl Iterator<Item = &Pointer> {
        self.use_sites.keys()
    }

    pub fn contains(&self, pointer: &Pointer) -> bool {
        self.use_sites.contains_key(pointer)
    }

    /// Remove a pointer, yielding its recorded use-site paths. Reporting
    /// calls this so no pointer is ever reported twice.
    pub fn remove(&mut self, pointer: &Pointer) -> BTreeSet<String> {
        self.use_sites.remove(pointer).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.use_sites.is_empty()
    }

    fn record(&mut self, pointer: Pointer, use_site: String) {
        self.use_sites.entry(pointer).or_default().insert(use_site);
    }
}

/// Walk the whole tree and collect every explicit and discriminator-implied
/// reference.
pub fn extract_used_references(root: &Node, dialect: Dialect) -> UsedReferences {
    let mut used = UsedReferences::default();
    walk(root, dialect, &mut used);
    used
}

fn walk(node: &Node, dialect: Dialect, used: &mut UsedReferences) {
    if node.is_object() {
        if let Some((pointer, site)) = explicit_reference(node) {
            used.record(pointer, site);
        }
        for (pointer, site) in discriminator_references(node, dialect) {
            used.record(pointer, site);
        }
        for (_, child) in node.properties() {
            walk(child, dialect, used);
        }
    } else {
        for child in node.elements() {
            walk(child, dialect, used);
        }
    }
}

/// The `$ref` of a reference object, keyed at the `$ref` value node.
/// Malformed values (non-string, or not a `#`-prefixed fragment) are
/// excluded; malformed refs are another check's concern and must not
/// abort this pass.
fn explicit_reference(node: &Node) -> Option<(Pointer, String)> {
    let ref_node = node.ref_node()?;
    let pointer = Pointer::from_fragment(ref_node.as_str()?)?;
    Some((pointer, ref_node.path().to_string()))
}

/// References implied by a discriminator declaration on this node.
///
/// v2: `discriminator` names a sibling property whose `enum` lists the
/// concrete type names; each name becomes `/definitions/<name>`. When the
/// enum path does not resolve to an array there are no implied references.
///
/// v3: each `discriminator.mapping` value is already a full fragment
/// pointer.
fn discriminator_references(node: &Node, dialect: Dialect) -> Vec<(Pointer, String)> {
    let Some(discriminator) = node.get("discriminator") else {
        return Vec::new();
    };
    match dialect {
        Dialect::V2 => {
            let Some(property) = discriminator.token_value() else {
                return Vec::new();
            };
            let Some(values) = node
                .get("properties")
                .and_then(|p| p.get(&property))
                .and_then(|p| p.get("enum"))
                .filter(|e| e.is_array())
            else {
                return Vec::new();
            };
            let definitions = Pointer::parse("/definitions").expect("fixed prefix");
            values
                .elements()
                .iter()
                .filter_map(|element| {
                    let name = element.token_value()?;
                    Some((definitions.append(&name), discriminator.path().to_string()))
                })
                .collect()
        }
        Dialect::V3 => {
            let Some(mapping) = discriminator.get("mapping") else {
                return Vec::new();
            };
            mapping
                .properties()
                .iter()
                .filter_map(|(_, target)| {
                    let pointer = Pointer::from_fragment(target.as_str()?)?;
                    Some((pointer, target.path().to_string()))
                })
                .collect()
        }
    }
}
