//! Document tree
//!
//! The linter consumes OpenAPI documents as an immutable tree of [`Node`]s
//! built from an already-parsed `serde_json` or `serde_yaml` value. Every
//! node carries its own root-relative JSON Pointer path so diagnostics can
//! name an exact location. Navigation never fails: absent children come
//! back as `None` and callers treat that as an empty result.

use crate::pointer;

/// One node of a parsed OpenAPI document.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    path: String,
    kind: NodeKind,
}

/// Node payload: object, array or scalar.
#[derive(Debug, Clone, PartialEq)]
pub enum NodeKind {
    /// Ordered name -> child mapping. Key order follows the source value.
    Object(Vec<(String, Node)>),
    /// Ordered children.
    Array(Vec<Node>),
    Scalar(Scalar),
}

/// Scalar token values.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    Str(String),
    /// Numbers keep their source text; enum values and YAML map keys are
    /// compared as tokens, not as parsed numbers.
    Number(String),
    Bool(bool),
    Null,
}

impl Node {
    /// Build a tree from a parsed JSON value.
    pub fn from_json(value: &serde_json::Value) -> Self {
        Self::build_json(value, String::new())
    }

    /// Build a tree from a parsed YAML value. Non-string mapping keys
    /// (YAML happily parses `200:` as an integer key) are converted to
    /// their token text; keys without one are skipped.
    pub fn from_yaml(value: &serde_yaml::Value) -> Self {
        Self::build_yaml(value, String::new())
    }

    fn build_json(value: &serde_json::Value, path: String) -> Self {
        use serde_json::Value;
        let kind = match value {
            Value::Object(map) => NodeKind::Object(
                map.iter()
                    .map(|(key, child)| {
                        let child_path = format!("{}/{}", path, pointer::escape(key));
                        (key.clone(), Self::build_json(child, child_path))
                    })
                    .collect(),
            ),
            Value::Array(items) => NodeKind::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, child)| Self::build_json(child, format!("{}/{}", path, i)))
                    .collect(),
            ),
            Value::String(s) => NodeKind::Scalar(Scalar::Str(s.clone())),
            Value::Number(n) => NodeKind::Scalar(Scalar::Number(n.to_string())),
            Value::Bool(b) => NodeKind::Scalar(Scalar::Bool(*b)),
            Value::Null => NodeKind::Scalar(Scalar::Null),
        };
        Node { path, kind }
    }

    fn build_yaml(value: &serde_yaml::Value, path: String) -> Self {
        use serde_yaml::Value;
        let kind = match value {
            Value::Mapping(map) => NodeKind::Object(
                map.iter()
                    .filter_map(|(key, child)| {
                        let key = yaml_key(key)?;
                        let child_path = format!("{}/{}", path, pointer::escape(&key));
                        Some((key, Self::build_yaml(child, child_path)))
                    })
                    .collect(),
            ),
            Value::Sequence(items) => NodeKind::Array(
                items
                    .iter()
                    .enumerate()
                    .map(|(i, child)| Self::build_yaml(child, format!("{}/{}", path, i)))
                    .collect(),
            ),
            Value::String(s) => NodeKind::Scalar(Scalar::Str(s.clone())),
            Value::Number(n) => NodeKind::Scalar(Scalar::Number(n.to_string())),
            Value::Bool(b) => NodeKind::Scalar(Scalar::Bool(*b)),
            Value::Null => NodeKind::Scalar(Scalar::Null),
            Value::Tagged(tagged) => return Self::build_yaml(&tagged.value, path),
        };
        Node { path, kind }
    }

    /// Root-relative JSON Pointer to this node (`""` for the root).
    pub fn path(&self) -> &str {
        &self.path
    }

    pub fn kind(&self) -> &NodeKind {
        &self.kind
    }

    pub fn is_object(&self) -> bool {
        matches!(self.kind, NodeKind::Object(_))
    }

    pub fn is_array(&self) -> bool {
        matches!(self.kind, NodeKind::Array(_))
    }

    /// Ordered properties of an object node; empty for everything else.
    pub fn properties(&self) -> &[(String, Node)] {
        match &self.kind {
            NodeKind::Object(props) => props,
            _ => &[],
        }
    }

    /// Ordered elements of an array node; empty for everything else.
    pub fn elements(&self) -> &[Node] {
        match &self.kind {
            NodeKind::Array(items) => items,
            _ => &[],
        }
    }

    /// Child by property name.
    pub fn get(&self, key: &str) -> Option<&Node> {
        self.properties()
            .iter()
            .find(|(name, _)| name == key)
            .map(|(_, child)| child)
    }

    /// Navigate by JSON Pointer relative to this node. Unparseable
    /// pointers and absent paths both yield `None`.
    pub fn at(&self, json_pointer: &str) -> Option<&Node> {
        let ptr = pointer::Pointer::parse(json_pointer)?;
        let mut current = self;
        for segment in ptr.segments() {
            current = match &current.kind {
                NodeKind::Object(_) => current.get(segment)?,
                NodeKind::Array(items) => items.get(segment.parse::<usize>().ok()?)?,
                NodeKind::Scalar(_) => return None,
            };
        }
        Some(current)
    }

    /// String value of a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match &self.kind {
            NodeKind::Scalar(Scalar::Str(s)) => Some(s),
            _ => None,
        }
    }

    /// Token text of any non-null scalar.
    pub fn token_value(&self) -> Option<String> {
        match &self.kind {
            NodeKind::Scalar(Scalar::Str(s)) => Some(s.clone()),
            NodeKind::Scalar(Scalar::Number(n)) => Some(n.clone()),
            NodeKind::Scalar(Scalar::Bool(b)) => Some(b.to_string()),
            _ => None,
        }
    }

    /// Is this a reference object (an object with a `$ref` property)?
    pub fn is_ref(&self) -> bool {
        self.get("$ref").is_some()
    }

    /// The `$ref` value node, when this is a reference object.
    pub fn ref_node(&self) -> Option<&Node> {
        self.get("$ref")
    }
}

fn yaml_key(key: &serde_yaml::Value) -> Option<String> {
    use serde_yaml::Value;
    match key {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn paths_are_threaded_through_the_tree() {
        let root = Node::from_json(&json!({
            "paths": { "/pets": { "get": { "tags": ["pets"] } } }
        }));
        let tag = root.at("/paths/~1pets/get/tags/0").unwrap();
        assert_eq!(tag.path(), "/paths/~1pets/get/tags/0");
        assert_eq!(tag.as_str(), Some("pets"));
    }

    #[test]
    fn absent_navigation_is_none() {
        let root = Node::from_json(&json!({ "a": 1 }));
        assert!(root.at("/b").is_none());
        assert!(root.at("/a/b").is_none());
        assert!(root.get("b").is_none());
    }

    #[test]
    fn ref_detection() {
        let node = Node::from_json(&json!({ "$ref": "#/definitions/Pet" }));
        assert!(node.is_ref());
        assert_eq!(node.ref_node().unwrap().as_str(), Some("#/definitions/Pet"));
        assert!(!Node::from_json(&json!({ "type": "object" })).is_ref());
    }

    #[test]
    fn yaml_integer_keys_become_tokens() {
        let value: serde_yaml::Value =
            serde_yaml::from_str("responses:\n  200:\n    description: ok\n").unwrap();
        let root = Node::from_yaml(&value);
        let ok = root.at("/responses/200/description").unwrap();
        assert_eq!(ok.as_str(), Some("ok"));
    }

    #[test]
    fn token_values() {
        let root = Node::from_json(&json!({ "a": 12, "b": true, "c": null }));
        assert_eq!(root.get("a").unwrap().token_value(), Some("12".to_string()));
        assert_eq!(root.get("b").unwrap().token_value(), Some("true".to_string()));
        assert_eq!(root.get("c").unwrap().token_value(), None);
    }
}
