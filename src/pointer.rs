//! RFC 6901 JSON Pointers
//!
//! References inside an OpenAPI document ("#/definitions/Pet") and the
//! declared entries of its component sections are both normalized into
//! [`Pointer`] values before comparison, so "the same reference" is always
//! a structural question about segment sequences, never a string question
//! about escape spellings.

use std::fmt;

/// A normalized JSON Pointer.
///
/// Stored as unescaped segments; `Display` re-applies RFC 6901 escaping
/// (`~` -> `~0`, `/` -> `~1`). Equality, hashing and ordering are all
/// structural over the segment sequence.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Pointer {
    segments: Vec<String>,
}

impl Pointer {
    /// The root pointer (empty segment sequence).
    pub fn root() -> Self {
        Pointer { segments: Vec::new() }
    }

    /// Parse pointer text (`""` or `/a/b~1c`). Returns `None` when the
    /// text is non-empty but does not start with `/`.
    pub fn parse(text: &str) -> Option<Self> {
        if text.is_empty() {
            return Some(Self::root());
        }
        let rest = text.strip_prefix('/')?;
        let segments = rest.split('/').map(unescape).collect();
        Some(Pointer { segments })
    }

    /// Parse the value of a `$ref` property: a `#`-prefixed fragment like
    /// `#/components/schemas/Pet`. Malformed values (no `#`, or a fragment
    /// that is not a valid pointer) yield `None` so the caller can exclude
    /// them without failing the pass.
    pub fn from_fragment(value: &str) -> Option<Self> {
        let fragment = value.strip_prefix('#')?;
        Self::parse(fragment)
    }

    /// Append one raw (unescaped) segment.
    pub fn append(&self, raw_segment: &str) -> Self {
        let mut segments = self.segments.clone();
        segments.push(raw_segment.to_string());
        Pointer { segments }
    }

    /// Segment-wise prefix test. `/definitions2/X` does not start with
    /// `/definitions`, even though it does lexically.
    pub fn starts_with(&self, prefix: &Pointer) -> bool {
        self.segments.len() >= prefix.segments.len()
            && self.segments[..prefix.segments.len()] == prefix.segments[..]
    }

    /// The unescaped segments.
    pub fn segments(&self) -> &[String] {
        &self.segments
    }
}

impl fmt::Display for Pointer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.segments {
            write!(f, "/{}", escape(segment))?;
        }
        Ok(())
    }
}

/// Escape one pointer segment per RFC 6901.
pub fn escape(segment: &str) -> String {
    segment.replace('~', "~0").replace('/', "~1")
}

/// Unescape one pointer segment per RFC 6901.
pub fn unescape(segment: &str) -> String {
    segment.replace("~1", "/").replace("~0", "~")
}
