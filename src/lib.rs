//! OpenAPI Structural Linter
//!
//! Analyzes parsed OpenAPI v2/v3 documents and reports structural
//! defects: dangling references, undocumented responses, missing tags,
//! invalid contact emails and URLs, and operation-id naming mismatches.
//!
//! ## Architecture
//!
//! ```text
//! serde value ──> Node tree (per-node JSON Pointer paths)
//!                    │
//!                    ├── refs::extract   one whole-document pass over
//!                    │                   $refs + discriminator-implied
//!                    │                   references
//!                    ├── refs::missing   used − declared, per component
//!                    │                   section, one issue per use-site
//!                    └── checks::*       single-node peer checks
//! ```
//!
//! The reference engine keeps no state across documents: extraction
//! returns a value that reporting consumes, so analyzing the same tree
//! twice yields the same issues.

pub mod analyzer;
pub mod checks;
pub mod config;
pub mod dialect;
pub mod error;
pub mod node;
pub mod pointer;
pub mod refs;

pub use analyzer::{Analyzer, Document};
pub use checks::{Check, Issue};
pub use config::{LintConfig, OutputFormat};
pub use dialect::Dialect;
pub use error::{LintError, Result};
pub use node::Node;
pub use pointer::Pointer;
