//! Reference resolution and missing-definition detection
//!
//! The engine makes one full pass over a document collecting every
//! reference use-site (explicit `$ref`s and the references implied by
//! polymorphism discriminators), then compares the used set against what
//! each component section actually declares and reports every dangling
//! use-site at its exact location.
//!
//! Extraction state is a value ([`UsedReferences`]) built fresh per
//! document and handed to reporting explicitly; nothing survives between
//! analyses.

mod extract;
mod missing;

pub use extract::{extract_used_references, UsedReferences};
pub use missing::{declared_pointers, report_missing};
