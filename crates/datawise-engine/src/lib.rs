//! DataWise Engine crate - template-driven question answering.
//!
//! Classifies a free-text question against a fixed, ordered set of
//! templates, extracts the captured filter values, and runs the matching
//! aggregation over a [`datawise_store::SalesStore`].

pub mod aggregate;
pub mod engine;
pub mod templates;

pub use engine::QuestionEngine;
pub use templates::{ParsedQuestion, QuestionKind, TemplateSet};
