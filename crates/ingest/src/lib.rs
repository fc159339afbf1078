//! # Argeval Ingest
//!
//! Tab-delimited annotation reading and corpus classification.
//!
//! ## Pipeline
//!
//! ```text
//! Annotation file (TSV, header row)
//!     │
//!     ├──> ArgumentReader (schema-resolved columns)
//!     │      └─> EvaluatedArgument rows (non-argument tags skipped)
//!     │
//!     └──> Classification
//!            ├─> classify / classify_with_aspect        (two-pass)
//!            │     complete corpus, then completed filter:
//!            │     p + min(p, q) per proposal
//!            └─> classify_opt / classify_with_aspect_opt (one-pass)
//!                  contiguous groups, symmetric balancing:
//!                  2 * min(p, q) per proposal
//! ```
//!
//! The two balancing semantics intentionally diverge when positives
//! outnumber negatives; both are first-class operations.

mod classify;
mod error;
mod reader;

pub use classify::{
    build_corpus, classify, classify_opt, classify_with_aspect, classify_with_aspect_opt,
};
pub use error::{IngestError, Result};
pub use reader::{ArgumentReader, TableSchema};
