//! # Argeval Corpus Store
//!
//! In-memory corpus of evaluated arguments grouped by proposal, with
//! field-based filtering, balanced completion and delimited export.
//!
//! ## Pipeline
//!
//! ```text
//! EvaluatedArgument stream
//!     │
//!     ├──> Corpus (BTreeMap: proposal id -> ordered arguments)
//!     │      ├─> filter_by(field, values)
//!     │      └─> filter_by_completed(field, values, rng)
//!     │             └─> take_n_random completion sampling
//!     │
//!     └──> Export
//!            ├─> verbose nested rendering
//!            └─> TSV table (absent fields as "None")
//! ```
//!
//! Filtering always derives a new corpus; sampling is the only
//! nondeterministic operation and always runs on an injected `rand::Rng`.

mod corpus;
mod error;
mod export;
mod sample;

pub use corpus::Corpus;
pub use error::{CorpusError, Result};
pub use export::{format_corpus, to_tsv, write_tsv};
pub use sample::take_n_random;
