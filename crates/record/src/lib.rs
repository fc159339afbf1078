//! # Argeval Record Model
//!
//! Value objects for human/LLM evaluations of argumentative text spans.
//!
//! An [`Evaluation`] holds up to eight optional integer answers; deeper
//! answers exist only when the answer gating them equals 1 (claim gates
//! claim+premise and aspect, claim+premise gates the remaining five).
//! An [`EvaluatedArgument`] ties one evaluation to its proposal, argument
//! id and raw text.
//!
//! ## Example
//!
//! ```rust
//! use argeval_record::{EvalField, Evaluation, RawEvaluation};
//!
//! let raw = RawEvaluation {
//!     claim: "1",
//!     claim_premise: "0",
//!     aspect: "1",
//!     premise_validation: "",
//!     coherence: "",
//!     consistence: "",
//!     persuasion: "",
//!     emotional_ethic: "",
//! };
//! let evaluation = Evaluation::parse(raw).unwrap();
//! assert_eq!(evaluation.get_field(EvalField::Aspect), Some(1));
//! assert_eq!(evaluation.get_field(EvalField::Persuasion), None);
//! ```

mod error;
mod field;
mod types;

pub use error::{RecordError, Result};
pub use field::EvalField;
pub use types::{
    parse_value, render_value, EvaluatedArgument, Evaluation, RawEvaluation, ABSENT_MARKER,
};
