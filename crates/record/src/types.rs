use crate::error::{RecordError, Result};
use crate::field::EvalField;
use serde::{Deserialize, Serialize};

/// Literal placeholder for absent field values in every textual rendering.
///
/// This marker is observable output: exported tables carry it verbatim and
/// re-reading an export maps it back to an absent value.
pub const ABSENT_MARKER: &str = "None";

/// Raw text cells for the eight evaluation questions, as read from one
/// source row. Borrowed; only [`Evaluation::parse`] consumes it.
#[derive(Debug, Clone, Copy)]
pub struct RawEvaluation<'a> {
    pub claim: &'a str,
    pub claim_premise: &'a str,
    pub aspect: &'a str,
    pub premise_validation: &'a str,
    pub coherence: &'a str,
    pub consistence: &'a str,
    pub persuasion: &'a str,
    pub emotional_ethic: &'a str,
}

/// One completed evaluation of an argumentative span.
///
/// Deeper fields are populated only when the field gating them equals 1:
/// `claim_premise` and `aspect` require `claim == 1`; the remaining five
/// require `claim_premise == 1`. Fields not reached by gating are absent,
/// never zero.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub claim: Option<i32>,
    pub claim_premise: Option<i32>,
    pub aspect: Option<i32>,
    pub premise_validation: Option<i32>,
    pub coherence: Option<i32>,
    pub consistence: Option<i32>,
    pub persuasion: Option<i32>,
    pub emotional_ethic: Option<i32>,
}

fn parse_cell(field: EvalField, value: &str) -> Result<i32> {
    value
        .trim()
        .parse::<i32>()
        .map_err(|_| RecordError::invalid_field(field.as_str(), value))
}

impl Evaluation {
    /// Parse the raw cells, applying the gating rules.
    ///
    /// Cells behind a closed gate are never inspected, so garbage in an
    /// ungated column only fails once the gate opens.
    pub fn parse(raw: RawEvaluation<'_>) -> Result<Self> {
        let mut evaluation = Self {
            claim: Some(parse_cell(EvalField::Claim, raw.claim)?),
            ..Self::default()
        };
        if evaluation.claim == Some(1) {
            evaluation.claim_premise = Some(parse_cell(EvalField::ClaimPremise, raw.claim_premise)?);
            evaluation.aspect = Some(parse_cell(EvalField::Aspect, raw.aspect)?);
            if evaluation.claim_premise == Some(1) {
                evaluation.premise_validation =
                    Some(parse_cell(EvalField::PremiseValidation, raw.premise_validation)?);
                evaluation.coherence = Some(parse_cell(EvalField::Coherence, raw.coherence)?);
                evaluation.consistence = Some(parse_cell(EvalField::Consistence, raw.consistence)?);
                evaluation.persuasion = Some(parse_cell(EvalField::Persuasion, raw.persuasion)?);
                evaluation.emotional_ethic =
                    Some(parse_cell(EvalField::EmotionalEthic, raw.emotional_ethic)?);
            }
        }
        Ok(evaluation)
    }

    /// Total field accessor: absent values come back as `None`, never an error
    #[must_use]
    pub const fn get_field(&self, field: EvalField) -> Option<i32> {
        match field {
            EvalField::Claim => self.claim,
            EvalField::ClaimPremise => self.claim_premise,
            EvalField::Aspect => self.aspect,
            EvalField::PremiseValidation => self.premise_validation,
            EvalField::Coherence => self.coherence,
            EvalField::Consistence => self.consistence,
            EvalField::Persuasion => self.persuasion,
            EvalField::EmotionalEthic => self.emotional_ethic,
        }
    }

    /// Whether this record satisfies the claim+premise gate
    #[must_use]
    pub fn is_argument(&self) -> bool {
        self.claim_premise == Some(1)
    }

    /// Verbose single-line rendering of all eight fields
    #[must_use]
    pub fn format(&self) -> String {
        EvalField::ALL
            .iter()
            .map(|&field| format!("{}: {}", field.label(), render_value(self.get_field(field))))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// Tab-joined rendering of a caller-specified ordered field subset
    #[must_use]
    pub fn format_fields(&self, fields: &[EvalField]) -> String {
        fields
            .iter()
            .map(|&field| render_value(self.get_field(field)))
            .collect::<Vec<_>>()
            .join("\t")
    }
}

/// Render a field value for delimited and verbose output
#[must_use]
pub fn render_value(value: Option<i32>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => ABSENT_MARKER.to_string(),
    }
}

/// Parse a rendered field value back; the absent marker maps to `None`
#[must_use]
pub fn parse_value(text: &str) -> Option<i32> {
    if text == ABSENT_MARKER {
        None
    } else {
        text.trim().parse().ok()
    }
}

/// One argumentative span together with its evaluation.
///
/// Created once when a tagged source row is read; immutable thereafter.
/// Argument ids are only meaningful within their proposal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluatedArgument {
    pub proposal_id: u32,
    pub argument_id: u32,
    pub text: String,
    pub evaluation: Evaluation,
}

impl EvaluatedArgument {
    /// Create a new evaluated argument
    #[must_use]
    pub const fn new(proposal_id: u32, argument_id: u32, text: String, evaluation: Evaluation) -> Self {
        Self {
            proposal_id,
            argument_id,
            text,
            evaluation,
        }
    }

    #[must_use]
    pub const fn evaluation(&self) -> &Evaluation {
        &self.evaluation
    }

    /// Indented multi-line block used by the verbose corpus rendering
    #[must_use]
    pub fn format(&self) -> String {
        format!(
            "\tArgument id: {}\n\tArgument: {}\n\tEvaluation: {}\n\n",
            self.argument_id,
            self.text,
            self.evaluation.format()
        )
    }
}
