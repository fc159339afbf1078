use crate::error::RecordError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Closed schema of evaluation fields.
///
/// Field access is always by enumerated tag; free-form names only enter
/// through [`EvalField::from_str`], which rejects anything outside the
/// schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvalField {
    /// Does the span state a claim?
    Claim,
    /// Does the span pair the claim with a premise?
    ClaimPremise,
    /// Is the claim related to the proposal's aspect?
    Aspect,
    /// Are the premises valid?
    PremiseValidation,
    /// Logical coherence premise -> conclusion
    Coherence,
    /// Consistency between premises
    Consistence,
    /// Persuasion strength
    Persuasion,
    /// Emotional/ethical appeal (pathos/ethos)
    EmotionalEthic,
}

impl EvalField {
    /// All fields in declaration order (gating fields first)
    pub const ALL: [EvalField; 8] = [
        Self::Claim,
        Self::ClaimPremise,
        Self::Aspect,
        Self::PremiseValidation,
        Self::Coherence,
        Self::Consistence,
        Self::Persuasion,
        Self::EmotionalEthic,
    ];

    /// Wire name used in delimited headers and CLI arguments
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Claim => "claim",
            Self::ClaimPremise => "claim_premise",
            Self::Aspect => "aspect",
            Self::PremiseValidation => "premise_validation",
            Self::Coherence => "coherence",
            Self::Consistence => "consistence",
            Self::Persuasion => "persuasion",
            Self::EmotionalEthic => "emotional_ethic",
        }
    }

    /// Human-readable label used by the verbose renderings
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Claim => "Claim",
            Self::ClaimPremise => "Claim+premise",
            Self::Aspect => "Aspect related",
            Self::PremiseValidation => "Premise validation",
            Self::Coherence => "Coherence",
            Self::Consistence => "Consistence",
            Self::Persuasion => "Persuasion",
            Self::EmotionalEthic => "Emotional/ethic",
        }
    }
}

impl fmt::Display for EvalField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EvalField {
    type Err = RecordError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|field| field.as_str() == s)
            .ok_or_else(|| RecordError::unknown_field(s))
    }
}
