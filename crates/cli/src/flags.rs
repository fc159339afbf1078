use argeval_record::EvalField;
use clap::ValueEnum;
use std::fmt;

/// Clap-facing mirror of [`EvalField`]; lets `--fields` validate names at
/// parse time with the same snake_case wire names the export header uses.
#[derive(Copy, Clone, ValueEnum)]
#[value(rename_all = "snake_case")]
pub(crate) enum FieldFlag {
    Claim,
    ClaimPremise,
    Aspect,
    PremiseValidation,
    Coherence,
    Consistence,
    Persuasion,
    EmotionalEthic,
}

impl FieldFlag {
    pub(crate) const ALL: [FieldFlag; 8] = [
        FieldFlag::Claim,
        FieldFlag::ClaimPremise,
        FieldFlag::Aspect,
        FieldFlag::PremiseValidation,
        FieldFlag::Coherence,
        FieldFlag::Consistence,
        FieldFlag::Persuasion,
        FieldFlag::EmotionalEthic,
    ];

    pub(crate) const fn as_domain(self) -> EvalField {
        match self {
            FieldFlag::Claim => EvalField::Claim,
            FieldFlag::ClaimPremise => EvalField::ClaimPremise,
            FieldFlag::Aspect => EvalField::Aspect,
            FieldFlag::PremiseValidation => EvalField::PremiseValidation,
            FieldFlag::Coherence => EvalField::Coherence,
            FieldFlag::Consistence => EvalField::Consistence,
            FieldFlag::Persuasion => EvalField::Persuasion,
            FieldFlag::EmotionalEthic => EvalField::EmotionalEthic,
        }
    }
}

impl fmt::Display for FieldFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_domain().as_str())
    }
}
