use crate::sample::take_n_random;
use argeval_record::{EvalField, EvaluatedArgument};
use rand::Rng;
use std::collections::BTreeMap;

/// Ordered mapping from proposal id to the arguments evaluated under it.
///
/// Proposals iterate in ascending id order; within a proposal, insertion
/// order is preserved exactly. A corpus is built once and then only read
/// or used to derive new filtered corpora; the filter operations never
/// mutate their receiver.
#[derive(Debug, Clone, Default)]
pub struct Corpus {
    proposals: BTreeMap<u32, Vec<EvaluatedArgument>>,
}

impl Corpus {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one argument to its proposal's sequence, creating the
    /// sequence if absent. No duplicate detection.
    pub fn append(&mut self, proposal_id: u32, argument: EvaluatedArgument) {
        self.proposals.entry(proposal_id).or_default().push(argument);
    }

    /// Repeated [`Corpus::append`] preserving input order.
    ///
    /// An empty input is a no-op that never materializes the key; filtered
    /// corpora rely on this to leave zero-match proposals absent.
    pub fn append_all(&mut self, proposal_id: u32, arguments: Vec<EvaluatedArgument>) {
        for argument in arguments {
            self.append(proposal_id, argument);
        }
    }

    #[must_use]
    pub fn arguments(&self, proposal_id: u32) -> Option<&[EvaluatedArgument]> {
        self.proposals.get(&proposal_id).map(Vec::as_slice)
    }

    #[must_use]
    pub const fn proposals(&self) -> &BTreeMap<u32, Vec<EvaluatedArgument>> {
        &self.proposals
    }

    #[must_use]
    pub fn proposal_count(&self) -> usize {
        self.proposals.len()
    }

    #[must_use]
    pub fn argument_count(&self) -> usize {
        self.proposals.values().map(Vec::len).sum()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.proposals.is_empty()
    }

    /// New corpus keeping, per proposal, only arguments whose `field`
    /// value is a member of `values`. Absent values never match.
    /// Proposals with zero matches are absent from the result.
    #[must_use]
    pub fn filter_by(&self, field: EvalField, values: &[i32]) -> Corpus {
        let mut filtered = Corpus::new();
        for (&proposal_id, arguments) in &self.proposals {
            let matching: Vec<EvaluatedArgument> = arguments
                .iter()
                .filter(|argument| {
                    argument
                        .evaluation()
                        .get_field(field)
                        .is_some_and(|v| values.contains(&v))
                })
                .cloned()
                .collect();
            filtered.append_all(proposal_id, matching);
        }
        log::debug!(
            "filter_by {field}: {} -> {} arguments",
            self.argument_count(),
            filtered.argument_count()
        );
        filtered
    }

    /// [`Corpus::filter_by`], then per proposal a uniform random sample of
    /// non-arguments (claim_premise != 1) drawn from the ORIGINAL
    /// unfiltered sequence, sized to the match count (capped at the
    /// non-argument population). Yields `p + min(p, q)` arguments for a
    /// proposal with `p` matches and `q` non-arguments.
    #[must_use]
    pub fn filter_by_completed<R: Rng + ?Sized>(
        &self,
        field: EvalField,
        values: &[i32],
        rng: &mut R,
    ) -> Corpus {
        let mut filtered = Corpus::new();
        for (&proposal_id, arguments) in &self.proposals {
            let matching: Vec<EvaluatedArgument> = arguments
                .iter()
                .filter(|argument| {
                    argument
                        .evaluation()
                        .get_field(field)
                        .is_some_and(|v| values.contains(&v))
                })
                .cloned()
                .collect();
            let non_arguments: Vec<&EvaluatedArgument> = arguments
                .iter()
                .filter(|argument| !argument.evaluation().is_argument())
                .collect();
            let completion = take_n_random(rng, &non_arguments, matching.len())
                .into_iter()
                .cloned()
                .collect();
            filtered.append_all(proposal_id, matching);
            filtered.append_all(proposal_id, completion);
        }
        filtered
    }
}
