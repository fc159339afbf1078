use crate::error::Result;
use argeval_corpus::{take_n_random, Corpus};
use argeval_record::{EvalField, EvaluatedArgument};
use rand::Rng;

/// Build the complete unfiltered corpus from a row stream.
pub fn build_corpus<I>(rows: I) -> Result<Corpus>
where
    I: IntoIterator<Item = Result<EvaluatedArgument>>,
{
    let mut corpus = Corpus::new();
    for row in rows {
        let argument = row?;
        corpus.append(argument.proposal_id, argument);
    }
    log::info!(
        "Built corpus: {} arguments across {} proposals",
        corpus.argument_count(),
        corpus.proposal_count()
    );
    Ok(corpus)
}

/// Two-pass classification: build the complete corpus, then complete the
/// claim+premise matches with sampled non-arguments.
///
/// Balancing is asymmetric: positives are always kept whole and negatives
/// are sampled to match them (capped at the negative population), so a
/// proposal with `p` positives and `q` negatives keeps `p + min(p, q)`
/// arguments. Compare [`classify_opt`], whose symmetric balancing keeps
/// `2 * min(p, q)`; the divergence when `p > q` is intentional and the two
/// operations stay distinct.
pub fn classify<I, R>(rows: I, rng: &mut R) -> Result<Corpus>
where
    I: IntoIterator<Item = Result<EvaluatedArgument>>,
    R: Rng + ?Sized,
{
    let corpus = build_corpus(rows)?;
    Ok(corpus.filter_by_completed(EvalField::ClaimPremise, &[1], rng))
}

/// Two-pass classification restricted to aspect-related arguments:
/// the claim+premise completion pass chained with an aspect completion
/// pass over its result.
pub fn classify_with_aspect<I, R>(rows: I, rng: &mut R) -> Result<Corpus>
where
    I: IntoIterator<Item = Result<EvaluatedArgument>>,
    R: Rng + ?Sized,
{
    let corpus = build_corpus(rows)?;
    Ok(corpus
        .filter_by_completed(EvalField::ClaimPremise, &[1], rng)
        .filter_by_completed(EvalField::Aspect, &[1], rng))
}

/// Single-pass classification with symmetric balancing.
///
/// Streams rows grouped by contiguous proposal id, bucketing positives
/// (`claim_premise == 1`) against negatives (`claim_premise != 1`). At
/// each group boundary the larger bucket is downsampled to the smaller
/// bucket's size, keeping `2 * min(p, q)` arguments per group. See
/// [`classify`] for the asymmetric two-pass counterpart.
///
/// Grouping is positional: a proposal id reappearing after a different id
/// starts a new group, balanced independently of the earlier one (both
/// groups land under the same corpus key).
pub fn classify_opt<I, R>(rows: I, rng: &mut R) -> Result<Corpus>
where
    I: IntoIterator<Item = Result<EvaluatedArgument>>,
    R: Rng + ?Sized,
{
    classify_one_pass(rows, rng, |argument| {
        Some(argument.evaluation().is_argument())
    })
}

/// Single-pass aspect variant: positives additionally require
/// `aspect == 1`; rows with `claim_premise == 1` but `aspect != 1` fall in
/// neither bucket and are dropped (reference behavior, preserved).
pub fn classify_with_aspect_opt<I, R>(rows: I, rng: &mut R) -> Result<Corpus>
where
    I: IntoIterator<Item = Result<EvaluatedArgument>>,
    R: Rng + ?Sized,
{
    classify_one_pass(rows, rng, |argument| {
        let evaluation = argument.evaluation();
        if evaluation.is_argument() {
            (evaluation.get_field(EvalField::Aspect) == Some(1)).then_some(true)
        } else {
            Some(false)
        }
    })
}

/// Shared one-pass group loop. `bucket` assigns each row to the positive
/// (`Some(true)`) or negative (`Some(false)`) bucket, or drops it.
fn classify_one_pass<I, R, F>(rows: I, rng: &mut R, bucket: F) -> Result<Corpus>
where
    I: IntoIterator<Item = Result<EvaluatedArgument>>,
    R: Rng + ?Sized,
    F: Fn(&EvaluatedArgument) -> Option<bool>,
{
    let mut corpus = Corpus::new();
    let mut active: Option<u32> = None;
    let mut positives: Vec<EvaluatedArgument> = Vec::new();
    let mut negatives: Vec<EvaluatedArgument> = Vec::new();
    let mut groups = 0usize;

    for row in rows {
        let argument = row?;
        if active != Some(argument.proposal_id) {
            if let Some(proposal_id) = active {
                flush_group(&mut corpus, proposal_id, &mut positives, &mut negatives, rng);
                groups += 1;
            }
            active = Some(argument.proposal_id);
        }
        match bucket(&argument) {
            Some(true) => positives.push(argument),
            Some(false) => negatives.push(argument),
            None => {}
        }
    }
    if let Some(proposal_id) = active {
        flush_group(&mut corpus, proposal_id, &mut positives, &mut negatives, rng);
        groups += 1;
    }

    log::info!(
        "Balanced {groups} proposal groups into {} arguments",
        corpus.argument_count()
    );
    Ok(corpus)
}

/// Symmetric balancing: downsample the larger bucket to the smaller
/// bucket's size, then commit both in positive-then-negative order.
fn flush_group<R: Rng + ?Sized>(
    corpus: &mut Corpus,
    proposal_id: u32,
    positives: &mut Vec<EvaluatedArgument>,
    negatives: &mut Vec<EvaluatedArgument>,
    rng: &mut R,
) {
    let mut positives = std::mem::take(positives);
    let mut negatives = std::mem::take(negatives);
    if positives.len() < negatives.len() {
        negatives = take_n_random(rng, &negatives, positives.len());
    } else if negatives.len() < positives.len() {
        positives = take_n_random(rng, &positives, negatives.len());
    }
    corpus.append_all(proposal_id, positives);
    corpus.append_all(proposal_id, negatives);
}
