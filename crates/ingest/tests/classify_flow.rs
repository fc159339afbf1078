use argeval_ingest::{
    build_corpus, classify, classify_opt, classify_with_aspect, classify_with_aspect_opt,
    ArgumentReader, IngestError, TableSchema,
};
use argeval_record::{EvalField, EvaluatedArgument, Evaluation, RawEvaluation};
use rand::rngs::StdRng;
use rand::SeedableRng;
use tempfile::TempDir;

type Row = Result<EvaluatedArgument, IngestError>;

fn row(proposal_id: u32, argument_id: u32, claim_premise: &str, aspect: &str) -> Row {
    let evaluation = Evaluation::parse(RawEvaluation {
        claim: "1",
        claim_premise,
        aspect,
        premise_validation: "1",
        coherence: "2",
        consistence: "1",
        persuasion: "2",
        emotional_ethic: "0",
    })
    .unwrap();
    Ok(EvaluatedArgument::new(
        proposal_id,
        argument_id,
        format!("span {proposal_id}/{argument_id}"),
        evaluation,
    ))
}

fn positive(proposal_id: u32, argument_id: u32) -> Row {
    row(proposal_id, argument_id, "1", "1")
}

fn negative(proposal_id: u32, argument_id: u32) -> Row {
    row(proposal_id, argument_id, "0", "0")
}

#[test]
fn one_pass_and_two_pass_agree_when_negatives_dominate() {
    // p = 2, q = 4: both semantics keep 2 + min(2, 4) = 2 * min(2, 4) = 4
    let rows = || {
        vec![
            positive(1, 1),
            positive(1, 2),
            negative(1, 3),
            negative(1, 4),
            negative(1, 5),
            negative(1, 6),
        ]
    };
    let two_pass = classify(rows(), &mut StdRng::seed_from_u64(1)).unwrap();
    let one_pass = classify_opt(rows(), &mut StdRng::seed_from_u64(2)).unwrap();
    assert_eq!(two_pass.arguments(1).unwrap().len(), 4);
    assert_eq!(one_pass.arguments(1).unwrap().len(), 4);
}

#[test]
fn balancing_semantics_diverge_when_positives_dominate() {
    // p = 5, q = 2: two-pass keeps 5 + 2 = 7, one-pass keeps 2 * 2 = 4
    let rows = || {
        vec![
            positive(1, 1),
            positive(1, 2),
            positive(1, 3),
            positive(1, 4),
            positive(1, 5),
            negative(1, 6),
            negative(1, 7),
        ]
    };
    let two_pass = classify(rows(), &mut StdRng::seed_from_u64(3)).unwrap();
    let one_pass = classify_opt(rows(), &mut StdRng::seed_from_u64(4)).unwrap();
    assert_eq!(two_pass.arguments(1).unwrap().len(), 7);
    assert_eq!(one_pass.arguments(1).unwrap().len(), 4);
}

#[test]
fn three_positives_five_negatives_complete_to_six() {
    let rows = vec![
        positive(1, 1),
        positive(1, 2),
        positive(1, 3),
        negative(1, 4),
        negative(1, 5),
        negative(1, 6),
        negative(1, 7),
        negative(1, 8),
    ];
    let corpus = build_corpus(rows).unwrap();
    let filtered =
        corpus.filter_by_completed(EvalField::ClaimPremise, &[1], &mut StdRng::seed_from_u64(5));
    let kept = filtered.arguments(1).unwrap();
    assert_eq!(kept.len(), 6);
    assert_eq!(kept.iter().filter(|a| a.evaluation().is_argument()).count(), 3);
}

#[test]
fn one_pass_balances_every_group_including_the_last() {
    let rows = vec![
        positive(1, 1),
        negative(1, 2),
        negative(1, 3),
        // final group, never followed by a boundary row
        positive(2, 1),
        positive(2, 2),
        negative(2, 3),
    ];
    let corpus = classify_opt(rows, &mut StdRng::seed_from_u64(6)).unwrap();
    assert_eq!(corpus.arguments(1).unwrap().len(), 2);
    assert_eq!(corpus.arguments(2).unwrap().len(), 2);
}

#[test]
fn non_contiguous_proposal_fragments_into_two_groups() {
    // proposal 1 reappears after proposal 2: each fragment balances on its
    // own (1+1 and 2+2), merged under the same corpus key
    let rows = vec![
        positive(1, 1),
        negative(1, 2),
        positive(2, 1),
        negative(2, 2),
        positive(1, 3),
        positive(1, 4),
        negative(1, 5),
        negative(1, 6),
    ];
    let corpus = classify_opt(rows, &mut StdRng::seed_from_u64(7)).unwrap();
    assert_eq!(corpus.arguments(1).unwrap().len(), 6);
    assert_eq!(corpus.arguments(2).unwrap().len(), 2);
}

#[test]
fn one_pass_aspect_variant_drops_unrelated_arguments() {
    // claim_premise == 1 but aspect != 1 lands in neither bucket
    let rows = vec![
        positive(1, 1),
        row(1, 2, "1", "0"),
        row(1, 3, "1", "0"),
        negative(1, 4),
        negative(1, 5),
    ];
    let corpus = classify_with_aspect_opt(rows, &mut StdRng::seed_from_u64(8)).unwrap();
    // 1 aspect positive vs 2 negatives: symmetric balance keeps 1 + 1
    let kept = corpus.arguments(1).unwrap();
    assert_eq!(kept.len(), 2);
    assert!(kept.iter().all(|a| {
        a.evaluation().get_field(EvalField::Aspect) == Some(1)
            || !a.evaluation().is_argument()
    }));
}

#[test]
fn two_pass_aspect_variant_chains_completion_passes() {
    let rows = vec![
        positive(1, 1),
        positive(1, 2),
        row(1, 3, "1", "0"),
        negative(1, 4),
        negative(1, 5),
        negative(1, 6),
    ];
    let corpus = classify_with_aspect(rows, &mut StdRng::seed_from_u64(9)).unwrap();
    // first pass: 3 positives + 3 sampled negatives; second pass: 2 aspect
    // matches (sampled negatives have aspect 0) + 2 of its non-arguments
    assert_eq!(corpus.arguments(1).unwrap().len(), 4);
}

#[test]
fn empty_input_yields_an_empty_corpus() {
    let corpus = classify_opt(Vec::new(), &mut StdRng::seed_from_u64(10)).unwrap();
    assert!(corpus.is_empty());
}

#[test]
fn row_errors_propagate_without_a_partial_corpus() {
    let rows = vec![
        positive(1, 1),
        Err(IngestError::InvalidId {
            column: "proposal id".to_string(),
            value: "P-9".to_string(),
        }),
    ];
    assert!(classify(rows, &mut StdRng::seed_from_u64(11)).is_err());
}

#[test]
fn reference_schema_file_reads_end_to_end() {
    let schema = TableSchema::default();
    let header = [
        "Tipo elemento",
        "Id propuesta",
        "Id elemento",
        "Valor",
        "Claim?",
        "Claim+premise? WHY?",
        "Relacionado con aspecto?",
        "Validación premisa(s)",
        "Coherencia lógica p->c",
        "Consistencia p1 <> p2",
        "Persuasión",
        "Apelación emocional/ética (pathos/ethos)",
    ]
    .join("\t");
    let body = "\
Propuesta\t1\t0\tproposal text\t\t\t\t\t\t\t\t
Argumento\t1\t1\ta strong span\t1\t1\t1\t2\t3\t1\t2\t0
Argumento\t1\t2\ta weak span\t0\t\t\t\t\t\t\t
Argumento\t2\t1\tanother span\t1\t0\t1\t\t\t\t\t
";
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join("evaluation.tsv");
    std::fs::write(&path, format!("{header}\n{body}")).unwrap();

    let reader = ArgumentReader::from_path(&path, &schema).unwrap();
    let corpus = build_corpus(reader).unwrap();
    assert_eq!(corpus.proposal_count(), 2);
    assert_eq!(corpus.argument_count(), 3);
    let first = &corpus.arguments(1).unwrap()[0];
    assert_eq!(first.text, "a strong span");
    assert_eq!(first.evaluation().get_field(EvalField::Coherence), Some(3));
}
