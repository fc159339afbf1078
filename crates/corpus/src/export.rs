use crate::corpus::Corpus;
use crate::error::Result;
use argeval_record::EvalField;
use std::path::Path;

/// Verbose nested rendering: one `Proposal id:` header per proposal, each
/// argument as its indented block.
#[must_use]
pub fn format_corpus(corpus: &Corpus) -> String {
    let mut out = String::new();
    for (proposal_id, arguments) in corpus.proposals() {
        out.push_str(&format!("Proposal id: {proposal_id}\n\n"));
        for argument in arguments {
            out.push_str(&argument.format());
        }
    }
    out
}

/// Delimited table: header row, then one row per argument.
///
/// Proposals in stable map order, arguments in insertion order, absent
/// field values as the literal `None` marker.
#[must_use]
pub fn to_tsv(corpus: &Corpus, fields: &[EvalField]) -> String {
    let mut out = String::from("proposal_id\targument_id\targument");
    for field in fields {
        out.push('\t');
        out.push_str(field.as_str());
    }
    out.push('\n');
    for (proposal_id, arguments) in corpus.proposals() {
        for argument in arguments {
            out.push_str(&format!(
                "{proposal_id}\t{}\t{}",
                argument.argument_id, argument.text
            ));
            if !fields.is_empty() {
                out.push('\t');
                out.push_str(&argument.evaluation().format_fields(fields));
            }
            out.push('\n');
        }
    }
    out
}

/// Write the delimited table to `path`, creating parent directories.
pub fn write_tsv(corpus: &Corpus, path: impl AsRef<Path>, fields: &[EvalField]) -> Result<()> {
    let path = path.as_ref();
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(path, to_tsv(corpus, fields))?;
    log::info!(
        "Exported {} arguments across {} proposals to {}",
        corpus.argument_count(),
        corpus.proposal_count(),
        path.display()
    );
    Ok(())
}
