use crate::error::{IngestError, Result};
use argeval_record::{EvaluatedArgument, Evaluation, RawEvaluation};
use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

/// Names of the required columns in a source annotation table, plus the
/// record-type marker identifying argument rows.
#[derive(Debug, Clone)]
pub struct TableSchema {
    /// Record-type tag column
    pub record_type: String,
    /// Tag value marking consumable rows; everything else is skipped
    pub argument_marker: String,
    /// Proposal id column
    pub proposal_id: String,
    /// Per-proposal record id column
    pub record_id: String,
    /// Raw text payload column
    pub text: String,
    /// The eight evaluation question columns, gating order
    pub questions: [String; 8],
}

impl Default for TableSchema {
    /// Column names of the reference annotation export (Spanish headers;
    /// the claim+premise header normalized to a single line).
    fn default() -> Self {
        Self {
            record_type: "Tipo elemento".to_string(),
            argument_marker: "Argumento".to_string(),
            proposal_id: "Id propuesta".to_string(),
            record_id: "Id elemento".to_string(),
            text: "Valor".to_string(),
            questions: [
                "Claim?".to_string(),
                "Claim+premise? WHY?".to_string(),
                "Relacionado con aspecto?".to_string(),
                "Validación premisa(s)".to_string(),
                "Coherencia lógica p->c".to_string(),
                "Consistencia p1 <> p2".to_string(),
                "Persuasión".to_string(),
                "Apelación emocional/ética (pathos/ethos)".to_string(),
            ],
        }
    }
}

/// Streaming reader over a tab-delimited annotation file.
///
/// The header row is resolved against the schema up front; a missing
/// required column is fatal before any row is produced. Iteration yields
/// only rows tagged with the argument marker, already parsed into
/// [`EvaluatedArgument`] records.
#[derive(Debug)]
pub struct ArgumentReader<R: BufRead> {
    lines: Lines<R>,
    marker: String,
    type_col: usize,
    proposal_col: usize,
    record_col: usize,
    text_col: usize,
    question_cols: [usize; 8],
    skipped: usize,
}

impl ArgumentReader<BufReader<File>> {
    /// Open a source file with the given schema
    pub fn from_path(path: impl AsRef<Path>, schema: &TableSchema) -> Result<Self> {
        let file = File::open(path.as_ref())?;
        Self::from_reader(BufReader::new(file), schema)
    }
}

impl<R: BufRead> ArgumentReader<R> {
    /// Wrap any buffered reader; consumes and validates the header row
    pub fn from_reader(reader: R, schema: &TableSchema) -> Result<Self> {
        let mut lines = reader.lines();
        let header = lines
            .next()
            .transpose()?
            .ok_or_else(|| IngestError::MissingColumn(schema.record_type.clone()))?;
        let columns: Vec<&str> = header.trim_end_matches('\r').split('\t').collect();

        let resolve = |name: &str| -> Result<usize> {
            columns
                .iter()
                .position(|c| *c == name)
                .ok_or_else(|| IngestError::MissingColumn(name.to_string()))
        };

        let mut question_cols = [0usize; 8];
        for (slot, name) in question_cols.iter_mut().zip(&schema.questions) {
            *slot = resolve(name)?;
        }

        Ok(Self {
            lines,
            marker: schema.argument_marker.clone(),
            type_col: resolve(&schema.record_type)?,
            proposal_col: resolve(&schema.proposal_id)?,
            record_col: resolve(&schema.record_id)?,
            text_col: resolve(&schema.text)?,
            question_cols,
            skipped: 0,
        })
    }

    /// Rows skipped so far because their tag was not the argument marker
    #[must_use]
    pub const fn skipped_rows(&self) -> usize {
        self.skipped
    }

    fn parse_row(&self, line: &str) -> Result<EvaluatedArgument> {
        let cells: Vec<&str> = line.split('\t').collect();
        let cell = |i: usize| cells.get(i).copied().unwrap_or("");

        let proposal_id = parse_id(cell(self.proposal_col), "proposal id")?;
        let argument_id = parse_id(cell(self.record_col), "record id")?;
        let evaluation = Evaluation::parse(RawEvaluation {
            claim: cell(self.question_cols[0]),
            claim_premise: cell(self.question_cols[1]),
            aspect: cell(self.question_cols[2]),
            premise_validation: cell(self.question_cols[3]),
            coherence: cell(self.question_cols[4]),
            consistence: cell(self.question_cols[5]),
            persuasion: cell(self.question_cols[6]),
            emotional_ethic: cell(self.question_cols[7]),
        })?;
        Ok(EvaluatedArgument::new(
            proposal_id,
            argument_id,
            cell(self.text_col).to_string(),
            evaluation,
        ))
    }
}

fn parse_id(value: &str, column: &str) -> Result<u32> {
    value.trim().parse().map_err(|_| IngestError::InvalidId {
        column: column.to_string(),
        value: value.to_string(),
    })
}

impl<R: BufRead> Iterator for ArgumentReader<R> {
    type Item = Result<EvaluatedArgument>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let line = match self.lines.next()? {
                Ok(line) => line,
                Err(e) => return Some(Err(e.into())),
            };
            let line = line.trim_end_matches('\r');
            if line.is_empty() {
                continue;
            }
            let tag = line.split('\t').nth(self.type_col).unwrap_or("");
            if tag != self.marker {
                self.skipped += 1;
                log::debug!("Skipping row tagged '{tag}'");
                continue;
            }
            return Some(self.parse_row(line));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use argeval_record::EvalField;
    use pretty_assertions::assert_eq;
    use std::io::Cursor;

    fn compact_schema() -> TableSchema {
        TableSchema {
            record_type: "kind".into(),
            argument_marker: "Argumento".into(),
            proposal_id: "proposal".into(),
            record_id: "id".into(),
            text: "text".into(),
            questions: [
                "q1".into(),
                "q2".into(),
                "q3".into(),
                "q4".into(),
                "q5".into(),
                "q6".into(),
                "q7".into(),
                "q8".into(),
            ],
        }
    }

    const HEADER: &str = "kind\tproposal\tid\ttext\tq1\tq2\tq3\tq4\tq5\tq6\tq7\tq8\n";

    #[test]
    fn reads_argument_rows_and_skips_the_rest() {
        let data = format!(
            "{HEADER}Argumento\t1\t1\tfirst span\t1\t1\t1\t2\t2\t1\t3\t0\n\
             Comentario\t1\t2\tnoise\t\t\t\t\t\t\t\t\n\
             Argumento\t1\t3\tsecond span\t0\t\t\t\t\t\t\t\n"
        );
        let mut reader = ArgumentReader::from_reader(Cursor::new(data), &compact_schema()).unwrap();

        let first = reader.next().unwrap().unwrap();
        assert_eq!(first.proposal_id, 1);
        assert_eq!(first.argument_id, 1);
        assert_eq!(first.text, "first span");
        assert_eq!(first.evaluation().get_field(EvalField::Persuasion), Some(3));

        let second = reader.next().unwrap().unwrap();
        assert_eq!(second.argument_id, 3);
        assert_eq!(second.evaluation().get_field(EvalField::ClaimPremise), None);

        assert!(reader.next().is_none());
        assert_eq!(reader.skipped_rows(), 1);
    }

    #[test]
    fn missing_column_is_fatal_before_any_row() {
        let data = "kind\tproposal\tid\ttext\tq1\n";
        let err = ArgumentReader::from_reader(Cursor::new(data), &compact_schema()).unwrap_err();
        assert!(matches!(err, IngestError::MissingColumn(name) if name == "q2"));
    }

    #[test]
    fn malformed_numeric_cell_surfaces_a_record_error() {
        let data = format!("{HEADER}Argumento\t1\t1\tspan\tmaybe\t\t\t\t\t\t\t\n");
        let mut reader = ArgumentReader::from_reader(Cursor::new(data), &compact_schema()).unwrap();
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, IngestError::RecordError(_)));
    }

    #[test]
    fn malformed_id_cell_is_reported_with_its_column() {
        let data = format!("{HEADER}Argumento\tP-1\t1\tspan\t0\t\t\t\t\t\t\t\n");
        let mut reader = ArgumentReader::from_reader(Cursor::new(data), &compact_schema()).unwrap();
        let err = reader.next().unwrap().unwrap_err();
        assert!(matches!(err, IngestError::InvalidId { column, .. } if column == "proposal id"));
    }

    #[test]
    fn crlf_lines_are_tolerated() {
        let data = format!("{}\r\nArgumento\t4\t1\tspan\t0\t\t\t\t\t\t\t\r\n", HEADER.trim_end());
        let mut reader = ArgumentReader::from_reader(Cursor::new(data), &compact_schema()).unwrap();
        let argument = reader.next().unwrap().unwrap();
        assert_eq!(argument.proposal_id, 4);
    }
}
