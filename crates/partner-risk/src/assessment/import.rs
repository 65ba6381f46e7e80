use std::collections::BTreeMap;
use std::io::Read;
use std::path::Path;

use serde::{Deserialize, Deserializer};

use super::answers::{AnswerSet, AnswerSetError, AnswerShape, AnswerValue, QuestionKey, RawAnswers};

#[derive(Debug, thiserror::Error)]
pub enum AnswerImportError {
    #[error("failed to read answer export: {0}")]
    Io(#[from] std::io::Error),
    #[error("invalid answer CSV data: {0}")]
    Csv(#[from] csv::Error),
    #[error(transparent)]
    Answers(#[from] AnswerSetError),
}

#[derive(Debug, Deserialize)]
struct AnswerRow {
    #[serde(rename = "Question")]
    question: String,
    #[serde(rename = "Answer", default, deserialize_with = "empty_string_as_none")]
    answer: Option<String>,
}

fn empty_string_as_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let opt = Option::<String>::deserialize(deserializer)?;
    Ok(opt.filter(|value| !value.trim().is_empty()))
}

/// Loads a `Question,Answer` CSV export into an [`AnswerSet`].
///
/// Multi-select questions take one row per ticked option. A multi-select question that only
/// appears with blank answers becomes an empty selection rather than an unset one.
pub struct AnswerSetImporter;

impl AnswerSetImporter {
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<AnswerSet, AnswerImportError> {
        let file = std::fs::File::open(path)?;
        Self::from_reader(file)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<AnswerSet, AnswerImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut grouped: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for row in csv_reader.deserialize::<AnswerRow>() {
            let row = row?;
            let answers = grouped.entry(row.question).or_default();
            answers.extend(row.answer);
        }

        let raw: RawAnswers = grouped
            .into_iter()
            .map(|(question, mut answers)| {
                let value = match QuestionKey::from_wire(&question).map(QuestionKey::shape) {
                    Some(AnswerShape::Multiple) => Some(AnswerValue::Multiple(answers)),
                    _ if answers.len() > 1 => Some(AnswerValue::Multiple(answers)),
                    _ => answers.pop().map(AnswerValue::Single),
                };
                (question, value)
            })
            .collect();

        Ok(AnswerSet::from_raw(raw)?)
    }
}
