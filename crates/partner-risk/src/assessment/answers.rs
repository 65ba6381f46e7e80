use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize, Serializer};
use serde_json::Value;

/// Questionnaire answers keyed by wire name, `None` meaning unset.
pub type RawAnswers = BTreeMap<String, Option<AnswerValue>>;

/// Untyped JSON object as posted by a form layer. Fields the questionnaire does not know may hold
/// any JSON value.
pub type JsonAnswers = serde_json::Map<String, Value>;

/// Questions understood by the scoring rules.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum QuestionKey {
    TaxCompliance,
    Investigations,
    Sanctions,
    CriminalHistory,
    PepStatus,
    CreditCardDebt,
    EmploymentStability,
    IncomeConsistency,
    Bankruptcy,
    TaxDebt,
    LifestyleConsistency,
    CashBusiness,
    Offshore,
    Cryptocurrency,
    GiftsReceived,
    Documentation,
    QuestionableAssociates,
    InformationSharing,
    InconsistentStories,
    Inheritance,
    FinancialControl,
    PressureDecisions,
    FrequentMoves,
}

/// Whether a question is answered with one code or a multi-select list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnswerShape {
    Single,
    Multiple,
}

impl QuestionKey {
    pub const ALL: [QuestionKey; 23] = [
        QuestionKey::TaxCompliance,
        QuestionKey::Investigations,
        QuestionKey::Sanctions,
        QuestionKey::CriminalHistory,
        QuestionKey::PepStatus,
        QuestionKey::CreditCardDebt,
        QuestionKey::EmploymentStability,
        QuestionKey::IncomeConsistency,
        QuestionKey::Bankruptcy,
        QuestionKey::TaxDebt,
        QuestionKey::LifestyleConsistency,
        QuestionKey::CashBusiness,
        QuestionKey::Offshore,
        QuestionKey::Cryptocurrency,
        QuestionKey::GiftsReceived,
        QuestionKey::Documentation,
        QuestionKey::QuestionableAssociates,
        QuestionKey::InformationSharing,
        QuestionKey::InconsistentStories,
        QuestionKey::Inheritance,
        QuestionKey::FinancialControl,
        QuestionKey::PressureDecisions,
        QuestionKey::FrequentMoves,
    ];

    pub const fn wire_name(self) -> &'static str {
        match self {
            QuestionKey::TaxCompliance => "taxCompliance",
            QuestionKey::Investigations => "investigations",
            QuestionKey::Sanctions => "sanctions",
            QuestionKey::CriminalHistory => "criminalHistory",
            QuestionKey::PepStatus => "pepStatus",
            QuestionKey::CreditCardDebt => "creditCardDebt",
            QuestionKey::EmploymentStability => "employmentStability",
            QuestionKey::IncomeConsistency => "incomeConsistency",
            QuestionKey::Bankruptcy => "bankruptcy",
            QuestionKey::TaxDebt => "taxDebt",
            QuestionKey::LifestyleConsistency => "lifestyleConsistency",
            QuestionKey::CashBusiness => "cashBusiness",
            QuestionKey::Offshore => "offshore",
            QuestionKey::Cryptocurrency => "cryptocurrency",
            QuestionKey::GiftsReceived => "giftsReceived",
            QuestionKey::Documentation => "documentation",
            QuestionKey::QuestionableAssociates => "questionableAssociates",
            QuestionKey::InformationSharing => "informationSharing",
            QuestionKey::InconsistentStories => "inconsistentStories",
            QuestionKey::Inheritance => "inheritance",
            QuestionKey::FinancialControl => "financialControl",
            QuestionKey::PressureDecisions => "pressureDecisions",
            QuestionKey::FrequentMoves => "frequentMoves",
        }
    }

    pub fn from_wire(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.wire_name() == name)
    }

    pub const fn shape(self) -> AnswerShape {
        match self {
            QuestionKey::Documentation => AnswerShape::Multiple,
            _ => AnswerShape::Single,
        }
    }

    /// Codes the questionnaire offers for a single-select question, most severe first, followed
    /// by the neutral options. Multi-select questions have an open vocabulary and return `&[]`.
    pub const fn vocabulary(self) -> &'static [&'static str] {
        match self {
            QuestionKey::TaxCompliance => &[
                "non-compliant",
                "significant-issues",
                "minor-issues",
                "compliant",
            ],
            QuestionKey::Investigations => &["criminal", "regulatory", "civil", "none"],
            QuestionKey::Sanctions => &["sanctions", "significant-media", "minor-media", "none"],
            QuestionKey::CriminalHistory => &["money-laundering", "significant", "minor", "none"],
            QuestionKey::PepStatus => &["direct", "associate", "family", "none"],
            QuestionKey::CreditCardDebt => &["high", "moderate", "low", "none"],
            QuestionKey::EmploymentStability => &["0-1", "1-3", "3-5", "5+"],
            QuestionKey::IncomeConsistency => &["very-variable", "variable", "stable", "very-stable"],
            QuestionKey::Bankruptcy => &["multiple", "recent", "discharged", "none"],
            QuestionKey::TaxDebt => &["liens", "significant", "minor", "none"],
            QuestionKey::LifestyleConsistency => {
                &["significantly-above", "slightly-above", "consistent", "below"]
            }
            QuestionKey::CashBusiness => &["primarily-cash", "significant", "minor", "none"],
            QuestionKey::Offshore => &["complex", "undisclosed", "disclosed", "none"],
            QuestionKey::Cryptocurrency => &["unclear-source", "significant", "minor", "none"],
            QuestionKey::GiftsReceived => &["unknown-source", "business", "family", "none"],
            QuestionKey::Documentation => &[],
            QuestionKey::QuestionableAssociates => &["criminal", "significant", "minor", "none"],
            QuestionKey::InformationSharing => {
                &["secretive", "reluctant", "somewhat-open", "open"]
            }
            QuestionKey::InconsistentStories => &["major", "significant", "minor", "none"],
            QuestionKey::Inheritance => &["disputed", "clear", "none"],
            QuestionKey::FinancialControl => &["complete", "significant", "minor", "none"],
            QuestionKey::PressureDecisions => &["extreme", "significant", "mild", "none"],
            QuestionKey::FrequentMoves => &["suspicious", "frequent", "occasional", "stable"],
        }
    }
}

impl fmt::Display for QuestionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.wire_name())
    }
}

/// A submitted answer: one categorical code or a multi-select list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multiple(Vec<String>),
}

/// Shape violations that would otherwise be silently misread by the rules.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerSetError {
    #[error("question '{key}' expects a single answer code but received a list")]
    ExpectedSingle { key: QuestionKey },
    #[error("question '{key}' expects a list of answer codes but received a single code")]
    ExpectedList { key: QuestionKey },
    #[error("question '{key}' expects an answer code or a list of answer codes")]
    UnsupportedValue { key: QuestionKey },
}

/// Immutable, validated snapshot of one questionnaire submission.
///
/// Unknown question names are dropped (and remembered in [`AnswerSet::ignored_keys`]); blank
/// single-select answers count as unset. Codes outside a question's vocabulary are kept and simply
/// never match a rule.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(try_from = "JsonAnswers")]
pub struct AnswerSet {
    values: BTreeMap<QuestionKey, AnswerValue>,
    ignored_keys: Vec<String>,
}

impl AnswerSet {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn from_raw(raw: RawAnswers) -> Result<Self, AnswerSetError> {
        let mut answers = Self::default();

        for (name, value) in raw {
            let Some(key) = QuestionKey::from_wire(&name) else {
                answers.ignored_keys.push(name);
                continue;
            };

            if let Some(value) = value {
                answers.insert(key, value)?;
            }
        }

        Ok(answers)
    }

    /// Decode a JSON answer object. Unknown fields are ignored whatever they hold; known
    /// questions must carry a string, a list of strings, or `null`.
    pub fn from_json(payload: JsonAnswers) -> Result<Self, AnswerSetError> {
        let mut raw = RawAnswers::new();
        for (name, value) in payload {
            let value = match QuestionKey::from_wire(&name) {
                Some(key) => decode_json_value(key, value)?,
                None => None,
            };
            raw.insert(name, value);
        }
        Self::from_raw(raw)
    }

    pub fn with_single(
        mut self,
        key: QuestionKey,
        code: impl Into<String>,
    ) -> Result<Self, AnswerSetError> {
        self.insert(key, AnswerValue::Single(code.into()))?;
        Ok(self)
    }

    pub fn with_list<I, S>(mut self, key: QuestionKey, codes: I) -> Result<Self, AnswerSetError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let codes = codes.into_iter().map(Into::into).collect();
        self.insert(key, AnswerValue::Multiple(codes))?;
        Ok(self)
    }

    fn insert(&mut self, key: QuestionKey, value: AnswerValue) -> Result<(), AnswerSetError> {
        match (key.shape(), value) {
            (AnswerShape::Single, AnswerValue::Single(code)) => {
                let code = code.trim();
                if code.is_empty() {
                    self.values.remove(&key);
                } else {
                    self.values.insert(key, AnswerValue::Single(code.to_string()));
                }
                Ok(())
            }
            (AnswerShape::Multiple, AnswerValue::Multiple(codes)) => {
                let mut selected: Vec<String> = Vec::with_capacity(codes.len());
                for code in codes {
                    let code = code.trim();
                    if !code.is_empty() && !selected.iter().any(|existing| existing == code) {
                        selected.push(code.to_string());
                    }
                }
                self.values.insert(key, AnswerValue::Multiple(selected));
                Ok(())
            }
            (AnswerShape::Single, AnswerValue::Multiple(_)) => {
                Err(AnswerSetError::ExpectedSingle { key })
            }
            (AnswerShape::Multiple, AnswerValue::Single(_)) => {
                Err(AnswerSetError::ExpectedList { key })
            }
        }
    }

    pub fn get(&self, key: QuestionKey) -> Option<&AnswerValue> {
        self.values.get(&key)
    }

    pub fn single(&self, key: QuestionKey) -> Option<&str> {
        match self.values.get(&key) {
            Some(AnswerValue::Single(code)) => Some(code.as_str()),
            _ => None,
        }
    }

    pub fn list(&self, key: QuestionKey) -> Option<&[String]> {
        match self.values.get(&key) {
            Some(AnswerValue::Multiple(codes)) => Some(codes.as_slice()),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    pub fn ignored_keys(&self) -> &[String] {
        &self.ignored_keys
    }

    /// Single-select answers whose code is not one the questionnaire offers.
    pub fn unrecognized_codes(&self) -> Vec<(QuestionKey, &str)> {
        self.values
            .iter()
            .filter_map(|(key, value)| match value {
                AnswerValue::Single(code) if !key.vocabulary().contains(&code.as_str()) => {
                    Some((*key, code.as_str()))
                }
                _ => None,
            })
            .collect()
    }
}

fn decode_json_value(key: QuestionKey, value: Value) -> Result<Option<AnswerValue>, AnswerSetError> {
    match value {
        Value::Null => Ok(None),
        Value::String(code) => Ok(Some(AnswerValue::Single(code))),
        Value::Array(items) => items
            .into_iter()
            .map(|item| match item {
                Value::String(code) => Ok(code),
                _ => Err(AnswerSetError::UnsupportedValue { key }),
            })
            .collect::<Result<Vec<_>, _>>()
            .map(|codes| Some(AnswerValue::Multiple(codes))),
        _ => Err(AnswerSetError::UnsupportedValue { key }),
    }
}

impl TryFrom<RawAnswers> for AnswerSet {
    type Error = AnswerSetError;

    fn try_from(raw: RawAnswers) -> Result<Self, Self::Error> {
        Self::from_raw(raw)
    }
}

impl TryFrom<JsonAnswers> for AnswerSet {
    type Error = AnswerSetError;

    fn try_from(payload: JsonAnswers) -> Result<Self, Self::Error> {
        Self::from_json(payload)
    }
}

impl Serialize for AnswerSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.values.serialize(serializer)
    }
}
