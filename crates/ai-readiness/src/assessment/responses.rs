use std::collections::BTreeMap;
use std::io::Read;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::catalog::{self, QuestionId, QuestionKind};

/// Answer tagged by the shape the question collects.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    Choice(String),
    Selections(Vec<String>),
    Scale(u8),
    FreeText(String),
}

impl Answer {
    /// Human-readable rendering used in report context; selections are comma-joined.
    pub fn formatted(&self) -> String {
        match self {
            Answer::Choice(value) | Answer::FreeText(value) => value.clone(),
            Answer::Selections(values) => values.join(", "),
            Answer::Scale(value) => value.to_string(),
        }
    }

    fn wire_value(&self) -> Value {
        match self {
            Answer::Choice(value) | Answer::FreeText(value) => Value::String(value.clone()),
            Answer::Selections(values) => {
                Value::Array(values.iter().cloned().map(Value::String).collect())
            }
            Answer::Scale(value) => Value::from(*value),
        }
    }
}

impl Serialize for Answer {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        match self {
            Answer::Choice(value) | Answer::FreeText(value) => serializer.serialize_str(value),
            Answer::Selections(values) => values.serialize(serializer),
            Answer::Scale(value) => serializer.serialize_u8(*value),
        }
    }
}

/// Untyped answer as it arrives over the wire.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAnswer {
    Number(f64),
    Text(String),
    List(Vec<String>),
    Null,
    /// Booleans, objects, and lists holding non-strings; never scored.
    Other(Value),
}

impl From<Value> for RawAnswer {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => RawAnswer::Null,
            Value::String(text) => RawAnswer::Text(text),
            Value::Number(number) => match number.as_f64() {
                Some(value) => RawAnswer::Number(value),
                None => RawAnswer::Other(Value::Number(number)),
            },
            Value::Array(items) if items.iter().all(Value::is_string) => RawAnswer::List(
                items
                    .into_iter()
                    .filter_map(|item| match item {
                        Value::String(text) => Some(text),
                        _ => None,
                    })
                    .collect(),
            ),
            other => RawAnswer::Other(other),
        }
    }
}

impl RawAnswer {
    fn into_answer(self, kind: QuestionKind) -> Option<Answer> {
        match self {
            RawAnswer::Null | RawAnswer::Other(_) => None,
            RawAnswer::List(values) => Some(Answer::Selections(values)),
            RawAnswer::Number(value) => Some(Answer::Scale(saturate_scale(value))),
            RawAnswer::Text(value) => Some(match kind {
                QuestionKind::Scale => Answer::Scale(
                    value
                        .trim()
                        .parse::<f64>()
                        .map(saturate_scale)
                        .unwrap_or(0),
                ),
                QuestionKind::FreeText => Answer::FreeText(value),
                QuestionKind::MultiSelect
                | QuestionKind::SingleSelect
                | QuestionKind::Dropdown => Answer::Choice(value),
            }),
        }
    }
}

/// Scale answers are whole steps; fractional input rounds to the nearest one.
fn saturate_scale(value: f64) -> u8 {
    if value.is_nan() {
        return 0;
    }
    value.round().clamp(0.0, f64::from(u8::MAX)) as u8
}

/// A respondent's answers keyed by question, ordered like the questionnaire.
///
/// The submitted values are kept verbatim next to the typed answers, unknown codes included.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResponseSet {
    answers: BTreeMap<QuestionId, Answer>,
    raw: BTreeMap<String, Value>,
}

impl Serialize for ResponseSet {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.answers.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for ResponseSet {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let raw = BTreeMap::<String, Value>::deserialize(deserializer)?;
        Ok(Self::from_raw(raw))
    }
}

impl ResponseSet {
    /// Convert wire answers using each question's declared kind.
    ///
    /// Unknown codes, nulls, and unsupported shapes are left unscored; option sets and
    /// scale bounds are not checked.
    pub fn from_raw<I, K>(raw: I) -> Self
    where
        I: IntoIterator<Item = (K, Value)>,
        K: Into<String>,
    {
        let mut set = Self::default();
        for (code, value) in raw {
            let code: String = code.into();
            match QuestionId::parse(&code) {
                None => debug!(question = %code, "ignoring answer for unknown question"),
                Some(id) => match RawAnswer::from(value.clone()) {
                    RawAnswer::Other(_) => {
                        debug!(question = %code, "ignoring answer with unsupported shape")
                    }
                    raw_answer => {
                        if let Some(answer) = raw_answer.into_answer(catalog::question(id).kind) {
                            set.answers.insert(id, answer);
                        }
                    }
                },
            }
            set.raw.insert(code, value);
        }
        set
    }

    /// Import a two-column `question_id,answer` export. Multi-select answers use `;`.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, ResponseImportError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);

        let mut raw = Vec::new();
        for (index, row) in csv_reader.deserialize::<CsvAnswerRow>().enumerate() {
            let row = row?;
            let Some(id) = QuestionId::parse(&row.question_id) else {
                return Err(ResponseImportError::UnknownQuestion {
                    line: index + 2,
                    code: row.question_id,
                });
            };

            if row.answer.is_empty() {
                continue;
            }

            let value = match catalog::question(id).kind {
                QuestionKind::MultiSelect => Value::Array(
                    row.answer
                        .split(';')
                        .map(str::trim)
                        .filter(|item| !item.is_empty())
                        .map(|item| Value::String(item.to_string()))
                        .collect(),
                ),
                _ => Value::String(row.answer),
            };
            raw.push((row.question_id, value));
        }

        Ok(Self::from_raw(raw))
    }

    pub fn record(&mut self, id: QuestionId, answer: Answer) {
        self.raw.insert(id.code().to_string(), answer.wire_value());
        self.answers.insert(id, answer);
    }

    pub fn clear(&mut self, id: QuestionId) -> Option<Answer> {
        self.raw.remove(id.code());
        self.answers.remove(&id)
    }

    /// Values exactly as submitted, keyed by the code the respondent sent.
    pub fn raw(&self) -> &BTreeMap<String, Value> {
        &self.raw
    }

    pub fn get(&self, id: QuestionId) -> Option<&Answer> {
        self.answers.get(&id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.answers.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.answers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (QuestionId, &Answer)> {
        self.answers.iter().map(|(id, answer)| (*id, answer))
    }

    /// Single-string answer; lists and numbers read as unanswered.
    pub fn choice(&self, id: QuestionId) -> Option<&str> {
        match self.answers.get(&id) {
            Some(Answer::Choice(value)) | Some(Answer::FreeText(value)) => Some(value.as_str()),
            _ => None,
        }
    }

    /// Like [`ResponseSet::choice`] but yields an empty string when unanswered.
    pub fn text(&self, id: QuestionId) -> &str {
        self.choice(id).unwrap_or("")
    }

    pub fn selections(&self, id: QuestionId) -> &[String] {
        match self.answers.get(&id) {
            Some(Answer::Selections(values)) => values,
            _ => &[],
        }
    }

    /// Numeric answer; zero counts as unanswered.
    pub fn scale(&self, id: QuestionId) -> Option<u8> {
        match self.answers.get(&id) {
            Some(Answer::Scale(value)) if *value > 0 => Some(*value),
            _ => None,
        }
    }

    /// Numeric answer with unanswered read as zero, the baseline the flag rules compare against.
    pub fn scale_or_zero(&self, id: QuestionId) -> u8 {
        self.scale(id).unwrap_or(0)
    }
}

impl FromIterator<(QuestionId, Answer)> for ResponseSet {
    fn from_iter<T: IntoIterator<Item = (QuestionId, Answer)>>(iter: T) -> Self {
        let mut set = Self::default();
        for (id, answer) in iter {
            set.record(id, answer);
        }
        set
    }
}

#[derive(Debug, Deserialize)]
struct CsvAnswerRow {
    question_id: String,
    #[serde(default)]
    answer: String,
}

/// Failure reading a response export.
#[derive(Debug, thiserror::Error)]
pub enum ResponseImportError {
    #[error("invalid response export: {0}")]
    Csv(#[from] csv::Error),
    #[error("line {line}: unknown question code '{code}'")]
    UnknownQuestion { line: usize, code: String },
    #[error("invalid response JSON: {0}")]
    Json(#[from] serde_json::Error),
}
