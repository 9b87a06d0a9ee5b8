//! Record model for uploaded posts.

use serde::Deserialize;

/// Month label given to records whose source object lacks one.
pub const UNKNOWN_MONTH: &str = "Unknown";

/// Stable identifier of a record within the loaded dataset.
pub type RecordIndex = u64;

/// One annotated post. Immutable once ingested; positions live in
/// [`crate::viz::Layout`].
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    pub index: RecordIndex,
    pub month: String,
    /// Polarity in `[-1, 1]`.
    pub sentiment: f64,
    /// Subjectivity in `[0, 1]`.
    pub subjectivity: f64,
    pub raw_text: String,
}

/// Ordered, truncated collection of records from a single upload.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Self { records }
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, index: RecordIndex) -> Option<&Record> {
        self.records.iter().find(|record| record.index == index)
    }

    /// Distinct months in order of first appearance.
    pub fn months(&self) -> Vec<&str> {
        let mut months: Vec<&str> = Vec::new();
        for record in &self.records {
            if !months.contains(&record.month.as_str()) {
                months.push(record.month.as_str());
            }
        }
        months
    }
}

/// Wire shape of one element in the uploaded JSON array.
#[derive(Debug, Clone, Default, Deserialize)]
pub(crate) struct RawRecord {
    #[serde(rename = "Month", default)]
    pub month: Option<MonthField>,
    #[serde(rename = "Sentiment", default)]
    pub sentiment: Option<f64>,
    #[serde(rename = "Subjectivity", default)]
    pub subjectivity: Option<f64>,
    #[serde(rename = "RawTweet", default)]
    pub raw_tweet: Option<String>,
    #[serde(rename = "Idx", default)]
    pub idx: Option<IdxField>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum MonthField {
    Text(String),
    Number(serde_json::Number),
}

impl MonthField {
    pub fn into_label(self) -> String {
        match self {
            MonthField::Text(text) => text,
            MonthField::Number(number) => number.to_string(),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub(crate) enum IdxField {
    Integer(u64),
    Float(f64),
    Text(String),
}

impl IdxField {
    /// Usable identifier, if the value is a non-negative whole number.
    pub fn as_index(&self) -> Option<RecordIndex> {
        match self {
            IdxField::Integer(value) => Some(*value),
            IdxField::Float(value) if *value >= 0.0 && value.fract() == 0.0 => {
                Some(*value as RecordIndex)
            }
            IdxField::Float(_) => None,
            IdxField::Text(text) => text.trim().parse().ok(),
        }
    }
}
