//! Turns uploaded file bytes into a [`Dataset`].
//!
//! Ingestion is all-or-nothing: either every element parses as a record-shaped
//! object and a fresh dataset comes back, or an [`IngestError`] is returned and
//! the caller keeps whatever it had before.

use std::collections::HashSet;

use thiserror::Error;
use tracing::{info, warn};

use super::record::{Dataset, RawRecord, Record, RecordIndex, UNKNOWN_MONTH};

#[derive(Debug, Error)]
pub enum IngestError {
    /// Not JSON, not an array, or an element with mistyped fields.
    #[error("file is not a JSON array of records: {0}")]
    Malformed(#[from] serde_json::Error),
    #[error("could not read `{file}`")]
    Unreadable { file: String },
}

/// Tally of fallbacks applied while building records.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct IngestReport {
    pub parsed: usize,
    pub kept: usize,
    pub missing_month: usize,
    pub missing_scores: usize,
    pub missing_text: usize,
    /// Source `Idx` values were absent or clashing, so positions were used.
    pub renumbered: bool,
}

impl IngestReport {
    pub fn truncated(&self) -> bool {
        self.kept < self.parsed
    }
}

/// Parse `bytes` and keep at most `max_records` records in file order.
pub fn parse_dataset(bytes: &[u8], max_records: usize) -> Result<Dataset, IngestError> {
    parse_dataset_with_report(bytes, max_records).map(|(dataset, _)| dataset)
}

pub fn parse_dataset_with_report(
    bytes: &[u8],
    max_records: usize,
) -> Result<(Dataset, IngestReport), IngestError> {
    let raw: Vec<RawRecord> = serde_json::from_slice(bytes)?;

    let mut report = IngestReport {
        parsed: raw.len(),
        ..IngestReport::default()
    };

    let kept: Vec<RawRecord> = raw.into_iter().take(max_records).collect();
    report.kept = kept.len();

    let source_ids = source_indices(&kept);
    report.renumbered = source_ids.is_none() && !kept.is_empty();

    let records = kept
        .into_iter()
        .enumerate()
        .map(|(position, raw)| {
            let index = match &source_ids {
                Some(ids) => ids[position],
                None => position as RecordIndex,
            };
            build_record(index, raw, &mut report)
        })
        .collect();

    let dataset = Dataset::new(records);
    log_report(&dataset, &report);
    Ok((dataset, report))
}

/// Source identifiers, only when every record has a usable and distinct one.
fn source_indices(records: &[RawRecord]) -> Option<Vec<RecordIndex>> {
    let mut seen = HashSet::with_capacity(records.len());
    let mut ids = Vec::with_capacity(records.len());
    for raw in records {
        let id = raw.idx.as_ref().and_then(|idx| idx.as_index())?;
        if !seen.insert(id) {
            return None;
        }
        ids.push(id);
    }
    Some(ids)
}

fn build_record(index: RecordIndex, raw: RawRecord, report: &mut IngestReport) -> Record {
    let month = match raw.month {
        Some(month) => month.into_label(),
        None => {
            report.missing_month += 1;
            UNKNOWN_MONTH.to_string()
        }
    };

    if raw.sentiment.is_none() || raw.subjectivity.is_none() {
        report.missing_scores += 1;
    }

    let raw_text = raw.raw_tweet.unwrap_or_else(|| {
        report.missing_text += 1;
        String::new()
    });

    Record {
        index,
        month,
        sentiment: raw.sentiment.unwrap_or(0.0),
        subjectivity: raw.subjectivity.unwrap_or(0.0),
        raw_text,
    }
}

fn log_report(dataset: &Dataset, report: &IngestReport) {
    info!(
        records = report.kept,
        parsed = report.parsed,
        months = dataset.months().len(),
        "dataset ingested"
    );
    if report.truncated() {
        info!(dropped = report.parsed - report.kept, "upload truncated");
    }
    if report.renumbered {
        warn!("record identifiers missing or duplicated; using file positions");
    }
    if report.missing_month > 0 {
        warn!(count = report.missing_month, "records without Month bucketed as {UNKNOWN_MONTH}");
    }
    if report.missing_scores > 0 {
        warn!(count = report.missing_scores, "records with missing scores default to 0");
    }
    if report.missing_text > 0 {
        warn!(count = report.missing_text, "records without RawTweet");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn bytes(value: serde_json::Value) -> Vec<u8> {
        serde_json::to_vec(&value).unwrap()
    }

    #[test]
    fn truncates_in_file_order() {
        let items: Vec<_> = (0..305)
            .map(|i| json!({"Month": "Jan", "Sentiment": 0.0, "Subjectivity": 0.5, "RawTweet": format!("t{i}")}))
            .collect();
        let (dataset, report) = parse_dataset_with_report(&bytes(json!(items)), 300).unwrap();

        assert_eq!(dataset.len(), 300);
        assert!(report.truncated());
        let texts: Vec<_> = dataset.records().iter().map(|r| r.raw_text.clone()).collect();
        let expected: Vec<_> = (0..300).map(|i| format!("t{i}")).collect();
        assert_eq!(texts, expected);
    }

    #[test]
    fn short_input_is_kept_whole() {
        let input = json!([
            {"Month": "Jan", "Sentiment": 0.8, "Subjectivity": 0.3, "RawTweet": "a", "Idx": 0},
            {"Month": "Jan", "Sentiment": -0.5, "Subjectivity": 0.9, "RawTweet": "b", "Idx": 1}
        ]);
        let dataset = parse_dataset(&bytes(input), 300).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[1].sentiment, -0.5);
        assert_eq!(dataset.records()[1].index, 1);
    }

    #[test]
    fn rejects_non_json() {
        let err = parse_dataset(b"not json at all", 300).unwrap_err();
        assert!(matches!(err, IngestError::Malformed(_)));
    }

    #[test]
    fn rejects_non_array() {
        let err = parse_dataset(&bytes(json!({"Month": "Jan"})), 300).unwrap_err();
        assert!(matches!(err, IngestError::Malformed(_)));
    }

    #[test]
    fn rejects_mistyped_fields() {
        let err = parse_dataset(&bytes(json!([{"Month": "Jan", "Sentiment": "high"}])), 300)
            .unwrap_err();
        assert!(matches!(err, IngestError::Malformed(_)));
    }

    #[test]
    fn empty_array_is_an_empty_dataset() {
        let (dataset, report) = parse_dataset_with_report(b"[]", 300).unwrap();
        assert!(dataset.is_empty());
        assert!(!report.renumbered);
    }

    #[test]
    fn missing_fields_fall_back() {
        let input = json!([{"Sentiment": 0.2}, {"Month": 3, "RawTweet": "x"}]);
        let (dataset, report) = parse_dataset_with_report(&bytes(input), 300).unwrap();

        let first = &dataset.records()[0];
        assert_eq!(first.month, UNKNOWN_MONTH);
        assert_eq!(first.subjectivity, 0.0);
        assert_eq!(first.raw_text, "");
        assert_eq!(dataset.records()[1].month, "3");

        assert_eq!(report.missing_month, 1);
        assert_eq!(report.missing_scores, 2);
        assert_eq!(report.missing_text, 1);
    }

    #[test]
    fn missing_idx_renumbers_by_position() {
        let input = json!([
            {"Month": "Jan", "RawTweet": "a", "Idx": 7},
            {"Month": "Jan", "RawTweet": "b"}
        ]);
        let (dataset, report) = parse_dataset_with_report(&bytes(input), 300).unwrap();
        assert!(report.renumbered);
        let ids: Vec<_> = dataset.records().iter().map(|r| r.index).collect();
        assert_eq!(ids, vec![0, 1]);
    }

    #[test]
    fn duplicate_idx_renumbers_by_position() {
        let input = json!([
            {"Month": "Jan", "RawTweet": "a", "Idx": 5},
            {"Month": "Jan", "RawTweet": "b", "Idx": 5}
        ]);
        let (dataset, report) = parse_dataset_with_report(&bytes(input), 300).unwrap();
        assert!(report.renumbered);
        assert_eq!(dataset.records()[1].index, 1);
    }

    #[test]
    fn distinct_idx_values_are_kept() {
        let input = json!([
            {"Month": "Jan", "RawTweet": "a", "Idx": 40},
            {"Month": "Jan", "RawTweet": "b", "Idx": "41"}
        ]);
        let dataset = parse_dataset(&bytes(input), 300).unwrap();
        let ids: Vec<_> = dataset.records().iter().map(|r| r.index).collect();
        assert_eq!(ids, vec![40, 41]);
    }
}
