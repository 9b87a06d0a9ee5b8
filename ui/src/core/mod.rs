//! Data model and ingestion. Nothing in here touches Dioxus.

pub mod config;
pub mod ingest;
pub mod record;
pub mod selection;

pub use config::{ExplorerConfig, LegendConfig};
pub use ingest::{parse_dataset, parse_dataset_with_report, IngestError, IngestReport};
pub use record::{Dataset, Record, RecordIndex, UNKNOWN_MONTH};
pub use selection::{SelectedItem, SelectionSet, Toggle};
