//! Application state for the explorer and the single reducer that mutates it.
//!
//! Every user interaction arrives as an [`Action`]. Uploads are two-phase:
//! `BeginUpload` hands out a ticket before the file is read, and the matching
//! `FinishUpload` is only honoured if no newer upload started in between.
//! Layout runs inside the reducer and is keyed by a dataset generation, so
//! asking for it twice on the same data is free.

use rand::{rngs::SmallRng, SeedableRng};
use tracing::{debug, info, warn};

use crate::core::{
    parse_dataset, Dataset, ExplorerConfig, IngestError, RecordIndex, SelectionSet, Toggle,
};
use crate::viz::{build_scene, layout_dataset, layout_dataset_with, ColorMode, Layout, Scene};

pub type UploadTicket = u64;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    BeginUpload {
        file: String,
    },
    /// `contents` is `None` when the platform could not read the file.
    FinishUpload {
        ticket: UploadTicket,
        file: String,
        contents: Option<Vec<u8>>,
    },
    SetColorMode(ColorMode),
    ToggleDot(RecordIndex),
    DismissError,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Outcome {
    UploadQueued(UploadTicket),
    DatasetLoaded { records: usize },
    UploadFailed,
    /// A newer upload superseded this one.
    StaleUpload,
    ModeChanged(ColorMode),
    Selection(Toggle),
    Ignored,
}

#[derive(Debug, Clone, Default)]
pub struct ExplorerState {
    config: ExplorerConfig,
    dataset: Dataset,
    generation: u64,
    layout: Layout,
    layout_generation: Option<u64>,
    color_mode: ColorMode,
    selection: SelectionSet,
    latest_ticket: UploadTicket,
    pending: Option<String>,
    last_error: Option<String>,
    layout_seed: Option<u64>,
}

impl ExplorerState {
    pub fn new(config: ExplorerConfig) -> Self {
        Self {
            config,
            ..Self::default()
        }
    }

    /// Fixes the layout RNG so positions repeat across runs.
    pub fn with_layout_seed(mut self, seed: u64) -> Self {
        self.layout_seed = Some(seed);
        self
    }

    pub fn apply(&mut self, action: Action) -> Outcome {
        match action {
            Action::BeginUpload { file } => {
                self.latest_ticket += 1;
                debug!(ticket = self.latest_ticket, %file, "upload started");
                self.pending = Some(file);
                Outcome::UploadQueued(self.latest_ticket)
            }
            Action::FinishUpload {
                ticket,
                file,
                contents,
            } => self.finish_upload(ticket, file, contents),
            Action::SetColorMode(mode) => {
                if mode == self.color_mode {
                    return Outcome::Ignored;
                }
                self.color_mode = mode;
                debug!(mode = mode.as_str(), "color mode changed");
                Outcome::ModeChanged(mode)
            }
            Action::ToggleDot(index) => match self.dataset.get(index) {
                Some(record) => {
                    let toggle = self.selection.toggle(record);
                    debug!(index, ?toggle, selected = self.selection.len(), "dot toggled");
                    Outcome::Selection(toggle)
                }
                None => Outcome::Ignored,
            },
            Action::DismissError => {
                self.last_error = None;
                Outcome::Ignored
            }
        }
    }

    fn finish_upload(
        &mut self,
        ticket: UploadTicket,
        file: String,
        contents: Option<Vec<u8>>,
    ) -> Outcome {
        if ticket != self.latest_ticket {
            debug!(ticket, latest = self.latest_ticket, "discarding superseded upload");
            return Outcome::StaleUpload;
        }
        self.pending = None;

        let parsed = contents
            .ok_or_else(|| IngestError::Unreadable { file: file.clone() })
            .and_then(|bytes| parse_dataset(&bytes, self.config.max_records));

        match parsed {
            Ok(dataset) => {
                let records = dataset.len();
                self.replace_dataset(dataset);
                info!(%file, records, generation = self.generation, "dataset loaded");
                Outcome::DatasetLoaded { records }
            }
            Err(err) => {
                warn!(%file, error = %err, "upload rejected");
                self.last_error = Some(format!("{file}: {err}"));
                Outcome::UploadFailed
            }
        }
    }

    fn replace_dataset(&mut self, dataset: Dataset) {
        self.dataset = dataset;
        self.generation += 1;
        self.selection.clear();
        self.last_error = None;
        self.ensure_layout();
    }

    /// Computes the layout unless it is already current for this dataset.
    /// Returns whether a relaxation actually ran.
    pub fn ensure_layout(&mut self) -> bool {
        if self.layout_generation == Some(self.generation) {
            return false;
        }

        self.layout = match self.layout_seed {
            Some(seed) => layout_dataset_with(
                &self.dataset,
                &self.config,
                SmallRng::seed_from_u64(seed ^ self.generation),
            ),
            None => layout_dataset(&self.dataset, &self.config),
        };
        self.layout_generation = Some(self.generation);
        debug!(
            generation = self.generation,
            dots = self.layout.len(),
            bands = self.layout.bands.len(),
            "layout computed"
        );
        true
    }

    /// Render model, or `None` when there is nothing to draw.
    pub fn scene(&self) -> Option<Scene> {
        if self.dataset.is_empty() || self.layout_generation != Some(self.generation) {
            return None;
        }
        Some(build_scene(
            &self.dataset,
            &self.layout,
            self.color_mode,
            &self.selection,
            &self.config,
        ))
    }

    pub fn config(&self) -> &ExplorerConfig {
        &self.config
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn layout(&self) -> &Layout {
        &self.layout
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn color_mode(&self) -> ColorMode {
        self.color_mode
    }

    pub fn selection(&self) -> &SelectionSet {
        &self.selection
    }

    /// Name of the file currently being read, if any.
    pub fn pending_upload(&self) -> Option<&str> {
        self.pending.as_deref()
    }

    pub fn last_error(&self) -> Option<&str> {
        self.last_error.as_deref()
    }
}
