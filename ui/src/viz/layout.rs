//! One-shot layout of a dataset: month bands plus relaxed dot positions.

use rand::{rngs::SmallRng, Rng, SeedableRng};
use tracing::debug;

use crate::core::{Dataset, ExplorerConfig, RecordIndex};

use super::bands::{partition_months, MonthBand};
use super::force::{ForceConfig, Node, Simulation};

/// Settled position of one record.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Placement {
    pub index: RecordIndex,
    /// Position of the record's band in [`Layout::bands`].
    pub band: usize,
    pub x: f64,
    pub y: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct Layout {
    pub bands: Vec<MonthBand>,
    /// Same order as the dataset's records.
    pub placements: Vec<Placement>,
}

impl Layout {
    pub fn placement(&self, index: RecordIndex) -> Option<&Placement> {
        self.placements.iter().find(|p| p.index == index)
    }

    pub fn len(&self) -> usize {
        self.placements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.placements.is_empty()
    }
}

impl ForceConfig {
    pub fn for_explorer(config: &ExplorerConfig) -> Self {
        Self {
            center_x: config.width / 2.0,
            collide_radius: config.min_separation() / 2.0,
            ticks: config.layout_ticks,
            ..Self::default()
        }
    }
}

/// Lay out with an entropy-seeded RNG. Positions are not reproducible
/// between calls; use [`layout_dataset_with`] for that.
pub fn layout_dataset(dataset: &Dataset, config: &ExplorerConfig) -> Layout {
    layout_dataset_with(dataset, config, SmallRng::from_entropy())
}

pub fn layout_dataset_with<R: Rng>(dataset: &Dataset, config: &ExplorerConfig, mut rng: R) -> Layout {
    let bands = partition_months(dataset, config.height, config.band_padding);
    let force = ForceConfig::for_explorer(config);

    let mut placements: Vec<Option<Placement>> = vec![None; dataset.len()];

    for (band_idx, band) in bands.iter().enumerate() {
        let members: Vec<usize> = dataset
            .records()
            .iter()
            .enumerate()
            .filter(|(_, record)| record.month == band.month)
            .map(|(position, _)| position)
            .collect();

        let nodes = vec![Node::new(band.center()); members.len()];
        let mut simulation = Simulation::new(nodes, force, &mut rng);
        simulation.run(config.layout_ticks);

        for (position, node) in members.iter().zip(simulation.into_nodes()) {
            placements[*position] = Some(Placement {
                index: dataset.records()[*position].index,
                band: band_idx,
                x: node.x,
                y: node.y,
            });
        }

        debug!(month = %band.month, dots = members.len(), "band relaxed");
    }

    Layout {
        bands,
        placements: placements.into_iter().flatten().collect(),
    }
}
