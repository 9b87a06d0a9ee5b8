//! Pure visualization pipeline: month bands, force layout, color scales and
//! the render model the Dioxus components draw from.

pub mod bands;
pub mod color;
pub mod force;
pub mod layout;
pub mod scene;

pub use bands::{partition_months, MonthBand};
pub use color::{ColorMode, ColorScale, Rgb};
pub use force::{ForceConfig, Node, Simulation};
pub use layout::{layout_dataset, layout_dataset_with, Layout, Placement};
pub use scene::{build_legend, build_scene, Dot, Legend, LegendPole, LegendSection, MonthLabel, Scene};
