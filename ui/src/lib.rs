//! Shared UI crate for Sentiscope. Ingestion, layout and every view live here;
//! the platform crates only launch it.

pub mod components;
pub mod core;
pub mod explorer;
pub mod i18n;
pub mod views;
pub mod viz;

