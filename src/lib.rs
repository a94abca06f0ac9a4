//! Driver for the NeuroInsight icon set: renders every export size, the
//! canonical `icon.png`, then a best-effort Windows `icon.ico`.

pub mod config;
pub mod container;
pub mod driver;
pub mod logger;
pub mod models;

pub use neuroicon_core as icon;
