//! View-model types consumed by the dashboard renderer.
//!
//! Each submodule holds the data for one dashboard panel. All types serialize
//! with camelCase field names so the renderer can bind them directly.

pub mod age_distribution;
pub mod badge;
pub mod capex;
pub mod notifications;
pub mod priority;
pub mod report;
pub mod summary;
