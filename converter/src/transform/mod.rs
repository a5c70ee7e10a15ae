//! Transformation module.
//!
//! - Aggregator: parsed CSV row to [`crate::models::MeasureSet`]
//! - Pipeline: read, aggregate, emit, write

pub mod aggregator;
pub mod pipeline;

pub use aggregator::{aggregate, aggregate_columns, seed_general_info, Aggregation};
pub use pipeline::*;
