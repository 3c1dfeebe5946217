//! Pipeline module - the sequential transformation stages
//!
//! Loader -> Cleaner -> Enricher -> Selector -> Aggregator. Each stage is a
//! pure function from the previous stage's output, so every stage can be
//! unit tested without touching the filesystem.

pub mod clean;
pub mod enrich;
pub mod error;
pub mod loader;
pub mod select;
pub mod stats;

pub use clean::*;
pub use enrich::*;
pub use error::PipelineError;
pub use loader::*;
pub use select::*;
pub use stats::*;
