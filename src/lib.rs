//! Animepack: Anime Catalog Bundling Library
//!
//! A library for transforming a flat anime catalog CSV into a compact,
//! self-contained JSON bundle with pre-aggregated statistics, ready to
//! embed in a dashboard client.

pub mod cli;
pub mod pipeline;
pub mod report;
pub mod utils;
