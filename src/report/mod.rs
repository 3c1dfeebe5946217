//! Report module - bundle assembly, serialization, and the run summary

pub mod bundle;
pub mod export;
pub mod summary;

pub use bundle::*;
pub use export::*;
pub use summary::*;
