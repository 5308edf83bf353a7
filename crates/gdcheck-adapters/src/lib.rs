//! Infrastructure adapters for gdcheck.
//!
//! This crate implements the ports defined in
//! `gdcheck_core::application::ports`. It contains all external
//! dependencies and I/O operations.

pub mod json_source;
pub mod memory;

// Re-export commonly used adapters
pub use json_source::JsonDatasetSource;
pub use memory::MemoryDatasetSource;
