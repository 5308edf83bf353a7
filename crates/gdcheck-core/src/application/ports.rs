//! Driven (output) ports - implemented by infrastructure.
//!
//! In hexagonal architecture, ports define what the application needs
//! from the outside world. The `gdcheck-adapters` crate provides the
//! implementations.

use crate::domain::Dataset;
use crate::error::GdcheckResult;

/// Port for loading one immutable dataset snapshot.
///
/// Implemented by:
/// - `gdcheck_adapters::JsonDatasetSource` (production: five JSON tables)
/// - `gdcheck_adapters::MemoryDatasetSource` (testing)
///
/// ## Design Notes
///
/// - Loading happens exactly once per run; the returned snapshot is
///   never mutated by the engine.
/// - Malformed *records* must be reported as shape issues inside the
///   snapshot; only an unobtainable *document* is a load error.
pub trait DatasetSource: Send + Sync {
    /// Load the full dataset snapshot.
    fn load(&self) -> GdcheckResult<Dataset>;
}
