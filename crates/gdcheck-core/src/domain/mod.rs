//! Core domain layer for gdcheck.
//!
//! This module contains pure business logic with ZERO external dependencies.
//! All I/O (reading the dataset from disk, rendering the report) is handled
//! via ports (traits) defined in the application layer.
//!
//! ## Hexagonal Architecture Compliance
//!
//! - **No async**: Domain logic is synchronous
//! - **No I/O**: No filesystem, network, or external calls
//! - **No external crates**: Only std library + thiserror + serde derives
//! - **Immutable entities**: The dataset snapshot is never mutated by a run

// Public API - what the world sees
pub mod checks;
pub mod dataset;
pub mod entities;
pub mod violation;

// Re-exports for convenience
pub use checks::{CATALOG, Check, CheckOutcome, CheckScope};
pub use dataset::{Dataset, DatasetBuilder, ShapeIssue, Table};
pub use entities::{Enemy, EnemyAppearance, Level, Projectile, ProjectileAppearance};
pub use violation::Violation;
