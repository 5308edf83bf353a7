//! Command implementations.
//!
//! Each submodule exposes a single `execute` function taking its parsed
//! arguments plus whatever shared state it needs (config, output manager).
//! All business logic lives in `gdcheck-core`; these modules only wire
//! arguments to services and render results.

pub mod check;
pub mod checks;
pub mod completions;
