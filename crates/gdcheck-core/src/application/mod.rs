//! Application layer for gdcheck.
//!
//! This layer contains:
//! - **Services**: Use case orchestration (ValidationService)
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business logic itself. All constraint logic lives in `crate::domain`.

pub mod error;
pub mod ports;
pub mod service;

pub use error::ApplicationError;
pub use ports::DatasetSource;
pub use service::ValidationService;
