//! Application layer for ecs-image.
//!
//! This layer contains:
//! - **Services**: `ValidationService`, which runs the domain rules against an
//!   injected region catalog
//! - **Ports**: Interface definitions (traits) for external dependencies
//! - **Errors**: Application-specific error types
//!
//! The rules themselves live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

pub use services::{ValidationOutcome, ValidationService};

// Re-export port traits (for adapter implementation)
pub use ports::{ImageConfigSource, RegionCatalog};

pub use error::ApplicationError;
