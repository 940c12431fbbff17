//! Infrastructure adapters for ecs-image.
//!
//! This crate implements the ports defined in `ecs-image-core::application::ports`.
//! It contains all external dependencies and I/O operations.

pub mod builtin_regions;
pub mod config_loader;
pub mod region_catalog;

// Re-export commonly used adapters
pub use config_loader::{ConfigFormat, FileConfigLoader};
pub use region_catalog::InMemoryRegionCatalog;
