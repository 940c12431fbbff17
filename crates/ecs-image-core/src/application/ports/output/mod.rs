//! Driven (output) ports - implemented by infrastructure.
//!
//! The `ecs-image-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ImageConfig;
use crate::error::EcsImageResult;

/// Port for the catalog of known region ids.
///
/// Implemented by:
/// - `ecs_image_adapters::InMemoryRegionCatalog` (built-in table plus extras)
#[cfg_attr(test, mockall::automock)]
pub trait RegionCatalog: Send + Sync {
    /// Exact, case-sensitive membership test.
    fn is_known_region(&self, region: &str) -> bool;

    /// Every known region id, sorted.
    fn regions(&self) -> EcsImageResult<Vec<String>>;
}

/// Port for reading an image configuration.
///
/// Implemented by:
/// - `ecs_image_adapters::FileConfigLoader` (TOML / JSON files)
pub trait ImageConfigSource: Send + Sync {
    /// Read and deserialize the configuration stored at `path`.
    fn load(&self, path: &Path) -> EcsImageResult<ImageConfig>;
}
