//! Command handlers, one module per subcommand.

pub mod completions;
pub mod config;
pub mod regions;
pub mod validate;

use ecs_image_adapters::InMemoryRegionCatalog;
use tracing::debug;

use crate::{config::AppConfig, error::CliResult};

/// Built-in regions plus any `regions.extra` from the settings.
fn region_catalog(config: &AppConfig) -> CliResult<InMemoryRegionCatalog> {
    let catalog = InMemoryRegionCatalog::with_builtin()?;
    if !config.regions.extra.is_empty() {
        debug!(extra = ?config.regions.extra, "Extending region catalog");
        catalog.extend(config.regions.extra.iter().cloned())?;
    }
    Ok(catalog)
}
