//! Implementation of the `ecs-image regions` command.

use serde::Serialize;

use ecs_image_adapters::builtin_regions::location_of;
use ecs_image_core::application::RegionCatalog;

use crate::{
    cli::{OutputFormat, RegionsArgs, RegionsFormat},
    config::AppConfig,
    error::CliResult,
    output::OutputManager,
};

#[derive(Debug, Serialize)]
struct RegionEntry {
    id: String,
    location: Option<&'static str>,
}

pub fn execute(args: RegionsArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::region_catalog(&config)?;
    let entries: Vec<RegionEntry> = catalog
        .regions()?
        .into_iter()
        .map(|id| RegionEntry {
            location: location_of(&id),
            id,
        })
        .collect();

    // A global `--output-format json` wins over the per-command format.
    let format = if output.format() == OutputFormat::Json {
        RegionsFormat::Json
    } else {
        args.format
    };

    match format {
        RegionsFormat::Table => {
            output.header("Known Regions:")?;
            for entry in &entries {
                output.print(&format_row(entry))?;
            }
        }
        RegionsFormat::List => {
            for entry in &entries {
                output.print(&entry.id)?;
            }
        }
        RegionsFormat::Json => output.json(&entries)?,
    }

    Ok(())
}

fn format_row(entry: &RegionEntry) -> String {
    format!(
        "  {:<24} {}",
        entry.id,
        entry.location.unwrap_or("(from settings)")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_shows_location() {
        let row = format_row(&RegionEntry {
            id: "cn-hangzhou".into(),
            location: location_of("cn-hangzhou"),
        });
        assert!(row.contains("cn-hangzhou"));
        assert!(row.contains("Hangzhou"));
    }

    #[test]
    fn custom_region_row_is_marked() {
        let row = format_row(&RegionEntry {
            id: "cn-wulanchabu".into(),
            location: None,
        });
        assert!(row.contains("(from settings)"));
    }

    #[test]
    fn extra_regions_appear_in_catalog() {
        let mut cfg = AppConfig::default();
        cfg.regions.extra = vec!["cn-wulanchabu".into()];
        let catalog = super::super::region_catalog(&cfg).unwrap();
        assert!(catalog.is_known_region("cn-wulanchabu"));
        assert!(catalog.is_known_region("cn-hangzhou"));
    }
}
