//! Implementation of the `ecs-image validate` command.
//!
//! Responsibility: wire the region catalog and file loader into the core
//! validation service, then render the outcome. No rules live here.

use std::path::Path;

use serde::Serialize;
use tracing::{info, instrument};

use ecs_image_adapters::FileConfigLoader;
use ecs_image_core::{
    application::{ValidationOutcome, ValidationService},
    domain::{ImageConfig, ViolationKind},
    error::EcsImageError,
};

use crate::{
    cli::{OutputFormat, ValidateArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::OutputManager,
};

/// Machine-readable validation report.
#[derive(Debug, Serialize)]
pub struct ValidationReport<'a> {
    pub file: String,
    pub valid: bool,
    pub violations: Vec<ReportedViolation>,
    pub copy_regions: &'a [String],
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<&'a ImageConfig>,
}

#[derive(Debug, Serialize)]
pub struct ReportedViolation {
    pub kind: ViolationKind,
    pub message: String,
}

impl<'a> ValidationReport<'a> {
    pub fn new(file: &Path, outcome: &'a ValidationOutcome, include_config: bool) -> Self {
        Self {
            file: file.display().to_string(),
            valid: outcome.is_valid(),
            violations: outcome
                .violations
                .iter()
                .map(|v| ReportedViolation {
                    kind: v.kind(),
                    message: v.to_string(),
                })
                .collect(),
            copy_regions: &outcome.config.copy_regions,
            config: include_config.then_some(&outcome.config),
        }
    }
}

/// Execute the `ecs-image validate` command.
///
/// 1. Build the region catalog (built-in + `regions.extra`)
/// 2. Load the file and run every rule
/// 3. Render the outcome; any violation becomes a user error (exit 2)
#[instrument(skip_all, fields(file = %args.file.display()))]
pub fn execute(args: ValidateArgs, config: AppConfig, output: OutputManager) -> CliResult<()> {
    let catalog = super::region_catalog(&config)?;
    let skip_regions = args.skip_region_validation || config.validation.skip_region_validation;

    let service = ValidationService::new(Box::new(catalog)).skip_region_validation(skip_regions);
    let outcome = service.load_and_validate(&FileConfigLoader::new(), &args.file)?;

    info!(
        violations = outcome.violations.len(),
        copy_regions = outcome.config.copy_regions.len(),
        "Validation finished"
    );

    if output.format() == OutputFormat::Json {
        let report = ValidationReport::new(&args.file, &outcome, args.print_normalized);
        output.json(&report)?;
    } else if outcome.is_valid() {
        output.success(&format!("{} is valid", args.file.display()))?;
        if !outcome.config.copy_regions.is_empty() {
            output.info(&format!(
                "Copy regions: {}",
                outcome.config.copy_regions.join(", ")
            ))?;
        }
        if args.print_normalized {
            output.print(&render_toml(&outcome.config)?)?;
        }
    }

    outcome.into_result().map(|_| ()).map_err(CliError::from)
}

fn render_toml(config: &ImageConfig) -> CliResult<String> {
    toml::to_string_pretty(config).map_err(|e| {
        CliError::Core(EcsImageError::Internal {
            message: format!("failed to serialise normalized configuration: {e}"),
        })
    })
}

// ── tests ─────────────────────────────────────────────────────────────────────
