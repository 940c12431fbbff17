//! Validation Service - runs the image configuration rules.
//!
//! Wires the pure `DomainValidator` to an injected `RegionCatalog` and hands
//! back the normalized configuration together with every violation found.

use std::path::Path;

use tracing::{debug, info, instrument, warn};

use crate::{
    application::ports::{ImageConfigSource, RegionCatalog},
    domain::{DomainValidator, ImageConfig, Violations},
    error::{EcsImageError, EcsImageResult},
};

/// Result of one validation pass.
///
/// `config` is the input with `copy_regions` normalized; it is returned even
/// when `violations` is non-empty.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidationOutcome {
    pub config: ImageConfig,
    pub violations: Violations,
}

impl ValidationOutcome {
    pub fn is_valid(&self) -> bool {
        self.violations.is_empty()
    }

    /// The normalized config if valid, otherwise every violation.
    pub fn into_result(self) -> EcsImageResult<ImageConfig> {
        if self.violations.is_empty() {
            Ok(self.config)
        } else {
            Err(EcsImageError::Invalid(self.violations))
        }
    }
}

/// Service for validating image configurations.
pub struct ValidationService {
    catalog: Box<dyn RegionCatalog>,
    skip_region_validation: bool,
}

impl ValidationService {
    /// Create a new validation service backed by `catalog`.
    pub fn new(catalog: Box<dyn RegionCatalog>) -> Self {
        Self {
            catalog,
            skip_region_validation: false,
        }
    }

    /// Treat every region as known, regardless of the config's own flag.
    pub fn skip_region_validation(mut self, skip: bool) -> Self {
        self.skip_region_validation = skip;
        self
    }

    /// Catalog lookup honouring the service-level bypass.
    pub fn is_known_region(&self, region: &str) -> bool {
        self.skip_region_validation || self.catalog.is_known_region(region)
    }

    /// All regions the backing catalog knows about.
    pub fn known_regions(&self) -> EcsImageResult<Vec<String>> {
        self.catalog.regions()
    }

    /// Validate `config`, returning it normalized alongside the violations.
    #[instrument(skip_all, fields(image = %config.name))]
    pub fn validate(&self, mut config: ImageConfig) -> ValidationOutcome {
        let violations = self.validate_in_place(&mut config);
        ValidationOutcome { config, violations }
    }

    /// Validate `config`, rewriting its `copy_regions` in place.
    pub fn validate_in_place(&self, config: &mut ImageConfig) -> Violations {
        debug!(
            copy_names = config.copy_names.len(),
            snapshot_names = config.snapshot_names.len(),
            copy_regions = config.copy_regions.len(),
            region_overrides = config.copy_snapshot_names.len(),
            skip_regions = config.skip_region_validation || self.skip_region_validation,
            "Validating image configuration"
        );

        let before = config.copy_regions.len();
        let violations =
            DomainValidator::validate_image_config(config, |r| self.is_known_region(r));

        if config.copy_regions.len() != before {
            debug!(
                before,
                after = config.copy_regions.len(),
                "Copy regions normalized"
            );
        }

        if violations.is_empty() {
            info!("Image configuration is valid");
        } else {
            warn!(count = violations.len(), "Image configuration has violations");
            for v in &violations {
                debug!(kind = %v.kind(), "{v}");
            }
        }

        violations
    }

    /// Load a configuration through `source` and validate it.
    ///
    /// Load failures are errors; rule violations are reported in the outcome.
    #[instrument(skip(self, source), fields(path = %path.display()))]
    pub fn load_and_validate(
        &self,
        source: &dyn ImageConfigSource,
        path: &Path,
    ) -> EcsImageResult<ValidationOutcome> {
        let config = source.load(path)?;
        Ok(self.validate(config))
    }
}
