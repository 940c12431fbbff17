//! ecs-image Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for validating an
//! Alicloud ECS image build configuration before anything is built.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │          ecs-image-cli (CLI)            │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │          (ValidationService)            │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │  (RegionCatalog, ImageConfigSource)     │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    ecs-image-adapters (Infrastructure)  │
//! │ (InMemoryRegionCatalog, FileConfigLoader)│
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Domain Layer (Pure Logic)       │
//! │ (ImageConfig, rules, DomainValidator)   │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use ecs_image_core::prelude::*;
//!
//! fn check(catalog: Box<dyn RegionCatalog>) -> EcsImageResult<ImageConfig> {
//!     let mut config = ImageConfig::named("centos-7-base");
//!     config.copy_regions = vec!["cn-beijing".into(), "cn-beijing".into()];
//!
//!     let service = ValidationService::new(catalog);
//!     service.validate(config).into_result()
//! }
//! ```

pub mod domain;

pub mod application;

pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ValidationOutcome, ValidationService,
        ports::{ImageConfigSource, RegionCatalog},
    };
    pub use crate::domain::{
        DiskDevice, DiskDevices, ImageConfig, Violation, ViolationKind, Violations,
    };
    pub use crate::error::{EcsImageError, EcsImageResult};
}
