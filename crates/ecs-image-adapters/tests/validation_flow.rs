//! End-to-end: file on disk -> loader -> validation service -> built-in catalog.

use std::fs;

use ecs_image_adapters::{FileConfigLoader, InMemoryRegionCatalog};
use ecs_image_core::prelude::*;
use tempfile::TempDir;

fn service() -> ValidationService {
    ValidationService::new(Box::new(InMemoryRegionCatalog::with_builtin().unwrap()))
}

#[test]
fn valid_file_normalizes_regions() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("image.toml");
    fs::write(
        &path,
        r#"
image_name = "ubuntu-22-golden"
image_copy_regions = ["cn-hangzhou", "cn-hangzhou", "us-west-1"]
image_copy_names = ["ubuntu-22-golden-hz", ""]
"#,
    )
    .unwrap();

    let outcome = service()
        .load_and_validate(&FileConfigLoader::new(), &path)
        .unwrap();

    assert!(outcome.is_valid(), "{}", outcome.violations);
    assert_eq!(outcome.config.copy_regions, vec!["cn-hangzhou", "us-west-1"]);
}

#[test]
fn invalid_file_reports_everything() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("image.json");
    fs::write(
        &path,
        r#"{
            "image_name": "",
            "image_copy_regions": ["bad region", "bad region"],
            "image_snapshot_names": ["autosnap"]
        }"#,
    )
    .unwrap();

    let outcome = service()
        .load_and_validate(&FileConfigLoader::new(), &path)
        .unwrap();

    assert_eq!(
        outcome.violations.kinds(),
        vec![
            ViolationKind::MissingRequiredField,
            ViolationKind::SnapshotAutoPrefixViolation,
            ViolationKind::UnknownRegion,
        ]
    );
    assert!(outcome.config.copy_regions.is_empty());
}

#[test]
fn extra_regions_extend_the_catalog() {
    let catalog = InMemoryRegionCatalog::with_builtin().unwrap();
    catalog.extend(["cn-wulanchabu"]).unwrap();
    let service = ValidationService::new(Box::new(catalog));

    let mut cfg = ImageConfig::named("base");
    cfg.copy_regions = vec!["cn-wulanchabu".into()];
    assert!(service.validate(cfg).is_valid());
}
