use std::collections::HashSet;

use crate::domain::{
    config::ImageConfig,
    error::{Violation, Violations},
    rules::{validate_image_name, validate_region, validate_snapshot_name},
};

/// Centralized domain validation.
///
/// All image configuration rules are applied from here, in a fixed order:
/// image name, copy names, snapshot names, copy regions, per-region snapshot
/// names. Nothing short-circuits; every violation is collected.
pub struct DomainValidator;

impl DomainValidator {
    /// Validate `config`, normalizing `copy_regions` in place.
    ///
    /// `copy_regions` is replaced with its deduplicated form (first
    /// occurrence wins) and, unless `skip_region_validation` is set, with
    /// unknown regions removed. The rewrite happens whether or not other
    /// violations were found.
    pub fn validate_image_config<F>(config: &mut ImageConfig, is_known_region: F) -> Violations
    where
        F: Fn(&str) -> bool,
    {
        let mut violations = Violations::new();
        let check_regions = !config.skip_region_validation;

        // 1. Image name.
        if config.name.is_empty() {
            violations.push(Violation::MissingRequiredField { field: "image_name" });
        } else {
            violations.extend(validate_image_name(&config.name, "image_name"));
        }

        // 2. Copy names.
        for (index, name) in config.copy_names.iter().enumerate() {
            if name.is_empty() {
                continue;
            }
            violations.extend(validate_image_name(
                name,
                &format!("image_copy_names[{index}]"),
            ));
        }

        // 3. Snapshot names.
        violations.extend(snapshot_list_violations(&config.snapshot_names));

        // 4. Copy regions: dedup, then filter.
        if !config.copy_regions.is_empty() {
            let mut seen = HashSet::with_capacity(config.copy_regions.len());
            let mut kept = Vec::with_capacity(config.copy_regions.len());

            for region in std::mem::take(&mut config.copy_regions) {
                if !seen.insert(region.clone()) {
                    continue;
                }

                if check_regions {
                    if let Err(v) = validate_region(&region, &is_known_region) {
                        violations.push(v);
                        continue;
                    }
                }

                kept.push(region);
            }

            config.copy_regions = kept;
        }

        // 5. Per-region snapshot names.
        for (region, names) in &config.copy_snapshot_names {
            if check_regions {
                if let Err(v) = validate_region(region, &is_known_region) {
                    violations.push(v);
                }
            }
            violations.extend(snapshot_list_violations(names));
        }

        violations
    }
}

// Per-region lists report under the `image_snapshot_names` label too.
fn snapshot_list_violations(names: &[String]) -> Vec<Violation> {
    names
        .iter()
        .enumerate()
        .filter(|(_, name)| !name.is_empty())
        .flat_map(|(index, name)| {
            validate_snapshot_name(name, &format!("image_snapshot_names[{index}]"))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::error::ViolationKind;

    const KNOWN: [&str; 3] = ["cn-hangzhou", "cn-beijing", "us-west-1"];

    fn known(region: &str) -> bool {
        KNOWN.iter().any(|k| *k == region)
    }

    fn regions(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn valid_config_has_no_violations() {
        let mut cfg = ImageConfig::named("centos-7-base");
        cfg.copy_regions = regions(&["cn-beijing"]);
        cfg.copy_names = regions(&["centos-7-base-bj"]);
        cfg.snapshot_names = regions(&["snap-root"]);
        assert!(DomainValidator::validate_image_config(&mut cfg, known).is_empty());
    }

    #[test]
    fn missing_name_does_not_stop_other_checks() {
        let mut cfg = ImageConfig::default();
        cfg.copy_names = regions(&["a"]);
        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert_eq!(
            v.kinds(),
            vec![
                ViolationKind::MissingRequiredField,
                ViolationKind::NameLengthViolation
            ]
        );
    }

    #[test]
    fn copy_names_are_labelled_by_position() {
        let mut cfg = ImageConfig::named("base");
        cfg.copy_names = regions(&["", "ok-name", "x"]);
        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert_eq!(v.len(), 1);
        assert!(v.as_slice()[0].to_string().starts_with("image_copy_names[2] "));
    }

    #[test]
    fn snapshot_index_counts_skipped_entries() {
        let mut cfg = ImageConfig::named("base");
        cfg.snapshot_names = regions(&["", "", "auto-x"]);
        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert_eq!(
            v.as_slice()[0].to_string(),
            "image_snapshot_names[2] can't start with 'auto'"
        );
    }

    #[test]
    fn regions_are_deduplicated_in_order() {
        let mut cfg = ImageConfig::named("base");
        cfg.copy_regions = regions(&["cn-hangzhou", "cn-hangzhou", "us-west-1"]);
        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert!(v.is_empty());
        assert_eq!(cfg.copy_regions, regions(&["cn-hangzhou", "us-west-1"]));
    }

    #[test]
    fn unknown_regions_are_reported_once_and_dropped() {
        let mut cfg = ImageConfig::named("base");
        cfg.copy_regions = regions(&["nowhere", "cn-beijing", "nowhere"]);
        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert_eq!(v.kinds(), vec![ViolationKind::UnknownRegion]);
        assert_eq!(cfg.copy_regions, regions(&["cn-beijing"]));
    }

    #[test]
    fn bypass_keeps_unknown_regions_but_still_dedups() {
        let mut cfg = ImageConfig::named("base");
        cfg.skip_region_validation = true;
        cfg.copy_regions = regions(&["not-a-real-region", "not-a-real-region"]);
        cfg.copy_snapshot_names
            .insert("also-fake".into(), regions(&["snap"]));
        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert!(v.is_empty());
        assert_eq!(cfg.copy_regions, regions(&["not-a-real-region"]));
    }

    #[test]
    fn per_region_snapshot_names_check_key_then_names() {
        let mut cfg = ImageConfig::named("base");
        cfg.copy_snapshot_names
            .insert("atlantis".into(), regions(&["", "auto-1"]));
        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert_eq!(
            v.kinds(),
            vec![
                ViolationKind::UnknownRegion,
                ViolationKind::SnapshotAutoPrefixViolation
            ]
        );
        assert_eq!(
            v.as_slice()[1].to_string(),
            "image_snapshot_names[1] can't start with 'auto'"
        );
    }

    #[test]
    fn rules_run_in_field_order() {
        let mut cfg = ImageConfig::named("x");
        cfg.copy_snapshot_names.insert("bad-key".into(), vec![]);
        cfg.copy_regions = regions(&["bad-region"]);
        cfg.snapshot_names = regions(&["auto"]);
        cfg.copy_names = regions(&["has space"]);

        let v = DomainValidator::validate_image_config(&mut cfg, known);
        assert_eq!(
            v.kinds(),
            vec![
                ViolationKind::NameLengthViolation,
                ViolationKind::NameWhitespaceViolation,
                ViolationKind::SnapshotAutoPrefixViolation,
                ViolationKind::UnknownRegion,
                ViolationKind::UnknownRegion,
            ]
        );
        assert_eq!(
            v.as_slice()[3].to_string(),
            "Not a valid alicloud region: bad-region"
        );
        assert_eq!(
            v.as_slice()[4].to_string(),
            "Not a valid alicloud region: bad-key"
        );
    }

    #[test]
    fn second_pass_is_idempotent() {
        let mut cfg = ImageConfig::named("a b");
        cfg.copy_regions = regions(&["us-west-1", "bogus", "us-west-1"]);

        // First pass normalizes; later passes see nothing left to change.
        DomainValidator::validate_image_config(&mut cfg, known);
        let normalized = cfg.copy_regions.clone();
        assert_eq!(normalized, regions(&["us-west-1"]));

        let second = DomainValidator::validate_image_config(&mut cfg, known);
        let third = DomainValidator::validate_image_config(&mut cfg, known);

        assert_eq!(second, third);
        assert_eq!(cfg.copy_regions, normalized);
        assert_eq!(second.kinds(), vec![ViolationKind::NameWhitespaceViolation]);
    }
}
