//! Leaf validation rules: image names, snapshot names, regions.
//!
//! Each rule checks one value and returns what it found wrong. None of them
//! stop at the first problem: a name that is too short *and* contains a space
//! yields two violations.
//!
//! # Domain purity
//!
//! No `tracing` here. The region rule takes its catalog lookup as a closure so
//! this module stays free of ports.

use crate::domain::error::Violation;

/// Names must be longer than this many bytes.
pub const MIN_NAME_LEN_EXCLUSIVE: usize = 1;
/// Names may be at most this many bytes.
pub const MAX_NAME_LEN: usize = 128;

const URL_PREFIXES: [&str; 2] = ["http://", "https://"];
const RESERVED_SNAPSHOT_PREFIX: &str = "auto";

/// Check an image name (or copy name) against the naming rules.
///
/// `field` labels the value in the messages, e.g. `image_copy_names[2]`.
/// Length is measured in bytes, so `1 < len <= 128`.
pub fn validate_image_name(name: &str, field: &str) -> Vec<Violation> {
    let mut violations = Vec::new();

    if name.len() <= MIN_NAME_LEN_EXCLUSIVE || name.len() > MAX_NAME_LEN {
        violations.push(Violation::NameLength {
            field: field.to_owned(),
        });
    }

    if has_url_prefix(name) {
        violations.push(Violation::NameUrlPrefix {
            field: field.to_owned(),
        });
    }

    if name.chars().any(char::is_whitespace) {
        violations.push(Violation::NameWhitespace {
            name: name.to_owned(),
        });
    }

    violations
}

/// [`validate_image_name`] plus the reserved `auto` prefix.
pub fn validate_snapshot_name(name: &str, field: &str) -> Vec<Violation> {
    let mut violations = validate_image_name(name, field);

    if name.starts_with(RESERVED_SNAPSHOT_PREFIX) {
        violations.push(Violation::SnapshotAutoPrefix {
            field: field.to_owned(),
        });
    }

    violations
}

/// Check a region id against a catalog lookup.
///
/// The match is exact and case-sensitive; `is_known` decides membership.
pub fn validate_region<F>(region: &str, is_known: F) -> Result<(), Violation>
where
    F: FnOnce(&str) -> bool,
{
    if is_known(region) {
        Ok(())
    } else {
        Err(Violation::UnknownRegion {
            region: region.to_owned(),
        })
    }
}

fn has_url_prefix(name: &str) -> bool {
    URL_PREFIXES.iter().any(|prefix| name.starts_with(prefix))
}
