// ============================================================================
// domain/error.rs - VALIDATION VIOLATIONS
// ============================================================================

use std::fmt;

use serde::Serialize;
use thiserror::Error;

/// One broken rule found while validating an image configuration.
///
/// The `Display` text is the message users (and downstream tooling) see, so
/// it must stay stable. Use [`Violation::kind`] to branch on the rule.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Violation {
    #[error("{field} must be specified")]
    MissingRequiredField { field: &'static str },

    #[error("{field} must less than 128 letters and more than 1 letters")]
    NameLength { field: String },

    #[error("{field} can't start with 'http://' or 'https://'")]
    NameUrlPrefix { field: String },

    // Reports the offending name rather than the field label.
    #[error("{name} can't include spaces")]
    NameWhitespace { name: String },

    #[error("{field} can't start with 'auto'")]
    SnapshotAutoPrefix { field: String },

    #[error("Not a valid alicloud region: {region}")]
    UnknownRegion { region: String },
}

/// Stable tag for each [`Violation`] variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ViolationKind {
    MissingRequiredField,
    NameLengthViolation,
    NameUrlPrefixViolation,
    NameWhitespaceViolation,
    SnapshotAutoPrefixViolation,
    UnknownRegion,
}

impl ViolationKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::MissingRequiredField => "missing_required_field",
            Self::NameLengthViolation => "name_length_violation",
            Self::NameUrlPrefixViolation => "name_url_prefix_violation",
            Self::NameWhitespaceViolation => "name_whitespace_violation",
            Self::SnapshotAutoPrefixViolation => "snapshot_auto_prefix_violation",
            Self::UnknownRegion => "unknown_region",
        }
    }
}

impl fmt::Display for ViolationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Violation {
    pub const fn kind(&self) -> ViolationKind {
        match self {
            Self::MissingRequiredField { .. } => ViolationKind::MissingRequiredField,
            Self::NameLength { .. } => ViolationKind::NameLengthViolation,
            Self::NameUrlPrefix { .. } => ViolationKind::NameUrlPrefixViolation,
            Self::NameWhitespace { .. } => ViolationKind::NameWhitespaceViolation,
            Self::SnapshotAutoPrefix { .. } => ViolationKind::SnapshotAutoPrefixViolation,
            Self::UnknownRegion { .. } => ViolationKind::UnknownRegion,
        }
    }

    /// Get a user-actionable hint for fixing this violation.
    pub fn suggestion(&self) -> String {
        match self {
            Self::MissingRequiredField { field } => format!("Set '{field}' in the configuration"),
            Self::NameLength { .. } => "Use between 2 and 128 characters".into(),
            Self::NameUrlPrefix { .. } => "Remove the URL scheme from the name".into(),
            Self::NameWhitespace { .. } => {
                "Replace spaces with '-' or '_' (e.g. my-image-name)".into()
            }
            Self::SnapshotAutoPrefix { .. } => {
                "Names starting with 'auto' are reserved for automatic snapshots".into()
            }
            Self::UnknownRegion { .. } => {
                "Run 'ecs-image regions' to list known regions, or set skip_region_validation"
                    .into()
            }
        }
    }
}

// ── Violations ────────────────────────────────────────────────────────────────

/// Ordered collection of every violation found in one validation pass.
///
/// Order is the order the rules ran in. An empty collection means the
/// configuration is valid.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Violations(Vec<Violation>);

impl Violations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, violation: Violation) {
        self.0.push(violation);
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Violation> {
        self.0.iter()
    }

    /// Kinds in report order.
    pub fn kinds(&self) -> Vec<ViolationKind> {
        self.0.iter().map(Violation::kind).collect()
    }

    /// Number of violations of the given kind.
    pub fn count(&self, kind: ViolationKind) -> usize {
        self.0.iter().filter(|v| v.kind() == kind).count()
    }

    pub fn as_slice(&self) -> &[Violation] {
        &self.0
    }

    pub fn into_vec(self) -> Vec<Violation> {
        self.0
    }
}

impl Extend<Violation> for Violations {
    fn extend<T: IntoIterator<Item = Violation>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}

impl FromIterator<Violation> for Violations {
    fn from_iter<T: IntoIterator<Item = Violation>>(iter: T) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for Violations {
    type Item = Violation;
    type IntoIter = std::vec::IntoIter<Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a Violations {
    type Item = &'a Violation;
    type IntoIter = std::slice::Iter<'a, Violation>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for Violations {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.0.len() {
            0 => f.write_str("no violations"),
            1 => write!(f, "1 error occurred:\n\t* {}", self.0[0]),
            n => {
                write!(f, "{n} errors occurred:")?;
                for v in &self.0 {
                    write!(f, "\n\t* {v}")?;
                }
                Ok(())
            }
        }
    }
}

impl std::error::Error for Violations {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_match_reported_text() {
        assert_eq!(
            Violation::MissingRequiredField { field: "image_name" }.to_string(),
            "image_name must be specified"
        );
        assert_eq!(
            Violation::NameLength { field: "image_copy_names[2]".into() }.to_string(),
            "image_copy_names[2] must less than 128 letters and more than 1 letters"
        );
        assert_eq!(
            Violation::NameWhitespace { name: "a b".into() }.to_string(),
            "a b can't include spaces"
        );
        assert_eq!(
            Violation::UnknownRegion { region: "mars-1".into() }.to_string(),
            "Not a valid alicloud region: mars-1"
        );
    }

    #[test]
    fn kind_tags_are_stable() {
        let v = Violation::SnapshotAutoPrefix { field: "x".into() };
        assert_eq!(v.kind(), ViolationKind::SnapshotAutoPrefixViolation);
        assert_eq!(v.kind().as_str(), "snapshot_auto_prefix_violation");
    }

    #[test]
    fn display_lists_every_violation() {
        let all: Violations = vec![
            Violation::MissingRequiredField { field: "image_name" },
            Violation::UnknownRegion { region: "nowhere".into() },
        ]
        .into_iter()
        .collect();

        let s = all.to_string();
        assert!(s.starts_with("2 errors occurred:"));
        assert!(s.contains("image_name must be specified"));
        assert!(s.contains("nowhere"));
    }

    #[test]
    fn count_by_kind() {
        let mut all = Violations::new();
        all.push(Violation::UnknownRegion { region: "a".into() });
        all.push(Violation::UnknownRegion { region: "b".into() });
        all.push(Violation::NameWhitespace { name: "c d".into() });
        assert_eq!(all.count(ViolationKind::UnknownRegion), 2);
        assert_eq!(all.count(ViolationKind::NameLengthViolation), 0);
        assert_eq!(all.len(), 3);
    }
}
