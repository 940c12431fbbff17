//! The image configuration model.
//!
//! Field names on disk follow the builder's historical key names
//! (`image_name`, `image_copy_regions`, ...). Every field except `name` is
//! optional in the source file and defaults to empty / `false`.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

// ── Disk mappings ─────────────────────────────────────────────────────────────

/// A single disk attached to the build instance or carried by the image.
///
/// Pass-through data: nothing here is validated.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskDevice {
    #[serde(rename = "disk_name")]
    pub name: String,
    #[serde(rename = "disk_category")]
    pub category: String,
    #[serde(rename = "disk_size")]
    pub size: u32,
    #[serde(rename = "disk_snapshot_id")]
    pub snapshot_id: String,
    #[serde(rename = "disk_description")]
    pub description: String,
    #[serde(rename = "disk_delete_with_instance")]
    pub delete_with_instance: bool,
    #[serde(rename = "disk_device")]
    pub device: String,
}

/// System disk plus data disks. Flattened into [`ImageConfig`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiskDevices {
    #[serde(rename = "system_disk_mapping")]
    pub system_disk: DiskDevice,
    #[serde(rename = "image_disk_mappings")]
    pub data_disks: Vec<DiskDevice>,
}

// ── Image configuration ──────────────────────────────────────────────────────

/// Everything needed to name, describe, share and copy a machine image.
///
/// `copy_regions` is the only field the validator rewrites: it comes back
/// deduplicated and, unless `skip_region_validation` is set, stripped of
/// unknown regions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ImageConfig {
    #[serde(rename = "image_name")]
    pub name: String,

    #[serde(rename = "image_snapshot_names")]
    pub snapshot_names: Vec<String>,

    #[serde(rename = "image_version")]
    pub version: String,

    #[serde(rename = "image_description")]
    pub description: String,

    #[serde(rename = "image_share_account")]
    pub share_accounts: Vec<String>,

    #[serde(rename = "image_unshare_account")]
    pub unshare_accounts: Vec<String>,

    #[serde(rename = "image_copy_regions")]
    pub copy_regions: Vec<String>,

    #[serde(rename = "image_copy_names")]
    pub copy_names: Vec<String>,

    /// Per-region snapshot name overrides, keyed by region id.
    #[serde(rename = "image_copy_snapshot_names")]
    pub copy_snapshot_names: BTreeMap<String, Vec<String>>,

    #[serde(rename = "image_force_delete")]
    pub force_delete: bool,

    #[serde(rename = "image_force_delete_snapshots")]
    pub force_delete_snapshots: bool,

    #[serde(rename = "image_force_delete_instances")]
    pub force_delete_instances: bool,

    #[serde(rename = "image_ignore_data_disks")]
    pub ignore_data_disks: bool,

    /// Disables the known-region check. Deduplication still happens.
    pub skip_region_validation: bool,

    pub tags: BTreeMap<String, String>,

    #[serde(flatten)]
    pub disks: DiskDevices,
}

impl ImageConfig {
    /// Shorthand for a config with only the image name set.
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}
