//! Filesystem-based image configuration loader.
//!
//! Reads a single image configuration from a TOML or JSON file, chosen by
//! extension. Keys use the builder's names:
//!
//! ```toml
//! image_name          = "centos-7-base"
//! image_copy_regions  = ["cn-beijing", "us-west-1"]
//! image_copy_names    = ["centos-7-bj", "centos-7-us"]
//! skip_region_validation = false
//!
//! [image_copy_snapshot_names]
//! cn-beijing = ["snap-root-bj"]
//!
//! [system_disk_mapping]
//! disk_size = 40
//! ```

use std::{fs, path::Path};

use tracing::{debug, instrument};

use ecs_image_core::{
    application::{ApplicationError, ports::ImageConfigSource},
    domain::ImageConfig,
    error::EcsImageResult,
};

/// Supported on-disk formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    Toml,
    Json,
}

impl ConfigFormat {
    /// Pick a format from the file extension (case-insensitive).
    pub fn from_path(path: &Path) -> Option<Self> {
        let ext = path.extension()?.to_str()?.to_ascii_lowercase();
        match ext.as_str() {
            "toml" => Some(Self::Toml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Parse `content` as this format.
    pub fn parse(self, content: &str) -> Result<ImageConfig, String> {
        match self {
            Self::Toml => toml::from_str(content).map_err(|e| e.to_string()),
            Self::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
        }
    }
}

/// Loads image configurations from local files.
#[derive(Debug, Clone, Copy, Default)]
pub struct FileConfigLoader;

impl FileConfigLoader {
    pub fn new() -> Self {
        Self
    }
}

impl ImageConfigSource for FileConfigLoader {
    #[instrument(skip(self), fields(path = %path.display()))]
    fn load(&self, path: &Path) -> EcsImageResult<ImageConfig> {
        let format = ConfigFormat::from_path(path).ok_or_else(|| {
            ApplicationError::UnsupportedFormat {
                path: path.to_path_buf(),
            }
        })?;

        let content = fs::read_to_string(path).map_err(|e| ApplicationError::ConfigLoad {
            path: path.to_path_buf(),
            kind: e.kind(),
            reason: e.to_string(),
        })?;
        let config = format
            .parse(&content)
            .map_err(|reason| ApplicationError::ConfigParse {
                path: path.to_path_buf(),
                reason,
            })?;

        debug!(?format, image = %config.name, "Image configuration loaded");
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use ecs_image_core::error::{EcsImageError, ErrorCategory};
    use tempfile::NamedTempFile;

    use super::*;

    fn temp_with(suffix: &str, content: &str) -> NamedTempFile {
        let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
        file.write_all(content.as_bytes()).unwrap();
        file
    }

    #[test]
    fn format_from_extension() {
        assert_eq!(
            ConfigFormat::from_path(Path::new("a/image.toml")),
            Some(ConfigFormat::Toml)
        );
        assert_eq!(
            ConfigFormat::from_path(Path::new("image.JSON")),
            Some(ConfigFormat::Json)
        );
        assert_eq!(ConfigFormat::from_path(Path::new("image.yaml")), None);
        assert_eq!(ConfigFormat::from_path(Path::new("image")), None);
    }

    #[test]
    fn loads_toml() {
        let file = temp_with(
            ".toml",
            r#"
image_name = "centos-7-base"
image_copy_regions = ["cn-beijing", "cn-beijing"]

[image_copy_snapshot_names]
us-west-1 = ["snap-us"]

[system_disk_mapping]
disk_size = 40
"#,
        );

        let cfg = FileConfigLoader::new().load(file.path()).unwrap();
        assert_eq!(cfg.name, "centos-7-base");
        assert_eq!(cfg.copy_regions, vec!["cn-beijing", "cn-beijing"]);
        assert_eq!(cfg.copy_snapshot_names["us-west-1"], vec!["snap-us"]);
        assert_eq!(cfg.disks.system_disk.size, 40);
    }

    #[test]
    fn loads_json() {
        let file = temp_with(
            ".json",
            r#"{ "image_name": "web", "skip_region_validation": true }"#,
        );
        let cfg = FileConfigLoader::new().load(file.path()).unwrap();
        assert_eq!(cfg.name, "web");
        assert!(cfg.skip_region_validation);
    }

    #[test]
    fn unknown_extension_is_unsupported() {
        let file = temp_with(".yaml", "image_name: web");
        let err = FileConfigLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            EcsImageError::Application(ApplicationError::UnsupportedFormat { .. })
        ));
    }

    #[test]
    fn parse_errors_name_the_file() {
        let file = temp_with(".toml", "image_name = [");
        let err = FileConfigLoader::new().load(file.path()).unwrap_err();
        match err {
            EcsImageError::Application(ApplicationError::ConfigParse { ref path, .. }) => {
                assert_eq!(path, file.path());
            }
            ref other => panic!("unexpected error: {other:?}"),
        }
        // Exists but malformed: a user error, never "not found".
        assert_eq!(err.category(), ErrorCategory::Validation);
    }

    #[test]
    fn malformed_json_is_a_parse_error() {
        let file = temp_with(".json", r#"{"image_name": 7}"#);
        let err = FileConfigLoader::new().load(file.path()).unwrap_err();
        assert!(matches!(
            err,
            EcsImageError::Application(ApplicationError::ConfigParse { .. })
        ));
    }

    #[test]
    fn missing_file_is_not_found() {
        let err = FileConfigLoader::new()
            .load(Path::new("/definitely/not/here.toml"))
            .unwrap_err();
        assert!(matches!(
            err,
            EcsImageError::Application(ApplicationError::ConfigLoad {
                kind: std::io::ErrorKind::NotFound,
                ..
            })
        ));
        assert_eq!(err.category(), ErrorCategory::NotFound);
    }
}
