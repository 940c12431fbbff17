//! In-memory region catalog with the built-in region table.

use std::{
    collections::BTreeSet,
    sync::{Arc, PoisonError, RwLock},
};

use tracing::{debug, warn};

use ecs_image_core::{
    application::{ApplicationError, ports::RegionCatalog},
    error::EcsImageResult,
};

use crate::builtin_regions::BUILTIN_REGIONS;

/// Thread-safe in-memory region catalog.
#[derive(Debug, Clone)]
pub struct InMemoryRegionCatalog {
    inner: Arc<RwLock<BTreeSet<String>>>,
}

impl InMemoryRegionCatalog {
    /// Create a new empty catalog.
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(BTreeSet::new())),
        }
    }

    /// Create a catalog with the built-in regions loaded.
    pub fn with_builtin() -> EcsImageResult<Self> {
        let catalog = Self::new();
        catalog.extend(BUILTIN_REGIONS.iter().map(|r| r.id))?;
        Ok(catalog)
    }

    /// Add regions to the catalog. Duplicates and blank ids are ignored.
    pub fn extend<I, S>(&self, regions: I) -> EcsImageResult<()>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut inner = self
            .inner
            .write()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        for region in regions {
            let region = region.into();
            if region.trim().is_empty() {
                warn!("Ignoring blank region id");
                continue;
            }
            if inner.insert(region.clone()) {
                debug!(region = %region, "Region added to catalog");
            }
        }

        Ok(())
    }

    /// Get the number of regions.
    pub fn len(&self) -> usize {
        self.inner.read().map(|r| r.len()).unwrap_or(0)
    }

    /// Check if catalog is empty.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for InMemoryRegionCatalog {
    fn default() -> Self {
        Self::new()
    }
}

impl RegionCatalog for InMemoryRegionCatalog {
    /// A poisoned lock still guards a whole set (writers only insert), so
    /// the lookup recovers the guard instead of reporting a false miss.
    fn is_known_region(&self, region: &str) -> bool {
        let inner = self.inner.read().unwrap_or_else(|poisoned| {
            warn!(region, "Region catalog lock poisoned; reading recovered set");
            PoisonError::into_inner(poisoned)
        });
        inner.contains(region)
    }

    fn regions(&self) -> EcsImageResult<Vec<String>> {
        let inner = self
            .inner
            .read()
            .map_err(|_| ApplicationError::CatalogLockError)?;

        Ok(inner.iter().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builtin_catalog_knows_common_regions() {
        let catalog = InMemoryRegionCatalog::with_builtin().unwrap();
        assert!(catalog.is_known_region("cn-hangzhou"));
        assert!(catalog.is_known_region("us-west-1"));
        assert!(!catalog.is_known_region("not-a-real-region"));
        assert_eq!(catalog.len(), BUILTIN_REGIONS.len());
    }

    #[test]
    fn lookup_is_case_sensitive() {
        let catalog = InMemoryRegionCatalog::with_builtin().unwrap();
        assert!(!catalog.is_known_region("CN-HANGZHOU"));
        assert!(!catalog.is_known_region(" cn-hangzhou"));
    }

    #[test]
    fn extend_adds_new_regions_once() {
        let catalog = InMemoryRegionCatalog::new();
        catalog
            .extend(["eu-south-1", "eu-south-1", "  ", "cn-wulanchabu"])
            .unwrap();
        assert_eq!(catalog.len(), 2);
        assert!(catalog.is_known_region("cn-wulanchabu"));
    }

    #[test]
    fn regions_are_sorted() {
        let catalog = InMemoryRegionCatalog::new();
        catalog.extend(["us-west-1", "cn-beijing", "eu-west-1"]).unwrap();
        assert_eq!(
            catalog.regions().unwrap(),
            vec!["cn-beijing", "eu-west-1", "us-west-1"]
        );
    }

    #[test]
    fn clones_share_state() {
        let a = InMemoryRegionCatalog::new();
        let b = a.clone();
        a.extend(["me-east-1"]).unwrap();
        assert!(b.is_known_region("me-east-1"));
        assert!(!b.is_empty());
    }

    #[test]
    fn poisoned_lock_does_not_hide_known_regions() {
        let catalog = InMemoryRegionCatalog::new();
        catalog.extend(["cn-beijing"]).unwrap();

        let writer = catalog.clone();
        let _ = std::thread::spawn(move || {
            let _guard = writer.inner.write().unwrap();
            panic!("poison the catalog lock");
        })
        .join();

        assert!(catalog.inner.is_poisoned());
        assert!(catalog.is_known_region("cn-beijing"));
        assert!(!catalog.is_known_region("mars-1"));
        // Listing still surfaces the poisoned lock.
        assert!(catalog.regions().is_err());
    }
}
