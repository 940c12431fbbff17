//! Region catalog adapters.

pub mod memory;

pub use memory::InMemoryRegionCatalog;
