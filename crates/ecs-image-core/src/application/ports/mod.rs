//! Application ports (traits) for external dependencies.
//!
//! Ports define what validation needs from the outside world. Adapters in
//! `ecs-image-adapters` implement them.
//!
//! ## Port Types
//!
//! - **Driven (Output) Ports**: Called by application, implemented by infrastructure
//!   - `RegionCatalog`: known-region lookup
//!   - `ImageConfigSource`: reading an image configuration from storage

pub mod output;

pub use output::{ImageConfigSource, RegionCatalog};
