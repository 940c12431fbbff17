//! Domain layer: the image configuration model and the rules applied to it.
//!
//! Everything here is pure. There is no I/O and no logging; the region
//! catalog reaches the validator as a plain lookup function.

pub mod config;
pub mod error;
pub mod rules;
pub mod validation;

pub use config::{DiskDevice, DiskDevices, ImageConfig};
pub use error::{Violation, ViolationKind, Violations};
pub use rules::{MAX_NAME_LEN, validate_image_name, validate_region, validate_snapshot_name};
pub use validation::DomainValidator;
