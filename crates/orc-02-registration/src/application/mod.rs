//! # Application Module
//!
//! Registration service and control proxy resolvers.

pub mod resolver;
pub mod service;

pub use resolver::{SnapshotResolver, TenantScanResolver};
pub use service::RegistrationService;
