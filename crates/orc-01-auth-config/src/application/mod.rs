//! # Application Module
//!
//! Loader and cache services.

pub mod loader;
pub mod service;

pub use loader::ConfigLoader;
pub use service::ConfigCache;
