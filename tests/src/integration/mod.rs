//! # Integration Flows
//!
//! Subsystems wired over the in-memory adapters.

pub mod auth_config_flows;
pub mod registration_flows;
