//! Shoe recommendation engine built on a Weighted Sum Model, plus the configuration, error, and
//! telemetry plumbing shared by the HTTP service.

pub mod config;
pub mod error;
pub mod recommendation;
pub mod telemetry;
