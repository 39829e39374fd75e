//! Data models for PSI snapshots
//!
//! This module contains the core domain models organized by concern:
//! - Region: monitoring zone names and their fixed coordinates
//! - Reading: one time-bucketed telemetry record
//! - Response: the decoded snapshot and its parsing contract
//! - Quality: air-quality classification and outdoor-activity advisories

pub mod quality;
pub mod reading;
pub mod region;
pub mod response;

// Re-export all public types for convenient access
pub use quality::{AirQuality, OutdoorActivityAdvise};
pub use reading::{Reading, SubIndex};
pub use region::{Coordinate, RegionMetadata};
pub use response::PsiResponse;
