//! Hazewatch - air-quality snapshot presentation
//!
//! This library decodes raw PSI telemetry snapshots and turns them into
//! view-ready output: geocoded per-region index items, a classified national
//! air-quality summary with an outdoor-activity advisory, and a formatted
//! refresh timestamp.

pub mod config;
pub mod error;
pub mod models;
pub mod presenter;

// Re-export core types for public API
pub use config::HazewatchConfig;
pub use error::HazewatchError;
pub use models::{AirQuality, Coordinate, OutdoorActivityAdvise, PsiResponse, Reading, RegionMetadata, SubIndex};
pub use presenter::{MapPresenter, MapPsiIndexItem, PsiView};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Core result type used throughout the library
pub type Result<T> = std::result::Result<T, HazewatchError>;
