//! Region metadata: monitoring zone names and their fixed coordinates

use serde::{Deserialize, Serialize};

/// Geographic coordinate of a monitoring region
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct Coordinate {
    /// Latitude in decimal degrees
    pub latitude: f64,
    /// Longitude in decimal degrees
    pub longitude: f64,
}

impl Coordinate {
    /// Create a new coordinate
    #[must_use]
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Whether this coordinate is the feed's "no real location" sentinel.
    ///
    /// The upstream feed publishes exactly (0, 0) for regions without a
    /// plottable location; such regions are excluded from the index list.
    #[must_use]
    pub fn is_unset(&self) -> bool {
        self.latitude == 0.0 && self.longitude == 0.0
    }

    /// Format coordinate as a display string
    #[must_use]
    pub fn format_coordinates(&self) -> String {
        format!("{:.4}, {:.4}", self.latitude, self.longitude)
    }
}

/// A named monitoring zone with its fixed location
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct RegionMetadata {
    /// Region name as published by the feed (e.g. "east")
    pub name: String,
    /// Label location for map pins
    pub location: Coordinate,
}
