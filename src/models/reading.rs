//! One time-bucketed telemetry record and its display helpers

use chrono::{DateTime, FixedOffset};
use serde::{Deserialize, Serialize};

/// Pollutant sub-indices for one region or the national aggregate
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct SubIndex {
    /// 24-hour Pollutant Standards Index
    pub psi_twenty_four_hourly: u32,
    /// Hourly PM2.5 sub-index
    pub pm25_hourly: u32,
}

/// A single telemetry record for one time bucket
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Reading {
    /// Offset-aware instant the record was published at
    pub timestamp: DateTime<FixedOffset>,
    /// Aggregate reading for the whole territory
    pub national: SubIndex,
    /// Per-region sub-indices, ordered alphabetically by region name
    pub regions: Vec<(String, SubIndex)>,
}

impl Reading {
    /// Human-readable refresh label, e.g. `"Oct 27, 2019 at 11:08 PM"`.
    ///
    /// Rendered in the timestamp's own UTC offset, which is the local offset
    /// of the territory the feed covers.
    #[must_use]
    pub fn refresh_time_label(&self) -> String {
        self.timestamp.format("%b %-d, %Y at %-I:%M %p").to_string()
    }
}
