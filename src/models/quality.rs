//! Air-quality classification bands and outdoor-activity advisories

use std::fmt;

use serde::Serialize;

/// National air-quality category derived from the 24-hour PSI
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum AirQuality {
    Good,
    Moderate,
    Unhealthy,
    VeryUnhealthy,
    Hazardous,
}

/// Ordered PSI bands with inclusive upper bounds, per the NEA Singapore
/// break points. Values past the last band are Hazardous.
const PSI_BANDS: [(u32, AirQuality); 4] = [
    (50, AirQuality::Good),
    (100, AirQuality::Moderate),
    (200, AirQuality::Unhealthy),
    (300, AirQuality::VeryUnhealthy),
];

impl AirQuality {
    /// Classify a 24-hour PSI value.
    ///
    /// Total over all non-negative values: the first band whose upper bound
    /// is not exceeded wins.
    #[must_use]
    pub fn from_psi(psi: u32) -> Self {
        PSI_BANDS
            .iter()
            .find(|(upper_bound, _)| psi <= *upper_bound)
            .map_or(AirQuality::Hazardous, |&(_, quality)| quality)
    }
}

impl fmt::Display for AirQuality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            AirQuality::Good => "Good",
            AirQuality::Moderate => "Moderate",
            AirQuality::Unhealthy => "Unhealthy",
            AirQuality::VeryUnhealthy => "Very unhealthy",
            AirQuality::Hazardous => "Hazardous",
        };
        write!(f, "{label}")
    }
}

/// Outdoor-activity recommendation, a total function of [`AirQuality`]
#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
pub enum OutdoorActivityAdvise {
    Normal,
    Caution,
    Avoid,
}

impl From<AirQuality> for OutdoorActivityAdvise {
    fn from(quality: AirQuality) -> Self {
        match quality {
            AirQuality::Good | AirQuality::Moderate => OutdoorActivityAdvise::Normal,
            AirQuality::Unhealthy => OutdoorActivityAdvise::Caution,
            AirQuality::VeryUnhealthy | AirQuality::Hazardous => OutdoorActivityAdvise::Avoid,
        }
    }
}

impl fmt::Display for OutdoorActivityAdvise {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            OutdoorActivityAdvise::Normal => "Normal outdoor activity",
            OutdoorActivityAdvise::Caution => "Reduce prolonged or strenuous outdoor activity",
            OutdoorActivityAdvise::Avoid => "Avoid outdoor activity",
        };
        write!(f, "{label}")
    }
}
