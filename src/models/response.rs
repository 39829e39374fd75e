//! Raw PSI snapshot decoding
//!
//! The wire schema mirrors the upstream air-quality API payload: a
//! `region_metadata` collection of named label locations and an `items`
//! collection of time-bucketed readings keyed by metric and region.
//! Decoding is all-or-nothing: either the whole payload conforms and a fully
//! populated [`PsiResponse`] is returned, or a
//! [`HazewatchError::MalformedData`] is raised with no partial result.

use serde::Serialize;
use tracing::debug;

use super::{Coordinate, Reading, RegionMetadata, SubIndex};
use crate::error::HazewatchError;

/// Region key carrying the territory-wide aggregate in each metric map
const NATIONAL: &str = "national";

/// A fully decoded air-quality telemetry snapshot
#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct PsiResponse {
    /// Known monitoring regions and their label locations
    pub region_metadata: Vec<RegionMetadata>,
    /// Readings in the response's own ordering; the last one is current
    pub items: Vec<Reading>,
}

impl PsiResponse {
    /// Decode a raw snapshot payload.
    ///
    /// Fails with [`HazewatchError::MalformedData`] on missing required
    /// fields, wrong field types (including negative index values), an
    /// unparseable timestamp, or a missing national entry. Pure
    /// deserialization; no side effects.
    pub fn parse(bytes: &[u8]) -> Result<Self, HazewatchError> {
        let raw: wire::Snapshot = serde_json::from_slice(bytes)?;
        let response = Self::from_wire(raw)?;
        debug!(
            regions = response.region_metadata.len(),
            items = response.items.len(),
            "decoded PSI snapshot"
        );
        Ok(response)
    }

    /// The reading designated as current: the last in the response's own
    /// ordering. `None` when the snapshot carries no readings.
    #[must_use]
    pub fn current_reading(&self) -> Option<&Reading> {
        self.items.last()
    }

    fn from_wire(raw: wire::Snapshot) -> Result<Self, HazewatchError> {
        let region_metadata = raw
            .region_metadata
            .into_iter()
            .map(|metadata| RegionMetadata {
                name: metadata.name,
                location: Coordinate::new(
                    metadata.label_location.latitude,
                    metadata.label_location.longitude,
                ),
            })
            .collect();

        let items = raw
            .items
            .into_iter()
            .map(reading_from_wire)
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Self {
            region_metadata,
            items,
        })
    }
}

fn reading_from_wire(item: wire::Item) -> Result<Reading, HazewatchError> {
    let mut psi = item.readings.psi_twenty_four_hourly;
    let mut pm25 = item.readings.pm25_one_hourly;

    let national = SubIndex {
        psi_twenty_four_hourly: psi.remove(NATIONAL).ok_or_else(|| {
            HazewatchError::malformed_data("missing national entry in psi_twenty_four_hourly")
        })?,
        pm25_hourly: pm25.remove(NATIONAL).ok_or_else(|| {
            HazewatchError::malformed_data("missing national entry in pm25_one_hourly")
        })?,
    };

    // Intersection join across the two metric maps; a region missing from
    // either map is dropped, not an error. BTreeMap iteration keeps the
    // resulting region order alphabetical.
    let regions = psi
        .into_iter()
        .filter_map(|(name, psi_value)| {
            pm25.get(&name).map(|&pm25_value| {
                (
                    name,
                    SubIndex {
                        psi_twenty_four_hourly: psi_value,
                        pm25_hourly: pm25_value,
                    },
                )
            })
        })
        .collect();

    Ok(Reading {
        timestamp: item.timestamp,
        national,
        regions,
    })
}

/// Wire structures for the upstream snapshot payload
mod wire {
    use std::collections::BTreeMap;

    use chrono::{DateTime, FixedOffset};
    use serde::Deserialize;

    #[derive(Debug, Deserialize)]
    pub struct Snapshot {
        pub region_metadata: Vec<RegionMetadata>,
        pub items: Vec<Item>,
    }

    #[derive(Debug, Deserialize)]
    pub struct RegionMetadata {
        pub name: String,
        pub label_location: LabelLocation,
    }

    #[derive(Debug, Deserialize)]
    pub struct LabelLocation {
        pub latitude: f64,
        pub longitude: f64,
    }

    #[derive(Debug, Deserialize)]
    pub struct Item {
        pub timestamp: DateTime<FixedOffset>,
        pub readings: Readings,
    }

    /// Metric name to region-value map. Values are decoded unsigned, so a
    /// negative index is rejected at this stage.
    #[derive(Debug, Deserialize)]
    pub struct Readings {
        pub psi_twenty_four_hourly: BTreeMap<String, u32>,
        pub pm25_one_hourly: BTreeMap<String, u32>,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn payload(items: &str) -> String {
        format!(
            r#"{{
                "region_metadata": [
                    {{"name": "east", "label_location": {{"latitude": 1.35735, "longitude": 103.94}}}},
                    {{"name": "west", "label_location": {{"latitude": 1.35735, "longitude": 103.7}}}}
                ],
                "items": [{items}]
            }}"#
        )
    }

    const VALID_ITEM: &str = r#"{
        "timestamp": "2019-10-27T23:08:52+08:00",
        "readings": {
            "psi_twenty_four_hourly": {"national": 57, "east": 55, "west": 54},
            "pm25_one_hourly": {"national": 15, "east": 16, "west": 14}
        }
    }"#;

    #[test]
    fn test_parse_valid_payload() {
        let response = PsiResponse::parse(payload(VALID_ITEM).as_bytes()).unwrap();

        assert_eq!(response.region_metadata.len(), 2);
        assert_eq!(response.region_metadata[0].name, "east");

        let reading = response.current_reading().unwrap();
        assert_eq!(reading.national.psi_twenty_four_hourly, 57);
        assert_eq!(reading.national.pm25_hourly, 15);
        assert_eq!(
            reading.regions,
            vec![
                (
                    "east".to_string(),
                    SubIndex {
                        psi_twenty_four_hourly: 55,
                        pm25_hourly: 16
                    }
                ),
                (
                    "west".to_string(),
                    SubIndex {
                        psi_twenty_four_hourly: 54,
                        pm25_hourly: 14
                    }
                ),
            ]
        );
    }

    #[test]
    fn test_parse_empty_items() {
        let response = PsiResponse::parse(payload("").as_bytes()).unwrap();
        assert!(response.items.is_empty());
        assert!(response.current_reading().is_none());
    }

    #[test]
    fn test_parse_rejects_truncated_json() {
        let err = PsiResponse::parse(b"{\"region_metadata\": [").unwrap_err();
        assert!(matches!(err, HazewatchError::MalformedData { .. }));
    }

    #[test]
    fn test_parse_rejects_missing_national_entry() {
        let item = r#"{
            "timestamp": "2019-10-27T23:08:52+08:00",
            "readings": {
                "psi_twenty_four_hourly": {"east": 55},
                "pm25_one_hourly": {"national": 15, "east": 16}
            }
        }"#;
        let err = PsiResponse::parse(payload(item).as_bytes()).unwrap_err();
        assert!(matches!(err, HazewatchError::MalformedData { .. }));
        assert!(err.to_string().contains("psi_twenty_four_hourly"));
    }

    #[test]
    fn test_parse_rejects_negative_index() {
        let item = r#"{
            "timestamp": "2019-10-27T23:08:52+08:00",
            "readings": {
                "psi_twenty_four_hourly": {"national": -3, "east": 55},
                "pm25_one_hourly": {"national": 15, "east": 16}
            }
        }"#;
        let err = PsiResponse::parse(payload(item).as_bytes()).unwrap_err();
        assert!(matches!(err, HazewatchError::MalformedData { .. }));
    }

    #[test]
    fn test_parse_rejects_bad_timestamp() {
        let item = r#"{
            "timestamp": "yesterday evening",
            "readings": {
                "psi_twenty_four_hourly": {"national": 57},
                "pm25_one_hourly": {"national": 15}
            }
        }"#;
        let err = PsiResponse::parse(payload(item).as_bytes()).unwrap_err();
        assert!(matches!(err, HazewatchError::MalformedData { .. }));
    }

    #[test]
    fn test_parse_drops_one_sided_region() {
        // "west" reports PSI but no PM2.5, so it is omitted from the join
        let item = r#"{
            "timestamp": "2019-10-27T23:08:52+08:00",
            "readings": {
                "psi_twenty_four_hourly": {"national": 57, "east": 55, "west": 54},
                "pm25_one_hourly": {"national": 15, "east": 16}
            }
        }"#;
        let response = PsiResponse::parse(payload(item).as_bytes()).unwrap();
        let reading = response.current_reading().unwrap();
        assert_eq!(reading.regions.len(), 1);
        assert_eq!(reading.regions[0].0, "east");
    }

    #[test]
    fn test_current_reading_is_last_item() {
        let earlier = r#"{
            "timestamp": "2019-10-27T22:08:52+08:00",
            "readings": {
                "psi_twenty_four_hourly": {"national": 48},
                "pm25_one_hourly": {"national": 11}
            }
        }"#;
        let items = format!("{earlier},{VALID_ITEM}");
        let response = PsiResponse::parse(payload(&items).as_bytes()).unwrap();
        assert_eq!(response.items.len(), 2);
        assert_eq!(
            response
                .current_reading()
                .unwrap()
                .national
                .psi_twenty_four_hourly,
            57
        );
    }
}
