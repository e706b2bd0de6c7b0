//! Canonical sensitization dataset.
//!
//! Both tables are fixed constants. [`Dataset::build`] assembles them and
//! validates them once, so a bad constant surfaces as a construction error
//! rather than as a broken chart.

use std::collections::HashSet;
use std::fmt;

use serde::Serialize;

use crate::error::{DashboardError, Result};

/// Nigerian geopolitical zone, the only grouping key of the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Zone {
    #[serde(rename = "North Central")]
    NorthCentral,
    #[serde(rename = "North East")]
    NorthEast,
    #[serde(rename = "North West")]
    NorthWest,
    #[serde(rename = "South East")]
    SouthEast,
    #[serde(rename = "South West")]
    SouthWest,
    #[serde(rename = "South South")]
    SouthSouth,
}

impl Zone {
    /// All zones in dataset order.
    pub const ALL: [Zone; 6] = [
        Zone::NorthCentral,
        Zone::NorthEast,
        Zone::NorthWest,
        Zone::SouthEast,
        Zone::SouthWest,
        Zone::SouthSouth,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Zone::NorthCentral => "North Central",
            Zone::NorthEast => "North East",
            Zone::NorthWest => "North West",
            Zone::SouthEast => "South East",
            Zone::SouthWest => "South West",
            Zone::SouthSouth => "South South",
        }
    }

    /// Exact, case-sensitive lookup by display name.
    pub fn from_name(name: &str) -> Option<Zone> {
        Self::ALL.into_iter().find(|z| z.as_str() == name)
    }
}

impl fmt::Display for Zone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outreach metrics for one zone.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsRow {
    pub zone: Zone,
    pub total_target_audience: u64,
    pub workshops_conducted: u64,
    pub campus_roadshows: u64,
    pub tv_radio_campaigns: u64,
    pub social_media_reach: u64,
    pub sms_campaigns: u64,
    pub ngo_partnerships: u64,
    pub application_conversion_rate_pct: f64,
}

/// Map anchor for one zone, in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct ZoneCoordinate {
    pub zone: Zone,
    pub latitude: f64,
    pub longitude: f64,
}

// ── Constants ───────────────────────────────────────────────────────────────

const fn row(
    zone: Zone,
    counts: [u64; 7],
    application_conversion_rate_pct: f64,
) -> MetricsRow {
    MetricsRow {
        zone,
        total_target_audience: counts[0],
        workshops_conducted: counts[1],
        campus_roadshows: counts[2],
        tv_radio_campaigns: counts[3],
        social_media_reach: counts[4],
        sms_campaigns: counts[5],
        ngo_partnerships: counts[6],
        application_conversion_rate_pct,
    }
}

// audience, workshops, roadshows, tv/radio, social media, sms, ngo
const METRICS: [MetricsRow; 6] = [
    row(Zone::NorthCentral, [50000, 20, 10, 5, 100000, 20000, 8], 12.0),
    row(Zone::NorthEast, [45000, 18, 12, 6, 95000, 15000, 10], 10.0),
    row(Zone::NorthWest, [60000, 25, 15, 7, 110000, 25000, 12], 15.0),
    row(Zone::SouthEast, [55000, 22, 14, 8, 105000, 22000, 14], 13.0),
    row(Zone::SouthWest, [70000, 30, 18, 9, 130000, 28000, 16], 18.0),
    row(Zone::SouthSouth, [65000, 27, 20, 10, 120000, 26000, 18], 16.0),
];

const COORDINATES: [ZoneCoordinate; 6] = [
    ZoneCoordinate { zone: Zone::NorthCentral, latitude: 9.082, longitude: 8.675 },
    ZoneCoordinate { zone: Zone::NorthEast, latitude: 11.823, longitude: 13.151 },
    ZoneCoordinate { zone: Zone::NorthWest, latitude: 12.002, longitude: 8.500 },
    ZoneCoordinate { zone: Zone::SouthEast, latitude: 6.524, longitude: 7.495 },
    ZoneCoordinate { zone: Zone::SouthWest, latitude: 7.377, longitude: 3.947 },
    ZoneCoordinate { zone: Zone::SouthSouth, latitude: 4.815, longitude: 7.049 },
];

/// Metrics rows in dataset order.
pub fn build_metrics() -> Vec<MetricsRow> {
    METRICS.to_vec()
}

/// Zone coordinates in dataset order.
pub fn build_coordinates() -> Vec<ZoneCoordinate> {
    COORDINATES.to_vec()
}

// ── Dataset ─────────────────────────────────────────────────────────────────

/// Validated, immutable pair of metrics and coordinate tables.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    metrics: Vec<MetricsRow>,
    coordinates: Vec<ZoneCoordinate>,
}

impl Dataset {
    /// Build the canonical dataset from the fixed constants.
    pub fn build() -> Result<Self> {
        Self::from_parts(build_metrics(), build_coordinates())
    }

    /// Validate and wrap arbitrary tables.
    pub fn from_parts(metrics: Vec<MetricsRow>, coordinates: Vec<ZoneCoordinate>) -> Result<Self> {
        let dataset = Self {
            metrics,
            coordinates,
        };
        dataset.validate()?;
        Ok(dataset)
    }

    pub fn metrics(&self) -> &[MetricsRow] {
        &self.metrics
    }

    pub fn coordinates(&self) -> &[ZoneCoordinate] {
        &self.coordinates
    }

    fn validate(&self) -> Result<()> {
        let mut metric_zones = HashSet::new();
        for r in &self.metrics {
            if !metric_zones.insert(r.zone) {
                return Err(DashboardError::Validation(format!(
                    "duplicate metrics row for zone '{}'",
                    r.zone
                )));
            }
            let rate = r.application_conversion_rate_pct;
            if !rate.is_finite() || !(0.0..=100.0).contains(&rate) {
                return Err(DashboardError::Validation(format!(
                    "zone '{}': application_conversion_rate_pct {} outside [0, 100]",
                    r.zone, rate
                )));
            }
        }

        let mut coordinate_zones = HashSet::new();
        for c in &self.coordinates {
            if !coordinate_zones.insert(c.zone) {
                return Err(DashboardError::Validation(format!(
                    "duplicate coordinate for zone '{}'",
                    c.zone
                )));
            }
            if !c.latitude.is_finite() || !(-90.0..=90.0).contains(&c.latitude) {
                return Err(DashboardError::Validation(format!(
                    "zone '{}': latitude {} outside [-90, 90]",
                    c.zone, c.latitude
                )));
            }
            if !c.longitude.is_finite() || !(-180.0..=180.0).contains(&c.longitude) {
                return Err(DashboardError::Validation(format!(
                    "zone '{}': longitude {} outside [-180, 180]",
                    c.zone, c.longitude
                )));
            }
        }

        // Walk in dataset order so the reported zone is deterministic.
        if let Some(r) = self.metrics.iter().find(|r| !coordinate_zones.contains(&r.zone)) {
            return Err(DashboardError::Validation(format!(
                "zone '{}' has metrics but no coordinate",
                r.zone
            )));
        }
        if let Some(c) = self.coordinates.iter().find(|c| !metric_zones.contains(&c.zone)) {
            return Err(DashboardError::Validation(format!(
                "zone '{}' has a coordinate but no metrics",
                c.zone
            )));
        }
        Ok(())
    }
}
