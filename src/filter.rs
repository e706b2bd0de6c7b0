//! Selection handling: narrows the metrics table to the rows the sidebar
//! selector asks for, and joins the matching map coordinates.

use std::fmt;

use serde::Serialize;

use crate::dataset::{MetricsRow, Zone, ZoneCoordinate};
use crate::schema;

/// Sidebar selector value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Selection {
    /// The "All" sentinel: no filtering.
    All,
    /// A zone name. Not required to match a known zone.
    Zone(String),
}

impl Selection {
    pub fn parse(value: &str) -> Self {
        if value == schema::selection::ALL {
            Selection::All
        } else {
            Selection::Zone(value.to_string())
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            Selection::All => schema::selection::ALL,
            Selection::Zone(name) => name,
        }
    }

    /// True for "All" and for names of known zones.
    pub fn is_known(&self) -> bool {
        match self {
            Selection::All => true,
            Selection::Zone(name) => Zone::from_name(name).is_some(),
        }
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One bubble on the map: coordinates joined with the filtered audience.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapPoint {
    pub zone: Zone,
    pub latitude: f64,
    pub longitude: f64,
    pub total_audience: u64,
}

/// Rows matching `selection`, in their original order.
///
/// An unknown zone name yields an empty vector.
pub fn filter(rows: &[MetricsRow], selection: &Selection) -> Vec<MetricsRow> {
    match selection {
        Selection::All => rows.to_vec(),
        Selection::Zone(name) => rows
            .iter()
            .filter(|r| r.zone.as_str() == name.as_str())
            .cloned()
            .collect(),
    }
}

/// Join filtered rows with their coordinates, keeping the row order.
pub fn map_points(rows: &[MetricsRow], coordinates: &[ZoneCoordinate]) -> Vec<MapPoint> {
    rows.iter()
        .filter_map(|r| {
            let c = coordinates.iter().find(|c| c.zone == r.zone)?;
            Some(MapPoint {
                zone: r.zone,
                latitude: c.latitude,
                longitude: c.longitude,
                total_audience: r.total_target_audience,
            })
        })
        .collect()
}

/// "All" followed by every zone name in dataset order.
pub fn selector_options(rows: &[MetricsRow]) -> Vec<String> {
    std::iter::once(schema::selection::ALL.to_string())
        .chain(rows.iter().map(|r| r.zone.as_str().to_string()))
        .collect()
}
