//! Chart-ready projections of the filtered metrics.
//!
//! Each projection is a pure function of the filtered rows (the map also takes
//! the joined [`MapPoint`]s). Empty input always yields an empty chart, never
//! an error, so one degenerate chart cannot block the others.

use serde::Serialize;

use crate::config::ChartConfig;
use crate::dataset::{MetricsRow, Zone};
use crate::filter::MapPoint;
use crate::schema;

/// Plotly's default qualitative palette, indexed by zone order so a zone keeps
/// its colour whatever the selection.
const ZONE_PALETTE: [&str; 6] = [
    "#636EFA", "#EF553B", "#00CC96", "#AB63FA", "#FFA15A", "#19D3F3",
];

/// Static recommendations shown under the charts.
pub const INSIGHTS: [&str; 3] = [
    "Focus more on high-engagement zones (e.g., South West, North West).",
    "Increase radio and TV outreach in underperforming areas.",
    "Leverage NGO partnerships for rural penetration.",
];

pub fn zone_color(zone: Zone) -> &'static str {
    let idx = Zone::ALL.iter().position(|z| *z == zone).unwrap_or(0);
    ZONE_PALETTE[idx % ZONE_PALETTE.len()]
}

// ── Chart specs ─────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BarChart {
    pub title: String,
    pub x_label: &'static str,
    pub y_label: &'static str,
    pub bars: Vec<Bar>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Bar {
    pub zone: Zone,
    pub value: u64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineChart {
    pub title: String,
    pub x: Vec<Zone>,
    pub series: Vec<LineSeries>,
    /// Draw a marker at every data point.
    pub markers: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct LineSeries {
    pub name: &'static str,
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieChart {
    pub title: String,
    pub slices: Vec<PieSlice>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PieSlice {
    pub zone: Zone,
    pub value: u64,
    /// Fraction of the pie in [0, 1].
    pub share: f64,
    pub color: &'static str,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Heatmap {
    pub title: String,
    /// Columns, one per filtered zone.
    pub x: Vec<Zone>,
    /// Rows, always the six activity labels.
    pub y: Vec<&'static str>,
    /// `z[row][column]`.
    pub z: Vec<Vec<u64>>,
    pub colorscale: String,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapChart {
    pub title: String,
    pub style: String,
    pub zoom: f64,
    /// Mean of the marker positions as `(lat, lon)`; `None` without markers.
    pub center: Option<(f64, f64)>,
    pub markers: Vec<MapMarker>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MapMarker {
    pub lat: f64,
    pub lon: f64,
    /// Drives the marker size.
    pub audience: u64,
    pub zone: Zone,
}

impl BarChart {
    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn pairs(&self) -> Vec<(Zone, u64)> {
        self.bars.iter().map(|b| (b.zone, b.value)).collect()
    }
}

impl LineChart {
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }
}

impl PieChart {
    pub fn is_empty(&self) -> bool {
        self.slices.is_empty()
    }
}

impl Heatmap {
    pub fn is_empty(&self) -> bool {
        self.x.is_empty()
    }

    /// `(rows, columns)` of the value matrix.
    pub fn shape(&self) -> (usize, usize) {
        (self.z.len(), self.x.len())
    }

    pub fn column(&self, zone: Zone) -> Option<Vec<u64>> {
        let idx = self.x.iter().position(|z| *z == zone)?;
        Some(self.z.iter().map(|row| row[idx]).collect())
    }
}

impl MapChart {
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }
}

// ── Projections ─────────────────────────────────────────────────────────────

pub fn project_bar(rows: &[MetricsRow], charts: &ChartConfig) -> BarChart {
    BarChart {
        title: charts.bar_title.clone(),
        x_label: schema::metrics::ZONE,
        y_label: schema::metrics::TOTAL_TARGET_AUDIENCE,
        bars: rows
            .iter()
            .map(|r| Bar {
                zone: r.zone,
                value: r.total_target_audience,
                color: zone_color(r.zone),
            })
            .collect(),
    }
}

pub fn project_line(rows: &[MetricsRow], charts: &ChartConfig) -> LineChart {
    LineChart {
        title: charts.line_title.clone(),
        x: rows.iter().map(|r| r.zone).collect(),
        series: vec![
            LineSeries {
                name: schema::line::WORKSHOPS,
                values: rows.iter().map(|r| r.workshops_conducted).collect(),
            },
            LineSeries {
                name: schema::line::ROADSHOWS,
                values: rows.iter().map(|r| r.campus_roadshows).collect(),
            },
        ],
        markers: true,
    }
}

pub fn project_pie(rows: &[MetricsRow], charts: &ChartConfig) -> PieChart {
    let total: u64 = rows.iter().map(|r| r.social_media_reach).sum();
    PieChart {
        title: charts.pie_title.clone(),
        slices: rows
            .iter()
            .map(|r| PieSlice {
                zone: r.zone,
                value: r.social_media_reach,
                share: if total == 0 {
                    0.0
                } else {
                    r.social_media_reach as f64 / total as f64
                },
                color: zone_color(r.zone),
            })
            .collect(),
    }
}

pub fn project_heatmap(rows: &[MetricsRow], charts: &ChartConfig) -> Heatmap {
    // Same order as schema::heatmap::ROWS.
    let fields: [fn(&MetricsRow) -> u64; 6] = [
        |r| r.workshops_conducted,
        |r| r.campus_roadshows,
        |r| r.tv_radio_campaigns,
        |r| r.social_media_reach,
        |r| r.sms_campaigns,
        |r| r.ngo_partnerships,
    ];
    Heatmap {
        title: charts.heatmap_title.clone(),
        x: rows.iter().map(|r| r.zone).collect(),
        y: schema::heatmap::ROWS.to_vec(),
        z: fields
            .iter()
            .map(|field| rows.iter().map(field).collect())
            .collect(),
        colorscale: charts.heatmap_colorscale.clone(),
    }
}

pub fn project_map(points: &[MapPoint], charts: &ChartConfig) -> MapChart {
    let center = if points.is_empty() {
        None
    } else {
        let n = points.len() as f64;
        let lat = points.iter().map(|p| p.latitude).sum::<f64>() / n;
        let lon = points.iter().map(|p| p.longitude).sum::<f64>() / n;
        Some((lat, lon))
    };
    MapChart {
        title: charts.map_title.clone(),
        style: charts.map_style.clone(),
        zoom: charts.map_zoom,
        center,
        markers: points
            .iter()
            .map(|p| MapMarker {
                lat: p.latitude,
                lon: p.longitude,
                audience: p.total_audience,
                zone: p.zone,
            })
            .collect(),
    }
}
