//! Tabular views of the filtered data as Polars DataFrames.
//!
//! Column names come from [`crate::schema`] so the table matches what the
//! dashboard shows above the charts.

use polars::prelude::*;

use crate::dataset::MetricsRow;
use crate::error::{DashboardError, Result};
use crate::filter::MapPoint;
use crate::schema::{coordinates, metrics};

/// Metrics table, one row per filtered zone.
pub fn metrics_frame(rows: &[MetricsRow]) -> Result<DataFrame> {
    let count = |f: fn(&MetricsRow) -> u64| rows.iter().map(f).collect::<Vec<u64>>();

    let df = df!(
        metrics::ZONE => rows.iter().map(|r| r.zone.as_str()).collect::<Vec<_>>(),
        metrics::TOTAL_TARGET_AUDIENCE => count(|r| r.total_target_audience),
        metrics::WORKSHOPS_CONDUCTED => count(|r| r.workshops_conducted),
        metrics::CAMPUS_ROADSHOWS => count(|r| r.campus_roadshows),
        metrics::TV_RADIO_CAMPAIGNS => count(|r| r.tv_radio_campaigns),
        metrics::SOCIAL_MEDIA_REACH => count(|r| r.social_media_reach),
        metrics::SMS_CAMPAIGNS => count(|r| r.sms_campaigns),
        metrics::NGO_PARTNERSHIPS => count(|r| r.ngo_partnerships),
        metrics::APPLICATION_CONVERSION_RATE => rows
            .iter()
            .map(|r| r.application_conversion_rate_pct)
            .collect::<Vec<f64>>(),
    )?;
    Ok(df)
}

/// Map table: coordinates with the filtered audience per zone.
pub fn map_frame(points: &[MapPoint]) -> Result<DataFrame> {
    let df = df!(
        coordinates::LATITUDE => points.iter().map(|p| p.latitude).collect::<Vec<f64>>(),
        coordinates::LONGITUDE => points.iter().map(|p| p.longitude).collect::<Vec<f64>>(),
        coordinates::ZONE => points.iter().map(|p| p.zone.as_str()).collect::<Vec<_>>(),
        coordinates::TOTAL_AUDIENCE => points.iter().map(|p| p.total_audience).collect::<Vec<u64>>(),
    )?;
    Ok(df)
}

/// Serialize a frame to CSV text with a header row.
pub fn to_csv(df: &mut DataFrame) -> Result<String> {
    let mut buf: Vec<u8> = Vec::new();
    CsvWriter::new(&mut buf)
        .include_header(true)
        .finish(df)?;
    String::from_utf8(buf)
        .map_err(|e| DashboardError::Validation(format!("CSV output is not UTF-8: {e}")))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::{build_coordinates, build_metrics, Zone};
    use crate::filter::map_points;

    #[test]
    fn metrics_frame_has_display_columns() {
        let df = metrics_frame(&build_metrics()).unwrap();
        assert_eq!(df.height(), 6);
        let names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|n| n.to_string())
            .collect();
        assert_eq!(names, metrics::ALL.map(String::from).to_vec());
    }

    #[test]
    fn metrics_frame_values() {
        let df = metrics_frame(&build_metrics()).unwrap();
        let zones = df.column(metrics::ZONE).unwrap().str().unwrap();
        assert_eq!(zones.get(4), Some("South West"));
        let audience = df
            .column(metrics::TOTAL_TARGET_AUDIENCE)
            .unwrap()
            .u64()
            .unwrap();
        assert_eq!(audience.get(4), Some(70000));
    }

    #[test]
    fn empty_rows_give_empty_frame() {
        let df = metrics_frame(&[]).unwrap();
        assert_eq!(df.height(), 0);
        assert_eq!(df.width(), 9);
    }

    #[test]
    fn map_frame_matches_points() {
        let rows: Vec<_> = build_metrics()
            .into_iter()
            .filter(|r| r.zone == Zone::NorthEast)
            .collect();
        let df = map_frame(&map_points(&rows, &build_coordinates())).unwrap();
        assert_eq!(df.height(), 1);
        let lat = df.column(coordinates::LATITUDE).unwrap().f64().unwrap();
        assert_eq!(lat.get(0), Some(11.823));
        let audience = df.column(coordinates::TOTAL_AUDIENCE).unwrap().u64().unwrap();
        assert_eq!(audience.get(0), Some(45000));
    }

    #[test]
    fn csv_has_header_and_rows() {
        let mut df = metrics_frame(&build_metrics()).unwrap();
        let csv = to_csv(&mut df).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 7);
        assert!(lines[0].starts_with("Geopolitical Zone,Total Target Audience"));
        assert!(lines[1].starts_with("North Central,50000,20,10,5,100000,20000,8,"));
    }
}
