//! Config file loading feeding a dashboard.

use std::io::Write;

use nelfund_dashboard::{Dashboard, DashboardConfig, DashboardError};

#[test]
fn config_file_drives_chart_titles() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(
        file,
        r#"
title = "Outreach Review"

[charts]
bar_title = "Audience by Zone"
heatmap_colorscale = "Cividis"
map_style = "carto-positron"
"#
    )
    .unwrap();

    let config = DashboardConfig::load_from_file(file.path()).unwrap();
    let dashboard = Dashboard::new(config).unwrap();
    let view = dashboard.render("All");
    assert_eq!(view.bar.title, "Audience by Zone");
    assert_eq!(view.heatmap.colorscale, "Cividis");
    assert_eq!(view.map.style, "carto-positron");
    assert_eq!(view.pie.title, "Social Media Engagement Across Zones");

    let html = dashboard.render_html("All").unwrap();
    assert!(html.contains("<title>Outreach Review</title>"));
}

#[test]
fn missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = DashboardConfig::load_from_file(&dir.path().join("absent.toml")).unwrap_err();
    assert!(matches!(err, DashboardError::Io(_)));
}

#[test]
fn malformed_toml_is_config_error() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "title = ").unwrap();
    let err = DashboardConfig::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, DashboardError::Config(_)));
}
