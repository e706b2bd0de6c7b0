//! Pipeline properties exercised through the public API.

use nelfund_dashboard::dataset::{build_coordinates, build_metrics};
use nelfund_dashboard::filter::map_points;
use nelfund_dashboard::projection::{
    project_bar, project_heatmap, project_line, project_map, project_pie,
};
use nelfund_dashboard::{filter, ChartConfig, Dashboard, Dataset, Selection, Zone};

const ZONE_NAMES: [&str; 6] = [
    "North Central",
    "North East",
    "North West",
    "South East",
    "South West",
    "South South",
];

#[test]
fn all_keeps_insertion_order() {
    let rows = build_metrics();
    let all = filter(&rows, &Selection::parse("All"));
    let names: Vec<&str> = all.iter().map(|r| r.zone.as_str()).collect();
    assert_eq!(names, ZONE_NAMES);
}

#[test]
fn each_zone_row_matches_its_all_row() {
    let rows = build_metrics();
    let all = filter(&rows, &Selection::All);
    for name in ZONE_NAMES {
        let one = filter(&rows, &Selection::parse(name));
        assert_eq!(one.len(), 1, "{name}");
        assert_eq!(one[0].zone.as_str(), name);
        let from_all = all.iter().find(|r| r.zone.as_str() == name).unwrap();
        assert_eq!(&one[0], from_all);
    }
}

#[test]
fn unknown_zone_gives_empty_projections() {
    let rows = build_metrics();
    let charts = ChartConfig::default();
    let empty = filter(&rows, &Selection::parse("Unknown Zone"));
    assert!(empty.is_empty());

    assert!(project_bar(&empty, &charts).is_empty());
    assert!(project_line(&empty, &charts).is_empty());
    assert!(project_pie(&empty, &charts).is_empty());
    assert!(project_heatmap(&empty, &charts).is_empty());
    let points = map_points(&empty, &build_coordinates());
    assert!(project_map(&points, &charts).is_empty());
}

#[test]
fn heatmap_shapes() {
    let dashboard = Dashboard::with_defaults().unwrap();
    let all = dashboard.render("All").heatmap;
    assert_eq!(all.shape(), (6, 6));
    assert!(all.z.iter().all(|row| row.len() == 6));

    let south_west = dashboard.render("South West").heatmap;
    assert_eq!(south_west.shape(), (6, 1));
    let column: Vec<u64> = south_west.z.iter().map(|row| row[0]).collect();
    assert_eq!(column, vec![30, 18, 9, 130000, 28000, 16]);
}

#[test]
fn bar_pairs_for_all() {
    let dashboard = Dashboard::with_defaults().unwrap();
    let pairs: Vec<(String, u64)> = dashboard
        .render("All")
        .bar
        .bars
        .iter()
        .map(|b| (b.zone.to_string(), b.value))
        .collect();
    let expected: Vec<(String, u64)> = [
        ("North Central", 50000),
        ("North East", 45000),
        ("North West", 60000),
        ("South East", 55000),
        ("South West", 70000),
        ("South South", 65000),
    ]
    .iter()
    .map(|(z, v)| (z.to_string(), *v))
    .collect();
    assert_eq!(pairs, expected);
}

#[test]
fn north_east_map_point() {
    let dashboard = Dashboard::with_defaults().unwrap();
    let map = dashboard.render("North East").map;
    assert_eq!(map.markers.len(), 1);
    let m = &map.markers[0];
    assert_eq!(m.lat, 11.823);
    assert_eq!(m.lon, 13.151);
    assert_eq!(m.audience, 45000);
    assert_eq!(m.zone, Zone::NorthEast);
}

#[test]
fn every_zone_degenerates_to_one_entry() {
    let dashboard = Dashboard::with_defaults().unwrap();
    for name in ZONE_NAMES {
        let view = dashboard.render(name);
        assert_eq!(view.bar.bars.len(), 1, "{name}");
        assert_eq!(view.line.x.len(), 1, "{name}");
        assert_eq!(view.pie.slices.len(), 1, "{name}");
        assert_eq!(view.pie.slices[0].share, 1.0, "{name}");
        assert_eq!(view.heatmap.shape(), (6, 1), "{name}");
        assert!(
            view.heatmap.z.iter().all(|row| row.len() == view.heatmap.x.len()),
            "{name}"
        );
        assert_eq!(view.map.markers.len(), 1, "{name}");
    }
}

#[test]
fn rebuilding_is_idempotent() {
    let first = Dataset::build().unwrap();
    let second = Dataset::build().unwrap();
    assert_eq!(first, second);

    for name in std::iter::once("All").chain(ZONE_NAMES) {
        let a = filter(first.metrics(), &Selection::parse(name));
        let b = filter(second.metrics(), &Selection::parse(name));
        assert_eq!(a, b);
    }

    let d1 = Dashboard::with_defaults().unwrap();
    let d2 = Dashboard::with_defaults().unwrap();
    assert_eq!(
        d1.render("South East").to_json().unwrap(),
        d2.render("South East").to_json().unwrap()
    );
}

#[test]
fn rendering_does_not_mutate_dataset() {
    let dashboard = Dashboard::with_defaults().unwrap();
    let before = dashboard.dataset().clone();
    let _ = dashboard.render("North West");
    let _ = dashboard.render("Nowhere");
    let _ = dashboard.render("All");
    assert_eq!(dashboard.dataset(), &before);
}

#[test]
fn csv_export_of_one_zone() {
    let dashboard = Dashboard::with_defaults().unwrap();
    let csv = dashboard.export_csv("South West").unwrap();
    let lines: Vec<&str> = csv.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[1].starts_with("South West,70000,30,18,9,130000,28000,16,"));
}

#[test]
fn map_table_follows_selection() {
    let dashboard = Dashboard::with_defaults().unwrap();
    assert_eq!(dashboard.map_table("All").unwrap().height(), 6);
    assert_eq!(dashboard.map_table("South South").unwrap().height(), 1);
    assert_eq!(dashboard.map_table("Nowhere").unwrap().height(), 0);
}

#[test]
fn dashboard_is_shareable() {
    fn assert_send_sync<T: Send + Sync>() {}
    assert_send_sync::<Dashboard>();
}
