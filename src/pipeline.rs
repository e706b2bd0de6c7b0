//! The dashboard pipeline: dataset → filter → projections.
//!
//! [`Dashboard`] is built once and is immutable afterwards; the host UI calls
//! [`Dashboard::render`] on every selector change.

use polars::prelude::DataFrame;
use serde::Serialize;
use tracing::{debug, warn};

use crate::config::DashboardConfig;
use crate::dataset::{Dataset, MetricsRow};
use crate::error::Result;
use crate::filter::{self, MapPoint, Selection};
use crate::projection::{
    self, BarChart, Heatmap, LineChart, MapChart, PieChart, INSIGHTS,
};
use crate::table;
use crate::visualization;

/// Output of one pipeline run.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ViewBundle {
    pub selection: String,
    /// Filtered metrics, the tabular view.
    pub rows: Vec<MetricsRow>,
    pub bar: BarChart,
    pub line: LineChart,
    pub pie: PieChart,
    pub heatmap: Heatmap,
    pub map: MapChart,
    pub insights: Vec<&'static str>,
}

impl ViewBundle {
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[derive(Debug)]
pub struct Dashboard {
    dataset: Dataset,
    config: DashboardConfig,
}

impl Dashboard {
    /// Build and validate the dataset once, with the given presentation config.
    pub fn new(config: DashboardConfig) -> Result<Self> {
        config.validate()?;
        let dataset = Dataset::build()?;
        debug!(zones = dataset.metrics().len(), "Dashboard dataset built");
        Ok(Self { dataset, config })
    }

    pub fn with_defaults() -> Result<Self> {
        Self::new(DashboardConfig::default())
    }

    pub fn dataset(&self) -> &Dataset {
        &self.dataset
    }

    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    /// Selector entries: "All" then every zone.
    pub fn selector_options(&self) -> Vec<String> {
        filter::selector_options(self.dataset.metrics())
    }

    /// Run the full pipeline for one selector value.
    pub fn render(&self, selection: &str) -> ViewBundle {
        let selection = Selection::parse(selection);
        let (rows, points) = self.filtered(&selection);
        let charts = &self.config.charts;

        let bundle = ViewBundle {
            selection: selection.to_string(),
            bar: projection::project_bar(&rows, charts),
            line: projection::project_line(&rows, charts),
            pie: projection::project_pie(&rows, charts),
            heatmap: projection::project_heatmap(&rows, charts),
            map: projection::project_map(&points, charts),
            insights: INSIGHTS.to_vec(),
            rows,
        };
        debug!(selection = %bundle.selection, rows = bundle.rows.len(), "Rendered view");
        bundle
    }

    /// Filtered metrics table.
    pub fn table(&self, selection: &str) -> Result<DataFrame> {
        let (rows, _) = self.filtered(&Selection::parse(selection));
        table::metrics_frame(&rows)
    }

    /// Filtered map table.
    pub fn map_table(&self, selection: &str) -> Result<DataFrame> {
        let (_, points) = self.filtered(&Selection::parse(selection));
        table::map_frame(&points)
    }

    /// Filtered metrics table as CSV text.
    pub fn export_csv(&self, selection: &str) -> Result<String> {
        let mut df = self.table(selection)?;
        table::to_csv(&mut df)
    }

    /// Self-contained HTML page with `selection` preselected.
    pub fn render_html(&self, selection: &str) -> Result<String> {
        visualization::generate_dashboard_html(self, selection)
    }

    fn filtered(&self, selection: &Selection) -> (Vec<MetricsRow>, Vec<MapPoint>) {
        if !selection.is_known() {
            warn!(selection = %selection, "Unknown zone selected, rendering empty view");
        }
        let rows = filter::filter(self.dataset.metrics(), selection);
        let points = filter::map_points(&rows, self.dataset.coordinates());
        (rows, points)
    }
}
