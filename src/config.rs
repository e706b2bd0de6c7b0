//! Dashboard presentation settings.
//!
//! Every field has a built-in default matching the stock dashboard, so a TOML
//! file only needs the keys it wants to change:
//!
//! ```toml
//! title = "Outreach Dashboard"
//!
//! [charts]
//! heatmap_colorscale = "Cividis"
//! ```

use std::path::Path;

use serde::Deserialize;
use tracing::info;

use crate::error::{DashboardError, Result};

/// Named Plotly colorscales accepted for the heatmap.
pub const COLORSCALES: &[&str] = &[
    "Viridis", "Cividis", "Plasma", "Inferno", "Magma", "Blues", "Greens", "Reds", "YlOrRd",
    "YlGnBu", "RdBu", "Portland", "Jet", "Hot", "Electric", "Earth",
];

/// Map styles that need no tile-provider token.
pub const MAP_STYLES: &[&str] = &[
    "open-street-map",
    "carto-positron",
    "carto-darkmatter",
    "white-bg",
];

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct DashboardConfig {
    /// Page heading.
    pub title: String,
    pub sidebar_header: String,
    pub selector_label: String,
    /// Heading above the metrics table.
    pub table_heading: String,
    /// Heading above the insights list.
    pub insights_heading: String,
    /// Script URL the HTML page loads Plotly.js from.
    pub plotly_js_url: String,
    pub charts: ChartConfig,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ChartConfig {
    pub bar_title: String,
    pub line_title: String,
    pub pie_title: String,
    pub heatmap_title: String,
    pub map_title: String,
    pub heatmap_colorscale: String,
    pub map_style: String,
    pub map_zoom: f64,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            title: "📊 NELFUND Sensitization Dashboard".to_string(),
            sidebar_header: "Filter Options".to_string(),
            selector_label: "Select Geopolitical Zone".to_string(),
            table_heading: "Sensitization Metrics".to_string(),
            insights_heading: "Insights & Recommendations".to_string(),
            plotly_js_url: "https://cdn.plot.ly/plotly-2.35.2.min.js".to_string(),
            charts: ChartConfig::default(),
        }
    }
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            bar_title: "Total Audience Reached Per Zone".to_string(),
            line_title: "Workshops & Roadshows Conducted".to_string(),
            pie_title: "Social Media Engagement Across Zones".to_string(),
            heatmap_title: "Heatmap of Sensitization Activities".to_string(),
            map_title: "Geographical Distribution of Sensitization Reach".to_string(),
            heatmap_colorscale: "Viridis".to_string(),
            map_style: "open-street-map".to_string(),
            map_zoom: 4.5,
        }
    }
}

impl DashboardConfig {
    /// Parse and validate a TOML document.
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self =
            toml::from_str(contents).map_err(|e| DashboardError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Load from a specific TOML file path.
    pub fn load_from_file(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config = Self::from_toml_str(&contents)?;
        info!(path = %path.display(), title = %config.title, "Loaded dashboard config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let charts = &self.charts;
        if !COLORSCALES.contains(&charts.heatmap_colorscale.as_str()) {
            return Err(DashboardError::Config(format!(
                "charts.heatmap_colorscale: unknown colorscale '{}'",
                charts.heatmap_colorscale
            )));
        }
        if !MAP_STYLES.contains(&charts.map_style.as_str()) {
            return Err(DashboardError::Config(format!(
                "charts.map_style: unsupported style '{}' (expected one of {})",
                charts.map_style,
                MAP_STYLES.join(", ")
            )));
        }
        if !charts.map_zoom.is_finite() || !(0.0..=22.0).contains(&charts.map_zoom) {
            return Err(DashboardError::Config(format!(
                "charts.map_zoom: {} outside [0, 22]",
                charts.map_zoom
            )));
        }
        if self.plotly_js_url.trim().is_empty() {
            return Err(DashboardError::Config(
                "plotly_js_url must not be empty".to_string(),
            ));
        }
        Ok(())
    }
}
