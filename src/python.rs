use pyo3::prelude::*;
use pyo3::types::PyModule;
use pyo3_polars::PyDataFrame;

use crate::config::DashboardConfig;
use crate::pipeline::Dashboard;
use crate::projection::INSIGHTS;
use crate::schema;
use crate::telemetry;

/// Python handle on a built dashboard.
///
/// The host UI calls `render(selection)` on every selector change.
#[pyclass(name = "Dashboard", frozen)]
pub struct PyDashboard {
    inner: Dashboard,
}

#[pymethods]
impl PyDashboard {
    #[new]
    #[pyo3(signature = (config_toml=None))]
    fn new(config_toml: Option<&str>) -> PyResult<Self> {
        let config = match config_toml {
            Some(toml) => DashboardConfig::from_toml_str(toml)?,
            None => DashboardConfig::default(),
        };
        Ok(Self {
            inner: Dashboard::new(config)?,
        })
    }

    /// "All" followed by every zone name.
    fn selector_options(&self) -> Vec<String> {
        self.inner.selector_options()
    }

    /// Full view bundle for `selection` as a JSON string.
    fn render(&self, selection: &str) -> PyResult<String> {
        Ok(self.inner.render(selection).to_json()?)
    }

    /// Filtered metrics table.
    fn table(&self, selection: &str) -> PyResult<PyDataFrame> {
        Ok(PyDataFrame(self.inner.table(selection)?))
    }

    /// Filtered map table (lat, lon, zone, audience).
    fn map_table(&self, selection: &str) -> PyResult<PyDataFrame> {
        Ok(PyDataFrame(self.inner.map_table(selection)?))
    }

    fn export_csv(&self, selection: &str) -> PyResult<String> {
        Ok(self.inner.export_csv(selection)?)
    }

    /// Self-contained HTML page with `selection` preselected.
    #[pyo3(signature = (selection="All"))]
    fn render_html(&self, selection: &str) -> PyResult<String> {
        Ok(self.inner.render_html(selection)?)
    }

    #[staticmethod]
    fn insights() -> Vec<&'static str> {
        INSIGHTS.to_vec()
    }
}

/// Install a log subscriber; returns False if one was already installed.
#[pyfunction]
#[pyo3(signature = (directives="info"))]
fn init_logging(directives: &str) -> PyResult<bool> {
    Ok(telemetry::init_logging(directives)?)
}

/// Export schema constants as Python submodules
fn add_schema_exports(m: &Bound<'_, PyModule>) -> PyResult<()> {
    // Metrics table
    let metrics = PyModule::new(m.py(), "metrics")?;
    metrics.add("ZONE", schema::metrics::ZONE)?;
    metrics.add("TOTAL_TARGET_AUDIENCE", schema::metrics::TOTAL_TARGET_AUDIENCE)?;
    metrics.add("WORKSHOPS_CONDUCTED", schema::metrics::WORKSHOPS_CONDUCTED)?;
    metrics.add("CAMPUS_ROADSHOWS", schema::metrics::CAMPUS_ROADSHOWS)?;
    metrics.add("TV_RADIO_CAMPAIGNS", schema::metrics::TV_RADIO_CAMPAIGNS)?;
    metrics.add("SOCIAL_MEDIA_REACH", schema::metrics::SOCIAL_MEDIA_REACH)?;
    metrics.add("SMS_CAMPAIGNS", schema::metrics::SMS_CAMPAIGNS)?;
    metrics.add("NGO_PARTNERSHIPS", schema::metrics::NGO_PARTNERSHIPS)?;
    metrics.add(
        "APPLICATION_CONVERSION_RATE",
        schema::metrics::APPLICATION_CONVERSION_RATE,
    )?;
    m.add_submodule(&metrics)?;

    // Map table
    let coordinates = PyModule::new(m.py(), "coordinates")?;
    coordinates.add("LATITUDE", schema::coordinates::LATITUDE)?;
    coordinates.add("LONGITUDE", schema::coordinates::LONGITUDE)?;
    coordinates.add("ZONE", schema::coordinates::ZONE)?;
    coordinates.add("TOTAL_AUDIENCE", schema::coordinates::TOTAL_AUDIENCE)?;
    m.add_submodule(&coordinates)?;

    // Heatmap rows
    let heatmap = PyModule::new(m.py(), "heatmap")?;
    heatmap.add("ROWS", schema::heatmap::ROWS.to_vec())?;
    m.add_submodule(&heatmap)?;

    m.add("ALL", schema::selection::ALL)?;
    Ok(())
}

#[pymodule]
fn _core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyDashboard>()?;
    m.add_function(wrap_pyfunction!(init_logging, m)?)?;
    add_schema_exports(m)?;
    Ok(())
}
