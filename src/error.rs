use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Validation: {0}")]
    Validation(String),

    #[error("Config: {0}")]
    Config(String),

    #[error("Polars error: {0}")]
    Polars(#[from] polars::error::PolarsError),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, DashboardError>;

#[cfg(feature = "python")]
impl From<DashboardError> for pyo3::PyErr {
    fn from(err: DashboardError) -> pyo3::PyErr {
        match err {
            DashboardError::Config(_) | DashboardError::Validation(_) => {
                pyo3::exceptions::PyValueError::new_err(err.to_string())
            }
            _ => pyo3::exceptions::PyRuntimeError::new_err(err.to_string()),
        }
    }
}
