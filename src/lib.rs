//! Data pipeline behind the NELFUND sensitization dashboard.
//!
//! A fixed per-zone metrics table is filtered by the sidebar selection and
//! projected into five chart specs (bar, line, pie, heatmap, bubble map):
//!
//! ```no_run
//! use nelfund_dashboard::Dashboard;
//!
//! let dashboard = Dashboard::with_defaults()?;
//! let view = dashboard.render("South West");
//! assert_eq!(view.heatmap.shape(), (6, 1));
//! # Ok::<(), nelfund_dashboard::DashboardError>(())
//! ```
//!
//! With the `python` feature the crate builds the `_core` extension module
//! used by a Python host UI.

pub mod config;
pub mod dataset;
pub mod error;
pub mod filter;
pub mod pipeline;
pub mod projection;
pub mod schema;
pub mod table;
pub mod telemetry;
pub mod visualization;

#[cfg(feature = "python")]
mod python;

pub use config::{ChartConfig, DashboardConfig};
pub use dataset::{Dataset, MetricsRow, Zone, ZoneCoordinate};
pub use error::{DashboardError, Result};
pub use filter::{filter, MapPoint, Selection};
pub use pipeline::{Dashboard, ViewBundle};
