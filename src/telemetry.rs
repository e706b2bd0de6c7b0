//! Opt-in log output for hosts that do not install their own subscriber.

use tracing_subscriber::EnvFilter;

use crate::error::{DashboardError, Result};

/// Install a fmt subscriber filtered by `directives` (e.g. `"info"` or
/// `"nelfund_dashboard=debug"`).
///
/// Returns `Ok(false)` when a global subscriber is already set.
pub fn init_logging(directives: &str) -> Result<bool> {
    let filter = EnvFilter::try_new(directives)
        .map_err(|e| DashboardError::Config(format!("log filter '{directives}': {e}")))?;
    let installed = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init()
        .is_ok();
    Ok(installed)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bad_directive_is_a_config_error() {
        let err = init_logging("nelfund_dashboard=loud").unwrap_err();
        assert!(matches!(err, DashboardError::Config(_)));
    }

    #[test]
    fn second_install_is_ignored() {
        let _ = init_logging("warn").unwrap();
        assert!(!init_logging("debug").unwrap());
    }
}
