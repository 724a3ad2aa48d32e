//! Tracing subscriber setup

use crate::config::SessionConfig;

/// Install a fmt subscriber at the configured level
///
/// Settings the config had to ignore are logged as warnings once the
/// subscriber is in place. Returns `false` if a global subscriber was
/// already installed, in which case the existing one is left in place.
pub fn init_tracing(config: &SessionConfig) -> bool {
    let installed = tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .try_init()
        .is_ok();

    report_rejected(config);
    installed
}

/// Log each rejected setting through the current subscriber
///
/// Returns the number of warnings emitted.
pub fn report_rejected(config: &SessionConfig) -> usize {
    for setting in config.rejected() {
        tracing::warn!(
            var = setting.var,
            "{} has invalid value {:?}, using default",
            setting.var,
            setting.value
        );
    }
    config.rejected().len()
}
