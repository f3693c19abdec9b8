//! Responsible for behaviour related to logging statistics with a specific pre-fix and closing
//! lines.

use std::fmt::Display;
use std::sync::OnceLock;

static STATISTIC_PREFIX: OnceLock<&str> = OnceLock::new();
static AFTER_STATISTICS: OnceLock<Option<&str>> = OnceLock::new();
static LOG_STATISTICS: OnceLock<bool> = OnceLock::new();

/// Configures the logging of the statistics.
///
/// It specifies the (optional) prefix and a closing line (postfix) which
/// can be printed after all of the statistics have been logged. Statistics will only be printed
/// if `log_statistics` is true. Only the first call has an effect.
pub fn configure(log_statistics: bool, prefix: &'static str, after: Option<&'static str>) {
    let _ = LOG_STATISTICS.get_or_init(|| log_statistics);
    if log_statistics {
        let _ = STATISTIC_PREFIX.get_or_init(|| prefix);
        let _ = AFTER_STATISTICS.get_or_init(|| after);
    }
}

/// Whether [`configure`] enabled the logging of statistics.
pub fn should_log_statistics() -> bool {
    *LOG_STATISTICS.get().unwrap_or(&false)
}

/// Logs the provided statistic with name `name` and value `value`. At the moment it will log in
/// the format `STATISTIC_PREFIX NAME=VALUE`.
pub fn log_statistic(name: impl Display, value: impl Display) {
    if should_log_statistics() {
        let prefix = STATISTIC_PREFIX.get().copied().unwrap_or_default();
        println!("{prefix} {name}={value}");
    }
}

/// Logs the postfix of the statistics (if it has been set).
pub fn log_statistic_postfix() {
    if should_log_statistics() {
        if let Some(Some(post_fix)) = AFTER_STATISTICS.get() {
            println!("{post_fix}")
        }
    }
}
