use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Symptom Journal";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable that relocates the data directory (tests, sandboxed shells).
pub const DATA_DIR_ENV: &str = "SYMPTOM_JOURNAL_HOME";

/// Window, in days, of history that feeds the recent-trend estimate.
pub const RECENT_WINDOW_DAYS: i64 = 3;

/// Capacity of the most-recently-used recipient list.
pub const MAX_RECENT_RECIPIENTS: usize = 3;

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> &'static str {
    if cfg!(debug_assertions) {
        "symptom_journal=debug"
    } else {
        "symptom_journal=info"
    }
}

/// Get the application data directory.
///
/// `$SYMPTOM_JOURNAL_HOME` wins when set; otherwise the platform local data
/// directory, falling back to the temp dir on platforms without one.
pub fn app_data_dir() -> PathBuf {
    if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
        return PathBuf::from(dir);
    }
    dirs::data_local_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join("symptom-journal")
}

/// Directory of the protected (encrypted) tier
pub fn protected_dir() -> PathBuf {
    app_data_dir().join("protected")
}

/// Directory of the plain preference tier
pub fn plain_dir() -> PathBuf {
    app_data_dir().join("preferences")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_dir_under_app_data() {
        let protected = protected_dir();
        let app = app_data_dir();
        assert!(protected.starts_with(&app));
        assert!(protected.ends_with("protected"));
    }

    #[test]
    fn plain_dir_under_app_data() {
        let plain = plain_dir();
        assert!(plain.starts_with(app_data_dir()));
        assert!(plain.ends_with("preferences"));
    }

    #[test]
    fn tiers_live_in_separate_directories() {
        assert_ne!(protected_dir(), plain_dir());
    }

    #[test]
    fn log_filter_targets_this_crate() {
        assert!(default_log_filter().starts_with("symptom_journal="));
    }

    #[test]
    fn app_version_matches_cargo() {
        assert_eq!(APP_VERSION, "0.1.0");
    }
}
