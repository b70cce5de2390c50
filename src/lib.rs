pub mod catalog;
pub mod clock;
pub mod config;
pub mod core_state; // Journal state + change notifications
pub mod crypto;
pub mod matcher; // Rule-based illness estimation
pub mod models;
pub mod note; // Absence note drafting
pub mod storage; // Two-tier key/value persistence
pub mod timeline;

pub use core_state::{JournalError, JournalState, StateChange};
pub use models::{IllnessEstimate, Severity, SymptomEntry, UserProfile};

use tracing_subscriber::EnvFilter;

/// Install the global tracing subscriber. `RUST_LOG` overrides the default
/// filter. Safe to call more than once; later calls are ignored.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter()));
    if tracing_subscriber::fmt().with_env_filter(filter).try_init().is_ok() {
        tracing::info!("{} starting v{}", config::APP_NAME, config::APP_VERSION);
    }
}
