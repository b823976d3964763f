//! Tracing subscriber bootstrap
//!
//! The library only emits `tracing` events; binaries and tests that want to
//! see them call `init_tracing` once.

use tracing::Level;
use tracing_subscriber::EnvFilter;

/// Install a fmt subscriber that shows events at `default_level` and above.
///
/// Returns false if a global subscriber was already installed.
pub fn init_tracing(default_level: Level) -> bool {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::builder()
                .with_default_directive(default_level.into())
                .parse_lossy(""),
        )
        .try_init()
        .is_ok()
}
