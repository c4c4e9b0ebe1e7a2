//! # Monitor Configuration
//!
//! Environment-based configuration for the monitoring loop.

use std::env;
use std::path::PathBuf;
use std::time::Duration;

/// Monitoring loop configuration
#[derive(Debug, Clone)]
pub struct MonitorConfig {
    /// Pause between consecutive model calls (external rate-limit pacing)
    pub pause: Duration,

    /// Directory for exported reports when no path is given
    pub export_dir: PathBuf,
}

impl MonitorConfig {
    /// Load configuration from environment variables
    #[must_use]
    pub fn from_env() -> Self {
        Self {
            pause: Duration::from_millis(
                env::var("PAUSE_MS")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(1000),
            ),

            export_dir: env::var("EXPORT_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
        }
    }

    /// Replace the pause interval.
    #[must_use]
    pub fn with_pause(mut self, pause: Duration) -> Self {
        self.pause = pause;
        self
    }
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self::from_env()
    }
}
