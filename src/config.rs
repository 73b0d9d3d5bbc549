//! # Notifier configuration.
//!
//! [`NotifierConfig`] defines the dispatcher's behavior: how long shutdown
//! waits for in-flight deliveries before cancelling them.
//!
//! # Example
//! ```
//! use std::time::Duration;
//! use blinkbus::NotifierConfig;
//!
//! let mut cfg = NotifierConfig::default();
//! cfg.grace = Duration::from_secs(3);
//!
//! assert_eq!(cfg.grace, Duration::from_secs(3));
//! ```

use std::time::Duration;

/// Configuration for the event notifier.
///
/// Controls the bounded-grace shutdown of in-flight delivery tasks.
#[derive(Clone, Debug)]
pub struct NotifierConfig {
    /// Maximum time to wait for in-flight deliveries before cancelling them.
    pub grace: Duration,
}

impl Default for NotifierConfig {
    /// Provides a default configuration:
    /// - `grace = 10s`
    fn default() -> Self {
        Self {
            grace: Duration::from_secs(10),
        }
    }
}
