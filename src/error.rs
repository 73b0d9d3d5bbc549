//! Error types used by the fan-out engine and its device collaborators.
//!
//! This module defines two main error enums:
//!
//! - [`DeviceError`]: errors raised while talking to an indicator device
//!   or its manager.
//! - [`SubscriberError`]: errors raised by a subscriber's lifecycle or
//!   event-handler methods.
//!
//! Both types provide helper methods (`as_label`, `as_message`) for logging.
//! Neither error crosses a public engine boundary: device errors are caught
//! and logged inside the animation engine, subscriber errors are isolated
//! per subscriber by the registry and the dispatcher.

use thiserror::Error;

/// # Errors produced by device collaborators.
///
/// These represent failures of the hardware-facing traits: a transfer that
/// did not complete, or a device that disappeared mid-operation.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum DeviceError {
    /// A device transfer or control operation failed.
    #[error("device i/o failed: {error}")]
    Io {
        /// The underlying error message.
        error: String,
    },

    /// The device is gone (unplugged or already closed).
    #[error("device disconnected")]
    Disconnected,
}

impl DeviceError {
    /// Builds a [`DeviceError::Io`] from anything that renders a message.
    pub fn io(error: impl Into<String>) -> Self {
        DeviceError::Io { error: error.into() }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use blinkbus::DeviceError;
    ///
    /// let err = DeviceError::Disconnected;
    /// assert_eq!(err.as_label(), "device_disconnected");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            DeviceError::Io { .. } => "device_io",
            DeviceError::Disconnected => "device_disconnected",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            DeviceError::Io { error } => format!("i/o: {error}"),
            DeviceError::Disconnected => "disconnected".to_string(),
        }
    }
}

/// # Errors produced by subscribers.
///
/// These represent failures inside a single subscriber: its initialization,
/// its shutdown, or one of its event handlers. The registry and dispatcher
/// log them and move on; one subscriber's failure never reaches another.
#[non_exhaustive]
#[derive(Error, Debug)]
pub enum SubscriberError {
    /// Subscriber initialization failed; it stays not-ready.
    #[error("init failed: {error}")]
    Init {
        /// The underlying error message.
        error: String,
    },

    /// Subscriber shutdown failed; it is removed regardless.
    #[error("shutdown failed: {error}")]
    Shutdown {
        /// The underlying error message.
        error: String,
    },

    /// An event handler failed; the event still reaches everyone else.
    #[error("handler failed: {error}")]
    Handler {
        /// The underlying error message.
        error: String,
    },
}

impl SubscriberError {
    /// Builds a [`SubscriberError::Init`] from anything that renders a message.
    pub fn init(error: impl Into<String>) -> Self {
        SubscriberError::Init { error: error.into() }
    }

    /// Builds a [`SubscriberError::Shutdown`] from anything that renders a message.
    pub fn shutdown(error: impl Into<String>) -> Self {
        SubscriberError::Shutdown { error: error.into() }
    }

    /// Builds a [`SubscriberError::Handler`] from anything that renders a message.
    pub fn handler(error: impl Into<String>) -> Self {
        SubscriberError::Handler { error: error.into() }
    }

    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use blinkbus::SubscriberError;
    ///
    /// let err = SubscriberError::init("no USB bus");
    /// assert_eq!(err.as_label(), "subscriber_init_failed");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            SubscriberError::Init { .. } => "subscriber_init_failed",
            SubscriberError::Shutdown { .. } => "subscriber_shutdown_failed",
            SubscriberError::Handler { .. } => "subscriber_handler_failed",
        }
    }

    /// Returns a human-readable message with details about the error.
    pub fn as_message(&self) -> String {
        match self {
            SubscriberError::Init { error } => format!("init: {error}"),
            SubscriberError::Shutdown { error } => format!("shutdown: {error}"),
            SubscriberError::Handler { error } => format!("handler: {error}"),
        }
    }
}

impl From<DeviceError> for SubscriberError {
    fn from(err: DeviceError) -> Self {
        SubscriberError::Handler { error: err.to_string() }
    }
}
