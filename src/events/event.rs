//! # Semantic events fanned out to subscribers.
//!
//! The [`Event`] enum classifies notifications across three categories:
//! - **Trouble events**: escalating failure indications (service, network, system)
//! - **Activity events**: normal operation ticks (API rate, upload, DB operation, heartbeat)
//! - **Control events**: explicit state manipulation (reset)
//!
//! Payload-carrying variants keep their data inline; everything is `Copy`
//! so a dispatch can hand every subscriber task its own copy of the event.
//!
//! ## Example
//! ```rust
//! use blinkbus::Event;
//!
//! let ev = Event::ApiRate { rate: 0.82 };
//! assert_eq!(ev.as_label(), "api_rate");
//!
//! if let Event::ApiRate { rate } = ev {
//!     assert!(rate > 0.8);
//! }
//! ```

/// Classification of fan-out notifications.
///
/// One variant per subscriber handler method; the router in
/// [`Subscribe::on_event`](crate::subscribers::Subscribe::on_event) maps each
/// variant to its handler.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Event {
    // === Trouble events ===
    /// A dependent service is misbehaving.
    ServiceTrouble,

    /// Network connectivity is degraded or lost.
    NetworkTrouble,

    /// The system itself is in trouble; the most urgent indication.
    SystemTrouble,

    // === Activity events ===
    /// The current API consumption rate, raw and unclamped.
    ///
    /// Carries:
    /// - `rate`: observed rate; consumers normalize it themselves
    ApiRate {
        /// Observed rate. May fall outside `[0, 1]`.
        rate: f64,
    },

    /// A payload upload just happened.
    Upload,

    /// A database operation completed.
    ///
    /// Carries:
    /// - `success`: whether the operation succeeded
    DbOperation {
        /// Outcome of the operation.
        success: bool,
    },

    /// Periodic liveness tick.
    Heartbeat,

    // === Control events ===
    /// Force subscribers back to a known baseline state.
    ResetState,
}

impl Event {
    /// Returns a short stable label (snake_case) for use in logs.
    ///
    /// # Example
    /// ```
    /// use blinkbus::Event;
    ///
    /// assert_eq!(Event::SystemTrouble.as_label(), "system_trouble");
    /// assert_eq!(Event::DbOperation { success: true }.as_label(), "db_operation");
    /// ```
    pub fn as_label(&self) -> &'static str {
        match self {
            Event::ServiceTrouble => "service_trouble",
            Event::NetworkTrouble => "network_trouble",
            Event::SystemTrouble => "system_trouble",
            Event::ApiRate { .. } => "api_rate",
            Event::Upload => "upload",
            Event::DbOperation { .. } => "db_operation",
            Event::Heartbeat => "heartbeat",
            Event::ResetState => "reset_state",
        }
    }
}
