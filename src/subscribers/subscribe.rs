//! # Core subscriber trait
//!
//! `Subscribe` is the extension point for plugging custom event consumers
//! into the notifier. Each delivery runs on its own spawned task owned by
//! the [`EventNotifier`](crate::events::EventNotifier), so a slow subscriber
//! never delays the publisher or its peers.
//!
//! ## Contract
//! - Lifecycle: [`Subscribe::init`] runs once when the subscriber is
//!   registered, [`Subscribe::shutdown`] once when it is removed. Both are
//!   allowed to fail; failures are logged and isolated.
//! - Every event-handler method defaults to a no-op, so implementations
//!   override only the events they care about.
//! - [`Subscribe::on_event`] routes a tagged [`Event`] to the matching
//!   handler. Implementations normally leave it alone.
//!
//! ## Example (skeleton)
//! ```rust
//! // use blinkbus::{Subscribe, SubscriberError};
//! //
//! // struct Audit;
//! // #[async_trait::async_trait]
//! // impl Subscribe for Audit {
//! //     async fn heartbeat(&self) -> Result<(), SubscriberError> {
//! //         // append liveness record...
//! //         Ok(())
//! //     }
//! //     fn description(&self) -> &str { "audit" }
//! // }
//! ```

use async_trait::async_trait;

use crate::error::SubscriberError;
use crate::events::Event;

/// Contract for event subscribers.
///
/// Handlers are called from notifier-spawned tasks. Implementations should
/// avoid blocking the async runtime (prefer async I/O and cooperative waits).
#[async_trait]
pub trait Subscribe: Send + Sync + 'static {
    /// Acquires whatever the subscriber needs to become ready.
    ///
    /// Called exactly once per registration. A failure leaves the
    /// subscriber registered but not ready.
    async fn init(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// Releases everything `init` acquired.
    ///
    /// Called exactly once per removal, even after a failed `init`.
    async fn shutdown(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// Human-readable description (for logs and status snapshots).
    fn description(&self) -> &str;

    /// Whether the subscriber is ready to handle events.
    fn is_ready(&self) -> bool {
        true
    }

    /// A dependent service is misbehaving.
    async fn service_trouble(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// Network connectivity is degraded or lost.
    async fn network_trouble(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// The system itself is in trouble.
    async fn system_trouble(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// The current API consumption rate, raw and unclamped.
    async fn update_api_rate(&self, _rate: f64) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// A payload upload just happened.
    async fn upload_event(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// A database operation completed with the given outcome.
    async fn db_operation_event(&self, _success: bool) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// Periodic liveness tick.
    async fn heartbeat(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// Force the subscriber back to a known baseline state.
    async fn reset_state(&self) -> Result<(), SubscriberError> {
        Ok(())
    }

    /// Routes a tagged event to the matching handler.
    ///
    /// The notifier calls this once per (event, subscriber) delivery.
    async fn on_event(&self, event: &Event) -> Result<(), SubscriberError> {
        match *event {
            Event::ServiceTrouble => self.service_trouble().await,
            Event::NetworkTrouble => self.network_trouble().await,
            Event::SystemTrouble => self.system_trouble().await,
            Event::ApiRate { rate } => self.update_api_rate(rate).await,
            Event::Upload => self.upload_event().await,
            Event::DbOperation { success } => self.db_operation_event(success).await,
            Event::Heartbeat => self.heartbeat().await,
            Event::ResetState => self.reset_state().await,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use super::*;

    struct Recorder {
        calls: Mutex<Vec<String>>,
    }

    impl Recorder {
        fn new() -> Self {
            Self { calls: Mutex::new(Vec::new()) }
        }

        fn record(&self, call: impl Into<String>) {
            self.calls.lock().unwrap().push(call.into());
        }
    }

    #[async_trait]
    impl Subscribe for Recorder {
        fn description(&self) -> &str {
            "recorder"
        }

        async fn service_trouble(&self) -> Result<(), SubscriberError> {
            self.record("service_trouble");
            Ok(())
        }

        async fn network_trouble(&self) -> Result<(), SubscriberError> {
            self.record("network_trouble");
            Ok(())
        }

        async fn system_trouble(&self) -> Result<(), SubscriberError> {
            self.record("system_trouble");
            Ok(())
        }

        async fn update_api_rate(&self, rate: f64) -> Result<(), SubscriberError> {
            self.record(format!("api_rate:{rate}"));
            Ok(())
        }

        async fn upload_event(&self) -> Result<(), SubscriberError> {
            self.record("upload");
            Ok(())
        }

        async fn db_operation_event(&self, success: bool) -> Result<(), SubscriberError> {
            self.record(format!("db_operation:{success}"));
            Ok(())
        }

        async fn heartbeat(&self) -> Result<(), SubscriberError> {
            self.record("heartbeat");
            Ok(())
        }

        async fn reset_state(&self) -> Result<(), SubscriberError> {
            self.record("reset_state");
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_on_event_routes_every_variant() {
        let sub = Recorder::new();

        let events = [
            Event::ServiceTrouble,
            Event::NetworkTrouble,
            Event::SystemTrouble,
            Event::ApiRate { rate: 0.5 },
            Event::Upload,
            Event::DbOperation { success: true },
            Event::Heartbeat,
            Event::ResetState,
        ];
        for event in &events {
            sub.on_event(event).await.unwrap();
        }

        let calls = sub.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                "service_trouble",
                "network_trouble",
                "system_trouble",
                "api_rate:0.5",
                "upload",
                "db_operation:true",
                "heartbeat",
                "reset_state",
            ],
            "each variant must reach exactly its own handler, in call order"
        );
    }

    #[tokio::test]
    async fn test_defaults_are_silent_no_ops() {
        struct Bare;

        #[async_trait]
        impl Subscribe for Bare {
            fn description(&self) -> &str {
                "bare"
            }
        }

        let sub = Bare;
        assert!(sub.is_ready(), "readiness defaults to true");
        sub.init().await.unwrap();
        sub.on_event(&Event::Heartbeat).await.unwrap();
        sub.on_event(&Event::ApiRate { rate: 2.0 }).await.unwrap();
        sub.shutdown().await.unwrap();
    }
}
