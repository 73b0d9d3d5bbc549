//! # Event notifier - concurrent fan-out with bounded-grace shutdown.
//!
//! [`EventNotifier`] is the publisher facade: producers call plain methods
//! (`heartbeat()`, `update_api_rate(0.8)`, ...) and every registered
//! subscriber receives the event on its own spawned task.
//!
//! ## Architecture
//! ```text
//! heartbeat() / service_trouble() / update_api_rate(r) / ...
//!     │
//!     ▼
//! dispatch(event)              (sync, never awaits)
//!     ├─ tracker closed? ──► drop event (debug log)
//!     └─ for every registered subscriber:
//!            spawn ──► subscriber.on_event(&event)
//!                          ├─ Err(e) → warn (that subscriber only)
//!                          └─ panic  → caught, error log
//! ```
//!
//! ## Rules
//! - **Fire-and-forget**: publishers never wait for delivery
//! - **Per-delivery task**: one spawned task per (event, subscriber) pair
//! - **No cross-subscriber ordering**: subscriber A may still be handling
//!   event N while B is already done with N+3
//! - **Isolation**: an erroring or panicking subscriber never affects others
//! - **After shutdown**: events are dropped, never queued
//!
//! ## Panic handling
//! Delivery tasks use `catch_unwind` to isolate panics. A panicking handler
//! is reported and the rest of the system keeps running.
//!
//! **Warning**: `AssertUnwindSafe` is used, which can leave shared state
//! inconsistent if a subscriber panics while holding a lock.
//!
//! ## Shutdown path
//! ```text
//! shutdown():
//!   1. registry.shutdown_all()    (subscriber teardown, set cleared)
//!   2. close the tracker          (new dispatches are dropped)
//!   3. wait up to `grace`         (in-flight deliveries finish)
//!   4. on overrun: cancel         (stuck deliveries abandoned, warn)
//! ```
//!
//! ## Example
//! ```rust,no_run
//! use std::sync::Arc;
//! use blinkbus::{EventNotifier, LogSubscriber, NotifierConfig};
//!
//! # async fn demo() {
//! let notifier = EventNotifier::new(NotifierConfig::default());
//! notifier.add_and_init_subscriber(Arc::new(LogSubscriber)).await;
//!
//! notifier.heartbeat();
//! notifier.update_api_rate(0.42);
//!
//! notifier.shutdown().await;
//! # }
//! ```

use std::panic::AssertUnwindSafe;
use std::sync::Arc;

use futures::FutureExt;
use tokio::select;
use tokio::time::timeout;
use tokio_util::sync::CancellationToken;
use tokio_util::task::TaskTracker;
use tracing::{debug, error, warn};

use crate::config::NotifierConfig;
use crate::events::Event;
use crate::subscribers::{Subscribe, SubscriberRegistry};

/// Fans events out to all registered subscribers, one task per delivery.
///
/// Owns the [`SubscriberRegistry`] and the tracker for in-flight delivery
/// tasks. Publishing is synchronous and cheap; all subscriber work happens
/// on spawned tasks.
///
/// Publish methods must be called from within a Tokio runtime.
pub struct EventNotifier {
    cfg: NotifierConfig,
    registry: SubscriberRegistry,
    tracker: TaskTracker,
    cancel: CancellationToken,
}

impl EventNotifier {
    /// Creates a notifier with no subscribers.
    #[must_use]
    pub fn new(cfg: NotifierConfig) -> Self {
        Self {
            cfg,
            registry: SubscriberRegistry::new(),
            tracker: TaskTracker::new(),
            cancel: CancellationToken::new(),
        }
    }

    /// Registers a subscriber and runs its `init`.
    ///
    /// Returns `&Self` so registrations can be chained. Init failures are
    /// logged by the registry; the subscriber stays registered, not ready.
    pub async fn add_and_init_subscriber(&self, subscriber: Arc<dyn Subscribe>) -> &Self {
        self.registry.add_and_init(subscriber).await;
        self
    }

    /// Runs a subscriber's `shutdown` and removes it from the set.
    ///
    /// Deliveries already spawned for it still run to completion; it only
    /// stops receiving new events.
    pub async fn shutdown_and_remove_subscriber(&self, subscriber: Arc<dyn Subscribe>) -> &Self {
        self.registry.shutdown_and_remove(subscriber).await;
        self
    }

    /// Snapshot of `(description, is_ready)` per subscriber, in
    /// registration order.
    #[must_use]
    pub fn subscribers(&self) -> Vec<(String, bool)> {
        self.registry.statuses()
    }

    /// A dependent service is misbehaving.
    pub fn service_trouble(&self) {
        self.dispatch(Event::ServiceTrouble);
    }

    /// Network connectivity is degraded or lost.
    pub fn network_trouble(&self) {
        self.dispatch(Event::NetworkTrouble);
    }

    /// The system itself is in trouble.
    pub fn system_trouble(&self) {
        self.dispatch(Event::SystemTrouble);
    }

    /// Publishes the current API consumption rate, raw and unclamped.
    pub fn update_api_rate(&self, rate: f64) {
        self.dispatch(Event::ApiRate { rate });
    }

    /// A payload upload just happened.
    pub fn upload_event(&self) {
        self.dispatch(Event::Upload);
    }

    /// A database operation completed with the given outcome.
    pub fn db_operation_event(&self, success: bool) {
        self.dispatch(Event::DbOperation { success });
    }

    /// Periodic liveness tick.
    pub fn heartbeat(&self) {
        self.dispatch(Event::Heartbeat);
    }

    /// Asks every subscriber to return to its baseline state.
    pub fn reset_state(&self) {
        self.dispatch(Event::ResetState);
    }

    /// Gracefully shuts the notifier down.
    ///
    /// 1. Shuts down every registered subscriber and clears the set.
    /// 2. Closes the tracker, so later publishes are dropped.
    /// 3. Waits up to [`NotifierConfig::grace`] for in-flight deliveries.
    /// 4. On overrun, cancels the remaining deliveries and waits for the
    ///    tasks to acknowledge.
    ///
    /// Deliveries spawned before the call may still be running while their
    /// subscriber is shut down; handlers must tolerate that overlap.
    ///
    /// Idempotent: a second call finds an empty registry and an empty,
    /// closed tracker.
    pub async fn shutdown(&self) {
        self.registry.shutdown_all().await;

        self.tracker.close();
        if timeout(self.cfg.grace, self.tracker.wait()).await.is_err() {
            warn!(
                grace = ?self.cfg.grace,
                "in-flight deliveries exceeded the grace period; cancelling them"
            );
            self.cancel.cancel();
            self.tracker.wait().await;
        }
    }

    /// Spawns one delivery task per registered subscriber.
    ///
    /// Synchronous: snapshots the registry and returns. Once the tracker is
    /// closed the event is dropped, so no delivery can outlive `shutdown`.
    fn dispatch(&self, event: Event) {
        if self.tracker.is_closed() {
            debug!(event = event.as_label(), "notifier is shut down; dropping event");
            return;
        }
        for subscriber in self.registry.snapshot() {
            let cancel = self.cancel.clone();
            self.tracker.spawn(async move {
                Self::deliver(event, subscriber, cancel).await;
            });
        }
    }

    /// Runs one delivery, isolating errors and panics to this subscriber.
    async fn deliver(event: Event, subscriber: Arc<dyn Subscribe>, cancel: CancellationToken) {
        let fut = subscriber.on_event(&event);

        select! {
            outcome = AssertUnwindSafe(fut).catch_unwind() => match outcome {
                Ok(Ok(())) => {}
                Ok(Err(err)) => {
                    warn!(
                        event = event.as_label(),
                        subscriber = subscriber.description(),
                        error = %err,
                        "subscriber failed to handle event"
                    );
                }
                Err(panic_err) => {
                    let info = {
                        let any = &*panic_err;
                        if let Some(msg) = any.downcast_ref::<&'static str>() {
                            (*msg).to_string()
                        } else if let Some(msg) = any.downcast_ref::<String>() {
                            msg.clone()
                        } else {
                            "unknown panic".to_string()
                        }
                    };
                    error!(
                        event = event.as_label(),
                        subscriber = subscriber.description(),
                        panic = %info,
                        "subscriber panicked while handling event"
                    );
                }
            },
            _ = cancel.cancelled() => {
                warn!(
                    event = event.as_label(),
                    subscriber = subscriber.description(),
                    "delivery abandoned during shutdown"
                );
            }
        }
    }
}

impl Default for EventNotifier {
    fn default() -> Self {
        Self::new(NotifierConfig::default())
    }
}
