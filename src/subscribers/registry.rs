//! # Subscriber registry - lifecycle manager for the subscriber set.
//!
//! Tracks which subscribers are currently registered, runs each one's
//! `init` when it joins and its `shutdown` when it leaves, and hands out
//! set snapshots for dispatch and status reporting.
//!
//! ## Internal scheme
//! ```text
//! add_and_init(s):
//!   ├─ same instance already present? → warn, no-op
//!   └─ else: push(s); s.init().await   (Err → warn, s stays registered)
//!
//! shutdown_and_remove(s):
//!   ├─ s.shutdown().await              (Err → warn)
//!   └─ remove(s) unconditionally
//!
//! shutdown_all():
//!   └─ drain the set; shutdown each    (one failure never stops the rest)
//!
//! snapshot() -> Vec<Arc<dyn Subscribe>>   (sync, for dispatch)
//! statuses() -> Vec<(String, bool)>       (description, is_ready)
//! ```
//!
//! ## Rules
//! - Identity is the subscriber *instance* (pointer equality), never its
//!   description. Registering a second instance with the same description
//!   is two registrations.
//! - Lifecycle transitions serialize on one async lock that is held across
//!   the init/shutdown awaits; membership lives in a sync `RwLock` so
//!   dispatch snapshots never wait behind a slow lifecycle call.
//! - Init/shutdown failures are logged and swallowed here; they never
//!   propagate to the caller or to other subscribers.

use std::sync::{Arc, RwLock};

use tokio::sync::Mutex;
use tracing::{info, warn};

use crate::subscribers::Subscribe;

/// Registration-ordered set of subscribers with serialized lifecycle.
pub struct SubscriberRegistry {
    /// Serializes add/remove/shutdown transitions across their awaits.
    lifecycle: Mutex<()>,
    /// Current membership, in registration order.
    set: RwLock<Vec<Arc<dyn Subscribe>>>,
}

impl SubscriberRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self {
            lifecycle: Mutex::new(()),
            set: RwLock::new(Vec::new()),
        }
    }

    /// Registers a subscriber and runs its `init`.
    ///
    /// Re-registering the same instance is a warning and a no-op. A failed
    /// init leaves the subscriber registered; its `is_ready` keeps
    /// reflecting the actual outcome.
    pub async fn add_and_init(&self, subscriber: Arc<dyn Subscribe>) -> &Self {
        let _guard = self.lifecycle.lock().await;

        if self.contains(&subscriber) {
            warn!(
                subscriber = subscriber.description(),
                "subscriber already registered; ignoring"
            );
            return self;
        }
        self.set.write().unwrap().push(subscriber.clone());

        info!(subscriber = subscriber.description(), "initializing subscriber");
        if let Err(err) = subscriber.init().await {
            warn!(
                subscriber = subscriber.description(),
                error = %err,
                "subscriber init failed; registered but not ready"
            );
        }
        self
    }

    /// Runs a subscriber's `shutdown`, then removes it from the set.
    ///
    /// Removal happens even when shutdown fails, so a broken subscriber
    /// can always be evicted. Shutdown runs even for an instance that was
    /// never registered.
    pub async fn shutdown_and_remove(&self, subscriber: Arc<dyn Subscribe>) -> &Self {
        let _guard = self.lifecycle.lock().await;

        self.shutdown_one(&subscriber).await;

        let mut set = self.set.write().unwrap();
        match Self::position(&set, &subscriber) {
            Some(pos) => {
                set.remove(pos);
            }
            None => {
                warn!(
                    subscriber = subscriber.description(),
                    "subscriber not registered; nothing to remove"
                );
            }
        }
        self
    }

    /// Shuts down every registered subscriber and clears the set.
    ///
    /// Best-effort: each failure is logged per subscriber and the loop
    /// carries on.
    pub async fn shutdown_all(&self) {
        let _guard = self.lifecycle.lock().await;

        let drained: Vec<Arc<dyn Subscribe>> = {
            let mut set = self.set.write().unwrap();
            set.drain(..).collect()
        };
        for subscriber in &drained {
            self.shutdown_one(subscriber).await;
        }
    }

    /// Returns a copy of the current set for dispatch.
    ///
    /// This is a synchronous method using the read lock; it deliberately
    /// skips the lifecycle lock so dispatch keeps working while an init or
    /// shutdown is in flight.
    #[must_use]
    pub fn snapshot(&self) -> Vec<Arc<dyn Subscribe>> {
        self.set.read().unwrap().clone()
    }

    /// Maps each subscriber's description to its readiness flag.
    ///
    /// Preserves registration order.
    #[must_use]
    pub fn statuses(&self) -> Vec<(String, bool)> {
        self.set
            .read()
            .unwrap()
            .iter()
            .map(|s| (s.description().to_string(), s.is_ready()))
            .collect()
    }

    fn contains(&self, subscriber: &Arc<dyn Subscribe>) -> bool {
        Self::position(&self.set.read().unwrap(), subscriber).is_some()
    }

    fn position(set: &[Arc<dyn Subscribe>], subscriber: &Arc<dyn Subscribe>) -> Option<usize> {
        set.iter()
            .position(|s| std::ptr::eq::<dyn Subscribe>(&**s as _, &**subscriber as _))
    }

    async fn shutdown_one(&self, subscriber: &Arc<dyn Subscribe>) {
        info!(subscriber = subscriber.description(), "shutting down subscriber");
        if let Err(err) = subscriber.shutdown().await {
            warn!(
                subscriber = subscriber.description(),
                error = %err,
                "subscriber shutdown failed"
            );
        }
    }
}

impl Default for SubscriberRegistry {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

    use async_trait::async_trait;

    use super::*;
    use crate::error::SubscriberError;

    struct Probe {
        label: String,
        fail_init: bool,
        fail_shutdown: bool,
        ready: AtomicBool,
        init_calls: AtomicUsize,
        shutdown_calls: AtomicUsize,
    }

    impl Probe {
        fn new(label: &str) -> Arc<Self> {
            Arc::new(Self {
                label: label.to_string(),
                fail_init: false,
                fail_shutdown: false,
                ready: AtomicBool::new(false),
                init_calls: AtomicUsize::new(0),
                shutdown_calls: AtomicUsize::new(0),
            })
        }

        fn failing_init(label: &str) -> Arc<Self> {
            let mut p = Self::new(label);
            Arc::get_mut(&mut p).unwrap().fail_init = true;
            p
        }

        fn failing_shutdown(label: &str) -> Arc<Self> {
            let mut p = Self::new(label);
            Arc::get_mut(&mut p).unwrap().fail_shutdown = true;
            p
        }
    }

    #[async_trait]
    impl Subscribe for Probe {
        async fn init(&self) -> Result<(), SubscriberError> {
            self.init_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_init {
                return Err(SubscriberError::init("probe init refused"));
            }
            self.ready.store(true, Ordering::SeqCst);
            Ok(())
        }

        async fn shutdown(&self) -> Result<(), SubscriberError> {
            self.shutdown_calls.fetch_add(1, Ordering::SeqCst);
            if self.fail_shutdown {
                return Err(SubscriberError::shutdown("probe shutdown refused"));
            }
            self.ready.store(false, Ordering::SeqCst);
            Ok(())
        }

        fn description(&self) -> &str {
            &self.label
        }

        fn is_ready(&self) -> bool {
            self.ready.load(Ordering::SeqCst)
        }
    }

    #[tokio::test]
    async fn test_same_instance_initializes_once() {
        let registry = SubscriberRegistry::new();
        let probe = Probe::new("probe");

        for _ in 0..4 {
            registry.add_and_init(probe.clone()).await;
        }

        assert_eq!(
            probe.init_calls.load(Ordering::SeqCst),
            1,
            "re-registering the same instance must not re-init"
        );
        assert_eq!(registry.snapshot().len(), 1);
    }

    #[tokio::test]
    async fn test_statuses_preserve_registration_order() {
        let registry = SubscriberRegistry::new();
        registry.add_and_init(Probe::new("first")).await;
        registry.add_and_init(Probe::new("second")).await;
        registry.add_and_init(Probe::new("third")).await;

        let statuses = registry.statuses();
        let order: Vec<&str> = statuses.iter().map(|(d, _)| d.as_str()).collect();
        assert_eq!(order, vec!["first", "second", "third"]);
        assert!(statuses.iter().all(|(_, ready)| *ready));
    }

    #[tokio::test]
    async fn test_failed_init_stays_registered_not_ready() {
        let registry = SubscriberRegistry::new();
        let probe = Probe::failing_init("wonky");

        registry.add_and_init(probe.clone()).await;

        assert_eq!(probe.init_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            registry.statuses(),
            vec![("wonky".to_string(), false)],
            "a failed init keeps the subscriber in the set, not ready"
        );
    }

    #[tokio::test]
    async fn test_remove_happens_even_when_shutdown_fails() {
        let registry = SubscriberRegistry::new();
        let probe = Probe::failing_shutdown("stubborn");

        registry.add_and_init(probe.clone()).await;
        registry.shutdown_and_remove(probe.clone()).await;

        assert_eq!(probe.shutdown_calls.load(Ordering::SeqCst), 1);
        assert!(
            registry.snapshot().is_empty(),
            "a failed shutdown must not keep the subscriber registered"
        );
    }

    #[tokio::test]
    async fn test_remove_unregistered_still_runs_shutdown() {
        let registry = SubscriberRegistry::new();
        let stranger = Probe::new("stranger");

        registry.shutdown_and_remove(stranger.clone()).await;

        assert_eq!(
            stranger.shutdown_calls.load(Ordering::SeqCst),
            1,
            "shutdown runs even for an instance that was never registered"
        );
        assert!(registry.snapshot().is_empty());
    }

    #[tokio::test]
    async fn test_shutdown_all_survives_individual_failures() {
        let registry = SubscriberRegistry::new();
        let bad = Probe::failing_shutdown("bad");
        let good = Probe::new("good");

        registry.add_and_init(bad.clone()).await;
        registry.add_and_init(good.clone()).await;
        registry.shutdown_all().await;

        assert_eq!(bad.shutdown_calls.load(Ordering::SeqCst), 1);
        assert_eq!(
            good.shutdown_calls.load(Ordering::SeqCst),
            1,
            "one failing shutdown must not skip the rest"
        );
        assert!(registry.snapshot().is_empty());
        assert!(registry.statuses().is_empty());
    }

    #[tokio::test]
    async fn test_identity_is_per_instance_not_per_description() {
        let registry = SubscriberRegistry::new();
        let a = Probe::new("twin");
        let b = Probe::new("twin");

        registry.add_and_init(a.clone()).await;
        registry.add_and_init(b.clone()).await;

        assert_eq!(registry.snapshot().len(), 2, "same description, distinct instances");
        assert_eq!(a.init_calls.load(Ordering::SeqCst), 1);
        assert_eq!(b.init_calls.load(Ordering::SeqCst), 1);
    }
}
