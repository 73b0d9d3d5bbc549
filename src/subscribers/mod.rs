//! # Event subscribers for the fan-out engine.
//!
//! This module provides the [`Subscribe`] trait, the [`SubscriberRegistry`]
//! that owns the registered set and its lifecycle, and the built-in
//! [`LogSubscriber`].
//!
//! ## Architecture
//! ```text
//! Event flow:
//!   EventNotifier ── snapshot() ──► SubscriberRegistry
//!        │                               │ Vec<Arc<dyn Subscribe>>
//!        │                               │ (registration order)
//!        └── spawn per subscriber ──► Subscribe::on_event(&Event)
//!                                          │
//!                                     ┌────┴──────────┬─────────┐
//!                                     ▼               ▼         ▼
//!                               LightSubscriber  LogSubscriber  ...
//! ```
//!
//! ## Subscriber lifecycle
//! - `add_and_init` registers an instance and runs its `init` exactly once.
//! - `shutdown_and_remove` runs `shutdown` and evicts it, even on failure.
//! - Failures stay with their subscriber: logged, never propagated.
//!
//! ## Implementing custom subscribers
//! ```no_run
//! use blinkbus::{Subscribe, SubscriberError};
//! use async_trait::async_trait;
//!
//! struct Pager;
//!
//! #[async_trait]
//! impl Subscribe for Pager {
//!     async fn system_trouble(&self) -> Result<(), SubscriberError> {
//!         // page the on-call...
//!         Ok(())
//!     }
//!
//!     fn description(&self) -> &str {
//!         "pager"
//!     }
//! }
//! ```

mod log;
mod registry;
mod subscribe;

pub use log::LogSubscriber;
pub use registry::SubscriberRegistry;
pub use subscribe::Subscribe;
