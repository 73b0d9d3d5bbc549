//! Events: the data model and the dispatcher that fans them out.
//!
//! This module groups the event **data model** and the **notifier** used to
//! publish events to every registered subscriber.
//!
//! ## Contents
//! - [`Event`] the tagged event set producers can publish
//! - [`EventNotifier`] fire-and-forget fan-out with bounded-grace shutdown
//!
//! ## Quick reference
//! - **Publishers**: application code, via the notifier's publish methods
//!   (`heartbeat()`, `service_trouble()`, `update_api_rate(r)`, ...).
//! - **Consumers**: [`Subscribe`](crate::subscribers::Subscribe)
//!   implementations, each delivery on its own spawned task.
//!
//! See the crate root for the system-level wiring diagram.

mod event;
mod notifier;

pub use event::Event;
pub use notifier::EventNotifier;
