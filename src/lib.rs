//! # blinkbus
//!
//! **Blinkbus** is an event fan-out library with a built-in RGB indicator
//! light subscriber.
//!
//! Application code publishes domain events (trouble, heartbeats, uploads,
//! API rate updates) through an [`EventNotifier`]; every registered
//! [`Subscribe`] implementation receives each event on its own spawned
//! task. The crate ships one real subscriber: [`LightSubscriber`], which
//! renders events as color animations on a single RGB indicator behind a
//! pluggable [`DeviceManager`] seam.
//!
//! ## Architecture
//! ### Overview
//! ```text
//!   service_trouble() · heartbeat() · update_api_rate(r) · ...
//!                  │ (fire-and-forget, sync)
//!                  ▼
//! ┌─────────────────────────────────────────────────────────┐
//! │  EventNotifier                                          │
//! │  - SubscriberRegistry (membership + init/shutdown)      │
//! │  - TaskTracker        (one task per delivery)           │
//! │  - grace shutdown     (close → wait → cancel)           │
//! └───────┬───────────────────┬───────────────────┬─────────┘
//!         ▼                   ▼                   ▼
//!   ┌───────────┐       ┌───────────┐       ┌───────────┐
//!   │ delivery  │       │ delivery  │       │ delivery  │
//!   │   task    │       │   task    │       │   task    │
//!   └─────┬─────┘       └─────┬─────┘       └─────┬─────┘
//!         ▼                   ▼                   ▼
//!   sub1.on_event()     sub2.on_event()     subN.on_event()
//!
//!   LightSubscriber ──► LightAnimator ──► IndicatorDevice
//!                        │ animations take the state lock with try-lock:
//!                        │ a busy engine drops the new animation
//!                        └─ a halt token makes shutdown/reset win instantly
//! ```
//!
//! ### Animation decisions
//! ```text
//! on_event(Event) ──► handler ──► LightAnimator
//!
//! trouble / heartbeat / upload / db        update_api_rate(rate)
//!   │ try_lock(state)                        │ try_lock(state)
//!   ├─ busy or no device ──► dropped         ├─ busy or no device ──► dropped
//!   └─ play pattern                          ├─ lit? dim cue + 50ms pause
//!        └─ halted? force off, stop          └─ 2s cross-fade to the
//!                                               traffic-light gradient color
//!
//! init / shutdown / reset_state: blocking lock (always run, never dropped)
//! ```
//!
//! ## Features
//! | Area               | Description                                                          | Key types / traits                     |
//! |--------------------|----------------------------------------------------------------------|----------------------------------------|
//! | **Publisher API**  | Fire-and-forget publish methods, one delivery task per subscriber.   | [`EventNotifier`], [`Event`]           |
//! | **Subscriber API** | Per-event handlers with lifecycle, readiness, and status snapshots.  | [`Subscribe`], [`SubscriberRegistry`]  |
//! | **Indicator light**| Animation state machine for a single RGB indicator.                  | [`LightSubscriber`], [`LightAnimator`] |
//! | **Patterns**       | Frame sequences: solid, blink, 64-frame cross-fade, rate gradient.   | [`Pattern`], [`Frame`], [`Color`]      |
//! | **Device seam**    | Pluggable discovery and pixel pushing for real or fake hardware.     | [`DeviceManager`], [`IndicatorDevice`] |
//! | **Errors**         | Typed device and subscriber errors with stable log labels.           | [`DeviceError`], [`SubscriberError`]   |
//! | **Configuration**  | Shutdown grace for in-flight deliveries.                             | [`NotifierConfig`]                     |
//!
//! ## Example
//! ```rust
//! use std::sync::Arc;
//! use blinkbus::{EventNotifier, LogSubscriber, NotifierConfig};
//!
//! #[tokio::main(flavor = "current_thread")]
//! async fn main() {
//!     let notifier = EventNotifier::new(NotifierConfig::default());
//!
//!     // Register subscribers (a built-in logger here; implement
//!     // `Subscribe` to plug in your own).
//!     notifier.add_and_init_subscriber(Arc::new(LogSubscriber)).await;
//!
//!     // Publish from anywhere; publishers never wait for delivery.
//!     notifier.heartbeat();
//!     notifier.db_operation_event(true);
//!     notifier.update_api_rate(0.42);
//!
//!     // Shuts every subscriber down, then waits for in-flight
//!     // deliveries (bounded by `grace`).
//!     notifier.shutdown().await;
//! }
//! ```
//!
//! ## Driving an indicator light
//! ```rust,ignore
//! use std::sync::Arc;
//! use blinkbus::{EventNotifier, LightSubscriber, NotifierConfig};
//!
//! // `UsbManager` implements `DeviceManager` for your hardware.
//! let notifier = EventNotifier::new(NotifierConfig::default());
//! let light = Arc::new(LightSubscriber::new(UsbManager::new()));
//! notifier.add_and_init_subscriber(light).await;
//!
//! notifier.service_trouble();    // five yellow blinks
//! notifier.update_api_rate(0.8); // cross-fade toward green
//! ```

mod config;
mod device;
mod error;

pub mod events;
pub mod light;
pub mod subscribers;

// ---- Public re-exports ----

pub use config::NotifierConfig;
pub use device::{DeviceManager, IndicatorDevice};
pub use error::{DeviceError, SubscriberError};
pub use events::{Event, EventNotifier};
pub use light::{Color, Frame, LightAnimator, LightSubscriber, Pattern};
pub use subscribers::{LogSubscriber, Subscribe, SubscriberRegistry};
