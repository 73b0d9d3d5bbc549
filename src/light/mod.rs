//! # Indicator light: colors, patterns, and the animation engine.
//!
//! This module groups the pure color/pattern primitives, the rate gradient,
//! and the stateful [`LightAnimator`] that drives one device, plus the
//! [`LightSubscriber`] that plugs the engine into the event fan-out.
//!
//! ## Architecture
//! ```text
//! Event ──► LightSubscriber ──► LightAnimator ──► IndicatorDevice
//!                                   │
//!                                   ├─ Color + brightness/lerp helpers
//!                                   ├─ Pattern (bounded timed frames)
//!                                   ├─ traffic-light gradient (rate → color)
//!                                   └─ halt token (shutdown interrupts playback)
//! ```
//!
//! ## Contents
//! - [`Color`], [`Frame`], [`Pattern`] pure value types
//! - [`effective_rate`], [`traffic_light`] rate-to-color mapping
//! - [`LightAnimator`] exclusive animation engine over one device
//! - [`LightSubscriber`] the [`Subscribe`](crate::subscribers::Subscribe)
//!   implementation wrapping the engine

mod animator;
mod color;
mod gradient;
mod pattern;
mod subscriber;

#[cfg(test)]
pub(crate) mod mock;

pub use animator::LightAnimator;
pub use color::Color;
pub use gradient::{effective_rate, traffic_light};
pub use pattern::{Frame, Pattern};
pub use subscriber::LightSubscriber;
