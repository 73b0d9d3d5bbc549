//! # Traffic-light gradient: mapping a rate onto a red/amber/green ramp.
//!
//! Two pure functions used by the rate animation:
//!
//! - [`effective_rate`] normalizes a raw rate into the displayable band.
//! - [`traffic_light`] maps a position in `[0, 1]` onto a two-segment
//!   linear ramp (red at 0, amber at 0.5, green at 1) and scales it by a
//!   brightness factor.
//!
//! ## Rules
//! - The ramp is continuous and per-channel monotonic: red only falls,
//!   green only rises as the position grows.
//! - [`effective_rate`] never returns a value below `0.06`, so a rate of
//!   zero lands on a reddish amber rather than the pure red reserved for
//!   error indications.
//! - Out-of-range inputs are clamped, never rejected.
//!
//! ## Example
//! ```rust
//! use blinkbus::light::{effective_rate, traffic_light};
//! use blinkbus::Color;
//!
//! // A dead rate is lifted off the floor.
//! assert_eq!(effective_rate(0.0), 0.06);
//!
//! // Everything from 0.95 up is treated as a full rate.
//! assert_eq!(effective_rate(0.95), effective_rate(1.2));
//!
//! // Full rate at half brightness is a half-bright green.
//! assert_eq!(traffic_light(1.0, 0.5), Color::new(0, 128, 0));
//! ```

use crate::light::Color;

/// Ramp color at position 0.
const STOP: Color = Color::new(255, 0, 0);

/// Ramp color at position 0.5.
const CAUTION: Color = Color::new(255, 191, 0);

/// Ramp color at position 1.
const GO: Color = Color::new(0, 255, 0);

/// Normalizes a raw rate into the displayable `[0.06, 1.0]` band.
///
/// Clamps to `[0, 1]`, snaps anything at or above `0.95` to `1.0`, then
/// remaps through `rate * 0.94 + 0.06`. The floor keeps a zero rate from
/// reaching the pure-red end of the ramp.
#[must_use]
pub fn effective_rate(raw: f64) -> f64 {
    let rate = raw.clamp(0.0, 1.0);
    let rate = if rate >= 0.95 { 1.0 } else { rate };
    rate * 0.94 + 0.06
}

/// Color of the red/amber/green ramp at `position`, scaled by `brightness`.
///
/// The ramp is two linear segments joined at amber: `[0, 0.5]` blends red
/// toward amber, `[0.5, 1]` blends amber toward green. Both `position` and
/// `brightness` are clamped to `[0, 1]`.
#[must_use]
pub fn traffic_light(position: f64, brightness: f64) -> Color {
    let t = position.clamp(0.0, 1.0);
    let full = if t <= 0.5 {
        STOP.lerp(CAUTION, t * 2.0)
    } else {
        CAUTION.lerp(GO, (t - 0.5) * 2.0)
    };
    full.with_brightness(brightness)
}
