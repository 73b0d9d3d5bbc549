//! # Pattern: a bounded sequence of timed color frames.
//!
//! A [`Pattern`] is the unit a device animation is expressed in: an ordered
//! list of [`Frame`]s, each a color held for a duration. Insertion order is
//! playback order and the length is capped at [`Pattern::MAX_FRAMES`], which
//! bounds both the device buffer a push can occupy and the granularity of
//! every algorithm that subdivides a total duration into frames (the
//! cross-fade step count equals this constant).
//!
//! ## Rules
//! - [`Pattern::push`] returns `&mut Self` for chaining.
//! - Appends past [`Pattern::MAX_FRAMES`] are silently ignored.
//! - Patterns are plain values; nothing here talks to a device.
//!
//! ## Example
//! ```rust
//! use blinkbus::{Color, Pattern};
//!
//! let mut p = Pattern::new();
//! p.push(Color::RED, 200).push(Color::BLACK, 100);
//! assert_eq!(p.len(), 2);
//!
//! let fade = Pattern::cross_fade(
//!     Color::BLACK,
//!     Color::new(64, 64, 64),
//!     std::time::Duration::from_millis(2000),
//! );
//! assert_eq!(fade.len(), Pattern::MAX_FRAMES);
//! assert_eq!(fade.frames()[0].color, Color::new(1, 1, 1));
//! assert_eq!(fade.frames()[63].color, Color::new(64, 64, 64));
//! ```

use std::time::Duration;

use crate::light::Color;

/// One animation step: a color held for a number of milliseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Frame {
    /// Color to display.
    pub color: Color,
    /// Hold time in milliseconds. Zero means "set and leave".
    pub millis: u64,
}

impl Frame {
    /// Hold time as a [`Duration`].
    #[must_use]
    pub fn duration(&self) -> Duration {
        Duration::from_millis(self.millis)
    }
}

/// An ordered, size-bounded sequence of [`Frame`]s.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Pattern {
    frames: Vec<Frame>,
}

impl Pattern {
    /// Hard cap on frames per pattern.
    ///
    /// Shared by every duration-subdividing algorithm: a cross-fade always
    /// produces exactly this many frames.
    pub const MAX_FRAMES: usize = 64;

    /// Creates an empty pattern.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a frame; frames past [`Pattern::MAX_FRAMES`] are dropped.
    pub fn push(&mut self, color: Color, millis: u64) -> &mut Self {
        if self.frames.len() < Self::MAX_FRAMES {
            self.frames.push(Frame { color, millis });
        }
        self
    }

    /// A single zero-duration frame: set the color and leave it lit.
    #[must_use]
    pub fn solid(color: Color) -> Self {
        let mut p = Self::new();
        p.push(color, 0);
        p
    }

    /// `cycles` repetitions of `color` for `on_ms` followed by off for `off_ms`.
    #[must_use]
    pub fn blink(color: Color, on_ms: u64, off_ms: u64, cycles: usize) -> Self {
        let mut p = Self::new();
        for _ in 0..cycles {
            p.push(color, on_ms).push(Color::BLACK, off_ms);
        }
        p
    }

    /// Linear per-channel fade from `from` to `to` over `total`.
    ///
    /// Produces exactly [`Pattern::MAX_FRAMES`] frames. Each channel advances
    /// by `(target - start) / steps` per frame, accumulated in `f32`, rounded
    /// to the nearest integer and clamped to `[0, 255]` at every step so
    /// rounding drift can never escape the channel range. The per-frame hold
    /// time is `total / steps` rounded to the nearest millisecond.
    #[must_use]
    pub fn cross_fade(from: Color, to: Color, total: Duration) -> Self {
        let steps = Self::MAX_FRAMES;
        let step_ms = (total.as_millis() as f32 / steps as f32).round() as u64;

        let mut r = f32::from(from.r);
        let mut g = f32::from(from.g);
        let mut b = f32::from(from.b);

        let dr = (f32::from(to.r) - r) / steps as f32;
        let dg = (f32::from(to.g) - g) / steps as f32;
        let db = (f32::from(to.b) - b) / steps as f32;

        let mut p = Self::new();
        for _ in 0..steps {
            r += dr;
            g += dg;
            b += db;
            p.push(Color::new(channel(r), channel(g), channel(b)), step_ms);
        }
        p
    }

    /// Frames in playback order.
    #[must_use]
    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    /// Number of frames.
    #[must_use]
    pub fn len(&self) -> usize {
        self.frames.len()
    }

    /// True if the pattern holds no frames.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Sum of all frame hold times.
    #[must_use]
    pub fn total_duration(&self) -> Duration {
        Duration::from_millis(self.frames.iter().map(|f| f.millis).sum())
    }
}

/// Rounds an accumulated channel value and clamps it into `[0, 255]`.
fn channel(v: f32) -> u8 {
    (v.round() as i32).clamp(0, 255) as u8
}
