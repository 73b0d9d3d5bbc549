//! # RGB color value with brightness and blend helpers.
//!
//! [`Color`] is a plain three-channel value type. Animations build on two
//! small operations: [`Color::with_brightness`] (scale every channel by a
//! factor) and [`Color::lerp`] (per-channel linear blend, used by the
//! traffic-light gradient).
//!
//! The named constants cover the palette the built-in animations use; the
//! values follow the CSS color names of the same spelling.
//!
//! ## Example
//! ```rust
//! use blinkbus::Color;
//!
//! let dimmed = Color::new(200, 100, 0).with_brightness(0.5);
//! assert_eq!(dimmed, Color::new(100, 50, 0));
//!
//! let mid = Color::BLACK.lerp(Color::new(100, 200, 50), 0.5);
//! assert_eq!(mid, Color::new(50, 100, 25));
//! ```

/// An RGB color. Equality is per-channel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Color {
    /// Red channel.
    pub r: u8,
    /// Green channel.
    pub g: u8,
    /// Blue channel.
    pub b: u8,
}

impl Color {
    /// All channels off.
    pub const BLACK: Color = Color::new(0, 0, 0);
    /// CSS `red`.
    pub const RED: Color = Color::new(255, 0, 0);
    /// CSS `yellow`.
    pub const YELLOW: Color = Color::new(255, 255, 0);
    /// CSS `green`.
    pub const GREEN: Color = Color::new(0, 128, 0);
    /// CSS `blue`.
    pub const BLUE: Color = Color::new(0, 0, 255);
    /// CSS `deepskyblue`.
    pub const DEEP_SKY_BLUE: Color = Color::new(0, 191, 255);
    /// CSS `darkmagenta`.
    pub const DARK_MAGENTA: Color = Color::new(139, 0, 139);

    /// Creates a color from raw channels.
    #[must_use]
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// True if every channel is zero.
    #[must_use]
    pub fn is_black(&self) -> bool {
        *self == Color::BLACK
    }

    /// Scales every channel by `factor`, rounding to the nearest value.
    ///
    /// `factor` is clamped to `[0.0, 1.0]`, so the result never saturates
    /// past the original channels.
    #[must_use]
    pub fn with_brightness(self, factor: f64) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        Self {
            r: (f64::from(self.r) * factor).round() as u8,
            g: (f64::from(self.g) * factor).round() as u8,
            b: (f64::from(self.b) * factor).round() as u8,
        }
    }

    /// Per-channel linear blend toward `to`.
    ///
    /// `t = 0.0` yields `self`, `t = 1.0` yields `to`; values outside
    /// `[0.0, 1.0]` are clamped.
    #[must_use]
    pub fn lerp(self, to: Color, t: f64) -> Self {
        let t = t.clamp(0.0, 1.0);
        let blend = |a: u8, b: u8| -> u8 {
            let v = f64::from(a) + (f64::from(b) - f64::from(a)) * t;
            v.round().clamp(0.0, 255.0) as u8
        };
        Self {
            r: blend(self.r, to.r),
            g: blend(self.g, to.g),
            b: blend(self.b, to.b),
        }
    }
}
