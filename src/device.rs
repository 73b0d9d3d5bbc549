//! # Device collaborator traits
//!
//! The animation engine is generic over the hardware it drives. Two traits
//! make up the contract:
//!
//! - [`DeviceManager`]: enumeration. Finds the first indicator device on
//!   the bus and releases enumeration resources on shutdown. A manager is
//!   reusable: after [`DeviceManager::close`] it may discover again.
//! - [`IndicatorDevice`]: one opened device. Color read-back, pattern
//!   playback, turn-off, close.
//!
//! ## Contract
//! - [`IndicatorDevice::push_pattern`] plays the frames on the caller's
//!   task; its await points are where a halted animation actually stops.
//! - A one-frame pattern with duration 0 means "set the color and leave it".
//! - All fallible operations return [`DeviceError`]. The engine logs and
//!   swallows them; implementations should not retry internally.
//!
//! ## Example (skeleton)
//! ```rust
//! // use blinkbus::{DeviceManager, IndicatorDevice, DeviceError};
//! //
//! // struct UsbBus { .. }
//! // impl DeviceManager for UsbBus {
//! //     type Device = UsbLight;
//! //     fn discover_first(&mut self) -> Result<Option<UsbLight>, DeviceError> {
//! //         // enumerate, open the first matching device...
//! //     }
//! //     fn close(&mut self) { /* release the bus handle */ }
//! // }
//! ```

use async_trait::async_trait;

use crate::error::DeviceError;
use crate::light::{Color, Pattern};

/// Contract for device enumeration.
///
/// Owned by the animation engine for its whole lifetime; `discover_first`
/// runs on every engine init, `close` on every engine shutdown.
pub trait DeviceManager: Send + 'static {
    /// The device type this manager hands out.
    type Device: IndicatorDevice;

    /// Finds and opens the first indicator device, if any is attached.
    ///
    /// `Ok(None)` is the normal "nothing plugged in" outcome, not an error.
    fn discover_first(&mut self) -> Result<Option<Self::Device>, DeviceError>;

    /// Releases enumeration resources. The manager stays usable.
    fn close(&mut self);
}

/// Contract for one opened indicator device.
///
/// Called from inside the engine's state lock, so implementations never see
/// overlapping calls.
#[async_trait]
pub trait IndicatorDevice: Send + 'static {
    /// Reads back the color the device is currently showing.
    async fn current_color(&mut self) -> Result<Color, DeviceError>;

    /// Plays a pattern to completion, frame by frame.
    ///
    /// Cancelling the returned future mid-pattern is allowed; the engine
    /// does so when an animation is halted.
    async fn push_pattern(&mut self, pattern: &Pattern) -> Result<(), DeviceError>;

    /// Turns the light off without closing the device.
    async fn turn_off(&mut self) -> Result<(), DeviceError>;

    /// Releases the device handle.
    fn close(self);
}
