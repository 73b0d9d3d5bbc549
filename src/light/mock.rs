//! Scripted device doubles for engine and subscriber tests.
//!
//! [`MockManager`] hands out [`MockDevice`]s from a fixed queue; every
//! device/manager call is appended to a shared [`CommandLog`] so tests can
//! assert exact command sequences. A device reports one scripted color and
//! can be told to fail reads or pushes, or to take real (tokio) time per
//! frame so tests can park an animation mid-pattern.

use std::sync::{Arc, Mutex};

use async_trait::async_trait;

use crate::device::{DeviceManager, IndicatorDevice};
use crate::error::DeviceError;
use crate::light::{Color, Pattern};

/// One observed device or manager call.
#[derive(Debug, Clone, PartialEq)]
pub(crate) enum Command {
    /// A pattern push, with the pattern that was pushed.
    Push(Pattern),
    /// The device was told to turn off.
    TurnOff,
    /// The device handle was closed.
    DeviceClosed,
    /// The manager released its resources.
    ManagerClosed,
}

/// Shared, ordered record of every command the mocks observed.
#[derive(Clone, Default)]
pub(crate) struct CommandLog {
    commands: Arc<Mutex<Vec<Command>>>,
}

impl CommandLog {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    fn record(&self, command: Command) {
        self.commands.lock().unwrap().push(command);
    }

    /// Copies the command history so far.
    pub(crate) fn commands(&self) -> Vec<Command> {
        self.commands.lock().unwrap().clone()
    }

    /// Drains the history, so a test can discard setup commands.
    pub(crate) fn take(&self) -> Vec<Command> {
        std::mem::take(&mut *self.commands.lock().unwrap())
    }
}

/// Scripted indicator device.
pub(crate) struct MockDevice {
    color: Color,
    fail_reads: bool,
    fail_pushes: bool,
    timed: bool,
    log: CommandLog,
}

impl MockDevice {
    pub(crate) fn new(log: CommandLog) -> Self {
        Self {
            color: Color::BLACK,
            fail_reads: false,
            fail_pushes: false,
            timed: false,
            log,
        }
    }

    /// Scripts the color every read reports.
    #[must_use]
    pub(crate) fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    /// Makes every color read fail.
    #[must_use]
    pub(crate) fn with_failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    /// Makes every pattern push fail (after being recorded).
    #[must_use]
    pub(crate) fn with_failing_pushes(mut self) -> Self {
        self.fail_pushes = true;
        self
    }

    /// Makes pushes sleep out each frame's hold time.
    #[must_use]
    pub(crate) fn timed(mut self) -> Self {
        self.timed = true;
        self
    }
}

#[async_trait]
impl IndicatorDevice for MockDevice {
    async fn current_color(&mut self) -> Result<Color, DeviceError> {
        if self.fail_reads {
            return Err(DeviceError::io("scripted read failure"));
        }
        Ok(self.color)
    }

    async fn push_pattern(&mut self, pattern: &Pattern) -> Result<(), DeviceError> {
        self.log.record(Command::Push(pattern.clone()));
        if self.fail_pushes {
            return Err(DeviceError::io("scripted push failure"));
        }
        if self.timed {
            for frame in pattern.frames() {
                tokio::time::sleep(frame.duration()).await;
            }
        }
        Ok(())
    }

    async fn turn_off(&mut self) -> Result<(), DeviceError> {
        self.log.record(Command::TurnOff);
        Ok(())
    }

    fn close(self) {
        self.log.record(Command::DeviceClosed);
    }
}

/// Scripted device manager with a fixed queue of devices to hand out.
pub(crate) struct MockManager {
    devices: Vec<MockDevice>,
    fail_discovery: bool,
    log: CommandLog,
}

impl MockManager {
    /// A manager that never finds anything.
    pub(crate) fn empty(log: CommandLog) -> Self {
        Self {
            devices: Vec::new(),
            fail_discovery: false,
            log,
        }
    }

    /// A manager that hands out the given device on first discovery.
    pub(crate) fn with_device(device: MockDevice, log: CommandLog) -> Self {
        Self::with_devices(vec![device], log)
    }

    /// A manager that hands out one queued device per discovery.
    pub(crate) fn with_devices(devices: Vec<MockDevice>, log: CommandLog) -> Self {
        Self {
            devices,
            fail_discovery: false,
            log,
        }
    }

    /// A manager whose discovery always errors.
    pub(crate) fn failing(log: CommandLog) -> Self {
        Self {
            devices: Vec::new(),
            fail_discovery: true,
            log,
        }
    }
}

impl DeviceManager for MockManager {
    type Device = MockDevice;

    fn discover_first(&mut self) -> Result<Option<MockDevice>, DeviceError> {
        if self.fail_discovery {
            return Err(DeviceError::io("scripted discovery failure"));
        }
        if self.devices.is_empty() {
            return Ok(None);
        }
        Ok(Some(self.devices.remove(0)))
    }

    fn close(&mut self) {
        self.log.record(Command::ManagerClosed);
    }
}
