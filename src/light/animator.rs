//! # Device animation engine.
//!
//! [`LightAnimator`] owns exclusive access to one indicator device and
//! translates semantic operations (trouble indicators, heartbeat, rate
//! gradient, upload/DB flashes, reset) into [`Pattern`]s pushed to it.
//!
//! ## Architecture
//! ```text
//! animation op ──► try_lock(state) ──► build Pattern ──► play()
//!                    │ busy or no device                   │
//!                    └──► dropped silently                 ├─ select: push vs halt
//!                                                          │    halted → force off
//! init/shutdown,
//! reset, color  ──► lock(state).await ────────────────────►┘
//! ```
//!
//! ## Rules
//! - Animations never queue and never block the caller: if the state lock
//!   is held or no device is attached, the call is dropped on the floor.
//! - `reset_state`, `current_color`, `init` and `shutdown` are the only
//!   waiting operations; callers use them to force a known baseline.
//! - Every pattern push and explicit pause races the halt token. Shutdown
//!   fires the token before it waits for the state lock, so an in-flight
//!   animation turns the device off and bails out instead of finishing.
//! - Device errors are logged and swallowed; an error mid-operation aborts
//!   the operation's remaining steps.

use std::sync::RwLock;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::select;
use tokio::sync::{Mutex, MutexGuard};
use tokio_util::sync::CancellationToken;
use tracing::{info, warn};

use crate::device::{DeviceManager, IndicatorDevice};
use crate::error::DeviceError;
use crate::light::{Color, Pattern, effective_rate, traffic_light};

/// Baseline brightness for colors meant to stay lit.
const DEFAULT_BRIGHTNESS: f64 = 0.5;

/// Brightness for short, low-key flashes and pulses.
const DIM_BRIGHTNESS: f64 = 0.2;

/// Acknowledgment strobe played once a device is attached.
const ACK_STROBE_CYCLES: usize = 4;
const ACK_STROBE_MS: u64 = 250;

/// Total duration of the rate cross-fade.
const RATE_FADE: Duration = Duration::from_millis(2000);

/// Hold time between the rate transition cue and the fade itself.
const RATE_CUE_PAUSE: Duration = Duration::from_millis(50);

/// Everything the state lock protects: the manager and the open device.
struct DeviceState<M: DeviceManager> {
    manager: M,
    device: Option<M::Device>,
}

/// Exclusive animation engine over one indicator device.
///
/// All methods take `&self`; the engine is meant to live in an `Arc` shared
/// between the event subscriber and whoever drives its lifecycle.
pub struct LightAnimator<M: DeviceManager> {
    /// Serializes every device interaction. Try-locked by animations,
    /// awaited by lifecycle and reset.
    state: Mutex<DeviceState<M>>,
    /// Halt token for the current device session; swapped fresh on init,
    /// cancelled on shutdown. Sync lock so cancel never awaits.
    halt: RwLock<CancellationToken>,
    /// Mirrors `device.is_some()` for lock-free readiness checks.
    ready: AtomicBool,
}

impl<M: DeviceManager> LightAnimator<M> {
    /// Creates an engine with no device attached.
    pub fn new(manager: M) -> Self {
        Self {
            state: Mutex::new(DeviceState {
                manager,
                device: None,
            }),
            halt: RwLock::new(CancellationToken::new()),
            ready: AtomicBool::new(false),
        }
    }

    /// Discovers and opens a device, then plays the acknowledgment strobe.
    ///
    /// Finding no device is `Ok`: the engine stays not-ready and every
    /// animation becomes a silent no-op. A discovery error propagates. A
    /// strobe error also propagates, but the device stays attached and
    /// ready.
    pub async fn init(&self) -> Result<(), DeviceError> {
        *self.halt.write().unwrap() = CancellationToken::new();

        let mut state = self.state.lock().await;
        if state.device.is_some() {
            return Ok(());
        }

        match state.manager.discover_first()? {
            Some(mut device) => {
                self.ready.store(true, Ordering::SeqCst);
                info!("indicator device attached; playing acknowledgment strobe");

                let strobe = Pattern::blink(
                    Color::BLUE,
                    ACK_STROBE_MS,
                    ACK_STROBE_MS,
                    ACK_STROBE_CYCLES,
                );
                let halt = self.current_halt();
                let outcome = select! {
                    res = device.push_pattern(&strobe) => res,
                    _ = halt.cancelled() => Ok(()),
                };
                state.device = Some(device);
                outcome
            }
            None => {
                info!("no indicator device found; animations stay no-ops");
                Ok(())
            }
        }
    }

    /// Turns the device off, closes it, then closes the manager.
    ///
    /// Fires the halt token first, so an in-flight animation aborts instead
    /// of being waited out. Both releases happen even when the turn-off
    /// fails; afterwards the engine can `init` again from scratch.
    pub async fn shutdown(&self) {
        self.halt.read().unwrap().cancel();

        let mut state = self.state.lock().await;
        self.ready.store(false, Ordering::SeqCst);

        if let Some(mut device) = state.device.take() {
            if let Err(err) = device.turn_off().await {
                warn!(error = %err, "turn-off during shutdown failed");
            }
            device.close();
        }
        state.manager.close();
    }

    /// Whether a device is currently attached.
    pub fn is_ready(&self) -> bool {
        self.ready.load(Ordering::SeqCst)
    }

    /// The color the device shows right now; black when there is no device
    /// or the read fails.
    ///
    /// Waits for the state lock.
    pub async fn current_color(&self) -> Color {
        let mut state = self.state.lock().await;
        Self::read_color(&mut state).await
    }

    /// Five slow yellow blinks: a dependent service is misbehaving.
    pub async fn service_trouble(&self) {
        let Some(mut state) = self.try_claim() else {
            return;
        };
        let pattern = Pattern::blink(Color::YELLOW, 500, 200, 5);
        self.play(&mut state, &pattern).await;
    }

    /// Five slow red blinks: network connectivity is degraded.
    pub async fn network_trouble(&self) {
        let Some(mut state) = self.try_claim() else {
            return;
        };
        let pattern = Pattern::blink(Color::RED, 500, 200, 5);
        self.play(&mut state, &pattern).await;
    }

    /// Twenty fast red blinks: the most urgent indication there is.
    pub async fn system_trouble(&self) {
        let Some(mut state) = self.try_claim() else {
            return;
        };
        let pattern = Pattern::blink(Color::RED, 200, 200, 20);
        self.play(&mut state, &pattern).await;
    }

    /// Two pulse cycles signalling liveness.
    ///
    /// With a lit color the pulse dims and restores it, preserving context;
    /// from black it pulses a dim green on and off instead.
    pub async fn heartbeat(&self) {
        let Some(mut state) = self.try_claim() else {
            return;
        };
        let current = Self::read_color(&mut state).await;

        let mut pattern = Pattern::new();
        for _ in 0..2 {
            if current.is_black() {
                pattern
                    .push(Color::GREEN.with_brightness(DIM_BRIGHTNESS), 150)
                    .push(Color::BLACK, 150);
            } else {
                pattern
                    .push(current.with_brightness(DIM_BRIGHTNESS), 150)
                    .push(current, 150);
            }
        }
        self.play(&mut state, &pattern).await;
    }

    /// A shortening blue/yellow flicker, then back to the current color.
    pub async fn upload_event(&self) {
        let Some(mut state) = self.try_claim() else {
            return;
        };

        let mut pattern = Pattern::new();
        for i in (1u64..=4).rev() {
            let hold = 10 + i * 15;
            pattern
                .push(Color::BLUE.with_brightness(DIM_BRIGHTNESS), hold)
                .push(Color::YELLOW.with_brightness(DIM_BRIGHTNESS), hold);
        }
        pattern.push(Self::read_color(&mut state).await, 0);
        self.play(&mut state, &pattern).await;
    }

    /// A single dark blink then a dim outcome flash, then back to the
    /// current color. Deep sky blue for success, dark magenta for failure.
    pub async fn db_operation_event(&self, success: bool) {
        let Some(mut state) = self.try_claim() else {
            return;
        };

        let flash = if success {
            Color::DEEP_SKY_BLUE
        } else {
            Color::DARK_MAGENTA
        };
        let mut pattern = Pattern::new();
        pattern
            .push(Color::BLACK, 50)
            .push(flash.with_brightness(DIM_BRIGHTNESS), 50)
            .push(Self::read_color(&mut state).await, 0);
        self.play(&mut state, &pattern).await;
    }

    /// Cross-fades to the traffic-light color for `rate`.
    ///
    /// From a lit color the fade is announced first: a brief dim cue, then
    /// a fixed pause. The raw rate is normalized via [`effective_rate`];
    /// callers pass it through unclamped.
    pub async fn update_api_rate(&self, rate: f64) {
        let Some(mut state) = self.try_claim() else {
            return;
        };
        let current = Self::read_color(&mut state).await;

        if !current.is_black() {
            let cue = Pattern::solid(current.with_brightness(DEFAULT_BRIGHTNESS * 0.6));
            if !self.play(&mut state, &cue).await {
                return;
            }
            if !self.pause(&mut state, RATE_CUE_PAUSE).await {
                return;
            }
        }

        let target = traffic_light(effective_rate(rate), DEFAULT_BRIGHTNESS);
        let fade = Pattern::cross_fade(current, target, RATE_FADE);
        self.play(&mut state, &fade).await;
    }

    /// Turns the device off, waiting for any running animation to finish.
    ///
    /// The one animation allowed to block; callers use it to force a known
    /// baseline between independent operations.
    pub async fn reset_state(&self) {
        let mut state = self.state.lock().await;
        if let Some(device) = state.device.as_mut() {
            if let Err(err) = device.turn_off().await {
                warn!(error = %err, "reset turn-off failed");
            }
        }
    }

    /// Claims the engine for one animation, without waiting.
    ///
    /// `None` when the lock is held (an animation is in flight) or no
    /// device is attached. Either way the caller drops the animation.
    fn try_claim(&self) -> Option<MutexGuard<'_, DeviceState<M>>> {
        let state = self.state.try_lock().ok()?;
        if state.device.is_none() {
            return None;
        }
        Some(state)
    }

    /// Plays one pattern, racing the halt token.
    ///
    /// Returns `false` when the operation should not continue: the push
    /// failed (logged) or the halt fired (device forced off).
    async fn play(&self, state: &mut DeviceState<M>, pattern: &Pattern) -> bool {
        let halt = self.current_halt();

        let completed = {
            let Some(device) = state.device.as_mut() else {
                return false;
            };
            select! {
                res = device.push_pattern(pattern) => match res {
                    Ok(()) => Some(true),
                    Err(err) => {
                        warn!(error = %err, "pattern push failed");
                        Some(false)
                    }
                },
                _ = halt.cancelled() => None,
            }
        };

        match completed {
            Some(done) => done,
            None => {
                Self::force_off(state).await;
                false
            }
        }
    }

    /// Sleeps for `delay`, racing the halt token.
    ///
    /// Returns `false` (after forcing the device off) when halted.
    async fn pause(&self, state: &mut DeviceState<M>, delay: Duration) -> bool {
        let halt = self.current_halt();

        let sleep = tokio::time::sleep(delay);
        tokio::pin!(sleep);
        select! {
            _ = &mut sleep => true,
            _ = halt.cancelled() => {
                Self::force_off(state).await;
                false
            }
        }
    }

    /// Best-effort turn-off after a halted animation.
    async fn force_off(state: &mut DeviceState<M>) {
        if let Some(device) = state.device.as_mut() {
            if let Err(err) = device.turn_off().await {
                warn!(error = %err, "force-off after halt failed");
            }
        }
    }

    /// Current color with the black fallback on any failure.
    async fn read_color(state: &mut DeviceState<M>) -> Color {
        let Some(device) = state.device.as_mut() else {
            return Color::BLACK;
        };
        device.current_color().await.unwrap_or(Color::BLACK)
    }

    fn current_halt(&self) -> CancellationToken {
        self.halt.read().unwrap().clone()
    }
}
