//! # Example: console_light
//!
//! Drives the full pipeline with a fake indicator light that renders to the
//! terminal instead of USB hardware.
//!
//! Shows how to:
//! - Implement [`DeviceManager`] / [`IndicatorDevice`] for your own hardware.
//! - Wire a [`LightSubscriber`] and a [`LogSubscriber`] into the notifier.
//! - Publish events and watch the resulting animations.
//!
//! ## Flow
//! ```text
//! main ──► EventNotifier::new()
//!     ├─► add_and_init_subscriber(LogSubscriber)
//!     ├─► add_and_init_subscriber(LightSubscriber<ConsoleManager>)
//!     │       └─► init: discover ConsoleDevice, blue hello strobe
//!     ├─► publish: heartbeat / service_trouble / db / rate / upload
//!     │       └─► LightAnimator plays patterns on the console "LED"
//!     └─► shutdown: halt animation, light off, device + manager closed
//! ```
//!
//! ## Run
//! ```bash
//! cargo run --example console_light
//! ```
//! The cell on the left is the live LED (needs a truecolor terminal).

use std::io::{self, Write};
use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use blinkbus::{
    Color, DeviceError, DeviceManager, EventNotifier, IndicatorDevice, LightSubscriber,
    LogSubscriber, NotifierConfig, Pattern,
};

/// Fake indicator light: renders the current color as a terminal cell.
struct ConsoleDevice {
    color: Color,
}

impl ConsoleDevice {
    fn render(&self) {
        let Color { r, g, b } = self.color;
        print!("\r  \x1b[48;2;{r};{g};{b}m      \x1b[0m  #{r:02X}{g:02X}{b:02X}  ");
        let _ = io::stdout().flush();
    }
}

#[async_trait]
impl IndicatorDevice for ConsoleDevice {
    async fn current_color(&mut self) -> Result<Color, DeviceError> {
        Ok(self.color)
    }

    async fn push_pattern(&mut self, pattern: &Pattern) -> Result<(), DeviceError> {
        for frame in pattern.frames() {
            self.color = frame.color;
            self.render();
            tokio::time::sleep(frame.duration()).await;
        }
        Ok(())
    }

    async fn turn_off(&mut self) -> Result<(), DeviceError> {
        self.color = Color::BLACK;
        self.render();
        Ok(())
    }

    fn close(self) {
        println!("\n[device] closed");
    }
}

/// "Bus" that always finds exactly one console device.
struct ConsoleManager;

impl DeviceManager for ConsoleManager {
    type Device = ConsoleDevice;

    fn discover_first(&mut self) -> Result<Option<ConsoleDevice>, DeviceError> {
        Ok(Some(ConsoleDevice {
            color: Color::BLACK,
        }))
    }

    fn close(&mut self) {
        println!("[manager] closed");
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "warn".into()),
        )
        .init();

    println!("console_light demo\n");

    let notifier = EventNotifier::new(NotifierConfig::default());
    notifier
        .add_and_init_subscriber(Arc::new(LogSubscriber))
        .await
        .add_and_init_subscriber(Arc::new(LightSubscriber::new(ConsoleManager)))
        .await;

    for (description, ready) in notifier.subscribers() {
        println!("[notifier] subscriber: {description} (ready: {ready})");
    }

    // Each publish returns immediately; the pauses just keep the console
    // animations from landing on a busy engine and being dropped.
    let script: &[(&str, fn(&EventNotifier))] = &[
        ("heartbeat", |n| n.heartbeat()),
        ("service trouble", |n| n.service_trouble()),
        ("db write ok", |n| n.db_operation_event(true)),
        ("db write failed", |n| n.db_operation_event(false)),
        ("upload", |n| n.upload_event()),
        ("api rate 0.85", |n| n.update_api_rate(0.85)),
        ("api rate 0.15", |n| n.update_api_rate(0.15)),
        ("reset", |n| n.reset_state()),
    ];
    for (label, publish) in script {
        println!("\n[publish] {label}");
        publish(&notifier);
        tokio::time::sleep(Duration::from_millis(4200)).await;
    }

    println!("\n[shutdown] draining deliveries and closing the light");
    notifier.shutdown().await;

    println!("finished");
    Ok(())
}
