//! # Light subscriber: event handlers onto an indicator device.
//!
//! [`LightSubscriber`] is the subscriber kind this crate ships for real:
//! every event handler forwards into the [`LightAnimator`], which compiles
//! it to a [`Pattern`](crate::Pattern) and pushes it to the device. The
//! subscriber itself holds no state beyond the engine.
//!
//! ## Rules
//! - Handlers never fail: animation errors are absorbed inside the engine,
//!   so a broken device cannot poison the dispatcher's view of this
//!   subscriber.
//! - `init`/`shutdown` drive the engine's device session; `is_ready`
//!   mirrors whether a device is attached.

use async_trait::async_trait;

use crate::device::DeviceManager;
use crate::error::SubscriberError;
use crate::light::LightAnimator;
use crate::subscribers::Subscribe;

/// Subscriber that renders events on an indicator light.
pub struct LightSubscriber<M: DeviceManager> {
    animator: LightAnimator<M>,
}

impl<M: DeviceManager> LightSubscriber<M> {
    /// Creates the subscriber around a device manager. No device is opened
    /// until `init` runs.
    pub fn new(manager: M) -> Self {
        Self {
            animator: LightAnimator::new(manager),
        }
    }
}

#[async_trait]
impl<M: DeviceManager> Subscribe for LightSubscriber<M> {
    async fn init(&self) -> Result<(), SubscriberError> {
        self.animator
            .init()
            .await
            .map_err(|err| SubscriberError::init(err.to_string()))
    }

    async fn shutdown(&self) -> Result<(), SubscriberError> {
        self.animator.shutdown().await;
        Ok(())
    }

    fn description(&self) -> &str {
        "indicator light"
    }

    fn is_ready(&self) -> bool {
        self.animator.is_ready()
    }

    async fn service_trouble(&self) -> Result<(), SubscriberError> {
        self.animator.service_trouble().await;
        Ok(())
    }

    async fn network_trouble(&self) -> Result<(), SubscriberError> {
        self.animator.network_trouble().await;
        Ok(())
    }

    async fn system_trouble(&self) -> Result<(), SubscriberError> {
        self.animator.system_trouble().await;
        Ok(())
    }

    async fn update_api_rate(&self, rate: f64) -> Result<(), SubscriberError> {
        self.animator.update_api_rate(rate).await;
        Ok(())
    }

    async fn upload_event(&self) -> Result<(), SubscriberError> {
        self.animator.upload_event().await;
        Ok(())
    }

    async fn db_operation_event(&self, success: bool) -> Result<(), SubscriberError> {
        self.animator.db_operation_event(success).await;
        Ok(())
    }

    async fn heartbeat(&self) -> Result<(), SubscriberError> {
        self.animator.heartbeat().await;
        Ok(())
    }

    async fn reset_state(&self) -> Result<(), SubscriberError> {
        self.animator.reset_state().await;
        Ok(())
    }
}
