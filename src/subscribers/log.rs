//! # Simple logging subscriber for debugging and demos.
//!
//! [`LogSubscriber`] writes every event to the structured log at info
//! level. This is primarily useful for development, debugging, and as the
//! smallest possible [`Subscribe`] reference implementation.
//!
//! ## Output format
//! ```text
//! event=service_trouble
//! event=api_rate rate=0.82
//! event=db_operation success=true
//! event=reset_state
//! ```
//!
//! ## Example
//! ```no_run
//! # use blinkbus::{EventNotifier, LogSubscriber};
//! # use std::sync::Arc;
//! # async fn demo() {
//! let notifier = EventNotifier::default();
//! notifier.add_and_init_subscriber(Arc::new(LogSubscriber)).await;
//! # }
//! ```

use async_trait::async_trait;
use tracing::info;

use crate::error::SubscriberError;
use crate::events::Event;
use crate::subscribers::Subscribe;

/// Structured-log subscriber.
///
/// Overrides the router directly instead of the per-event handlers: it
/// wants the tagged event, not its meaning. Always ready, nothing to
/// initialize.
pub struct LogSubscriber;

#[async_trait]
impl Subscribe for LogSubscriber {
    fn description(&self) -> &str {
        "event log"
    }

    async fn on_event(&self, event: &Event) -> Result<(), SubscriberError> {
        match *event {
            Event::ApiRate { rate } => info!(event = event.as_label(), rate),
            Event::DbOperation { success } => info!(event = event.as_label(), success),
            _ => info!(event = event.as_label()),
        }
        Ok(())
    }
}
