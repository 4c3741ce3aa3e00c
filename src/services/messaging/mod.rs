pub mod log;
pub mod webhook;

use async_trait::async_trait;

pub type DeliveryResult = anyhow::Result<()>;

/// Delivers a formatted message to a destination (a digits-only phone number).
#[async_trait]
pub trait NotificationSink: Send + Sync {
    async fn send(&self, destination: &str, text: &str) -> DeliveryResult;
}
