use async_trait::async_trait;

use super::{DeliveryResult, NotificationSink};
use crate::services::notifications::whatsapp_link;

/// Writes the message and its WhatsApp deep link to the log. Someone with
/// access to the logs opens the link to actually send it.
pub struct LogSink;

#[async_trait]
impl NotificationSink for LogSink {
    async fn send(&self, destination: &str, text: &str) -> DeliveryResult {
        tracing::info!(
            destination,
            link = %whatsapp_link(destination, text),
            "notification ready to send"
        );
        tracing::debug!(destination, text, "notification body");
        Ok(())
    }
}
