use anyhow::Context;
use async_trait::async_trait;
use serde::Serialize;

use super::{DeliveryResult, NotificationSink};
use crate::services::notifications::whatsapp_link;

/// Posts each notification as JSON to an HTTP endpoint, e.g. a relay that
/// forwards to the WhatsApp Business API.
pub struct WebhookSink {
    url: String,
    client: reqwest::Client,
}

#[derive(Serialize)]
struct WebhookPayload<'a> {
    destination: &'a str,
    text: &'a str,
    link: String,
}

impl WebhookSink {
    pub fn new(url: String) -> Self {
        Self {
            url,
            client: reqwest::Client::new(),
        }
    }
}

#[async_trait]
impl NotificationSink for WebhookSink {
    async fn send(&self, destination: &str, text: &str) -> DeliveryResult {
        let payload = WebhookPayload {
            destination,
            text,
            link: whatsapp_link(destination, text),
        };

        self.client
            .post(&self.url)
            .json(&payload)
            .send()
            .await
            .context("failed to reach notification webhook")?
            .error_for_status()
            .context("notification webhook returned error")?;

        Ok(())
    }
}
