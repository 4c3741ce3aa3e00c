use axum::http::StatusCode;
use axum::Form;
use serde::Deserialize;

/// Instant payment notification fields posted by the gateway. Everything is
/// optional; the gateway is acknowledged whatever it sends.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct PaymentNotification {
    pub payment_status: Option<String>,
    pub amount: Option<String>,
    pub amount_gross: Option<String>,
    pub item_name: Option<String>,
    pub custom_str1: Option<String>,
    pub m_payment_id: Option<String>,
    pub pf_payment_id: Option<String>,
}

impl PaymentNotification {
    pub fn is_complete(&self) -> bool {
        self.payment_status
            .as_deref()
            .is_some_and(|s| s.eq_ignore_ascii_case("COMPLETE"))
    }
}

// POST /api/payment-notification
pub async fn payment_notification(
    payload: Option<Form<PaymentNotification>>,
) -> (StatusCode, &'static str) {
    let Some(Form(payment)) = payload else {
        tracing::warn!("unreadable payment notification, acknowledging anyway");
        return (StatusCode::OK, "OK");
    };

    tracing::info!(?payment, "payment notification received");

    if payment.is_complete() {
        tracing::info!(
            amount = payment.amount.as_deref().or(payment.amount_gross.as_deref()).unwrap_or(""),
            item_name = payment.item_name.as_deref().unwrap_or(""),
            booking_ref = payment.custom_str1.as_deref().unwrap_or(""),
            "payment completed"
        );
    }

    (StatusCode::OK, "OK")
}
