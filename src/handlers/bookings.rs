use std::sync::Arc;

use axum::extract::{Path, State};
use axum::Json;
use serde::Serialize;

use crate::errors::AppError;
use crate::models::availability;
use crate::models::{BookingRecord, NewBooking, SlotAvailability};
use crate::services::notifications::whatsapp_link;
use crate::state::AppState;

// POST /api/bookings
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingResponse {
    success: bool,
    message: String,
    whatsapp_url: String,
    booking: BookingRecord,
}

pub async fn create_booking(
    State(state): State<Arc<AppState>>,
    Json(body): Json<NewBooking>,
) -> Result<Json<CreateBookingResponse>, AppError> {
    let (booking, notification) = state.ledger.create(body).await?;

    Ok(Json(CreateBookingResponse {
        success: true,
        message: "Booking submitted successfully! WhatsApp notification sent to admin."
            .to_string(),
        whatsapp_url: whatsapp_link(&notification.destination, &notification.text),
        booking,
    }))
}

// GET /api/available-slots/:date
pub async fn available_slots(
    State(state): State<Arc<AppState>>,
    Path(date): Path<String>,
) -> Result<Json<SlotAvailability>, AppError> {
    let date = availability::parse_date(&date).map_err(|_| AppError::validation("Invalid date"))?;
    Ok(Json(state.ledger.available_slots_for(date)))
}
