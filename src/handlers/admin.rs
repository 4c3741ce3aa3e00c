use std::convert::Infallible;
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, Query, State};
use axum::http::header;
use axum::response::sse::{Event, Sse};
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::{Deserialize, Serialize};
use tokio_stream::wrappers::BroadcastStream;
use tokio_stream::StreamExt;

use crate::errors::AppError;
use crate::handlers::auth::{AdminSession, SESSION_COOKIE};
use crate::models::{BookingRecord, NotificationRecord};
use crate::services::notifications::whatsapp_link;
use crate::services::sessions::{credentials_match, Role};
use crate::state::AppState;

// POST /api/admin/login
#[derive(Deserialize)]
pub struct LoginRequest {
    #[serde(default)]
    pub username: String,
    #[serde(default)]
    pub password: String,
}

pub async fn login(
    State(state): State<Arc<AppState>>,
    Json(body): Json<LoginRequest>,
) -> Result<Response, AppError> {
    if !credentials_match(
        &body.username,
        &body.password,
        &state.config.admin_username,
        &state.config.admin_password,
    ) {
        tracing::warn!(username = %body.username, "admin login failed");
        return Err(AppError::Unauthorized);
    }

    let token = state.sessions.start(Role::Admin);
    tracing::info!("admin login successful");

    let cookie = format!("{SESSION_COOKIE}={token}; Path=/; HttpOnly; SameSite=Lax");
    Ok((
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({"success": true, "token": token})),
    )
        .into_response())
}

// POST /api/admin/logout
pub async fn logout(State(state): State<Arc<AppState>>, session: AdminSession) -> Response {
    state.sessions.end(&session.token);

    let cookie = format!("{SESSION_COOKIE}=; Path=/; HttpOnly; SameSite=Lax; Max-Age=0");
    (
        [(header::SET_COOKIE, cookie)],
        Json(serde_json::json!({"success": true})),
    )
        .into_response()
}

// GET /api/admin/bookings
pub async fn get_bookings(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
) -> Json<Vec<BookingRecord>> {
    Json(state.ledger.list_all())
}

// PUT /api/admin/bookings/:id
#[derive(Deserialize)]
pub struct UpdateStatusRequest {
    #[serde(default)]
    pub status: String,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateStatusResponse {
    success: bool,
    booking: BookingRecord,
    #[serde(skip_serializing_if = "Option::is_none")]
    whatsapp_url: Option<String>,
}

pub async fn update_booking(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Path(id): Path<String>,
    Json(body): Json<UpdateStatusRequest>,
) -> Result<Json<UpdateStatusResponse>, AppError> {
    let (booking, notification) = state.ledger.update_status(&id, &body.status).await?;

    Ok(Json(UpdateStatusResponse {
        success: true,
        booking,
        whatsapp_url: notification.map(|n| whatsapp_link(&n.destination, &n.text)),
    }))
}

// GET /api/admin/notifications
pub async fn get_notifications(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
) -> Json<Vec<NotificationRecord>> {
    Json(state.notifier.log().all())
}

// GET /api/admin/notifications/events
#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventsQuery {
    pub last_id: Option<u64>,
}

pub async fn notification_events(
    State(state): State<Arc<AppState>>,
    _session: AdminSession,
    Query(query): Query<EventsQuery>,
) -> Sse<impl tokio_stream::Stream<Item = Result<Event, Infallible>>> {
    let log = state.notifier.log();

    // Subscribe before the catch-up read so nothing falls in between; the
    // live side skips ids the catch-up already delivered.
    let rx = log.subscribe();
    let last_id = query.last_id.unwrap_or(0);
    let catchup = log.since(last_id);
    let delivered = catchup.last().map(|r| r.id).unwrap_or(last_id);

    let catchup_stream = tokio_stream::iter(
        catchup
            .into_iter()
            .map(|record| Ok::<_, Infallible>(to_event(&record))),
    );

    let live_stream = BroadcastStream::new(rx).filter_map(move |result| match result {
        Ok(record) if record.id > delivered => Some(Ok::<_, Infallible>(to_event(&record))),
        Ok(_) => None,
        Err(tokio_stream::wrappers::errors::BroadcastStreamRecvError::Lagged(_)) => None,
    });

    let keepalive_stream = tokio_stream::StreamExt::map(
        tokio_stream::wrappers::IntervalStream::new(tokio::time::interval(Duration::from_secs(30))),
        |_| Ok::<_, Infallible>(Event::default().comment("keepalive")),
    );

    let combined = catchup_stream.chain(live_stream);
    Sse::new(StreamExt::merge(combined, keepalive_stream))
}

fn to_event(record: &NotificationRecord) -> Event {
    let data = serde_json::to_string(record).unwrap_or_default();
    Event::default()
        .id(record.id.to_string())
        .event("notification")
        .data(data)
}
