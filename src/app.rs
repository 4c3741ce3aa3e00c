use std::sync::Arc;

use axum::routing::{get, post, put};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::handlers;
use crate::state::AppState;

pub fn router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/health", get(handlers::health::health))
        .route("/api/bookings", post(handlers::bookings::create_booking))
        .route(
            "/api/available-slots/:date",
            get(handlers::bookings::available_slots),
        )
        .route("/api/admin/login", post(handlers::admin::login))
        .route("/api/admin/logout", post(handlers::admin::logout))
        .route("/api/admin/bookings", get(handlers::admin::get_bookings))
        .route(
            "/api/admin/bookings/:id",
            put(handlers::admin::update_booking),
        )
        .route(
            "/api/admin/notifications",
            get(handlers::admin::get_notifications),
        )
        .route(
            "/api/admin/notifications/events",
            get(handlers::admin::notification_events),
        )
        .route(
            "/api/payment-notification",
            post(handlers::payment::payment_notification),
        )
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
