use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sportscenter_core::booking::Booking;
use sportscenter_core::time_format;

use crate::{error::AppError, state::AppState};

// ============================================================================
// Request/Response Types
// ============================================================================

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookingDto {
    pub id: Uuid,
    pub member_id: Uuid,
    pub activity_id: Uuid,
    pub status: String,
    #[serde(with = "time_format")]
    pub booking_date: DateTime<Utc>,
    #[serde(default, with = "time_format::option")]
    pub cancellation_date: Option<DateTime<Utc>>,
    #[serde(with = "time_format")]
    pub created_at: DateTime<Utc>,
    #[serde(with = "time_format")]
    pub updated_at: DateTime<Utc>,
}

impl From<Booking> for BookingDto {
    fn from(booking: Booking) -> Self {
        BookingDto {
            id: booking.id,
            member_id: booking.member_id,
            activity_id: booking.activity_id,
            // Defensive default: an unset status renders as CONFIRMED
            status: booking
                .status
                .map(|s| s.as_str().to_string())
                .unwrap_or_else(|| "CONFIRMED".to_string()),
            booking_date: booking.booking_date,
            cancellation_date: booking.cancellation_date,
            created_at: booking.created_at,
            updated_at: booking.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateBookingRequest {
    pub member_id: Uuid,
    pub activity_id: Uuid,
    /// Accepted for wire compatibility and then discarded: the server is
    /// the sole authority over the initial status.
    #[serde(default)]
    pub status: Option<String>,
}

// ============================================================================
// Routes & Handlers
// ============================================================================

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/bookings", post(create_booking).get(list_bookings))
        .route("/bookings/member/{member_id}", get(list_by_member))
        .route("/bookings/activity/{activity_id}", get(list_by_activity))
        .route("/bookings/id/{id}", get(get_booking))
        .route("/bookings/{id}/cancel", put(cancel_booking))
        .route("/bookings/{id}", delete(delete_booking))
}

/// POST /bookings
async fn create_booking(
    State(state): State<AppState>,
    Json(req): Json<CreateBookingRequest>,
) -> Result<impl IntoResponse, AppError> {
    if req.status.is_some() {
        tracing::debug!("Ignoring client-supplied booking status");
    }

    let booking = state.bookings.create(req.member_id, req.activity_id).await?;
    Ok((StatusCode::CREATED, Json(BookingDto::from(booking))))
}

/// GET /bookings
async fn list_bookings(State(state): State<AppState>) -> Result<Json<Vec<BookingDto>>, AppError> {
    let bookings = state.bookings.list_all().await?;
    Ok(Json(bookings.into_iter().map(BookingDto::from).collect()))
}

/// GET /bookings/member/:member_id
async fn list_by_member(
    State(state): State<AppState>,
    Path(member_id): Path<Uuid>,
) -> Result<Json<Vec<BookingDto>>, AppError> {
    let bookings = state.bookings.list_by_member(member_id).await?;
    Ok(Json(bookings.into_iter().map(BookingDto::from).collect()))
}

/// GET /bookings/activity/:activity_id
async fn list_by_activity(
    State(state): State<AppState>,
    Path(activity_id): Path<Uuid>,
) -> Result<Json<Vec<BookingDto>>, AppError> {
    let bookings = state.bookings.list_by_activity(activity_id).await?;
    Ok(Json(bookings.into_iter().map(BookingDto::from).collect()))
}

/// GET /bookings/id/:id
async fn get_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingDto>, AppError> {
    let booking = state.bookings.get(id).await?;
    Ok(Json(BookingDto::from(booking)))
}

/// PUT /bookings/:id/cancel
async fn cancel_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<BookingDto>, AppError> {
    let booking = state.bookings.cancel(id).await?;
    Ok(Json(BookingDto::from(booking)))
}

/// DELETE /bookings/:id
async fn delete_booking(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.bookings.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
