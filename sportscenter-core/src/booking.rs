use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;
use uuid::Uuid;

use crate::repository::BookingRepository;
use crate::{CoreError, CoreResult};

/// Message context for a missing booking on read/cancel.
pub const BOOKING_NOT_FOUND: &str = "Booking not found";
/// Message context for a missing booking on delete. Kept distinct from
/// [`BOOKING_NOT_FOUND`] so callers can tell which path rejected the id.
pub const BOOKING_MISSING_ON_DELETE: &str = "Booking does not exist";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Booking {
    pub id: Uuid,
    pub member_id: Uuid,
    pub activity_id: Uuid,
    /// Always `Some` on every path this service writes; kept optional so
    /// the read side can normalize an unset status to CONFIRMED instead
    /// of failing on a malformed stored record.
    pub status: Option<BookingStatus>,
    pub booking_date: DateTime<Utc>,
    pub cancellation_date: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum BookingStatus {
    Confirmed,
    Cancelled,
}

impl BookingStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            BookingStatus::Confirmed => "CONFIRMED",
            BookingStatus::Cancelled => "CANCELLED",
        }
    }
}

/// The booking lifecycle: the only component with multi-step rules.
///
/// Bookings are created CONFIRMED, may transition once (or, unguarded,
/// repeatedly) to CANCELLED, and may be hard-deleted from either state.
/// There is no CANCELLED -> CONFIRMED path. Foreign ids are opaque: this
/// service never checks them against the member or activity directories.
#[derive(Clone)]
pub struct BookingService {
    repo: Arc<dyn BookingRepository>,
}

impl BookingService {
    pub fn new(repo: Arc<dyn BookingRepository>) -> Self {
        Self { repo }
    }

    /// Creates a booking. The initial status is server-controlled:
    /// whatever status the caller supplied has already been discarded at
    /// the transport boundary, and CONFIRMED is assigned here explicitly.
    pub async fn create(&self, member_id: Uuid, activity_id: Uuid) -> CoreResult<Booking> {
        let now = Utc::now();
        let booking = Booking {
            // Placeholder: the store assigns the real id on insert.
            id: Uuid::nil(),
            member_id,
            activity_id,
            status: Some(BookingStatus::Confirmed),
            booking_date: now,
            cancellation_date: None,
            created_at: now,
            updated_at: now,
        };

        let saved = self.repo.insert(booking).await?;
        info!("Booking confirmed: {}", saved.id);
        Ok(saved)
    }

    pub async fn get(&self, id: Uuid) -> CoreResult<Booking> {
        self.repo
            .find(id)
            .await?
            .ok_or(CoreError::not_found(BOOKING_NOT_FOUND, id))
    }

    pub async fn list_all(&self) -> CoreResult<Vec<Booking>> {
        Ok(self.repo.find_all().await?)
    }

    pub async fn list_by_member(&self, member_id: Uuid) -> CoreResult<Vec<Booking>> {
        Ok(self.repo.find_by_member(member_id).await?)
    }

    pub async fn list_by_activity(&self, activity_id: Uuid) -> CoreResult<Vec<Booking>> {
        Ok(self.repo.find_by_activity(activity_id).await?)
    }

    /// Transitions a booking to CANCELLED and stamps the cancellation
    /// time. Not guarded against repetition: cancelling an already
    /// cancelled booking re-runs the transition and overwrites
    /// `cancellation_date` with a fresh timestamp.
    pub async fn cancel(&self, id: Uuid) -> CoreResult<Booking> {
        let mut booking = self
            .repo
            .find(id)
            .await?
            .ok_or(CoreError::not_found(BOOKING_NOT_FOUND, id))?;

        let now = Utc::now();
        booking.status = Some(BookingStatus::Cancelled);
        booking.cancellation_date = Some(now);
        booking.updated_at = now;

        let updated = self.repo.update(booking).await?;
        info!("Booking cancelled: {}", id);
        Ok(updated)
    }

    /// Hard delete, allowed from either state. Existence is checked
    /// first so the failure carries its own message context.
    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        if !self.repo.exists(id).await? {
            return Err(CoreError::not_found(BOOKING_MISSING_ON_DELETE, id));
        }
        self.repo.delete(id).await?;
        info!("Booking deleted: {}", id);
        Ok(())
    }
}
