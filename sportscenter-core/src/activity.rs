use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::repository::ActivityRepository;
use crate::{CoreError, CoreResult};

pub const ACTIVITY_NOT_FOUND: &str = "Activity not found";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Activity {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub coach: String,
    pub max_capacity: i32,
    // Carried but never reconciled against bookings; capacity
    // enforcement is tracked separately and deliberately absent here.
    pub current_participants: i32,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields a caller supplies when creating or updating an activity.
#[derive(Debug, Clone)]
pub struct ActivityInput {
    pub name: String,
    pub description: String,
    pub coach: String,
    pub max_capacity: i32,
    pub current_participants: Option<i32>,
    pub start_time: DateTime<Utc>,
    pub end_time: DateTime<Utc>,
}

/// Plain CRUD over the activity directory, no business rules.
#[derive(Clone)]
pub struct ActivityService {
    repo: Arc<dyn ActivityRepository>,
}

impl ActivityService {
    pub fn new(repo: Arc<dyn ActivityRepository>) -> Self {
        Self { repo }
    }

    pub async fn create(&self, input: ActivityInput) -> CoreResult<Activity> {
        let now = Utc::now();
        let activity = Activity {
            id: Uuid::nil(),
            name: input.name,
            description: input.description,
            coach: input.coach,
            max_capacity: input.max_capacity,
            current_participants: input.current_participants.unwrap_or(0),
            start_time: input.start_time,
            end_time: input.end_time,
            created_at: now,
            updated_at: now,
        };
        Ok(self.repo.insert(activity).await?)
    }

    pub async fn get(&self, id: Uuid) -> CoreResult<Activity> {
        self.repo
            .find(id)
            .await?
            .ok_or(CoreError::not_found(ACTIVITY_NOT_FOUND, id))
    }

    pub async fn list_all(&self) -> CoreResult<Vec<Activity>> {
        Ok(self.repo.find_all().await?)
    }

    /// Full-field rewrite, except the participant counter is only
    /// overwritten when the caller supplies one.
    pub async fn update(&self, id: Uuid, input: ActivityInput) -> CoreResult<Activity> {
        let mut activity = self
            .repo
            .find(id)
            .await?
            .ok_or(CoreError::not_found(ACTIVITY_NOT_FOUND, id))?;

        activity.name = input.name;
        activity.description = input.description;
        activity.coach = input.coach;
        activity.max_capacity = input.max_capacity;
        if let Some(participants) = input.current_participants {
            activity.current_participants = participants;
        }
        activity.start_time = input.start_time;
        activity.end_time = input.end_time;
        activity.updated_at = Utc::now();

        Ok(self.repo.update(activity).await?)
    }

    pub async fn delete(&self, id: Uuid) -> CoreResult<()> {
        if !self.repo.exists(id).await? {
            return Err(CoreError::not_found(ACTIVITY_NOT_FOUND, id));
        }
        self.repo.delete(id).await?;
        Ok(())
    }
}
