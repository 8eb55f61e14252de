use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    routing::get,
    Json, Router,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use sportscenter_core::activity::{Activity, ActivityInput};
use sportscenter_core::time_format;

use crate::{error::AppError, state::AppState};

#[derive(Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityDto {
    pub id: Uuid,
    pub name: String,
    pub description: String,
    pub coach: String,
    pub max_capacity: i32,
    pub current_participants: i32,
    #[serde(with = "time_format")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "time_format")]
    pub end_time: DateTime<Utc>,
}

impl From<Activity> for ActivityDto {
    fn from(activity: Activity) -> Self {
        ActivityDto {
            id: activity.id,
            name: activity.name,
            description: activity.description,
            coach: activity.coach,
            max_capacity: activity.max_capacity,
            current_participants: activity.current_participants,
            start_time: activity.start_time,
            end_time: activity.end_time,
        }
    }
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ActivityRequest {
    pub name: String,
    pub description: String,
    pub coach: String,
    pub max_capacity: i32,
    #[serde(default)]
    pub current_participants: Option<i32>,
    #[serde(with = "time_format")]
    pub start_time: DateTime<Utc>,
    #[serde(with = "time_format")]
    pub end_time: DateTime<Utc>,
}

impl From<ActivityRequest> for ActivityInput {
    fn from(req: ActivityRequest) -> Self {
        ActivityInput {
            name: req.name,
            description: req.description,
            coach: req.coach,
            max_capacity: req.max_capacity,
            current_participants: req.current_participants,
            start_time: req.start_time,
            end_time: req.end_time,
        }
    }
}

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/activities", get(list_activities).post(create_activity))
        .route(
            "/activities/{id}",
            get(get_activity).put(update_activity).delete(delete_activity),
        )
}

/// POST /activities
async fn create_activity(
    State(state): State<AppState>,
    Json(req): Json<ActivityRequest>,
) -> Result<impl IntoResponse, AppError> {
    let activity = state.activities.create(req.into()).await?;
    Ok((StatusCode::CREATED, Json(ActivityDto::from(activity))))
}

/// GET /activities/:id
async fn get_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<ActivityDto>, AppError> {
    let activity = state.activities.get(id).await?;
    Ok(Json(ActivityDto::from(activity)))
}

/// GET /activities
async fn list_activities(
    State(state): State<AppState>,
) -> Result<Json<Vec<ActivityDto>>, AppError> {
    let activities = state.activities.list_all().await?;
    Ok(Json(activities.into_iter().map(ActivityDto::from).collect()))
}

/// PUT /activities/:id
async fn update_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<ActivityRequest>,
) -> Result<Json<ActivityDto>, AppError> {
    let activity = state.activities.update(id, req.into()).await?;
    Ok(Json(ActivityDto::from(activity)))
}

/// DELETE /activities/:id
async fn delete_activity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<StatusCode, AppError> {
    state.activities.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
